// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use std::process::ExitCode;

use anyhow::Result;
use colored::Colorize;

use commands::{
    command::{CommandDefinition, SubcommandDefinition},
    model::ModelCommandDefinition,
    operations::OperationsCommandDefinition,
    storage::StorageCommandDefinition,
};

mod commands;
mod config;
mod logging;
mod util;

fn main() -> ExitCode {
    logging::init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{} {err}", "Error:".red().bold());
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<()> {
    let subcommand_definition = root_command_definition();

    let command = subcommand_definition
        .command()
        .version(env!("CARGO_PKG_VERSION"));

    let matches = command.get_matches();

    subcommand_definition.execute(&matches)
}

fn root_command_definition() -> SubcommandDefinition {
    SubcommandDefinition::new(
        "gqlstore",
        "Translate GraphQL schema files into a storage model",
        vec![
            Box::new(ModelCommandDefinition {}),
            Box::new(StorageCommandDefinition {}),
            Box::new(OperationsCommandDefinition {}),
        ],
    )
}
