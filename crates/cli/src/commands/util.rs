// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use std::path::PathBuf;

use anyhow::Result;
use clap::ArgMatches;
use core_model::types::IntermediateSchema;
use tracing::debug;

use crate::config::load_config;

use super::command::get;

/// The `workDir` argument made absolute, or the current directory if absent.
pub(crate) fn work_dir(matches: &ArgMatches) -> Result<PathBuf> {
    let work_dir = match get::<PathBuf>(matches, "workDir") {
        Some(work_dir) => std::path::absolute(work_dir)?,
        None => std::env::current_dir()?,
    };

    Ok(work_dir)
}

/// Load the configuration and schema files of the work directory and translate them.
pub(crate) fn load_intermediate_schema(matches: &ArgMatches) -> Result<IntermediateSchema> {
    let work_dir = work_dir(matches)?;
    let config = load_config(&work_dir)?;

    debug!("Loading schema from '{}'", work_dir.display());

    let schema = schema_loader::load_schema(&work_dir, &config.loader, &config.translation)?;

    Ok(schema)
}

pub(crate) fn output(matches: &ArgMatches) -> Option<PathBuf> {
    get(matches, "output")
}

#[cfg(test)]
pub(crate) mod test_support {
    use std::path::{Path, PathBuf};

    use clap::ArgMatches;

    use crate::commands::command::CommandDefinition;

    pub(crate) fn write_schema(dir: &Path, file_name: &str, content: &str) {
        std::fs::write(dir.join(file_name), content).unwrap();
    }

    /// Run `command` against `work_dir`, returning the parsed JSON it wrote.
    pub(crate) fn run_to_json(
        command: &dyn CommandDefinition,
        work_dir: &Path,
    ) -> anyhow::Result<serde_json::Value> {
        let output: PathBuf = work_dir.join("output.json");
        let matches: ArgMatches = command.command().try_get_matches_from([
            command.command().get_name().to_string(),
            work_dir.display().to_string(),
            "--output".to_string(),
            output.display().to_string(),
        ])?;

        command.execute(&matches)?;

        let json = std::fs::read_to_string(output)?;
        Ok(serde_json::from_str(&json)?)
    }
}
