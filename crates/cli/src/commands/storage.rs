// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use anyhow::Result;
use clap::{ArgMatches, Command};

use super::{
    command::{CommandDefinition, output_arg, work_dir_arg},
    util::{load_intermediate_schema, output},
};
use crate::util::write_json;

pub struct StorageCommandDefinition {}

impl CommandDefinition for StorageCommandDefinition {
    fn command(&self) -> Command {
        Command::new("storage")
            .about("Print the tables, columns and relations derived from the schema as JSON")
            .arg(work_dir_arg())
            .arg(output_arg())
    }

    fn execute(&self, matches: &ArgMatches) -> Result<()> {
        let schema = load_intermediate_schema(matches)?;
        let storage_model = storage_model_builder::build(&schema)?;

        write_json(output(matches).as_deref(), &storage_model)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::util::test_support::{run_to_json, write_schema};

    #[test]
    fn prints_storage_model() {
        let dir = tempfile::tempdir().unwrap();
        write_schema(
            dir.path(),
            "schema.graphql",
            r#"
            type Book {
              id: ID!
              author: Author @belongsTo
            }

            type Author {
              id: ID!
              books: [Book] @hasMany
            }
            "#,
        );

        let json = run_to_json(&StorageCommandDefinition {}, dir.path()).unwrap();

        let book_columns: Vec<_> = json["tables"]["books"]["columns"]
            .as_array()
            .unwrap()
            .iter()
            .map(|column| column["name"].as_str().unwrap())
            .collect();
        assert_eq!(book_columns, vec!["id", "author_id"]);
        assert_eq!(json["relations"].as_array().unwrap().len(), 2);
    }
}
