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

pub struct ModelCommandDefinition {}

impl CommandDefinition for ModelCommandDefinition {
    fn command(&self) -> Command {
        Command::new("model")
            .about("Print the entities, fields and associations of the schema as JSON")
            .arg(work_dir_arg())
            .arg(output_arg())
    }

    fn execute(&self, matches: &ArgMatches) -> Result<()> {
        let schema = load_intermediate_schema(matches)?;

        write_json(output(matches).as_deref(), &schema)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::commands::util::test_support::{run_to_json, write_schema};

    #[test]
    fn prints_intermediate_model() {
        let dir = tempfile::tempdir().unwrap();
        write_schema(
            dir.path(),
            "schema.graphql",
            r#"
            type Book {
              title: String!
              """hasMany"""
              authors: [Author]!
            }

            type Author {
              name: String
            }
            "#,
        );

        let json = run_to_json(&ModelCommandDefinition {}, dir.path()).unwrap();

        assert_eq!(
            json["Book"],
            json!({
                "name": "Book",
                "pluralName": "Books",
                "fields": {
                    "title": {
                        "name": "title",
                        "type": "String",
                        "nullable": false,
                        "list": false,
                        "association": null
                    },
                    "authors": {
                        "name": "authors",
                        "type": "Author",
                        "nullable": false,
                        "list": true,
                        "association": "hasMany"
                    }
                }
            })
        );
    }

    #[test]
    fn description_fallback_can_be_disabled() {
        let dir = tempfile::tempdir().unwrap();
        write_schema(
            dir.path(),
            "gqlstore.toml",
            "[translation]\ndescription-fallback = false\n",
        );
        write_schema(
            dir.path(),
            "schema.graphql",
            r#"
            type Book {
              """belongsTo"""
              author: Author
            }

            type Author {
              name: String
            }
            "#,
        );

        let err = run_to_json(&ModelCommandDefinition {}, dir.path()).unwrap_err();

        assert!(
            err.to_string()
                .contains("non-primitive data types require an association type")
        );
    }
}
