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
use core_model::naming::OperationNames;
use indexmap::IndexMap;

use super::{
    command::{CommandDefinition, output_arg, work_dir_arg},
    util::{load_intermediate_schema, output},
};
use crate::util::write_json;

pub struct OperationsCommandDefinition {}

impl CommandDefinition for OperationsCommandDefinition {
    fn command(&self) -> Command {
        Command::new("operations")
            .about("Print the names of the query and mutation operations for each entity as JSON")
            .arg(work_dir_arg())
            .arg(output_arg())
    }

    fn execute(&self, matches: &ArgMatches) -> Result<()> {
        let schema = load_intermediate_schema(matches)?;

        let operations: IndexMap<&str, OperationNames> = schema
            .iter()
            .map(|entity| (entity.name.as_str(), OperationNames::for_entity(entity)))
            .collect();

        write_json(output(matches).as_deref(), &operations)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::commands::util::test_support::{run_to_json, write_schema};

    #[test]
    fn prints_operation_names() {
        let dir = tempfile::tempdir().unwrap();
        write_schema(
            dir.path(),
            "schema.graphql",
            r#"
            type Person {
              name: String
            }

            type Concert @plural(name: "Shows") {
              title: String
            }
            "#,
        );

        let json = run_to_json(&OperationsCommandDefinition {}, dir.path()).unwrap();

        assert_eq!(
            json,
            json!({
                "Person": {
                    "get": "person",
                    "list": "people",
                    "create": "createPerson",
                    "update": "updatePerson",
                    "delete": "deletePerson"
                },
                "Concert": {
                    "get": "concert",
                    "list": "shows",
                    "create": "createConcert",
                    "update": "updateConcert",
                    "delete": "deleteConcert"
                }
            })
        );
    }
}
