// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum StorageModelBuildingError {
    #[error("{entity}.{field}: refers to unknown entity '{target}'")]
    UnknownEntity {
        entity: String,
        field: String,
        target: String,
    },

    #[error("{entity}.{field}: type '{type_name}' cannot be stored in a column")]
    UnknownColumnType {
        entity: String,
        field: String,
        type_name: String,
    },

    #[error(
        "{entity}.{field}: cannot tell which association of '{target}' is the other side of this one"
    )]
    AmbiguousAssociation {
        entity: String,
        field: String,
        target: String,
    },

    #[error("{entity}.{field}: a primary key cannot be a list")]
    InvalidPrimaryKey { entity: String, field: String },

    #[error("Column '{column}' of table '{table}' is defined more than once")]
    ColumnConflict { table: String, column: String },

    #[error("Table '{table}' is used for more than one purpose")]
    DuplicateTable { table: String },
}
