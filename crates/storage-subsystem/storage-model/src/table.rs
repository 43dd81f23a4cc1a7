// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use serde::{Deserialize, Serialize};

use crate::column::StorageColumn;

/// A table such as "concerts", or a join table such as "artists_concerts".
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct StorageTable {
    pub name: String,
    /// The entity stored in this table; `None` for join tables
    pub entity: Option<String>,
    pub columns: Vec<StorageColumn>,
}

impl StorageTable {
    pub fn column(&self, name: &str) -> Option<&StorageColumn> {
        self.columns.iter().find(|column| column.name == name)
    }

    pub fn pk_columns(&self) -> impl Iterator<Item = &StorageColumn> {
        self.columns.iter().filter(|column| column.is_pk)
    }

    pub fn is_join_table(&self) -> bool {
        self.entity.is_none()
    }
}
