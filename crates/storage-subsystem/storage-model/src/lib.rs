// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

//! Tables, columns and relations derived from the intermediate model.
//!
//! This is a description only: nothing here talks to a database.

mod column;
mod relation;
mod table;

pub use column::{ColumnReference, ColumnType, StorageColumn};
pub use relation::{RelationLink, StorageRelation};
pub use table::StorageTable;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct StorageModel {
    /// Tables keyed by their name. Includes join tables for `belongsToMany` associations.
    pub tables: IndexMap<String, StorageTable>,
    /// One entry per association field
    pub relations: Vec<StorageRelation>,
}

impl StorageModel {
    pub fn table(&self, name: &str) -> Option<&StorageTable> {
        self.tables.get(name)
    }

    pub fn entity_table(&self, entity: &str) -> Option<&StorageTable> {
        self.tables
            .values()
            .find(|table| table.entity.as_deref() == Some(entity))
    }

    pub fn relation(&self, entity: &str, field: &str) -> Option<&StorageRelation> {
        self.relations
            .iter()
            .find(|relation| relation.entity == entity && relation.field == field)
    }
}
