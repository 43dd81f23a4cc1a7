// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use std::collections::HashMap;

use core_model::types::IntermediateSchema;
use indexmap::IndexMap;
use storage_model::{
    ColumnReference, ColumnType, StorageColumn, StorageModel, StorageRelation, StorageTable,
};
use tracing::{debug, instrument};

use crate::{error::StorageModelBuildingError, relation_builder, table_builder};

/// Build the storage model for a translated schema.
#[instrument(
    name = "storage_model_builder::build",
    skip_all,
    fields(entities = schema.len())
)]
pub fn build(schema: &IntermediateSchema) -> Result<StorageModel, StorageModelBuildingError> {
    let mut building = StorageModelBuilding::default();

    table_builder::build(schema, &mut building)?;
    relation_builder::build(schema, &mut building)?;

    debug!(
        "Built {} tables and {} relations",
        building.tables.len(),
        building.relations.len()
    );

    Ok(StorageModel {
        tables: building.tables,
        relations: building.relations,
    })
}

/// The model being built. Tables are built first, so that relations can look up primary keys.
#[derive(Debug, Default)]
pub(crate) struct StorageModelBuilding {
    pub tables: IndexMap<String, StorageTable>,
    /// Entity name -> table name
    pub entity_tables: HashMap<String, String>,
    pub relations: Vec<StorageRelation>,
}

impl StorageModelBuilding {
    pub fn add_table(&mut self, table: StorageTable) -> Result<(), StorageModelBuildingError> {
        if self.tables.contains_key(&table.name) {
            return Err(StorageModelBuildingError::DuplicateTable { table: table.name });
        }

        if let Some(entity) = &table.entity {
            self.entity_tables.insert(entity.clone(), table.name.clone());
        }
        self.tables.insert(table.name.clone(), table);

        Ok(())
    }

    pub fn entity_table_name(&self, entity: &str) -> Option<&str> {
        self.entity_tables.get(entity).map(|name| name.as_str())
    }

    /// The primary key column of an entity's table along with its type.
    pub fn pk_column(&self, entity: &str) -> Option<(ColumnReference, ColumnType)> {
        let table = self.tables.get(self.entity_table_name(entity)?)?;

        table.pk_columns().next().map(|column| {
            (
                ColumnReference {
                    table: table.name.clone(),
                    column: column.name.clone(),
                },
                column.typ,
            )
        })
    }

    pub fn entity_table_mut(&mut self, entity: &str) -> Option<&mut StorageTable> {
        let table_name = self.entity_tables.get(entity)?;
        self.tables.get_mut(table_name)
    }
}

/// Add a column to a table. Adding the same foreign key twice (which happens when both sides of
/// an association declare it) keeps one column, which is non-nullable if either side requires it.
/// Any other name clash is an error.
pub(crate) fn add_column(
    table: &mut StorageTable,
    column: StorageColumn,
) -> Result<ColumnReference, StorageModelBuildingError> {
    let reference = ColumnReference {
        table: table.name.clone(),
        column: column.name.clone(),
    };

    match table
        .columns
        .iter_mut()
        .find(|existing| existing.name == column.name)
    {
        Some(existing)
            if existing.references.is_some() && existing.references == column.references =>
        {
            existing.is_nullable &= column.is_nullable;
            Ok(reference)
        }
        Some(_) => Err(StorageModelBuildingError::ColumnConflict {
            table: table.name.clone(),
            column: column.name,
        }),
        None => {
            table.columns.push(column);
            Ok(reference)
        }
    }
}
