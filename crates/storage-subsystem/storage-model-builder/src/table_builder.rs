// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

//! Build a table for each entity with its primitive columns and primary key. Foreign keys are
//! added later by [`relation_builder`](crate::relation_builder).

use core_model::types::{EntityModel, FieldDescriptor, IntermediateSchema};
use storage_model::{ColumnType, StorageColumn, StorageTable};
use tracing::debug;

use crate::{
    error::StorageModelBuildingError,
    naming::{ToTableName, column_name},
    system_builder::{StorageModelBuilding, add_column},
};

const PK_FIELD_NAME: &str = "id";

pub(crate) fn build(
    schema: &IntermediateSchema,
    building: &mut StorageModelBuilding,
) -> Result<(), StorageModelBuildingError> {
    for entity in schema.iter() {
        building.add_table(create_table(entity)?)?;
    }

    Ok(())
}

fn create_table(entity: &EntityModel) -> Result<StorageTable, StorageModelBuildingError> {
    let mut table = StorageTable {
        name: entity.table_name(),
        entity: Some(entity.name.clone()),
        columns: vec![],
    };

    for field in entity.primitive_fields() {
        add_column(&mut table, create_column(entity, field)?)?;
    }

    if table.pk_columns().next().is_none() {
        debug!("Synthesizing a primary key for '{}'", entity.name);

        let pk_column = StorageColumn {
            name: PK_FIELD_NAME.to_string(),
            typ: ColumnType::Int,
            is_pk: true,
            is_auto_increment: true,
            is_nullable: false,
            references: None,
        };

        if table.column(PK_FIELD_NAME).is_some() {
            return Err(StorageModelBuildingError::ColumnConflict {
                table: table.name,
                column: PK_FIELD_NAME.to_string(),
            });
        }
        table.columns.insert(0, pk_column);
    }

    Ok(table)
}

fn create_column(
    entity: &EntityModel,
    field: &FieldDescriptor,
) -> Result<StorageColumn, StorageModelBuildingError> {
    let primitive_type =
        field
            .primitive_type()
            .ok_or_else(|| StorageModelBuildingError::UnknownColumnType {
                entity: entity.name.clone(),
                field: field.name.clone(),
                type_name: field.base_type.clone(),
            })?;

    let is_pk = field.name == PK_FIELD_NAME;

    if is_pk && field.is_list {
        return Err(StorageModelBuildingError::InvalidPrimaryKey {
            entity: entity.name.clone(),
            field: field.name.clone(),
        });
    }

    let typ = if field.is_list {
        ColumnType::Json
    } else {
        ColumnType::from(primitive_type)
    };

    Ok(StorageColumn {
        name: column_name(&field.name),
        typ,
        is_pk,
        is_auto_increment: is_pk && typ == ColumnType::Int,
        is_nullable: !is_pk && field.nullable,
        references: None,
    })
}
