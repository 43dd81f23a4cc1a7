// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use core_model::primitive_type::PrimitiveType;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct StorageColumn {
    pub name: String,
    pub typ: ColumnType,
    /// Is this column a part of the PK for the table
    pub is_pk: bool,
    pub is_auto_increment: bool,
    pub is_nullable: bool,
    /// Set for foreign key columns
    pub references: Option<ColumnReference>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColumnType {
    String,
    Int,
    Float,
    Boolean,
    Uuid,
    /// A list of primitives, stored as a serialized array
    Json,
}

impl From<PrimitiveType> for ColumnType {
    fn from(primitive_type: PrimitiveType) -> Self {
        match primitive_type {
            PrimitiveType::String => ColumnType::String,
            PrimitiveType::Int => ColumnType::Int,
            PrimitiveType::Float => ColumnType::Float,
            PrimitiveType::Boolean => ColumnType::Boolean,
            PrimitiveType::Id => ColumnType::Uuid,
        }
    }
}

/// The column a foreign key points to (`authors.id`)
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash)]
pub struct ColumnReference {
    pub table: String,
    pub column: String,
}
