// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

/// The built-in scalar types. Fields of these types are stored as columns and never need an
/// association.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PrimitiveType {
    String,
    Int,
    Float,
    Boolean,
    #[serde(rename = "ID")]
    Id,
}

impl PrimitiveType {
    pub const ALL: [PrimitiveType; 5] = [
        PrimitiveType::String,
        PrimitiveType::Int,
        PrimitiveType::Float,
        PrimitiveType::Boolean,
        PrimitiveType::Id,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            PrimitiveType::String => "String",
            PrimitiveType::Int => "Int",
            PrimitiveType::Float => "Float",
            PrimitiveType::Boolean => "Boolean",
            PrimitiveType::Id => "ID",
        }
    }

    /// Look up a primitive by its schema name. Names are case-sensitive, so `string` or `Id` are
    /// not primitives.
    pub fn from_name(name: &str) -> Option<PrimitiveType> {
        PrimitiveType::ALL.into_iter().find(|pt| pt.name() == name)
    }
}

impl Display for PrimitiveType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

pub fn is_primitive(type_name: &str) -> bool {
    PrimitiveType::from_name(type_name).is_some()
}
