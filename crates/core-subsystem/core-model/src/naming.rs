// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use heck::ToLowerCamelCase;
use serde::{Deserialize, Serialize};

use crate::types::EntityModel;

/// A type with both singular and plural versions of itself.
pub trait ToPlural {
    fn self_name(&self) -> String;
    fn to_plural(&self) -> String;
}

impl ToPlural for str {
    fn self_name(&self) -> String {
        self.to_owned()
    }

    fn to_plural(&self) -> String {
        let plural_name = pluralizer::pluralize(self, 2, false);
        if plural_name == self {
            // Force pluralization if the pluralizer returns the same string
            format!("{self}s")
        } else {
            plural_name
        }
    }
}

impl ToPlural for EntityModel {
    fn self_name(&self) -> String {
        self.name.clone()
    }

    fn to_plural(&self) -> String {
        self.plural_name.clone()
    }
}

/// Names of the CRUD operations generated for an entity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperationNames {
    /// Fetch one instance by id (`book`)
    pub get: String,
    /// Fetch all instances (`books`)
    pub list: String,
    pub create: String,
    pub update: String,
    pub delete: String,
}

impl OperationNames {
    pub fn for_entity<T: ToPlural + ?Sized>(entity: &T) -> Self {
        let name = entity.self_name();

        Self {
            get: name.to_lower_camel_case(),
            list: entity.to_plural().to_lower_camel_case(),
            create: format!("create{name}"),
            update: format!("update{name}"),
            delete: format!("delete{name}"),
        }
    }
}
