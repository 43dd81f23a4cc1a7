// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::{association::AssociationKind, primitive_type::PrimitiveType};

/// A single field of an entity, with its type modifiers flattened.
///
/// For `authors: [Author]! @hasMany`, we will have:
/// - base_type: `Author`
/// - nullable: false
/// - is_list: true
/// - association: `Some(HasMany)`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldDescriptor {
    pub name: String,
    /// Primitive name (`String`, `Int`, ...) or the name of another entity
    #[serde(rename = "type")]
    pub base_type: String,
    pub nullable: bool,
    #[serde(rename = "list")]
    pub is_list: bool,
    /// `None` for primitive fields. Always `Some` for fields referring to another entity.
    pub association: Option<AssociationKind>,
}

impl FieldDescriptor {
    pub fn disallow_null(&self) -> bool {
        !self.nullable
    }

    pub fn primitive_type(&self) -> Option<PrimitiveType> {
        PrimitiveType::from_name(&self.base_type)
    }

    pub fn is_primitive(&self) -> bool {
        self.primitive_type().is_some()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntityModel {
    pub name: String,
    pub plural_name: String,
    pub fields: IndexMap<String, FieldDescriptor>,
}

impl EntityModel {
    pub fn field(&self, name: &str) -> Option<&FieldDescriptor> {
        self.fields.get(name)
    }

    pub fn primitive_fields(&self) -> impl Iterator<Item = &FieldDescriptor> {
        self.fields.values().filter(|field| field.association.is_none())
    }

    pub fn association_fields(
        &self,
    ) -> impl Iterator<Item = (&FieldDescriptor, AssociationKind)> {
        self.fields
            .values()
            .filter_map(|field| field.association.map(|kind| (field, kind)))
    }
}

/// The translated schema: every entity keyed by its name, in declaration order.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IntermediateSchema {
    pub entities: IndexMap<String, EntityModel>,
}

impl IntermediateSchema {
    pub fn get(&self, name: &str) -> Option<&EntityModel> {
        self.entities.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entities.contains_key(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &EntityModel> {
        self.entities.values()
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }
}

impl FromIterator<EntityModel> for IntermediateSchema {
    fn from_iter<I: IntoIterator<Item = EntityModel>>(iter: I) -> Self {
        IntermediateSchema {
            entities: iter
                .into_iter()
                .map(|entity| (entity.name.clone(), entity))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use multiplatform_test::multiplatform_test;

    fn field(name: &str, base_type: &str, association: Option<AssociationKind>) -> FieldDescriptor {
        FieldDescriptor {
            name: name.to_string(),
            base_type: base_type.to_string(),
            nullable: true,
            is_list: false,
            association,
        }
    }

    #[multiplatform_test]
    fn splits_primitive_and_association_fields() {
        let entity = EntityModel {
            name: "Book".to_string(),
            plural_name: "Books".to_string(),
            fields: [
                field("id", "ID", None),
                field("title", "String", None),
                field("author", "Author", Some(AssociationKind::BelongsTo)),
            ]
            .into_iter()
            .map(|f| (f.name.clone(), f))
            .collect(),
        };

        let primitive: Vec<_> = entity.primitive_fields().map(|f| f.name.as_str()).collect();
        assert_eq!(primitive, vec!["id", "title"]);

        let associations: Vec<_> = entity
            .association_fields()
            .map(|(f, kind)| (f.name.as_str(), kind))
            .collect();
        assert_eq!(associations, vec![("author", AssociationKind::BelongsTo)]);
    }

    #[multiplatform_test]
    fn serialized_shape() {
        let descriptor = FieldDescriptor {
            is_list: true,
            nullable: false,
            ..field("authors", "Author", Some(AssociationKind::HasMany))
        };

        assert_eq!(
            serde_json::to_value(&descriptor).unwrap(),
            serde_json::json!({
                "name": "authors",
                "type": "Author",
                "nullable": false,
                "list": true,
                "association": "hasMany"
            })
        );
    }
}
