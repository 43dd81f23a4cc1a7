// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

//! Gather the object types of all documents into one declaration per entity.

use std::collections::HashSet;

use async_graphql_parser::{
    Positioned,
    types::{
        ConstDirective, FieldDefinition, ServiceDocument, TypeDefinition, TypeKind,
        TypeSystemDefinition,
    },
};
use async_graphql_value::ConstValue;
use indexmap::IndexMap;
use tracing::debug;

use crate::error::{SchemaTranslationError, SourceLocation};

const DEFAULT_ROOT_OPERATION_TYPES: [&str; 3] = ["Query", "Mutation", "Subscription"];

const PLURAL_DIRECTIVE: &str = "plural";
const PLURAL_DIRECTIVE_ARGUMENT: &str = "name";

pub(super) struct TypeDeclaration<'a> {
    pub name: &'a str,
    pub plural_name: Option<String>,
    /// Fields in declaration order, along with the index of the document declaring them (fields
    /// added by `extend type` may come from another document).
    pub fields: Vec<(usize, &'a Positioned<FieldDefinition>)>,
}

/// Collect object types in declaration order, merging `extend type` definitions into their base
/// type.
pub(super) fn collect_declarations(
    documents: &[ServiceDocument],
) -> Result<Vec<TypeDeclaration<'_>>, SchemaTranslationError> {
    let root_operation_types = root_operation_types(documents);

    let mut declarations: IndexMap<&str, TypeDeclaration> = IndexMap::new();
    let mut extensions = vec![];

    for (document_index, typ) in object_types(documents) {
        let name = typ.node.name.node.as_str();
        let location = SourceLocation::new(document_index, typ.pos);

        if root_operation_types.contains(name) {
            debug!("Skipping root operation type {name}");
            continue;
        }

        if typ.node.extend {
            extensions.push((document_index, typ));
            continue;
        }

        if declarations.contains_key(name) {
            return Err(SchemaTranslationError::DuplicateType {
                name: name.to_string(),
                location,
            });
        }

        declarations.insert(
            name,
            TypeDeclaration {
                name,
                plural_name: plural_name(&typ.node, location)?,
                fields: fields_of(document_index, &typ.node),
            },
        );
    }

    for (document_index, typ) in extensions {
        let name = typ.node.name.node.as_str();
        let location = SourceLocation::new(document_index, typ.pos);

        // The plural name belongs to the base type only
        if has_plural_directive(&typ.node) {
            return Err(SchemaTranslationError::InvalidDirective {
                entity: name.to_string(),
                message: format!("@{PLURAL_DIRECTIVE} cannot be used on a type extension"),
                location,
            });
        }

        let Some(declaration) = declarations.get_mut(name) else {
            return Err(SchemaTranslationError::ExtendsUnknownType {
                name: name.to_string(),
                location,
            });
        };

        declaration
            .fields
            .extend(fields_of(document_index, &typ.node));
    }

    for declaration in declarations.values() {
        check_unique_fields(declaration)?;
    }

    Ok(declarations.into_values().collect())
}

fn object_types(
    documents: &[ServiceDocument],
) -> impl Iterator<Item = (usize, &Positioned<TypeDefinition>)> {
    documents
        .iter()
        .enumerate()
        .flat_map(|(document_index, document)| {
            document
                .definitions
                .iter()
                .filter_map(move |definition| match definition {
                    TypeSystemDefinition::Type(typ)
                        if matches!(typ.node.kind, TypeKind::Object(_)) =>
                    {
                        Some((document_index, typ))
                    }
                    _ => None,
                })
        })
}

/// `Query`, `Mutation` and `Subscription`, as well as any type named as a root in a `schema`
/// definition. These describe operations, not entities.
fn root_operation_types(documents: &[ServiceDocument]) -> HashSet<&str> {
    let declared = documents
        .iter()
        .flat_map(|document| document.definitions.iter())
        .filter_map(|definition| match definition {
            TypeSystemDefinition::Schema(schema) => Some(&schema.node),
            _ => None,
        })
        .flat_map(|schema| [&schema.query, &schema.mutation, &schema.subscription])
        .flatten()
        .map(|name| name.node.as_str());

    DEFAULT_ROOT_OPERATION_TYPES
        .into_iter()
        .chain(declared)
        .collect()
}

fn fields_of(
    document_index: usize,
    typ: &TypeDefinition,
) -> Vec<(usize, &Positioned<FieldDefinition>)> {
    match &typ.kind {
        TypeKind::Object(object) => object
            .fields
            .iter()
            .map(|field| (document_index, field))
            .collect(),
        _ => vec![],
    }
}

fn has_plural_directive(typ: &TypeDefinition) -> bool {
    typ.directives
        .iter()
        .any(|directive| directive.node.name.node.as_str() == PLURAL_DIRECTIVE)
}

/// The value of `@plural(name: "...")`, if present.
fn plural_name(
    typ: &TypeDefinition,
    location: SourceLocation,
) -> Result<Option<String>, SchemaTranslationError> {
    let directive: Option<&ConstDirective> = typ
        .directives
        .iter()
        .map(|directive| &directive.node)
        .find(|directive| directive.name.node.as_str() == PLURAL_DIRECTIVE);

    let Some(directive) = directive else {
        return Ok(None);
    };

    match directive
        .get_argument(PLURAL_DIRECTIVE_ARGUMENT)
        .map(|value| &value.node)
    {
        Some(ConstValue::String(plural_name)) if !plural_name.is_empty() => {
            Ok(Some(plural_name.clone()))
        }
        _ => Err(SchemaTranslationError::InvalidDirective {
            entity: typ.name.node.to_string(),
            message: format!(
                "@{PLURAL_DIRECTIVE} requires a non-empty string argument '{PLURAL_DIRECTIVE_ARGUMENT}'"
            ),
            location,
        }),
    }
}

fn check_unique_fields(declaration: &TypeDeclaration) -> Result<(), SchemaTranslationError> {
    let mut seen = HashSet::new();

    for (document_index, field) in &declaration.fields {
        let field_name = field.node.name.node.as_str();

        if !seen.insert(field_name) {
            return Err(SchemaTranslationError::DuplicateField {
                entity: declaration.name.to_string(),
                field: field_name.to_string(),
                location: SourceLocation::new(*document_index, field.pos),
            });
        }
    }

    Ok(())
}
