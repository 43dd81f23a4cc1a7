// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use std::collections::HashSet;

use async_graphql_parser::{
    Positioned,
    types::{FieldDefinition, ServiceDocument},
};
use core_model::{
    naming::ToPlural,
    types::{EntityModel, FieldDescriptor, IntermediateSchema},
};
use tracing::{debug, instrument, warn};

use super::declarations::{TypeDeclaration, collect_declarations};
use crate::{
    error::{SchemaTranslationError, SourceLocation},
    options::TranslationOptions,
    typechecker::{
        FieldContext, association::infer_association, field_validator::validate_field,
        type_reference::flatten_type,
    },
};

/// Translate documents into the intermediate model with the given options.
pub fn translate(
    documents: &[ServiceDocument],
    options: &TranslationOptions,
) -> Result<IntermediateSchema, SchemaTranslationError> {
    SchemaTranslator::new(options.clone()).translate(documents)
}

#[derive(Debug, Clone, Default)]
pub struct SchemaTranslator {
    options: TranslationOptions,
}

impl SchemaTranslator {
    pub fn new(options: TranslationOptions) -> Self {
        Self { options }
    }

    /// Translate all object types in the documents to entities.
    ///
    /// Every field of every entity is typechecked before any entity is assembled, and the first
    /// failure is returned.
    #[instrument(
        name = "SchemaTranslator::translate",
        skip_all,
        fields(documents = documents.len())
    )]
    pub fn translate(
        &self,
        documents: &[ServiceDocument],
    ) -> Result<IntermediateSchema, SchemaTranslationError> {
        let declarations = collect_declarations(documents)?;

        let entity_names: HashSet<&str> = declarations
            .iter()
            .map(|declaration| declaration.name)
            .collect();

        let typechecked = declarations
            .iter()
            .map(|declaration| {
                let fields = self.translate_fields(declaration, &entity_names)?;
                Ok::<_, SchemaTranslationError>((declaration, fields))
            })
            .collect::<Result<Vec<_>, _>>()?;

        let schema: IntermediateSchema = typechecked
            .into_iter()
            .map(|(declaration, fields)| EntityModel {
                name: declaration.name.to_string(),
                plural_name: declaration
                    .plural_name
                    .clone()
                    .unwrap_or_else(|| declaration.name.to_plural()),
                fields: fields
                    .into_iter()
                    .map(|field| (field.name.clone(), field))
                    .collect(),
            })
            .collect();

        debug!("Translated {} entities", schema.len());

        Ok(schema)
    }

    fn translate_fields(
        &self,
        declaration: &TypeDeclaration,
        entity_names: &HashSet<&str>,
    ) -> Result<Vec<FieldDescriptor>, SchemaTranslationError> {
        debug!("Translating type {}", declaration.name);

        declaration
            .fields
            .iter()
            .map(|(document_index, field)| {
                let context = FieldContext {
                    entity: declaration.name,
                    field: field.node.name.node.as_str(),
                    location: SourceLocation::new(*document_index, field.pos),
                };
                self.translate_field(field, &context, entity_names)
            })
            .collect()
    }

    fn translate_field(
        &self,
        field: &Positioned<FieldDefinition>,
        context: &FieldContext,
        entity_names: &HashSet<&str>,
    ) -> Result<FieldDescriptor, SchemaTranslationError> {
        let reference = flatten_type(&field.node.ty.node).map_err(|e| {
            SchemaTranslationError::TypeNestingTooDeep {
                entity: context.entity.to_string(),
                field: context.field.to_string(),
                max_depth: e.max_depth,
                location: context.location,
            }
        })?;

        let inferred = infer_association(&field.node, &self.options, context)?;

        let is_primitive = core_model::primitive_type::is_primitive(&reference.base_type);

        // An association on a primitive makes no sense (and a description merely mentioning a
        // keyword shouldn't turn a column into a relation)
        let association = match inferred {
            Some(kind) if is_primitive => {
                warn!(
                    "{}.{}: ignoring '{kind}' association on primitive type {}",
                    context.entity, context.field, reference.base_type
                );
                None
            }
            other => other,
        };

        let descriptor = FieldDescriptor {
            name: context.field.to_string(),
            base_type: reference.base_type,
            nullable: !reference.disallow_null,
            is_list: reference.list,
            association,
        };

        validate_field(&descriptor, context)?;

        if descriptor.association.is_some() && !entity_names.contains(descriptor.base_type.as_str())
        {
            return Err(SchemaTranslationError::UnknownPrimitiveType {
                entity: context.entity.to_string(),
                field: context.field.to_string(),
                type_name: descriptor.base_type,
                location: context.location,
            });
        }

        Ok(descriptor)
    }
}
