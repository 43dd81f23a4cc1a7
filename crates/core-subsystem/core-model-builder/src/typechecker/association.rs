// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

//! Determine the association a field declares.
//!
//! A field may be marked with one of the `@hasOne`, `@hasMany`, `@belongsTo`, `@belongsToMany`
//! directives. Older schemas carry the keyword in the field's description instead:
//!
//! ```graphql
//! type Book {
//!   """hasMany"""
//!   authors: [Author]!
//! }
//! ```
//!
//! The directive takes precedence; the description is consulted only if there is no directive
//! and [`TranslationOptions::description_fallback`] is set.

use async_graphql_parser::{
    Positioned,
    types::{ConstDirective, FieldDefinition},
};
use core_model::association::AssociationKind;

use super::FieldContext;
use crate::{error::SchemaTranslationError, options::TranslationOptions};

pub fn infer_association(
    field: &FieldDefinition,
    options: &TranslationOptions,
    context: &FieldContext,
) -> Result<Option<AssociationKind>, SchemaTranslationError> {
    if let Some(kind) = explicit_association(&field.directives, context)? {
        return Ok(Some(kind));
    }

    if !options.description_fallback {
        return Ok(None);
    }

    Ok(field
        .description
        .as_ref()
        .and_then(|description| association_from_description(&description.node)))
}

/// The association named by the field's directives. Repeating the same directive is fine, but
/// two different association directives are an error.
pub fn explicit_association(
    directives: &[Positioned<ConstDirective>],
    context: &FieldContext,
) -> Result<Option<AssociationKind>, SchemaTranslationError> {
    let mut kinds = directives
        .iter()
        .filter_map(|directive| AssociationKind::from_keyword(directive.node.name.node.as_str()));

    let Some(first) = kinds.next() else {
        return Ok(None);
    };

    match kinds.find(|kind| *kind != first) {
        Some(second) => Err(SchemaTranslationError::ConflictingAssociation {
            entity: context.entity.to_string(),
            field: context.field.to_string(),
            first,
            second,
            location: context.location,
        }),
        None => Ok(Some(first)),
    }
}

/// Look for an association keyword anywhere in the text.
pub fn association_from_description(description: &str) -> Option<AssociationKind> {
    AssociationKind::MATCH_ORDER
        .into_iter()
        .find(|kind| description.contains(kind.keyword()))
}
