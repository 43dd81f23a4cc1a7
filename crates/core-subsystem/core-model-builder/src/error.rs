// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use std::fmt::{Display, Formatter};

use async_graphql_parser::Pos;
use core_model::association::AssociationKind;
use thiserror::Error;

/// Position of a definition: the index of the document (in the slice passed to the translator)
/// and the position within it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SourceLocation {
    pub document: usize,
    pub pos: Pos,
}

impl SourceLocation {
    pub fn new(document: usize, pos: Pos) -> Self {
        Self { document, pos }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardinalityMismatchReason {
    /// `[Author] @belongsTo`
    ListWithSingularAssociation,
    /// `Author @hasMany`
    ScalarWithManyAssociation,
}

impl Display for CardinalityMismatchReason {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            CardinalityMismatchReason::ListWithSingularAssociation => {
                f.write_str("list type detected with non-many association")
            }
            CardinalityMismatchReason::ScalarWithManyAssociation => {
                f.write_str("scalar type detected with many association")
            }
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SchemaTranslationError {
    #[error(
        "{entity}.{field}: non-primitive data types require an association type ({})",
        AssociationKind::keywords()
    )]
    MissingAssociation {
        entity: String,
        field: String,
        location: SourceLocation,
    },

    #[error("{entity}.{field}: {reason}")]
    CardinalityMismatch {
        entity: String,
        field: String,
        association: AssociationKind,
        reason: CardinalityMismatchReason,
        location: SourceLocation,
    },

    #[error("{entity}.{field}: unknown type '{type_name}' (neither a primitive nor a declared type)")]
    UnknownPrimitiveType {
        entity: String,
        field: String,
        type_name: String,
        location: SourceLocation,
    },

    #[error("{entity}.{field}: conflicting association markers '@{first}' and '@{second}'")]
    ConflictingAssociation {
        entity: String,
        field: String,
        first: AssociationKind,
        second: AssociationKind,
        location: SourceLocation,
    },

    #[error("{entity}.{field}: type is nested more than {max_depth} levels deep")]
    TypeNestingTooDeep {
        entity: String,
        field: String,
        max_depth: usize,
        location: SourceLocation,
    },

    #[error("{entity}.{field}: duplicate field definition")]
    DuplicateField {
        entity: String,
        field: String,
        location: SourceLocation,
    },

    #[error("Duplicate type definition '{name}'")]
    DuplicateType {
        name: String,
        location: SourceLocation,
    },

    #[error("Cannot extend undeclared type '{name}'")]
    ExtendsUnknownType {
        name: String,
        location: SourceLocation,
    },

    #[error("{entity}: {message}")]
    InvalidDirective {
        entity: String,
        message: String,
        location: SourceLocation,
    },
}

impl SchemaTranslationError {
    pub fn location(&self) -> SourceLocation {
        match self {
            SchemaTranslationError::MissingAssociation { location, .. }
            | SchemaTranslationError::CardinalityMismatch { location, .. }
            | SchemaTranslationError::UnknownPrimitiveType { location, .. }
            | SchemaTranslationError::ConflictingAssociation { location, .. }
            | SchemaTranslationError::TypeNestingTooDeep { location, .. }
            | SchemaTranslationError::DuplicateField { location, .. }
            | SchemaTranslationError::DuplicateType { location, .. }
            | SchemaTranslationError::ExtendsUnknownType { location, .. }
            | SchemaTranslationError::InvalidDirective { location, .. } => *location,
        }
    }
}
