// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use core_model::types::FieldDescriptor;

use super::FieldContext;
use crate::error::{CardinalityMismatchReason, SchemaTranslationError};

/// Check that the field's association agrees with its type.
///
/// Validations performed:
/// - A primitive field is always valid (a list of primitives is stored as a serialized array)
/// - A non-primitive field must have an association
/// - A `*Many` association must be declared as a list, and a singular association must not be
pub fn validate_field(
    descriptor: &FieldDescriptor,
    context: &FieldContext,
) -> Result<(), SchemaTranslationError> {
    if descriptor.is_primitive() {
        return Ok(());
    }

    let Some(association) = descriptor.association else {
        return Err(SchemaTranslationError::MissingAssociation {
            entity: context.entity.to_string(),
            field: context.field.to_string(),
            location: context.location,
        });
    };

    let reason = match (descriptor.is_list, association.is_many()) {
        (true, false) => Some(CardinalityMismatchReason::ListWithSingularAssociation),
        (false, true) => Some(CardinalityMismatchReason::ScalarWithManyAssociation),
        _ => None,
    };

    match reason {
        Some(reason) => Err(SchemaTranslationError::CardinalityMismatch {
            entity: context.entity.to_string(),
            field: context.field.to_string(),
            association,
            reason,
            location: context.location,
        }),
        None => Ok(()),
    }
}
