// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

//! Field-local analyses. None of these look at other entities.

pub mod association;
pub mod field_validator;
pub mod type_reference;

use crate::error::SourceLocation;

/// The field being checked, for error reporting.
#[derive(Debug, Clone, Copy)]
pub struct FieldContext<'a> {
    pub entity: &'a str,
    pub field: &'a str,
    pub location: SourceLocation,
}
