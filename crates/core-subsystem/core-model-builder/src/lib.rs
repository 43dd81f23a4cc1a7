// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

//! Translate parsed SDL documents into the intermediate model.
//!
//! Translation runs in two steps:
//! - Typechecking each field: flatten its type reference, infer its association from directives
//!   (or, as a fallback, its description), and validate that the association agrees with the
//!   declared list-ness (see [`typechecker`]).
//! - Building: collect object types across documents and assemble the
//!   [`IntermediateSchema`](core_model::types::IntermediateSchema) (see [`builder`]).
//!
//! The first error aborts the translation; no partial model is ever returned.

pub mod builder;
pub mod error;
pub mod options;
pub mod typechecker;

pub use builder::schema_translator::{SchemaTranslator, translate};
pub use error::SchemaTranslationError;
pub use options::TranslationOptions;

#[cfg(test)]
mod test_util;
