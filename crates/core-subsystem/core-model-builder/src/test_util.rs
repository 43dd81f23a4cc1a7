// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use async_graphql_parser::{
    parse_schema,
    types::{FieldDefinition, ServiceDocument, TypeKind, TypeSystemDefinition},
};
use core_model::types::IntermediateSchema;

use crate::{SchemaTranslationError, TranslationOptions, translate};

pub(crate) fn parse(src: &str) -> ServiceDocument {
    parse_schema(src).unwrap()
}

pub(crate) fn translate_src(src: &str) -> Result<IntermediateSchema, SchemaTranslationError> {
    translate_src_with(src, &TranslationOptions::default())
}

pub(crate) fn translate_src_with(
    src: &str,
    options: &TranslationOptions,
) -> Result<IntermediateSchema, SchemaTranslationError> {
    translate(&[parse(src)], options)
}

/// The first field of the first object type in `src`
pub(crate) fn first_field(src: &str) -> FieldDefinition {
    parse(src)
        .definitions
        .into_iter()
        .find_map(|definition| match definition {
            TypeSystemDefinition::Type(typ) => match typ.node.kind {
                TypeKind::Object(object) => object.fields.into_iter().next().map(|f| f.node),
                _ => None,
            },
            _ => None,
        })
        .unwrap()
}
