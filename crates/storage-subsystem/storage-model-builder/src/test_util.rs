// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use async_graphql_parser::parse_schema;
use core_model_builder::{TranslationOptions, translate};
use storage_model::{ColumnType, StorageColumn, StorageModel};

use crate::{build, error::StorageModelBuildingError};

pub(crate) fn build_from_src(src: &str) -> Result<StorageModel, StorageModelBuildingError> {
    let document = parse_schema(src).unwrap();
    let schema = translate(&[document], &TranslationOptions::default()).unwrap();

    build(&schema)
}

/// A nullable, non-key column with no reference
pub(crate) fn column(name: &str, typ: ColumnType) -> StorageColumn {
    StorageColumn {
        name: name.to_string(),
        typ,
        is_pk: false,
        is_auto_increment: false,
        is_nullable: true,
        references: None,
    }
}
