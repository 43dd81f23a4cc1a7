// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

//! Discover schema files under a directory, parse them, and translate them into the
//! intermediate model. Errors that point into a schema file are reported as diagnostics against
//! the loaded sources.

mod diagnostics;
pub mod error;
pub mod loader;

use std::path::Path;

use core_model::types::IntermediateSchema;
use core_model_builder::TranslationOptions;
use tracing::instrument;

pub use diagnostics::{SchemaCodeMap, build_diagnostic, emit_diagnostics};
pub use error::SchemaLoadingError;
pub use loader::{LoaderOptions, SchemaSource, load_schema_documents, read_schema_files};

/// Load all schema files under `dir` and translate them. Errors pointing into a schema file are
/// emitted to stderr as diagnostics before being returned.
#[instrument(
    name = "schema_loader::load_schema",
    skip(loader_options, translation_options)
)]
pub fn load_schema(
    dir: &Path,
    loader_options: &LoaderOptions,
    translation_options: &TranslationOptions,
) -> Result<IntermediateSchema, SchemaLoadingError> {
    let files = read_schema_files(dir, loader_options)?;
    let codemap = SchemaCodeMap::new(&files);

    let sources = files
        .into_iter()
        .enumerate()
        .map(|(index, (path, text))| SchemaSource::parse(index, path, text))
        .collect::<Result<Vec<_>, _>>()
        .inspect_err(|err| emit_diagnostics(err, &codemap))?;

    let documents: Vec<_> = sources.into_iter().map(|source| source.document).collect();

    core_model_builder::translate(&documents, translation_options)
        .map_err(SchemaLoadingError::from)
        .inspect_err(|err| emit_diagnostics(err, &codemap))
}
