// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use std::{
    fs,
    path::{Path, PathBuf},
};

use async_graphql_parser::{parse_schema, types::ServiceDocument};
use tracing::{debug, instrument};
use wildmatch::WildMatch;

use crate::error::SchemaLoadingError;

pub const DEFAULT_FILE_PATTERN: &str = "*.graphql";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoaderOptions {
    /// Wildcard (`*` and `?`) matched against file names
    pub file_pattern: String,
}

impl Default for LoaderOptions {
    fn default() -> Self {
        Self {
            file_pattern: DEFAULT_FILE_PATTERN.to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct SchemaSource {
    pub path: PathBuf,
    pub text: String,
    pub document: ServiceDocument,
}

impl SchemaSource {
    /// Parse the text of the `index`th loaded file.
    pub fn parse(index: usize, path: PathBuf, text: String) -> Result<Self, SchemaLoadingError> {
        match parse_schema(&text) {
            Ok(document) => Ok(Self {
                path,
                text,
                document,
            }),
            Err(err) => Err(SchemaLoadingError::Parse {
                document: index,
                pos: err.positions().next(),
                message: err.to_string(),
                path,
            }),
        }
    }
}

/// Load and parse every file under `dir` (recursively) whose name matches the pattern in
/// `options`. Files are returned sorted by path.
pub fn load_schema_documents(
    dir: &Path,
    options: &LoaderOptions,
) -> Result<Vec<SchemaSource>, SchemaLoadingError> {
    read_schema_files(dir, options)?
        .into_iter()
        .enumerate()
        .map(|(index, (path, text))| SchemaSource::parse(index, path, text))
        .collect()
}

/// Read every matching file under `dir` without parsing it.
#[instrument(name = "schema_loader::read_schema_files", skip(options))]
pub fn read_schema_files(
    dir: &Path,
    options: &LoaderOptions,
) -> Result<Vec<(PathBuf, String)>, SchemaLoadingError> {
    if !dir.is_dir() {
        return Err(SchemaLoadingError::NotADirectory(dir.to_path_buf()));
    }

    let matcher = WildMatch::new(&options.file_pattern);
    let mut paths = vec![];
    collect_matching_files(dir, &matcher, &mut paths)?;
    paths.sort();

    if paths.is_empty() {
        return Err(SchemaLoadingError::NoSchemaFiles {
            dir: dir.to_path_buf(),
            pattern: options.file_pattern.clone(),
        });
    }

    paths
        .into_iter()
        .map(|path| {
            debug!("Reading schema file '{}'", path.display());
            let text = fs::read_to_string(&path)?;
            Ok((path, text))
        })
        .collect()
}

// Hidden directories (`.git` and the like) are skipped
fn collect_matching_files(
    dir: &Path,
    matcher: &WildMatch,
    paths: &mut Vec<PathBuf>,
) -> Result<(), std::io::Error> {
    for entry in dir.read_dir()? {
        let entry = entry?;
        let file_name = entry.file_name();
        let Some(file_name) = file_name.to_str() else {
            continue;
        };

        if entry.file_type()?.is_dir() {
            if !file_name.starts_with('.') {
                collect_matching_files(&entry.path(), matcher, paths)?;
            }
        } else if matcher.matches(file_name) {
            paths.push(entry.path());
        }
    }

    Ok(())
}
