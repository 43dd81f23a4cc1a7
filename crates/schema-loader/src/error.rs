// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use std::path::PathBuf;

use async_graphql_parser::Pos;
use core_model_builder::{SchemaTranslationError, error::SourceLocation};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SchemaLoadingError {
    #[error("{0}")]
    IO(#[from] std::io::Error),

    #[error("'{}' is not a directory", .0.display())]
    NotADirectory(PathBuf),

    #[error("No files matching '{pattern}' found under '{}'", .dir.display())]
    NoSchemaFiles { dir: PathBuf, pattern: String },

    #[error("Could not parse '{}': {message}", .path.display())]
    Parse {
        /// Index of the file among the loaded files
        document: usize,
        path: PathBuf,
        message: String,
        pos: Option<Pos>,
    },

    #[error("{0}")]
    Translation(#[from] SchemaTranslationError),
}

impl SchemaLoadingError {
    /// Where in the loaded files the error was detected, if it relates to a specific position
    pub fn location(&self) -> Option<SourceLocation> {
        match self {
            SchemaLoadingError::Parse {
                document,
                pos: Some(pos),
                ..
            } => Some(SourceLocation::new(*document, *pos)),
            SchemaLoadingError::Translation(err) => Some(err.location()),
            _ => None,
        }
    }
}
