// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use std::{path::PathBuf, sync::Arc};

use codemap::{CodeMap, File, Span};
use codemap_diagnostic::{ColorConfig, Diagnostic, Emitter, Level, SpanLabel, SpanStyle};
use core_model_builder::error::SourceLocation;

use crate::error::SchemaLoadingError;

/// The loaded schema files, in the order they were handed to the translator, so that a
/// [`SourceLocation`] can be turned into a span.
pub struct SchemaCodeMap {
    codemap: CodeMap,
    files: Vec<Arc<File>>,
}

impl SchemaCodeMap {
    pub fn new(files: &[(PathBuf, String)]) -> Self {
        let mut codemap = CodeMap::new();
        let files = files
            .iter()
            .map(|(path, text)| codemap.add_file(path.display().to_string(), text.clone()))
            .collect();

        Self { codemap, files }
    }

    pub fn codemap(&self) -> &CodeMap {
        &self.codemap
    }

    /// The span from the location to the end of its line. Positions are 1-based.
    pub fn span(&self, location: SourceLocation) -> Option<Span> {
        let file = self.files.get(location.document)?;
        let line = location.pos.line.checked_sub(1)?;

        if line >= file.num_lines() {
            return None;
        }

        // The line span includes the line terminator
        let source_line = file.source_line(line);
        let line_len = source_line.len() as u64;

        // Columns count characters, spans count bytes
        let column = source_line
            .char_indices()
            .nth(location.pos.column.saturating_sub(1))
            .map_or(line_len, |(offset, _)| offset as u64);

        Some(file.line_span(line).subspan(column, line_len))
    }
}

pub fn build_diagnostic(err: &SchemaLoadingError, codemap: &SchemaCodeMap) -> Option<Diagnostic> {
    let span = codemap.span(err.location()?)?;

    let message = match err {
        SchemaLoadingError::Translation(err) => err.to_string(),
        SchemaLoadingError::Parse { message, .. } => message.clone(),
        _ => err.to_string(),
    };

    Some(Diagnostic {
        level: Level::Error,
        message,
        code: Some("C000".to_string()),
        spans: vec![SpanLabel {
            span,
            style: SpanStyle::Primary,
            label: None,
        }],
    })
}

/// Print the error against the schema sources. Errors with no position in a schema file are left
/// to the caller to report.
pub fn emit_diagnostics(err: &SchemaLoadingError, codemap: &SchemaCodeMap) {
    // Colors only when stderr is a terminal
    let mut emitter = Emitter::stderr(ColorConfig::Auto, Some(codemap.codemap()));
    write_diagnostics(err, codemap, &mut emitter);
}

fn write_diagnostics(err: &SchemaLoadingError, codemap: &SchemaCodeMap, emitter: &mut Emitter) {
    if let Some(diagnostic) = build_diagnostic(err, codemap) {
        emitter.emit(&[diagnostic]);
    }
}

#[cfg(test)]
mod tests {
    use async_graphql_parser::Pos;

    use super::*;

    fn codemap() -> SchemaCodeMap {
        SchemaCodeMap::new(&[
            (PathBuf::from("a.graphql"), "type A {\n  id: ID\n}\n".to_string()),
            (
                PathBuf::from("b.graphql"),
                "type B {\n  id: ID\n  a: A\n}\n".to_string(),
            ),
        ])
    }

    #[test]
    fn span_in_second_file() {
        let codemap = codemap();

        let span = codemap
            .span(SourceLocation::new(1, Pos { line: 3, column: 3 }))
            .unwrap();

        let location = codemap.codemap().look_up_span(span);
        assert_eq!(location.file.name(), "b.graphql");
        assert_eq!(location.begin.line, 2);
        assert_eq!(location.begin.column, 2);
        assert_eq!(location.file.source_slice(span), "a: A");
    }

    #[test]
    fn columns_after_multi_byte_characters() {
        let codemap = SchemaCodeMap::new(&[(
            PathBuf::from("book.graphql"),
            "type Author { id: ID! }\ntype Book { \"éééééééééé\" x: Int author: Author }\n"
                .to_string(),
        )]);

        let span = codemap
            .span(SourceLocation::new(0, Pos { line: 2, column: 33 }))
            .unwrap();

        let location = codemap.codemap().look_up_span(span);
        assert_eq!(location.file.source_slice(span), "author: Author }");
    }

    #[test]
    fn column_past_the_end_of_line() {
        let codemap = codemap();

        let span = codemap
            .span(SourceLocation::new(0, Pos { line: 2, column: 80 }))
            .unwrap();

        assert_eq!(codemap.codemap().look_up_span(span).file.source_slice(span), "");
    }

    #[test]
    fn plain_text_diagnostics() {
        let codemap = codemap();
        let err = SchemaLoadingError::Parse {
            document: 1,
            path: PathBuf::from("b.graphql"),
            message: "unexpected token".to_string(),
            pos: Some(Pos { line: 3, column: 3 }),
        };

        let mut rendered = vec![];
        write_diagnostics(&err, &codemap, &mut Emitter::vec(&mut rendered, Some(codemap.codemap())));
        let rendered = String::from_utf8(rendered).unwrap();

        assert!(rendered.contains("error[C000]: unexpected token"));
        assert!(rendered.contains("b.graphql:3:3"));
        assert!(!rendered.contains('\u{1b}'));
    }

    #[test]
    fn out_of_range_positions() {
        let codemap = codemap();

        assert!(
            codemap
                .span(SourceLocation::new(2, Pos { line: 1, column: 1 }))
                .is_none()
        );
        assert!(
            codemap
                .span(SourceLocation::new(0, Pos { line: 40, column: 1 }))
                .is_none()
        );
    }

    #[test]
    fn diagnostic_for_errors_without_position() {
        let err = SchemaLoadingError::NotADirectory(PathBuf::from("missing"));

        assert!(build_diagnostic(&err, &codemap()).is_none());
    }
}
