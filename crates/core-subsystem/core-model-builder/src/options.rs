// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationOptions {
    /// Infer an association from the field's description when the field carries no association
    /// directive. Schemas written before directives were supported mark associations this way
    /// (`"""hasMany""" books: [Book]`).
    pub description_fallback: bool,
}

impl Default for TranslationOptions {
    fn default() -> Self {
        Self {
            description_fallback: true,
        }
    }
}
