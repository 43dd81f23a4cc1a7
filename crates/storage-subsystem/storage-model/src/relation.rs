// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use core_model::association::AssociationKind;
use serde::{Deserialize, Serialize};

use crate::column::ColumnReference;

/// The storage side of an association field.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct StorageRelation {
    pub entity: String,
    pub field: String,
    pub kind: AssociationKind,
    pub target: String,
    pub link: RelationLink,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub enum RelationLink {
    // For the `Book.author` field (`belongsTo`), we will have:
    // - self_column: books.author_id
    // - foreign_pk_column: authors.id
    ManyToOne {
        self_column: ColumnReference,
        foreign_pk_column: ColumnReference,
    },
    // For the `Author.books` field (`hasMany`) or `Author.bio` (`hasOne`), we will have:
    // - self_pk_column: authors.id
    // - foreign_column: books.author_id
    OneToMany {
        self_pk_column: ColumnReference,
        foreign_column: ColumnReference,
    },
    // For the `Book.tags` field (`belongsToMany`), we will have:
    // - join_table: books_tags
    // - self_column: books_tags.book_id
    // - foreign_column: books_tags.tag_id
    ManyToMany {
        join_table: String,
        self_column: ColumnReference,
        foreign_column: ColumnReference,
    },
}
