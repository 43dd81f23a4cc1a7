// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

/// How a field relates its entity to another entity.
///
/// For `Book.author: Author` marked `belongsTo`, the book holds the reference to its author. For
/// `Author.books: [Book]` marked `hasMany`, the reference lives on the other side (each book).
/// `belongsToMany` relates two entities through a join table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AssociationKind {
    HasOne,
    HasMany,
    BelongsTo,
    BelongsToMany,
}

impl AssociationKind {
    pub const ALL: [AssociationKind; 4] = [
        AssociationKind::BelongsTo,
        AssociationKind::HasOne,
        AssociationKind::HasMany,
        AssociationKind::BelongsToMany,
    ];

    /// The order in which keywords must be looked for in free text: `belongsTo` is a substring of
    /// `belongsToMany`, so the longer keyword goes first.
    pub const MATCH_ORDER: [AssociationKind; 4] = [
        AssociationKind::BelongsToMany,
        AssociationKind::BelongsTo,
        AssociationKind::HasMany,
        AssociationKind::HasOne,
    ];

    pub fn keyword(&self) -> &'static str {
        match self {
            AssociationKind::HasOne => "hasOne",
            AssociationKind::HasMany => "hasMany",
            AssociationKind::BelongsTo => "belongsTo",
            AssociationKind::BelongsToMany => "belongsToMany",
        }
    }

    pub fn from_keyword(keyword: &str) -> Option<AssociationKind> {
        AssociationKind::ALL
            .into_iter()
            .find(|kind| kind.keyword() == keyword)
    }

    /// Does the association relate to many instances of the other entity (and thus must be
    /// declared as a list)?
    pub fn is_many(&self) -> bool {
        matches!(
            self,
            AssociationKind::HasMany | AssociationKind::BelongsToMany
        )
    }

    /// Comma-separated keywords, used in error messages.
    pub fn keywords() -> String {
        AssociationKind::ALL
            .iter()
            .map(|kind| kind.keyword())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl Display for AssociationKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.keyword())
    }
}
