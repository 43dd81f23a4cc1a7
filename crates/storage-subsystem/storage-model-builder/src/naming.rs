// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use core_model::{naming::ToPlural, types::EntityModel};
use heck::ToSnakeCase;

pub trait ToTableName {
    fn table_name(&self) -> String;
}

impl ToTableName for str {
    fn table_name(&self) -> String {
        self.to_plural().to_snake_case()
    }
}

impl ToTableName for EntityModel {
    fn table_name(&self) -> String {
        self.plural_name.to_snake_case()
    }
}

pub fn column_name(field_name: &str) -> String {
    field_name.to_snake_case()
}

/// `author` -> `author_id`, `ConcertArtist` -> `concert_artist_id`
pub fn foreign_key_column_name(name: &str) -> String {
    format!("{}_id", name.to_snake_case())
}

/// Join tables are named after both tables, in alphabetical order, so that both sides of a
/// `belongsToMany` pair arrive at the same name.
pub fn join_table_name(table_name: &str, other_table_name: &str) -> String {
    let (first, second) = if table_name <= other_table_name {
        (table_name, other_table_name)
    } else {
        (other_table_name, table_name)
    };

    format!("{first}_{second}")
}
