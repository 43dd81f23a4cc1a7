// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

//! Map the intermediate model to tables, columns and relations.
//!
//! - Every entity gets a table (named after its plural, in snake case) with a column per
//!   primitive field. Lists of primitives are stored as JSON.
//! - A field named `id` is the primary key. Entities without one get an auto-incrementing `id`.
//! - `belongsTo` adds a foreign key column to the entity's own table, `hasOne`/`hasMany` add one
//!   to the target's table, and `belongsToMany` goes through a join table.

pub mod error;
pub mod naming;
pub mod system_builder;

mod relation_builder;
mod table_builder;

pub use error::StorageModelBuildingError;
pub use system_builder::build;

#[cfg(test)]
mod test_util;
