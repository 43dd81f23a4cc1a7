// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

//! Storage-neutral model of entities, fields and their associations.
//!
//! The model is produced by `core-model-builder` from SDL type definitions and consumed by the
//! storage model builder and by the operation naming in [`naming`].

pub mod association;
pub mod naming;
pub mod primitive_type;
pub mod types;
