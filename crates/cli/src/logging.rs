// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

//! Logging is configured through the `GQLSTORE_LOG` environment variable, which follows the same
//! conventions as `RUST_LOG` (for example `GQLSTORE_LOG=debug` or
//! `GQLSTORE_LOG=core_model_builder=trace`). Logs go to stderr so that they never mix with the
//! JSON written to stdout.

use tracing_subscriber::{EnvFilter, filter::LevelFilter, prelude::*};

const GQLSTORE_LOG: &str = "GQLSTORE_LOG";

pub fn init() {
    let fmt_layer = tracing_subscriber::fmt::layer()
        .compact()
        .with_writer(std::io::stderr);
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .with_env_var(GQLSTORE_LOG)
        .from_env_lossy();

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .init();
}
