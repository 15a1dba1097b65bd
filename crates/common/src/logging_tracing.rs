// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

//! # Tracing configuration setup.
//!
//! Resolver construction and execution are instrumented with Rust's `tracing` framework. Libraries
//! only emit events; an application embedding them calls [`init`] once to install a global
//! subscriber that prints those events to the console.
//!
//! The filter is taken from the `COMPOSE_LOG` environment variable, which follows the same
//! conventions as `RUST_LOG`. Without it, only warnings and errors are shown.

use compose_env::Environment;
use thiserror::Error;
use tracing_subscriber::{EnvFilter, filter::LevelFilter, prelude::*};

use crate::env_const::COMPOSE_LOG;

#[derive(Error, Debug)]
pub enum LoggingInitError {
    #[error("A global tracing subscriber is already installed: {0}")]
    AlreadyInstalled(#[from] tracing_subscriber::util::TryInitError),
}

/// Initialize the tracing subscriber.
///
/// Creates a compact `tracing_subscriber::fmt` layer filtered by [`env_filter`].
pub fn init(env: &dyn Environment) -> Result<(), LoggingInitError> {
    let fmt_layer = tracing_subscriber::fmt::layer().compact();

    tracing_subscriber::registry()
        .with(env_filter(env))
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}

/// The filter described by `COMPOSE_LOG`, defaulting to `warn`. Invalid directives are skipped.
pub fn env_filter(env: &dyn Environment) -> EnvFilter {
    EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .parse_lossy(env.get(COMPOSE_LOG).unwrap_or_default())
}
