// Copyright 2025 the Waiting View Authors
// SPDX-License-Identifier: Apache-2.0

//! Tracing initialisation for the test suite.

use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;

/// Initialise tracing for unit tests.
///
/// For unit tests we want to suppress most messages, so the default level is
/// WARN; `RUST_LOG` still overrides it. Calling this more than once is fine,
/// only the first subscriber wins.
pub(crate) fn try_init_test_tracing() {
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .from_env_lossy();
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_test_writer()
        .try_init();
}
