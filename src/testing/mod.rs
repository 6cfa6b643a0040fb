// Copyright 2025 the Waiting View Authors
// SPDX-License-Identifier: Apache-2.0

//! Helper tools for testing views without a rendering host.

mod harness;
mod recording;

pub use harness::TestHarness;
pub use recording::{Record, Recording};
