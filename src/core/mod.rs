// Copyright 2025 the Waiting View Authors
// SPDX-License-Identifier: Apache-2.0

//! Host-facing core types: the [`RenderHost`] capability trait and the
//! indicator's [`LayoutParams`].

mod host;
mod layout_params;

pub use host::RenderHost;
pub use layout_params::{LayoutParams, Margins};
