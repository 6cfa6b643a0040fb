// Copyright 2025 the Waiting View Authors
// SPDX-License-Identifier: Apache-2.0

//! Payload types used by the style attributes.

mod alignment;
mod color_source;
mod tint;

pub use alignment::{Alignment, HorizontalAlignment, VerticalAlignment};
pub use color_source::{ColorSource, ResourceId};
pub use tint::TintFilter;
