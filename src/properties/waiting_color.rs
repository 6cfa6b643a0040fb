// Copyright 2025 the Waiting View Authors
// SPDX-License-Identifier: Apache-2.0

use crate::properties::StyleAttribute;
use crate::properties::types::ColorSource;

/// The indicator's initial tint.
///
/// `None` (also the default when the attribute is absent) leaves the
/// indicator's graphic untinted.
#[derive(Default, Debug, Clone, Copy, PartialEq)]
pub struct WaitingColor(pub Option<ColorSource>);

impl StyleAttribute for WaitingColor {
    fn static_default() -> &'static Self {
        static DEFAULT: WaitingColor = WaitingColor(None);
        &DEFAULT
    }
}
