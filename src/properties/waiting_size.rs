// Copyright 2025 the Waiting View Authors
// SPDX-License-Identifier: Apache-2.0

use crate::properties::StyleAttribute;

/// The indicator's initial explicit width in logical pixels.
///
/// `None` keeps the indicator's intrinsic width.
#[derive(Default, Debug, Clone, Copy, PartialEq)]
pub struct WaitingWidth(pub Option<f64>);

impl StyleAttribute for WaitingWidth {
    fn static_default() -> &'static Self {
        static DEFAULT: WaitingWidth = WaitingWidth(None);
        &DEFAULT
    }
}

/// The indicator's initial explicit height in logical pixels.
///
/// `None` keeps the indicator's intrinsic height.
#[derive(Default, Debug, Clone, Copy, PartialEq)]
pub struct WaitingHeight(pub Option<f64>);

impl StyleAttribute for WaitingHeight {
    fn static_default() -> &'static Self {
        static DEFAULT: WaitingHeight = WaitingHeight(None);
        &DEFAULT
    }
}
