// Copyright 2025 the Waiting View Authors
// SPDX-License-Identifier: Apache-2.0

use crate::properties::StyleAttribute;

/// The shared fallback margin for all four edges, in logical pixels.
///
/// Each edge can be overridden individually with the per-edge attributes
/// below.
#[derive(Default, Debug, Clone, Copy, PartialEq)]
pub struct WaitingMargin(pub f64);

impl StyleAttribute for WaitingMargin {
    fn static_default() -> &'static Self {
        static DEFAULT: WaitingMargin = WaitingMargin(0.);
        &DEFAULT
    }
}

/// Overrides [`WaitingMargin`] for the start edge.
#[derive(Default, Debug, Clone, Copy, PartialEq)]
pub struct WaitingMarginStart(pub Option<f64>);

impl StyleAttribute for WaitingMarginStart {
    fn static_default() -> &'static Self {
        static DEFAULT: WaitingMarginStart = WaitingMarginStart(None);
        &DEFAULT
    }
}

/// Overrides [`WaitingMargin`] for the top edge.
#[derive(Default, Debug, Clone, Copy, PartialEq)]
pub struct WaitingMarginTop(pub Option<f64>);

impl StyleAttribute for WaitingMarginTop {
    fn static_default() -> &'static Self {
        static DEFAULT: WaitingMarginTop = WaitingMarginTop(None);
        &DEFAULT
    }
}

/// Overrides [`WaitingMargin`] for the end edge.
#[derive(Default, Debug, Clone, Copy, PartialEq)]
pub struct WaitingMarginEnd(pub Option<f64>);

impl StyleAttribute for WaitingMarginEnd {
    fn static_default() -> &'static Self {
        static DEFAULT: WaitingMarginEnd = WaitingMarginEnd(None);
        &DEFAULT
    }
}

/// Overrides [`WaitingMargin`] for the bottom edge.
#[derive(Default, Debug, Clone, Copy, PartialEq)]
pub struct WaitingMarginBottom(pub Option<f64>);

impl StyleAttribute for WaitingMarginBottom {
    fn static_default() -> &'static Self {
        static DEFAULT: WaitingMarginBottom = WaitingMarginBottom(None);
        &DEFAULT
    }
}
