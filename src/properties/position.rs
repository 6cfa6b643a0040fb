// Copyright 2025 the Waiting View Authors
// SPDX-License-Identifier: Apache-2.0

use crate::properties::StyleAttribute;
use crate::properties::types::Alignment;

/// The indicator's initial gravity within the container.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub struct WaitingPosition(pub Alignment);

impl StyleAttribute for WaitingPosition {
    fn static_default() -> &'static Self {
        static DEFAULT: WaitingPosition = WaitingPosition(Alignment::Center);
        &DEFAULT
    }
}
