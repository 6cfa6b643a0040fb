// Copyright 2025 the Waiting View Authors
// SPDX-License-Identifier: Apache-2.0

use crate::properties::StyleAttribute;

/// Whether the view starts out in the waiting state.
///
/// While waiting, the indicator is shown and the container stops accepting
/// input.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Waiting(pub bool);

impl StyleAttribute for Waiting {
    fn static_default() -> &'static Self {
        static DEFAULT: Waiting = Waiting(false);
        &DEFAULT
    }
}
