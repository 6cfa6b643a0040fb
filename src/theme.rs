// Copyright 2025 the Waiting View Authors
// SPDX-License-Identifier: Apache-2.0

//! Default values used by the spinner, and the color resource table.

use std::collections::HashMap;

use vello::peniko::Color;

use crate::properties::types::ResourceId;

/// Default color of the spinner's ticks when no tint is set.
pub const INDICATOR_COLOR: Color = Color::from_rgb8(0xf2, 0xf2, 0xf2);

/// Intrinsic width and height of the spinner in logical pixels.
pub const INDICATOR_SIZE: f64 = 40.0;

/// The ambient styling context a view is constructed against.
///
/// Holds the color resource table that [`ColorSource::Resource`] references
/// resolve through. Passed explicitly to
/// [`WaitingView::with_styles`] rather than read from global state.
///
/// [`ColorSource::Resource`]: crate::properties::types::ColorSource::Resource
/// [`WaitingView::with_styles`]: crate::widgets::WaitingView::with_styles
#[derive(Default, Clone, Debug)]
pub struct Theme {
    colors: HashMap<ResourceId, Color>,
}

impl Theme {
    /// Creates a theme with an empty resource table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style method for adding a color resource.
    pub fn with_color(mut self, id: ResourceId, color: impl Into<Color>) -> Self {
        self.insert_color(id, color);
        self
    }

    /// Adds a color resource, returning the previous value for that id.
    pub fn insert_color(&mut self, id: ResourceId, color: impl Into<Color>) -> Option<Color> {
        self.colors.insert(id, color.into())
    }

    /// Looks up a color resource by id.
    pub fn color(&self, id: ResourceId) -> Option<Color> {
        self.colors.get(&id).copied()
    }
}

// --- MARK: TESTS
#[cfg(test)]
mod tests {
    use vello::peniko::color::palette;

    use super::*;

    #[test]
    fn color_lookup() {
        let id = ResourceId(3);
        let mut theme = Theme::new().with_color(id, palette::css::REBECCA_PURPLE);
        assert_eq!(theme.color(id), Some(palette::css::REBECCA_PURPLE));
        assert_eq!(theme.color(ResourceId(4)), None);

        let previous = theme.insert_color(id, palette::css::HOT_PINK);
        assert_eq!(previous, Some(palette::css::REBECCA_PURPLE));
        assert_eq!(theme.color(id), Some(palette::css::HOT_PINK));
    }
}
