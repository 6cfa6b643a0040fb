// Copyright 2025 the Waiting View Authors
// SPDX-License-Identifier: Apache-2.0

use vello::peniko::{BlendMode, Color, Compose, Mix};

/// A color transform applied on top of the indicator's graphic.
///
/// The default blend is source-in: the tint color replaces the graphic's
/// color while keeping its alpha, which recolors the spinner without
/// washing out its fade. The earlier multiply behavior remains available
/// through [`with_mode`](Self::with_mode).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TintFilter {
    color: Color,
    blend: BlendMode,
}

impl TintFilter {
    /// Creates a source-in tint with the given color.
    pub fn new(color: impl Into<Color>) -> Self {
        Self {
            color: color.into(),
            blend: BlendMode::new(Mix::Normal, Compose::SrcIn),
        }
    }

    /// Builder-style method for overriding the blend mode.
    pub fn with_mode(mut self, blend: impl Into<BlendMode>) -> Self {
        self.blend = blend.into();
        self
    }

    /// The tint color.
    pub fn color(&self) -> Color {
        self.color
    }

    /// The blend mode the tint is composited with.
    pub fn blend(&self) -> BlendMode {
        self.blend
    }
}

// --- MARK: TESTS
#[cfg(test)]
mod tests {
    use vello::peniko::color::palette;

    use super::*;

    #[test]
    fn defaults_to_source_in() {
        let tint = TintFilter::new(palette::css::PURPLE);
        assert_eq!(tint.color(), palette::css::PURPLE);
        assert_eq!(tint.blend(), BlendMode::new(Mix::Normal, Compose::SrcIn));
    }

    #[test]
    fn blend_mode_can_be_overridden() {
        let tint = TintFilter::new(palette::css::PURPLE).with_mode(Mix::Multiply);
        assert_eq!(tint.blend(), BlendMode::from(Mix::Multiply));
    }
}
