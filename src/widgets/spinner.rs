// Copyright 2025 the Waiting View Authors
// SPDX-License-Identifier: Apache-2.0

//! The animated spinner indicator.

use std::f64::consts::PI;

use accesskit::Role;
use vello::Scene;
use vello::kurbo::{Affine, Cap, Line, Point, Size, Stroke, Vec2};
use vello::peniko::{BlendMode, Color, Fill};

use crate::properties::types::TintFilter;
use crate::theme;

/// The spinner overlaid on the container's content while waiting.
///
/// Twelve ticks arranged in a circle, fading around once per second. The
/// spinner has no layout of its own; the owning view decides its frame and
/// passes the resolved size to [`paint`](Self::paint).
pub struct Spinner {
    t: f64,
    color: Color,
    tint: Option<TintFilter>,
}

impl Default for Spinner {
    fn default() -> Self {
        Self {
            t: 0.0,
            color: theme::INDICATOR_COLOR,
            tint: None,
        }
    }
}

// --- MARK: BUILDERS
impl Spinner {
    /// Creates a spinner.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style method for setting the spinner's base color.
    pub fn with_color(mut self, color: impl Into<Color>) -> Self {
        self.color = color.into();
        self
    }
}

// --- MARK: METHODS
impl Spinner {
    /// The base color the ticks are painted with.
    pub fn color(&self) -> Color {
        self.color
    }

    /// Sets the base color the ticks are painted with.
    pub fn set_color(&mut self, color: impl Into<Color>) {
        self.color = color.into();
    }

    /// The tint filter composited over the ticks, if any.
    pub fn tint(&self) -> Option<&TintFilter> {
        self.tint.as_ref()
    }

    /// Sets or clears the tint filter.
    pub fn set_tint(&mut self, tint: Option<TintFilter>) {
        self.tint = tint;
    }

    /// The size the spinner takes when no explicit size is set.
    pub fn intrinsic_size(&self) -> Size {
        Size::new(theme::INDICATOR_SIZE, theme::INDICATOR_SIZE)
    }

    /// The current animation phase, in `0.0..1.0`.
    pub fn phase(&self) -> f64 {
        self.t
    }

    /// Advances the animation by `interval` nanoseconds.
    pub fn on_anim_frame(&mut self, interval: u64) {
        self.t += (interval as f64) * 1e-9;
        if self.t >= 1.0 {
            self.t = self.t.rem_euclid(1.0);
        }
    }

    /// Paints the spinner into a `size`-dimensioned frame under `transform`.
    ///
    /// When a tint filter is set, the ticks are painted into an isolated
    /// layer and the tint color is composited over them with the filter's
    /// blend mode.
    pub fn paint(&self, scene: &mut Scene, transform: Affine, size: Size) {
        match &self.tint {
            Some(tint) => {
                let bounds = size.to_rect();
                scene.push_layer(Fill::NonZero, BlendMode::default(), 1.0, transform, &bounds);
                self.paint_ticks(scene, transform, size);
                scene.push_layer(Fill::NonZero, tint.blend(), 1.0, transform, &bounds);
                scene.fill(Fill::NonZero, transform, tint.color(), None, &bounds);
                scene.pop_layer();
                scene.pop_layer();
            }
            None => self.paint_ticks(scene, transform, size),
        }
    }

    fn paint_ticks(&self, scene: &mut Scene, transform: Affine, size: Size) {
        let t = self.t;
        let (width, height) = (size.width, size.height);
        let center = Point::new(width / 2.0, height / 2.0);
        let scale_factor = width.min(height) / 40.0;

        for step in 1..=12 {
            let step = f64::from(step);
            let fade_t = (t * 12.0 + 1.0).trunc();
            let fade = ((fade_t + step).rem_euclid(12.0) / 12.0) + 1.0 / 12.0;
            let angle = Vec2::from_angle((step / 12.0) * -2.0 * PI);
            let tick_start = center + (10.0 * scale_factor * angle);
            let tick_end = center + (20.0 * scale_factor * angle);
            let color = self.color.multiply_alpha(fade as f32);

            scene.stroke(
                &Stroke::new(3.0 * scale_factor).with_caps(Cap::Square),
                transform,
                color,
                None,
                &Line::new(tick_start, tick_end),
            );
        }
    }

    /// The role this indicator reports to the accessibility tree.
    pub fn accessibility_role(&self) -> Role {
        Role::ProgressIndicator
    }
}

// --- MARK: TESTS
#[cfg(test)]
mod tests {
    use float_cmp::approx_eq;
    use vello::peniko::color::palette;

    use super::*;

    #[test]
    fn anim_frame_advances_the_phase() {
        let mut spinner = Spinner::new();
        spinner.on_anim_frame(250_000_000);
        assert!(approx_eq!(f64, spinner.phase(), 0.25, ulps = 2));
    }

    #[test]
    fn anim_phase_wraps_after_a_second() {
        let mut spinner = Spinner::new();
        spinner.on_anim_frame(1_500_000_000);
        assert!(spinner.phase() < 1.0);
        assert!(approx_eq!(f64, spinner.phase(), 0.5, ulps = 2));
    }

    #[test]
    fn paint_with_and_without_tint() {
        let mut spinner = Spinner::new().with_color(palette::css::WHITE);
        let size = spinner.intrinsic_size();

        let mut scene = Scene::new();
        spinner.paint(&mut scene, Affine::IDENTITY, size);

        spinner.set_tint(Some(TintFilter::new(palette::css::PURPLE)));
        let mut scene = Scene::new();
        spinner.paint(&mut scene, Affine::IDENTITY, size);
    }
}
