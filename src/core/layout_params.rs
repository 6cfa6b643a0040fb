// Copyright 2025 the Waiting View Authors
// SPDX-License-Identifier: Apache-2.0

use vello::kurbo::{Point, Size};

use crate::properties::types::{Alignment, HorizontalAlignment, VerticalAlignment};

/// Margins between the indicator and the container's edges, in logical pixels.
///
/// `start` and `end` map to the left and right edges; layout is LTR-only and
/// RTL mirroring, if any, is host policy.
#[derive(Default, Clone, Copy, Debug, PartialEq)]
pub struct Margins {
    /// The margin for the start (left) edge.
    pub start: f64,
    /// The margin for the top edge.
    pub top: f64,
    /// The margin for the end (right) edge.
    pub end: f64,
    /// The margin for the bottom edge.
    pub bottom: f64,
}

impl Margins {
    /// A margin of zero for all edges.
    pub const ZERO: Self = Self::all(0.);

    /// Creates new `Margins` from the four edge values.
    pub const fn new(start: f64, top: f64, end: f64, bottom: f64) -> Self {
        Self {
            start,
            top,
            end,
            bottom,
        }
    }

    /// Creates new `Margins` with an equal amount for all edges.
    pub const fn all(margin: f64) -> Self {
        Self {
            start: margin,
            top: margin,
            end: margin,
            bottom: margin,
        }
    }
}

impl From<f64> for Margins {
    /// Converts the value to a `Margins` object with that amount on all edges.
    fn from(value: f64) -> Self {
        Self::all(value)
    }
}

/// Layout parameters of the spinner indicator inside its container.
///
/// An unset width or height means the indicator keeps its intrinsic size on
/// that axis. The alignment and margins position the (resolved) indicator
/// frame within the container: margins inset the edge the indicator is
/// aligned to, and bias the position when it is centered.
#[derive(Default, Clone, Copy, Debug, PartialEq)]
pub struct LayoutParams {
    width: Option<f64>,
    height: Option<f64>,
    alignment: Alignment,
    margins: Margins,
}

impl LayoutParams {
    /// Creates layout parameters with intrinsic size, centered, no margins.
    pub fn new() -> Self {
        Self::default()
    }

    /// The explicit width, or `None` for intrinsic sizing.
    pub fn width(&self) -> Option<f64> {
        self.width
    }

    /// The explicit height, or `None` for intrinsic sizing.
    pub fn height(&self) -> Option<f64> {
        self.height
    }

    /// The indicator's alignment within the container.
    pub fn alignment(&self) -> Alignment {
        self.alignment
    }

    /// The indicator's margins.
    pub fn margins(&self) -> Margins {
        self.margins
    }

    /// Overrides the width, leaving the height untouched.
    pub fn set_width(&mut self, width: Option<f64>) {
        self.width = width;
    }

    /// Overrides the height, leaving the width untouched.
    pub fn set_height(&mut self, height: Option<f64>) {
        self.height = height;
    }

    /// Changes the alignment, leaving every other parameter untouched.
    pub fn set_alignment(&mut self, alignment: Alignment) {
        self.alignment = alignment;
    }

    /// Overwrites all four edge margins.
    pub fn set_margins(&mut self, margins: Margins) {
        self.margins = margins;
    }

    /// Resolves the indicator's size, falling back to `intrinsic` on each
    /// axis that has no explicit dimension.
    pub fn resolve_size(&self, intrinsic: Size) -> Size {
        Size::new(
            self.width.unwrap_or(intrinsic.width),
            self.height.unwrap_or(intrinsic.height),
        )
    }

    /// Computes the origin of a `child`-sized indicator within `container`.
    ///
    /// Per axis: aligned to the start, the start margin offsets the frame;
    /// aligned to the end, the end margin does; centered, the frame sits at
    /// half the surplus, shifted by the difference of the two margins.
    pub fn place(&self, child: Size, container: Size) -> Point {
        let Margins {
            start,
            top,
            end,
            bottom,
        } = self.margins;
        let x = match self.alignment.horizontal() {
            HorizontalAlignment::Start => start,
            HorizontalAlignment::Center => (container.width - child.width) / 2. + start - end,
            HorizontalAlignment::End => container.width - child.width - end,
        };
        let y = match self.alignment.vertical() {
            VerticalAlignment::Top => top,
            VerticalAlignment::Center => (container.height - child.height) / 2. + top - bottom,
            VerticalAlignment::Bottom => container.height - child.height - bottom,
        };
        Point::new(x, y)
    }
}

// --- MARK: TESTS
#[cfg(test)]
mod tests {
    use float_cmp::approx_eq;

    use super::*;

    #[test]
    fn margins_from_shared_value() {
        let margins: Margins = 8.0.into();
        assert_eq!(margins, Margins::new(8., 8., 8., 8.));
        assert_eq!(Margins::ZERO, Margins::all(0.));
    }

    #[test]
    fn place_centered_without_margins() {
        let params = LayoutParams::new();
        let origin = params.place(Size::new(40., 40.), Size::new(400., 300.));
        assert!(approx_eq!(f64, origin.x, 180., ulps = 2));
        assert!(approx_eq!(f64, origin.y, 130., ulps = 2));
    }

    #[test]
    fn place_corners_respect_margins() {
        let mut params = LayoutParams::new();
        params.set_margins(Margins::new(8., 2., 16., 4.));

        params.set_alignment(Alignment::TopStart);
        let origin = params.place(Size::new(40., 40.), Size::new(400., 300.));
        assert!(approx_eq!(f64, origin.x, 8., ulps = 2));
        assert!(approx_eq!(f64, origin.y, 2., ulps = 2));

        params.set_alignment(Alignment::BottomEnd);
        let origin = params.place(Size::new(40., 40.), Size::new(400., 300.));
        assert!(approx_eq!(f64, origin.x, 400. - 40. - 16., ulps = 2));
        assert!(approx_eq!(f64, origin.y, 300. - 40. - 4., ulps = 2));
    }

    #[test]
    fn place_centered_is_biased_by_margin_difference() {
        let mut params = LayoutParams::new();
        params.set_margins(Margins::new(10., 0., 4., 6.));
        let origin = params.place(Size::new(40., 40.), Size::new(400., 300.));
        assert!(approx_eq!(f64, origin.x, 180. + 10. - 4., ulps = 2));
        assert!(approx_eq!(f64, origin.y, 130. + 0. - 6., ulps = 2));
    }

    #[test]
    fn resolve_size_is_axis_independent() {
        let mut params = LayoutParams::new();
        let intrinsic = Size::new(40., 40.);

        params.set_width(Some(64.));
        assert_eq!(params.resolve_size(intrinsic), Size::new(64., 40.));
        assert_eq!(params.height(), None);

        params.set_height(Some(24.));
        assert_eq!(params.resolve_size(intrinsic), Size::new(64., 24.));
        assert_eq!(params.width(), Some(64.));
    }
}
