// Copyright 2025 the Waiting View Authors
// SPDX-License-Identifier: Apache-2.0

use accesskit::{Node, Role};
use tracing::trace_span;
use vello::Scene;
use vello::kurbo::{Affine, Rect, Size};
use vello::peniko::Color;

use crate::core::{LayoutParams, Margins, RenderHost};
use crate::properties::types::{Alignment, TintFilter};
use crate::properties::{
    StyleError, StyledAttributes, Waiting, WaitingColor, WaitingHeight, WaitingMargin,
    WaitingMarginBottom, WaitingMarginEnd, WaitingMarginStart, WaitingMarginTop, WaitingPosition,
    WaitingWidth,
};
use crate::theme::Theme;
use crate::widgets::Spinner;

/// A container-level controller that overlays a [`Spinner`] on content.
///
/// The view has exactly two observable states, toggled solely by
/// [`set_waiting`](Self::set_waiting): *idle*, where the content underneath
/// is visible and interactive, and *waiting*, where the spinner is painted on
/// top and the container is reported to the host as disabled. Position, size,
/// color and margins of the spinner are orthogonal continuous properties.
///
/// The spinner child is created in the constructor, before any accessor is
/// reachable, and owned exclusively for the view's entire lifetime. Every
/// setter applies its mutation synchronously and reports the visual
/// consequence to the [`RenderHost`]; the mutation takes effect on the host's
/// next layout or paint pass.
pub struct WaitingView<H: RenderHost> {
    host: H,
    spinner: Spinner,
    params: LayoutParams,
    waiting: bool,
    indicator_rect: Option<Rect>,
}

// --- MARK: BUILDERS
impl<H: RenderHost> WaitingView<H> {
    /// Creates an idle view with a centered, intrinsically sized spinner.
    pub fn new(host: H) -> Self {
        Self {
            host,
            spinner: Spinner::new(),
            params: LayoutParams::new(),
            waiting: false,
            indicator_rect: None,
        }
    }

    /// Creates a view and configures it from an attribute bundle.
    ///
    /// The spinner child is created first, unconditionally. The bundle is
    /// then read exactly once through its scoped [`reader`] and every
    /// resolved value is applied through the same public setters used for
    /// runtime mutation, so declarative and imperative configuration produce
    /// identical state. The bundle is released even when resolution fails;
    /// a failed color-resource lookup aborts construction.
    ///
    /// [`reader`]: StyledAttributes::reader
    pub fn with_styles(
        host: H,
        theme: &Theme,
        attrs: &StyledAttributes,
    ) -> Result<Self, StyleError> {
        let mut view = Self::new(host);
        view.apply_styles(theme, attrs)?;
        Ok(view)
    }

    fn apply_styles(&mut self, theme: &Theme, attrs: &StyledAttributes) -> Result<(), StyleError> {
        let _span = trace_span!("WaitingView::apply_styles").entered();

        let reader = attrs.reader();
        let Waiting(waiting) = *reader.get_or_default::<Waiting>();
        let WaitingPosition(position) = *reader.get_or_default::<WaitingPosition>();
        let WaitingColor(color) = *reader.get_or_default::<WaitingColor>();
        let WaitingWidth(width) = *reader.get_or_default::<WaitingWidth>();
        let WaitingHeight(height) = *reader.get_or_default::<WaitingHeight>();
        let WaitingMargin(shared) = *reader.get_or_default::<WaitingMargin>();
        let margins = Margins::new(
            reader.get_or_default::<WaitingMarginStart>().0.unwrap_or(shared),
            reader.get_or_default::<WaitingMarginTop>().0.unwrap_or(shared),
            reader.get_or_default::<WaitingMarginEnd>().0.unwrap_or(shared),
            reader.get_or_default::<WaitingMarginBottom>().0.unwrap_or(shared),
        );
        // The resource lookup is the one fallible step; the reader is
        // released on this path like any other.
        let color = color.map(|source| source.resolve(theme)).transpose()?;
        drop(reader);

        self.set_waiting(waiting);
        self.set_position(position);
        if let Some(color) = color {
            self.set_waiting_color(color);
        }
        if let Some(width) = width {
            self.set_waiting_width(width);
        }
        if let Some(height) = height {
            self.set_waiting_height(height);
        }
        self.set_waiting_margin(margins);
        tracing::debug!(waiting, ?position, "resolved waiting view attributes");
        Ok(())
    }
}

// --- MARK: ACCESSORS
impl<H: RenderHost> WaitingView<H> {
    /// Whether the spinner is currently shown.
    pub fn is_waiting(&self) -> bool {
        self.waiting
    }

    /// Shows or hides the spinner.
    ///
    /// Waiting and interactive are mutually exclusive: the waiting flag is
    /// mirrored, negated, into the host's enabled state. Showing also
    /// schedules the animation frames that drive the spinner. The overlay
    /// never affects the content's layout, so only a repaint is requested.
    pub fn set_waiting(&mut self, waiting: bool) {
        self.waiting = waiting;
        self.host.set_disabled(waiting);
        self.host.request_paint_only();
        if waiting {
            self.host.request_anim_frame();
        }
    }

    /// The spinner's gravity within the container.
    pub fn position(&self) -> Alignment {
        self.params.alignment()
    }

    /// Changes the spinner's gravity, leaving size and margins untouched.
    pub fn set_position(&mut self, position: impl Into<Alignment>) {
        self.params.set_alignment(position.into());
        self.host.request_layout();
    }

    /// The tint currently applied to the spinner, if any.
    pub fn waiting_color(&self) -> Option<Color> {
        self.spinner.tint().map(TintFilter::color)
    }

    /// Tints the spinner's graphic with `color`.
    ///
    /// The tint is composited with the source-in blend mode; see
    /// [`TintFilter`].
    pub fn set_waiting_color(&mut self, color: impl Into<Color>) {
        self.spinner.set_tint(Some(TintFilter::new(color)));
        self.host.request_paint_only();
    }

    /// Overrides the spinner's width in logical pixels.
    ///
    /// The height is left untouched.
    pub fn set_waiting_width(&mut self, width: f64) {
        self.params.set_width(Some(width));
        self.host.request_layout();
    }

    /// Overrides the spinner's height in logical pixels.
    ///
    /// The width is left untouched.
    pub fn set_waiting_height(&mut self, height: f64) {
        self.params.set_height(Some(height));
        self.host.request_layout();
    }

    /// Clears both size overrides, returning the spinner to intrinsic sizing.
    pub fn reset_waiting_size(&mut self) {
        self.params.set_width(None);
        self.params.set_height(None);
        self.host.request_layout();
    }

    /// Overwrites all four of the spinner's edge margins.
    pub fn set_waiting_margin(&mut self, margins: impl Into<Margins>) {
        self.params.set_margins(margins.into());
        self.host.request_layout();
    }

    /// The spinner's current layout parameters.
    pub fn layout_params(&self) -> &LayoutParams {
        &self.params
    }

    /// Read access to the owned spinner.
    pub fn spinner(&self) -> &Spinner {
        &self.spinner
    }
}

// --- MARK: PASSES
impl<H: RenderHost> WaitingView<H> {
    /// Lays out the spinner within a `container`-sized frame.
    ///
    /// The frame is computed even while idle so that showing the spinner
    /// later needs no extra layout pass. Returns the container size
    /// unchanged; the overlay never influences the container's own size.
    pub fn layout(&mut self, container: Size) -> Size {
        let size = self.params.resolve_size(self.spinner.intrinsic_size());
        let origin = self.params.place(size, container);
        self.indicator_rect = Some(Rect::from_origin_size(origin, size));
        container
    }

    /// The spinner's frame from the last layout pass.
    pub fn indicator_rect(&self) -> Option<Rect> {
        self.indicator_rect
    }

    /// Paints the spinner if the view is waiting and has been laid out.
    pub fn paint(&self, scene: &mut Scene) {
        if !self.waiting {
            return;
        }
        let Some(rect) = self.indicator_rect else {
            return;
        };
        self.spinner
            .paint(scene, Affine::translate(rect.origin().to_vec2()), rect.size());
    }

    /// Advances the spinner's animation by `interval` nanoseconds.
    ///
    /// While waiting, re-requests the next frame and a repaint; while idle,
    /// does nothing.
    pub fn on_anim_frame(&mut self, interval: u64) {
        if !self.waiting {
            return;
        }
        self.spinner.on_anim_frame(interval);
        self.host.request_anim_frame();
        self.host.request_paint_only();
    }

    /// The role the container reports to the accessibility tree.
    pub fn accessibility_role(&self) -> Role {
        self.spinner.accessibility_role()
    }

    /// Fills in the container's accessibility node.
    ///
    /// The node is marked hidden while idle, matching what is painted.
    pub fn accessibility(&self, node: &mut Node) {
        if !self.waiting {
            node.set_hidden();
        }
    }
}
