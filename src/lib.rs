// Copyright 2025 the Waiting View Authors
// SPDX-License-Identifier: Apache-2.0

//! A container widget that overlays a loading spinner on arbitrary content.
//!
//! The crate provides one component, [`WaitingView`]: a controller that owns a
//! single [`Spinner`] indicator and toggles the containing view between a
//! *waiting* and a *ready* state. While waiting, the spinner is painted on top
//! of whatever content the embedding toolkit lays out underneath, and the
//! container is reported as disabled so input does not reach the covered
//! content.
//!
//! The controller is not tied to a concrete windowing stack. The embedding
//! toolkit implements the small [`RenderHost`] capability trait to receive
//! re-layout, repaint and animation-frame requests, calls
//! [`WaitingView::layout`] and [`WaitingView::paint`] from its own passes, and
//! is otherwise free to place the container wherever it wants. Painting
//! targets a [`vello::Scene`].
//!
//! Initial state can be described declaratively with a typed attribute bundle
//! ([`StyledAttributes`]), resolved once at construction against a [`Theme`].
//! Declarative and imperative configuration go through the same setters and
//! therefore produce identical state.
//!
//! ```
//! use waiting_view::palette;
//! use waiting_view::properties::types::Alignment;
//! use waiting_view::testing::Recording;
//! use waiting_view::widgets::WaitingView;
//!
//! let mut view = WaitingView::new(Recording::default());
//! view.set_position(Alignment::BottomEnd);
//! view.set_waiting_color(palette::css::PURPLE);
//! view.set_waiting(true);
//! assert!(view.is_waiting());
//! ```
//!
//! [`WaitingView`]: crate::widgets::WaitingView
//! [`Spinner`]: crate::widgets::Spinner
//! [`RenderHost`]: crate::core::RenderHost
//! [`StyledAttributes`]: crate::properties::StyledAttributes
//! [`Theme`]: crate::theme::Theme

#![expect(missing_debug_implementations, reason = "Deferred: Noisy")]

pub use vello;
pub use vello::kurbo;
pub use vello::peniko;
pub use vello::peniko::color::palette;

pub mod core;
pub mod properties;
pub mod testing;
pub mod theme;
pub mod widgets;

mod tracing_backend;
