// Copyright 2025 the Waiting View Authors
// SPDX-License-Identifier: Apache-2.0

use vello::Scene;
use vello::kurbo::Size;

use crate::testing::Recording;
use crate::tracing_backend::try_init_test_tracing;
use crate::widgets::WaitingView;

/// The window size the harness defaults to.
pub const HARNESS_DEFAULT_SIZE: Size = Size::new(400., 400.);

/// A headless driver for a [`WaitingView`].
///
/// Stands in for the embedding toolkit: it runs the layout pass, paints into
/// a fresh [`Scene`], and feeds animation frames, without any window or GPU
/// surface. Mutations go through [`edit_view`](Self::edit_view), which
/// re-runs layout afterwards the way a real host would on the next pass.
pub struct TestHarness {
    view: WaitingView<Recording>,
    window_size: Size,
}

impl TestHarness {
    /// Creates a harness with the default window size.
    pub fn create(view: WaitingView<Recording>) -> Self {
        Self::create_with_size(view, HARNESS_DEFAULT_SIZE)
    }

    /// Creates a harness with a given window size and runs the first layout
    /// pass.
    pub fn create_with_size(view: WaitingView<Recording>, window_size: Size) -> Self {
        try_init_test_tracing();
        let mut harness = Self { view, window_size };
        harness.run_layout();
        harness
    }

    /// Runs a layout pass at the harness's window size.
    pub fn run_layout(&mut self) {
        self.view.layout(self.window_size);
    }

    /// Runs a paint pass into a fresh scene and returns it.
    pub fn paint(&mut self) -> Scene {
        let mut scene = Scene::new();
        self.view.paint(&mut scene);
        scene
    }

    /// Advances the animation by `ms` milliseconds.
    pub fn animate_ms(&mut self, ms: u64) {
        self.view.on_anim_frame(ms * 1_000_000);
    }

    /// Mutates the view, then re-runs layout.
    pub fn edit_view<R>(&mut self, f: impl FnOnce(&mut WaitingView<Recording>) -> R) -> R {
        let result = f(&mut self.view);
        self.run_layout();
        result
    }

    /// The view under test.
    pub fn view(&self) -> &WaitingView<Recording> {
        &self.view
    }

    /// The harness's window size.
    pub fn window_size(&self) -> Size {
        self.window_size
    }
}
