// Copyright 2025 the Waiting View Authors
// SPDX-License-Identifier: Apache-2.0

/// The capabilities a [`WaitingView`] needs from the toolkit embedding it.
///
/// The controller never schedules work itself; every mutation that has a
/// visual consequence is reported through this trait so the host can fold it
/// into its own layout/paint/animation passes. All calls happen synchronously
/// on the host's UI thread, inside the accessor that caused them.
///
/// [`WaitingView`]: crate::widgets::WaitingView
pub trait RenderHost {
    /// Schedule a layout pass for the container.
    ///
    /// The host is expected to call [`WaitingView::layout`] again before the
    /// next paint.
    ///
    /// [`WaitingView::layout`]: crate::widgets::WaitingView::layout
    fn request_layout(&mut self);

    /// Schedule a repaint of the container, without re-running layout.
    fn request_paint_only(&mut self);

    /// Schedule an animation frame.
    ///
    /// The host should call [`WaitingView::on_anim_frame`] with the elapsed
    /// time once the frame fires.
    ///
    /// [`WaitingView::on_anim_frame`]: crate::widgets::WaitingView::on_anim_frame
    fn request_anim_frame(&mut self);

    /// Mark the container as disabled or re-enabled for input.
    ///
    /// While the overlay is waiting, the covered content must not be
    /// interactive; the controller reports the waiting flag here and the host
    /// gates event delivery.
    fn set_disabled(&mut self, disabled: bool);
}
