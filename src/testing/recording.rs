// Copyright 2025 the Waiting View Authors
// SPDX-License-Identifier: Apache-2.0

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use crate::core::RenderHost;

/// A host signal captured by a [`Recording`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Record {
    /// A layout pass was requested.
    RequestLayout,
    /// A repaint was requested.
    RequestPaint,
    /// An animation frame was requested.
    RequestAnimFrame,
    /// The container's disabled flag was set.
    Disabled(bool),
}

/// A [`RenderHost`] that records every signal it receives.
///
/// Clones share the same queue, so a test can keep one handle while the view
/// under test owns another:
///
/// ```
/// use assert_matches::assert_matches;
/// use waiting_view::testing::{Record, Recording};
/// use waiting_view::widgets::WaitingView;
///
/// let recording = Recording::default();
/// let mut view = WaitingView::new(recording.clone());
/// view.set_waiting(true);
/// assert_matches!(recording.next().unwrap(), Record::Disabled(true));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Recording(Rc<RefCell<VecDeque<Record>>>);

impl Recording {
    /// Whether nothing has been recorded since the last drain.
    pub fn is_empty(&self) -> bool {
        self.0.borrow().is_empty()
    }

    /// The number of records currently queued.
    pub fn len(&self) -> usize {
        self.0.borrow().len()
    }

    /// Discards all queued records.
    pub fn clear(&self) {
        self.0.borrow_mut().clear();
    }

    /// Returns the next record, if one exists.
    ///
    /// This consumes the record.
    pub fn next(&self) -> Option<Record> {
        self.0.borrow_mut().pop_front()
    }

    /// Returns a vec of records drained from the queue.
    pub fn drain(&self) -> Vec<Record> {
        self.0.borrow_mut().drain(..).collect::<Vec<_>>()
    }

    /// The container's disabled flag as of the latest queued record.
    ///
    /// `false` if no `Disabled` record is queued.
    pub fn is_disabled(&self) -> bool {
        self.0
            .borrow()
            .iter()
            .rev()
            .find_map(|record| match record {
                Record::Disabled(disabled) => Some(*disabled),
                _ => None,
            })
            .unwrap_or(false)
    }

    fn push(&self, record: Record) {
        self.0.borrow_mut().push_back(record);
    }
}

impl RenderHost for Recording {
    fn request_layout(&mut self) {
        self.push(Record::RequestLayout);
    }

    fn request_paint_only(&mut self) {
        self.push(Record::RequestPaint);
    }

    fn request_anim_frame(&mut self) {
        self.push(Record::RequestAnimFrame);
    }

    fn set_disabled(&mut self, disabled: bool) {
        self.push(Record::Disabled(disabled));
    }
}
