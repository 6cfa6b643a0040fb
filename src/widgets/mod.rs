// Copyright 2025 the Waiting View Authors
// SPDX-License-Identifier: Apache-2.0

//! The spinner indicator and the container controller that owns it.

mod spinner;
mod waiting_view;

pub use spinner::Spinner;
pub use waiting_view::WaitingView;
