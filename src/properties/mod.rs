// Copyright 2025 the Waiting View Authors
// SPDX-License-Identifier: Apache-2.0

//! The declarative configuration surface of the view.
//!
//! A [`StyledAttributes`] bundle holds typed attribute values describing the
//! initial state of a [`WaitingView`]. The view resolves the bundle exactly
//! once at construction, through a scoped [`StyleReader`] handle, and applies
//! every resolved value through the same public setters used for runtime
//! mutation. Attribute types the view does not recognize are ignored.
//!
//! [`WaitingView`]: crate::widgets::WaitingView

use std::cell::Cell;
use std::error::Error;
use std::fmt;

use anymap3::AnyMap;

mod position;
mod waiting;
mod waiting_color;
mod waiting_margin;
mod waiting_size;

pub mod types;

pub use position::WaitingPosition;
pub use waiting::Waiting;
pub use waiting_color::WaitingColor;
pub use waiting_margin::{
    WaitingMargin, WaitingMarginBottom, WaitingMarginEnd, WaitingMarginStart, WaitingMarginTop,
};
pub use waiting_size::{WaitingHeight, WaitingWidth};

use types::ResourceId;

/// A typed attribute that can be placed in a [`StyledAttributes`] bundle.
pub trait StyleAttribute: Default + 'static {
    /// The value used when the bundle has no entry of this type.
    fn static_default() -> &'static Self;
}

/// An error raised while resolving a [`StyledAttributes`] bundle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StyleError {
    /// A color attribute referenced a resource id the theme does not define.
    UnknownColorResource(ResourceId),
}

impl fmt::Display for StyleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownColorResource(ResourceId(id)) => {
                write!(f, "the theme defines no color resource with id {id}")
            }
        }
    }
}

impl Error for StyleError {}

/// A bundle of typed attribute values, read once at view construction.
///
/// Entries are stored by type, one value per attribute type, mirroring how a
/// declarative markup layer supplies at most one value per attribute key.
///
/// ```
/// use waiting_view::properties::{StyledAttributes, Waiting, WaitingMargin};
///
/// let attrs = StyledAttributes::new()
///     .with(Waiting(true))
///     .with(WaitingMargin(8.));
/// assert!(attrs.contains::<Waiting>());
/// ```
#[derive(Default)]
pub struct StyledAttributes {
    map: AnyMap,
    released: Cell<bool>,
}

impl StyledAttributes {
    /// Creates an empty bundle.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style method for adding an attribute value.
    ///
    /// Replaces any previous value of the same type.
    pub fn with<T: StyleAttribute>(mut self, value: T) -> Self {
        self.insert(value);
        self
    }

    /// Adds an attribute value, returning the previous value of that type.
    pub fn insert<T: StyleAttribute>(&mut self, value: T) -> Option<T> {
        self.map.insert(value)
    }

    /// Whether the bundle has an entry of type `T`.
    pub fn contains<T: StyleAttribute>(&self) -> bool {
        self.map.contains::<T>()
    }

    /// Acquires the scoped resolution handle for this bundle.
    ///
    /// The handle must not outlive the resolution that consumes it; dropping
    /// it releases the bundle on every path, including error propagation out
    /// of the resolving function.
    pub fn reader(&self) -> StyleReader<'_> {
        self.released.set(false);
        StyleReader { attrs: self }
    }

    /// Whether the last acquired [`StyleReader`] has been released.
    pub fn is_released(&self) -> bool {
        self.released.get()
    }
}

/// The scoped handle through which a [`StyledAttributes`] bundle is read.
///
/// Releases the bundle when dropped.
pub struct StyleReader<'a> {
    attrs: &'a StyledAttributes,
}

impl StyleReader<'_> {
    /// The bundle's value of type `T`, if present.
    pub fn get<T: StyleAttribute>(&self) -> Option<&T> {
        self.attrs.map.get::<T>()
    }

    /// The bundle's value of type `T`, or the attribute's default.
    pub fn get_or_default<T: StyleAttribute>(&self) -> &T {
        self.get::<T>().unwrap_or_else(|| T::static_default())
    }
}

impl Drop for StyleReader<'_> {
    fn drop(&mut self) {
        self.attrs.released.set(true);
    }
}

// --- MARK: TESTS
#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::types::Alignment;
    use super::*;

    #[test]
    fn absent_entries_fall_back_to_defaults() {
        let attrs = StyledAttributes::new();
        let reader = attrs.reader();
        assert_eq!(*reader.get_or_default::<Waiting>(), Waiting(false));
        assert_eq!(
            *reader.get_or_default::<WaitingPosition>(),
            WaitingPosition(Alignment::Center),
        );
        assert_eq!(*reader.get_or_default::<WaitingWidth>(), WaitingWidth(None));
        assert_eq!(*reader.get_or_default::<WaitingMargin>(), WaitingMargin(0.));
        assert_matches!(reader.get::<Waiting>(), None);
    }

    #[test]
    fn inserted_entries_shadow_defaults() {
        let attrs = StyledAttributes::new()
            .with(Waiting(true))
            .with(WaitingMarginTop(Some(2.)));
        let reader = attrs.reader();
        assert_eq!(*reader.get_or_default::<Waiting>(), Waiting(true));
        assert_eq!(
            *reader.get_or_default::<WaitingMarginTop>(),
            WaitingMarginTop(Some(2.)),
        );
    }

    #[test]
    fn reader_releases_on_drop() {
        let attrs = StyledAttributes::new().with(Waiting(true));
        {
            let reader = attrs.reader();
            assert!(!attrs.is_released());
            let _ = reader.get::<Waiting>();
        }
        assert!(attrs.is_released());
    }

    #[test]
    fn reader_releases_when_resolution_errors() {
        fn resolve(attrs: &StyledAttributes) -> Result<(), StyleError> {
            let reader = attrs.reader();
            let _ = reader.get_or_default::<Waiting>();
            Err(StyleError::UnknownColorResource(ResourceId(9)))?;
            Ok(())
        }

        let attrs = StyledAttributes::new();
        assert_matches!(resolve(&attrs), Err(StyleError::UnknownColorResource(_)));
        assert!(attrs.is_released());
    }
}
