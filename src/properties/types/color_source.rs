// Copyright 2025 the Waiting View Authors
// SPDX-License-Identifier: Apache-2.0

use vello::peniko::Color;

use crate::properties::StyleError;
use crate::theme::Theme;

/// An identifier for a color entry in a [`Theme`]'s resource table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ResourceId(pub u32);

/// The value of a color attribute: either a literal color, or a reference
/// into the theme's resource table.
///
/// References are always resolved through the theme; a literal is never
/// reinterpreted as an id.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ColorSource {
    /// A color used as-is.
    Literal(Color),
    /// A color looked up in the theme by id.
    Resource(ResourceId),
}

impl ColorSource {
    /// Resolves this source to a concrete color.
    ///
    /// Fails if the source is a reference and the theme has no entry for it.
    pub fn resolve(self, theme: &Theme) -> Result<Color, StyleError> {
        match self {
            Self::Literal(color) => Ok(color),
            Self::Resource(id) => theme
                .color(id)
                .ok_or(StyleError::UnknownColorResource(id)),
        }
    }
}

impl From<Color> for ColorSource {
    fn from(color: Color) -> Self {
        Self::Literal(color)
    }
}

impl From<ResourceId> for ColorSource {
    fn from(id: ResourceId) -> Self {
        Self::Resource(id)
    }
}
