//! Legend descriptors for rendered label maps.

use serde::{Deserialize, Serialize};

use crate::color::Rgba;

/// One legend entry: the display color and name of a single class.
///
/// The renderer produces one entry per class index, in catalog order,
/// regardless of which classes actually appear in the grid. Legend
/// colors are always opaque; the render alpha applies to the raster
/// only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LegendEntry {
    /// Display name of the class
    pub name: String,
    /// Color the class is drawn with
    pub color: Rgba,
}

impl LegendEntry {
    /// Create a legend entry.
    pub fn new(name: impl Into<String>, color: Rgba) -> Self {
        Self {
            name: name.into(),
            color,
        }
    }
}
