//! Class catalog entry for segmentation labels.

use serde::{Deserialize, Serialize};

/// A segmentation class with a display name and an optional fixed color.
///
/// The position of a class in a catalog defines the integer label value
/// that maps to it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Class {
    /// Display name of the class
    pub name: String,
    /// Explicit RGB color, if the class has one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<[u8; 3]>,
}

impl Class {
    /// Create a class with the given name and no fixed color.
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            color: None,
        }
    }

    /// Attach an explicit RGB color.
    pub fn with_color(mut self, color: [u8; 3]) -> Self {
        self.color = Some(color);
        self
    }
}
