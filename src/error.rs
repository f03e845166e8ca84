//! Error types for label rendering operations.

use thiserror::Error;

/// Errors that can occur while rendering a label map.
///
/// All validation happens before any pixel is written, so a failed
/// render never partially mutates a supplied surface.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RenderError {
    /// Number of supplied colors differs from the number of classes
    #[error("got {given} colors for {n_class} classes")]
    InvalidColorCount {
        /// Number of colors supplied
        given: usize,
        /// Number of classes resolved from the catalog
        n_class: usize,
    },

    /// Label values exceed the declared number of classes
    #[error("label value {max_label} exceeds the number of classes ({n_class})")]
    OutOfRangeClass {
        /// Largest label value found in the grid
        max_label: i32,
        /// Number of classes resolved from the catalog
        n_class: usize,
    },

    /// No classes could be resolved from the inputs
    #[error("the number of classes is zero")]
    NoClasses,

    /// The label grid has no pixels
    #[error("label grid is empty")]
    EmptyLabel,

    /// Alpha outside the valid range
    #[error("alpha must be within [0, 1], got {alpha}")]
    InvalidAlpha {
        /// The rejected alpha value
        alpha: f32,
    },

    /// Target surface does not match the input dimensions
    #[error(
        "surface size {surface_width}x{surface_height} does not match input size {width}x{height}"
    )]
    SurfaceSizeMismatch {
        /// Width of the supplied surface
        surface_width: u32,
        /// Height of the supplied surface
        surface_height: u32,
        /// Width of the input grid or image
        width: u32,
        /// Height of the input grid or image
        height: u32,
    },

    /// Image input with a channel count other than 3
    #[error("image must have 3 channels, got {channels}")]
    InvalidChannelCount {
        /// Number of channels in the input
        channels: usize,
    },

    /// Colormap name not recognized
    #[error("unknown colormap: {name}")]
    UnknownColormap {
        /// The unrecognized name
        name: String,
    },
}
