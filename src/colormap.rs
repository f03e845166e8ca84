//! Built-in continuous colormaps.
//!
//! Each colormap maps a normalized value in [0, 1] to a color. Viridis
//! and Magma are realized as evenly spaced anchor tables with linear
//! interpolation between neighboring stops.

use crate::color::{hsv_to_rgb, Rgba};
use crate::error::RenderError;

/// Viridis anchors at t = 0, 1/8, ..., 1.
const VIRIDIS: [[u8; 3]; 9] = [
    [68, 1, 84],
    [72, 40, 120],
    [62, 73, 137],
    [49, 104, 142],
    [38, 130, 142],
    [31, 158, 137],
    [53, 183, 121],
    [110, 206, 88],
    [253, 231, 37],
];

/// Magma anchors at t = 0, 1/8, ..., 1.
const MAGMA: [[u8; 3]; 9] = [
    [0, 0, 4],
    [28, 16, 68],
    [79, 18, 123],
    [129, 37, 129],
    [181, 54, 122],
    [229, 80, 100],
    [251, 135, 97],
    [254, 194, 135],
    [252, 253, 191],
];

/// A continuous palette function over a normalized class index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Colormap {
    /// Perceptually uniform, dark purple to yellow (the default).
    #[default]
    Viridis,
    /// Perceptually uniform, black to light cream.
    Magma,
    /// Black to white.
    Grayscale,
    /// Full hue wheel at maximum saturation and brightness.
    Hsv,
}

impl std::fmt::Display for Colormap {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Colormap::Viridis => write!(f, "Viridis"),
            Colormap::Magma => write!(f, "Magma"),
            Colormap::Grayscale => write!(f, "Grayscale"),
            Colormap::Hsv => write!(f, "HSV"),
        }
    }
}

impl Colormap {
    /// Look up a colormap by its lowercase name.
    pub fn from_name(name: &str) -> Result<Self, RenderError> {
        match name.to_lowercase().as_str() {
            "viridis" => Ok(Colormap::Viridis),
            "magma" => Ok(Colormap::Magma),
            "grayscale" | "gray" => Ok(Colormap::Grayscale),
            "hsv" => Ok(Colormap::Hsv),
            _ => Err(RenderError::UnknownColormap {
                name: name.to_string(),
            }),
        }
    }

    /// Sample the colormap at a normalized position.
    ///
    /// Non-finite input is treated as 0; finite input is clamped to
    /// [0, 1]. The returned color is opaque.
    pub fn sample(self, t: f32) -> Rgba {
        let t = if t.is_finite() { t.clamp(0.0, 1.0) } else { 0.0 };
        match self {
            Colormap::Viridis => sample_anchors(&VIRIDIS, t),
            Colormap::Magma => sample_anchors(&MAGMA, t),
            Colormap::Grayscale => Rgba::new(t, t, t, 1.0),
            Colormap::Hsv => {
                let (r, g, b) = hsv_to_rgb((t * 360.0).min(359.999), 1.0, 1.0);
                Rgba::new(r, g, b, 1.0)
            }
        }
    }
}

/// Interpolate within an evenly spaced anchor table.
fn sample_anchors(anchors: &[[u8; 3]], t: f32) -> Rgba {
    let scaled = t * (anchors.len() - 1) as f32;
    let lo = scaled.floor() as usize;
    let hi = (lo + 1).min(anchors.len() - 1);
    let frac = scaled - lo as f32;
    Rgba::from_rgb8(anchors[lo]).lerp(Rgba::from_rgb8(anchors[hi]), frac)
}
