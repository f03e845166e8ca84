//! Color-resolution strategies for class indices.

use crate::color::Rgba;
use crate::colormap::Colormap;

/// Maps a normalized class index in [0, 1] to a color.
///
/// The renderer selects the strategy at call time: explicit per-class
/// colors build an indexed table, otherwise a continuous colormap is
/// sampled directly.
#[derive(Debug, Clone, PartialEq)]
pub enum Palette {
    /// Sample a continuous colormap function.
    Continuous(Colormap),
    /// Look up a discrete table, one entry per class.
    ///
    /// Never empty; the renderer validates the class count before
    /// constructing it.
    Indexed(Vec<Rgba>),
}

impl Palette {
    /// Build a discrete palette from 8-bit RGB triples.
    pub fn from_colors(colors: &[[u8; 3]]) -> Self {
        Palette::Indexed(colors.iter().copied().map(Rgba::from_rgb8).collect())
    }

    /// Look up the color for a normalized index.
    ///
    /// Input is clamped to [0, 1]. For the indexed variant, the
    /// normalized index is mapped back to the nearest table entry.
    pub fn color_at(&self, t: f32) -> Rgba {
        match self {
            Palette::Continuous(colormap) => colormap.sample(t),
            Palette::Indexed(colors) => {
                let last = colors.len() - 1;
                let index = (t.clamp(0.0, 1.0) * last as f32).round() as usize;
                colors[index.min(last)]
            }
        }
    }
}
