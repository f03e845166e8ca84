//! Drawing surface backed by an RGBA raster.

use image::{Pixel, RgbaImage};

use crate::color::Rgba;

/// A drawing target for rendered output.
///
/// Wraps an [`image::RgbaImage`]. A fresh surface is fully transparent;
/// drawing composites source-over onto whatever content the surface
/// already holds, so a label overlay rendered with partial alpha blends
/// with a previously drawn base image.
#[derive(Debug, Clone)]
pub struct Surface {
    image: RgbaImage,
}

impl Surface {
    /// Create a transparent surface with the given dimensions.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            image: RgbaImage::new(width, height),
        }
    }

    /// Wrap an existing raster.
    pub fn from_image(image: RgbaImage) -> Self {
        Self { image }
    }

    /// Surface dimensions as (width, height).
    pub fn dimensions(&self) -> (u32, u32) {
        self.image.dimensions()
    }

    /// Borrow the underlying raster.
    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    /// Consume the surface and return the raster.
    pub fn into_image(self) -> RgbaImage {
        self.image
    }

    /// Source-over composite a single pixel.
    pub(crate) fn composite(&mut self, x: u32, y: u32, color: Rgba) {
        self.image.get_pixel_mut(x, y).blend(&color.to_pixel());
    }
}
