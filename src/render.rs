//! Label map and image rendering.
//!
//! The entry point is [`LabelRender`], a builder over a 2-D grid of
//! integer class IDs. Non-negative values index into the class catalog;
//! negative values mark ignored pixels, which are filled with a
//! configurable ignore color. Rendering also yields a legend with one
//! entry per class.

use ndarray::{ArrayView2, ArrayView3};

use crate::color::Rgba;
use crate::colormap::Colormap;
use crate::error::RenderError;
use crate::legend::LegendEntry;
use crate::model::Class;
use crate::palette::Palette;
use crate::surface::Surface;

/// Builder for rendering a label grid into a color raster.
///
/// # Example
///
/// ```
/// use ndarray::array;
/// use segvis::LabelRender;
///
/// let label = array![[0, 1], [-1, 1]];
/// let (surface, legend) = LabelRender::new(label.view())
///     .label_names(["background", "foreground"])
///     .render()?;
///
/// assert_eq!(surface.dimensions(), (2, 2));
/// assert_eq!(legend.len(), 2);
/// # Ok::<(), segvis::RenderError>(())
/// ```
#[derive(Debug, Clone)]
pub struct LabelRender<'a> {
    label: ArrayView2<'a, i32>,
    label_names: Option<Vec<String>>,
    colors: Option<Vec<[u8; 3]>>,
    ignore_color: [u8; 3],
    alpha: f32,
    colormap: Colormap,
}

impl<'a> LabelRender<'a> {
    /// Create a renderer for the given label grid.
    ///
    /// The grid has shape (height, width). Defaults: black ignore
    /// color, alpha 1, Viridis colormap.
    pub fn new(label: ArrayView2<'a, i32>) -> Self {
        Self {
            label,
            label_names: None,
            colors: None,
            ignore_color: [0, 0, 0],
            alpha: 1.0,
            colormap: Colormap::default(),
        }
    }

    /// Set class names, ordered by label value.
    ///
    /// When given, their count defines the number of classes.
    pub fn label_names<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.label_names = Some(names.into_iter().map(Into::into).collect());
        self
    }

    /// Set explicit per-class colors (RGB, 0-255), ordered by label value.
    ///
    /// When no names are given, the color count defines the number of
    /// classes. The count must match the number of classes.
    pub fn colors<I>(mut self, colors: I) -> Self
    where
        I: IntoIterator<Item = [u8; 3]>,
    {
        self.colors = Some(colors.into_iter().collect());
        self
    }

    /// Take names and colors from a class catalog.
    ///
    /// Explicit colors are used only when every class carries one;
    /// otherwise the continuous colormap applies to all classes.
    pub fn classes(mut self, classes: &[Class]) -> Self {
        self.label_names = Some(classes.iter().map(|c| c.name.clone()).collect());
        self.colors = classes.iter().map(|c| c.color).collect();
        self
    }

    /// Fill color for ignored (negative) labels. Default is black.
    pub fn ignore_color(mut self, color: [u8; 3]) -> Self {
        self.ignore_color = color;
        self
    }

    /// Overlay transparency in [0, 1], written to the output alpha
    /// channel. Default is 1 (opaque).
    pub fn alpha(mut self, alpha: f32) -> Self {
        self.alpha = alpha;
        self
    }

    /// Continuous colormap used when no explicit colors are set.
    /// Default is [`Colormap::Viridis`].
    pub fn colormap(mut self, colormap: Colormap) -> Self {
        self.colormap = colormap;
        self
    }

    /// Render into a new surface sized to the label grid.
    pub fn render(&self) -> Result<(Surface, Vec<LegendEntry>), RenderError> {
        let (height, width) = self.label.dim();
        let mut surface = Surface::new(width as u32, height as u32);
        let legend = self.render_into(&mut surface)?;
        Ok((surface, legend))
    }

    /// Composite into an existing surface and return the legend.
    ///
    /// The surface must match the label grid dimensions. On error the
    /// surface is left untouched.
    pub fn render_into(&self, surface: &mut Surface) -> Result<Vec<LegendEntry>, RenderError> {
        let resolved = self.resolve()?;

        let (height, width) = self.label.dim();
        if surface.dimensions() != (width as u32, height as u32) {
            let (surface_width, surface_height) = surface.dimensions();
            return Err(RenderError::SurfaceSizeMismatch {
                surface_width,
                surface_height,
                width: width as u32,
                height: height as u32,
            });
        }

        log::debug!(
            "rendering {}x{} label grid with {} classes ({})",
            width,
            height,
            resolved.n_class,
            match &resolved.palette {
                Palette::Continuous(colormap) => format!("colormap {colormap}"),
                Palette::Indexed(_) => "explicit colors".to_string(),
            }
        );

        let ignore = Rgba::from_rgb8(self.ignore_color).with_alpha(self.alpha);
        for ((row, col), &value) in self.label.indexed_iter() {
            let color = if value < 0 {
                ignore
            } else {
                resolved
                    .palette
                    .color_at(resolved.normalize(value))
                    .with_alpha(self.alpha)
            };
            surface.composite(col as u32, row as u32, color);
        }

        let legend = (0..resolved.n_class)
            .map(|class| {
                LegendEntry::new(
                    resolved.name(class),
                    resolved.palette.color_at(resolved.normalize(class as i32)),
                )
            })
            .collect();

        Ok(legend)
    }

    /// Resolve class count, names, and palette. All validation happens
    /// here, before any drawing.
    fn resolve(&self) -> Result<Resolved, RenderError> {
        if self.label.is_empty() {
            return Err(RenderError::EmptyLabel);
        }
        if !(0.0..=1.0).contains(&self.alpha) {
            return Err(RenderError::InvalidAlpha { alpha: self.alpha });
        }

        let max_label = self.label.iter().copied().max().unwrap_or(-1);

        let declared = match (&self.label_names, &self.colors) {
            (Some(names), _) => Some(names.len()),
            (None, Some(colors)) => Some(colors.len()),
            (None, None) => None,
        };

        let n_class = match declared {
            Some(n_class) => {
                if max_label >= 0 && max_label as usize >= n_class {
                    return Err(RenderError::OutOfRangeClass { max_label, n_class });
                }
                n_class
            }
            // Class count falls back to the maximum label value found
            // in the grid.
            None => max_label.max(0) as usize,
        };
        if n_class == 0 {
            return Err(RenderError::NoClasses);
        }

        if let Some(colors) = &self.colors {
            if colors.len() != n_class {
                return Err(RenderError::InvalidColorCount {
                    given: colors.len(),
                    n_class,
                });
            }
        }

        let palette = match &self.colors {
            Some(colors) => Palette::from_colors(colors),
            None => Palette::Continuous(self.colormap),
        };

        Ok(Resolved {
            n_class,
            names: self.label_names.clone(),
            palette,
        })
    }
}

/// Validated render inputs: class count, names, and palette.
struct Resolved {
    n_class: usize,
    names: Option<Vec<String>>,
    palette: Palette,
}

impl Resolved {
    /// Normalized palette index for a non-negative label value.
    ///
    /// A single class maps to index 0; otherwise values are scaled by
    /// `n_class - 1` and clamped.
    fn normalize(&self, value: i32) -> f32 {
        if self.n_class <= 1 {
            0.0
        } else {
            (value as f32 / (self.n_class - 1) as f32).clamp(0.0, 1.0)
        }
    }

    /// Class name for a legend entry, synthesized from the index when
    /// no names were given.
    fn name(&self, index: usize) -> String {
        match &self.names {
            Some(names) => names[index].clone(),
            None => index.to_string(),
        }
    }
}

/// Draw a channels-first RGB image onto a new surface.
///
/// The input has shape (3, height, width) with 0-255 component values
/// and is drawn opaque. Overlay a label grid on top with
/// [`LabelRender::render_into`] and a partial alpha.
pub fn render_image(img: ArrayView3<'_, u8>) -> Result<Surface, RenderError> {
    let (_, height, width) = img.dim();
    let mut surface = Surface::new(width as u32, height as u32);
    render_image_into(img, &mut surface)?;
    Ok(surface)
}

/// Draw a channels-first RGB image onto an existing surface.
///
/// The surface must match the image dimensions. On error the surface
/// is left untouched.
pub fn render_image_into(
    img: ArrayView3<'_, u8>,
    surface: &mut Surface,
) -> Result<(), RenderError> {
    let (channels, height, width) = img.dim();
    if channels != 3 {
        return Err(RenderError::InvalidChannelCount { channels });
    }
    if surface.dimensions() != (width as u32, height as u32) {
        let (surface_width, surface_height) = surface.dimensions();
        return Err(RenderError::SurfaceSizeMismatch {
            surface_width,
            surface_height,
            width: width as u32,
            height: height as u32,
        });
    }

    log::debug!("rendering {}x{} image", width, height);

    for row in 0..height {
        for col in 0..width {
            let color = Rgba::from_rgb8([
                img[[0, row, col]],
                img[[1, row, col]],
                img[[2, row, col]],
            ]);
            surface.composite(col as u32, row as u32, color);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use image::Rgba as Pixel;
    use ndarray::{array, Array2, Array3};

    use super::*;

    fn viridis_pixel(t: f32) -> Pixel<u8> {
        Colormap::Viridis.sample(t).to_pixel()
    }

    fn init_logging() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    #[test]
    fn test_legend_matches_label_names() {
        init_logging();
        let label = array![[0, 1], [2, 0]];
        let (_, legend) = LabelRender::new(label.view())
            .label_names(["road", "car", "sky"])
            .render()
            .unwrap();

        let names: Vec<&str> = legend.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, ["road", "car", "sky"]);
    }

    #[test]
    fn test_pixels_follow_colormap() {
        let label = array![[0, 1], [2, 1]];
        let (surface, _) = LabelRender::new(label.view())
            .label_names(["a", "b", "c"])
            .render()
            .unwrap();

        // t = v / (n_class - 1)
        assert_eq!(*surface.image().get_pixel(0, 0), viridis_pixel(0.0));
        assert_eq!(*surface.image().get_pixel(1, 0), viridis_pixel(0.5));
        assert_eq!(*surface.image().get_pixel(0, 1), viridis_pixel(1.0));
        assert_eq!(*surface.image().get_pixel(1, 1), viridis_pixel(0.5));
    }

    #[test]
    fn test_ignore_pixels_use_ignore_color() {
        let label = array![[0, 1], [-1, 1]];
        let (surface, legend) = LabelRender::new(label.view())
            .label_names(["bg", "fg"])
            .ignore_color([10, 20, 30])
            .render()
            .unwrap();

        assert_eq!(*surface.image().get_pixel(0, 1), Pixel([10, 20, 30, 255]));
        assert_eq!(legend[0], LegendEntry::new("bg", Colormap::Viridis.sample(0.0)));
        assert_eq!(legend[1], LegendEntry::new("fg", Colormap::Viridis.sample(1.0)));
    }

    #[test]
    fn test_explicit_colors_roundtrip_into_legend() {
        let label = array![[0, 1, 2]];
        let colors = [[255, 0, 0], [0, 255, 0], [0, 0, 255]];
        let (surface, legend) = LabelRender::new(label.view())
            .colors(colors)
            .render()
            .unwrap();

        for (entry, rgb) in legend.iter().zip(colors) {
            assert_eq!(entry.color, Rgba::from_rgb8(rgb));
        }
        assert_eq!(*surface.image().get_pixel(0, 0), Pixel([255, 0, 0, 255]));
        assert_eq!(*surface.image().get_pixel(1, 0), Pixel([0, 255, 0, 255]));
        assert_eq!(*surface.image().get_pixel(2, 0), Pixel([0, 0, 255, 255]));
    }

    #[test]
    fn test_single_class_does_not_divide_by_zero() {
        let label = array![[0, 0], [-1, 0]];
        let (surface, legend) = LabelRender::new(label.view())
            .label_names(["only"])
            .render()
            .unwrap();

        assert_eq!(legend.len(), 1);
        assert_eq!(*surface.image().get_pixel(0, 0), viridis_pixel(0.0));
        assert_eq!(legend[0].color, Colormap::Viridis.sample(0.0));
    }

    #[test]
    fn test_color_count_mismatch_fails_fast() {
        let label = array![[0, 1]];
        let err = LabelRender::new(label.view())
            .label_names(["a", "b", "c"])
            .colors([[1, 2, 3], [4, 5, 6]])
            .render()
            .unwrap_err();

        assert_eq!(err, RenderError::InvalidColorCount { given: 2, n_class: 3 });
    }

    #[test]
    fn test_out_of_range_label_fails_fast() {
        let label = array![[0, 5]];
        let err = LabelRender::new(label.view())
            .label_names(["a", "b"])
            .render()
            .unwrap_err();

        assert_eq!(err, RenderError::OutOfRangeClass { max_label: 5, n_class: 2 });
    }

    #[test]
    fn test_failed_render_leaves_surface_untouched() {
        let label = array![[0, 5]];
        let mut surface = Surface::new(2, 1);
        let result = LabelRender::new(label.view())
            .label_names(["a", "b"])
            .render_into(&mut surface);

        assert!(result.is_err());
        assert_eq!(*surface.image().get_pixel(0, 0), Pixel([0, 0, 0, 0]));
        assert_eq!(*surface.image().get_pixel(1, 0), Pixel([0, 0, 0, 0]));
    }

    #[test]
    fn test_class_count_falls_back_to_max_label() {
        let label = array![[0, 1, 2]];
        let (surface, legend) = LabelRender::new(label.view()).render().unwrap();

        // n_class = max(label); the top label saturates the palette
        assert_eq!(legend.len(), 2);
        assert_eq!(legend[0].name, "0");
        assert_eq!(legend[1].name, "1");
        assert_eq!(*surface.image().get_pixel(1, 0), viridis_pixel(1.0));
        assert_eq!(*surface.image().get_pixel(2, 0), viridis_pixel(1.0));
    }

    #[test]
    fn test_no_classes_resolvable() {
        let label = array![[-1, -1]];
        let err = LabelRender::new(label.view()).render().unwrap_err();
        assert_eq!(err, RenderError::NoClasses);
    }

    #[test]
    fn test_empty_label_grid() {
        let label = Array2::<i32>::zeros((0, 0));
        let err = LabelRender::new(label.view()).render().unwrap_err();
        assert_eq!(err, RenderError::EmptyLabel);
    }

    #[test]
    fn test_invalid_alpha() {
        let label = array![[0]];
        let err = LabelRender::new(label.view())
            .label_names(["a"])
            .alpha(1.5)
            .render()
            .unwrap_err();
        assert_eq!(err, RenderError::InvalidAlpha { alpha: 1.5 });
    }

    #[test]
    fn test_alpha_lands_in_alpha_channel() {
        let label = array![[0, -1]];
        let (surface, legend) = LabelRender::new(label.view())
            .label_names(["a"])
            .ignore_color([10, 20, 30])
            .alpha(0.5)
            .render()
            .unwrap();

        assert_eq!(surface.image().get_pixel(0, 0)[3], 128);
        assert_eq!(surface.image().get_pixel(1, 0)[3], 128);
        // legend colors stay opaque
        assert_eq!(legend[0].color.a, 1.0);
    }

    #[test]
    fn test_overlay_blends_onto_base_image() {
        let mut base = Array3::<u8>::zeros((3, 1, 2));
        base.fill(100);
        let mut surface = render_image(base.view()).unwrap();

        let label = array![[0, -1]];
        LabelRender::new(label.view())
            .colors([[255, 0, 0]])
            .ignore_color([0, 0, 0])
            .alpha(0.5)
            .render_into(&mut surface)
            .unwrap();

        let blended = surface.image().get_pixel(0, 0);
        assert_eq!(blended[3], 255);
        assert!(blended[0] > 160 && blended[0] < 195, "red was {}", blended[0]);
        assert!(blended[1] < 70, "green was {}", blended[1]);
    }

    #[test]
    fn test_surface_size_mismatch() {
        let label = array![[0, 1]];
        let mut surface = Surface::new(3, 3);
        let err = LabelRender::new(label.view())
            .label_names(["a", "b"])
            .render_into(&mut surface)
            .unwrap_err();

        assert_eq!(
            err,
            RenderError::SurfaceSizeMismatch {
                surface_width: 3,
                surface_height: 3,
                width: 2,
                height: 1,
            }
        );
    }

    #[test]
    fn test_classes_with_explicit_colors() {
        let label = array![[0, 1]];
        let catalog = [
            Class::new("road").with_color([128, 64, 128]),
            Class::new("sky").with_color([70, 130, 180]),
        ];
        let (surface, legend) = LabelRender::new(label.view())
            .classes(&catalog)
            .render()
            .unwrap();

        assert_eq!(legend[0].name, "road");
        assert_eq!(legend[1].color, Rgba::from_rgb8([70, 130, 180]));
        assert_eq!(*surface.image().get_pixel(0, 0), Pixel([128, 64, 128, 255]));
    }

    #[test]
    fn test_classes_without_full_colors_use_colormap() {
        let label = array![[0, 1]];
        let catalog = [Class::new("road").with_color([128, 64, 128]), Class::new("sky")];
        let (surface, _) = LabelRender::new(label.view())
            .classes(&catalog)
            .render()
            .unwrap();

        assert_eq!(*surface.image().get_pixel(0, 0), viridis_pixel(0.0));
        assert_eq!(*surface.image().get_pixel(1, 0), viridis_pixel(1.0));
    }

    #[test]
    fn test_render_image_places_pixels() {
        let mut img = Array3::<u8>::zeros((3, 2, 2));
        img[[0, 0, 1]] = 255; // red at (x=1, y=0)
        img[[1, 1, 0]] = 200; // green at (x=0, y=1)

        let surface = render_image(img.view()).unwrap();
        assert_eq!(surface.dimensions(), (2, 2));
        assert_eq!(*surface.image().get_pixel(1, 0), Pixel([255, 0, 0, 255]));
        assert_eq!(*surface.image().get_pixel(0, 1), Pixel([0, 200, 0, 255]));
    }

    #[test]
    fn test_render_image_rejects_wrong_channel_count() {
        let img = Array3::<u8>::zeros((4, 2, 2));
        let err = render_image(img.view()).unwrap_err();
        assert_eq!(err, RenderError::InvalidChannelCount { channels: 4 });
    }
}
