//! SEGVIS - Semantic segmentation visualization.
//!
//! Renders a 2-D grid of integer class IDs as a color-coded RGBA raster
//! together with a legend describing each class. Non-negative label
//! values index into the class catalog; negative values mark ignored
//! pixels.
//!
//! # Example
//!
//! ```
//! use ndarray::array;
//! use segvis::{Colormap, LabelRender};
//!
//! let label = array![[0, 1], [-1, 1]];
//! let (surface, legend) = LabelRender::new(label.view())
//!     .label_names(["background", "foreground"])
//!     .colormap(Colormap::Viridis)
//!     .ignore_color([32, 32, 32])
//!     .render()?;
//!
//! assert_eq!(surface.dimensions(), (2, 2));
//! assert_eq!(legend.len(), 2);
//! # Ok::<(), segvis::RenderError>(())
//! ```

mod color;
mod colormap;
mod error;
mod legend;
mod model;
mod palette;
mod render;
mod surface;

pub use color::Rgba;
pub use colormap::Colormap;
pub use error::RenderError;
pub use legend::LegendEntry;
pub use model::Class;
pub use palette::Palette;
pub use render::{render_image, render_image_into, LabelRender};
pub use surface::Surface;
