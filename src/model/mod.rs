//! Data models for segmentation class catalogs.

mod class;

pub use class::Class;
