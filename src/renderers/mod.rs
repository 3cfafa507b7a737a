//! Artifact renderers
//!
//! - `svg`: element tree, markup parsing/serialization, style injection
//! - `raster`: rasterization backends producing PNG data URIs
//! - `data_uri`: data URI encoding shared by both export paths

pub mod svg;
pub mod raster;
pub mod data_uri;

pub use raster::{PixelSize, Rasterizer};
