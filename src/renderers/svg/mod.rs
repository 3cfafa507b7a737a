//! SVG document handling
//!
//! This module provides the owned element tree used for chart snapshots,
//! markup parsing and serialization, and stylesheet injection.

pub mod elements;
pub mod document;
pub mod styles;

pub use elements::*;
pub use document::*;
pub use styles::*;
