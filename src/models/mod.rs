//! Data models for chart export
//!
//! This module contains the value types passed between the service, the
//! exporters, and the download trigger.

pub mod artifact;
pub mod chart;
pub mod config;
pub mod format;
pub mod stylesheet;

// Re-export commonly used types
pub use artifact::*;
pub use chart::*;
pub use config::*;
pub use format::*;
pub use stylesheet::*;
