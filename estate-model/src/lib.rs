//! Core data model definitions shared across the Estate du Oud crates.

pub mod error;
pub mod slide;

pub use error::{ModelError, Result as ModelResult};
pub use slide::{ImageRef, Slide, SlideSet};
