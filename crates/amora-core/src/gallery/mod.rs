//! Generated-image gallery domain types.

pub mod model;

pub use model::{GeneratedImage, ImageResolution};
