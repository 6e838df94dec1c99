//! # imgconv
//!
//! An interactive CLI for converting images between common raster formats
//! (PNG, JPEG, WEBP, BMP, GIF, TIFF) and rasterizing SVG to PNG or JPEG.
//!
//! ## Features
//!
//! - **Raster re-encoding**: Decode any supported raster format and re-encode
//!   it as another, flattening alpha onto white when the target is JPEG
//! - **SVG rasterization**: Render an SVG at its intrinsic size to PNG or JPEG
//!
//! ## Example
//!
//! ```rust,ignore
//! use std::path::Path;
//! use imgconv::convert::convert;
//!
//! convert(Path::new("photo.png"), Path::new("photo.webp")).unwrap();
//! ```

pub mod convert;
pub mod error;
pub mod format;
pub mod interactive;
pub mod rasterize;

// Re-export commonly used items
pub use convert::{convert, flatten_onto_white};
pub use error::{ConvertError, Result};
pub use format::Format;
pub use rasterize::rasterize_svg;
