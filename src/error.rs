use std::path::PathBuf;

/// Unified error type for all conversion operations
#[derive(thiserror::Error, Debug)]
pub enum ConvertError {
    #[error("Input file does not exist: {}", .0.display())]
    MissingInput(PathBuf),

    #[error("Unsupported file format: {}", .0.display())]
    UnsupportedFormat(PathBuf),

    #[error("Converting to SVG is not supported")]
    SvgOutputUnsupported,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image processing error: {0}")]
    Image(#[from] image::ImageError),

    #[error("SVG parsing error: {0}")]
    Svg(#[from] usvg::Error),

    #[error("Conversion failed: {0}")]
    Conversion(String),
}

pub type Result<T> = std::result::Result<T, ConvertError>;
