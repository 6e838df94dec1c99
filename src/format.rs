use std::path::Path;

use image::ImageFormat;

/// One of the supported image encodings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Format {
    Png,
    Jpeg,
    Svg,
    Webp,
    Bmp,
    Gif,
    Tiff,
}

impl Format {
    /// All supported formats in display order
    pub const ALL: [Format; 7] = [
        Format::Png,
        Format::Jpeg,
        Format::Svg,
        Format::Webp,
        Format::Bmp,
        Format::Gif,
        Format::Tiff,
    ];

    /// Display name of the format
    pub fn name(self) -> &'static str {
        match self {
            Format::Png => "PNG",
            Format::Jpeg => "JPEG",
            Format::Svg => "SVG",
            Format::Webp => "WEBP",
            Format::Bmp => "BMP",
            Format::Gif => "GIF",
            Format::Tiff => "TIFF",
        }
    }

    /// Recognized file extensions, including the leading dot.
    /// Extensions are disjoint across formats.
    pub fn extensions(self) -> &'static [&'static str] {
        match self {
            Format::Png => &[".png"],
            Format::Jpeg => &[".jpg", ".jpeg"],
            Format::Svg => &[".svg"],
            Format::Webp => &[".webp"],
            Format::Bmp => &[".bmp"],
            Format::Gif => &[".gif"],
            Format::Tiff => &[".tiff", ".tif"],
        }
    }

    /// Resolve a dotted extension (e.g. ".png") to a format, case-insensitively
    pub fn from_extension(ext: &str) -> Option<Format> {
        Format::ALL
            .into_iter()
            .find(|fmt| fmt.extensions().iter().any(|e| e.eq_ignore_ascii_case(ext)))
    }

    /// Resolve a path by its extension; `None` if the extension is missing or
    /// unrecognized
    pub fn from_path(path: &Path) -> Option<Format> {
        let ext = path.extension()?.to_str()?;
        Format::from_extension(&format!(".{ext}"))
    }

    /// Corresponding `image` crate format; `None` for SVG, which the raster
    /// codec cannot handle
    pub fn image_format(self) -> Option<ImageFormat> {
        match self {
            Format::Png => Some(ImageFormat::Png),
            Format::Jpeg => Some(ImageFormat::Jpeg),
            Format::Svg => None,
            Format::Webp => Some(ImageFormat::WebP),
            Format::Bmp => Some(ImageFormat::Bmp),
            Format::Gif => Some(ImageFormat::Gif),
            Format::Tiff => Some(ImageFormat::Tiff),
        }
    }
}
