//! SVG rasterization via usvg/resvg
//!
//! Renders an SVG file at its intrinsic size into a pixmap and writes it out
//! as PNG or JPEG. The SVG is never re-emitted as vector data.

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use image::RgbImage;
use image::codecs::jpeg::JpegEncoder;
use resvg::tiny_skia;

use crate::convert::JPEG_QUALITY;
use crate::error::{ConvertError, Result};
use crate::format::Format;

/// Render the SVG at `input` into `output` as `target` (PNG or JPEG).
///
/// The output dimensions are the SVG's intrinsic width and height, rounded
/// up to whole pixels by usvg.
pub fn rasterize_svg(input: &Path, output: &Path, target: Format) -> Result<()> {
    let data = std::fs::read(input)?;
    let options = usvg::Options::default();
    let tree = usvg::Tree::from_data(&data, &options)?;

    let size = tree.size().to_int_size();
    let mut pixmap = tiny_skia::Pixmap::new(size.width(), size.height())
        .ok_or_else(|| ConvertError::Conversion("SVG has zero intrinsic size".to_string()))?;

    resvg::render(&tree, tiny_skia::Transform::default(), &mut pixmap.as_mut());

    match target {
        Format::Png => {
            let png = pixmap
                .encode_png()
                .map_err(|e| ConvertError::Conversion(format!("PNG encoding failed: {e}")))?;
            std::fs::write(output, png)?;
            Ok(())
        }
        Format::Jpeg => {
            let rgb = pixmap_onto_white(&pixmap);
            let file = File::create(output)?;
            let writer = BufWriter::new(file);
            let encoder = JpegEncoder::new_with_quality(writer, JPEG_QUALITY);
            rgb.write_with_encoder(encoder)?;
            Ok(())
        }
        other => Err(ConvertError::Conversion(format!(
            "SVG can only be rasterized to PNG or JPEG, not {}",
            other.name()
        ))),
    }
}

/// Composite a premultiplied-alpha pixmap onto an opaque white background
fn pixmap_onto_white(pixmap: &tiny_skia::Pixmap) -> RgbImage {
    let mut out = RgbImage::new(pixmap.width(), pixmap.height());

    for (src, dst) in pixmap.pixels().iter().zip(out.pixels_mut()) {
        // Premultiplied channels never exceed alpha, so this cannot overflow
        let white = 255 - src.alpha();
        dst.0 = [
            src.red() + white,
            src.green() + white,
            src.blue() + white,
        ];
    }
    out
}
