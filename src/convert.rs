//! Conversion dispatcher
//!
//! Resolves the input and output formats from the file extensions, then
//! performs exactly one of two operations: SVG rasterization (delegated to
//! [`crate::rasterize`]) or a raster re-encode through the `image` crate.

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use image::codecs::jpeg::JpegEncoder;
use image::{DynamicImage, ImageReader, RgbImage};

use crate::error::{ConvertError, Result};
use crate::format::Format;
use crate::rasterize::rasterize_svg;

/// Quality setting applied to every JPEG encode
pub const JPEG_QUALITY: u8 = 95;

/// Convert the image at `input` to the format implied by `output`'s extension.
///
/// Fails without touching the filesystem when the input is missing, when
/// either extension is unrecognized, or when the output format is SVG.
/// No atomicity is guaranteed: a failure mid-encode may leave a partial
/// output file behind.
pub fn convert(input: &Path, output: &Path) -> Result<()> {
    if !input.exists() {
        return Err(ConvertError::MissingInput(input.to_path_buf()));
    }

    let input_format =
        Format::from_path(input).ok_or_else(|| ConvertError::UnsupportedFormat(input.to_path_buf()))?;
    let output_format = Format::from_path(output)
        .ok_or_else(|| ConvertError::UnsupportedFormat(output.to_path_buf()))?;

    if output_format == Format::Svg {
        return Err(ConvertError::SvgOutputUnsupported);
    }

    if input_format == Format::Svg {
        return match output_format {
            Format::Png | Format::Jpeg => rasterize_svg(input, output, output_format),
            other => Err(ConvertError::Conversion(format!(
                "SVG can only be rasterized to PNG or JPEG, not {}",
                other.name()
            ))),
        };
    }

    reencode(input, output, output_format)
}

/// Decode a raster input and re-encode it as `output_format`
fn reencode(input: &Path, output: &Path, output_format: Format) -> Result<()> {
    let img = ImageReader::open(input)?.with_guessed_format()?.decode()?;

    if output_format == Format::Jpeg {
        return encode_jpeg(&img, output);
    }

    // The dispatcher never sends SVG here, so the codec mapping is total
    let format = output_format.image_format().ok_or_else(|| {
        ConvertError::Conversion(format!("no raster codec for {}", output_format.name()))
    })?;
    img.save_with_format(output, format)?;
    Ok(())
}

/// Encode as JPEG at [`JPEG_QUALITY`], flattening any alpha channel first
fn encode_jpeg(img: &DynamicImage, output: &Path) -> Result<()> {
    let rgb = if img.color().has_alpha() {
        flatten_onto_white(img)
    } else {
        img.to_rgb8()
    };

    let file = File::create(output)?;
    let writer = BufWriter::new(file);
    let encoder = JpegEncoder::new_with_quality(writer, JPEG_QUALITY);
    rgb.write_with_encoder(encoder)?;
    Ok(())
}

/// Remove the alpha channel by compositing onto an opaque white background.
///
/// Lossy and irreversible: fully transparent pixels become white, partially
/// transparent pixels blend toward white.
pub fn flatten_onto_white(img: &DynamicImage) -> RgbImage {
    let rgba = img.to_rgba8();
    let mut out = RgbImage::new(rgba.width(), rgba.height());

    for (src, dst) in rgba.pixels().zip(out.pixels_mut()) {
        let alpha = src[3] as u16;
        for channel in 0..3 {
            let value = src[channel] as u16 * alpha + 255 * (255 - alpha);
            dst[channel] = (value / 255) as u8;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    #[test]
    fn flatten_turns_transparent_pixels_white() {
        let mut img = image::RgbaImage::new(2, 1);
        img.put_pixel(0, 0, Rgba([200, 10, 30, 0]));
        img.put_pixel(1, 0, Rgba([200, 10, 30, 255]));

        let rgb = flatten_onto_white(&DynamicImage::ImageRgba8(img));

        assert_eq!(rgb.get_pixel(0, 0).0, [255, 255, 255]);
        assert_eq!(rgb.get_pixel(1, 0).0, [200, 10, 30]);
    }

    #[test]
    fn flatten_blends_partial_alpha_toward_white() {
        let mut img = image::RgbaImage::new(1, 1);
        img.put_pixel(0, 0, Rgba([0, 0, 0, 128]));

        let rgb = flatten_onto_white(&DynamicImage::ImageRgba8(img));

        // black at ~50% alpha over white lands mid-gray
        let [r, g, b] = rgb.get_pixel(0, 0).0;
        assert!((126..=129).contains(&r));
        assert_eq!(r, g);
        assert_eq!(g, b);
    }
}
