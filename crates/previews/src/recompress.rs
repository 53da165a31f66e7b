use crate::PreviewError;
use image::codecs::jpeg::JpegEncoder;
use image::imageops::FilterType;
use image::{ExtendedColorType, ImageReader};
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

/// Decodes `source`, scales it down to at most `max_height`, and writes
/// a JPEG at the requested quality to `output`.
pub(crate) fn recompress_to_jpeg(
    source: &Path,
    output: &Path,
    quality: u8,
    max_height: u32,
) -> Result<(), PreviewError> {
    let mut img = ImageReader::open(source)?.with_guessed_format()?.decode()?;

    if max_height > 0 && img.height() > max_height {
        let target_w =
            ((u64::from(img.width()) * u64::from(max_height)) / u64::from(img.height())) as u32;
        img = img.resize(target_w.max(1), max_height, FilterType::Lanczos3);
    }

    let rgb = img.into_rgb8();
    let writer = BufWriter::new(File::create(output)?);
    let mut encoder = JpegEncoder::new_with_quality(writer, quality.clamp(1, 100));
    encoder.encode(rgb.as_raw(), rgb.width(), rgb.height(), ExtendedColorType::Rgb8)?;
    Ok(())
}
