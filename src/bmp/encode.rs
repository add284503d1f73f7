//! BMP encoder: uncompressed 24-bit, bottom-up.

use std::io::Write;

use enough::Stop;
use log::debug;

use super::header::{FileHeader, InfoHeader, row_stride};
use crate::error::ImageError;
use crate::image::Image;

/// Size in bytes of the BMP file `encode_bmp` would produce.
pub(crate) fn encoded_len(width: u32, height: u32) -> Result<usize, ImageError> {
    Ok(FileHeader::for_dimensions(width, height)?.file_size as usize)
}

/// Write `image` as a BMP file.
pub(crate) fn encode_bmp<W: Write>(
    image: &Image,
    out: &mut W,
    stop: &dyn Stop,
) -> Result<(), ImageError> {
    let (width, height) = image.dimensions();
    let file_header = FileHeader::for_dimensions(width, height)?;
    let info_header = InfoHeader::for_dimensions(width, height)?;
    debug!(
        "encoding {width}x{height} BMP ({} bytes, grayscale={})",
        file_header.file_size,
        image.is_grayscale()
    );

    out.write_all(&file_header.to_bytes())?;
    out.write_all(&info_header.to_bytes())?;

    stop.check()?;

    let stride = row_stride(width).ok_or(ImageError::DimensionsTooLarge { width, height })?;
    // Padding bytes past 3 * width are never written and stay zero.
    let mut row_buf = vec![0u8; stride];
    for (i, row) in image.rows().rev().enumerate() {
        if i % 16 == 0 {
            stop.check()?;
        }
        for (dst, &px) in row_buf.chunks_exact_mut(3).zip(row) {
            dst.copy_from_slice(&image.rendered(px).to_bgr());
        }
        out.write_all(&row_buf)?;
    }

    Ok(())
}
