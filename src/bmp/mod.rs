//! Uncompressed 24-bit BMP container.
//!
//! Layout: 14-byte [`FileHeader`], 40-byte [`InfoHeader`], then pixel rows
//! from the bottom of the image to the top. Each row is `3 * width` bytes in
//! B, G, R order, zero-padded to a multiple of 4.
//!
//! Only the bottom-up variant (positive height) is read; top-down files are
//! rejected with [`ImageError::InvalidHeader`].
//!
//! Use top-level [`crate::decode_bmp`], [`crate::encode_bmp`], etc.

mod decode;
mod encode;
mod header;

pub use header::{FileHeader, HEADERS_SIZE, InfoHeader, row_stride};

use std::io::Write;

use crate::error::ImageError;
use crate::image::Image;
use crate::limits::Limits;
use enough::Stop;

/// Read and validate both headers without decoding pixels.
pub fn read_headers(data: &[u8]) -> Result<(FileHeader, InfoHeader), ImageError> {
    let header = decode::parse_bmp_header(data)?;
    Ok((header.file, header.info))
}

/// Width and height recorded in the headers.
pub(crate) fn probe(data: &[u8]) -> Result<(u32, u32), ImageError> {
    let header = decode::parse_bmp_header(data)?;
    Ok((header.width, header.height))
}

pub(crate) fn decode(
    data: &[u8],
    limits: Option<&Limits>,
    stop: &dyn Stop,
) -> Result<Image, ImageError> {
    decode::decode_bmp(data, limits, stop)
}

pub(crate) fn encode(image: &Image, stop: &dyn Stop) -> Result<Vec<u8>, ImageError> {
    let mut out = Vec::with_capacity(encode::encoded_len(image.width(), image.height())?);
    encode::encode_bmp(image, &mut out, stop)?;
    Ok(out)
}

pub(crate) fn encode_to<W: Write>(
    image: &Image,
    out: &mut W,
    stop: &dyn Stop,
) -> Result<(), ImageError> {
    encode::encode_bmp(image, out, stop)
}
