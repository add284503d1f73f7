//! Headerless planar YUV: a full-resolution Y plane followed by Cb and Cr
//! planes subsampled per [`ChromaSubsampling`].
//!
//! Planes are contiguous raw bytes with no row padding. Width and height are
//! not stored in the file and must come from the caller.
//!
//! Chroma is subsampled by decimation on encode (the top-left pixel of each
//! block supplies the sample) and upsampled by replication on decode (every
//! pixel in a block reuses that sample). The two halves are not a matched
//! filter pair, so chroma detail inside a block is lost on every cycle
//! unless the format is 4:4:4.

mod decode;
mod encode;

use std::io::Write;

use enough::Stop;

use crate::error::ImageError;
use crate::format::ChromaSubsampling;
use crate::image::{Image, pixel_count};
use crate::limits::Limits;

/// Byte sizes of the luma plane and of each chroma plane.
pub fn plane_sizes(
    width: u32,
    height: u32,
    subsampling: ChromaSubsampling,
) -> Result<(usize, usize), ImageError> {
    let luma = pixel_count(width, height)?;
    let (cw, ch) = subsampling.chroma_dimensions(width, height);
    let chroma = pixel_count(cw, ch)?;
    Ok((luma, chroma))
}

/// Total byte size of one frame: Y + Cb + Cr.
pub fn frame_size(
    width: u32,
    height: u32,
    subsampling: ChromaSubsampling,
) -> Result<usize, ImageError> {
    let (luma, chroma) = plane_sizes(width, height, subsampling)?;
    chroma
        .checked_mul(2)
        .and_then(|c| c.checked_add(luma))
        .ok_or(ImageError::DimensionsTooLarge { width, height })
}

pub(crate) fn decode(
    data: &[u8],
    width: u32,
    height: u32,
    subsampling: ChromaSubsampling,
    limits: Option<&Limits>,
    stop: &dyn Stop,
) -> Result<Image, ImageError> {
    decode::decode_yuv(data, width, height, subsampling, limits, stop)
}

pub(crate) fn encode(
    image: &Image,
    subsampling: ChromaSubsampling,
    stop: &dyn Stop,
) -> Result<Vec<u8>, ImageError> {
    let mut out = Vec::with_capacity(frame_size(image.width(), image.height(), subsampling)?);
    encode::encode_yuv(image, subsampling, &mut out, stop)?;
    Ok(out)
}

pub(crate) fn encode_to<W: Write>(
    image: &Image,
    subsampling: ChromaSubsampling,
    out: &mut W,
    stop: &dyn Stop,
) -> Result<(), ImageError> {
    encode::encode_yuv(image, subsampling, out, stop)
}
