use enough::Stop;
use log::debug;

use super::plane_sizes;
use crate::error::ImageError;
use crate::format::ChromaSubsampling;
use crate::image::Image;
use crate::limits::{Limits, check_limits};
use crate::pixel::{Rgb, Yuv};

/// Slice the next `len` bytes as the named plane.
fn take_plane<'a>(
    data: &'a [u8],
    pos: &mut usize,
    len: usize,
    plane: &'static str,
) -> Result<&'a [u8], ImageError> {
    let end = pos
        .checked_add(len)
        .ok_or(ImageError::TruncatedPlane { plane })?;
    let slice = data
        .get(*pos..end)
        .ok_or(ImageError::TruncatedPlane { plane })?;
    *pos = end;
    Ok(slice)
}

/// Decode one planar frame. Trailing bytes after the Cr plane are ignored.
pub(crate) fn decode_yuv(
    data: &[u8],
    width: u32,
    height: u32,
    subsampling: ChromaSubsampling,
    limits: Option<&Limits>,
    stop: &dyn Stop,
) -> Result<Image, ImageError> {
    debug!("decoding {width}x{height} planar {subsampling:?}");
    check_limits(limits, width, height)?;
    let (luma_len, chroma_len) = plane_sizes(width, height, subsampling)?;

    let mut pos = 0;
    let y_plane = take_plane(data, &mut pos, luma_len, "Y")?;
    let cb_plane = take_plane(data, &mut pos, chroma_len, "Cb")?;
    let cr_plane = take_plane(data, &mut pos, chroma_len, "Cr")?;

    stop.check()?;

    let hd = subsampling.horizontal_divisor() as usize;
    let vd = subsampling.vertical_divisor() as usize;
    let (chroma_w, _) = subsampling.chroma_dimensions(width, height);
    let chroma_w = chroma_w as usize;
    let w = width as usize;

    let mut pixels = Vec::with_capacity(luma_len);
    for (y, luma_row) in y_plane.chunks_exact(w.max(1)).enumerate() {
        if y % 16 == 0 {
            stop.check()?;
        }
        let chroma_row = (y / vd) * chroma_w;
        for (x, &luma) in luma_row.iter().enumerate() {
            let ci = chroma_row + x / hd;
            pixels.push(Rgb::from(Yuv::new(luma, cb_plane[ci], cr_plane[ci])));
        }
    }

    Image::from_pixels(width, height, pixels)
}
