use std::io::Write;

use enough::Stop;
use log::debug;

use super::plane_sizes;
use crate::error::ImageError;
use crate::format::ChromaSubsampling;
use crate::image::Image;
use crate::pixel::Yuv;

/// Write `image` as Y, Cb, Cr planes.
///
/// Chroma is taken from pixels with `x % hd == 0 && y % vd == 0` only. Chroma
/// planes are `ceil(w / hd) x ceil(h / vd)` so odd dimensions keep their last
/// column/row of samples, matching what the decoder reads.
pub(crate) fn encode_yuv<W: Write>(
    image: &Image,
    subsampling: ChromaSubsampling,
    out: &mut W,
    stop: &dyn Stop,
) -> Result<(), ImageError> {
    let (width, height) = image.dimensions();
    debug!(
        "encoding {width}x{height} planar {subsampling:?} (grayscale={})",
        image.is_grayscale()
    );
    let (luma_len, chroma_len) = plane_sizes(width, height, subsampling)?;

    let hd = subsampling.horizontal_divisor() as usize;
    let vd = subsampling.vertical_divisor() as usize;
    let (chroma_w, _) = subsampling.chroma_dimensions(width, height);
    let chroma_w = chroma_w as usize;

    let mut y_plane = Vec::with_capacity(luma_len);
    let mut cb_plane = vec![0u8; chroma_len];
    let mut cr_plane = vec![0u8; chroma_len];

    for (y, row) in image.rows().enumerate() {
        if y % 16 == 0 {
            stop.check()?;
        }
        let sample_row = y % vd == 0;
        for (x, &px) in row.iter().enumerate() {
            let yuv = Yuv::from(image.rendered(px));
            y_plane.push(yuv.y);
            if sample_row && x % hd == 0 {
                let ci = (y / vd) * chroma_w + x / hd;
                cb_plane[ci] = yuv.cb;
                cr_plane[ci] = yuv.cr;
            }
        }
    }

    out.write_all(&y_plane)?;
    out.write_all(&cb_plane)?;
    out.write_all(&cr_plane)?;
    Ok(())
}
