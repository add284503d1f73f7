//! BMP decoder for uncompressed bottom-up 24-bit files.

use enough::Stop;
use log::{debug, trace, warn};

use super::header::{FileHeader, InfoHeader, row_stride};
use crate::error::ImageError;
use crate::image::{Image, pixel_count};
use crate::limits::{Limits, check_limits};
use crate::pixel::Rgb;

// ── Cursor for reading from &[u8] ───────────────────────────────────

struct Cursor<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    fn set_position(&mut self, pos: usize) -> Result<(), ImageError> {
        if pos > self.data.len() {
            return Err(ImageError::UnexpectedEof {
                context: "BMP pixel data offset",
            });
        }
        self.pos = pos;
        Ok(())
    }

    /// Read one fixed-size header record. A short record is a format error.
    fn read_record<const N: usize>(&mut self, what: &str) -> Result<[u8; N], ImageError> {
        let bytes = self.read_slice(N).ok_or_else(|| {
            ImageError::InvalidHeader(format!(
                "truncated {what}: {} of {N} bytes",
                self.data.len().saturating_sub(self.pos)
            ))
        })?;
        let mut buf = [0u8; N];
        buf.copy_from_slice(bytes);
        Ok(buf)
    }

    fn read_slice(&mut self, n: usize) -> Option<&'a [u8]> {
        let end = self.pos.checked_add(n)?;
        let slice = self.data.get(self.pos..end)?;
        self.pos = end;
        Some(slice)
    }
}

// ── Header parsing ──────────────────────────────────────────────────

/// Validated dimensions from both headers.
pub(crate) struct BmpHeader {
    pub file: FileHeader,
    pub info: InfoHeader,
    pub width: u32,
    pub height: u32,
}

/// Read and validate the file and info headers.
///
/// Both records are read before the signature is checked, so input shorter
/// than 54 bytes is `InvalidHeader` whatever its first two bytes are.
pub(crate) fn parse_bmp_header(data: &[u8]) -> Result<BmpHeader, ImageError> {
    let mut cursor = Cursor::new(data);
    parse_headers(&mut cursor)
}

fn parse_headers(cursor: &mut Cursor<'_>) -> Result<BmpHeader, ImageError> {
    let file = FileHeader::from_bytes(&cursor.read_record("BMP file header")?);
    let info = InfoHeader::from_bytes(&cursor.read_record("BMP info header")?);
    trace!("BMP headers: {file:?} {info:?}");

    if !file.has_valid_signature() {
        return Err(ImageError::UnrecognizedFormat);
    }
    if info.bits_per_pixel != 24 {
        return Err(ImageError::UnsupportedVariant(format!(
            "BMP bit depth {} (only 24-bit is supported)",
            info.bits_per_pixel
        )));
    }
    if info.compression != 0 {
        return Err(ImageError::UnsupportedVariant(format!(
            "BMP compression {} (only uncompressed is supported)",
            info.compression
        )));
    }
    let width = u32::try_from(info.width).map_err(|_| {
        ImageError::InvalidHeader(format!("BMP width is negative ({})", info.width))
    })?;
    let height = u32::try_from(info.height).map_err(|_| {
        ImageError::InvalidHeader(format!(
            "BMP height is negative ({}); top-down BMP is not supported",
            info.height
        ))
    })?;
    if info.planes != 1 {
        warn!("BMP planes field is {}, expected 1; ignoring", info.planes);
    }
    if info.size != InfoHeader::SIZE as u32 {
        warn!(
            "BMP info header size is {}, expected {}; reading the first {} bytes only",
            info.size,
            InfoHeader::SIZE,
            InfoHeader::SIZE
        );
    }

    Ok(BmpHeader {
        file,
        info,
        width,
        height,
    })
}

// ── Full decode ─────────────────────────────────────────────────────

/// Decode a BMP file into a fresh [`Image`].
pub(crate) fn decode_bmp(
    data: &[u8],
    limits: Option<&Limits>,
    stop: &dyn Stop,
) -> Result<Image, ImageError> {
    let mut cursor = Cursor::new(data);
    let header = parse_headers(&mut cursor)?;
    let (width, height) = (header.width, header.height);
    debug!("decoding {width}x{height} BMP");

    check_limits(limits, width, height)?;
    let stride = row_stride(width).ok_or(ImageError::DimensionsTooLarge { width, height })?;
    let w = width as usize;
    cursor.set_position(header.file.data_offset as usize)?;

    // Header dimensions are untrusted; confirm every row is present before
    // allocating. The first missing row on disk is reported.
    let available = data.len() - cursor.pos;
    let complete_rows = available.checked_div(stride).unwrap_or(usize::MAX);
    if complete_rows < height as usize {
        return Err(ImageError::TruncatedRow {
            row: height - 1 - complete_rows as u32,
        });
    }

    let mut pixels = vec![Rgb::BLACK; pixel_count(width, height)?];
    stop.check()?;

    // Rows are stored bottom-up; fill the buffer from the last row.
    for (i, out_row) in pixels.chunks_exact_mut(w.max(1)).rev().enumerate() {
        if i % 16 == 0 {
            stop.check()?;
        }
        let row = height - 1 - i as u32;
        let src = cursor
            .read_slice(stride)
            .ok_or(ImageError::TruncatedRow { row })?;
        for (px, bgr) in out_row.iter_mut().zip(src.chunks_exact(3)) {
            *px = Rgb::from_bgr(bgr);
        }
    }

    Image::from_pixels(width, height, pixels)
}
