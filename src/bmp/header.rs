//! The two fixed BMP header records.
//!
//! Both are packed little-endian structs with no variable-length parts,
//! 14 + 40 = 54 bytes in total.

use crate::error::ImageError;

/// BITMAPFILEHEADER.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FileHeader {
    pub signature: [u8; 2],
    /// Total file size in bytes.
    pub file_size: u32,
    pub reserved: u32,
    /// Offset from the start of the file to the first pixel row.
    pub data_offset: u32,
}

/// BITMAPINFOHEADER.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InfoHeader {
    pub size: u32,
    pub width: i32,
    /// Positive: rows stored bottom-up.
    pub height: i32,
    pub planes: u16,
    pub bits_per_pixel: u16,
    pub compression: u32,
    /// Size of the padded pixel array in bytes.
    pub image_size: u32,
    pub x_pixels_per_meter: i32,
    pub y_pixels_per_meter: i32,
    pub colors_used: u32,
    pub important_colors: u32,
}

/// Bytes per padded row of 24-bit pixels.
pub fn row_stride(width: u32) -> Option<usize> {
    (width as usize)
        .checked_mul(3)
        .and_then(|r| r.checked_add(3))
        .map(|r| r & !3)
}

/// Padded pixel array size, checked to fit the 32-bit header fields.
fn pixel_data_size(width: u32, height: u32) -> Result<u32, ImageError> {
    row_stride(width)
        .and_then(|s| s.checked_mul(height as usize))
        .and_then(|n| u32::try_from(n).ok())
        .filter(|n| n.checked_add(HEADERS_SIZE as u32).is_some())
        .ok_or(ImageError::DimensionsTooLarge { width, height })
}

/// Combined size of both headers, and the pixel data offset we write.
pub const HEADERS_SIZE: usize = FileHeader::SIZE + InfoHeader::SIZE;

impl FileHeader {
    pub const SIZE: usize = 14;
    pub const SIGNATURE: [u8; 2] = *b"BM";

    /// Header for a 24-bit image with pixel data right after both headers.
    pub fn for_dimensions(width: u32, height: u32) -> Result<Self, ImageError> {
        let data_size = pixel_data_size(width, height)?;
        Ok(Self {
            signature: Self::SIGNATURE,
            file_size: data_size + HEADERS_SIZE as u32,
            reserved: 0,
            data_offset: HEADERS_SIZE as u32,
        })
    }

    pub fn has_valid_signature(&self) -> bool {
        self.signature == Self::SIGNATURE
    }

    pub fn to_bytes(&self) -> [u8; Self::SIZE] {
        let mut out = [0u8; Self::SIZE];
        out[0..2].copy_from_slice(&self.signature);
        out[2..6].copy_from_slice(&self.file_size.to_le_bytes());
        out[6..10].copy_from_slice(&self.reserved.to_le_bytes());
        out[10..14].copy_from_slice(&self.data_offset.to_le_bytes());
        out
    }

    pub fn from_bytes(b: &[u8; Self::SIZE]) -> Self {
        Self {
            signature: [b[0], b[1]],
            file_size: u32::from_le_bytes([b[2], b[3], b[4], b[5]]),
            reserved: u32::from_le_bytes([b[6], b[7], b[8], b[9]]),
            data_offset: u32::from_le_bytes([b[10], b[11], b[12], b[13]]),
        }
    }
}

impl InfoHeader {
    pub const SIZE: usize = 40;

    /// Header for an uncompressed, bottom-up, 24-bit image.
    pub fn for_dimensions(width: u32, height: u32) -> Result<Self, ImageError> {
        let too_large = |_| ImageError::DimensionsTooLarge { width, height };
        let w = i32::try_from(width).map_err(too_large)?;
        let h = i32::try_from(height).map_err(too_large)?;
        Ok(Self {
            size: Self::SIZE as u32,
            width: w,
            height: h,
            planes: 1,
            bits_per_pixel: 24,
            compression: 0,
            image_size: pixel_data_size(width, height)?,
            x_pixels_per_meter: 0,
            y_pixels_per_meter: 0,
            colors_used: 0,
            important_colors: 0,
        })
    }

    pub fn to_bytes(&self) -> [u8; Self::SIZE] {
        let mut out = [0u8; Self::SIZE];
        out[0..4].copy_from_slice(&self.size.to_le_bytes());
        out[4..8].copy_from_slice(&self.width.to_le_bytes());
        out[8..12].copy_from_slice(&self.height.to_le_bytes());
        out[12..14].copy_from_slice(&self.planes.to_le_bytes());
        out[14..16].copy_from_slice(&self.bits_per_pixel.to_le_bytes());
        out[16..20].copy_from_slice(&self.compression.to_le_bytes());
        out[20..24].copy_from_slice(&self.image_size.to_le_bytes());
        out[24..28].copy_from_slice(&self.x_pixels_per_meter.to_le_bytes());
        out[28..32].copy_from_slice(&self.y_pixels_per_meter.to_le_bytes());
        out[32..36].copy_from_slice(&self.colors_used.to_le_bytes());
        out[36..40].copy_from_slice(&self.important_colors.to_le_bytes());
        out
    }

    pub fn from_bytes(b: &[u8; Self::SIZE]) -> Self {
        let u32_at = |i: usize| u32::from_le_bytes([b[i], b[i + 1], b[i + 2], b[i + 3]]);
        let i32_at = |i: usize| i32::from_le_bytes([b[i], b[i + 1], b[i + 2], b[i + 3]]);
        let u16_at = |i: usize| u16::from_le_bytes([b[i], b[i + 1]]);
        Self {
            size: u32_at(0),
            width: i32_at(4),
            height: i32_at(8),
            planes: u16_at(12),
            bits_per_pixel: u16_at(14),
            compression: u32_at(16),
            image_size: u32_at(20),
            x_pixels_per_meter: i32_at(24),
            y_pixels_per_meter: i32_at(28),
            colors_used: u32_at(32),
            important_colors: u32_at(36),
        }
    }
}
