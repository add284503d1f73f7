use core::fmt;
use core::str::FromStr;

use crate::error::ImageError;

/// Chroma subsampling of a planar YUV file.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ChromaSubsampling {
    /// Chroma halved in both directions.
    Yuv420,
    /// Chroma halved horizontally only.
    Yuv422,
    /// Full-resolution chroma.
    Yuv444,
}

impl ChromaSubsampling {
    /// Luma columns per chroma sample.
    pub const fn horizontal_divisor(self) -> u32 {
        match self {
            Self::Yuv420 | Self::Yuv422 => 2,
            Self::Yuv444 => 1,
        }
    }

    /// Luma rows per chroma sample.
    pub const fn vertical_divisor(self) -> u32 {
        match self {
            Self::Yuv420 => 2,
            Self::Yuv422 | Self::Yuv444 => 1,
        }
    }

    /// Dimensions of each chroma plane for a `width` x `height` image.
    pub const fn chroma_dimensions(self, width: u32, height: u32) -> (u32, u32) {
        (
            width.div_ceil(self.horizontal_divisor()),
            height.div_ceil(self.vertical_divisor()),
        )
    }
}

/// On-disk image format.
#[non_exhaustive]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ImageFormat {
    /// Uncompressed 24-bit BMP.
    Bmp,
    /// Headerless planar Y, Cb, Cr.
    Yuv(ChromaSubsampling),
}

impl ImageFormat {
    pub const YUV420P: ImageFormat = ImageFormat::Yuv(ChromaSubsampling::Yuv420);
    pub const YUV422P: ImageFormat = ImageFormat::Yuv(ChromaSubsampling::Yuv422);
    pub const YUV444P: ImageFormat = ImageFormat::Yuv(ChromaSubsampling::Yuv444);

    /// Whether the file itself records width and height.
    pub fn has_header(self) -> bool {
        matches!(self, Self::Bmp)
    }
}

impl fmt::Display for ImageFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Bmp => "BMP",
            Self::Yuv(ChromaSubsampling::Yuv420) => "YUV420P",
            Self::Yuv(ChromaSubsampling::Yuv422) => "YUV422P",
            Self::Yuv(ChromaSubsampling::Yuv444) => "YUV444P",
        })
    }
}

impl FromStr for ImageFormat {
    type Err = ImageError;

    /// Parse a format name, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "BMP" => Ok(Self::Bmp),
            "YUV420P" => Ok(Self::YUV420P),
            "YUV422P" => Ok(Self::YUV422P),
            "YUV444P" => Ok(Self::YUV444P),
            _ => Err(ImageError::UnsupportedVariant(format!(
                "unknown image format {s:?} (expected BMP, YUV420P, YUV422P or YUV444P)"
            ))),
        }
    }
}
