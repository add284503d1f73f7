//! # zenraster
//!
//! BMP and planar YUV image codec with YCbCr conversion, integer-factor
//! resampling and MSE/PSNR comparison.
//!
//! Every decoder produces an [`Image`]: an owned, row-major buffer of
//! [`Rgb`] pixels. Every encoder consumes one. Resampling and comparison are
//! pure functions over that buffer, which is also the hand-off point for
//! external upscalers (see [`Upscale`]).
//!
//! ## Supported Formats
//!
//! ### BMP (`bmp` feature)
//! - Decode and encode of uncompressed, bottom-up, 24-bit BMP
//!
//! ### Planar YUV (`yuv` feature)
//! - Headerless Y, Cb, Cr planes in 4:2:0, 4:2:2 and 4:4:4 layouts
//! - Width and height are supplied by the caller
//!
//! ## Non-Goals
//!
//! - Streaming decode; the whole image is materialized in memory
//! - Alpha, colour profiles, or bit depths other than 8 bits per channel
//! - Compressed BMP variants
//! - Learned or library-backed super-resolution (implement [`Upscale`])
//!
//! ## Usage
//!
//! ```no_run
//! use zenraster::{ChromaSubsampling, DecodeRequest, EncodeRequest, Unstoppable};
//!
//! let data: &[u8] = &[]; // your BMP bytes
//!
//! let mut image = DecodeRequest::new(data).decode(Unstoppable)?;
//! image.downsample(2);
//! image.upsample(2);
//!
//! let planar = EncodeRequest::yuv(ChromaSubsampling::Yuv420)
//!     .encode(&image, Unstoppable)?;
//! # let _ = planar;
//! # Ok::<(), zenraster::ImageError>(())
//! ```

#![forbid(unsafe_code)]

mod error;
mod format;
mod image;
mod limits;
mod pixel;

#[cfg(feature = "bmp")]
pub mod bmp;

#[cfg(feature = "yuv")]
pub mod yuv;

pub mod metric;
pub mod resample;
pub mod upscale;

mod decode;
mod encode;

// Re-exports
pub use decode::DecodeRequest;
pub use encode::EncodeRequest;
pub use enough::{Stop, Unstoppable};
pub use error::{ErrorKind, ImageError};
pub use format::{ChromaSubsampling, ImageFormat};
pub use image::Image;
pub use limits::Limits;
pub use metric::{Fidelity, compare, mean_squared_error, psnr};
pub use pixel::{Rgb, Yuv};
pub use upscale::{Upscale, UpscaleMethod};

/// Decode a BMP file.
#[cfg(feature = "bmp")]
pub fn decode_bmp(data: &[u8], stop: impl Stop) -> Result<Image, ImageError> {
    bmp::decode(data, None, &stop)
}

/// Encode as uncompressed 24-bit BMP.
#[cfg(feature = "bmp")]
pub fn encode_bmp(image: &Image, stop: impl Stop) -> Result<Vec<u8>, ImageError> {
    bmp::encode(image, &stop)
}

/// Decode one planar YUV frame of the given size.
#[cfg(feature = "yuv")]
pub fn decode_yuv(
    data: &[u8],
    width: u32,
    height: u32,
    subsampling: ChromaSubsampling,
    stop: impl Stop,
) -> Result<Image, ImageError> {
    yuv::decode(data, width, height, subsampling, None, &stop)
}

/// Encode as planar YUV.
#[cfg(feature = "yuv")]
pub fn encode_yuv(
    image: &Image,
    subsampling: ChromaSubsampling,
    stop: impl Stop,
) -> Result<Vec<u8>, ImageError> {
    yuv::encode(image, subsampling, &stop)
}
