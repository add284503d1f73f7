use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use enough::Stop;
use log::{debug, warn};

use crate::decode::not_compiled_in;
use crate::error::ImageError;
use crate::format::{ChromaSubsampling, ImageFormat};
use crate::image::Image;

/// Builder for one encode call.
///
/// The image's grayscale flag is honoured by every format.
#[derive(Clone, Copy, Debug)]
pub struct EncodeRequest {
    format: ImageFormat,
}

impl EncodeRequest {
    pub fn new(format: ImageFormat) -> Self {
        Self { format }
    }

    /// Encode as 24-bit BMP.
    pub fn bmp() -> Self {
        Self::new(ImageFormat::Bmp)
    }

    /// Encode as headerless planar YUV.
    pub fn yuv(subsampling: ChromaSubsampling) -> Self {
        Self::new(ImageFormat::Yuv(subsampling))
    }

    pub fn format(&self) -> ImageFormat {
        self.format
    }

    /// Encode into a new byte buffer.
    pub fn encode(self, image: &Image, stop: impl Stop) -> Result<Vec<u8>, ImageError> {
        match self.format {
            #[cfg(feature = "bmp")]
            ImageFormat::Bmp => crate::bmp::encode(image, &stop),
            #[cfg(feature = "yuv")]
            ImageFormat::Yuv(subsampling) => crate::yuv::encode(image, subsampling, &stop),
            #[allow(unreachable_patterns)]
            other => Err(not_compiled_in(other)),
        }
    }

    /// Encode into any writer. A short write surfaces as [`ImageError::Io`].
    pub fn encode_to<W: Write>(
        self,
        image: &Image,
        out: &mut W,
        stop: impl Stop,
    ) -> Result<(), ImageError> {
        match self.format {
            #[cfg(feature = "bmp")]
            ImageFormat::Bmp => crate::bmp::encode_to(image, out, &stop),
            #[cfg(feature = "yuv")]
            ImageFormat::Yuv(subsampling) => crate::yuv::encode_to(image, subsampling, out, &stop),
            #[allow(unreachable_patterns)]
            other => Err(not_compiled_in(other)),
        }
    }
}

impl Image {
    /// Encode and write to a file, creating or truncating it.
    pub fn save(&self, path: impl AsRef<Path>, format: ImageFormat) -> Result<(), ImageError> {
        let path = path.as_ref();
        debug!(
            "saving {}x{} image to {} as {format}",
            self.width(),
            self.height(),
            path.display()
        );
        let file = File::create(path).map_err(|e| {
            warn!("cannot create {}: {e}", path.display());
            ImageError::Io(e)
        })?;
        let mut out = BufWriter::new(file);
        EncodeRequest::new(format).encode_to(self, &mut out, enough::Unstoppable)?;
        out.flush()?;
        Ok(())
    }
}
