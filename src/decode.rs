use std::path::Path;

use enough::Stop;
use log::{debug, warn};

use crate::error::ImageError;
use crate::format::ImageFormat;
use crate::image::Image;
use crate::limits::Limits;

/// Builder for one decode call.
///
/// ```no_run
/// use zenraster::{DecodeRequest, ImageFormat, Unstoppable};
///
/// let data: &[u8] = &[]; // planar bytes
/// let image = DecodeRequest::new(data)
///     .with_format(ImageFormat::YUV420P)
///     .with_dimensions(640, 480)
///     .decode(Unstoppable)?;
/// # Ok::<(), zenraster::ImageError>(())
/// ```
#[derive(Clone, Debug)]
pub struct DecodeRequest<'a> {
    data: &'a [u8],
    format: Option<ImageFormat>,
    dimensions: Option<(u32, u32)>,
    limits: Option<&'a Limits>,
}

impl<'a> DecodeRequest<'a> {
    /// Decode `data`. Without [`with_format`](Self::with_format) the input
    /// must be a BMP file.
    pub fn new(data: &'a [u8]) -> Self {
        Self {
            data,
            format: None,
            dimensions: None,
            limits: None,
        }
    }

    pub fn with_format(mut self, format: ImageFormat) -> Self {
        self.format = Some(format);
        self
    }

    /// Width and height for headerless formats. Ignored for BMP.
    pub fn with_dimensions(mut self, width: u32, height: u32) -> Self {
        self.dimensions = Some((width, height));
        self
    }

    pub fn with_limits(mut self, limits: &'a Limits) -> Self {
        self.limits = Some(limits);
        self
    }

    /// The format this request will decode as.
    pub fn format(&self) -> Result<ImageFormat, ImageError> {
        match self.format {
            Some(format) => Ok(format),
            None if self.data.starts_with(b"BM") => Ok(ImageFormat::Bmp),
            None => Err(ImageError::UnrecognizedFormat),
        }
    }

    /// Width and height without decoding pixels.
    pub fn probe(&self) -> Result<(u32, u32), ImageError> {
        match self.format()? {
            #[cfg(feature = "bmp")]
            ImageFormat::Bmp => crate::bmp::probe(self.data),
            ImageFormat::Yuv(_) => self.dimensions.ok_or(ImageError::MissingDimensions),
            #[allow(unreachable_patterns)]
            other => Err(not_compiled_in(other)),
        }
    }

    /// Decode into a new [`Image`].
    pub fn decode(self, stop: impl Stop) -> Result<Image, ImageError> {
        let format = self.format()?;
        debug!("decode request: {format}, {} bytes", self.data.len());
        match format {
            #[cfg(feature = "bmp")]
            ImageFormat::Bmp => crate::bmp::decode(self.data, self.limits, &stop),
            #[cfg(feature = "yuv")]
            ImageFormat::Yuv(subsampling) => {
                let (width, height) = self.dimensions.ok_or(ImageError::MissingDimensions)?;
                crate::yuv::decode(self.data, width, height, subsampling, self.limits, &stop)
            }
            #[allow(unreachable_patterns)]
            other => Err(not_compiled_in(other)),
        }
    }
}

pub(crate) fn not_compiled_in(format: ImageFormat) -> ImageError {
    ImageError::UnsupportedVariant(format!("{format} support is not enabled in this build"))
}

impl Image {
    /// Read and decode a file.
    ///
    /// `dimensions` is required for planar formats and ignored for BMP.
    pub fn load(
        path: impl AsRef<Path>,
        format: ImageFormat,
        dimensions: Option<(u32, u32)>,
    ) -> Result<Image, ImageError> {
        let path = path.as_ref();
        debug!("loading {} as {format}", path.display());
        let data = std::fs::read(path).map_err(|e| {
            warn!("cannot read {}: {e}", path.display());
            ImageError::Io(e)
        })?;
        let mut request = DecodeRequest::new(&data).with_format(format);
        if let Some((width, height)) = dimensions {
            request = request.with_dimensions(width, height);
        }
        request.decode(enough::Unstoppable)
    }
}
