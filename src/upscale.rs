//! The capability interface upscaling strategies implement.
//!
//! The crate ships the two classical strategies it can express on its own
//! ([`Nearest`] and [`Bilinear`]). Anything that needs an external
//! computer-vision or ML runtime implements [`Upscale`] in its own crate and
//! hands back a plain [`Image`] the codecs and metric can consume.

use core::fmt;
use core::str::FromStr;

use log::debug;

use crate::error::ImageError;
use crate::image::Image;
use crate::resample;

/// Enlarge an image by an integer factor.
pub trait Upscale {
    /// Human-readable strategy name.
    fn name(&self) -> &str;

    /// Whether the strategy runs a learned model.
    fn is_learned(&self) -> bool {
        false
    }

    /// Return `image` scaled by `factor` in both directions.
    fn upscale(&self, image: &Image, factor: u32) -> Result<Image, ImageError>;
}

/// Pixel replication.
#[derive(Clone, Copy, Debug, Default)]
pub struct Nearest;

/// Bilinear interpolation via [`resample::upsample`].
#[derive(Clone, Copy, Debug, Default)]
pub struct Bilinear;

fn check_factor(image: &Image, factor: u32) -> Result<(), ImageError> {
    if factor == 0 {
        return Err(ImageError::InvalidFactor(factor));
    }
    let (width, height) = image.dimensions();
    match (width.checked_mul(factor), height.checked_mul(factor)) {
        (Some(_), Some(_)) => Ok(()),
        _ => Err(ImageError::DimensionsTooLarge { width, height }),
    }
}

impl Upscale for Nearest {
    fn name(&self) -> &str {
        "nearest"
    }

    fn upscale(&self, image: &Image, factor: u32) -> Result<Image, ImageError> {
        check_factor(image, factor)?;
        Ok(resample::replicate(image, factor))
    }
}

impl Upscale for Bilinear {
    fn name(&self) -> &str {
        "bilinear"
    }

    fn upscale(&self, image: &Image, factor: u32) -> Result<Image, ImageError> {
        check_factor(image, factor)?;
        Ok(resample::upsample(image, factor))
    }
}

/// Tag selecting a built-in strategy.
#[non_exhaustive]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum UpscaleMethod {
    Nearest,
    Bilinear,
}

impl UpscaleMethod {
    pub const ALL: [UpscaleMethod; 2] = [UpscaleMethod::Nearest, UpscaleMethod::Bilinear];

    /// Instantiate the strategy for this tag.
    pub fn upscaler(self) -> Box<dyn Upscale> {
        debug!("creating {self} upscaler");
        match self {
            Self::Nearest => Box::new(Nearest),
            Self::Bilinear => Box::new(Bilinear),
        }
    }
}

impl fmt::Display for UpscaleMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Nearest => "nearest",
            Self::Bilinear => "bilinear",
        })
    }
}

impl FromStr for UpscaleMethod {
    type Err = ImageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "nearest" => Ok(Self::Nearest),
            "bilinear" => Ok(Self::Bilinear),
            _ => Err(ImageError::UnsupportedVariant(format!(
                "unknown upscale method {s:?}"
            ))),
        }
    }
}
