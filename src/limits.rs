use crate::error::ImageError;
use crate::pixel::Rgb;

/// Caps applied before a decoder allocates its pixel buffer.
///
/// `None` leaves a bound unchecked. Planar input is held to the same
/// bounds as BMP since both decode into the same [`crate::Image`].
#[derive(Clone, Debug, Default)]
pub struct Limits {
    pub max_width: Option<u64>,
    pub max_height: Option<u64>,
    /// Maximum `width * height`.
    pub max_pixels: Option<u64>,
    /// Maximum size of the decoded `Rgb` buffer in bytes.
    pub max_memory_bytes: Option<u64>,
}

impl Limits {
    /// Validate a `width` x `height` image, including its RGB8 buffer size.
    pub(crate) fn check(&self, width: u32, height: u32) -> Result<(), ImageError> {
        let exceeds = |what: &str, value: u64, bound: Option<u64>| match bound {
            Some(max) if value > max => Err(ImageError::LimitExceeded(format!(
                "{what} {value} exceeds limit {max}"
            ))),
            _ => Ok(()),
        };

        let pixels = u64::from(width) * u64::from(height);
        exceeds("width", width.into(), self.max_width)?;
        exceeds("height", height.into(), self.max_height)?;
        exceeds("pixel count", pixels, self.max_pixels)?;

        let bytes = pixels
            .checked_mul(size_of::<Rgb>() as u64)
            .ok_or(ImageError::DimensionsTooLarge { width, height })?;
        exceeds("buffer size in bytes", bytes, self.max_memory_bytes)
    }
}

pub(crate) fn check_limits(
    limits: Option<&Limits>,
    width: u32,
    height: u32,
) -> Result<(), ImageError> {
    limits.map_or(Ok(()), |l| l.check(width, height))
}
