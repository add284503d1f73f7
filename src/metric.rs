//! Mean squared error and PSNR between two images.

use crate::error::ImageError;
use crate::image::Image;

/// PSNR reported for identical images.
pub const PSNR_IDENTICAL: f64 = 100.0;

/// Both fidelity numbers for one comparison.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Fidelity {
    pub mse: f64,
    /// PSNR in dB against a peak of 255.
    pub psnr: f64,
}

/// Mean of per-channel squared differences.
///
/// With `ignore_dimensions == false`, images of different size are a
/// [`ImageError::DimensionMismatch`]. Otherwise only the overlapping
/// `min(w) x min(h)` top-left region is compared; an empty overlap gives 0.
pub fn mean_squared_error(
    a: &Image,
    b: &Image,
    ignore_dimensions: bool,
) -> Result<f64, ImageError> {
    if !ignore_dimensions && a.dimensions() != b.dimensions() {
        return Err(ImageError::DimensionMismatch {
            left: a.dimensions(),
            right: b.dimensions(),
        });
    }
    let width = a.width().min(b.width()) as usize;
    let height = a.height().min(b.height()) as usize;
    let samples = width * height * 3;
    if samples == 0 {
        return Ok(0.0);
    }

    let sq = |x: u8, y: u8| {
        let d = u64::from(x.abs_diff(y));
        d * d
    };
    let mut sum = 0u64;
    for (row_a, row_b) in a.rows().zip(b.rows()).take(height) {
        for (pa, pb) in row_a[..width].iter().zip(&row_b[..width]) {
            sum += sq(pa.r, pb.r) + sq(pa.g, pb.g) + sq(pa.b, pb.b);
        }
    }
    Ok(sum as f64 / samples as f64)
}

/// Peak signal-to-noise ratio in dB.
///
/// Returns [`PSNR_IDENTICAL`] when `mse` is exactly zero.
pub fn psnr(mse: f64, max_pixel_value: u32) -> f64 {
    if mse == 0.0 {
        return PSNR_IDENTICAL;
    }
    let peak = f64::from(max_pixel_value);
    10.0 * (peak * peak / mse).log10()
}

/// MSE and 8-bit PSNR in one call.
pub fn compare(a: &Image, b: &Image, ignore_dimensions: bool) -> Result<Fidelity, ImageError> {
    let mse = mean_squared_error(a, b, ignore_dimensions)?;
    Ok(Fidelity {
        mse,
        psnr: psnr(mse, 255),
    })
}
