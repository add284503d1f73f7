//! Integer-factor resizing.
//!
//! Both functions return a new [`Image`]; [`Image::downsample`] and
//! [`Image::upsample`] swap the result in as a single assignment. The
//! grayscale flag is carried over unchanged.

use log::trace;

use crate::image::Image;
use crate::pixel::Rgb;

/// Shrink by `factor` in both directions with a box filter.
///
/// The output is `floor(w / factor) x floor(h / factor)`. Each output pixel
/// is the truncating integer mean of the `factor x factor` block it covers;
/// source rows and columns past the last full block are dropped.
///
/// # Panics
///
/// If `factor` is zero.
pub fn downsample(image: &Image, factor: u32) -> Image {
    assert!(factor > 0, "downsample factor must be positive");
    let (width, height) = image.dimensions();
    let (out_w, out_h) = (width / factor, height / factor);
    trace!("downsample {width}x{height} by {factor} -> {out_w}x{out_h}");

    let src = image.pixels();
    let stride = width as usize;
    let area = u64::from(factor) * u64::from(factor);

    Image::from_fn(out_w, out_h, |x, y| {
        let mut sum = [0u64; 3];
        for sy in y * factor..(y + 1) * factor {
            let row = &src[sy as usize * stride..(sy as usize + 1) * stride];
            for p in &row[(x * factor) as usize..((x + 1) * factor) as usize] {
                sum[0] += u64::from(p.r);
                sum[1] += u64::from(p.g);
                sum[2] += u64::from(p.b);
            }
        }
        Rgb::new(
            (sum[0] / area) as u8,
            (sum[1] / area) as u8,
            (sum[2] / area) as u8,
        )
    })
    .with_grayscale(image.is_grayscale())
}

/// Enlarge by `factor` in both directions with bilinear interpolation.
///
/// Output pixel `(x, y)` samples the source at `(x / factor, y / factor)`.
/// The four surrounding source pixels are blended by the fractional offset;
/// neighbours past the right or bottom edge are clamped to the last
/// column/row. Results are rounded to nearest.
///
/// # Panics
///
/// If `factor` is zero or the output dimensions overflow `u32`.
pub fn upsample(image: &Image, factor: u32) -> Image {
    assert!(factor > 0, "upsample factor must be positive");
    let (width, height) = image.dimensions();
    let out_w = width
        .checked_mul(factor)
        .expect("upsampled width overflows u32");
    let out_h = height
        .checked_mul(factor)
        .expect("upsampled height overflows u32");
    trace!("upsample {width}x{height} by {factor} -> {out_w}x{out_h}");

    let src = image.pixels();
    let stride = width as usize;
    let scale = factor as f32;
    let at = |x: u32, y: u32| src[y as usize * stride + x as usize];

    Image::from_fn(out_w, out_h, |x, y| {
        let x_ratio = x as f32 / scale;
        let y_ratio = y as f32 / scale;
        let x0 = (x_ratio as u32).min(width - 1);
        let y0 = (y_ratio as u32).min(height - 1);
        let dx = x_ratio - x0 as f32;
        let dy = y_ratio - y0 as f32;
        let x1 = (x0 + 1).min(width - 1);
        let y1 = (y0 + 1).min(height - 1);

        let (p00, p10, p01, p11) = (at(x0, y0), at(x1, y0), at(x0, y1), at(x1, y1));
        let blend = |c00: u8, c10: u8, c01: u8, c11: u8| -> u8 {
            let v = (1.0 - dx) * (1.0 - dy) * f32::from(c00)
                + dx * (1.0 - dy) * f32::from(c10)
                + (1.0 - dx) * dy * f32::from(c01)
                + dx * dy * f32::from(c11);
            v.round().clamp(0.0, 255.0) as u8
        };

        Rgb::new(
            blend(p00.r, p10.r, p01.r, p11.r),
            blend(p00.g, p10.g, p01.g, p11.g),
            blend(p00.b, p10.b, p01.b, p11.b),
        )
    })
    .with_grayscale(image.is_grayscale())
}

/// Enlarge by `factor` by repeating each source pixel into a block.
///
/// # Panics
///
/// If `factor` is zero or the output dimensions overflow `u32`.
pub fn replicate(image: &Image, factor: u32) -> Image {
    assert!(factor > 0, "replicate factor must be positive");
    let (width, height) = image.dimensions();
    let out_w = width
        .checked_mul(factor)
        .expect("upsampled width overflows u32");
    let out_h = height
        .checked_mul(factor)
        .expect("upsampled height overflows u32");
    Image::from_fn(out_w, out_h, |x, y| image.pixel(x / factor, y / factor))
        .with_grayscale(image.is_grayscale())
}
