//! Test corpus: roundtrip and resampling sweeps with various patterns and sizes.

use enough::Unstoppable;
use zenraster::*;

fn checkerboard(w: u32, h: u32) -> Image {
    Image::from_fn(w, h, |x, y| {
        if (x + y) % 2 == 0 {
            Rgb::new(200, 220, 240)
        } else {
            Rgb::new(10, 40, 70)
        }
    })
}

fn noise_pattern(w: u32, h: u32) -> Image {
    let mut state: u32 = 0xDEAD_BEEF;
    Image::from_fn(w, h, |_, _| {
        state ^= state << 13;
        state ^= state >> 17;
        state ^= state << 5;
        Rgb::new(state as u8, (state >> 8) as u8, (state >> 16) as u8)
    })
}

const SIZES: &[(u32, u32)] = &[
    (1, 1),
    (2, 1),
    (1, 3),
    (3, 3),
    (5, 2),
    (6, 7),
    (7, 5),
    (16, 9),
    (33, 17),
];

// ── BMP roundtrips ───────────────────────────────────────────────────

#[cfg(feature = "bmp")]
#[test]
fn bmp_roundtrip_every_padding_width() {
    for &(w, h) in SIZES {
        for img in [checkerboard(w, h), noise_pattern(w, h)] {
            let encoded = encode_bmp(&img, Unstoppable).unwrap();
            let stride = bmp::row_stride(w).unwrap();
            assert_eq!(stride % 4, 0);
            assert_eq!(encoded.len(), bmp::HEADERS_SIZE + stride * h as usize);
            let decoded = decode_bmp(&encoded, Unstoppable).unwrap();
            assert_eq!(decoded, img, "{w}x{h}");
        }
    }
}

#[cfg(feature = "bmp")]
#[test]
fn bmp_padding_bytes_are_zero() {
    let img = Image::from_fn(5, 3, |_, _| Rgb::WHITE);
    let encoded = encode_bmp(&img, Unstoppable).unwrap();
    // 15 data bytes + 1 padding byte per row
    for row in encoded[bmp::HEADERS_SIZE..].chunks_exact(16) {
        assert!(row[..15].iter().all(|&b| b == 255));
        assert_eq!(row[15], 0);
    }
}

#[cfg(feature = "bmp")]
#[test]
fn bmp_empty_image_roundtrip() {
    let encoded = encode_bmp(&Image::default(), Unstoppable).unwrap();
    assert_eq!(encoded.len(), bmp::HEADERS_SIZE);
    let decoded = decode_bmp(&encoded, Unstoppable).unwrap();
    assert!(decoded.is_empty());
    assert_eq!(decoded.dimensions(), (0, 0));
}

#[cfg(feature = "bmp")]
#[test]
fn bmp_encode_to_writer_matches_buffer() {
    let img = noise_pattern(9, 4);
    let mut out = Vec::new();
    EncodeRequest::bmp()
        .encode_to(&img, &mut out, Unstoppable)
        .unwrap();
    assert_eq!(out, encode_bmp(&img, Unstoppable).unwrap());
}

#[cfg(feature = "bmp")]
#[test]
fn bmp_short_write_is_io_error() {
    let img = noise_pattern(8, 8);
    let mut buf = [0u8; 100];
    let mut sink: &mut [u8] = &mut buf;
    let err = EncodeRequest::bmp()
        .encode_to(&img, &mut sink, Unstoppable)
        .unwrap_err();
    assert!(matches!(err, ImageError::Io(_)), "{err:?}");
}

// ── Planar YUV ───────────────────────────────────────────────────────

#[cfg(feature = "yuv")]
#[test]
fn yuv_frame_sizes_match_encoder_output() {
    for &(w, h) in SIZES {
        for subsampling in [
            ChromaSubsampling::Yuv420,
            ChromaSubsampling::Yuv422,
            ChromaSubsampling::Yuv444,
        ] {
            let img = noise_pattern(w, h);
            let planes = encode_yuv(&img, subsampling, Unstoppable).unwrap();
            assert_eq!(planes.len(), yuv::frame_size(w, h, subsampling).unwrap());
            let decoded = decode_yuv(&planes, w, h, subsampling, Unstoppable).unwrap();
            assert_eq!(decoded.dimensions(), (w, h));
        }
    }
}

#[cfg(feature = "yuv")]
#[test]
fn yuv444_matches_per_pixel_conversion() {
    for &(w, h) in SIZES {
        let img = noise_pattern(w, h);
        let planes = encode_yuv(&img, ChromaSubsampling::Yuv444, Unstoppable).unwrap();
        let decoded = decode_yuv(&planes, w, h, ChromaSubsampling::Yuv444, Unstoppable).unwrap();
        for (orig, got) in img.pixels().iter().zip(decoded.pixels()) {
            assert_eq!(*got, Rgb::from(Yuv::from(*orig)));
        }
    }
}

#[cfg(feature = "yuv")]
#[test]
fn yuv_flat_colour_survives_any_subsampling() {
    let flat = Image::from_fn(7, 5, |_, _| Rgb::new(12, 200, 77));
    for subsampling in [
        ChromaSubsampling::Yuv420,
        ChromaSubsampling::Yuv422,
        ChromaSubsampling::Yuv444,
    ] {
        let planes = encode_yuv(&flat, subsampling, Unstoppable).unwrap();
        let decoded = decode_yuv(&planes, 7, 5, subsampling, Unstoppable).unwrap();
        assert!(decoded.pixels().iter().all(|&p| p == Rgb::new(12, 200, 77)));
    }
}

#[cfg(feature = "yuv")]
#[test]
fn yuv422_shares_chroma_horizontally_only() {
    let img = Image::from_fn(2, 2, |x, y| match (x, y) {
        (0, 0) => Rgb::new(255, 0, 0),
        (0, 1) => Rgb::new(0, 0, 255),
        _ => Rgb::WHITE,
    });
    let planes = encode_yuv(&img, ChromaSubsampling::Yuv422, Unstoppable).unwrap();
    // Y plane (4) + Cb (1x2) + Cr (1x2)
    assert_eq!(planes.len(), 8);
    assert_eq!(&planes[4..6], &[85, 255]);
    assert_eq!(&planes[6..8], &[255, 107]);
}

// ── Resampling sweeps ────────────────────────────────────────────────

#[test]
fn down_up_never_panics_at_odd_factors() {
    for &(w, h) in SIZES {
        for factor in 1..=5u32 {
            let img = noise_pattern(w, h);
            let mut work = img.clone();
            work.downsample(factor);
            assert_eq!(work.dimensions(), (w / factor, h / factor));
            work.upsample(factor);
            assert_eq!(work.dimensions(), (w / factor * factor, h / factor * factor));
            // Overlap comparison always works once dimensions are ignored.
            let mse = mean_squared_error(&img, &work, true).unwrap();
            assert!(mse.is_finite());
        }
    }
}

#[test]
fn downsample_flat_image_is_flat() {
    let flat = Image::from_fn(12, 9, |_, _| Rgb::new(33, 66, 99));
    for factor in [2, 3, 4] {
        let out = resample::downsample(&flat, factor);
        assert!(out.pixels().iter().all(|&p| p == Rgb::new(33, 66, 99)));
    }
}

#[test]
fn upsample_checkerboard_stays_in_range() {
    let img = checkerboard(5, 5);
    let out = resample::upsample(&img, 4);
    for p in out.pixels() {
        assert!((10..=200).contains(&p.r));
        assert!((40..=220).contains(&p.g));
        assert!((70..=240).contains(&p.b));
    }
    // Source pixels land exactly on multiples of the factor.
    for y in 0..5 {
        for x in 0..5 {
            assert_eq!(out.pixel(x * 4, y * 4), img.pixel(x, y));
        }
    }
}

#[test]
fn mse_is_symmetric_for_noise() {
    let a = noise_pattern(13, 11);
    let b = checkerboard(13, 11);
    let ab = mean_squared_error(&a, &b, false).unwrap();
    let ba = mean_squared_error(&b, &a, false).unwrap();
    assert_eq!(ab, ba);
    assert!(ab > 0.0);
    assert!(psnr(ab, 255) < 100.0);
}
