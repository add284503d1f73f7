#![no_main]
use libfuzzer_sys::fuzz_target;
use zenraster::{ChromaSubsampling, Limits};

fuzz_target!(|data: &[u8]| {
    // BMP decode must never panic
    let limits = Limits {
        max_width: Some(1 << 14),
        max_height: Some(1 << 14),
        max_pixels: Some(1 << 22),
        ..Default::default()
    };
    let _ = zenraster::DecodeRequest::new(data)
        .with_limits(&limits)
        .decode(enough::Unstoppable);

    // Planar decode with dimensions taken from the input itself
    if data.len() >= 2 {
        let (w, h) = (u32::from(data[0] % 64), u32::from(data[1] % 64));
        for subsampling in [
            ChromaSubsampling::Yuv420,
            ChromaSubsampling::Yuv422,
            ChromaSubsampling::Yuv444,
        ] {
            let _ = zenraster::decode_yuv(&data[2..], w, h, subsampling, enough::Unstoppable);
        }
    }
});
