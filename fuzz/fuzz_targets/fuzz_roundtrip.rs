#![no_main]
use libfuzzer_sys::fuzz_target;
use zenraster::*;

fuzz_target!(|data: &[u8]| {
    // If we can decode it, re-encoding and decoding again must produce identical pixels
    let limits = Limits {
        max_width: Some(1 << 14),
        max_height: Some(1 << 14),
        max_pixels: Some(1 << 22),
        ..Default::default()
    };
    let Ok(decoded) = DecodeRequest::new(data)
        .with_limits(&limits)
        .decode(enough::Unstoppable)
    else {
        return;
    };

    let reencoded = encode_bmp(&decoded, enough::Unstoppable).expect("re-encode failed");
    let Ok(decoded2) = decode_bmp(&reencoded, enough::Unstoppable) else {
        panic!("re-encoded data failed to decode");
    };
    assert_eq!(decoded, decoded2, "roundtrip pixel mismatch");

    // Resampling a decoded image must not panic either
    for factor in 1..=3 {
        let down = resample::downsample(&decoded, factor);
        let _ = resample::upsample(&down, factor);
    }
});
