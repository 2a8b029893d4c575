#![no_main]

// Arbitrary input must never panic the decoder, and anything it accepts must re-encode to the
// same bytes.

use libfuzzer_sys::fuzz_target;
use texel_bitmap_file_formats_api::xbmp;

fuzz_target!(|data: &[u8]| {
    let Ok(bitmap) = xbmp::decode_view(data) else {
        return;
    };

    // Header-only queries stay total on malformed layouts.
    let _ = bitmap.face_count();
    let _ = bitmap.frame_count();
    let _ = bitmap.full_mip_chain_count();

    // Accepted layouts address every mip of the last frame and face.
    let frame = bitmap.frame_count() - 1;
    let face = bitmap.face_count() - 1;
    for mip in 0..bitmap.mip_count() {
        assert_eq!(bitmap.mip(mip, face, frame).len(), bitmap.mip_size(mip));
    }

    let encoded = xbmp::encode_to_vec(&bitmap);
    assert_eq!(encoded.as_slice(), &data[..encoded.len()]);
});
