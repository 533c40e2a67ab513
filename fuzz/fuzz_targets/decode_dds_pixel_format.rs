#![no_main]

// Whole-file entry point: must never panic, and must agree with decoding the
// block directly whenever the magic is present.

use dds_pixel_format::*;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    match decode_dds_pixel_format(data) {
        Ok(None) => assert!(!has_dds_magic(data)),
        result => {
            assert!(has_dds_magic(data));
            assert_eq!(
                result.map(Option::unwrap),
                decode_pixel_format(data, DDS_PIXELFORMAT_OFFSET)
            );
        }
    }
});
