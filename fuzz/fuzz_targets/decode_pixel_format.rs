#![no_main]

// Decodes arbitrary bytes at an arbitrary offset and checks the decoded
// fields against a straightforward reading of the same bytes.

use dds_pixel_format::*;
use libfuzzer_sys::{arbitrary, fuzz_target};

#[derive(Clone, Debug, arbitrary::Arbitrary)]
pub struct Input {
    pub offset: u8,
    pub data: Vec<u8>,
}

fn word(data: &[u8], at: usize) -> u32 {
    u32::from_le_bytes([data[at], data[at + 1], data[at + 2], data[at + 3]])
}

fuzz_target!(|input: Input| {
    let offset = input.offset as usize;
    let data = &input.data;

    let decoded = match decode_pixel_format(data, offset) {
        Ok(decoded) => decoded,
        Err(PixelFormatError::Truncated { .. }) => {
            assert!(data.len() < offset + PIXEL_FORMAT_SIZE);
            return;
        }
    };

    assert!(data.len() >= offset + PIXEL_FORMAT_SIZE);
    let format = decoded.pixel_format;
    let flags = word(data, offset + 4);

    assert_eq!(format.size(), word(data, offset));
    assert_eq!(format.flags().bits(), flags);
    assert_eq!(format.four_cc().value(), word(data, offset + 8));
    assert_eq!(format.rgb_bit_count(), word(data, offset + 12));
    assert_eq!(format.red_mask(), word(data, offset + 16));
    assert_eq!(format.green_mask(), word(data, offset + 20));
    assert_eq!(format.blue_mask(), word(data, offset + 24));
    assert_eq!(format.alpha_mask(), word(data, offset + 28));

    assert_eq!(format.has_fourcc(), flags & DDPF_FOURCC == DDPF_FOURCC);
    assert_eq!(format.has_rgb(), flags & DDPF_RGB == DDPF_RGB);
    assert_eq!(
        format.four_cc_text().map(|c| c as u32 as u8),
        format.four_cc().to_bytes()
    );
    assert_eq!(decoded.advisory.is_none(), format.size() == 32);
    assert_eq!(decode_pixel_format(data, offset), Ok(decoded));
});
