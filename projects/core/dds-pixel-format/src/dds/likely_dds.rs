use super::constants::*;

/// Whether `data` starts with the `'DDS '` magic.
#[inline(always)]
pub fn has_dds_magic(data: &[u8]) -> bool {
    match data.first_chunk::<4>() {
        Some(magic) => u32::from_le_bytes(*magic) == DDS_MAGIC,
        None => false,
    }
}

/// Determines if the given data likely represents a DDS texture.
/// This checks the magic and that a full header is present.
#[inline(always)]
pub fn likely_dds(data: &[u8]) -> bool {
    data.len() >= DDS_HEADER_SIZE && has_dds_magic(data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_prelude::*;
    use core::iter::repeat_n;

    #[test]
    fn likely_dds_matches_valid_header_and_sufficient_length() {
        let data = b"DDS ".iter().copied().chain(repeat_n(0, 124)).collect::<Vec<u8>>();
        assert!(likely_dds(&data));
    }

    #[test]
    fn likely_dds_rejects_valid_header_but_insufficient_length() {
        let data = b"DDS ".iter().copied().chain(repeat_n(0, 123)).collect::<Vec<u8>>();
        assert!(!likely_dds(&data));
        assert!(has_dds_magic(&data));
    }

    #[rstest]
    #[case(&[])]
    #[case(b"DDS")]
    #[case(b"dds ")]
    #[case(&[0u8; 128])]
    fn rejects_missing_magic(#[case] data: &[u8]) {
        assert!(!has_dds_magic(data));
        assert!(!likely_dds(data));
    }
}
