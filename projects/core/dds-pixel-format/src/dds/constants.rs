//! DDS file layout constants

/// Magic header for DDS files ('DDS ').
pub const DDS_MAGIC: u32 = u32::from_le_bytes(*b"DDS ");

/// Size of the magic plus the regular `DDS_HEADER`.
pub const DDS_HEADER_SIZE: usize = 0x80;

/// Offset of the `DDS_PIXELFORMAT` block from the start of the file (magic included).
pub const DDS_PIXELFORMAT_OFFSET: usize = 0x4C;
