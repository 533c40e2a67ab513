/// DDS file layout constants.
pub mod constants;

/// Determine if a file is a DDS file.
pub mod likely_dds;

/// Decode the pixel format block of a whole DDS file.
pub mod decode_dds;

pub use constants::*;
pub use decode_dds::*;
pub use likely_dds::*;
