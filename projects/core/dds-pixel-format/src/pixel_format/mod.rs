/// Layout and flag constants of the pixel format block.
pub mod constants;

/// The raw flag word and its accessors.
pub mod flags;

/// Four-character codes.
pub mod fourcc;

/// Compressed/uncompressed classification.
pub mod compression;

/// The decoded pixel format record.
mod record;

/// Human readable rendering of a decoded record.
mod describe;

/// Decode a pixel format block from bytes.
pub mod decode;

pub use compression::*;
pub use constants::*;
pub use decode::*;
pub use flags::*;
pub use fourcc::*;
pub use record::*;
