//! Classification of a pixel format as compressed or uncompressed.

use super::flags::PixelFormatFlags;
use core::fmt;

/// Whether the payload described by a pixel format is compressed.
///
/// Files that set neither [`DDPF_FOURCC`] nor [`DDPF_RGB`] (for example
/// alpha-only, luminance or YUV surfaces) are [`Compression::Undetermined`];
/// they are never assumed to be uncompressed.
///
/// [`DDPF_FOURCC`]: super::constants::DDPF_FOURCC
/// [`DDPF_RGB`]: super::constants::DDPF_RGB
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Compression {
    /// [`DDPF_FOURCC`] is set; payload format is named by the FourCC.
    ///
    /// [`DDPF_FOURCC`]: super::constants::DDPF_FOURCC
    Compressed = 0,
    /// [`DDPF_RGB`] is set and [`DDPF_FOURCC`] is not; payload is described by the masks.
    ///
    /// [`DDPF_FOURCC`]: super::constants::DDPF_FOURCC
    /// [`DDPF_RGB`]: super::constants::DDPF_RGB
    Uncompressed = 1,
    /// Neither flag is set.
    Undetermined = 2,
}

impl Compression {
    /// Classifies a flag word. FourCC takes precedence over RGB.
    #[inline]
    pub fn from_flags(flags: PixelFormatFlags) -> Self {
        if flags.fourcc() {
            Self::Compressed
        } else if flags.rgb() {
            Self::Uncompressed
        } else {
            Self::Undetermined
        }
    }

    /// `Some(true)` for compressed, `Some(false)` for uncompressed.
    #[inline]
    pub fn is_compressed(self) -> Option<bool> {
        match self {
            Self::Compressed => Some(true),
            Self::Uncompressed => Some(false),
            Self::Undetermined => None,
        }
    }
}

impl fmt::Display for Compression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Compressed => "compressed",
            Self::Uncompressed => "uncompressed",
            Self::Undetermined => "undetermined",
        })
    }
}
