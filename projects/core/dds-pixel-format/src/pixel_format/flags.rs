//! Typed view over the `dwFlags` word of the pixel format block.

use super::constants::*;
use bitfield::bitfield;

bitfield! {
    /// The flag word of a pixel format block.
    ///
    /// Bit layout (as defined by `DDS_PIXELFORMAT`):
    /// - Bit 0: [`DDPF_ALPHAPIXELS`]
    /// - Bit 1: [`DDPF_ALPHA`]
    /// - Bit 2: [`DDPF_FOURCC`]
    /// - Bit 6: [`DDPF_RGB`]
    /// - Bit 9: [`DDPF_YUV`]
    /// - Bit 17: [`DDPF_LUMINANCE`]
    ///
    /// Flags are independent of each other; any combination, including bits
    /// not listed above, is preserved as read.
    #[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct PixelFormatFlags(u32);
    impl Debug;
    u32;

    /// Alpha channel present alongside another component.
    pub alpha_pixels, _: 0;
    /// Alpha-only surface.
    pub alpha, _: 1;
    /// Format is named by the FourCC.
    pub fourcc, _: 2;
    /// RGB data described by bit masks.
    pub rgb, _: 6;
    /// YUV data.
    pub yuv, _: 9;
    /// Single channel luminance data.
    pub luminance, _: 17;
}

impl PixelFormatFlags {
    /// Every flag this crate gives a name to.
    pub const KNOWN_BITS: u32 =
        DDPF_ALPHAPIXELS | DDPF_ALPHA | DDPF_FOURCC | DDPF_RGB | DDPF_YUV | DDPF_LUMINANCE;

    /// Wraps a raw flag word.
    #[inline(always)]
    pub const fn from_bits(bits: u32) -> Self {
        Self(bits)
    }

    /// Returns the raw flag word, unknown bits included.
    #[inline(always)]
    pub const fn bits(self) -> u32 {
        self.0
    }

    /// Whether every bit of `flag` is set.
    #[inline(always)]
    pub const fn contains(self, flag: u32) -> bool {
        (self.0 & flag) == flag
    }

    /// Bits set in the word that have no defined meaning.
    #[inline(always)]
    pub const fn unknown_bits(self) -> u32 {
        self.0 & !Self::KNOWN_BITS
    }
}

impl From<u32> for PixelFormatFlags {
    fn from(bits: u32) -> Self {
        Self::from_bits(bits)
    }
}
