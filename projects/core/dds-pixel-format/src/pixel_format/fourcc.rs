//! Four-character codes naming compressed or custom formats.

use core::fmt;

/// A four-character code, packed little-endian into a `u32`.
///
/// The first character lives in the lowest byte, so `'DXT1'` is stored as
/// `0x31545844`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(transparent)]
pub struct FourCC(u32);

impl FourCC {
    pub const DXT1: Self = Self::from_bytes(*b"DXT1");
    pub const DXT2: Self = Self::from_bytes(*b"DXT2");
    pub const DXT3: Self = Self::from_bytes(*b"DXT3");
    pub const DXT4: Self = Self::from_bytes(*b"DXT4");
    pub const DXT5: Self = Self::from_bytes(*b"DXT5");
    /// A `DDS_HEADER_DXT10` extension follows the main header.
    pub const DX10: Self = Self::from_bytes(*b"DX10");
    /// a.k.a. BC4
    pub const ATI1: Self = Self::from_bytes(*b"ATI1");
    /// a.k.a. BC5
    pub const ATI2: Self = Self::from_bytes(*b"ATI2");
    pub const BC4U: Self = Self::from_bytes(*b"BC4U");
    pub const BC4S: Self = Self::from_bytes(*b"BC4S");
    pub const BC5U: Self = Self::from_bytes(*b"BC5U");
    pub const BC5S: Self = Self::from_bytes(*b"BC5S");
    pub const RGBG: Self = Self::from_bytes(*b"RGBG");
    pub const GRGB: Self = Self::from_bytes(*b"GRGB");
    pub const UYVY: Self = Self::from_bytes(*b"UYVY");
    pub const YUY2: Self = Self::from_bytes(*b"YUY2");

    /// Wraps a packed code as read from the file.
    #[inline(always)]
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Packs four bytes in file order.
    #[inline(always)]
    pub const fn from_bytes(bytes: [u8; 4]) -> Self {
        Self(u32::from_le_bytes(bytes))
    }

    /// The packed value.
    #[inline(always)]
    pub const fn value(self) -> u32 {
        self.0
    }

    /// The four bytes in file order; byte `i` is `(value >> (8 * i)) & 0xFF`.
    #[inline(always)]
    pub const fn to_bytes(self) -> [u8; 4] {
        self.0.to_le_bytes()
    }

    /// Renders the code as four characters.
    ///
    /// Each byte maps to the character with the same code point (ISO-8859-1),
    /// so this never fails, ASCII tags come out as themselves and the bytes
    /// can be recovered from the result. Only meaningful when the
    /// [`DDPF_FOURCC`] flag is set.
    ///
    /// [`DDPF_FOURCC`]: super::constants::DDPF_FOURCC
    pub fn to_chars(self) -> [char; 4] {
        self.to_bytes().map(char::from)
    }

    /// Whether all four bytes are printable ASCII, as real tags are.
    pub fn is_printable_ascii(self) -> bool {
        self.to_bytes().iter().all(|b| b.is_ascii_graphic() || *b == b' ')
    }
}

impl From<u32> for FourCC {
    fn from(value: u32) -> Self {
        Self::new(value)
    }
}

impl From<[u8; 4]> for FourCC {
    fn from(bytes: [u8; 4]) -> Self {
        Self::from_bytes(bytes)
    }
}

// Non-printable bytes are escaped so a code always renders on one line.
impl fmt::Display for FourCC {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in self.to_bytes() {
            if byte.is_ascii_graphic() || byte == b' ' {
                write!(f, "{}", char::from(byte))?;
            } else {
                write!(f, "\\x{byte:02X}")?;
            }
        }
        Ok(())
    }
}

impl fmt::Debug for FourCC {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FourCC({self} = {:#010X})", self.0)
    }
}
