use super::{compression::Compression, flags::PixelFormatFlags, fourcc::FourCC};

/// A decoded `DDS_PIXELFORMAT` block.
///
/// All raw fields are kept exactly as read. The `has_*` flags and the
/// [`Compression`] state are derived once, at decode time, from the flag word.
///
/// The bit count and colour masks only carry meaning when [`has_rgb`] is set
/// (the alpha mask also when [`has_alpha_pixels`] or [`has_alpha_only`] is);
/// otherwise they hold whatever bytes the file contained.
///
/// [`has_rgb`]: PixelFormat::has_rgb
/// [`has_alpha_pixels`]: PixelFormat::has_alpha_pixels
/// [`has_alpha_only`]: PixelFormat::has_alpha_only
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PixelFormat {
    size: u32,
    flags: PixelFormatFlags,
    four_cc: FourCC,
    four_cc_text: [char; 4],
    rgb_bit_count: u32,
    red_mask: u32,
    green_mask: u32,
    blue_mask: u32,
    alpha_mask: u32,
    has_alpha_pixels: bool,
    has_alpha_only: bool,
    has_fourcc: bool,
    has_rgb: bool,
    has_yuv: bool,
    has_luminance: bool,
    compression: Compression,
}

/// The eight words of a pixel format block, in file order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct RawPixelFormat {
    pub size: u32,
    pub flags: u32,
    pub four_cc: u32,
    pub rgb_bit_count: u32,
    pub red_mask: u32,
    pub green_mask: u32,
    pub blue_mask: u32,
    pub alpha_mask: u32,
}

impl PixelFormat {
    pub(crate) fn from_raw(raw: RawPixelFormat) -> Self {
        let flags = PixelFormatFlags::from_bits(raw.flags);
        let four_cc = FourCC::new(raw.four_cc);

        Self {
            size: raw.size,
            flags,
            four_cc,
            four_cc_text: four_cc.to_chars(),
            rgb_bit_count: raw.rgb_bit_count,
            red_mask: raw.red_mask,
            green_mask: raw.green_mask,
            blue_mask: raw.blue_mask,
            alpha_mask: raw.alpha_mask,
            has_alpha_pixels: flags.alpha_pixels(),
            has_alpha_only: flags.alpha(),
            has_fourcc: flags.fourcc(),
            has_rgb: flags.rgb(),
            has_yuv: flags.yuv(),
            has_luminance: flags.luminance(),
            compression: Compression::from_flags(flags),
        }
    }

    /// Declared size of the block; 32 in well formed files.
    #[inline]
    pub fn size(&self) -> u32 {
        self.size
    }

    #[inline]
    pub fn flags(&self) -> PixelFormatFlags {
        self.flags
    }

    #[inline]
    pub fn four_cc(&self) -> FourCC {
        self.four_cc
    }

    /// The FourCC rendered as text. Always present, only meaningful
    /// when [`has_fourcc`](Self::has_fourcc) is set.
    #[inline]
    pub fn four_cc_text(&self) -> [char; 4] {
        self.four_cc_text
    }

    #[inline]
    pub fn rgb_bit_count(&self) -> u32 {
        self.rgb_bit_count
    }

    /// Red (or luminance, or Y) mask.
    #[inline]
    pub fn red_mask(&self) -> u32 {
        self.red_mask
    }

    /// Green (or U) mask.
    #[inline]
    pub fn green_mask(&self) -> u32 {
        self.green_mask
    }

    /// Blue (or V) mask.
    #[inline]
    pub fn blue_mask(&self) -> u32 {
        self.blue_mask
    }

    #[inline]
    pub fn alpha_mask(&self) -> u32 {
        self.alpha_mask
    }

    #[inline]
    pub fn has_alpha_pixels(&self) -> bool {
        self.has_alpha_pixels
    }

    #[inline]
    pub fn has_alpha_only(&self) -> bool {
        self.has_alpha_only
    }

    #[inline]
    pub fn has_fourcc(&self) -> bool {
        self.has_fourcc
    }

    #[inline]
    pub fn has_rgb(&self) -> bool {
        self.has_rgb
    }

    #[inline]
    pub fn has_yuv(&self) -> bool {
        self.has_yuv
    }

    #[inline]
    pub fn has_luminance(&self) -> bool {
        self.has_luminance
    }

    #[inline]
    pub fn compression(&self) -> Compression {
        self.compression
    }

    /// Whether the declared size matches the fixed layout.
    #[inline]
    pub fn has_expected_size(&self) -> bool {
        self.size == super::constants::PIXEL_FORMAT_SIZE as u32
    }
}
