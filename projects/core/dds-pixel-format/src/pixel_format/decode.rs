use super::{
    constants::*,
    record::{PixelFormat, RawPixelFormat},
};
use crate::error::{PixelFormatError, PixelFormatResult};
use core::fmt;
use endian_writer::{EndianReader, LittleEndianReader};

/// A non-fatal anomaly found while decoding.
///
/// Decoding still succeeds; the caller decides whether to log, ignore or
/// reject the file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PixelFormatAdvisory {
    /// The declared size field is not 32. The block is still read with its
    /// fixed 32-byte layout.
    SizeMismatch { declared: u32 },
}

impl fmt::Display for PixelFormatAdvisory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SizeMismatch { declared } => write!(
                f,
                "Pixel format declares a size of {declared} bytes, expected {PIXEL_FORMAT_SIZE}"
            ),
        }
    }
}

/// The outcome of a successful decode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DecodedPixelFormat {
    pub pixel_format: PixelFormat,
    /// Set when the block was readable but looked off.
    pub advisory: Option<PixelFormatAdvisory>,
}

/// Decodes the 32-byte pixel format block starting at `offset` in `data`.
///
/// # Errors
///
/// [`PixelFormatError::Truncated`] when fewer than [`PIXEL_FORMAT_SIZE`] bytes
/// are available at `offset`. Nothing is read in that case.
///
/// # Remarks
///
/// Any bit pattern in the flags, FourCC or masks is accepted. A declared size
/// other than 32 is reported through [`DecodedPixelFormat::advisory`].
pub fn decode_pixel_format(data: &[u8], offset: usize) -> PixelFormatResult<DecodedPixelFormat> {
    let block = offset
        .checked_add(PIXEL_FORMAT_SIZE)
        .and_then(|end| data.get(offset..end))
        .ok_or(PixelFormatError::Truncated {
            offset,
            required: PIXEL_FORMAT_SIZE,
            actual: data.len().saturating_sub(offset),
        })?;

    // SAFETY: `block` is exactly PIXEL_FORMAT_SIZE (32) bytes long, and the last
    // field (ALPHA_MASK_OFFSET = 0x1C) + 4 ends at byte 32.
    let mut reader = unsafe { LittleEndianReader::new(block.as_ptr()) };
    let raw = unsafe {
        RawPixelFormat {
            size: reader.read_u32_at(SIZE_OFFSET as isize),
            flags: reader.read_u32_at(FLAGS_OFFSET as isize),
            four_cc: reader.read_u32_at(FOURCC_OFFSET as isize),
            rgb_bit_count: reader.read_u32_at(RGB_BIT_COUNT_OFFSET as isize),
            red_mask: reader.read_u32_at(RED_MASK_OFFSET as isize),
            green_mask: reader.read_u32_at(GREEN_MASK_OFFSET as isize),
            blue_mask: reader.read_u32_at(BLUE_MASK_OFFSET as isize),
            alpha_mask: reader.read_u32_at(ALPHA_MASK_OFFSET as isize),
        }
    };

    let pixel_format = PixelFormat::from_raw(raw);
    let advisory = (!pixel_format.has_expected_size()).then_some(
        PixelFormatAdvisory::SizeMismatch {
            declared: pixel_format.size(),
        },
    );

    Ok(DecodedPixelFormat {
        pixel_format,
        advisory,
    })
}
