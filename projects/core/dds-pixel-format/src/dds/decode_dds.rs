use super::{constants::*, likely_dds::has_dds_magic};
use crate::error::PixelFormatResult;
use crate::pixel_format::{decode_pixel_format, DecodedPixelFormat};

/// Decodes the pixel format block of a complete DDS file.
///
/// # Return
///
/// `Ok(None)` if `data` does not start with the DDS magic.
/// Otherwise, the block at [`DDS_PIXELFORMAT_OFFSET`] decoded with
/// [`decode_pixel_format`].
///
/// # Errors
///
/// [`PixelFormatError::Truncated`] if the file ends before the block does.
///
/// [`PixelFormatError::Truncated`]: crate::error::PixelFormatError::Truncated
#[inline]
pub fn decode_dds_pixel_format(data: &[u8]) -> PixelFormatResult<Option<DecodedPixelFormat>> {
    if !has_dds_magic(data) {
        return Ok(None);
    }

    decode_pixel_format(data, DDS_PIXELFORMAT_OFFSET).map(Some)
}
