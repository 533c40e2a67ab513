#![doc = include_str!("../README.MD")]
#![no_std]
#[cfg(feature = "std")]
extern crate std;

#[cfg(test)]
pub mod test_prelude;

/// Errors returned when decoding fails.
pub mod error;

/// The pixel format block itself: flags, FourCC and the decoder.
pub mod pixel_format;

/// Locating the pixel format block inside a full DDS file.
pub mod dds;

pub use dds::{
    decode_dds_pixel_format, has_dds_magic, likely_dds, DDS_HEADER_SIZE, DDS_MAGIC,
    DDS_PIXELFORMAT_OFFSET,
};
pub use error::{PixelFormatError, PixelFormatResult};
pub use pixel_format::{
    decode_pixel_format, Compression, DecodedPixelFormat, FourCC, PixelFormat,
    PixelFormatAdvisory, PixelFormatFlags, DDPF_ALPHA, DDPF_ALPHAPIXELS, DDPF_FOURCC,
    DDPF_LUMINANCE, DDPF_RGB, DDPF_YUV, PIXEL_FORMAT_SIZE,
};
