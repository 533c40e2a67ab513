//! Common test imports and utilities for pixel format tests
//!
//! This module provides a common prelude for test modules to avoid
//! duplicate imports across the codebase.
#![allow(unused_imports)]

// External crate declaration for no_std compatibility
extern crate alloc;

// Re-export commonly used alloc types for tests
pub use alloc::{
    format,
    string::{String, ToString},
    vec,
    vec::Vec,
};

// External crates commonly used in tests
pub use rstest::rstest;

use crate::dds::constants::*;
use crate::pixel_format::constants::PIXEL_FORMAT_SIZE;
use endian_writer::{EndianWriter, LittleEndianWriter};

/// Builds a raw pixel format block.
/// `masks` are red, green, blue, alpha.
pub fn pixel_format_bytes(
    size: u32,
    flags: u32,
    four_cc: u32,
    rgb_bit_count: u32,
    masks: [u32; 4],
) -> [u8; PIXEL_FORMAT_SIZE] {
    let mut data = [0u8; PIXEL_FORMAT_SIZE];
    let mut writer = unsafe { LittleEndianWriter::new(data.as_mut_ptr()) };

    unsafe {
        writer.write_u32_at(size, 0x00);
        writer.write_u32_at(flags, 0x04);
        writer.write_u32_at(four_cc, 0x08);
        writer.write_u32_at(rgb_bit_count, 0x0C);
        writer.write_u32_at(masks[0], 0x10);
        writer.write_u32_at(masks[1], 0x14);
        writer.write_u32_at(masks[2], 0x18);
        writer.write_u32_at(masks[3], 0x1C);
    }

    data
}

/// Builds a header-only DDS file around the given pixel format block.
pub fn dds_file_with(pixel_format: &[u8; PIXEL_FORMAT_SIZE]) -> Vec<u8> {
    let mut data = vec![0u8; DDS_HEADER_SIZE];
    let mut writer = unsafe { LittleEndianWriter::new(data.as_mut_ptr()) };

    unsafe {
        writer.write_u32_at(DDS_MAGIC, 0);
        // dwSize of DDS_HEADER
        writer.write_u32_at(124, 4);
    }

    data[DDS_PIXELFORMAT_OFFSET..DDS_PIXELFORMAT_OFFSET + PIXEL_FORMAT_SIZE]
        .copy_from_slice(pixel_format);
    data
}
