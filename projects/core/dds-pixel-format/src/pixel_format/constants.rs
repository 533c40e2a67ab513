//! Wire constants of the `DDS_PIXELFORMAT` structure.

/// Size of the pixel format block, in bytes.
/// This is also the only valid value of its declared size field.
pub const PIXEL_FORMAT_SIZE: usize = 32;

// Field offsets, relative to the start of the block.
pub(crate) const SIZE_OFFSET: usize = 0x00;
pub(crate) const FLAGS_OFFSET: usize = 0x04;
pub(crate) const FOURCC_OFFSET: usize = 0x08;
pub(crate) const RGB_BIT_COUNT_OFFSET: usize = 0x0C;
pub(crate) const RED_MASK_OFFSET: usize = 0x10;
pub(crate) const GREEN_MASK_OFFSET: usize = 0x14;
pub(crate) const BLUE_MASK_OFFSET: usize = 0x18;
pub(crate) const ALPHA_MASK_OFFSET: usize = 0x1C;

/// Texture contains alpha data alongside another component.
pub const DDPF_ALPHAPIXELS: u32 = 0x00001;
/// Older files: alpha-only surface.
pub const DDPF_ALPHA: u32 = 0x00002;
/// Texture contains compressed (or custom) data named by the FourCC.
pub const DDPF_FOURCC: u32 = 0x00004;
/// Texture contains uncompressed RGB data described by the masks.
pub const DDPF_RGB: u32 = 0x00040;
/// Older files: YUV surface.
pub const DDPF_YUV: u32 = 0x00200;
/// Older files: single channel luminance surface.
pub const DDPF_LUMINANCE: u32 = 0x20000;
