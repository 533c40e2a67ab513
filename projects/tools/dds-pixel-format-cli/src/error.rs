use dds_pixel_format::{PixelFormatAdvisory, PixelFormatError};
use lightweight_mmap::{handles::HandleOpenError, mmap::MmapError};
use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum InspectError {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error("Failed to open file handle: {0}")]
    FileHandle(#[from] HandleOpenError),
    #[error("Failed to create memory mapping: {0}")]
    MemoryMapping(#[from] MmapError),
    #[error(transparent)]
    PixelFormat(#[from] PixelFormatError),
    /// Raised for advisories when running with `--strict`.
    #[error("{0}")]
    Advisory(PixelFormatAdvisory),
    #[error("Path is not valid UTF-8: {}", .0.display())]
    NonUtf8Path(std::path::PathBuf),
    #[error("{failed} of {total} files could not be inspected")]
    Failures { failed: usize, total: usize },
}
