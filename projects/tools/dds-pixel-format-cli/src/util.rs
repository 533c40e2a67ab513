use crate::error::InspectError;
use lightweight_mmap::handles::*;
use lightweight_mmap::mmap::*;
use std::fs;
use std::path::*;

/// Recursively collects every file below `dir`.
///
/// Directories or entries that cannot be read are skipped, so a single
/// unreadable folder does not stop a scan.
pub fn find_all_files(dir: &Path, entries: &mut Vec<PathBuf>) -> std::io::Result<()> {
    let dir_entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) => {
            log::debug!("Skipping unreadable directory {}: {e}", dir.display());
            return Ok(());
        }
    };

    for entry in dir_entries {
        let entry = match entry {
            Ok(entry) => entry,
            Err(_) => continue, // Skip problematic entries, e.g. those without access.
        };

        // `DirEntry::file_type` does not follow symlinks; symlinks are skipped.
        let file_type = match entry.file_type() {
            Ok(file_type) => file_type,
            Err(_) => continue,
        };

        let path = entry.path();
        if file_type.is_dir() {
            find_all_files(&path, entries)?;
        } else if file_type.is_file() {
            entries.push(path);
        } else {
            log::debug!("Skipping non-regular entry {}", path.display());
        }
    }
    Ok(())
}

/// Collects the files an input path refers to: the path itself for a file,
/// or everything below it for a directory.
pub fn collect_input_files(input: &Path) -> std::io::Result<Vec<PathBuf>> {
    if input.is_dir() {
        let mut entries = Vec::new();
        find_all_files(input, &mut entries)?;
        entries.sort();
        Ok(entries)
    } else {
        Ok(vec![input.to_path_buf()])
    }
}

/// Memory-maps `path` read-only and hands its contents to `f`.
///
/// Empty files are not mapped; `f` receives an empty slice.
pub fn with_mapped_file<R>(path: &Path, f: impl FnOnce(&[u8]) -> R) -> Result<R, InspectError> {
    let path_str = path
        .to_str()
        .ok_or_else(|| InspectError::NonUtf8Path(path.to_path_buf()))?;

    let handle = ReadOnlyFileHandle::open(path_str)?;
    let size = handle.size()? as usize;
    if size == 0 {
        return Ok(f(&[]));
    }

    let mapping = ReadOnlyMmap::new(&handle, 0, size)?;
    Ok(f(mapping.as_slice()))
}

/// Canonicalizes an input path given on the command line; it must exist.
pub fn canonicalize_cli_path(value: &str) -> Result<PathBuf, String> {
    fs::canonicalize(Path::new(value)).map_err(|e| format!("Invalid path: {e}"))
}

/// Parses a decimal or `0x`-prefixed hexadecimal byte offset.
pub fn parse_offset(value: &str) -> Result<usize, String> {
    let parsed = match value.strip_prefix("0x").or_else(|| value.strip_prefix("0X")) {
        Some(hex) => usize::from_str_radix(hex, 16),
        None => value.parse::<usize>(),
    };
    parsed.map_err(|e| format!("Invalid offset '{value}': {e}"))
}
