use crate::error::InspectError;
use crate::util::*;
use argh::FromArgs;
use dds_pixel_format::{
    decode_dds_pixel_format, decode_pixel_format, DecodedPixelFormat, PixelFormatError,
    DDS_PIXELFORMAT_OFFSET, PIXEL_FORMAT_SIZE,
};
use std::path::{Path, PathBuf};
use std::time::Instant;

#[cfg(feature = "multithreaded")]
use rayon::iter::{IntoParallelRefIterator, ParallelIterator};

#[derive(FromArgs, Debug)]
/// Report the pixel format of DDS files
#[argh(subcommand, name = "inspect")]
pub struct InspectCmd {
    /// input file or directory path
    #[argh(option, from_str_fn(crate::util::canonicalize_cli_path))]
    pub input: PathBuf,

    /// offset of the pixel format block, decimal or 0x-prefixed hex; skips the DDS magic check [default: 0x4C after checking the magic]
    #[argh(option, from_str_fn(crate::util::parse_offset))]
    pub offset: Option<usize>,

    /// treat advisories (e.g. an unexpected declared size) as failures
    #[argh(switch)]
    pub strict: bool,
}

/// Options shared by every file of a run.
#[derive(Debug, Clone, Copy, Default)]
pub struct InspectOptions {
    pub offset: Option<usize>,
    pub strict: bool,
}

pub fn handle_inspect_command(cmd: InspectCmd) -> Result<(), InspectError> {
    let options = InspectOptions {
        offset: cmd.offset,
        strict: cmd.strict,
    };

    let entries = collect_input_files(&cmd.input)?;
    log::info!("Found {} files to inspect", entries.len());

    let start = Instant::now();

    #[cfg(feature = "multithreaded")]
    let failed = entries
        .par_iter()
        .filter(|path| !report_file(path, options))
        .count();
    #[cfg(not(feature = "multithreaded"))]
    let failed = entries
        .iter()
        .filter(|path| !report_file(path, options))
        .count();

    log::info!("Inspection completed in {:.2?}", start.elapsed());

    if failed > 0 {
        return Err(InspectError::Failures {
            failed,
            total: entries.len(),
        });
    }
    Ok(())
}

/// Inspects a single file and prints its report.
/// Returns `false` if the file counts as a failure.
fn report_file(path: &Path, options: InspectOptions) -> bool {
    match with_mapped_file(path, |data| inspect_bytes(data, options)) {
        Ok(Ok(Some(decoded))) => {
            if let Some(advisory) = decoded.advisory {
                log::warn!("{}: {advisory}", path.display());
            }
            println!("{}\n{}", path.display(), decoded.pixel_format);
            true
        }
        Ok(Ok(None)) => {
            log::debug!("Skipping {}: not a DDS file", path.display());
            true
        }
        Ok(Err(e)) | Err(e) => {
            log::error!("{}: {e}", path.display());
            false
        }
    }
}

/// Decodes the pixel format of a file's contents according to `options`.
///
/// # Return
///
/// `Ok(None)` when no offset was given and the data lacks the DDS magic.
///
/// # Errors
///
/// Empty input is always [`PixelFormatError::Truncated`], even without an
/// explicit offset.
pub fn inspect_bytes(
    data: &[u8],
    options: InspectOptions,
) -> Result<Option<DecodedPixelFormat>, InspectError> {
    if data.is_empty() {
        return Err(PixelFormatError::Truncated {
            offset: options.offset.unwrap_or(DDS_PIXELFORMAT_OFFSET),
            required: PIXEL_FORMAT_SIZE,
            actual: 0,
        }
        .into());
    }

    let decoded = match options.offset {
        Some(offset) => Some(decode_pixel_format(data, offset)?),
        None => decode_dds_pixel_format(data)?,
    };

    if options.strict {
        if let Some(advisory) = decoded.and_then(|d| d.advisory) {
            return Err(InspectError::Advisory(advisory));
        }
    }

    Ok(decoded)
}
