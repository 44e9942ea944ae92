// src/writer.rs

//! Streams the color list to its output file.
//!
//! Entries are written one per line through a `BufWriter` rather than joined
//! into a single string first; the bytes on disk are the same either way.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use anyhow::Context;
use log::{debug, info};

use crate::color::{color_entries, ColorEntry};
use crate::config::OutputConfig;

const LINE_SEPARATOR: &[u8] = b"\n";
const WRITE_BUFFER_CAPACITY: usize = 1 << 20;

/// What a successful `write_color_list` produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriteSummary {
    pub path: PathBuf,
    pub lines: u64,
    pub bytes: u64,
}

/// Writes `entries` to `out`, separated by a single `\n`.
///
/// The last entry is only followed by a newline when `trailing_newline` is
/// set. Returns the number of lines written.
pub fn write_entries<W, I>(out: &mut W, entries: I, trailing_newline: bool) -> io::Result<u64>
where
    W: Write,
    I: IntoIterator<Item = ColorEntry>,
{
    let mut lines = 0u64;
    for entry in entries {
        if lines > 0 {
            out.write_all(LINE_SEPARATOR)?;
        }
        write!(out, "{}", entry)?;
        lines += 1;
    }
    if trailing_newline && lines > 0 {
        out.write_all(LINE_SEPARATOR)?;
    }
    Ok(lines)
}

/// Creates (or truncates) the configured output file and fills it with every
/// color entry from `#000000` to `#FFFFFF`.
///
/// Any I/O failure is returned immediately; the file may then hold a partial
/// list and must not be treated as valid output.
pub fn write_color_list(config: &OutputConfig) -> anyhow::Result<WriteSummary> {
    let path = &config.path;
    info!("Writing color list to {}", path.display());

    let file = File::create(path)
        .with_context(|| format!("Failed to create output file {}", path.display()))?;
    debug!("Opened {} with a {} byte write buffer", path.display(), WRITE_BUFFER_CAPACITY);
    let mut writer = BufWriter::with_capacity(WRITE_BUFFER_CAPACITY, file);

    let lines = write_entries(&mut writer, color_entries(), config.trailing_newline)
        .with_context(|| format!("Failed to write color list to {}", path.display()))?;

    let file = writer
        .into_inner()
        .map_err(|e| e.into_error())
        .with_context(|| format!("Failed to flush {}", path.display()))?;
    file.sync_all()
        .with_context(|| format!("Failed to sync {}", path.display()))?;
    let bytes = file
        .metadata()
        .with_context(|| format!("Failed to stat {}", path.display()))?
        .len();

    debug!("Wrote {} lines ({} bytes) to {}", lines, bytes, path.display());
    Ok(WriteSummary {
        path: path.clone(),
        lines,
        bytes,
    })
}
