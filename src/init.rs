use crate::error::{Error, Result};
use log::{debug, info};
use std::fs::OpenOptions;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

/// Size of one page of the database file.
pub const PAGE_SIZE: usize = 4096;

/// Number of pages the placeholder file holds.
pub const PAGE_COUNT: usize = 8;

pub const DB_FILE_SIZE_BYTES: usize = PAGE_SIZE * PAGE_COUNT;

const FILL_BYTE: u8 = 0;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InitStats {
    pub path: PathBuf,
    pub bytes_written: usize,
    pub pages: usize,
    pub elapsed: Duration,
}

/// What `initialize` would produce for `path`, without touching the filesystem.
pub fn plan(path: &Path) -> InitStats {
    InitStats {
        path: path.to_path_buf(),
        bytes_written: DB_FILE_SIZE_BYTES,
        pages: PAGE_COUNT,
        elapsed: Duration::ZERO,
    }
}

/// Creates (or truncates) `path` and fills it with `DB_FILE_SIZE_BYTES` zero bytes.
///
/// A failed write leaves whatever was already flushed on disk; nothing is cleaned up.
pub fn initialize(path: &Path) -> Result<InitStats> {
    let start = Instant::now();
    let with_path = |e| Error::io_with_path(path.to_path_buf(), e);

    debug!("opening '{}' for writing", path.display());
    let mut file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(path)
        .map_err(with_path)?;

    let buf = [FILL_BYTE; DB_FILE_SIZE_BYTES];
    file.write_all(&buf).map_err(with_path)?;
    debug!("wrote {} bytes to '{}'", buf.len(), path.display());

    // Character devices and pipes reject fsync with EINVAL; the write itself went through.
    match file.sync_all() {
        Ok(()) => {}
        Err(e) if e.kind() == ErrorKind::InvalidInput => {
            debug!("'{}' does not support sync: {}", path.display(), e);
        }
        Err(e) => return Err(with_path(e)),
    }
    drop(file);

    let elapsed = start.elapsed();
    info!(
        "initialized '{}' ({} pages of {} bytes in {:.2?})",
        path.display(),
        PAGE_COUNT,
        PAGE_SIZE,
        elapsed
    );

    Ok(InitStats {
        elapsed,
        ..plan(path)
    })
}
