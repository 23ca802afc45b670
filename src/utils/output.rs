// src/utils/output.rs
//! Output destinations for the generated document.
//!
//! A file destination is replaced atomically: the text goes to a temporary
//! sibling first and is renamed over the target, so a failed run never leaves
//! a truncated issuer file behind. A symlinked target is resolved first so
//! the link's destination is updated, and an existing file keeps its
//! permissions.

use crate::error::{IssuerError, Result};
use log::{debug, info};
use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Where the rendered document is written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputSink {
    /// Standard output; flushed but never closed
    Stdout,
    /// A file that is created or replaced
    File(PathBuf),
}

impl OutputSink {
    /// Chooses a file sink when a path is configured, stdout otherwise.
    pub fn from_path(path: Option<&Path>) -> Self {
        match path {
            Some(path) => Self::File(path.to_path_buf()),
            None => Self::Stdout,
        }
    }

    /// Writes `contents` to the sink in a single pass.
    pub fn write(&self, contents: &str) -> Result<()> {
        match self {
            Self::Stdout => {
                write_stream(&mut io::stdout().lock(), contents).map_err(IssuerError::Stdout)?;
                info!("Issuer profile written to stdout");
                Ok(())
            }
            Self::File(path) => {
                replace_file(path, contents.as_bytes()).map_err(|source| {
                    IssuerError::OutputUnwritable {
                        path: path.clone(),
                        source,
                    }
                })?;
                info!("Issuer profile written to {}", path.display());
                Ok(())
            }
        }
    }
}

fn write_stream<W: Write>(writer: &mut W, contents: &str) -> io::Result<()> {
    writer.write_all(contents.as_bytes())?;
    writer.flush()
}

/// The file a write to `target` should land in: symlinks are followed, a
/// missing target is used as is.
fn resolve_target(target: &Path) -> io::Result<PathBuf> {
    match fs::canonicalize(target) {
        Ok(resolved) => Ok(resolved),
        Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(target.to_path_buf()),
        Err(err) => Err(err),
    }
}

/// Temporary sibling used while replacing `target`: `dir/.name.tmp`.
fn temp_path_for(target: &Path) -> io::Result<PathBuf> {
    let file_name = target.file_name().ok_or_else(|| {
        io::Error::new(io::ErrorKind::InvalidInput, "output path has no file name")
    })?;
    let mut temp_name = std::ffi::OsString::from(".");
    temp_name.push(file_name);
    temp_name.push(".tmp");
    Ok(target.with_file_name(temp_name))
}

fn replace_file(target: &Path, data: &[u8]) -> io::Result<()> {
    let target = resolve_target(target)?;
    let permissions = fs::metadata(&target).ok().map(|meta| meta.permissions());
    let temp = temp_path_for(&target)?;
    debug!("Writing {} bytes to {}", data.len(), temp.display());

    let written = write_and_sync(&temp, data)
        .and_then(|_| match permissions {
            Some(permissions) => fs::set_permissions(&temp, permissions),
            None => Ok(()),
        })
        .and_then(|_| fs::rename(&temp, &target));
    if written.is_err() {
        // The temp file may not exist if creation itself failed.
        let _ = fs::remove_file(&temp);
    }
    written
}

fn write_and_sync(path: &Path, data: &[u8]) -> io::Result<()> {
    let mut file = File::create(path)?;
    file.write_all(data)?;
    file.sync_all()
}
