//! Capability-based file helpers for Harbour's command-line inputs and
//! outputs, built on `cap-std` and `camino`.
#![forbid(unsafe_code)]

use std::io;

use camino::{Utf8Component, Utf8Path, Utf8PathBuf};
use cap_std::{ambient_authority, fs_utf8};

/// Read a UTF-8 text file.
///
/// # Errors
///
/// Returns the underlying I/O error when the file cannot be opened or is not
/// valid UTF-8.
pub fn read_utf8(path: &Utf8Path) -> io::Result<String> {
    let (dir, relative) = anchor(path)?;
    dir.read_to_string(&relative)
}

/// Report whether `path` names an existing regular file.
///
/// A missing path is `Ok(false)`.
///
/// # Errors
///
/// Returns I/O errors other than "not found".
pub fn is_file(path: &Utf8Path) -> io::Result<bool> {
    let (dir, relative) = anchor(path)?;
    match dir.metadata(&relative) {
        Ok(meta) => Ok(meta.is_file()),
        Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(false),
        Err(err) => Err(err),
    }
}

/// Report whether anything exists at `path`.
///
/// # Errors
///
/// Returns I/O errors other than "not found".
pub fn exists(path: &Utf8Path) -> io::Result<bool> {
    let (dir, relative) = anchor(path)?;
    match dir.metadata(&relative) {
        Ok(_) => Ok(true),
        Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(false),
        Err(err) => Err(err),
    }
}

/// Write `contents` to `path`, creating missing parent directories.
///
/// # Errors
///
/// Returns the underlying I/O error when a directory cannot be created or
/// the file cannot be written.
pub fn write_utf8(path: &Utf8Path, contents: &str) -> io::Result<()> {
    let (dir, relative) = anchor(path)?;
    if let Some(parent) = relative.parent()
        && !parent.as_str().is_empty()
    {
        dir.create_dir_all(parent)?;
    }
    dir.write(&relative, contents)
}

/// Split `path` into an ambient directory for its root and the path
/// relative to that root.
///
/// Absolute paths are anchored at the filesystem root (or drive prefix on
/// Windows); relative paths at the current directory.
fn anchor(path: &Utf8Path) -> io::Result<(fs_utf8::Dir, Utf8PathBuf)> {
    let mut components = path.components();
    let (base, relative) = match components.next() {
        Some(Utf8Component::Prefix(prefix)) => {
            let base = Utf8PathBuf::from(format!(
                "{}{}",
                prefix.as_str(),
                std::path::MAIN_SEPARATOR
            ));
            let relative: Utf8PathBuf = components
                .filter(|component| !matches!(component, Utf8Component::RootDir))
                .collect();
            (base, relative)
        }
        Some(Utf8Component::RootDir) => (
            Utf8PathBuf::from(std::path::MAIN_SEPARATOR.to_string()),
            components.collect(),
        ),
        _ => (Utf8PathBuf::from("."), path.to_path_buf()),
    };
    if relative.as_str().is_empty() {
        return Err(io::Error::other(format!("{path} does not name a file")));
    }
    let dir = fs_utf8::Dir::open_ambient_dir(&base, ambient_authority())?;
    Ok((dir, relative))
}
