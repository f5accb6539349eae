use std::io::{self, Write};
use std::path::Path;

use tempfile::NamedTempFile;
use tokio::fs;
use tracing::debug;

use crate::transform::TextEncoding;

/// Create `path` as an empty file, along with any missing parent
/// directories, when it does not already exist.
///
/// Existing files are left untouched, never truncated.
pub async fn ensure_file(path: &Path) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        // A bare filename yields an empty parent, which must not be created
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).await?;
        }
    }

    if !path.exists() {
        debug!("creating empty file: {}", path.display());
        fs::write(path, b"").await?;
    }

    Ok(())
}

/// Read the file's entire content as text, decoded per `encoding`.
pub async fn read_file(path: &Path, encoding: TextEncoding) -> io::Result<String> {
    debug!("reading file: {}", path.display());
    let bytes = fs::read(path).await?;

    match encoding {
        TextEncoding::Utf8 => String::from_utf8(bytes)
            .map_err(|err| io::Error::new(io::ErrorKind::InvalidData, err)),
        TextEncoding::Utf8Lossy => Ok(match String::from_utf8(bytes) {
            Ok(text) => text,
            Err(err) => String::from_utf8_lossy(&err.into_bytes()).into_owned(),
        }),
    }
}

/// Replace the file's content in full.
///
/// The new content goes to a temporary file in the target's directory and
/// is renamed over `path`, so the target never holds partially written
/// content. Permissions of the existing file survive the rename. The file
/// must already exist (see [`ensure_file`]).
pub async fn write_file(path: &Path, content: &str) -> io::Result<()> {
    debug!("writing {} bytes to {}", content.len(), path.display());

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let permissions = fs::metadata(path).await?.permissions();

    let mut temp_file = NamedTempFile::new_in(dir)?;
    temp_file.write_all(content.as_bytes())?;
    temp_file.as_file().set_permissions(permissions)?;
    temp_file.persist(path).map_err(|err| err.error)?;

    Ok(())
}
