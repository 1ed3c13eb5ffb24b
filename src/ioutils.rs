use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Resolves the directory the project is extracted into.
///
/// Relative paths are taken from the current working directory; `None` means the
/// current working directory itself.
pub fn resolve_target_dir(target_dir: Option<&Path>) -> Result<PathBuf> {
    let base_path = std::env::current_dir()?;
    Ok(match target_dir {
        Some(dir) if dir.is_absolute() => dir.to_path_buf(),
        Some(dir) => base_path.join(dir),
        None => base_path,
    })
}

pub fn create_dir_all<P: AsRef<Path>>(dest_path: P) -> Result<()> {
    let dest_path = dest_path.as_ref();
    std::fs::create_dir_all(dest_path).map_err(Error::IoError)
}

pub fn parse_string_to_json(
    buf: &str,
) -> Result<serde_json::Map<String, serde_json::Value>> {
    if buf.trim().is_empty() {
        return Ok(serde_json::Map::new());
    }
    let value: serde_json::Value = serde_json::from_str(buf)?;

    match value {
        serde_json::Value::Object(map) => Ok(map),
        _ => Ok(serde_json::Map::new()),
    }
}

pub fn read_from(mut reader: impl std::io::Read) -> Result<String> {
    let mut buf = String::new();
    reader.read_to_string(&mut buf).map_err(Error::IoError)?;
    Ok(buf)
}
