//! The downloaded archive: where it lives and how it is unpacked.

use crate::{
    constants::ARCHIVE_SUFFIX,
    error::{Error, Result},
    ioutils::create_dir_all,
};
use std::fs::File;
use std::io::{BufReader, ErrorKind};
use std::path::Path;
use tempfile::TempPath;
use zip::ZipArchive;

/// Temporary file the archive is downloaded into.
///
/// Named after the project with a random suffix so concurrent runs do not clash.
/// The file is removed when the handle is dropped.
#[derive(Debug)]
pub struct ArchiveHandle {
    path: TempPath,
}

impl ArchiveHandle {
    /// Reserves `<tmp>/<project_name>-XXXXXX.zip`.
    pub fn create(project_name: &str) -> Result<Self> {
        let prefix = format!("{}-", sanitize_file_stem(project_name));
        let file = tempfile::Builder::new()
            .prefix(&prefix)
            .suffix(ARCHIVE_SUFFIX)
            .tempfile()?;
        Ok(Self { path: file.into_temp_path() })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Deletes the archive, reporting failures instead of ignoring them.
    pub fn remove(self) -> Result<()> {
        self.path.close().map_err(Error::IoError)
    }
}

fn sanitize_file_stem(name: &str) -> String {
    let stem: String = name
        .chars()
        .map(|c| if std::path::is_separator(c) || c == '\0' { '_' } else { c })
        .collect();
    if stem.trim().is_empty() {
        "project".to_string()
    } else {
        stem
    }
}

/// Unpacks every entry of the zip at `archive_path` below `dest_dir`.
///
/// `dest_dir` and any missing parents are created first. Existing files with the
/// same name are overwritten.
///
/// # Returns
/// * `Result<usize>` - Number of entries written
pub fn extract<P: AsRef<Path>, Q: AsRef<Path>>(archive_path: P, dest_dir: Q) -> Result<usize> {
    let archive_path = archive_path.as_ref();
    let dest_dir = dest_dir.as_ref();

    create_dir_all(dest_dir)?;

    let file = File::open(archive_path)?;
    let mut archive = ZipArchive::new(BufReader::new(file))?;

    for index in 0..archive.len() {
        let mut entry = archive.by_index(index)?;
        let relative = entry
            .enclosed_name()
            .ok_or_else(|| Error::UnsafeEntry { entry: entry.name().to_string() })?;
        let target = dest_dir.join(&relative);

        if entry.is_dir() {
            create_dir_all(&target)?;
            log::trace!("Created directory '{}'", target.display());
            continue;
        }

        if let Some(parent) = target.parent() {
            create_dir_all(parent)?;
        }
        let mut out = File::create(&target)?;
        std::io::copy(&mut entry, &mut out).map_err(|e| match e.kind() {
            ErrorKind::InvalidData | ErrorKind::UnexpectedEof => {
                Error::ExtractionError(format!("'{}': {e}", relative.display()))
            }
            _ => Error::IoError(e),
        })?;

        // Keeps wrapper scripts such as mvnw executable. The owner keeps write
        // access so a later run can overwrite the file.
        #[cfg(unix)]
        if let Some(mode) = entry.unix_mode() {
            use std::os::unix::fs::PermissionsExt;
            std::fs::set_permissions(&target, std::fs::Permissions::from_mode(mode | 0o200))?;
        }

        log::trace!("Wrote '{}'", target.display());
    }

    log::debug!(
        "Extracted {} entries from '{}' into '{}'",
        archive.len(),
        archive_path.display(),
        dest_dir.display()
    );
    Ok(archive.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Cursor, Write};
    use zip::write::SimpleFileOptions;

    fn write_zip(path: &Path, entries: &[(&str, Option<&str>)]) {
        let mut writer = zip::ZipWriter::new(Cursor::new(Vec::new()));
        for (name, content) in entries {
            match content {
                Some(content) => {
                    writer.start_file(*name, SimpleFileOptions::default()).unwrap();
                    writer.write_all(content.as_bytes()).unwrap();
                }
                None => writer.add_directory(*name, SimpleFileOptions::default()).unwrap(),
            }
        }
        std::fs::write(path, writer.finish().unwrap().into_inner()).unwrap();
    }

    #[test]
    fn extracts_entries_preserving_layout() {
        let tmp = tempfile::tempdir().unwrap();
        let archive = tmp.path().join("demo.zip");
        write_zip(
            &archive,
            &[
                ("demo/", None),
                ("demo/pom.xml", Some("<project/>")),
                ("demo/src/main/java/App.java", Some("class App {}")),
            ],
        );

        let dest = tmp.path().join("out");
        let count = extract(&archive, &dest).unwrap();

        assert_eq!(count, 3);
        assert!(dest.join("demo").is_dir());
        assert_eq!(std::fs::read_to_string(dest.join("demo/pom.xml")).unwrap(), "<project/>");
        assert!(dest.join("demo/src/main/java/App.java").is_file());
    }

    #[test]
    fn creates_missing_destination_parents() {
        let tmp = tempfile::tempdir().unwrap();
        let archive = tmp.path().join("demo.zip");
        write_zip(&archive, &[("README.md", Some("hello"))]);

        let dest = tmp.path().join("a/b/c");
        assert!(!dest.exists());
        extract(&archive, &dest).unwrap();
        assert_eq!(std::fs::read_to_string(dest.join("README.md")).unwrap(), "hello");
    }

    #[test]
    fn overwrites_existing_files() {
        let tmp = tempfile::tempdir().unwrap();
        let archive = tmp.path().join("demo.zip");
        write_zip(&archive, &[("README.md", Some("new"))]);

        let dest = tmp.path().join("out");
        std::fs::create_dir_all(&dest).unwrap();
        std::fs::write(dest.join("README.md"), "old").unwrap();
        std::fs::write(dest.join("keep.txt"), "untouched").unwrap();

        extract(&archive, &dest).unwrap();
        assert_eq!(std::fs::read_to_string(dest.join("README.md")).unwrap(), "new");
        assert_eq!(std::fs::read_to_string(dest.join("keep.txt")).unwrap(), "untouched");
    }

    #[cfg(unix)]
    #[test]
    fn read_only_entries_can_be_extracted_again() {
        use std::os::unix::fs::PermissionsExt;

        let tmp = tempfile::tempdir().unwrap();
        let write_archive = |path: &Path, content: &str| {
            let mut writer = zip::ZipWriter::new(Cursor::new(Vec::new()));
            let options = SimpleFileOptions::default().unix_permissions(0o444);
            writer.start_file("demo/README.md", options).unwrap();
            writer.write_all(content.as_bytes()).unwrap();
            std::fs::write(path, writer.finish().unwrap().into_inner()).unwrap();
        };
        let first = tmp.path().join("first.zip");
        let second = tmp.path().join("second.zip");
        write_archive(&first, "first");
        write_archive(&second, "second");

        let dest = tmp.path().join("out");
        extract(&first, &dest).unwrap();
        let readme = dest.join("demo/README.md");
        let mode = std::fs::metadata(&readme).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o644);

        extract(&second, &dest).unwrap();
        assert_eq!(std::fs::read_to_string(&readme).unwrap(), "second");
    }

    #[cfg(unix)]
    #[test]
    fn keeps_executable_bits() {
        use std::os::unix::fs::PermissionsExt;

        let tmp = tempfile::tempdir().unwrap();
        let archive = tmp.path().join("demo.zip");
        let mut writer = zip::ZipWriter::new(Cursor::new(Vec::new()));
        let options = SimpleFileOptions::default().unix_permissions(0o755);
        writer.start_file("demo/mvnw", options).unwrap();
        writer.write_all(b"#!/bin/sh\n").unwrap();
        std::fs::write(&archive, writer.finish().unwrap().into_inner()).unwrap();

        let dest = tmp.path().join("out");
        extract(&archive, &dest).unwrap();
        let mode = std::fs::metadata(dest.join("demo/mvnw")).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o755);
    }

    #[test]
    fn rejects_entries_escaping_destination() {
        let tmp = tempfile::tempdir().unwrap();
        let archive = tmp.path().join("evil.zip");
        write_zip(&archive, &[("../escape.txt", Some("nope"))]);

        let dest = tmp.path().join("out");
        let err = extract(&archive, &dest).unwrap_err();
        assert!(matches!(err, Error::UnsafeEntry { .. }));
        assert!(!tmp.path().join("escape.txt").exists());
    }

    #[test]
    fn rejects_corrupt_archive() {
        let tmp = tempfile::tempdir().unwrap();
        let archive = tmp.path().join("broken.zip");
        std::fs::write(&archive, b"this is not a zip archive").unwrap();

        let err = extract(&archive, tmp.path().join("out")).unwrap_err();
        assert!(matches!(err, Error::ExtractionError(_)));
    }

    #[test]
    fn archive_handle_is_named_after_project() {
        let handle = ArchiveHandle::create("demo").unwrap();
        let file_name = handle.path().file_name().unwrap().to_string_lossy().to_string();
        assert!(file_name.starts_with("demo-"));
        assert!(file_name.ends_with(".zip"));
        assert!(handle.path().exists());

        let path = handle.path().to_path_buf();
        handle.remove().unwrap();
        assert!(!path.exists());
    }

    #[test]
    fn archive_handle_sanitizes_separators() {
        let handle = ArchiveHandle::create("a/b").unwrap();
        let file_name = handle.path().file_name().unwrap().to_string_lossy().to_string();
        assert!(file_name.starts_with("a_b-"));
        assert_eq!(handle.path().parent(), Some(std::env::temp_dir().as_path()));
    }
}
