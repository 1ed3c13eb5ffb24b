use crate::error::Result;
use std::path::Path;
use url::Url;

/// Trait for downloading a project archive.
pub trait ArchiveFetcher {
    /// Downloads `url` into `dest`.
    ///
    /// Returns once the archive is completely written to disk.
    ///
    /// # Returns
    /// * `Result<u64>` - Number of bytes written
    fn fetch(&self, url: &Url, dest: &Path) -> Result<u64>;
}

