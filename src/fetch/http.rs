use crate::{
    config::GeneratorConfig,
    constants::limits,
    error::{Error, Result},
    fetch::interface::ArchiveFetcher,
};
use reqwest::{blocking::Client, StatusCode};
use serde::Deserialize;
use std::fs::{self, File, OpenOptions};
use std::io::{BufWriter, ErrorKind, Read, Write};
use std::path::Path;
use url::Url;

const USER_AGENT: &str = concat!("create-spring-app/", env!("CARGO_PKG_VERSION"));
const CHUNK_SIZE: usize = 64 * 1024;

/// Error payload returned by Spring Initializr.
#[derive(Debug, Deserialize)]
struct ServiceError {
    message: Option<String>,
    error: Option<String>,
}

/// Fetcher downloading archives over HTTP(S).
pub struct HttpFetcher {
    client: Client,
    max_archive_bytes: u64,
}

impl HttpFetcher {
    /// Creates a new HttpFetcher honouring the configured timeouts and size limit.
    pub fn new(config: &GeneratorConfig) -> Result<Self> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .build()?;
        Ok(Self { client, max_archive_bytes: config.max_archive_bytes })
    }

    /// Copies the response body into `writer`, keeping at most one chunk in memory.
    fn stream_body(&self, body: &mut impl Read, writer: &mut impl Write) -> Result<u64> {
        let mut buf = vec![0u8; CHUNK_SIZE];
        let mut written: u64 = 0;
        loop {
            let read = match body.read(&mut buf) {
                Ok(0) => break,
                Ok(n) => n,
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(Error::DownloadInterrupted(e)),
            };
            written += read as u64;
            if written > self.max_archive_bytes {
                return Err(Error::ArchiveTooLarge { limit: self.max_archive_bytes });
            }
            writer.write_all(&buf[..read])?;
        }
        Ok(written)
    }

    /// Writes the body to `dest`; the file is flushed and synced before returning.
    fn write_archive(&self, body: &mut impl Read, dest: &Path) -> Result<u64> {
        let file =
            OpenOptions::new().write(true).create(true).truncate(true).open(dest)?;
        let mut writer = BufWriter::new(file);
        let written = self.stream_body(body, &mut writer)?;
        let file: File = writer.into_inner().map_err(|e| e.into_error())?;
        file.sync_all()?;
        Ok(written)
    }
}

impl ArchiveFetcher for HttpFetcher {
    fn fetch(&self, url: &Url, dest: &Path) -> Result<u64> {
        log::debug!("Requesting '{url}'");

        let mut response = self.client.get(url.clone()).send()?;
        let status = response.status();
        if !status.is_success() {
            return Err(status_error(status, url, response));
        }

        if let Some(length) = response.content_length() {
            if length > self.max_archive_bytes {
                return Err(Error::ArchiveTooLarge { limit: self.max_archive_bytes });
            }
        }

        match self.write_archive(&mut response, dest) {
            Ok(written) => {
                log::debug!("Downloaded {written} bytes to '{}'", dest.display());
                Ok(written)
            }
            Err(e) => {
                if let Err(remove_err) = fs::remove_file(dest) {
                    log::debug!(
                        "Could not remove partial archive '{}': {remove_err}",
                        dest.display()
                    );
                }
                Err(e)
            }
        }
    }
}

fn status_error(status: StatusCode, url: &Url, response: impl Read) -> Error {
    if status != StatusCode::BAD_REQUEST {
        return Error::HttpStatus { status: status.as_u16(), url: url.to_string() };
    }

    let mut body = String::new();
    if let Err(e) = response.take(limits::ERROR_BODY_BYTES).read_to_string(&mut body) {
        log::debug!("Could not read error response body: {e}");
    }
    Error::InvalidParameters { message: service_message(&body, status) }
}

/// Picks the most helpful description out of an error response body.
fn service_message(body: &str, status: StatusCode) -> String {
    let parsed = serde_json::from_str::<ServiceError>(body).ok();
    match parsed.and_then(|e| e.message.or(e.error)) {
        Some(message) if !message.trim().is_empty() => message.trim().to_string(),
        _ if !body.trim().is_empty() && !body.trim_start().starts_with('{') => {
            body.trim().to_string()
        }
        _ => status.canonical_reason().unwrap_or("Bad Request").to_string(),
    }
}
