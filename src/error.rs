use crate::constants::exit_codes;
use crate::generator::Stage;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}.")]
    IoError(#[from] std::io::Error),

    #[error("Failed to reach the project generator. Original error: {0}")]
    NetworkError(#[from] reqwest::Error),

    /// The generator answered 400: the submitted parameters were rejected.
    #[error("The project generator rejected the request: {message}. Check the group and artifact ids, and that the selected dependencies support the chosen Spring Boot version.")]
    InvalidParameters { message: String },

    #[error("Connection lost while downloading the project archive. Original error: {0}")]
    DownloadInterrupted(std::io::Error),

    #[error("The project generator answered '{url}' with HTTP {status}.")]
    HttpStatus { status: u16, url: String },

    #[error("Archive exceeds the maximum allowed size of {limit} bytes.")]
    ArchiveTooLarge { limit: u64 },

    #[error("Failed to extract archive. Original error: {0}")]
    ExtractionError(String),

    #[error("Archive entry '{entry}' would be written outside of the target directory.")]
    UnsafeEntry { entry: String },

    #[error("Invalid service URL '{url}'. Original error: {e}")]
    InvalidUrl { url: String, e: url::ParseError },

    #[error("Failed to parse answers. Original error: {0}")]
    AnswersParseError(#[from] serde_json::Error),

    #[error("Unsupported value '{value}' for {field}. Expected one of: {expected}.")]
    UnsupportedChoice { field: &'static str, value: String, expected: String },

    #[error(transparent)]
    Generation(#[from] GenerationError),
}

impl From<dialoguer::Error> for Error {
    fn from(e: dialoguer::Error) -> Self {
        match e {
            dialoguer::Error::IO(e) => Error::IoError(e),
        }
    }
}

impl From<zip::result::ZipError> for Error {
    fn from(e: zip::result::ZipError) -> Self {
        match e {
            zip::result::ZipError::Io(e) => Error::IoError(e),
            other => Error::ExtractionError(other.to_string()),
        }
    }
}

/// Failure of a generation run, tagged with the stage that failed.
#[derive(Error, Debug)]
#[error("Project generation failed while {stage}. {source}")]
pub struct GenerationError {
    pub stage: Stage,
    #[source]
    pub source: Box<Error>,
}

impl GenerationError {
    pub fn new(stage: Stage, source: Error) -> Self {
        Self { stage, source: Box::new(source) }
    }

    /// Whether the generator refused the request parameters (HTTP 400).
    pub fn is_invalid_parameters(&self) -> bool {
        matches!(*self.source, Error::InvalidParameters { .. })
    }
}

/// Convenience type alias for Results with Error as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: Error) {
    eprintln!("{}", console::style(err).red());
    std::process::exit(exit_codes::FAILURE);
}
