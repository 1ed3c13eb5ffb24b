use crate::config::GeneratorConfig;
use crate::constants::{limits, verbosity, DEFAULT_SERVICE_URL, DEFAULT_TARGET_DIR};
use clap::Parser;
use log::LevelFilter;
use std::path::PathBuf;
use std::time::Duration;

/// CLI arguments for create-spring-app.
#[derive(Parser, Debug, Clone)]
#[command(
    name = "create-spring-app",
    author,
    version,
    about = "CLI tool to generate Spring Boot projects using Spring Initializr",
    long_about = None
)]
pub struct Args {
    /// Name of the directory to create.
    #[arg(value_name = "DIR", default_value = DEFAULT_TARGET_DIR)]
    pub dir: PathBuf,

    /// Increase logging verbosity (`-v`, `-vv`, `-vvv`).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Predefined answers as JSON string or `-` to read from stdin.
    #[arg(short, long)]
    pub answers: Option<String>,

    /// Use defaults for every question not covered by `--answers`.
    #[arg(long = "non-interactive")]
    pub non_interactive: bool,

    /// Project generator endpoint returning the zipped project.
    #[arg(long = "service-url", value_name = "URL", default_value = DEFAULT_SERVICE_URL)]
    pub service_url: String,

    /// Abort the download after this many seconds.
    #[arg(long, value_name = "SECS", default_value_t = limits::DEFAULT_TIMEOUT_SECS)]
    pub timeout: u64,

    /// Reject archives larger than this many MiB.
    #[arg(
        long = "max-archive-size",
        value_name = "MIB",
        default_value_t = limits::DEFAULT_MAX_ARCHIVE_MIB
    )]
    pub max_archive_size: u64,
}

impl Args {
    /// Project name offered by the first prompt: the last component of `DIR`.
    pub fn default_project_name(&self) -> String {
        self.dir
            .file_name()
            .map(|name| name.to_string_lossy().to_string())
            .unwrap_or_else(|| DEFAULT_TARGET_DIR.to_string())
    }

    pub fn generator_config(&self) -> GeneratorConfig {
        GeneratorConfig::default()
            .with_service_url(self.service_url.clone())
            .with_timeout(Duration::from_secs(self.timeout))
            .with_max_archive_bytes(self.max_archive_size.saturating_mul(1024 * 1024))
    }
}

/// Parse command line arguments.
pub fn parse_cli() -> Args {
    Args::parse()
}

/// Map `-v` counts to the appropriate log level.
pub fn get_log_level_from_verbose(verbose_count: u8) -> LevelFilter {
    match verbose_count {
        verbosity::OFF => LevelFilter::Error,
        verbosity::INFO => LevelFilter::Info,
        verbosity::DEBUG => LevelFilter::Debug,
        verbosity::TRACE.. => LevelFilter::Trace,
    }
}
