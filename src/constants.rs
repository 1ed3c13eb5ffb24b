//! Constants used throughout create-spring-app

/// Spring Initializr endpoint serving zipped projects
pub const DEFAULT_SERVICE_URL: &str = "https://start.spring.io/starter.zip";

/// Directory used when none is given on the command line
pub const DEFAULT_TARGET_DIR: &str = "spring-app";

/// Group id offered by the prompt
pub const DEFAULT_GROUP_ID: &str = "com.example";

/// Initializr project archetype
pub const PROJECT_TYPE: &str = "maven-project";

/// The only source language offered
pub const PROJECT_LANGUAGE: &str = "java";

/// Extension of the downloaded archive
pub const ARCHIVE_SUFFIX: &str = ".zip";

/// STDIN indicator for CLI arguments
pub const STDIN_INDICATOR: &str = "-";

/// Network limits applied to the archive download
pub mod limits {
    /// Total request timeout in seconds
    pub const DEFAULT_TIMEOUT_SECS: u64 = 120;
    pub const CONNECT_TIMEOUT_SECS: u64 = 30;
    /// Maximum accepted archive size in MiB
    pub const DEFAULT_MAX_ARCHIVE_MIB: u64 = 256;
    /// Upper bound on how much of an error body is read for diagnostics
    pub const ERROR_BODY_BYTES: u64 = 16 * 1024;
}

/// Query parameter names understood by the generator service
pub mod params {
    pub const TYPE: &str = "type";
    pub const LANGUAGE: &str = "language";
    pub const BOOT_VERSION: &str = "bootVersion";
    pub const BASE_DIR: &str = "baseDir";
    pub const GROUP_ID: &str = "groupId";
    pub const ARTIFACT_ID: &str = "artifactId";
    pub const JAVA_VERSION: &str = "javaVersion";
    pub const PACKAGING: &str = "packaging";
    pub const DEPENDENCIES: &str = "dependencies";
}

/// Exit codes
pub mod exit_codes {
    pub const FAILURE: i32 = 1;
}

/// Verbosity levels
pub mod verbosity {
    pub const OFF: u8 = 0;
    pub const INFO: u8 = 1;
    pub const DEBUG: u8 = 2;
    pub const TRACE: u8 = 3;
}
