/// Handles argument parsing.
pub mod cli;

/// Defines custom error types.
pub mod error;

/// Constants shared across modules.
pub mod constants;

/// Runtime settings for the generator service.
pub mod config;

/// The project description collected from the user.
pub mod project;

/// User input and interaction handling.
pub mod prompt;

/// Builds the generator-service URL for a project.
pub mod request;

/// Downloads project archives.
pub mod fetch;

/// Temporary archive handling and extraction.
pub mod archive;

/// Orchestrates a generation run.
pub mod generator;

/// Progress reporting.
pub mod report;

/// A set of helpers for working with the file system.
pub mod ioutils;
