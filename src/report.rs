//! Progress reporting for generation runs.
//!
//! The generator never prints by itself; it hands every state change to a
//! [`Reporter`]. The CLI uses [`ConsoleReporter`], headless callers can use
//! [`LogReporter`] or their own implementation.

use crate::{
    error::GenerationError,
    generator::{GenerationState, ProjectSummary, Stage},
};
use console::style;
use std::path::Path;
use url::Url;

/// A state change of the generation pipeline with its context.
#[derive(Debug)]
pub enum Progress<'a> {
    Building,
    Fetching { url: &'a Url },
    Extracting { target: &'a Path },
    CleaningUp { archive: &'a Path },
    Done { summary: &'a ProjectSummary },
    Failed { error: &'a GenerationError },
}

impl Progress<'_> {
    pub fn state(&self) -> GenerationState {
        match self {
            Progress::Building => GenerationState::Building,
            Progress::Fetching { .. } => GenerationState::Fetching,
            Progress::Extracting { .. } => GenerationState::Extracting,
            Progress::CleaningUp { .. } => GenerationState::CleaningUp,
            Progress::Done { .. } => GenerationState::Done,
            Progress::Failed { error } => GenerationState::Failed(error.stage),
        }
    }
}

/// Receives the progress of a generation run.
pub trait Reporter {
    fn report(&self, progress: &Progress<'_>);
}

impl<T: Reporter + ?Sized> Reporter for &T {
    fn report(&self, progress: &Progress<'_>) {
        (**self).report(progress)
    }
}

/// Prints staged, styled messages to stdout.
#[derive(Debug, Default)]
pub struct ConsoleReporter;

impl Reporter for ConsoleReporter {
    fn report(&self, progress: &Progress<'_>) {
        match progress {
            Progress::Fetching { .. } => {
                println!("{}", style("\nDownloading project...").blue());
            }
            Progress::Extracting { target } => {
                println!(
                    "{}",
                    style(format!("Extracting project to {}...", target.display())).blue()
                );
            }
            Progress::Done { summary } => {
                println!(
                    "{}",
                    style(format!(
                        "\nProject \"{}\" created successfully in {}",
                        summary.name(),
                        summary.directory().display()
                    ))
                    .green()
                );
                println!("\n{}", style(summary).green());
            }
            Progress::Failed { error } if error.stage == Stage::Extracting => {
                eprintln!("{}", style("Error extracting project.").red());
            }
            other => log::debug!("{:?}", other.state()),
        }
    }
}

/// Sends progress to the `log` facade only.
#[derive(Debug, Default)]
pub struct LogReporter;

impl Reporter for LogReporter {
    fn report(&self, progress: &Progress<'_>) {
        match progress {
            Progress::Building => log::info!("Building request"),
            Progress::Fetching { url } => log::info!("Downloading '{url}'"),
            Progress::Extracting { target } => {
                log::info!("Extracting into '{}'", target.display())
            }
            Progress::CleaningUp { archive } => {
                log::info!("Removing '{}'", archive.display())
            }
            Progress::Done { summary } => log::info!(
                "Project '{}' generated in '{}'",
                summary.name(),
                summary.directory().display()
            ),
            Progress::Failed { error } => log::error!("{error}"),
        }
    }
}
