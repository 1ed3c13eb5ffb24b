//! Orchestration of a single project generation run.

use crate::{
    archive::{extract, ArchiveHandle},
    config::GeneratorConfig,
    error::{Error, GenerationError, Result},
    fetch::{ArchiveFetcher, HttpFetcher},
    ioutils::resolve_target_dir,
    project::ProjectSpec,
    report::{ConsoleReporter, Progress, Reporter},
    request::GenerationRequest,
};
use std::path::Path;

pub mod state;
pub mod summary;

pub use state::{GenerationState, Stage};
pub use summary::ProjectSummary;

/// Runs request building, download, extraction and clean-up in order.
pub struct Generator<F: ArchiveFetcher, R: Reporter> {
    fetcher: F,
    reporter: R,
    service_url: String,
}

impl Generator<HttpFetcher, ConsoleReporter> {
    /// Generator talking to the configured service and printing to the console.
    pub fn from_config(config: &GeneratorConfig) -> Result<Self> {
        Ok(Self::new(HttpFetcher::new(config)?, ConsoleReporter, &config.service_url))
    }
}

impl<F: ArchiveFetcher, R: Reporter> Generator<F, R> {
    pub fn new(fetcher: F, reporter: R, service_url: impl Into<String>) -> Self {
        Self { fetcher, reporter, service_url: service_url.into() }
    }

    /// Generates `spec` into `target_dir`, or the working directory when `None`.
    ///
    /// Each step only runs when the previous one succeeded. Failing to remove the
    /// temporary archive is logged and does not fail the run.
    pub fn run(
        &self,
        spec: &ProjectSpec,
        target_dir: Option<&Path>,
    ) -> std::result::Result<ProjectSummary, GenerationError> {
        let mut state = GenerationState::Idle;

        advance(&mut state, Stage::Building.into());
        self.reporter.report(&Progress::Building);
        let request = GenerationRequest::build(spec, &self.service_url)
            .map_err(|e| self.fail(state, e))?;
        log::debug!("Request URL: {request}");

        advance(&mut state, Stage::Fetching.into());
        let archive = ArchiveHandle::create(spec.name()).map_err(|e| self.fail(state, e))?;
        self.reporter.report(&Progress::Fetching { url: request.url() });
        self.fetcher
            .fetch(request.url(), archive.path())
            .map_err(|e| self.fail(state, e))?;

        advance(&mut state, Stage::Extracting.into());
        let target = resolve_target_dir(target_dir).map_err(|e| self.fail(state, e))?;
        self.reporter.report(&Progress::Extracting { target: &target });
        extract(archive.path(), &target).map_err(|e| self.fail(state, e))?;

        advance(&mut state, Stage::CleaningUp.into());
        let archive_path = archive.path().to_path_buf();
        self.reporter.report(&Progress::CleaningUp { archive: &archive_path });
        if let Err(e) = archive.remove() {
            log::warn!(
                "Failed to remove temporary archive '{}': {e}",
                archive_path.display()
            );
        }

        advance(&mut state, GenerationState::Done);
        let summary = ProjectSummary::new(spec, target);
        self.reporter.report(&Progress::Done { summary: &summary });
        Ok(summary)
    }

    /// Reports a failure of the step `state` is in.
    fn fail(&self, state: GenerationState, error: Error) -> GenerationError {
        let stage = state.stage().unwrap_or(Stage::Building);
        debug_assert!(state.can_transition_to(&GenerationState::Failed(stage)));
        let error = GenerationError::new(stage, error);
        self.reporter.report(&Progress::Failed { error: &error });
        error
    }
}

fn advance(state: &mut GenerationState, next: GenerationState) {
    debug_assert!(state.can_transition_to(&next), "{state:?} -> {next:?}");
    log::trace!("Generation state: {state:?} -> {next:?}");
    *state = next;
}
