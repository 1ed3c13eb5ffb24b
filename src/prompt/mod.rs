//! Collecting a [`ProjectSpec`] from the user.
//!
//! The module is structured in layers:
//! - `interface`: Pure abstract interfaces independent of any UI library
//! - `dialoguer`: Concrete implementation using the dialoguer library
//!
//! Questions already answered through [`Answers`] are not asked again.

use crate::{
    constants::DEFAULT_GROUP_ID,
    error::{Error, Result},
    ioutils::parse_string_to_json,
    project::{BootVersion, Choice, JavaVersion, Packaging, ProjectSpec, DEPENDENCY_CATALOG},
    prompt::dialoguer::DialoguerPrompter,
};
use serde::Deserialize;

pub mod dialoguer;
pub mod interface;

pub use interface::*;

/// Predefined answers, usually passed as JSON on the command line.
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Answers {
    #[serde(default, alias = "projectName")]
    pub name: Option<String>,
    #[serde(default, alias = "groupId")]
    pub group_id: Option<String>,
    #[serde(default, alias = "artifactId")]
    pub artifact_id: Option<String>,
    #[serde(default, alias = "javaVersion")]
    pub java_version: Option<JavaVersion>,
    #[serde(default, alias = "bootVersion")]
    pub boot_version: Option<BootVersion>,
    #[serde(default)]
    pub packaging: Option<Packaging>,
    #[serde(default)]
    pub dependencies: Option<Vec<String>>,
}

impl Answers {
    /// Parses answers from a JSON object. Anything but an object yields no answers.
    pub fn from_json(buf: &str) -> Result<Self> {
        let map = parse_string_to_json(buf)?;
        Ok(serde_json::from_value(serde_json::Value::Object(map))?)
    }
}

/// Convenience function to create the default prompt provider
pub fn get_prompt_provider() -> impl PromptProvider {
    DialoguerPrompter::new()
}

/// Asks the project questions in order and assembles the spec.
pub struct SpecCollector<'a, P: PromptProvider> {
    provider: &'a P,
    non_interactive: bool,
}

impl<'a, P: PromptProvider> SpecCollector<'a, P> {
    /// With `non_interactive`, unanswered questions take their default.
    pub fn new(provider: &'a P, non_interactive: bool) -> Self {
        Self { provider, non_interactive }
    }

    pub fn collect(&self, default_name: &str, answers: Answers) -> Result<ProjectSpec> {
        let name = match answers.name {
            Some(name) => name,
            None => self.text("What will your project be called?", default_name)?,
        };
        let group_id = match answers.group_id {
            Some(group_id) => group_id,
            None => self.text("Group ID", DEFAULT_GROUP_ID)?,
        };
        let artifact_id = match answers.artifact_id {
            Some(artifact_id) => artifact_id,
            None => self.text("Artifact ID", &name)?,
        };
        let java_version = match answers.java_version {
            Some(java_version) => java_version,
            None => self.choice::<JavaVersion>("Select Java version")?,
        };
        let boot_version = match answers.boot_version {
            Some(boot_version) => boot_version,
            None => self.choice::<BootVersion>("Select Spring Boot version")?,
        };
        let packaging = match answers.packaging {
            Some(packaging) => packaging,
            None => self.choice::<Packaging>("Select packaging format")?,
        };
        let dependencies = match answers.dependencies {
            Some(dependencies) => dependencies,
            None => self.dependencies("Select dependencies")?,
        };

        Ok(ProjectSpec::builder(name)
            .group_id(group_id)
            .artifact_id(artifact_id)
            .java_version(java_version)
            .boot_version(boot_version)
            .packaging(packaging)
            .dependencies(dependencies)
            .build())
    }

    fn text(&self, prompt: &str, default: &str) -> Result<String> {
        if self.non_interactive {
            return Ok(default.to_string());
        }
        self.provider.prompt_text(&TextPromptConfig {
            prompt: prompt.to_string(),
            default: Some(default.to_string()),
        })
    }

    fn choice<C: Choice>(&self, prompt: &str) -> Result<C> {
        let default = C::default_choice();
        if self.non_interactive {
            return Ok(default);
        }
        let default_index = C::ALL.iter().position(|c| c.value() == default.value());
        let index = self.provider.prompt_single_choice(&SingleChoiceConfig {
            prompt: prompt.to_string(),
            choices: C::ALL.iter().map(|c| c.label().to_string()).collect(),
            default_index,
        })?;
        C::ALL.get(index).copied().ok_or_else(|| out_of_range(C::FIELD, index))
    }

    fn dependencies(&self, prompt: &str) -> Result<Vec<String>> {
        if self.non_interactive {
            return Ok(Vec::new());
        }
        let indices = self.provider.prompt_multiple_choice(&MultipleChoiceConfig {
            prompt: prompt.to_string(),
            choices: DEPENDENCY_CATALOG.iter().map(|(_, label)| label.to_string()).collect(),
            defaults: vec![false; DEPENDENCY_CATALOG.len()],
        })?;
        indices
            .into_iter()
            .map(|index| {
                DEPENDENCY_CATALOG
                    .get(index)
                    .map(|(value, _)| value.to_string())
                    .ok_or_else(|| out_of_range("dependencies", index))
            })
            .collect()
    }
}

fn out_of_range(field: &'static str, index: usize) -> Error {
    Error::UnsupportedChoice {
        field,
        value: format!("#{index}"),
        expected: "an offered choice".to_string(),
    }
}
