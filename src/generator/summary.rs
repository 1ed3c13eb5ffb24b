use crate::project::{Packaging, ProjectSpec};
use std::fmt::Display;
use std::path::{Path, PathBuf};

/// What a successful run produced, ready for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectSummary {
    name: String,
    directory: PathBuf,
    project_root: PathBuf,
    next_steps: Vec<String>,
}

impl ProjectSummary {
    /// `directory` is the resolved extraction target. The generator nests the
    /// project under a folder named after it, which becomes the project root when
    /// present.
    pub fn new(spec: &ProjectSpec, directory: PathBuf) -> Self {
        let nested = directory.join(spec.name());
        let project_root = if nested.is_dir() { nested } else { directory.clone() };

        let mut next_steps = vec![
            format!("Navigate to your project directory: cd {}", display_path(&project_root)),
            "Add any additional dependencies or configurations as needed.".to_string(),
            "Run your project with: ./mvnw spring-boot:run".to_string(),
        ];
        if spec.packaging() == Packaging::War {
            next_steps.push("Build the deployable WAR with: ./mvnw package".to_string());
        }

        Self { name: spec.name().to_string(), directory, project_root, next_steps }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }

    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    pub fn next_steps(&self) -> &[String] {
        &self.next_steps
    }
}

/// Shows paths below the working directory relative to it.
fn display_path(path: &Path) -> String {
    std::env::current_dir()
        .ok()
        .and_then(|cwd| path.strip_prefix(cwd).ok().map(Path::to_path_buf))
        .filter(|relative| !relative.as_os_str().is_empty())
        .unwrap_or_else(|| path.to_path_buf())
        .display()
        .to_string()
}

impl Display for ProjectSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Next steps:")?;
        for (index, step) in self.next_steps.iter().enumerate() {
            writeln!(f, "  {}. {step}", index + 1)?;
        }
        Ok(())
    }
}
