//! The description of a project to generate.

use crate::error::{Error, Result};
use indexmap::IndexSet;
use serde::Deserialize;
use std::fmt::Display;
use std::str::FromStr;

/// Choices offered to the user, each with a value sent to the service and a label.
pub trait Choice: Sized + Copy + 'static {
    const FIELD: &'static str;
    const ALL: &'static [Self];

    fn value(&self) -> &'static str;
    fn label(&self) -> &'static str;

    fn default_choice() -> Self;

    fn parse_choice(s: &str) -> Result<Self> {
        Self::ALL.iter().copied().find(|c| c.value() == s).ok_or_else(|| {
            Error::UnsupportedChoice {
                field: Self::FIELD,
                value: s.to_string(),
                expected: Self::ALL
                    .iter()
                    .map(|c| c.value())
                    .collect::<Vec<_>>()
                    .join(", "),
            }
        })
    }
}

macro_rules! choice_enum {
    (
        $(#[$meta:meta])*
        $name:ident, $field:literal, default = $default:ident {
            $($variant:ident => ($value:literal, $label:literal)),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $($variant),+
        }

        impl Choice for $name {
            const FIELD: &'static str = $field;
            const ALL: &'static [Self] = &[$($name::$variant),+];

            fn value(&self) -> &'static str {
                match self {
                    $($name::$variant => $value),+
                }
            }

            fn label(&self) -> &'static str {
                match self {
                    $($name::$variant => $label),+
                }
            }

            fn default_choice() -> Self {
                $name::$default
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.value())
            }
        }

        impl FromStr for $name {
            type Err = Error;

            fn from_str(s: &str) -> Result<Self> {
                Self::parse_choice(s)
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                let raw = String::deserialize(deserializer)?;
                Self::parse_choice(&raw).map_err(serde::de::Error::custom)
            }
        }
    };
}

choice_enum! {
    /// Java runtime the generated project targets.
    JavaVersion, "java version", default = Java8 {
        Java8 => ("8", "Java 8"),
        Java11 => ("11", "Java 11"),
        Java17 => ("17", "Java 17"),
        Java21 => ("21", "Java 21"),
    }
}

choice_enum! {
    /// Spring Boot release the project is generated against.
    BootVersion, "spring boot version", default = V2_7_13 {
        V2_7_13 => ("2.7.13", "Spring Boot 2.7.13"),
        V3_3_4 => ("3.3.4", "Spring Boot 3.3.4"),
    }
}

choice_enum! {
    /// Build artifact format.
    Packaging, "packaging", default = Jar {
        Jar => ("jar", "JAR"),
        War => ("war", "WAR"),
    }
}

/// Dependencies offered by the interactive prompt as `(value, label)`.
///
/// Any other Initializr dependency id can still be passed through answers.
pub const DEPENDENCY_CATALOG: &[(&str, &str)] = &[
    ("web", "Spring Web"),
    ("data-jpa", "Spring Data JPA"),
    ("security", "Spring Security"),
    ("thymeleaf", "Thymeleaf"),
];

/// Complete, immutable description of one project to generate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectSpec {
    name: String,
    group_id: String,
    artifact_id: String,
    java_version: JavaVersion,
    boot_version: BootVersion,
    packaging: Packaging,
    dependencies: IndexSet<String>,
}

impl ProjectSpec {
    pub fn builder(name: impl Into<String>) -> ProjectSpecBuilder {
        ProjectSpecBuilder::new(name)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn group_id(&self) -> &str {
        &self.group_id
    }

    pub fn artifact_id(&self) -> &str {
        &self.artifact_id
    }

    pub fn java_version(&self) -> JavaVersion {
        self.java_version
    }

    pub fn boot_version(&self) -> BootVersion {
        self.boot_version
    }

    pub fn packaging(&self) -> Packaging {
        self.packaging
    }

    /// Selected feature modules in the order they were chosen.
    pub fn dependencies(&self) -> impl Iterator<Item = &str> {
        self.dependencies.iter().map(String::as_str)
    }

    pub fn has_dependencies(&self) -> bool {
        !self.dependencies.is_empty()
    }
}

/// Builder for [`ProjectSpec`]; unset fields fall back to the prompt defaults.
#[derive(Debug, Clone)]
pub struct ProjectSpecBuilder {
    name: String,
    group_id: Option<String>,
    artifact_id: Option<String>,
    java_version: Option<JavaVersion>,
    boot_version: Option<BootVersion>,
    packaging: Option<Packaging>,
    dependencies: IndexSet<String>,
}

impl ProjectSpecBuilder {
    fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            group_id: None,
            artifact_id: None,
            java_version: None,
            boot_version: None,
            packaging: None,
            dependencies: IndexSet::new(),
        }
    }

    pub fn group_id(mut self, group_id: impl Into<String>) -> Self {
        self.group_id = Some(group_id.into());
        self
    }

    pub fn artifact_id(mut self, artifact_id: impl Into<String>) -> Self {
        self.artifact_id = Some(artifact_id.into());
        self
    }

    pub fn java_version(mut self, java_version: JavaVersion) -> Self {
        self.java_version = Some(java_version);
        self
    }

    pub fn boot_version(mut self, boot_version: BootVersion) -> Self {
        self.boot_version = Some(boot_version);
        self
    }

    pub fn packaging(mut self, packaging: Packaging) -> Self {
        self.packaging = Some(packaging);
        self
    }

    /// Adds feature modules; repeated ids keep their first position.
    pub fn dependencies<I, S>(mut self, dependencies: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.dependencies.extend(dependencies.into_iter().map(Into::into));
        self
    }

    pub fn build(self) -> ProjectSpec {
        let artifact_id = self.artifact_id.unwrap_or_else(|| self.name.clone());
        ProjectSpec {
            group_id: self
                .group_id
                .unwrap_or_else(|| crate::constants::DEFAULT_GROUP_ID.to_string()),
            artifact_id,
            java_version: self.java_version.unwrap_or_else(JavaVersion::default_choice),
            boot_version: self.boot_version.unwrap_or_else(BootVersion::default_choice),
            packaging: self.packaging.unwrap_or_else(Packaging::default_choice),
            dependencies: self.dependencies,
            name: self.name,
        }
    }
}
