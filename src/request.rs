use crate::{
    constants::{params, PROJECT_LANGUAGE, PROJECT_TYPE},
    error::{Error, Result},
    project::{Choice, ProjectSpec},
};
use url::{form_urlencoded::byte_serialize, Url};

/// The generator-service URL derived from a [`ProjectSpec`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    url: Url,
}

impl GenerationRequest {
    /// Builds the starter URL for `spec` against the service at `base_url`.
    ///
    /// Any query already present on `base_url` is replaced. The `dependencies`
    /// parameter is left out entirely when no feature module is selected.
    pub fn build(spec: &ProjectSpec, base_url: &str) -> Result<Self> {
        let mut url = Url::parse(base_url)
            .map_err(|e| Error::InvalidUrl { url: base_url.to_string(), e })?;

        let mut pairs = vec![
            (params::TYPE, encode(PROJECT_TYPE)),
            (params::LANGUAGE, encode(PROJECT_LANGUAGE)),
            (params::BOOT_VERSION, encode(spec.boot_version().value())),
            (params::BASE_DIR, encode(spec.name())),
            (params::GROUP_ID, encode(spec.group_id())),
            (params::ARTIFACT_ID, encode(spec.artifact_id())),
            (params::JAVA_VERSION, encode(spec.java_version().value())),
            (params::PACKAGING, encode(spec.packaging().value())),
        ];

        if spec.has_dependencies() {
            // Commas stay literal so the list reads as the service documents it.
            let joined = spec.dependencies().map(encode).collect::<Vec<_>>().join(",");
            pairs.push((params::DEPENDENCIES, joined));
        }

        let query = pairs
            .iter()
            .map(|(key, value)| format!("{key}={value}"))
            .collect::<Vec<_>>()
            .join("&");
        url.set_query(Some(&query));

        Ok(Self { url })
    }

    pub fn url(&self) -> &Url {
        &self.url
    }
}

impl std::fmt::Display for GenerationRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.url)
    }
}

fn encode(value: &str) -> String {
    byte_serialize(value.as_bytes()).collect()
}
