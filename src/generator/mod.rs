// ABOUTME: Artifact generation: turns a finished ProjectConfig into teapot.yml
// ABOUTME: The controller only sees the ArtifactGenerator trait and its success or failure

use serde::Serialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

use crate::models::{OptionValue, ProjectConfig};

pub const CONFIG_VERSION: &str = "1.0";
pub const DEFAULT_FILE_NAME: &str = "teapot.yml";

/// Errors from rendering or writing the configuration artifact
#[derive(Debug, Error)]
pub enum GeneratorError {
    /// The configuration could not be encoded as YAML
    #[error("Failed to encode configuration: {0}")]
    Encode(#[from] serde_yaml::Error),

    /// The output directory or file could not be written
    #[error("Failed to write {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type GeneratorResult<T> = Result<T, GeneratorError>;

/// Serializer and persister for the project configuration
pub trait ArtifactGenerator: Send + Sync {
    /// Pure `config -> text`
    fn render(&self, project: &ProjectConfig) -> GeneratorResult<String>;

    /// Writes `content` into `dir`, returning the file written
    fn persist(&self, content: &str, dir: &Path) -> GeneratorResult<PathBuf>;

    fn render_and_persist(&self, project: &ProjectConfig, dir: &Path) -> GeneratorResult<PathBuf> {
        let content = self.render(project)?;
        self.persist(&content, dir)
    }
}

// Only the required methods are mocked so the default render_and_persist runs
#[cfg(test)]
mockall::mock! {
    pub ArtifactGenerator {}
    impl ArtifactGenerator for ArtifactGenerator {
        fn render(&self, project: &ProjectConfig) -> GeneratorResult<String>;
        fn persist(&self, content: &str, dir: &Path) -> GeneratorResult<PathBuf>;
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct TeapotDocument<'a> {
    version: &'static str,
    project: ProjectSection<'a>,
    architecture: &'static str,
    applications: Vec<ApplicationSection<'a>>,
    dev_tools: DevToolsSection,
    infrastructure: InfrastructureSection,
    ci_pipeline: CiPipelineSection,
    ai_tools: AiToolsSection<'a>,
}

#[derive(Serialize)]
struct ProjectSection<'a> {
    name: &'a str,
    description: &'a str,
}

#[derive(Serialize)]
struct ApplicationSection<'a> {
    id: &'a str,
    name: &'a str,
    #[serde(rename = "type")]
    kind: &'static str,
    options: &'a BTreeMap<String, OptionValue>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct DevToolsSection {
    linting: &'static str,
    typescript: bool,
    husky: bool,
    lint_staged: bool,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct InfrastructureSection {
    docker: bool,
    docker_compose: bool,
    pulumi: bool,
    terraform: bool,
}

#[derive(Serialize)]
struct CiPipelineSection {
    provider: &'static str,
    features: Vec<&'static str>,
}

#[derive(Serialize)]
struct AiToolsSection<'a> {
    editor: &'a str,
    extensions: &'a [String],
}

impl<'a> TeapotDocument<'a> {
    fn from_project(project: &'a ProjectConfig) -> Self {
        Self {
            version: CONFIG_VERSION,
            project: ProjectSection {
                name: &project.name,
                description: &project.description,
            },
            architecture: project.architecture.key(),
            applications: project
                .applications
                .iter()
                .map(|app| ApplicationSection {
                    id: &app.id,
                    name: &app.name,
                    kind: app.kind.key(),
                    options: &app.options,
                })
                .collect(),
            dev_tools: DevToolsSection {
                linting: project.dev_tools.linting.map_or("", |tool| tool.key()),
                typescript: project.dev_tools.typescript,
                husky: project.dev_tools.husky,
                lint_staged: project.dev_tools.lint_staged,
            },
            infrastructure: InfrastructureSection {
                docker: project.infrastructure.docker,
                docker_compose: project.infrastructure.docker_compose,
                pulumi: project.infrastructure.pulumi,
                terraform: project.infrastructure.terraform,
            },
            ci_pipeline: CiPipelineSection {
                provider: project.ci_pipeline.provider_key(),
                features: project.ci_pipeline.features.iter().map(|f| f.key()).collect(),
            },
            ai_tools: AiToolsSection {
                editor: &project.ai_tools.editor,
                extensions: &project.ai_tools.extensions,
            },
        }
    }
}

pub fn to_yaml(project: &ProjectConfig) -> GeneratorResult<String> {
    Ok(serde_yaml::to_string(&TeapotDocument::from_project(project))?)
}

/// Writes `teapot.yml` (or a configured file name) into an output directory
#[derive(Debug, Clone)]
pub struct YamlGenerator {
    file_name: String,
}

impl YamlGenerator {
    pub fn new(file_name: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
        }
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }
}

impl Default for YamlGenerator {
    fn default() -> Self {
        Self::new(DEFAULT_FILE_NAME)
    }
}

impl ArtifactGenerator for YamlGenerator {
    fn render(&self, project: &ProjectConfig) -> GeneratorResult<String> {
        to_yaml(project)
    }

    fn persist(&self, content: &str, dir: &Path) -> GeneratorResult<PathBuf> {
        fs::create_dir_all(dir).map_err(|source| GeneratorError::Io {
            path: dir.to_path_buf(),
            source,
        })?;

        let path = dir.join(&self.file_name);
        fs::write(&path, content).map_err(|source| GeneratorError::Io {
            path: path.clone(),
            source,
        })?;

        info!("Saved configuration to {}", path.display());
        Ok(path)
    }
}
