// ABOUTME: Project configuration aggregate built up by the wizard screens
// ABOUTME: Architecture, dev tooling, infrastructure, CI and AI tooling choices

use super::application::Application;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Architecture {
    Turborepo,
    Single,
    Nx,
}

impl Architecture {
    pub const fn all() -> [Self; 3] {
        [Self::Turborepo, Self::Single, Self::Nx]
    }

    pub const fn key(self) -> &'static str {
        match self {
            Self::Turborepo => "turborepo",
            Self::Single => "single",
            Self::Nx => "nx",
        }
    }

    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Turborepo => "Turborepo (Recommended)",
            Self::Single => "Single Application",
            Self::Nx => "Nx (Coming Soon)",
        }
    }

    pub const fn description(self) -> &'static str {
        match self {
            Self::Turborepo => "Fast, incremental builds with caching",
            Self::Single => "Simple single application setup",
            Self::Nx => "Enterprise-grade monorepo tools",
        }
    }

    /// Nx is listed but cannot be chosen yet
    pub const fn is_available(self) -> bool {
        !matches!(self, Self::Nx)
    }

    pub const fn allows_multiple_apps(self) -> bool {
        !matches!(self, Self::Single)
    }
}

impl Default for Architecture {
    fn default() -> Self {
        Self::Turborepo
    }
}

impl fmt::Display for Architecture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Architecture {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .into_iter()
            .find(|arch| arch.key() == s)
            .ok_or_else(|| format!("Unknown architecture: {s}"))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LintingTool {
    PrettierEslint,
    Biome,
    Custom,
}

impl LintingTool {
    pub const fn all() -> [Self; 3] {
        [Self::PrettierEslint, Self::Biome, Self::Custom]
    }

    pub const fn key(self) -> &'static str {
        match self {
            Self::PrettierEslint => "prettier-eslint",
            Self::Biome => "biome",
            Self::Custom => "custom",
        }
    }

    pub const fn display_name(self) -> &'static str {
        match self {
            Self::PrettierEslint => "Prettier + ESLint",
            Self::Biome => "Biome",
            Self::Custom => "Custom Setup",
        }
    }

    pub const fn description(self) -> &'static str {
        match self {
            Self::PrettierEslint => "Traditional formatting and linting setup",
            Self::Biome => "Fast, modern toolchain for web projects",
            Self::Custom => "Configure your own linting and formatting",
        }
    }
}

impl Default for LintingTool {
    fn default() -> Self {
        Self::PrettierEslint
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DevTools {
    pub linting: Option<LintingTool>,
    pub typescript: bool,
    pub husky: bool,
    pub lint_staged: bool,
}

impl DevTools {
    /// Picking any linting tool brings TypeScript, Husky and lint-staged along
    pub const fn with_linting(tool: LintingTool) -> Self {
        Self {
            linting: Some(tool),
            typescript: true,
            husky: true,
            lint_staged: true,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Infrastructure {
    pub docker: bool,
    pub docker_compose: bool,
    pub pulumi: bool,
    pub terraform: bool,
    pub cloud_provider: Option<String>,
}

impl Infrastructure {
    pub const fn any_selected(&self) -> bool {
        self.docker || self.docker_compose || self.pulumi || self.terraform
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CiProvider {
    Github,
    Gitlab,
    Jenkins,
    Skip,
}

impl CiProvider {
    pub const fn all() -> [Self; 4] {
        [Self::Github, Self::Gitlab, Self::Jenkins, Self::Skip]
    }

    pub const fn key(self) -> &'static str {
        match self {
            Self::Github => "github",
            Self::Gitlab => "gitlab",
            Self::Jenkins => "jenkins",
            Self::Skip => "skip",
        }
    }

    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Github => "GitHub Actions",
            Self::Gitlab => "GitLab CI",
            Self::Jenkins => "Jenkins",
            Self::Skip => "Skip CI/CD",
        }
    }

    pub const fn description(self) -> &'static str {
        match self {
            Self::Github => "Integrated with GitHub repositories",
            Self::Gitlab => "GitLab's built-in CI/CD system",
            Self::Jenkins => "Self-hosted automation server",
            Self::Skip => "Set up CI/CD later manually",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CiFeature {
    Testing,
    Linting,
    Docker,
    Deployment,
    Security,
}

impl CiFeature {
    pub const fn all() -> [Self; 5] {
        [
            Self::Testing,
            Self::Linting,
            Self::Docker,
            Self::Deployment,
            Self::Security,
        ]
    }

    pub const fn key(self) -> &'static str {
        match self {
            Self::Testing => "testing",
            Self::Linting => "linting",
            Self::Docker => "docker",
            Self::Deployment => "deployment",
            Self::Security => "security",
        }
    }

    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Testing => "Testing",
            Self::Linting => "Linting & Formatting",
            Self::Docker => "Docker Image Build",
            Self::Deployment => "Automatic Deployment",
            Self::Security => "Security Scanning",
        }
    }

    pub const fn description(self) -> &'static str {
        match self {
            Self::Testing => "Run tests on every push",
            Self::Linting => "Code quality checks",
            Self::Docker => "Build and push container images",
            Self::Deployment => "Deploy on successful builds",
            Self::Security => "Vulnerability and dependency checks",
        }
    }

    pub const fn enabled_by_default(self) -> bool {
        matches!(self, Self::Testing | Self::Linting)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CiPipeline {
    pub provider: Option<CiProvider>,
    pub features: Vec<CiFeature>,
}

impl CiPipeline {
    pub fn provider_key(&self) -> &'static str {
        self.provider.map_or("", CiProvider::key)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AiEditor {
    ClaudeCode,
    Cursor,
    Windsurf,
    ContinueDev,
}

impl AiEditor {
    pub const fn all() -> [Self; 4] {
        [Self::ClaudeCode, Self::Cursor, Self::Windsurf, Self::ContinueDev]
    }

    pub const fn key(self) -> &'static str {
        match self {
            Self::ClaudeCode => "claude-code",
            Self::Cursor => "cursor",
            Self::Windsurf => "windsurf",
            Self::ContinueDev => "continue-dev",
        }
    }

    pub const fn display_name(self) -> &'static str {
        match self {
            Self::ClaudeCode => "Claude Code",
            Self::Cursor => "Cursor",
            Self::Windsurf => "Windsurf",
            Self::ContinueDev => "Continue.dev",
        }
    }

    pub const fn description(self) -> &'static str {
        match self {
            Self::ClaudeCode => "Anthropic's official CLI for Claude",
            Self::Cursor => "AI-powered code editor",
            Self::Windsurf => "Codeium's AI-native IDE",
            Self::ContinueDev => "Open-source AI coding assistant",
        }
    }

    pub const fn extensions(self) -> &'static [&'static str] {
        match self {
            Self::ClaudeCode => &["claude-code", "VS Code integration"],
            Self::Cursor => &["Built-in AI", "VS Code fork"],
            Self::Windsurf => &["AI chat", "Code generation"],
            Self::ContinueDev => &["VS Code extension", "JetBrains plugin"],
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AiTools {
    /// Comma-joined editor keys, or `none`
    pub editor: String,
    pub extensions: Vec<String>,
}

impl AiTools {
    pub fn from_editors(editors: &[AiEditor]) -> Self {
        if editors.is_empty() {
            return Self::none();
        }
        Self {
            editor: editors.iter().map(|e| e.key()).collect::<Vec<_>>().join(","),
            extensions: editors
                .iter()
                .flat_map(|e| e.extensions().iter().map(|s| (*s).to_string()))
                .collect(),
        }
    }

    pub fn none() -> Self {
        Self {
            editor: "none".to_string(),
            extensions: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectConfig {
    pub name: String,
    pub description: String,
    pub architecture: Architecture,
    pub applications: Vec<Application>,
    pub dev_tools: DevTools,
    pub infrastructure: Infrastructure,
    pub ci_pipeline: CiPipeline,
    pub ai_tools: AiTools,
}

impl ProjectConfig {
    pub fn app_count(&self) -> usize {
        self.applications.len()
    }
}
