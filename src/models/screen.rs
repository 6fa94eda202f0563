// ABOUTME: Screen identifiers for every step of the project wizard
// ABOUTME: Carries display titles and the progress-bar step each screen belongs to

use serde::{Deserialize, Serialize};
use std::fmt;

/// Labels shown in the progress indicator, in order.
pub const PROGRESS_STEPS: [&str; 9] = [
    "Setup",
    "Architecture",
    "Apps",
    "Config",
    "Tools",
    "Infrastructure",
    "CI/CD",
    "AI Tools",
    "Preview",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Screen {
    Welcome,
    ProjectSetup,
    Architecture,
    AddApps,
    AppConfig,
    AddAnotherApp,
    DevTools,
    Infrastructure,
    CiPipeline,
    AiTools,
    Preview,
    Generating,
    Complete,
}

impl Screen {
    pub const fn all() -> [Self; 13] {
        [
            Self::Welcome,
            Self::ProjectSetup,
            Self::Architecture,
            Self::AddApps,
            Self::AppConfig,
            Self::AddAnotherApp,
            Self::DevTools,
            Self::Infrastructure,
            Self::CiPipeline,
            Self::AiTools,
            Self::Preview,
            Self::Generating,
            Self::Complete,
        ]
    }

    /// Stable identifier used in logs
    pub const fn key(self) -> &'static str {
        match self {
            Self::Welcome => "welcome",
            Self::ProjectSetup => "project-setup",
            Self::Architecture => "architecture",
            Self::AddApps => "add-apps",
            Self::AppConfig => "app-config",
            Self::AddAnotherApp => "add-another-app",
            Self::DevTools => "dev-tools",
            Self::Infrastructure => "infrastructure",
            Self::CiPipeline => "ci-pipeline",
            Self::AiTools => "ai-tools",
            Self::Preview => "preview",
            Self::Generating => "generating",
            Self::Complete => "complete",
        }
    }

    pub const fn title(self) -> &'static str {
        match self {
            Self::Welcome => "Welcome",
            Self::ProjectSetup => "Project Setup",
            Self::Architecture => "Architecture",
            Self::AddApps => "Add Applications",
            Self::AppConfig => "App Configuration",
            Self::AddAnotherApp => "Add Another App",
            Self::DevTools => "Development Tools",
            Self::Infrastructure => "Infrastructure",
            Self::CiPipeline => "CI/CD Pipeline",
            Self::AiTools => "AI Tools",
            Self::Preview => "Configuration Preview",
            Self::Generating => "Generating",
            Self::Complete => "Complete",
        }
    }

    /// Index into [`PROGRESS_STEPS`]. `None` for welcome; generating and
    /// complete report one past the last step so every step renders done.
    pub const fn progress_step(self) -> Option<usize> {
        match self {
            Self::Welcome => None,
            Self::ProjectSetup => Some(0),
            Self::Architecture => Some(1),
            Self::AddApps => Some(2),
            Self::AppConfig | Self::AddAnotherApp => Some(3),
            Self::DevTools => Some(4),
            Self::Infrastructure => Some(5),
            Self::CiPipeline => Some(6),
            Self::AiTools => Some(7),
            Self::Preview => Some(8),
            Self::Generating | Self::Complete => Some(PROGRESS_STEPS.len()),
        }
    }
}

impl Default for Screen {
    fn default() -> Self {
        Self::Welcome
    }
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}
