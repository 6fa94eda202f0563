// ABOUTME: Signals emitted by screens when the user finishes a step
// ABOUTME: Completion carries the step's payload; CompletionKind is its payload-free name

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::models::{
    AiTools, AppKind, Architecture, CiPipeline, Infrastructure, LintingTool, OptionValue,
};

/// Choice made on the "add another application?" screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddAnotherAction {
    Add,
    Continue,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Completion {
    WelcomeComplete,
    ProjectSetupComplete {
        name: String,
        description: String,
    },
    ArchitectureSelected(Architecture),
    AppKindSelected(AppKind),
    AppConfigComplete {
        name: String,
        options: BTreeMap<String, OptionValue>,
    },
    AddAnotherSelected(AddAnotherAction),
    DevToolsSelected(LintingTool),
    InfrastructureSelected(Infrastructure),
    CiPipelineSelected(CiPipeline),
    AiToolsSelected(AiTools),
    PreviewContinue,
    GenerationComplete,
}

impl Completion {
    pub const fn kind(&self) -> CompletionKind {
        match self {
            Self::WelcomeComplete => CompletionKind::WelcomeComplete,
            Self::ProjectSetupComplete { .. } => CompletionKind::ProjectSetupComplete,
            Self::ArchitectureSelected(_) => CompletionKind::ArchitectureSelected,
            Self::AppKindSelected(_) => CompletionKind::AppKindSelected,
            Self::AppConfigComplete { .. } => CompletionKind::AppConfigComplete,
            Self::AddAnotherSelected(_) => CompletionKind::AddAnotherSelected,
            Self::DevToolsSelected(_) => CompletionKind::DevToolsSelected,
            Self::InfrastructureSelected(_) => CompletionKind::InfrastructureSelected,
            Self::CiPipelineSelected(_) => CompletionKind::CiPipelineSelected,
            Self::AiToolsSelected(_) => CompletionKind::AiToolsSelected,
            Self::PreviewContinue => CompletionKind::PreviewContinue,
            Self::GenerationComplete => CompletionKind::GenerationComplete,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CompletionKind {
    WelcomeComplete,
    ProjectSetupComplete,
    ArchitectureSelected,
    AppKindSelected,
    AppConfigComplete,
    AddAnotherSelected,
    DevToolsSelected,
    InfrastructureSelected,
    CiPipelineSelected,
    AiToolsSelected,
    PreviewContinue,
    GenerationComplete,
}

impl CompletionKind {
    pub const fn all() -> [Self; 12] {
        [
            Self::WelcomeComplete,
            Self::ProjectSetupComplete,
            Self::ArchitectureSelected,
            Self::AppKindSelected,
            Self::AppConfigComplete,
            Self::AddAnotherSelected,
            Self::DevToolsSelected,
            Self::InfrastructureSelected,
            Self::CiPipelineSelected,
            Self::AiToolsSelected,
            Self::PreviewContinue,
            Self::GenerationComplete,
        ]
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::WelcomeComplete => "WelcomeComplete",
            Self::ProjectSetupComplete => "ProjectSetupComplete",
            Self::ArchitectureSelected => "ArchitectureSelected",
            Self::AppKindSelected => "AppKindSelected",
            Self::AppConfigComplete => "AppConfigComplete",
            Self::AddAnotherSelected => "AddAnotherSelected",
            Self::DevToolsSelected => "DevToolsSelected",
            Self::InfrastructureSelected => "InfrastructureSelected",
            Self::CiPipelineSelected => "CiPipelineSelected",
            Self::AiToolsSelected => "AiToolsSelected",
            Self::PreviewContinue => "PreviewContinue",
            Self::GenerationComplete => "GenerationComplete",
        }
    }
}

impl fmt::Display for CompletionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CompletionKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .into_iter()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| format!("Unknown completion event: {s}"))
    }
}

/// What a screen asks the controller to do after handling a key
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScreenEvent {
    Complete(Completion),
    /// Navigate back, as if backspace had been pressed
    Back,
    /// Persist the configuration without leaving the screen
    Save,
    Quit,
}
