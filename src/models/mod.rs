// ABOUTME: Core data models for the teapot wizard: screens, applications, project config and state

pub mod application;
pub mod project;
pub mod screen;
pub mod wizard;

pub use application::{AppKind, Application, OptionValue};
pub use project::{
    AiEditor, AiTools, Architecture, CiFeature, CiPipeline, CiProvider, DevTools, Infrastructure,
    LintingTool, ProjectConfig,
};
pub use screen::{Screen, PROGRESS_STEPS};
pub use wizard::WizardState;
