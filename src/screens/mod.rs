// ABOUTME: View-models for every wizard screen and the ScreenModel enum the controller holds
// ABOUTME: Each screen maps keys to an optional ScreenEvent and renders itself to text

pub mod add_another_app;
pub mod add_apps;
pub mod ai_tools;
pub mod app_config;
pub mod architecture;
pub mod ci_pipeline;
pub mod complete;
pub mod completion;
pub mod dev_tools;
pub mod generating;
pub mod infrastructure;
pub mod preview;
pub mod project_setup;
pub mod text_input;
pub mod welcome;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

pub use add_another_app::AddAnotherAppScreen;
pub use add_apps::AddAppsScreen;
pub use ai_tools::AiToolsScreen;
pub use app_config::AppConfigScreen;
pub use architecture::ArchitectureScreen;
pub use ci_pipeline::CiPipelineScreen;
pub use complete::CompleteScreen;
pub use completion::{AddAnotherAction, Completion, CompletionKind, ScreenEvent};
pub use dev_tools::DevToolsScreen;
pub use generating::GeneratingScreen;
pub use infrastructure::InfrastructureScreen;
pub use preview::PreviewScreen;
pub use project_setup::ProjectSetupScreen;
pub use welcome::WelcomeScreen;

use crate::models::Screen;

/// Moves a list cursor on up/down (or k/j). Returns true if the key was a
/// cursor key.
pub(crate) fn move_cursor(cursor: &mut usize, len: usize, key: KeyEvent) -> bool {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return false;
    }
    match key.code {
        KeyCode::Down | KeyCode::Char('j') => {
            if *cursor + 1 < len {
                *cursor += 1;
            }
            true
        }
        KeyCode::Up | KeyCode::Char('k') => {
            *cursor = cursor.saturating_sub(1);
            true
        }
        _ => false,
    }
}

/// The live view-model for one screen
#[derive(Debug, Clone)]
pub enum ScreenModel {
    Welcome(WelcomeScreen),
    ProjectSetup(ProjectSetupScreen),
    Architecture(ArchitectureScreen),
    AddApps(AddAppsScreen),
    AppConfig(AppConfigScreen),
    AddAnotherApp(AddAnotherAppScreen),
    DevTools(DevToolsScreen),
    Infrastructure(InfrastructureScreen),
    CiPipeline(CiPipelineScreen),
    AiTools(AiToolsScreen),
    Preview(PreviewScreen),
    Generating(GeneratingScreen),
    Complete(CompleteScreen),
}

impl ScreenModel {
    pub const fn screen(&self) -> Screen {
        match self {
            Self::Welcome(_) => Screen::Welcome,
            Self::ProjectSetup(_) => Screen::ProjectSetup,
            Self::Architecture(_) => Screen::Architecture,
            Self::AddApps(_) => Screen::AddApps,
            Self::AppConfig(_) => Screen::AppConfig,
            Self::AddAnotherApp(_) => Screen::AddAnotherApp,
            Self::DevTools(_) => Screen::DevTools,
            Self::Infrastructure(_) => Screen::Infrastructure,
            Self::CiPipeline(_) => Screen::CiPipeline,
            Self::AiTools(_) => Screen::AiTools,
            Self::Preview(_) => Screen::Preview,
            Self::Generating(_) => Screen::Generating,
            Self::Complete(_) => Screen::Complete,
        }
    }

    pub fn update(&mut self, key: KeyEvent) -> Option<ScreenEvent> {
        match self {
            Self::Welcome(s) => s.update(key),
            Self::ProjectSetup(s) => s.update(key),
            Self::Architecture(s) => s.update(key),
            Self::AddApps(s) => s.update(key),
            Self::AppConfig(s) => s.update(key),
            Self::AddAnotherApp(s) => s.update(key),
            Self::DevTools(s) => s.update(key),
            Self::Infrastructure(s) => s.update(key),
            Self::CiPipeline(s) => s.update(key),
            Self::AiTools(s) => s.update(key),
            Self::Preview(s) => s.update(key),
            // Progress is driven by ticks only
            Self::Generating(_) => None,
            Self::Complete(s) => s.update(key),
        }
    }

    pub fn tick(&mut self) -> Option<ScreenEvent> {
        match self {
            Self::Generating(s) => s.tick(),
            _ => None,
        }
    }

    pub fn set_size(&mut self, width: u16, height: u16) {
        if let Self::Preview(s) = self {
            s.set_size(width, height);
        }
    }

    /// Whether backspace edits text on this screen instead of navigating back
    pub fn consumes_backspace(&self) -> bool {
        match self {
            Self::ProjectSetup(s) => s.consumes_backspace(),
            Self::AppConfig(s) => s.consumes_backspace(),
            _ => false,
        }
    }

    pub fn render(&self) -> String {
        match self {
            Self::Welcome(s) => s.render(),
            Self::ProjectSetup(s) => s.render(),
            Self::Architecture(s) => s.render(),
            Self::AddApps(s) => s.render(),
            Self::AppConfig(s) => s.render(),
            Self::AddAnotherApp(s) => s.render(),
            Self::DevTools(s) => s.render(),
            Self::Infrastructure(s) => s.render(),
            Self::CiPipeline(s) => s.render(),
            Self::AiTools(s) => s.render(),
            Self::Preview(s) => s.render(),
            Self::Generating(s) => s.render(),
            Self::Complete(s) => s.render(),
        }
    }
}
