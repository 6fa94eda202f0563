// ABOUTME: Wizard state: active screen, project being built and the in-progress app
// ABOUTME: Mutated only by the wizard controller, one event at a time

use super::application::Application;
use super::project::ProjectConfig;
use super::screen::Screen;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WizardState {
    pub current_screen: Screen,
    pub project: ProjectConfig,
    /// Only set while on the app-config or add-another screens
    pub current_app: Option<Application>,
    /// Slot the in-progress application takes in `project.applications`
    pub current_app_index: usize,
    pub quitting: bool,
}

impl WizardState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Moves the in-progress application onto the end of the project's list.
    /// Returns false when there is nothing in progress.
    pub fn commit_current_app(&mut self) -> bool {
        match self.current_app.take() {
            Some(app) => {
                self.project.applications.push(app);
                self.current_app_index = self.project.applications.len();
                true
            }
            None => false,
        }
    }

    /// Reverse of [`Self::commit_current_app`]: pops the last committed
    /// application back into the in-progress slot.
    pub fn uncommit_last_app(&mut self) -> bool {
        match self.project.applications.pop() {
            Some(app) => {
                self.current_app = Some(app);
                self.current_app_index = self.project.applications.len();
                true
            }
            None => false,
        }
    }
}
