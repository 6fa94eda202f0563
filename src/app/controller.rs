// ABOUTME: WizardController owns the wizard state and the live view-model for each screen
// ABOUTME: Applies completion events forward, back navigation backward, and serves the cached preview

use std::collections::HashMap;
use std::panic::{self, AssertUnwindSafe};
use std::path::{Path, PathBuf};

use tracing::{debug, error, info, warn};

use super::events::WizardEvent;
use crate::cache::RenderCache;
use crate::components::render_structure;
use crate::errors::{ErrorLog, WizardError};
use crate::generator::ArtifactGenerator;
use crate::models::{Application, DevTools, ProjectConfig, Screen, WizardState};
use crate::navigation::{NavigationFlow, ScreenArgs, ScreenPolicy};
use crate::screens::{AddAnotherAction, Completion, ScreenEvent, ScreenModel, WelcomeScreen};
use crate::validation::{validate_project_description, validate_project_name};

/// `(config, width, height) -> text` used for the structure preview
pub type StructureRenderer = fn(&ProjectConfig, u16, u16) -> String;

const DEFAULT_VIEWPORT: (u16, u16) = (80, 24);

pub struct WizardController {
    state: WizardState,
    flow: NavigationFlow,
    screens: HashMap<Screen, ScreenModel>,
    cache: RenderCache,
    renderer: StructureRenderer,
    generator: Box<dyn ArtifactGenerator>,
    output_dir: PathBuf,
    viewport: (u16, u16),
    errors: ErrorLog,
    visible_error: Option<WizardError>,
}

impl WizardController {
    pub fn new(
        cache: RenderCache,
        generator: Box<dyn ArtifactGenerator>,
        output_dir: impl Into<PathBuf>,
    ) -> Self {
        let mut screens = HashMap::new();
        screens.insert(Screen::Welcome, ScreenModel::Welcome(WelcomeScreen::new()));
        Self {
            state: WizardState::new(),
            flow: NavigationFlow::new(),
            screens,
            cache,
            renderer: render_structure,
            generator,
            output_dir: output_dir.into(),
            viewport: DEFAULT_VIEWPORT,
            errors: ErrorLog::default(),
            visible_error: None,
        }
    }

    /// Swaps the structure renderer used for the preview
    pub fn with_renderer(mut self, renderer: StructureRenderer) -> Self {
        self.renderer = renderer;
        self
    }

    pub const fn state(&self) -> &WizardState {
        &self.state
    }

    pub const fn current_screen(&self) -> Screen {
        self.state.current_screen
    }

    pub const fn is_quitting(&self) -> bool {
        self.state.quitting
    }

    pub const fn viewport(&self) -> (u16, u16) {
        self.viewport
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    pub const fn cache(&self) -> &RenderCache {
        &self.cache
    }

    pub const fn error_log(&self) -> &ErrorLog {
        &self.errors
    }

    pub const fn visible_error(&self) -> Option<&WizardError> {
        self.visible_error.as_ref()
    }

    pub fn screen_model(&self, screen: Screen) -> Option<&ScreenModel> {
        self.screens.get(&screen)
    }

    pub fn active_model(&self) -> Option<&ScreenModel> {
        self.screen_model(self.state.current_screen)
    }

    /// Whether backspace should go to the active screen instead of going back
    pub fn active_consumes_backspace(&self) -> bool {
        self.active_model()
            .is_some_and(ScreenModel::consumes_backspace)
    }

    pub fn can_navigate_back(&self) -> bool {
        self.flow.can_navigate_back(self.state.current_screen)
    }

    pub fn handle_event(&mut self, event: WizardEvent) {
        if self.state.quitting {
            return;
        }

        match event {
            WizardEvent::Quit => self.quit(),
            WizardEvent::DismissError => self.visible_error = None,
            WizardEvent::Back => self.navigate_back(),
            WizardEvent::Resize { width, height } => self.resize(width, height),
            WizardEvent::Tick => {
                let current = self.state.current_screen;
                let emitted = self.screens.get_mut(&current).and_then(ScreenModel::tick);
                if let Some(event) = emitted {
                    self.dispatch_screen_event(current, event);
                }
            }
            WizardEvent::Key(key) => {
                let current = self.state.current_screen;
                let emitted = self
                    .screens
                    .get_mut(&current)
                    .and_then(|model| model.update(key));
                if let Some(event) = emitted {
                    self.dispatch_screen_event(current, event);
                }
            }
            WizardEvent::Screen { screen, event } => self.dispatch_screen_event(screen, event),
        }
    }

    /// Applies an event emitted by `from`. Events from a screen that is not
    /// active are dropped.
    pub fn dispatch_screen_event(&mut self, from: Screen, event: ScreenEvent) {
        if self.state.quitting {
            return;
        }
        if from != self.state.current_screen {
            let err = WizardError::Navigation {
                screen: self.state.current_screen,
                event: format!("{event:?}"),
            };
            debug!(from = %from, "Ignoring event: {}", err);
            return;
        }

        match event {
            ScreenEvent::Complete(completion) => self.apply_completion(from, completion),
            ScreenEvent::Back => self.navigate_back(),
            ScreenEvent::Save => {
                if let Some(path) = self.persist_artifact() {
                    self.set_preview_status(format!("✓ Saved to {}", path.display()));
                }
            }
            ScreenEvent::Quit => self.quit(),
        }
    }

    fn quit(&mut self) {
        info!(screen = %self.state.current_screen, "Quitting wizard");
        self.state.quitting = true;
    }

    fn resize(&mut self, width: u16, height: u16) {
        self.viewport = (width, height);
        if let Some(model) = self.screens.get_mut(&self.state.current_screen) {
            model.set_size(width, height);
        }
    }

    fn apply_completion(&mut self, from: Screen, completion: Completion) {
        let kind = completion.kind();
        let (to, policy) = match (from, &completion) {
            // Destination depends on the user's choice, not only on (screen, event)
            (Screen::AddAnotherApp, Completion::AddAnotherSelected(AddAnotherAction::Continue)) => {
                (Screen::DevTools, ScreenPolicy::Reuse)
            }
            _ => match self.flow.transition(from, kind) {
                Some(transition) => (transition.to, transition.policy),
                None => {
                    let err = WizardError::Navigation {
                        screen: from,
                        event: kind.to_string(),
                    };
                    warn!("{}", err);
                    return;
                }
            },
        };

        // Persistence failures are surfaced by persist_artifact itself
        if matches!(completion, Completion::PreviewContinue) && self.persist_artifact().is_none() {
            return;
        }
        if let Err(err) = self.apply_payload(completion) {
            self.surface_error(err);
            return;
        }

        debug!(from = %from, to = %to, ?policy, event = %kind, "Advancing wizard");
        self.visible_error = None;
        self.enter_screen(to, policy);
    }

    /// Copies a completion's payload into the wizard state
    fn apply_payload(&mut self, completion: Completion) -> Result<(), WizardError> {
        let project = &mut self.state.project;
        match completion {
            Completion::WelcomeComplete
            | Completion::AddAnotherSelected(_)
            | Completion::PreviewContinue
            | Completion::GenerationComplete => {}
            Completion::ProjectSetupComplete { name, description } => {
                validate_project_name(&name)?;
                validate_project_description(&description)?;
                project.name = name;
                project.description = description;
            }
            Completion::ArchitectureSelected(architecture) => {
                project.architecture = architecture;
            }
            Completion::AppKindSelected(kind) => {
                self.state.current_app = Some(Application::new(kind));
                self.state.current_app_index = project.applications.len();
            }
            Completion::AppConfigComplete { name, options } => {
                let Some(app) = self.state.current_app.as_mut() else {
                    return Err(WizardError::System(
                        "No application is being configured".to_string(),
                    ));
                };
                app.name = name;
                app.options = options;
                self.state.commit_current_app();
            }
            Completion::DevToolsSelected(tool) => {
                project.dev_tools = DevTools::with_linting(tool);
            }
            Completion::InfrastructureSelected(infrastructure) => {
                project.infrastructure = infrastructure;
            }
            Completion::CiPipelineSelected(pipeline) => {
                project.ci_pipeline = pipeline;
            }
            Completion::AiToolsSelected(ai_tools) => {
                project.ai_tools = ai_tools;
            }
        }
        Ok(())
    }

    /// Makes `to` the active screen, building its view-model per `policy`
    fn enter_screen(&mut self, to: Screen, policy: ScreenPolicy) {
        self.state.current_screen = to;

        let rebuild = match policy {
            ScreenPolicy::Reuse => !self.screens.contains_key(&to),
            ScreenPolicy::AlwaysRecreate | ScreenPolicy::RecreateWithParams => true,
        };
        if !rebuild {
            return;
        }

        let args = match policy {
            ScreenPolicy::AlwaysRecreate => ScreenArgs::default(),
            ScreenPolicy::Reuse | ScreenPolicy::RecreateWithParams => {
                ScreenArgs::from_state(&self.state)
            }
        };
        self.install_model(to, &args);
    }

    fn install_model(&mut self, screen: Screen, args: &ScreenArgs) {
        let mut model = self.flow.build_screen(screen, args);
        let (width, height) = self.viewport;
        model.set_size(width, height);
        self.screens.insert(screen, model);
    }

    fn navigate_back(&mut self) {
        let current = self.state.current_screen;
        if !self.flow.can_navigate_back(current) {
            debug!(screen = %current, "Back navigation not allowed");
            return;
        }

        let outcome = self
            .flow
            .navigate_back(current, std::mem::take(&mut self.state));
        self.state = outcome.state;
        self.visible_error = None;

        let parameterized =
            self.flow.policy_for(outcome.screen) == ScreenPolicy::RecreateWithParams;
        if outcome.rebuild_view || parameterized || !self.screens.contains_key(&outcome.screen) {
            let args = ScreenArgs::from_state(&self.state);
            self.install_model(outcome.screen, &args);
        }
    }

    /// Writes the artifact for the current project. On failure the error is
    /// recorded and shown, and None is returned.
    fn persist_artifact(&mut self) -> Option<PathBuf> {
        match self
            .generator
            .render_and_persist(&self.state.project, &self.output_dir)
        {
            Ok(path) => {
                info!(path = %path.display(), "Saved project configuration");
                Some(path)
            }
            Err(err) => {
                error!("Failed to save project configuration: {}", err);
                self.set_preview_status(format!("✗ {err}"));
                self.surface_error(WizardError::System(err.to_string()));
                None
            }
        }
    }

    fn set_preview_status(&mut self, status: String) {
        if let Some(ScreenModel::Preview(preview)) = self.screens.get_mut(&Screen::Preview) {
            preview.set_status(status);
        }
    }

    fn surface_error(&mut self, err: WizardError) {
        if !err.kind().is_recoverable() {
            warn!(kind = %err.kind(), "{}", err);
        }
        self.errors.record(err.clone(), self.state.current_screen);
        self.visible_error = Some(err);
    }

    /// Text of the active screen
    pub fn render_screen(&self) -> String {
        if self.state.quitting {
            return String::new();
        }
        self.active_model()
            .map(ScreenModel::render)
            .unwrap_or_default()
    }

    /// Cached structure preview for the current project and viewport. A
    /// panic while rendering resets the wizard to welcome.
    pub fn render_preview(&mut self) -> String {
        if self.state.quitting {
            return String::new();
        }

        let (width, height) = self.viewport;
        let renderer = self.renderer;
        let cache = &self.cache;
        let project = &self.state.project;
        let result = panic::catch_unwind(AssertUnwindSafe(|| {
            cache.get_or_render(project, width, height, renderer)
        }));

        match result {
            Ok(content) => content,
            Err(payload) => {
                let message = payload
                    .downcast_ref::<&str>()
                    .map(|s| (*s).to_string())
                    .or_else(|| payload.downcast_ref::<String>().cloned())
                    .unwrap_or_else(|| "unknown panic".to_string());
                error!("Preview rendering panicked: {}", message);
                self.recover_to_welcome(WizardError::Rendering(message));
                String::new()
            }
        }
    }

    fn recover_to_welcome(&mut self, err: WizardError) {
        self.surface_error(err);
        self.state.current_app = None;
        self.state.current_screen = Screen::Welcome;
        self.screens
            .entry(Screen::Welcome)
            .or_insert_with(|| ScreenModel::Welcome(WelcomeScreen::new()));
    }
}
