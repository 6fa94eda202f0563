// ABOUTME: Wizard transition tables: forward on completion events, backward on navigate-back
// ABOUTME: Also the per-screen factory that builds fresh view-models from ScreenArgs

use std::collections::HashMap;
use tracing::debug;

use crate::models::{AppKind, Application, Architecture, ProjectConfig, Screen, WizardState};
use crate::screens::{
    AddAnotherAppScreen, AddAppsScreen, AiToolsScreen, AppConfigScreen, ArchitectureScreen,
    CiPipelineScreen, CompleteScreen, CompletionKind, DevToolsScreen, GeneratingScreen,
    InfrastructureScreen, PreviewScreen, ProjectSetupScreen, ScreenModel, WelcomeScreen,
};

const DEFAULT_PROJECT_NAME: &str = "project";

/// What to do with a cached view-model when a transition lands on its screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenPolicy {
    /// Keep an existing view-model, build one only if missing
    Reuse,
    /// Always build a fresh, parameterless view-model
    AlwaysRecreate,
    /// Always build a fresh view-model from the current state
    RecreateWithParams,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub from: Screen,
    pub on: CompletionKind,
    pub to: Screen,
    pub policy: ScreenPolicy,
}

const fn forward(from: Screen, on: CompletionKind, to: Screen, policy: ScreenPolicy) -> Transition {
    Transition {
        from,
        on,
        to,
        policy,
    }
}

/// Add-another resolves to add-apps here; the controller takes the
/// continue branch itself using the event payload.
const FORWARD_TRANSITIONS: &[Transition] = &[
    forward(Screen::Welcome, CompletionKind::WelcomeComplete, Screen::ProjectSetup, ScreenPolicy::Reuse),
    forward(Screen::ProjectSetup, CompletionKind::ProjectSetupComplete, Screen::Architecture, ScreenPolicy::Reuse),
    forward(Screen::Architecture, CompletionKind::ArchitectureSelected, Screen::AddApps, ScreenPolicy::Reuse),
    forward(Screen::AddApps, CompletionKind::AppKindSelected, Screen::AppConfig, ScreenPolicy::RecreateWithParams),
    forward(Screen::AppConfig, CompletionKind::AppConfigComplete, Screen::AddAnotherApp, ScreenPolicy::RecreateWithParams),
    forward(Screen::AddAnotherApp, CompletionKind::AddAnotherSelected, Screen::AddApps, ScreenPolicy::AlwaysRecreate),
    forward(Screen::DevTools, CompletionKind::DevToolsSelected, Screen::Infrastructure, ScreenPolicy::Reuse),
    forward(Screen::Infrastructure, CompletionKind::InfrastructureSelected, Screen::CiPipeline, ScreenPolicy::Reuse),
    forward(Screen::CiPipeline, CompletionKind::CiPipelineSelected, Screen::AiTools, ScreenPolicy::Reuse),
    forward(Screen::AiTools, CompletionKind::AiToolsSelected, Screen::Preview, ScreenPolicy::RecreateWithParams),
    forward(Screen::Preview, CompletionKind::PreviewContinue, Screen::Generating, ScreenPolicy::Reuse),
    forward(Screen::Generating, CompletionKind::GenerationComplete, Screen::Complete, ScreenPolicy::RecreateWithParams),
];

const BACKWARD_TRANSITIONS: &[(Screen, Screen)] = &[
    (Screen::ProjectSetup, Screen::Welcome),
    (Screen::Architecture, Screen::ProjectSetup),
    (Screen::AppConfig, Screen::AddApps),
    (Screen::DevTools, Screen::AddAnotherApp),
    (Screen::Infrastructure, Screen::DevTools),
    (Screen::CiPipeline, Screen::Infrastructure),
    (Screen::AiTools, Screen::CiPipeline),
    (Screen::Preview, Screen::AiTools),
];

/// Optional parameters for screen constructors. Anything missing falls
/// back to a fixed default.
#[derive(Debug, Clone, Default)]
pub struct ScreenArgs {
    pub kind: Option<AppKind>,
    pub app_count: Option<usize>,
    pub architecture: Option<Architecture>,
    pub project_name: Option<String>,
    pub project: Option<ProjectConfig>,
    /// Application being re-edited
    pub application: Option<Application>,
    /// Slot the in-progress application takes in the project's list
    pub app_index: Option<usize>,
}

impl ScreenArgs {
    /// Every parameter a constructor could want, taken from the wizard state
    pub fn from_state(state: &WizardState) -> Self {
        Self {
            kind: state.current_app.as_ref().map(|app| app.kind),
            app_count: Some(state.project.app_count()),
            architecture: Some(state.project.architecture),
            project_name: Some(state.project.name.clone()),
            project: Some(state.project.clone()),
            application: state.current_app.clone(),
            app_index: Some(state.current_app_index),
        }
    }

    pub fn kind_or_default(&self) -> AppKind {
        self.kind.unwrap_or_default()
    }

    pub fn app_count_or_default(&self) -> usize {
        self.app_count.unwrap_or(0)
    }

    pub fn app_index_or_default(&self) -> usize {
        self.app_index.unwrap_or(0)
    }

    pub fn architecture_or_default(&self) -> Architecture {
        self.architecture.unwrap_or_default()
    }

    pub fn project_name_or_default(&self) -> &str {
        match self.project_name.as_deref() {
            Some(name) if !name.is_empty() => name,
            _ => DEFAULT_PROJECT_NAME,
        }
    }
}

pub type ScreenConstructor = fn(&ScreenArgs) -> ScreenModel;

/// Result of a backward navigation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackOutcome {
    pub state: WizardState,
    pub screen: Screen,
    /// The destination view-model must be rebuilt from `state`
    pub rebuild_view: bool,
}

#[derive(Debug, Clone)]
pub struct NavigationFlow {
    forward: HashMap<(Screen, CompletionKind), Transition>,
    backward: HashMap<Screen, Screen>,
}

impl NavigationFlow {
    pub fn new() -> Self {
        Self {
            forward: FORWARD_TRANSITIONS
                .iter()
                .map(|t| ((t.from, t.on), *t))
                .collect(),
            backward: BACKWARD_TRANSITIONS.iter().copied().collect(),
        }
    }

    pub fn transitions(&self) -> impl Iterator<Item = &Transition> {
        self.forward.values()
    }

    /// How a view-model for `screen` is treated when navigation lands on it.
    /// Screens built from state on any forward arrival are rebuilt on every
    /// arrival, backward ones included.
    pub fn policy_for(&self, screen: Screen) -> ScreenPolicy {
        let parameterized = self
            .forward
            .values()
            .any(|t| t.to == screen && t.policy == ScreenPolicy::RecreateWithParams);
        if parameterized {
            ScreenPolicy::RecreateWithParams
        } else {
            ScreenPolicy::Reuse
        }
    }

    /// Welcome, generating and complete are points of no return
    pub const fn can_navigate_back(&self, screen: Screen) -> bool {
        !matches!(screen, Screen::Welcome | Screen::Generating | Screen::Complete)
    }

    pub fn previous_screen(&self, current: Screen, state: &WizardState) -> Screen {
        match current {
            Screen::AddApps => {
                if state.project.applications.is_empty() {
                    Screen::Architecture
                } else {
                    Screen::AddAnotherApp
                }
            }
            Screen::AddAnotherApp => Screen::AppConfig,
            _ => self.backward.get(&current).copied().unwrap_or(current),
        }
    }

    /// Pure state transition for going back one screen. Leaving add-another
    /// un-commits the last application into the in-progress slot.
    pub fn navigate_back(&self, current: Screen, mut state: WizardState) -> BackOutcome {
        if !self.can_navigate_back(current) {
            return BackOutcome {
                state,
                screen: current,
                rebuild_view: false,
            };
        }

        let (screen, rebuild_view) = match current {
            Screen::AddAnotherApp => {
                if state.uncommit_last_app() {
                    (Screen::AppConfig, true)
                } else {
                    (Screen::AddApps, false)
                }
            }
            Screen::AppConfig => {
                state.current_app = None;
                (self.previous_screen(current, &state), false)
            }
            _ => (self.previous_screen(current, &state), false),
        };

        debug!(from = %current, to = %screen, rebuild_view, "Navigating back");
        state.current_screen = screen;
        BackOutcome {
            state,
            screen,
            rebuild_view,
        }
    }

    pub fn transition(&self, current: Screen, kind: CompletionKind) -> Option<&Transition> {
        self.forward.get(&(current, kind))
    }

    /// Destination for a completion on `current`; unknown pairs stay put
    pub fn next_screen(&self, current: Screen, kind: CompletionKind) -> Screen {
        self.transition(current, kind).map_or(current, |t| t.to)
    }

    /// Same as [`Self::next_screen`] for an event given by name
    pub fn next_screen_by_name(&self, current: Screen, event: &str) -> Screen {
        event
            .parse::<CompletionKind>()
            .map_or(current, |kind| self.next_screen(current, kind))
    }

    pub fn screen_factory(&self, screen: Screen) -> ScreenConstructor {
        match screen {
            Screen::Welcome => |_| ScreenModel::Welcome(WelcomeScreen::new()),
            Screen::ProjectSetup => |args| {
                ScreenModel::ProjectSetup(match &args.project {
                    Some(project) => {
                        ProjectSetupScreen::with_values(&project.name, &project.description)
                    }
                    None => ProjectSetupScreen::new(),
                })
            },
            Screen::Architecture => |_| ScreenModel::Architecture(ArchitectureScreen::new()),
            Screen::AddApps => |_| ScreenModel::AddApps(AddAppsScreen::new()),
            Screen::AppConfig => |args| {
                let screen = match &args.application {
                    Some(app) => AppConfigScreen::from_application(app),
                    None => AppConfigScreen::new(args.kind_or_default()),
                };
                ScreenModel::AppConfig(screen.with_position(args.app_index_or_default()))
            },
            Screen::AddAnotherApp => |args| {
                ScreenModel::AddAnotherApp(AddAnotherAppScreen::new(
                    args.app_count_or_default(),
                    args.architecture_or_default(),
                ))
            },
            Screen::DevTools => |_| ScreenModel::DevTools(DevToolsScreen::new()),
            Screen::Infrastructure => |_| ScreenModel::Infrastructure(InfrastructureScreen::new()),
            Screen::CiPipeline => |_| ScreenModel::CiPipeline(CiPipelineScreen::new()),
            Screen::AiTools => |_| ScreenModel::AiTools(AiToolsScreen::new()),
            Screen::Preview => |args| {
                let project = args.project.clone().unwrap_or_default();
                ScreenModel::Preview(PreviewScreen::new(&project))
            },
            Screen::Generating => |_| ScreenModel::Generating(GeneratingScreen::new()),
            Screen::Complete => {
                |args| ScreenModel::Complete(CompleteScreen::new(args.project_name_or_default()))
            }
        }
    }

    pub fn build_screen(&self, screen: Screen, args: &ScreenArgs) -> ScreenModel {
        (self.screen_factory(screen))(args)
    }
}

impl Default for NavigationFlow {
    fn default() -> Self {
        Self::new()
    }
}
