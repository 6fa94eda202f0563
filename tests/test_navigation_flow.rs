// ABOUTME: Tests for the navigation tables, back navigation and the screen factory

use pretty_assertions::assert_eq;
use teapot::models::{AppKind, Application, Screen, WizardState};
use teapot::navigation::{NavigationFlow, ScreenArgs, ScreenPolicy};
use teapot::screens::{CompletionKind, ScreenModel};

fn committed(kinds: &[AppKind]) -> WizardState {
    let mut state = WizardState::new();
    for kind in kinds {
        state.project.applications.push(Application::new(*kind));
    }
    state.current_screen = Screen::AddAnotherApp;
    state
}

#[test]
fn test_no_back_from_commitment_points() {
    let flow = NavigationFlow::new();
    for screen in [Screen::Welcome, Screen::Generating, Screen::Complete] {
        let mut state = committed(&[AppKind::React]);
        state.current_screen = screen;
        let outcome = flow.navigate_back(screen, state.clone());
        assert!(!flow.can_navigate_back(screen));
        assert_eq!(outcome.state, state);
        assert_eq!(outcome.screen, screen);
        assert!(!outcome.rebuild_view);
    }
}

#[test]
fn test_back_from_welcome_leaves_state_untouched() {
    let flow = NavigationFlow::new();
    let state = WizardState::new();
    let outcome = flow.navigate_back(Screen::Welcome, state.clone());
    assert_eq!(outcome.state, state);
    assert_eq!(outcome.screen, Screen::Welcome);
}

#[test]
fn test_uncommit_touches_only_last_app() {
    let flow = NavigationFlow::new();
    let state = committed(&[AppKind::Next, AppKind::Nest, AppKind::Expo]);
    let first_two: Vec<_> = state.project.applications[..2].to_vec();

    let outcome = flow.navigate_back(Screen::AddAnotherApp, state);
    assert_eq!(outcome.screen, Screen::AppConfig);
    assert_eq!(outcome.state.project.applications, first_two);
    assert_eq!(
        outcome.state.current_app.as_ref().map(|a| a.kind),
        Some(AppKind::Expo)
    );
}

#[test]
fn test_rebuilt_view_is_seeded_with_restored_app() {
    let flow = NavigationFlow::new();
    let mut state = committed(&[]);
    let mut app = Application::new(AppKind::Nest);
    app.name = "backend".into();
    state.project.applications.push(app);

    let outcome = flow.navigate_back(Screen::AddAnotherApp, state);
    assert!(outcome.rebuild_view);

    let model = flow.build_screen(outcome.screen, &ScreenArgs::from_state(&outcome.state));
    match model {
        ScreenModel::AppConfig(screen) => {
            assert_eq!(screen.kind(), AppKind::Nest);
            assert_eq!(screen.name(), "backend");
        }
        other => panic!("expected app config, got {:?}", other.screen()),
    }
}

#[test]
fn test_add_apps_predecessor() {
    let flow = NavigationFlow::new();
    assert_eq!(
        flow.previous_screen(Screen::AddApps, &WizardState::new()),
        Screen::Architecture
    );
    assert_eq!(
        flow.previous_screen(Screen::AddApps, &committed(&[AppKind::React])),
        Screen::AddAnotherApp
    );
}

#[test]
fn test_unrecognized_event_stays_put() {
    let flow = NavigationFlow::new();
    assert_eq!(
        flow.next_screen_by_name(Screen::Welcome, "UnrecognizedEvent"),
        Screen::Welcome
    );
    assert_eq!(
        flow.next_screen(Screen::Welcome, CompletionKind::PreviewContinue),
        Screen::Welcome
    );
}

#[test]
fn test_full_forward_path() {
    let flow = NavigationFlow::new();
    let path = [
        (Screen::Welcome, CompletionKind::WelcomeComplete, Screen::ProjectSetup),
        (Screen::ProjectSetup, CompletionKind::ProjectSetupComplete, Screen::Architecture),
        (Screen::Architecture, CompletionKind::ArchitectureSelected, Screen::AddApps),
        (Screen::AddApps, CompletionKind::AppKindSelected, Screen::AppConfig),
        (Screen::AppConfig, CompletionKind::AppConfigComplete, Screen::AddAnotherApp),
        (Screen::DevTools, CompletionKind::DevToolsSelected, Screen::Infrastructure),
        (Screen::Infrastructure, CompletionKind::InfrastructureSelected, Screen::CiPipeline),
        (Screen::CiPipeline, CompletionKind::CiPipelineSelected, Screen::AiTools),
        (Screen::AiTools, CompletionKind::AiToolsSelected, Screen::Preview),
        (Screen::Preview, CompletionKind::PreviewContinue, Screen::Generating),
        (Screen::Generating, CompletionKind::GenerationComplete, Screen::Complete),
    ];
    for (from, kind, to) in path {
        assert_eq!(flow.next_screen(from, kind), to, "{from} on {kind}");
        assert_eq!(flow.next_screen_by_name(from, kind.name()), to);
    }
}

#[test]
fn test_policies() {
    let flow = NavigationFlow::new();
    let policy = |from, kind| flow.transition(from, kind).map(|t| t.policy);

    assert_eq!(
        policy(Screen::AddAnotherApp, CompletionKind::AddAnotherSelected),
        Some(ScreenPolicy::AlwaysRecreate)
    );
    assert_eq!(
        policy(Screen::AppConfig, CompletionKind::AppConfigComplete),
        Some(ScreenPolicy::RecreateWithParams)
    );
    assert_eq!(
        policy(Screen::DevTools, CompletionKind::DevToolsSelected),
        Some(ScreenPolicy::Reuse)
    );
}

#[test]
fn test_every_backward_target_can_be_built() {
    let flow = NavigationFlow::new();
    let state = committed(&[AppKind::React]);
    for screen in Screen::all() {
        let previous = flow.previous_screen(screen, &state);
        let model = flow.build_screen(previous, &ScreenArgs::from_state(&state));
        assert_eq!(model.screen(), previous);
    }
}
