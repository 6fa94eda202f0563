// ABOUTME: End-to-end wizard scenarios driven through the controller

mod helpers;

use crossterm::event::KeyCode;
use helpers::{
    add_app, complete, controller, controller_with, drive_to_add_apps, drive_to_preview, key,
    type_text, MockGenerator,
};
use pretty_assertions::assert_eq;
use tempfile::TempDir;
use teapot::app::{EventHandler, WizardController, WizardEvent};
use teapot::cache::RenderCache;
use teapot::generator::YamlGenerator;
use teapot::models::{AppKind, Architecture, CiProvider, LintingTool, Screen};
use teapot::screens::{AddAnotherAction, Completion, ScreenModel};

fn press(c: &mut WizardController, code: KeyCode) {
    if let Some(event) = EventHandler::handle_key_event(key(code), c) {
        EventHandler::process_event(event, c);
    }
}

fn press_n(c: &mut WizardController, code: KeyCode, times: usize) {
    for _ in 0..times {
        press(c, code);
    }
}

#[test]
fn test_continue_scenario_lands_on_dev_tools() {
    let mut c = controller();
    drive_to_add_apps(&mut c, "demo", Architecture::Turborepo);
    add_app(&mut c, AppKind::React, "web");
    complete(&mut c, Completion::AddAnotherSelected(AddAnotherAction::Continue));

    assert_eq!(c.current_screen(), Screen::DevTools);
    let apps = &c.state().project.applications;
    assert_eq!(apps.len(), 1);
    assert_eq!(apps[0].kind, AppKind::React);
    assert_eq!(apps[0].name, "web");
    assert!(c.state().current_app.is_none());
}

#[test]
fn test_add_scenario_returns_to_kind_selection() {
    let mut c = controller();
    drive_to_add_apps(&mut c, "demo", Architecture::Turborepo);
    add_app(&mut c, AppKind::React, "web");
    complete(&mut c, Completion::AddAnotherSelected(AddAnotherAction::Add));

    assert_eq!(c.current_screen(), Screen::AddApps);
    assert_eq!(c.state().project.app_count(), 1);
    match c.active_model() {
        Some(ScreenModel::AddApps(screen)) => assert_eq!(screen.selected(), None),
        _ => panic!("expected add apps"),
    }
}

#[test]
fn test_commit_then_back_restores_kind_and_count() {
    let mut c = controller();
    drive_to_add_apps(&mut c, "demo", Architecture::Turborepo);
    add_app(&mut c, AppKind::React, "web");
    complete(&mut c, Completion::AddAnotherSelected(AddAnotherAction::Add));

    let before = c.state().project.app_count();
    add_app(&mut c, AppKind::TanstackStart, "site");
    assert_eq!(c.state().project.app_count(), before + 1);

    c.handle_event(WizardEvent::Back);
    assert_eq!(c.current_screen(), Screen::AppConfig);
    assert_eq!(
        c.state().current_app.as_ref().map(|a| a.kind),
        Some(AppKind::TanstackStart)
    );
    assert_eq!(c.state().project.app_count(), before);
}

#[test]
fn test_repeated_round_trips_stay_consistent() {
    let mut c = controller();
    drive_to_add_apps(&mut c, "demo", Architecture::Turborepo);
    add_app(&mut c, AppKind::Nest, "api");

    for _ in 0..3 {
        c.handle_event(WizardEvent::Back);
        assert_eq!(c.state().project.app_count(), 0);
        complete(
            &mut c,
            Completion::AppConfigComplete {
                name: "api".into(),
                options: Default::default(),
            },
        );
        assert_eq!(c.state().project.app_count(), 1);
        assert_eq!(c.current_screen(), Screen::AddAnotherApp);
    }
}

#[test]
fn test_add_another_count_tracks_back_navigation() {
    let mut c = controller();
    drive_to_add_apps(&mut c, "demo", Architecture::Turborepo);
    add_app(&mut c, AppKind::React, "web");
    complete(&mut c, Completion::AddAnotherSelected(AddAnotherAction::Add));
    add_app(&mut c, AppKind::Nest, "api");

    // add another -> app config -> add apps -> add another
    c.handle_event(WizardEvent::Back);
    assert_eq!(c.current_screen(), Screen::AppConfig);
    c.handle_event(WizardEvent::Back);
    assert_eq!(c.current_screen(), Screen::AddApps);
    c.handle_event(WizardEvent::Back);
    assert_eq!(c.current_screen(), Screen::AddAnotherApp);

    assert_eq!(c.state().project.app_count(), 1);
    match c.active_model() {
        Some(ScreenModel::AddAnotherApp(screen)) => {
            assert_eq!(screen.app_count(), c.state().project.app_count());
        }
        _ => panic!("expected add another"),
    }
    assert!(c.render_screen().contains("1 application(s) configured"));
}

#[test]
fn test_app_config_title_counts_committed_apps() {
    let mut c = controller();
    drive_to_add_apps(&mut c, "demo", Architecture::Turborepo);
    add_app(&mut c, AppKind::React, "web");
    complete(&mut c, Completion::AddAnotherSelected(AddAnotherAction::Add));
    complete(&mut c, Completion::AppKindSelected(AppKind::Nest));

    assert!(c.render_screen().starts_with("Configure your Nest.js application (app #2)"));
}

#[test]
fn test_back_out_of_app_config_drops_in_progress_app() {
    let mut c = controller();
    drive_to_add_apps(&mut c, "demo", Architecture::Turborepo);
    complete(&mut c, Completion::AppKindSelected(AppKind::Expo));
    assert!(c.state().current_app.is_some());

    c.handle_event(WizardEvent::Back);
    assert_eq!(c.current_screen(), Screen::AddApps);
    assert!(c.state().current_app.is_none());
    assert!(c.state().project.applications.is_empty());

    c.handle_event(WizardEvent::Back);
    assert_eq!(c.current_screen(), Screen::Architecture);
}

#[test]
fn test_single_architecture_offers_only_continue() {
    let mut c = controller();
    drive_to_add_apps(&mut c, "solo", Architecture::Single);
    add_app(&mut c, AppKind::Next, "web");

    match c.active_model() {
        Some(ScreenModel::AddAnotherApp(screen)) => {
            assert_eq!(screen.options(), &[AddAnotherAction::Continue]);
        }
        _ => panic!("expected add another"),
    }
}

#[test]
fn test_continue_reuses_dev_tools_view() {
    let mut c = controller();
    drive_to_add_apps(&mut c, "demo", Architecture::Turborepo);
    add_app(&mut c, AppKind::React, "web");
    complete(&mut c, Completion::AddAnotherSelected(AddAnotherAction::Continue));

    // Move the cursor, leave and come back
    press(&mut c, KeyCode::Down);
    c.handle_event(WizardEvent::Back);
    assert_eq!(c.current_screen(), Screen::AddAnotherApp);
    complete(&mut c, Completion::AddAnotherSelected(AddAnotherAction::Continue));

    match c.active_model() {
        Some(ScreenModel::DevTools(screen)) => assert!(screen.render().starts_with("Code Quality")),
        _ => panic!("expected dev tools"),
    }
    assert!(c.render_screen().contains(">   Biome"));
}

#[test]
fn test_payloads_reach_project() {
    let mut c = controller();
    drive_to_add_apps(&mut c, "demo", Architecture::Turborepo);
    add_app(&mut c, AppKind::React, "web");
    complete(&mut c, Completion::AddAnotherSelected(AddAnotherAction::Continue));
    complete(&mut c, Completion::DevToolsSelected(LintingTool::Biome));

    let dev_tools = &c.state().project.dev_tools;
    assert_eq!(dev_tools.linting, Some(LintingTool::Biome));
    assert!(dev_tools.typescript && dev_tools.husky && dev_tools.lint_staged);
    assert_eq!(c.current_screen(), Screen::Infrastructure);
}

#[test]
fn test_keyboard_walkthrough_writes_artifact() {
    let dir = TempDir::new().unwrap();
    let mut c = WizardController::new(
        RenderCache::default(),
        Box::new(YamlGenerator::default()),
        dir.path(),
    );

    press(&mut c, KeyCode::Enter);
    assert_eq!(c.current_screen(), Screen::ProjectSetup);
    type_text(&mut c, "demo");
    press(&mut c, KeyCode::Enter);
    press(&mut c, KeyCode::Enter);
    assert_eq!(c.current_screen(), Screen::Architecture);

    press(&mut c, KeyCode::Enter);
    assert_eq!(c.current_screen(), Screen::AddApps);

    // Mark Next.js, then Continue
    press(&mut c, KeyCode::Down);
    press(&mut c, KeyCode::Enter);
    press_n(&mut c, KeyCode::Down, 5);
    press(&mut c, KeyCode::Enter);
    assert_eq!(c.current_screen(), Screen::AppConfig);

    press(&mut c, KeyCode::Enter);
    assert_eq!(c.current_screen(), Screen::AddAnotherApp);
    press(&mut c, KeyCode::Down);
    press(&mut c, KeyCode::Enter);
    assert_eq!(c.current_screen(), Screen::DevTools);

    press_n(&mut c, KeyCode::Down, 3);
    press(&mut c, KeyCode::Enter);
    assert_eq!(c.current_screen(), Screen::Infrastructure);

    press(&mut c, KeyCode::Char('s'));
    press(&mut c, KeyCode::Char('s'));
    press(&mut c, KeyCode::Char('s'));
    assert_eq!(c.current_screen(), Screen::Preview);
    assert_eq!(c.state().project.ci_pipeline.provider, Some(CiProvider::Skip));

    press(&mut c, KeyCode::Enter);
    assert_eq!(c.current_screen(), Screen::Generating);
    let written = std::fs::read_to_string(dir.path().join("teapot.yml")).unwrap();
    assert!(written.contains("name: demo"));
    assert!(written.contains("type: next"));

    for _ in 0..50 {
        c.handle_event(WizardEvent::Tick);
    }
    assert_eq!(c.current_screen(), Screen::Complete);
    assert!(c.render_screen().contains("cd demo"));

    press(&mut c, KeyCode::Enter);
    assert!(c.is_quitting());
}

#[test]
fn test_persist_failure_keeps_wizard_interactive() {
    let mut generator = MockGenerator::new();
    generator.expect_render().returning(|_| Ok(String::new()));
    generator.expect_persist().returning(|_, dir| {
        Err(teapot::generator::GeneratorError::Io {
            path: dir.to_path_buf(),
            source: std::io::Error::new(std::io::ErrorKind::Other, "disk full"),
        })
    });

    let mut c = controller_with(generator);
    drive_to_preview(&mut c);
    assert_eq!(c.current_screen(), Screen::Preview);

    complete(&mut c, Completion::PreviewContinue);
    assert_eq!(c.current_screen(), Screen::Preview);
    assert!(c.visible_error().is_some_and(|e| e.to_string().contains("disk full")));

    // still able to go back
    c.handle_event(WizardEvent::Back);
    assert_eq!(c.current_screen(), Screen::AiTools);
    assert!(c.visible_error().is_none());
}

#[test]
fn test_ctrl_c_stops_everything() {
    let mut c = controller();
    drive_to_add_apps(&mut c, "demo", Architecture::Turborepo);
    if let Some(event) = EventHandler::handle_key_event(helpers::ctrl('c'), &c) {
        EventHandler::process_event(event, &mut c);
    }
    assert!(c.is_quitting());

    complete(&mut c, Completion::AppKindSelected(AppKind::React));
    assert_eq!(c.current_screen(), Screen::AddApps);
    assert!(c.state().current_app.is_none());
}
