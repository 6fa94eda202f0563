// ABOUTME: Tests for global key handling so keyboard input maps to the right wizard events

mod helpers;

use crossterm::event::KeyCode;
use helpers::{
    complete, controller, controller_with, ctrl, drive_to_add_apps, drive_to_preview, key,
    succeeding_generator, type_text,
};
use teapot::app::{EventHandler, WizardEvent};
use teapot::models::{AppKind, Architecture, Screen};
use teapot::screens::Completion;

#[test]
fn test_quit_key_events() {
    let c = controller();
    assert_eq!(EventHandler::handle_key_event(ctrl('c'), &c), Some(WizardEvent::Quit));
    assert_eq!(
        EventHandler::handle_key_event(key(KeyCode::Esc), &c),
        Some(WizardEvent::Quit)
    );
}

#[test]
fn test_esc_dismisses_error_before_quitting() {
    let mut c = controller();
    complete(&mut c, Completion::WelcomeComplete);
    // Too short to be a project name
    complete(
        &mut c,
        Completion::ProjectSetupComplete {
            name: "a".into(),
            description: String::new(),
        },
    );
    assert!(c.visible_error().is_some());

    let event = EventHandler::handle_key_event(key(KeyCode::Esc), &c);
    assert_eq!(event, Some(WizardEvent::DismissError));
    EventHandler::process_event(WizardEvent::DismissError, &mut c);
    assert!(c.visible_error().is_none());
    assert!(!c.is_quitting());

    assert_eq!(
        EventHandler::handle_key_event(key(KeyCode::Esc), &c),
        Some(WizardEvent::Quit)
    );
}

#[test]
fn test_esc_quits_mid_wizard() {
    let mut c = controller();
    drive_to_add_apps(&mut c, "demo", Architecture::Turborepo);
    helpers::add_app(&mut c, AppKind::React, "web");
    complete(
        &mut c,
        Completion::AddAnotherSelected(teapot::screens::AddAnotherAction::Continue),
    );
    assert_eq!(c.current_screen(), Screen::DevTools);
    assert_eq!(
        EventHandler::handle_key_event(key(KeyCode::Esc), &c),
        Some(WizardEvent::Quit)
    );
}

#[test]
fn test_backspace_edits_text_until_empty() {
    let mut c = controller();
    complete(&mut c, Completion::WelcomeComplete);
    type_text(&mut c, "ab");

    for _ in 0..2 {
        let event = EventHandler::handle_key_event(key(KeyCode::Backspace), &c);
        assert_eq!(event, Some(WizardEvent::Key(key(KeyCode::Backspace))));
        EventHandler::process_event(event.unwrap(), &mut c);
    }

    let event = EventHandler::handle_key_event(key(KeyCode::Backspace), &c);
    assert_eq!(event, Some(WizardEvent::Back));
    EventHandler::process_event(event.unwrap(), &mut c);
    assert_eq!(c.current_screen(), Screen::Welcome);
}

#[test]
fn test_backspace_navigates_back_on_list_screens() {
    let mut c = controller();
    drive_to_add_apps(&mut c, "demo", Architecture::Turborepo);
    assert_eq!(
        EventHandler::handle_key_event(key(KeyCode::Backspace), &c),
        Some(WizardEvent::Back)
    );
}

#[test]
fn test_navigation_keys_are_forwarded() {
    let mut c = controller();
    drive_to_add_apps(&mut c, "demo", Architecture::Turborepo);
    for code in [KeyCode::Down, KeyCode::Up, KeyCode::Char('j'), KeyCode::Enter] {
        assert_eq!(
            EventHandler::handle_key_event(key(code), &c),
            Some(WizardEvent::Key(key(code)))
        );
    }
}

#[test]
fn test_resize_event() {
    let mut c = controller();
    EventHandler::process_event(EventHandler::handle_resize(132, 43), &mut c);
    assert_eq!(c.viewport(), (132, 43));
}

#[test]
fn test_esc_ignored_while_generating() {
    let mut c = controller_with(succeeding_generator());
    drive_to_preview(&mut c);
    complete(&mut c, Completion::PreviewContinue);
    assert_eq!(c.current_screen(), Screen::Generating);

    assert_eq!(EventHandler::handle_key_event(key(KeyCode::Esc), &c), None);
    assert_eq!(EventHandler::handle_key_event(key(KeyCode::Backspace), &c), None);
    assert_eq!(
        EventHandler::handle_key_event(ctrl('c'), &c),
        Some(WizardEvent::Quit)
    );
}
