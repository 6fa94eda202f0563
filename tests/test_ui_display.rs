// ABOUTME: Test UI display: layout renders the title, progress, screen, structure preview and help

mod helpers;

use helpers::{add_app, complete, controller, drive_to_add_apps};
use ratatui::{backend::TestBackend, Terminal};
use teapot::app::{WizardController, WizardEvent};
use teapot::components::{help_text, LayoutComponent};
use teapot::models::{AppKind, Architecture, Screen};
use teapot::screens::Completion;

fn draw(c: &mut WizardController, width: u16, height: u16) -> String {
    c.handle_event(WizardEvent::Resize { width, height });
    let backend = TestBackend::new(width, height);
    let mut terminal = Terminal::new(backend).unwrap();
    let mut layout = LayoutComponent::new();
    terminal.draw(|frame| layout.render(frame, c)).unwrap();

    let buffer = terminal.backend().buffer();
    buffer
        .content()
        .chunks(usize::from(width))
        .map(|row| row.iter().map(ratatui::buffer::Cell::symbol).collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn test_welcome_has_title_and_no_structure() {
    let mut c = controller();
    let content = draw(&mut c, 120, 40);
    assert!(content.contains("Modern Monorepo Builder"));
    assert!(!content.contains("Project Structure"));
    assert!(!content.contains("Step "));
}

#[test]
fn test_setup_screen_shows_placeholder_structure() {
    let mut c = controller();
    complete(&mut c, Completion::WelcomeComplete);
    let content = draw(&mut c, 140, 40);
    assert!(content.contains("Step 1 of 9"));
    assert!(content.contains("Project Structure"));
    assert!(content.contains("Make selections to see"));
}

#[test]
fn test_structure_lists_configured_apps() {
    let mut c = controller();
    drive_to_add_apps(&mut c, "demo", Architecture::Turborepo);
    add_app(&mut c, AppKind::Expo, "mobile");
    let content = draw(&mut c, 160, 45);
    assert!(content.contains("demo/"));
    assert!(content.contains("mobile/"));
    assert!(content.contains("metro.config.js"));
    assert!(content.contains("Step 4 of 9"));
}

#[test]
fn test_help_bar_matches_screen() {
    let mut c = controller();
    drive_to_add_apps(&mut c, "demo", Architecture::Turborepo);
    let content = draw(&mut c, 160, 40);
    assert_eq!(c.current_screen(), Screen::AddApps);
    assert!(content.contains("backspace: back"));
    assert!(help_text(Screen::AddApps).contains("navigate"));
}

#[test]
fn test_drawing_populates_render_cache() {
    let mut c = controller();
    complete(&mut c, Completion::WelcomeComplete);
    draw(&mut c, 140, 40);
    draw(&mut c, 140, 40);
    let stats = c.cache().stats();
    assert_eq!(stats.entries, 1);
    assert!(stats.total_hits >= 1);

    draw(&mut c, 100, 30);
    assert_eq!(c.cache().stats().entries, 2);
}

#[test]
fn test_validation_error_is_shown() {
    let mut c = controller();
    complete(&mut c, Completion::WelcomeComplete);
    complete(
        &mut c,
        Completion::ProjectSetupComplete {
            name: "a".into(),
            description: String::new(),
        },
    );
    let content = draw(&mut c, 140, 40);
    assert!(content.contains("✗"));
}

#[test]
fn test_nothing_drawn_after_quit() {
    let mut c = controller();
    c.handle_event(WizardEvent::Quit);
    let content = draw(&mut c, 80, 24);
    assert!(content.trim().is_empty());
}
