// ABOUTME: Event handling: maps raw terminal input to wizard events, global keys first

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::debug;

use super::controller::WizardController;
use crate::models::Screen;
use crate::screens::ScreenEvent;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WizardEvent {
    Quit,
    Back,
    DismissError,
    Tick,
    Resize { width: u16, height: u16 },
    // Forwarded to the active screen's own update
    Key(KeyEvent),
    // Emitted by a specific screen
    Screen { screen: Screen, event: ScreenEvent },
}

pub struct EventHandler;

impl EventHandler {
    /// Global keys take priority over the active screen:
    /// ctrl+c quits anywhere, esc dismisses a visible error or quits,
    /// backspace goes back unless a text field wants it.
    pub fn handle_key_event(key_event: KeyEvent, controller: &WizardController) -> Option<WizardEvent> {
        if controller.is_quitting() {
            return None;
        }

        if key_event.modifiers.contains(KeyModifiers::CONTROL)
            && matches!(key_event.code, KeyCode::Char('c'))
        {
            return Some(WizardEvent::Quit);
        }

        match key_event.code {
            KeyCode::Esc => {
                if controller.visible_error().is_some() {
                    return Some(WizardEvent::DismissError);
                }
                match controller.current_screen() {
                    Screen::Generating | Screen::Complete => None,
                    _ => Some(WizardEvent::Quit),
                }
            }
            KeyCode::Backspace if !controller.active_consumes_backspace() => {
                if controller.can_navigate_back() {
                    Some(WizardEvent::Back)
                } else {
                    debug!(screen = %controller.current_screen(), "Backspace ignored");
                    None
                }
            }
            _ => Some(WizardEvent::Key(key_event)),
        }
    }

    pub const fn handle_resize(width: u16, height: u16) -> WizardEvent {
        WizardEvent::Resize { width, height }
    }

    pub fn process_event(event: WizardEvent, controller: &mut WizardController) {
        controller.handle_event(event);
    }
}
