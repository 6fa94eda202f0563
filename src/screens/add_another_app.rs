// ABOUTME: "Add another application?" prompt shown after each app is configured
// ABOUTME: Single-app projects only get the continue option

use crossterm::event::{KeyCode, KeyEvent};

use super::{move_cursor, AddAnotherAction, Completion, ScreenEvent};
use crate::models::Architecture;

#[derive(Debug, Clone)]
pub struct AddAnotherAppScreen {
    app_count: usize,
    architecture: Architecture,
    options: Vec<AddAnotherAction>,
    cursor: usize,
}

impl AddAnotherAppScreen {
    pub fn new(app_count: usize, architecture: Architecture) -> Self {
        let options = if architecture.allows_multiple_apps() {
            vec![AddAnotherAction::Add, AddAnotherAction::Continue]
        } else {
            vec![AddAnotherAction::Continue]
        };
        Self {
            app_count,
            architecture,
            options,
            cursor: 0,
        }
    }

    pub const fn app_count(&self) -> usize {
        self.app_count
    }

    pub fn options(&self) -> &[AddAnotherAction] {
        &self.options
    }

    pub fn update(&mut self, key: KeyEvent) -> Option<ScreenEvent> {
        if move_cursor(&mut self.cursor, self.options.len(), key) {
            return None;
        }
        match key.code {
            KeyCode::Enter => self
                .options
                .get(self.cursor)
                .map(|action| ScreenEvent::Complete(Completion::AddAnotherSelected(*action))),
            _ => None,
        }
    }

    pub fn render(&self) -> String {
        let mut out = String::from("Application Configuration Complete!\n\n");
        out.push_str(&format!("✓ {} application(s) configured\n", self.app_count));
        if self.architecture.allows_multiple_apps() {
            out.push_str("You can add multiple applications to your monorepo\n\n");
        } else {
            out.push_str("Note: Single app architecture selected - only one app allowed\n\n");
        }
        for (i, action) in self.options.iter().enumerate() {
            let cursor = if i == self.cursor { ">" } else { " " };
            let (icon, name, description) = match action {
                AddAnotherAction::Add => (
                    "+",
                    "Add Another App",
                    "Add another application to your monorepo",
                ),
                AddAnotherAction::Continue => (
                    "→",
                    "Continue to Dev Tools",
                    "Proceed with the current applications",
                ),
            };
            out.push_str(&format!("{cursor} {icon} {name}\n      {description}\n\n"));
        }
        out
    }
}
