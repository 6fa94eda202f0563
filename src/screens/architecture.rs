// ABOUTME: Architecture choice: Turborepo monorepo, single app, or Nx (not yet available)

use crossterm::event::{KeyCode, KeyEvent};

use super::{move_cursor, Completion, ScreenEvent};
use crate::models::Architecture;

#[derive(Debug, Clone, Default)]
pub struct ArchitectureScreen {
    cursor: usize,
}

impl ArchitectureScreen {
    pub const fn new() -> Self {
        Self { cursor: 0 }
    }

    pub fn highlighted(&self) -> Architecture {
        Architecture::all()[self.cursor]
    }

    pub fn update(&mut self, key: KeyEvent) -> Option<ScreenEvent> {
        if move_cursor(&mut self.cursor, Architecture::all().len(), key) {
            return None;
        }
        match key.code {
            KeyCode::Enter if self.highlighted().is_available() => Some(ScreenEvent::Complete(
                Completion::ArchitectureSelected(self.highlighted()),
            )),
            _ => None,
        }
    }

    pub fn render(&self) -> String {
        let mut out = String::from("Choose your project architecture:\n\n");
        for (i, arch) in Architecture::all().into_iter().enumerate() {
            let bullet = if i == self.cursor { "●" } else { " " };
            let suffix = if arch.is_available() { "" } else { " 🚧" };
            out.push_str(&format!("  {bullet} {}{suffix}\n", arch.display_name()));
            out.push_str(&format!("      {}\n", arch.description()));
        }
        out
    }
}
