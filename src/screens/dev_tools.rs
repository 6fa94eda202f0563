// ABOUTME: Linting and formatting toolchain choice; Continue confirms the pick

use crossterm::event::{KeyCode, KeyEvent};

use super::{move_cursor, Completion, ScreenEvent};
use crate::models::LintingTool;

const INCLUDED_TOOLS: [&str; 4] = [
    "✓ TypeScript configuration",
    "✓ Git hooks setup (Husky)",
    "✓ Pre-commit linting (lint-staged)",
    "✓ Editor configuration (.editorconfig)",
];

#[derive(Debug, Clone, Default)]
pub struct DevToolsScreen {
    cursor: usize,
    selected: Option<LintingTool>,
}

impl DevToolsScreen {
    pub const fn new() -> Self {
        Self {
            cursor: 0,
            selected: None,
        }
    }

    fn row_count() -> usize {
        LintingTool::all().len() + 1
    }

    pub fn update(&mut self, key: KeyEvent) -> Option<ScreenEvent> {
        if move_cursor(&mut self.cursor, Self::row_count(), key) {
            return None;
        }
        if key.code != KeyCode::Enter {
            return None;
        }
        match LintingTool::all().get(self.cursor) {
            Some(tool) => {
                self.selected = Some(*tool);
                None
            }
            None => Some(ScreenEvent::Complete(Completion::DevToolsSelected(
                self.selected.unwrap_or_default(),
            ))),
        }
    }

    pub fn render(&self) -> String {
        let mut out = String::from("Code Quality & Formatting\n\n");
        for (i, tool) in LintingTool::all().into_iter().enumerate() {
            let cursor = if i == self.cursor { ">" } else { " " };
            let check = if self.selected == Some(tool) { "●" } else { " " };
            out.push_str(&format!("{cursor} {check} {}\n", tool.display_name()));
            out.push_str(&format!("      {}\n", tool.description()));
        }
        let cursor = if self.cursor == LintingTool::all().len() { ">" } else { " " };
        out.push_str(&format!("{cursor} → Continue\n\n"));
        out.push_str("📦 Additional Tools (will be included):\n");
        for tool in INCLUDED_TOOLS {
            out.push_str(&format!("  {tool}\n"));
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn go_to_continue(screen: &mut DevToolsScreen) {
        for _ in 0..10 {
            screen.update(key(KeyCode::Down));
        }
    }

    #[test]
    fn test_continue_defaults_to_prettier_eslint() {
        let mut screen = DevToolsScreen::new();
        go_to_continue(&mut screen);
        assert_eq!(
            screen.update(key(KeyCode::Enter)),
            Some(ScreenEvent::Complete(Completion::DevToolsSelected(
                LintingTool::PrettierEslint
            )))
        );
    }

    #[test]
    fn test_pick_biome() {
        let mut screen = DevToolsScreen::new();
        screen.update(key(KeyCode::Down));
        screen.update(key(KeyCode::Enter));
        go_to_continue(&mut screen);
        assert_eq!(
            screen.update(key(KeyCode::Enter)),
            Some(ScreenEvent::Complete(Completion::DevToolsSelected(LintingTool::Biome)))
        );
    }
}
