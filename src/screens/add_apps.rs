// ABOUTME: Application kind picker; enter marks a kind, enter on Continue confirms it

use crossterm::event::{KeyCode, KeyEvent};

use super::{move_cursor, Completion, ScreenEvent};
use crate::models::AppKind;

#[derive(Debug, Clone, Default)]
pub struct AddAppsScreen {
    cursor: usize,
    selected: Option<AppKind>,
}

impl AddAppsScreen {
    pub const fn new() -> Self {
        Self {
            cursor: 0,
            selected: None,
        }
    }

    /// Kinds plus the trailing Continue row
    fn row_count() -> usize {
        AppKind::all().len() + 1
    }

    pub const fn selected(&self) -> Option<AppKind> {
        self.selected
    }

    pub fn update(&mut self, key: KeyEvent) -> Option<ScreenEvent> {
        if move_cursor(&mut self.cursor, Self::row_count(), key) {
            return None;
        }
        if key.code != KeyCode::Enter {
            return None;
        }
        match AppKind::all().get(self.cursor) {
            Some(kind) => {
                self.selected = Some(*kind);
                None
            }
            None => self
                .selected
                .map(|kind| ScreenEvent::Complete(Completion::AppKindSelected(kind))),
        }
    }

    pub fn render(&self) -> String {
        let mut out = String::from("Choose your application type:\n\n");
        for (i, kind) in AppKind::all().into_iter().enumerate() {
            let cursor = if i == self.cursor { ">" } else { " " };
            let check = if self.selected == Some(kind) { "●" } else { " " };
            out.push_str(&format!("{cursor} {check} {}\n", kind.display_name()));
            out.push_str(&format!("      {}\n", kind.description()));
        }
        let cursor = if self.cursor == AppKind::all().len() { ">" } else { " " };
        out.push_str(&format!("{cursor} → Continue\n"));
        out.push_str("      Proceed with selected application\n");
        out
    }
}
