// ABOUTME: AI editor selection; several editors may be picked, `s` skips

use crossterm::event::{KeyCode, KeyEvent};

use super::{move_cursor, Completion, ScreenEvent};
use crate::models::{AiEditor, AiTools};

#[derive(Debug, Clone, Default)]
pub struct AiToolsScreen {
    selected: [bool; 4],
    cursor: usize,
}

impl AiToolsScreen {
    pub const fn new() -> Self {
        Self {
            selected: [false; 4],
            cursor: 0,
        }
    }

    fn tools(&self) -> AiTools {
        let editors: Vec<AiEditor> = AiEditor::all()
            .into_iter()
            .zip(self.selected)
            .filter_map(|(editor, on)| on.then_some(editor))
            .collect();
        AiTools::from_editors(&editors)
    }

    pub fn update(&mut self, key: KeyEvent) -> Option<ScreenEvent> {
        if move_cursor(&mut self.cursor, self.selected.len() + 1, key) {
            return None;
        }
        match key.code {
            KeyCode::Char('s') => Some(ScreenEvent::Complete(Completion::AiToolsSelected(
                AiTools::none(),
            ))),
            KeyCode::Char(' ') | KeyCode::Enter => match self.selected.get_mut(self.cursor) {
                Some(flag) => {
                    *flag = !*flag;
                    None
                }
                None if key.code == KeyCode::Enter => {
                    Some(ScreenEvent::Complete(Completion::AiToolsSelected(self.tools())))
                }
                None => None,
            },
            _ => None,
        }
    }

    pub fn render(&self) -> String {
        let mut out = String::from("AI Development Tools\n\n");
        for (i, (editor, on)) in AiEditor::all().into_iter().zip(self.selected).enumerate() {
            let cursor = if i == self.cursor { ">" } else { " " };
            let check = if on { "☑" } else { "☐" };
            out.push_str(&format!(
                "{cursor} {check} {}\n      {} ({})\n",
                editor.display_name(),
                editor.description(),
                editor.extensions().join(", ")
            ));
        }
        let cursor = if self.cursor == self.selected.len() { ">" } else { " " };
        out.push_str(&format!("{cursor} → Continue\n\nSpace: toggle • s: skip AI tools"));
        out
    }
}
