// ABOUTME: Preview of the generated teapot.yml with save, continue and back actions
// ABOUTME: Rebuilt from a project snapshot every time the wizard enters it

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::{move_cursor, Completion, ScreenEvent};
use crate::generator;
use crate::models::ProjectConfig;

const DEFAULT_VISIBLE_LINES: usize = 20;
const MIN_VISIBLE_LINES: usize = 5;
/// Rows taken by the header, actions and help around the YAML body
const CHROME_ROWS: usize = 14;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreviewAction {
    Save,
    Continue,
    Back,
}

impl PreviewAction {
    const ALL: [Self; 3] = [Self::Save, Self::Continue, Self::Back];

    const fn label(self) -> &'static str {
        match self {
            Self::Save => "💾 Save teapot.yml",
            Self::Continue => "🚀 Continue to Generation",
            Self::Back => "← Back to Edit",
        }
    }
}

#[derive(Debug, Clone)]
pub struct PreviewScreen {
    project_name: String,
    yaml: Vec<String>,
    scroll: usize,
    visible_lines: usize,
    cursor: usize,
    status: Option<String>,
}

impl PreviewScreen {
    pub fn new(project: &ProjectConfig) -> Self {
        let yaml = generator::to_yaml(project)
            .unwrap_or_else(|err| format!("Error generating YAML: {err}"));
        Self {
            project_name: project.name.clone(),
            yaml: yaml
                .lines()
                .filter(|line| !line.trim().is_empty())
                .map(str::to_string)
                .collect(),
            scroll: 0,
            visible_lines: DEFAULT_VISIBLE_LINES,
            cursor: 1,
            status: None,
        }
    }

    pub const fn visible_lines(&self) -> usize {
        self.visible_lines
    }

    pub fn set_size(&mut self, _width: u16, height: u16) {
        self.visible_lines = usize::from(height)
            .saturating_sub(CHROME_ROWS)
            .max(MIN_VISIBLE_LINES);
        self.scroll = self.scroll.min(self.max_scroll());
    }

    /// Message shown under the actions, e.g. where the file was saved
    pub fn set_status(&mut self, status: impl Into<String>) {
        self.status = Some(status.into());
    }

    pub const fn scroll(&self) -> usize {
        self.scroll
    }

    fn max_scroll(&self) -> usize {
        self.yaml.len().saturating_sub(self.visible_lines)
    }

    pub fn update(&mut self, key: KeyEvent) -> Option<ScreenEvent> {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            match key.code {
                KeyCode::Char('j') => self.scroll = (self.scroll + 1).min(self.max_scroll()),
                KeyCode::Char('k') => self.scroll = self.scroll.saturating_sub(1),
                _ => {}
            }
            return None;
        }
        if move_cursor(&mut self.cursor, PreviewAction::ALL.len(), key) {
            return None;
        }
        if key.code != KeyCode::Enter {
            return None;
        }
        match PreviewAction::ALL.get(self.cursor)? {
            PreviewAction::Save => Some(ScreenEvent::Save),
            PreviewAction::Continue => Some(ScreenEvent::Complete(Completion::PreviewContinue)),
            PreviewAction::Back => Some(ScreenEvent::Back),
        }
    }

    pub fn render(&self) -> String {
        let mut out = String::from("📄 Configuration Preview\n\n");
        out.push_str(&format!("✓ Project: {}\n\n", self.project_name));

        let end = (self.scroll + self.visible_lines).min(self.yaml.len());
        for line in &self.yaml[self.scroll..end] {
            out.push_str("  ");
            out.push_str(line);
            out.push('\n');
        }
        if self.yaml.len() > self.visible_lines {
            out.push_str(&format!(
                "(Showing {}-{} of {} lines - Use Ctrl+J/K to scroll)\n",
                self.scroll + 1,
                end,
                self.yaml.len()
            ));
        }
        out.push('\n');
        for (i, action) in PreviewAction::ALL.into_iter().enumerate() {
            let cursor = if i == self.cursor { ">" } else { " " };
            out.push_str(&format!("{cursor} {}\n", action.label()));
        }
        if let Some(status) = &self.status {
            out.push_str(&format!("\n{status}\n"));
        }
        out
    }
}
