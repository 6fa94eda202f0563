// ABOUTME: Project setup form collecting the project name and optional description
// ABOUTME: Validation errors render inline and block completion

use crossterm::event::{KeyCode, KeyEvent};

use super::text_input::TextInput;
use super::{Completion, ScreenEvent};
use crate::errors::WizardError;
use crate::validation::{
    validate_project_description, validate_project_name, MAX_DESCRIPTION_LEN, MAX_NAME_LEN,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    Name,
    Description,
}

#[derive(Debug, Clone)]
pub struct ProjectSetupScreen {
    name: TextInput,
    description: TextInput,
    focused: Field,
    error: Option<WizardError>,
}

impl ProjectSetupScreen {
    pub fn new() -> Self {
        Self {
            name: TextInput::new(MAX_NAME_LEN),
            description: TextInput::new(MAX_DESCRIPTION_LEN),
            focused: Field::Name,
            error: None,
        }
    }

    /// Form pre-filled with the project's current name and description
    pub fn with_values(name: &str, description: &str) -> Self {
        Self {
            name: TextInput::with_value(MAX_NAME_LEN, name),
            description: TextInput::with_value(MAX_DESCRIPTION_LEN, description),
            ..Self::new()
        }
    }

    pub const fn validation_error(&self) -> Option<&WizardError> {
        self.error.as_ref()
    }

    /// Backspace edits the focused field until it is empty
    pub fn consumes_backspace(&self) -> bool {
        match self.focused {
            Field::Name => !self.name.is_empty(),
            Field::Description => !self.description.is_empty(),
        }
    }

    pub fn update(&mut self, key: KeyEvent) -> Option<ScreenEvent> {
        match key.code {
            KeyCode::Enter => return self.submit(),
            KeyCode::Tab | KeyCode::BackTab => {
                self.focused = match self.focused {
                    Field::Name => Field::Description,
                    Field::Description => Field::Name,
                };
                self.error = None;
            }
            _ => {
                let input = match self.focused {
                    Field::Name => &mut self.name,
                    Field::Description => &mut self.description,
                };
                if input.handle_key(key) {
                    self.error = None;
                }
            }
        }
        None
    }

    fn submit(&mut self) -> Option<ScreenEvent> {
        if let Err(err) = validate_project_name(self.name.value()) {
            self.focused = Field::Name;
            self.error = Some(err);
            return None;
        }
        if self.focused == Field::Name {
            self.focused = Field::Description;
            self.error = None;
            return None;
        }
        if let Err(err) = validate_project_description(self.description.value()) {
            self.error = Some(err);
            return None;
        }
        self.error = None;
        Some(ScreenEvent::Complete(Completion::ProjectSetupComplete {
            name: self.name.value().to_string(),
            description: self.description.value().to_string(),
        }))
    }

    pub fn render(&self) -> String {
        let marker = |field: Field| if self.focused == field { ">" } else { " " };
        let mut out = String::from("Let's set up your project!\n\n");
        out.push_str("📝 Project name: (required)\n");
        out.push_str(&format!(
            "{} [{}]\n",
            marker(Field::Name),
            self.name.display(
                self.focused == Field::Name,
                "Enter project name (e.g., my-awesome-project)"
            )
        ));
        if let (Field::Name, Some(err)) = (self.focused, &self.error) {
            out.push_str(&format!("  ✗ {err}\n"));
        }
        out.push_str("\n📄 Description: (optional)\n");
        out.push_str(&format!(
            "{} [{}]\n",
            marker(Field::Description),
            self.description
                .display(self.focused == Field::Description, "Enter description (optional)")
        ));
        if let (Field::Description, Some(err)) = (self.focused, &self.error) {
            out.push_str(&format!("  ✗ {err}\n"));
        }
        out
    }
}

impl Default for ProjectSetupScreen {
    fn default() -> Self {
        Self::new()
    }
}
