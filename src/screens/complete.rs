// ABOUTME: Final screen with next steps; enter or q exits

use crossterm::event::{KeyCode, KeyEvent};

use super::ScreenEvent;

#[derive(Debug, Clone)]
pub struct CompleteScreen {
    project_name: String,
}

impl CompleteScreen {
    pub fn new(project_name: impl Into<String>) -> Self {
        Self {
            project_name: project_name.into(),
        }
    }

    pub fn project_name(&self) -> &str {
        &self.project_name
    }

    pub fn update(&mut self, key: KeyEvent) -> Option<ScreenEvent> {
        match key.code {
            KeyCode::Enter | KeyCode::Char('q') => Some(ScreenEvent::Quit),
            _ => None,
        }
    }

    pub fn render(&self) -> String {
        let name = &self.project_name;
        format!(
            "✨ Project created successfully!\n\n\
             Your project is ready at:\n./{name}\n\n\
             Next steps:\n1. cd {name}\n2. pnpm install\n3. pnpm dev\n\n\
             Available commands:\n\
             • pnpm dev      - Start all apps\n\
             • pnpm build    - Build all apps\n\
             • pnpm lint     - Lint all packages\n\
             • pnpm test     - Run tests\n\n\
             Happy coding! 🚀"
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    #[test]
    fn test_quit_keys() {
        let mut screen = CompleteScreen::new("demo");
        assert_eq!(
            screen.update(KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE)),
            Some(ScreenEvent::Quit)
        );
        assert_eq!(
            screen.update(KeyEvent::new(KeyCode::Char('x'), KeyModifiers::NONE)),
            None
        );
        assert!(screen.render().contains("cd demo"));
    }
}
