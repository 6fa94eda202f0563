// ABOUTME: Welcome screen introducing teapot; enter or space starts the wizard

use crossterm::event::{KeyCode, KeyEvent};

use super::{Completion, ScreenEvent};

const FEATURES: [&str; 5] = [
    "🚀 Modern tech stack (React, Next.js, TanStack, Expo)",
    "🛠️ Development tools (ESLint, Prettier, Biome)",
    "🐳 Infrastructure setup (Docker, Pulumi, Terraform)",
    "⚡ CI/CD pipelines (GitHub Actions, GitLab CI)",
    "🤖 AI tooling integration (Claude, Cursor, Windsurf)",
];

#[derive(Debug, Clone, Default)]
pub struct WelcomeScreen;

impl WelcomeScreen {
    pub const fn new() -> Self {
        Self
    }

    pub fn update(&mut self, key: KeyEvent) -> Option<ScreenEvent> {
        match key.code {
            KeyCode::Enter | KeyCode::Char(' ') => {
                Some(ScreenEvent::Complete(Completion::WelcomeComplete))
            }
            _ => None,
        }
    }

    pub fn render(&self) -> String {
        let mut out = String::from("Welcome to Teapot! 🫖\n\n");
        out.push_str("The modern monorepo builder for full-stack developers\n\n");
        for feature in FEATURES {
            out.push_str("  ");
            out.push_str(feature);
            out.push('\n');
        }
        out.push_str("\nReady to build something amazing? Press enter to start.");
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    #[test]
    fn test_enter_completes() {
        let mut screen = WelcomeScreen::new();
        let event = screen.update(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE));
        assert_eq!(event, Some(ScreenEvent::Complete(Completion::WelcomeComplete)));
        assert_eq!(screen.update(KeyEvent::new(KeyCode::Char('x'), KeyModifiers::NONE)), None);
    }
}
