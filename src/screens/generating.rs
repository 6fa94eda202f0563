// ABOUTME: Generation progress animation, advanced by ticks until it reaches 100%

use super::{Completion, ScreenEvent};

const STEPS: [(&str, &str); 7] = [
    ("Base project initialized", "Creating project structure"),
    ("Monorepo workspace configured", "Setting up workspace"),
    ("Apps scaffolded", "Generating applications"),
    ("Packages created", "Setting up shared packages"),
    ("Installing dependencies", "Running package manager"),
    ("Setting up Git hooks", "Configuring development tools"),
    ("Configuring CI/CD", "Setting up automation"),
];

const PROGRESS_PER_TICK: u8 = 2;
const BAR_WIDTH: usize = 40;

#[derive(Debug, Clone, Default)]
pub struct GeneratingScreen {
    progress: u8,
    done: bool,
}

impl GeneratingScreen {
    pub const fn new() -> Self {
        Self {
            progress: 0,
            done: false,
        }
    }

    pub const fn progress(&self) -> u8 {
        self.progress
    }

    pub const fn is_done(&self) -> bool {
        self.done
    }

    /// Index of the step currently running
    fn current_step(&self) -> usize {
        (usize::from(self.progress) * STEPS.len() / 100).min(STEPS.len() - 1)
    }

    /// Advances the animation. Emits `GenerationComplete` exactly once.
    pub fn tick(&mut self) -> Option<ScreenEvent> {
        if self.done {
            return None;
        }
        self.progress = (self.progress + PROGRESS_PER_TICK).min(100);
        if self.progress >= 100 {
            self.done = true;
            return Some(ScreenEvent::Complete(Completion::GenerationComplete));
        }
        None
    }

    pub fn render(&self) -> String {
        let mut out = String::from("🫖 Generating your project...\n\n");
        let filled = BAR_WIDTH * usize::from(self.progress) / 100;
        out.push_str(&format!(
            "[{}{}]\n",
            "█".repeat(filled),
            "░".repeat(BAR_WIDTH - filled)
        ));
        let status = if self.done {
            "Project generation complete!"
        } else {
            STEPS[self.current_step()].1
        };
        out.push_str(&format!("{status} {}%\n\n", self.progress));

        let current = self.current_step();
        for (i, (name, _)) in STEPS.iter().enumerate() {
            let icon = if self.done || i < current {
                "✓"
            } else if i == current {
                "⟳"
            } else {
                "○"
            };
            out.push_str(&format!("{icon} {name}\n"));
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fifty_ticks_complete() {
        let mut screen = GeneratingScreen::new();
        for _ in 0..49 {
            assert_eq!(screen.tick(), None);
        }
        assert_eq!(screen.progress(), 98);
        assert_eq!(
            screen.tick(),
            Some(ScreenEvent::Complete(Completion::GenerationComplete))
        );
        assert!(screen.is_done());
        assert_eq!(screen.tick(), None);
        assert_eq!(screen.progress(), 100);
    }

    #[test]
    fn test_render_progress() {
        let mut screen = GeneratingScreen::new();
        assert!(screen.render().contains("⟳ Base project initialized"));
        for _ in 0..25 {
            screen.tick();
        }
        let rendered = screen.render();
        assert!(rendered.contains("50%"));
        assert!(rendered.contains("✓ Base project initialized"));
    }
}
