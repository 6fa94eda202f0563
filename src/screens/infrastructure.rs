// ABOUTME: Infrastructure toggles (Docker, Compose, Pulumi, Terraform); `s` skips

use crossterm::event::{KeyCode, KeyEvent};

use super::{move_cursor, Completion, ScreenEvent};
use crate::models::Infrastructure;

const OPTIONS: [(&str, &str); 4] = [
    ("Docker", "Containerize your applications"),
    ("Docker Compose", "Multi-container development setup"),
    ("Pulumi", "Infrastructure as Code for Kubernetes"),
    ("Terraform", "Infrastructure as Code for cloud resources"),
];

#[derive(Debug, Clone, Default)]
pub struct InfrastructureScreen {
    selected: [bool; 4],
    cursor: usize,
}

impl InfrastructureScreen {
    pub const fn new() -> Self {
        Self {
            selected: [false; 4],
            cursor: 0,
        }
    }

    fn infrastructure(&self) -> Infrastructure {
        let [docker, docker_compose, pulumi, terraform] = self.selected;
        Infrastructure {
            docker,
            docker_compose,
            pulumi,
            terraform,
            cloud_provider: None,
        }
    }

    pub fn update(&mut self, key: KeyEvent) -> Option<ScreenEvent> {
        if move_cursor(&mut self.cursor, OPTIONS.len() + 1, key) {
            return None;
        }
        match key.code {
            KeyCode::Char('s') => Some(ScreenEvent::Complete(Completion::InfrastructureSelected(
                Infrastructure::default(),
            ))),
            KeyCode::Char(' ') | KeyCode::Enter => match self.selected.get_mut(self.cursor) {
                Some(flag) => {
                    *flag = !*flag;
                    None
                }
                None if key.code == KeyCode::Enter => Some(ScreenEvent::Complete(
                    Completion::InfrastructureSelected(self.infrastructure()),
                )),
                None => None,
            },
            _ => None,
        }
    }

    pub fn render(&self) -> String {
        let mut out = String::from("Infrastructure & Deployment\n\n");
        for (i, ((name, description), on)) in OPTIONS.iter().zip(self.selected).enumerate() {
            let cursor = if i == self.cursor { ">" } else { " " };
            let check = if on { "☑" } else { "☐" };
            out.push_str(&format!("{cursor} {check} {name}\n      {description}\n"));
        }
        let cursor = if self.cursor == OPTIONS.len() { ">" } else { " " };
        out.push_str(&format!("{cursor} → Continue\n\n"));
        out.push_str("Space: toggle • s: skip");
        out
    }
}
