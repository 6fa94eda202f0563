// ABOUTME: Per-application configuration form: app name plus kind-specific feature toggles
// ABOUTME: Each app being configured gets its own fresh instance of this screen

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::BTreeMap;

use super::text_input::TextInput;
use super::{move_cursor, Completion, ScreenEvent};
use crate::models::{AppKind, Application, OptionValue};

const MAX_APP_NAME_LEN: usize = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeatureOption {
    pub key: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub default_on: bool,
}

const fn feature(key: &'static str, name: &'static str, description: &'static str, default_on: bool) -> FeatureOption {
    FeatureOption {
        key,
        name,
        description,
        default_on,
    }
}

const TAILWIND: FeatureOption = feature("tailwind", "Tailwind CSS", "Utility-first CSS framework", true);
const STRIPE: FeatureOption = feature("stripe", "Stripe Integration", "Payment processing with Stripe", false);

const REACT_OPTIONS: &[FeatureOption] = &[
    feature("google-auth", "Google OAuth", "Authentication with Google Sign-In", false),
    STRIPE,
    TAILWIND,
    feature("shadcn", "Shadcn/ui", "Beautiful component library", false),
    feature("router", "React Router", "Client-side routing", true),
];

const NEXT_OPTIONS: &[FeatureOption] = &[
    feature("auth-js", "Auth.js", "Complete authentication solution", false),
    STRIPE,
    TAILWIND,
    feature("app-router", "App Router", "New Next.js 13+ app directory", true),
    feature("vercel", "Vercel Deployment", "Optimized for Vercel hosting", false),
];

const TANSTACK_OPTIONS: &[FeatureOption] = &[
    feature("query", "TanStack Query", "Powerful data synchronization", true),
    feature("router", "TanStack Router", "Type-safe router", true),
    TAILWIND,
    feature("auth", "Authentication", "Built-in auth system", false),
];

const EXPO_OPTIONS: &[FeatureOption] = &[
    feature("expo-router", "Expo Router", "File-based routing for React Native", true),
    feature("tamagui", "Tamagui", "Universal UI system", false),
    feature("dev-tools", "Expo Dev Tools", "Enhanced development experience", true),
    feature("notifications", "Push Notifications", "Expo notifications service", false),
];

const NEST_OPTIONS: &[FeatureOption] = &[
    feature("prisma", "Prisma ORM", "Type-safe database access", false),
    feature("graphql", "GraphQL", "API with GraphQL", false),
    feature("auth", "JWT Authentication", "JSON Web Token authentication", false),
    feature("swagger", "Swagger/OpenAPI", "API documentation", true),
    feature("validation", "Class Validator", "Request validation", true),
];

const BASIC_NODE_OPTIONS: &[FeatureOption] = &[
    feature("express", "Express.js", "Fast web framework", true),
    feature("fastify", "Fastify", "Fast and low overhead web framework", false),
    feature("typescript", "TypeScript", "Static type checking", true),
    feature("auth", "Authentication", "Basic auth middleware", false),
];

pub const fn feature_options(kind: AppKind) -> &'static [FeatureOption] {
    match kind {
        AppKind::React => REACT_OPTIONS,
        AppKind::Next => NEXT_OPTIONS,
        AppKind::TanstackStart => TANSTACK_OPTIONS,
        AppKind::Expo => EXPO_OPTIONS,
        AppKind::Nest => NEST_OPTIONS,
        AppKind::BasicNode => BASIC_NODE_OPTIONS,
    }
}

fn is_app_name_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '-' || c == '_'
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Area {
    Name,
    Options,
}

#[derive(Debug, Clone)]
pub struct AppConfigScreen {
    kind: AppKind,
    name: TextInput,
    toggles: Vec<bool>,
    cursor: usize,
    focused: Area,
    /// Zero-based slot this app takes in the project's list
    position: usize,
}

impl AppConfigScreen {
    pub fn new(kind: AppKind) -> Self {
        Self {
            kind,
            name: TextInput::with_value(MAX_APP_NAME_LEN, kind.default_name()),
            toggles: feature_options(kind).iter().map(|o| o.default_on).collect(),
            cursor: 0,
            focused: Area::Name,
            position: 0,
        }
    }

    #[must_use]
    pub const fn with_position(mut self, position: usize) -> Self {
        self.position = position;
        self
    }

    pub const fn position(&self) -> usize {
        self.position
    }

    /// Seeds the form from an application being re-edited
    pub fn from_application(app: &Application) -> Self {
        let mut screen = Self::new(app.kind);
        screen.name.set_value(&app.name);
        for (toggle, option) in screen.toggles.iter_mut().zip(feature_options(app.kind)) {
            if let Some(value) = app.options.get(option.key).and_then(OptionValue::as_bool) {
                *toggle = value;
            }
        }
        screen
    }

    pub const fn kind(&self) -> AppKind {
        self.kind
    }

    pub fn name(&self) -> &str {
        self.name.value()
    }

    /// Backspace edits the name until it is empty
    pub fn consumes_backspace(&self) -> bool {
        self.focused == Area::Name && !self.name.is_empty()
    }

    pub fn update(&mut self, key: KeyEvent) -> Option<ScreenEvent> {
        match key.code {
            KeyCode::Tab | KeyCode::BackTab => {
                self.focused = match self.focused {
                    Area::Name => Area::Options,
                    Area::Options => Area::Name,
                };
                None
            }
            KeyCode::Enter => self.submit(),
            _ => {
                match self.focused {
                    Area::Name => {
                        let accepted = match key.code {
                            KeyCode::Char(c) => {
                                is_app_name_char(c) && !key.modifiers.contains(KeyModifiers::CONTROL)
                            }
                            _ => true,
                        };
                        if accepted {
                            self.name.handle_key(key);
                        }
                    }
                    Area::Options => {
                        if !move_cursor(&mut self.cursor, self.toggles.len(), key)
                            && key.code == KeyCode::Char(' ')
                        {
                            if let Some(toggle) = self.toggles.get_mut(self.cursor) {
                                *toggle = !*toggle;
                            }
                        }
                    }
                }
                None
            }
        }
    }

    fn submit(&self) -> Option<ScreenEvent> {
        if self.name.is_empty() {
            return None;
        }
        let options: BTreeMap<String, OptionValue> = feature_options(self.kind)
            .iter()
            .zip(&self.toggles)
            .map(|(option, on)| (option.key.to_string(), OptionValue::Bool(*on)))
            .collect();
        Some(ScreenEvent::Complete(Completion::AppConfigComplete {
            name: self.name.value().to_string(),
            options,
        }))
    }

    pub fn render(&self) -> String {
        let mut out = format!(
            "Configure your {} application (app #{})\n\n",
            self.kind.display_name(),
            self.position + 1
        );
        out.push_str("📝 Application name:\n");
        out.push_str(&format!(
            "  [{}]\n\n",
            self.name.display(self.focused == Area::Name, "")
        ));
        out.push_str("⚙️ Features & Integrations:\n");
        for (i, (option, on)) in feature_options(self.kind).iter().zip(&self.toggles).enumerate() {
            let cursor = if self.focused == Area::Options && i == self.cursor { ">" } else { " " };
            let check = if *on { "☑" } else { "☐" };
            out.push_str(&format!("{cursor} {check} {}\n", option.name));
            out.push_str(&format!("      {}\n", option.description));
        }
        out.push_str("\nTab: switch areas • Space: toggle features • Enter: save");
        out
    }
}
