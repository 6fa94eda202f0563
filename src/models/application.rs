// ABOUTME: Application data model for a single app inside the generated monorepo
// ABOUTME: Includes the closed set of app kinds and the open per-kind option map

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AppKind {
    React,
    Next,
    TanstackStart,
    Expo,
    Nest,
    BasicNode,
}

impl AppKind {
    pub const fn all() -> [Self; 6] {
        [
            Self::React,
            Self::Next,
            Self::TanstackStart,
            Self::Expo,
            Self::Nest,
            Self::BasicNode,
        ]
    }

    pub const fn key(self) -> &'static str {
        match self {
            Self::React => "react",
            Self::Next => "next",
            Self::TanstackStart => "tanstack-start",
            Self::Expo => "expo",
            Self::Nest => "nest",
            Self::BasicNode => "basic-node",
        }
    }

    pub const fn display_name(self) -> &'static str {
        match self {
            Self::React => "React",
            Self::Next => "Next.js",
            Self::TanstackStart => "TanStack Start",
            Self::Expo => "Expo",
            Self::Nest => "Nest.js",
            Self::BasicNode => "Basic Node.js",
        }
    }

    pub const fn description(self) -> &'static str {
        match self {
            Self::React => "Client-side React application",
            Self::Next => "Full-stack React framework",
            Self::TanstackStart => "Modern full-stack React framework",
            Self::Expo => "React Native mobile application",
            Self::Nest => "Scalable Node.js server framework",
            Self::BasicNode => "Basic Node.js application",
        }
    }

    /// Name suggested for a new app of this kind; also its folder under `apps/`
    pub const fn default_name(self) -> &'static str {
        match self {
            Self::React | Self::Next | Self::TanstackStart => "web",
            Self::Expo => "mobile",
            Self::Nest | Self::BasicNode => "api",
        }
    }
}

impl Default for AppKind {
    fn default() -> Self {
        Self::React
    }
}

impl fmt::Display for AppKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for AppKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .into_iter()
            .find(|kind| kind.key() == s)
            .ok_or_else(|| format!("Unknown application kind: {s}"))
    }
}

/// A framework-specific option value
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OptionValue {
    Bool(bool),
    Text(String),
    List(Vec<String>),
}

impl OptionValue {
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(value) => Some(*value),
            _ => None,
        }
    }
}

impl From<bool> for OptionValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<&str> for OptionValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Application {
    pub id: String,
    pub name: String,
    pub kind: AppKind,
    pub description: String,
    pub options: BTreeMap<String, OptionValue>,
}

impl Application {
    pub fn new(kind: AppKind) -> Self {
        let short = Uuid::new_v4().simple().to_string();
        Self {
            id: format!("app-{}-{}", kind.key(), &short[..8]),
            name: kind.default_name().to_string(),
            kind,
            description: String::new(),
            options: BTreeMap::new(),
        }
    }

    /// Option keys whose value is `true`, in key order
    pub fn enabled_options(&self) -> Vec<&str> {
        self.options
            .iter()
            .filter(|(_, value)| value.as_bool() == Some(true))
            .map(|(key, _)| key.as_str())
            .collect()
    }
}
