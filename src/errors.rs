// ABOUTME: Error taxonomy for the wizard and a bounded log of surfaced errors
// ABOUTME: Validation and navigation stay local; rendering recovers; system failures are shown

use chrono::{DateTime, Utc};
use std::collections::VecDeque;
use std::fmt;
use thiserror::Error;

use crate::models::Screen;

/// Default number of errors kept in the log
pub const DEFAULT_ERROR_LOG_SIZE: usize = 50;

/// Errors raised while driving the wizard
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WizardError {
    /// A field value was rejected before reaching the project config
    #[error("{0}")]
    Validation(String),

    /// An event arrived for a screen other than the active one
    #[error("Event {event} does not apply to screen {screen}")]
    Navigation { screen: Screen, event: String },

    /// Building the preview panicked
    #[error("Rendering failed: {0}")]
    Rendering(String),

    /// The artifact generator or the filesystem failed
    #[error("{0}")]
    System(String),
}

impl WizardError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Validation(_) => ErrorKind::Validation,
            Self::Navigation { .. } => ErrorKind::Navigation,
            Self::Rendering(_) => ErrorKind::Rendering,
            Self::System(_) => ErrorKind::System,
        }
    }
}

pub type WizardResult<T> = Result<T, WizardError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    Validation,
    Navigation,
    Rendering,
    System,
}

impl ErrorKind {
    /// Whether the wizard can carry on by itself after this kind of error
    pub const fn is_recoverable(self) -> bool {
        !matches!(self, Self::System)
    }

    pub const fn recovery_action(self) -> &'static str {
        match self {
            Self::Validation => "Correct the input and try again",
            Self::Navigation => "Ignored",
            Self::Rendering => "Returned to the welcome screen",
            Self::System => "Check permissions and try again, or go back",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Validation => "Validation",
            Self::Navigation => "Navigation",
            Self::Rendering => "Rendering",
            Self::System => "System",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone)]
pub struct ErrorRecord {
    pub error: WizardError,
    pub screen: Screen,
    pub timestamp: DateTime<Utc>,
}

impl ErrorRecord {
    pub const fn kind(&self) -> ErrorKind {
        self.error.kind()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorStats {
    pub total: usize,
    pub recoverable: usize,
    pub system: usize,
}

/// Ring buffer of the most recent errors
#[derive(Debug, Clone)]
pub struct ErrorLog {
    entries: VecDeque<ErrorRecord>,
    max_size: usize,
}

impl ErrorLog {
    pub fn new(max_size: usize) -> Self {
        let max_size = max_size.max(1);
        Self {
            entries: VecDeque::with_capacity(max_size),
            max_size,
        }
    }

    pub fn record(&mut self, error: WizardError, screen: Screen) {
        if self.entries.len() == self.max_size {
            self.entries.pop_front();
        }
        self.entries.push_back(ErrorRecord {
            error,
            screen,
            timestamp: Utc::now(),
        });
    }

    pub fn last(&self) -> Option<&ErrorRecord> {
        self.entries.back()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ErrorRecord> {
        self.entries.iter()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn stats(&self) -> ErrorStats {
        ErrorStats {
            total: self.entries.len(),
            recoverable: self.entries.iter().filter(|r| r.kind().is_recoverable()).count(),
            system: self.entries.iter().filter(|r| r.kind() == ErrorKind::System).count(),
        }
    }
}

impl Default for ErrorLog {
    fn default() -> Self {
        Self::new(DEFAULT_ERROR_LOG_SIZE)
    }
}
