// ABOUTME: Validation and sanitizing of user-entered project fields
// ABOUTME: Names must be usable as a directory and package name

use crate::errors::{WizardError, WizardResult};

pub const MAX_NAME_LEN: usize = 50;
pub const MIN_NAME_LEN: usize = 2;
pub const MAX_DESCRIPTION_LEN: usize = 200;
const FALLBACK_NAME: &str = "my-project";

const RESERVED_NAMES: &[&str] = &[
    "con", "prn", "aux", "nul", "com1", "com2", "com3", "com4", "com5", "com6", "com7", "com8",
    "com9", "lpt1", "lpt2", "lpt3", "lpt4", "lpt5", "lpt6", "lpt7", "lpt8", "lpt9",
    "node_modules", "dist", "build", "tmp", "temp", "cache", ".git", ".svn", ".hg",
];

fn is_name_char(c: char) -> bool {
    c.is_alphanumeric() || c == '-' || c == '_'
}

pub fn validate_project_name(name: &str) -> WizardResult<()> {
    let len = name.chars().count();
    if len == 0 {
        return Err(WizardError::validation("Project name cannot be empty"));
    }
    if len > MAX_NAME_LEN {
        return Err(WizardError::validation(format!(
            "Project name too long (max {MAX_NAME_LEN} characters)"
        )));
    }
    if len < MIN_NAME_LEN {
        return Err(WizardError::validation(format!(
            "Project name too short (min {MIN_NAME_LEN} characters)"
        )));
    }
    if name.contains("..") || name.contains('/') || name.contains('\\') {
        return Err(WizardError::validation(
            "Project name cannot contain path separators",
        ));
    }
    if let Some(reserved) = RESERVED_NAMES.iter().find(|r| r.eq_ignore_ascii_case(name)) {
        return Err(WizardError::validation(format!(
            "Project name cannot be a reserved system name: {reserved}"
        )));
    }
    if name.starts_with('-') || name.ends_with('-') {
        return Err(WizardError::validation(
            "Project name cannot start or end with hyphens",
        ));
    }
    if name.starts_with('_') || name.ends_with('_') {
        return Err(WizardError::validation(
            "Project name cannot start or end with underscores",
        ));
    }
    if let Some((pos, c)) = name.chars().enumerate().find(|(_, c)| !is_name_char(*c)) {
        return Err(WizardError::validation(format!(
            "Invalid character '{c}' at position {}",
            pos + 1
        )));
    }
    if ["--", "__", "-_", "_-"].iter().any(|pair| name.contains(pair)) {
        return Err(WizardError::validation(
            "Project name cannot contain consecutive special characters",
        ));
    }
    Ok(())
}

pub fn validate_project_description(description: &str) -> WizardResult<()> {
    if description.chars().count() > MAX_DESCRIPTION_LEN {
        return Err(WizardError::validation(format!(
            "Project description too long (max {MAX_DESCRIPTION_LEN} characters)"
        )));
    }
    if let Some((pos, _)) = description
        .chars()
        .enumerate()
        .find(|(_, c)| c.is_control() && *c != '\n' && *c != '\t')
    {
        return Err(WizardError::validation(format!(
            "Invalid control character at position {}",
            pos + 1
        )));
    }
    Ok(())
}

/// Best-effort conversion of arbitrary input into a valid project name
pub fn sanitize_project_name(name: &str) -> String {
    let mut sanitized: String = name
        .to_lowercase()
        .replace(' ', "-")
        .chars()
        .filter(|c| is_name_char(*c))
        .collect();

    while sanitized.contains("--") {
        sanitized = sanitized.replace("--", "-");
    }
    while sanitized.contains("__") {
        sanitized = sanitized.replace("__", "_");
    }
    let mut sanitized = sanitized.trim_matches(|c| c == '-' || c == '_').to_string();

    if sanitized.chars().count() < MIN_NAME_LEN {
        return FALLBACK_NAME.to_string();
    }
    if sanitized.chars().count() > MAX_NAME_LEN {
        sanitized = sanitized.chars().take(MAX_NAME_LEN).collect();
        sanitized = sanitized.trim_end_matches(|c| c == '-' || c == '_').to_string();
    }
    sanitized
}
