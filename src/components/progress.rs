// ABOUTME: Step indicator shown above every screen except welcome

use crate::models::{Screen, PROGRESS_STEPS};

/// `✓ ✓ ● Apps ○ ...` followed by `Step n of 9`. Empty on welcome.
pub fn render_progress(screen: Screen) -> String {
    let Some(current) = screen.progress_step() else {
        return String::new();
    };

    let indicators: Vec<String> = PROGRESS_STEPS
        .iter()
        .enumerate()
        .map(|(i, label)| {
            if i < current {
                "✓".to_string()
            } else if i == current {
                format!("● {label}")
            } else {
                "○".to_string()
            }
        })
        .collect();

    let step = (current + 1).min(PROGRESS_STEPS.len());
    format!(
        "{}\nStep {} of {}",
        indicators.join("  "),
        step,
        PROGRESS_STEPS.len()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_welcome_has_no_progress() {
        assert_eq!(render_progress(Screen::Welcome), "");
    }

    #[test]
    fn test_current_step_is_labelled() {
        let out = render_progress(Screen::AddApps);
        assert!(out.starts_with("✓  ✓  ● Apps  ○"));
        assert!(out.ends_with("Step 3 of 9"));
    }

    #[test]
    fn test_add_another_shares_config_step() {
        assert_eq!(
            render_progress(Screen::AddAnotherApp),
            render_progress(Screen::AppConfig)
        );
    }

    #[test]
    fn test_generating_is_past_last_step() {
        let out = render_progress(Screen::Generating);
        assert!(!out.contains('●'));
        assert!(out.ends_with("Step 9 of 9"));
    }
}
