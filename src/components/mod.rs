// ABOUTME: UI components: structure tree, progress indicator and the ratatui layout

pub mod layout;
pub mod progress;
pub mod structure;

pub use layout::{help_text, LayoutComponent};
pub use progress::render_progress;
pub use structure::{app_folder_name, panel_size, render_structure};
