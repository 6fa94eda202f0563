// ABOUTME: Wizard controller and the event plumbing that feeds it

pub mod controller;
pub mod events;

pub use controller::{StructureRenderer, WizardController};
pub use events::{EventHandler, WizardEvent};
