// ABOUTME: Navigation engine for the wizard: transition tables, screen policies and factory

pub mod flow;

pub use flow::{BackOutcome, NavigationFlow, ScreenArgs, ScreenConstructor, ScreenPolicy, Transition};
