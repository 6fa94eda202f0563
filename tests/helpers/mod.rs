// ABOUTME: Shared test helpers: a mock artifact generator and wizard drivers

#![allow(dead_code)]

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use mockall::mock;
use teapot::app::{WizardController, WizardEvent};
use teapot::cache::RenderCache;
use teapot::generator::{ArtifactGenerator, GeneratorResult};
use teapot::models::{
    AiTools, AppKind, Architecture, CiPipeline, Infrastructure, LintingTool, ProjectConfig,
};
use teapot::screens::{AddAnotherAction, Completion, ScreenEvent};

mock! {
    pub Generator {}

    impl ArtifactGenerator for Generator {
        fn render(&self, project: &ProjectConfig) -> GeneratorResult<String>;
        fn persist(&self, content: &str, dir: &Path) -> GeneratorResult<PathBuf>;
    }
}

pub const fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

pub const fn ctrl(c: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
}

pub fn controller() -> WizardController {
    controller_with(MockGenerator::new())
}

pub fn controller_with(generator: MockGenerator) -> WizardController {
    WizardController::new(RenderCache::default(), Box::new(generator), "out")
}

/// Sends a completion from whatever screen is active
pub fn complete(c: &mut WizardController, completion: Completion) {
    let screen = c.current_screen();
    c.handle_event(WizardEvent::Screen {
        screen,
        event: ScreenEvent::Complete(completion),
    });
}

/// welcome -> project setup (name) -> architecture -> add apps
pub fn drive_to_add_apps(c: &mut WizardController, name: &str, architecture: Architecture) {
    complete(c, Completion::WelcomeComplete);
    complete(
        c,
        Completion::ProjectSetupComplete {
            name: name.to_string(),
            description: String::new(),
        },
    );
    complete(c, Completion::ArchitectureSelected(architecture));
}

/// add apps -> app config -> add another
pub fn add_app(c: &mut WizardController, kind: AppKind, name: &str) {
    complete(c, Completion::AppKindSelected(kind));
    complete(
        c,
        Completion::AppConfigComplete {
            name: name.to_string(),
            options: BTreeMap::new(),
        },
    );
}

pub fn type_text(c: &mut WizardController, text: &str) {
    for ch in text.chars() {
        c.handle_event(WizardEvent::Key(key(KeyCode::Char(ch))));
    }
}

/// Full path from welcome to the preview screen with one React app
pub fn drive_to_preview(c: &mut WizardController) {
    drive_to_add_apps(c, "demo", Architecture::Turborepo);
    add_app(c, AppKind::React, "web");
    complete(c, Completion::AddAnotherSelected(AddAnotherAction::Continue));
    complete(c, Completion::DevToolsSelected(LintingTool::PrettierEslint));
    complete(c, Completion::InfrastructureSelected(Infrastructure::default()));
    complete(c, Completion::CiPipelineSelected(CiPipeline::default()));
    complete(c, Completion::AiToolsSelected(AiTools::none()));
}

/// Generator that always succeeds without touching the filesystem
pub fn succeeding_generator() -> MockGenerator {
    let mut generator = MockGenerator::new();
    generator.expect_render().returning(|_| Ok(String::new()));
    generator
        .expect_persist()
        .returning(|_, dir| Ok(dir.join("teapot.yml")));
    generator
}
