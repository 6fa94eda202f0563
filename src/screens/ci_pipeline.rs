// ABOUTME: CI/CD provider and pipeline feature selection
// ABOUTME: Two areas switched with tab; `s` skips CI entirely

use crossterm::event::{KeyCode, KeyEvent};

use super::{move_cursor, Completion, ScreenEvent};
use crate::models::{CiFeature, CiPipeline, CiProvider};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Area {
    Providers,
    Features,
}

#[derive(Debug, Clone)]
pub struct CiPipelineScreen {
    provider_cursor: usize,
    selected_provider: usize,
    feature_cursor: usize,
    features: [bool; 5],
    area: Area,
}

impl CiPipelineScreen {
    pub fn new() -> Self {
        let mut features = [false; 5];
        for (flag, feature) in features.iter_mut().zip(CiFeature::all()) {
            *flag = feature.enabled_by_default();
        }
        Self {
            provider_cursor: 0,
            selected_provider: 0,
            feature_cursor: 0,
            features,
            area: Area::Providers,
        }
    }

    fn pipeline(&self) -> CiPipeline {
        CiPipeline {
            provider: CiProvider::all().get(self.selected_provider).copied(),
            features: CiFeature::all()
                .into_iter()
                .zip(self.features)
                .filter_map(|(feature, on)| on.then_some(feature))
                .collect(),
        }
    }

    pub fn update(&mut self, key: KeyEvent) -> Option<ScreenEvent> {
        match key.code {
            KeyCode::Tab | KeyCode::BackTab => {
                self.area = match self.area {
                    Area::Providers => Area::Features,
                    Area::Features => Area::Providers,
                };
                return None;
            }
            KeyCode::Char('s') => {
                return Some(ScreenEvent::Complete(Completion::CiPipelineSelected(
                    CiPipeline {
                        provider: Some(CiProvider::Skip),
                        features: Vec::new(),
                    },
                )));
            }
            _ => {}
        }

        match self.area {
            Area::Providers => {
                if move_cursor(&mut self.provider_cursor, CiProvider::all().len(), key) {
                    return None;
                }
                match key.code {
                    KeyCode::Char(' ') => self.selected_provider = self.provider_cursor,
                    KeyCode::Enter => {
                        self.selected_provider = self.provider_cursor;
                        self.area = Area::Features;
                    }
                    _ => {}
                }
                None
            }
            Area::Features => {
                if move_cursor(&mut self.feature_cursor, self.features.len() + 1, key) {
                    return None;
                }
                match key.code {
                    KeyCode::Char(' ') | KeyCode::Enter => {
                        match self.features.get_mut(self.feature_cursor) {
                            Some(flag) => {
                                *flag = !*flag;
                                None
                            }
                            None if key.code == KeyCode::Enter => Some(ScreenEvent::Complete(
                                Completion::CiPipelineSelected(self.pipeline()),
                            )),
                            None => None,
                        }
                    }
                    _ => None,
                }
            }
        }
    }

    pub fn render(&self) -> String {
        let mut out = String::from("CI/CD Pipeline\n\nProvider:\n");
        for (i, provider) in CiProvider::all().into_iter().enumerate() {
            let cursor = if self.area == Area::Providers && i == self.provider_cursor { ">" } else { " " };
            let check = if i == self.selected_provider { "●" } else { "○" };
            out.push_str(&format!(
                "{cursor} {check} {} - {}\n",
                provider.display_name(),
                provider.description()
            ));
        }
        out.push_str("\nFeatures:\n");
        for (i, (feature, on)) in CiFeature::all().into_iter().zip(self.features).enumerate() {
            let cursor = if self.area == Area::Features && i == self.feature_cursor { ">" } else { " " };
            let check = if on { "☑" } else { "☐" };
            out.push_str(&format!(
                "{cursor} {check} {} - {}\n",
                feature.display_name(),
                feature.description()
            ));
        }
        let cursor = if self.area == Area::Features && self.feature_cursor == self.features.len() {
            ">"
        } else {
            " "
        };
        out.push_str(&format!("{cursor} → Continue\n\nTab: switch areas • s: skip"));
        out
    }
}

impl Default for CiPipelineScreen {
    fn default() -> Self {
        Self::new()
    }
}
