// ABOUTME: Main layout: title bar, progress, active screen beside the structure preview, help line

use ratatui::{
    prelude::*,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
};

use super::progress::render_progress;
use crate::app::WizardController;
use crate::models::Screen;

const NEON_CYAN: Color = Color::Rgb(0, 255, 255);
const GOLD: Color = Color::Rgb(255, 215, 0);
const SELECTION_GREEN: Color = Color::Rgb(100, 200, 100);
const ERROR_RED: Color = Color::Rgb(230, 100, 100);
const DARK_BG: Color = Color::Rgb(25, 25, 35);
const PANEL_BG: Color = Color::Rgb(30, 30, 40);
const SOFT_WHITE: Color = Color::Rgb(220, 220, 230);
const MUTED_GRAY: Color = Color::Rgb(120, 120, 140);
const SUBDUED_BORDER: Color = Color::Rgb(60, 60, 80);

pub const TITLE: &str = "🫖  T E A P O T";
pub const SUBTITLE: &str = "Modern Monorepo Builder";

/// Key hints for the bottom bar
pub const fn help_text(screen: Screen) -> &'static str {
    match screen {
        Screen::Welcome => "enter: start • esc: quit",
        Screen::ProjectSetup => "tab: switch field • enter: next • esc: quit",
        Screen::Architecture | Screen::AddApps | Screen::DevTools => {
            "↑/↓: navigate • enter: select • backspace: back • esc: quit"
        }
        Screen::AppConfig => "tab: switch area • space: toggle • enter: continue • esc: quit",
        Screen::AddAnotherApp => "↑/↓: navigate • enter: select • backspace: back",
        Screen::Infrastructure | Screen::AiTools => {
            "space: toggle • enter: continue • s: skip • backspace: back"
        }
        Screen::CiPipeline => "tab: switch area • space: toggle • s: skip • backspace: back",
        Screen::Preview => "ctrl+j/k: scroll • ↑/↓: choose action • enter: confirm",
        Screen::Generating => "Generating your project...",
        Screen::Complete => "enter/q: exit",
    }
}

const fn shows_structure(screen: Screen) -> bool {
    !matches!(screen, Screen::Welcome | Screen::Generating | Screen::Complete)
}

pub struct LayoutComponent;

impl LayoutComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&mut self, frame: &mut Frame, controller: &mut WizardController) {
        if controller.is_quitting() {
            return;
        }

        let screen = controller.current_screen();
        let error_height = u16::from(controller.visible_error().is_some());
        let progress = render_progress(screen);
        let progress_height = if progress.is_empty() { 0 } else { 2 };

        let main_layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),               // Title bar
                Constraint::Length(progress_height), // Step indicator
                Constraint::Min(0),                  // Screen and structure
                Constraint::Length(error_height),    // Error line
                Constraint::Length(3),               // Help bar
            ])
            .split(frame.size());

        self.render_title(frame, main_layout[0]);
        if progress_height > 0 {
            frame.render_widget(
                Paragraph::new(progress)
                    .style(Style::default().fg(MUTED_GRAY))
                    .alignment(Alignment::Center),
                main_layout[1],
            );
        }

        let body = main_layout[2];
        if shows_structure(screen) {
            let columns = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
                .split(body);
            self.render_screen(frame, columns[0], controller);
            self.render_structure(frame, columns[1], controller);
        } else {
            self.render_screen(frame, body, controller);
        }

        if let Some(err) = controller.visible_error() {
            let line = Line::from(vec![
                Span::styled("✗ ", Style::default().fg(ERROR_RED).add_modifier(Modifier::BOLD)),
                Span::styled(err.to_string(), Style::default().fg(ERROR_RED)),
                Span::styled(
                    format!("  ({})", err.kind().recovery_action()),
                    Style::default().fg(MUTED_GRAY),
                ),
            ]);
            frame.render_widget(Paragraph::new(line), main_layout[3]);
        }

        self.render_help_bar(frame, main_layout[4], screen);
    }

    fn render_title(&self, frame: &mut Frame, area: Rect) {
        let title = Paragraph::new(Line::from(vec![
            Span::styled(TITLE, Style::default().fg(NEON_CYAN).add_modifier(Modifier::BOLD)),
            Span::styled("  │  ", Style::default().fg(SUBDUED_BORDER)),
            Span::styled(SUBTITLE, Style::default().fg(SOFT_WHITE)),
        ]))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .border_style(Style::default().fg(NEON_CYAN))
                .style(Style::default().bg(DARK_BG)),
        )
        .alignment(Alignment::Center);
        frame.render_widget(title, area);
    }

    fn render_screen(&self, frame: &mut Frame, area: Rect, controller: &WizardController) {
        let screen = controller.current_screen();
        let content = Paragraph::new(controller.render_screen())
            .style(Style::default().fg(SOFT_WHITE))
            .wrap(Wrap { trim: false })
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .border_style(Style::default().fg(SELECTION_GREEN))
                    .style(Style::default().bg(PANEL_BG))
                    .title(Line::from(vec![Span::styled(
                        format!(" {} ", screen.title()),
                        Style::default().fg(GOLD).add_modifier(Modifier::BOLD),
                    )])),
            );
        frame.render_widget(content, area);
    }

    fn render_structure(&self, frame: &mut Frame, area: Rect, controller: &mut WizardController) {
        let preview = controller.render_preview();
        let structure = Paragraph::new(preview)
            .style(Style::default().fg(SOFT_WHITE))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .border_style(Style::default().fg(SUBDUED_BORDER))
                    .style(Style::default().bg(PANEL_BG)),
            );
        frame.render_widget(structure, area);
    }

    fn render_help_bar(&self, frame: &mut Frame, area: Rect, screen: Screen) {
        let help = Paragraph::new(Line::from(vec![
            Span::styled("💡 ", Style::default().fg(GOLD)),
            Span::styled(help_text(screen), Style::default().fg(MUTED_GRAY)),
        ]))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(SUBDUED_BORDER))
                .style(Style::default().bg(PANEL_BG)),
        )
        .alignment(Alignment::Center);
        frame.render_widget(help, area);
    }
}

impl Default for LayoutComponent {
    fn default() -> Self {
        Self::new()
    }
}
