//! UI module for rendering the TUI

mod builder;
mod components;
mod layout;
mod preview;

use crate::app::App;
use crate::form::EditorMode;
use components::{render_error_dialog, render_type_picker};
use ratatui::Frame;

pub use preview::max_scroll as preview_max_scroll;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let (header_area, main_area, status_area) = layout::create_layout(frame.area());

    layout::draw_header(frame, header_area, app);

    match app.controller.mode() {
        EditorMode::Edit => builder::draw(frame, main_area, app),
        EditorMode::Preview => preview::draw(frame, main_area, app),
    }

    layout::draw_status_bar(frame, status_area, app);

    if let Some(picker) = &app.state.type_picker {
        render_type_picker(frame, picker);
    }

    // Errors are drawn last so they sit above everything else
    if let Some(error) = app.state.current_error() {
        render_error_dialog(frame, error, app.state.errors.len() - 1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crate::storage::MockAwardRepository;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use ratatui::{backend::TestBackend, Terminal};

    async fn app() -> App {
        let mut repo = MockAwardRepository::new();
        repo.expect_load().returning(|| Ok(None));
        App::with_repository(Box::new(repo), &AppConfig::default())
            .await
            .unwrap()
    }

    fn screen(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|frame| draw(frame, app)).unwrap();
        let buffer = terminal.backend().buffer();
        buffer
            .content()
            .chunks(buffer.area.width as usize)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[tokio::test]
    async fn test_edit_mode_shows_question_card() {
        let app = app().await;
        let screen = screen(&app);
        assert!(screen.contains("Untitled Question"));
        assert!(screen.contains("Option 1"));
        assert!(screen.contains("[ ] Required"));
    }

    #[tokio::test]
    async fn test_preview_mode_shows_controls() {
        let mut app = app().await;
        app.handle_key(KeyEvent::new(KeyCode::Char('p'), KeyModifiers::CONTROL))
            .await
            .unwrap();
        let screen = screen(&app);
        assert!(screen.contains("Preview"));
        assert!(screen.contains("○ Option 2"));
    }

    #[tokio::test]
    async fn test_dialogs_are_drawn_over_content() {
        let mut app = app().await;
        app.handle_key(KeyEvent::new(KeyCode::Char('a'), KeyModifiers::CONTROL))
            .await
            .unwrap();
        assert!(screen(&app).contains("Add Question"));

        app.state.push_error("Failed to save award".to_string());
        assert!(screen(&app).contains("Failed to save award"));
    }
}
