//! Layout components (header, status bar)

use crate::app::App;
use crate::form::EditorMode;
use crate::platform::{COPY_SHORTCUT, SAVE_SHORTCUT};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Split the screen into header, content and status bar
pub fn create_layout(area: Rect) -> (Rect, Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Header
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    (chunks[0], chunks[1], chunks[2])
}

/// Draw the award header with the mode tabs
pub fn draw_header(frame: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![
        Span::styled(
            format!(" {} ", app.award.title),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("[{}] ", app.award.meta.category_label()),
            Style::default().fg(Color::Blue),
        ),
    ];

    for mode in [EditorMode::Edit, EditorMode::Preview] {
        let style = if app.controller.mode() == mode {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        spans.push(Span::raw(" "));
        spans.push(Span::styled(format!(" {} ", mode.label()), style));
    }

    if app.state.unsaved_changes {
        spans.push(Span::styled("  ● unsaved", Style::default().fg(Color::Yellow)));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![];

    let autosave = if app.autosave() {
        Span::styled(" ● ", Style::default().fg(Color::Green))
    } else {
        Span::styled(" ○ ", Style::default().fg(Color::Red))
    };
    spans.push(autosave);

    spans.push(Span::styled(hints(app), Style::default().fg(Color::Gray)));

    if let Some(msg) = &app.state.status_message {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(msg, Style::default().fg(Color::Green)));
    }

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, area);

    let quit_hint = " ^Q:quit ";
    let quit_width = quit_hint.len() as u16;
    let quit_area = Rect {
        x: area.x + area.width.saturating_sub(quit_width),
        y: area.y,
        width: quit_width.min(area.width),
        height: 1,
    };
    let quit_widget =
        Paragraph::new(quit_hint).style(Style::default().bg(Color::DarkGray).fg(Color::Gray));
    frame.render_widget(quit_widget, quit_area);
}

fn hints(app: &App) -> String {
    if app.controller.drag_source().is_some() {
        return "↑↓:position  Enter:drop  Esc:cancel".to_string();
    }
    match app.controller.mode() {
        EditorMode::Edit => format!(
            "↑↓:question  Tab:field  ^A:add  ^T:type  ^D:dup  ^X:del  ^O/^R:option  ^G:move  ^P:preview  {SAVE_SHORTCUT}:save  {COPY_SHORTCUT}:copy"
        ),
        EditorMode::Preview => format!("↑↓:scroll  Esc/^P:edit  {SAVE_SHORTCUT}:save"),
    }
}
