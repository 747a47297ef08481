//! Question type picker dialog

use super::base::{centered_area, render_boxed, title_line};
use crate::form::QuestionType;
use crate::state::TypePicker;
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    Frame,
};

pub fn render_type_picker(frame: &mut Frame, picker: &TypePicker) {
    let dialog_width = 36u16;
    // title + blank + entries + blank + hints + borders
    let dialog_height = QuestionType::ALL.len() as u16 + 6;
    let area = centered_area(frame.area(), dialog_width, dialog_height);

    let mut content = vec![title_line(picker.title(), Color::Cyan), Line::from("")];

    for (idx, kind) in QuestionType::ALL.iter().enumerate() {
        let is_selected = idx == picker.selected;
        let prefix = if is_selected { " ▸ " } else { "   " };
        let style = if is_selected {
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        };
        content.push(Line::from(Span::styled(
            format!("{prefix}{}", kind.label()),
            style,
        )));
    }

    content.push(Line::from(""));
    content.push(Line::from(vec![
        Span::styled("↑↓", Style::default().fg(Color::Cyan)),
        Span::styled(" select  ", Style::default().fg(Color::DarkGray)),
        Span::styled("Enter", Style::default().fg(Color::Cyan)),
        Span::styled(" confirm  ", Style::default().fg(Color::DarkGray)),
        Span::styled("Esc", Style::default().fg(Color::Cyan)),
        Span::styled(" cancel", Style::default().fg(Color::DarkGray)),
    ]));

    render_boxed(frame, area, content, Color::Cyan);
}
