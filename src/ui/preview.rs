//! Preview mode: the form as a respondent sees it

use crate::app::App;
use crate::form::{preview_items, PreviewControl, PreviewItem};
use crate::upload::UploadPolicy;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

const MIB: u64 = 1024 * 1024;

fn muted(text: impl Into<String>) -> Span<'static> {
    Span::styled(text.into(), Style::default().fg(Color::DarkGray))
}

fn input_box(placeholder: &str) -> Line<'static> {
    Line::from(vec![Span::raw("   "), muted(format!("[ {placeholder:<24} ]"))])
}

/// Lines drawn for one question's control
fn control_lines(control: &PreviewControl, policy: &UploadPolicy) -> Vec<Line<'static>> {
    match control {
        PreviewControl::RadioGroup(options) => options
            .iter()
            .map(|o| Line::from(format!("   ○ {o}")))
            .collect(),
        PreviewControl::Checkboxes(options) => options
            .iter()
            .map(|o| Line::from(format!("   ☐ {o}")))
            .collect(),
        PreviewControl::Select(options) => {
            let first = options.first().cloned().unwrap_or_default();
            vec![Line::from(vec![
                Span::raw("   "),
                muted(format!("[ {first:<22} ▾ ]")),
            ])]
        }
        PreviewControl::SingleLineText => vec![input_box("Your answer")],
        PreviewControl::MultiLineText => vec![input_box("Your answer"), input_box("")],
        PreviewControl::FilePicker { accept } => {
            let types: Vec<&str> = accept.iter().map(|m| m.extension()).collect();
            vec![
                input_box("Choose file..."),
                Line::from(vec![
                    Span::raw("   "),
                    muted(format!(
                        "Accepted: {} · max {} MiB",
                        types.join(", "),
                        policy.max_bytes / MIB
                    )),
                ]),
            ]
        }
        PreviewControl::DatePicker => vec![input_box("dd/mm/yyyy")],
        PreviewControl::DateRange => vec![Line::from(vec![
            Span::raw("   "),
            muted("[ From dd/mm/yyyy ]  →  [ To dd/mm/yyyy ]"),
        ])],
        PreviewControl::FieldGroup(labels) => labels
            .iter()
            .map(|label| {
                Line::from(vec![
                    Span::raw(format!("   {label:<20}")),
                    muted("[                    ]"),
                ])
            })
            .collect(),
        PreviewControl::SignaturePicker => vec![input_box("Upload signature image...")],
    }
}

fn item_lines(item: &PreviewItem, policy: &UploadPolicy) -> Vec<Line<'static>> {
    let mut title = vec![Span::styled(
        format!("{}. {}", item.order + 1, item.title),
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    )];
    if item.required {
        title.push(Span::styled(" *", Style::default().fg(Color::Red)));
    }

    let mut lines = vec![Line::from(title)];
    lines.extend(control_lines(&item.control, policy));
    lines.push(Line::from(""));
    lines
}

/// Every preview row, before scrolling
fn preview_lines(app: &App) -> Vec<Line<'static>> {
    let policy = &app.upload_policy;
    let items = preview_items(app.controller.questions(), &policy.allowed);

    let mut lines = vec![
        Line::from(Span::styled(
            app.award.title.clone(),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(muted(app.award.meta.category_label())),
        Line::from(""),
    ];
    if items.is_empty() {
        lines.push(Line::from(muted("This form has no questions.")));
    }
    for item in &items {
        lines.extend(item_lines(item, policy));
    }
    lines
}

/// Largest scroll offset that still leaves the last row on screen
pub fn max_scroll(app: &App) -> u16 {
    let rows = preview_lines(app).len().saturating_sub(1);
    u16::try_from(rows).unwrap_or(u16::MAX)
}

pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let lines = preview_lines(app);
    let scroll = app.state.preview_scroll.min(max_scroll(app));

    let preview = Paragraph::new(lines)
        .block(
            Block::default()
                .title(" Preview ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Green)),
        )
        .scroll((scroll, 0));

    frame.render_widget(preview, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::upload::MediaType;

    fn text(lines: &[Line]) -> Vec<String> {
        lines
            .iter()
            .map(|l| l.spans.iter().map(|s| s.content.as_ref()).collect())
            .collect()
    }

    #[test]
    fn test_radio_group_lists_options() {
        let control = PreviewControl::RadioGroup(vec!["Yes".into(), "No".into()]);
        let lines = text(&control_lines(&control, &UploadPolicy::default()));
        assert_eq!(lines, vec!["   ○ Yes", "   ○ No"]);
    }

    #[test]
    fn test_file_picker_shows_limits() {
        let control = PreviewControl::FilePicker {
            accept: vec![MediaType::Pdf, MediaType::Docx],
        };
        let lines = text(&control_lines(&control, &UploadPolicy::default()));
        assert_eq!(lines.len(), 2);
        assert!(lines[1].contains("pdf, docx"));
        assert!(lines[1].contains("max 10 MiB"));
    }

    #[test]
    fn test_required_marker() {
        let item = PreviewItem {
            order: 0,
            title: "Name".to_string(),
            required: true,
            control: PreviewControl::SingleLineText,
        };
        let lines = text(&item_lines(&item, &UploadPolicy::default()));
        assert_eq!(lines[0], "1. Name *");
    }
}
