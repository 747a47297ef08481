//! Edit mode: one card per question

use crate::app::App;
use crate::form::{edit_cards, EditAffordance, EditCard};
use crate::state::CardField;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Rows a card needs: borders, title, required toggle and options
fn card_height(card: &EditCard) -> u16 {
    let options = match &card.affordance {
        EditAffordance::OptionList { options, .. } => options.len() as u16,
        EditAffordance::TitleOnly => 0,
    };
    4 + options
}

/// First card to draw so the selected card stays on screen
fn first_visible(heights: &[u16], selected: usize, available: u16) -> usize {
    let mut start = selected.min(heights.len().saturating_sub(1));
    let mut used = heights.get(start).copied().unwrap_or(0);
    while start > 0 && used + heights[start - 1] <= available {
        start -= 1;
        used += heights[start];
    }
    start
}

pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let cards = edit_cards(app.controller.questions());

    if cards.is_empty() {
        let empty = Paragraph::new(Line::from(vec![
            Span::styled("No questions yet. Press ", Style::default().fg(Color::DarkGray)),
            Span::styled("Ctrl+A", Style::default().fg(Color::Cyan)),
            Span::styled(" to add one.", Style::default().fg(Color::DarkGray)),
        ]))
        .block(Block::default().borders(Borders::ALL).title(" Form "));
        frame.render_widget(empty, area);
        return;
    }

    let heights: Vec<u16> = cards.iter().map(card_height).collect();
    let focus = app.state.focus;
    let start = first_visible(&heights, focus.question, area.height);

    let mut y = area.y;
    for (idx, card) in cards.iter().enumerate().skip(start) {
        let remaining = area.bottom().saturating_sub(y);
        if remaining < 3 {
            break;
        }
        let height = heights[idx].min(remaining);
        let card_area = Rect {
            x: area.x,
            y,
            width: area.width,
            height,
        };
        let field = (idx == focus.question).then_some(focus.field);
        draw_card(frame, card_area, card, field, app);
        y += height;
    }
}

fn draw_card(
    frame: &mut Frame,
    area: Rect,
    card: &EditCard,
    focused: Option<CardField>,
    app: &App,
) {
    let is_selected = focused.is_some();
    let is_source = app.controller.drag_source() == Some(card.order);
    let is_target = app.controller.drag_source().is_some()
        && app.controller.drag_target() == Some(card.order);

    let border_color = if is_target {
        Color::Magenta
    } else if is_source {
        Color::Yellow
    } else if is_selected {
        Color::Cyan
    } else {
        Color::DarkGray
    };

    let mut title = format!(" {}. {} ", card.order + 1, card.type_label);
    if is_source {
        title.push_str("(moving) ");
    } else if is_target {
        title.push_str("▼ drop here ");
    }

    let active = Style::default().fg(Color::Cyan);
    let cursor = |field: CardField| {
        if focused == Some(field) {
            Span::styled("▌", active)
        } else {
            Span::raw("")
        }
    };
    let field_style = |field: CardField| {
        if focused == Some(field) {
            active.add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        }
    };

    let title_text = if card.title.is_empty() {
        "(untitled)".to_string()
    } else {
        card.title.clone()
    };
    let mut lines = vec![
        Line::from(vec![
            Span::styled(title_text, field_style(CardField::Title)),
            cursor(CardField::Title),
        ]),
        Line::from(vec![
            Span::styled(
                if card.required { "[x] Required" } else { "[ ] Required" },
                field_style(CardField::Required),
            ),
        ]),
    ];

    if let EditAffordance::OptionList { marker, options } = &card.affordance {
        for (i, option) in options.iter().enumerate() {
            let field = CardField::Option(i);
            let mut spans = vec![
                Span::styled(
                    format!("  {} ", marker.symbol(i)),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::styled(option.clone(), field_style(field)),
                cursor(field),
            ];
            if focused == Some(field) && card.can_remove_option {
                spans.push(Span::styled("  ^R:remove", Style::default().fg(Color::DarkGray)));
            }
            lines.push(Line::from(spans));
        }
    }

    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
