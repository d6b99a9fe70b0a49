use crate::application::{App, AppMode, DraftField};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

pub fn render_ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(5),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .split(f.area());

    render_header(f, app, chunks[0]);
    render_card(f, app, chunks[1]);
    render_position_dots(f, app, chunks[2]);
    render_status_bar(f, app, chunks[3]);

    if matches!(app.mode, AppMode::AddCard) {
        render_add_form(f, app);
    }
}

fn render_header(f: &mut Frame, app: &App, area: Rect) {
    let header = Paragraph::new(format!(
        "tcards - Flashcards | Card {} of {}",
        app.current_index + 1,
        app.deck.len()
    ))
    .style(Style::default().fg(Color::Cyan));
    f.render_widget(header, area);
}

fn render_card(f: &mut Frame, app: &App, area: Rect) {
    let (face_title, face_text, face_color, hint) = match app.current_card() {
        Some(card) if app.flipped => (
            "Answer",
            card.answer.clone(),
            Color::Magenta,
            "Space: see question",
        ),
        Some(card) => (
            "Question",
            card.question.clone(),
            Color::Blue,
            "Space: reveal answer",
        ),
        None => ("Question", String::new(), Color::Blue, ""),
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .title(face_title)
        .style(Style::default().fg(face_color));

    let inner = block.inner(area);
    f.render_widget(block, area);

    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .split(inner);

    let text = Paragraph::new(face_text)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: false })
        .style(Style::default().fg(Color::White).add_modifier(Modifier::BOLD));
    f.render_widget(text, vertical[0]);

    let hint = Paragraph::new(hint)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(hint, vertical[1]);
}

fn render_position_dots(f: &mut Frame, app: &App, area: Rect) {
    let mut spans = Vec::new();
    for index in 0..app.deck.len() {
        if index > 0 {
            spans.push(Span::raw(" "));
        }
        if index == app.current_index {
            spans.push(Span::styled("●", Style::default().fg(Color::Cyan)));
        } else {
            spans.push(Span::styled("○", Style::default().fg(Color::DarkGray)));
        }
    }

    let dots = Paragraph::new(Line::from(spans)).alignment(Alignment::Center);
    f.render_widget(dots, area);
}

fn render_status_bar(f: &mut Frame, app: &App, area: Rect) {
    let enabled = Style::default();
    let disabled = Style::default().fg(Color::DarkGray);

    let at_first = app.current_index == 0;
    let at_last = app.deck.is_empty() || app.current_index == app.deck.len() - 1;

    let mut spans = vec![
        Span::styled("←/h: previous", if at_first { disabled } else { enabled }),
        Span::raw(" | "),
        Span::styled("→/l: next", if at_last { disabled } else { enabled }),
        Span::raw(" | Space: flip | a: add card"),
    ];
    // The delete affordance only exists while more than one card remains.
    if app.deck.len() > 1 {
        spans.push(Span::raw(" | d: delete"));
    }
    spans.push(Span::raw(" | q: quit"));

    let status = Paragraph::new(Line::from(spans))
        .block(Block::default().borders(Borders::ALL).title("Controls"));
    f.render_widget(status, area);
}

fn render_add_form(f: &mut Frame, app: &App) {
    let area = f.area();
    let popup_y = area.height / 4;
    let popup_area = Rect {
        x: area.width / 8,
        y: popup_y,
        width: area.width * 3 / 4,
        // Never extend past the bottom of the frame on short terminals.
        height: (area.height - popup_y).min(10),
    };

    f.render_widget(Clear, popup_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .title("Add New Flashcard")
        .style(Style::default().fg(Color::Green));
    let inner = block.inner(popup_area);
    f.render_widget(block, popup_area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(1),
        ])
        .split(inner);

    render_draft_field(
        f,
        rows[0],
        "Question",
        &app.draft_question,
        app.active_field == DraftField::Question,
        app.cursor_position,
    );
    render_draft_field(
        f,
        rows[1],
        "Answer",
        &app.draft_answer,
        app.active_field == DraftField::Answer,
        app.cursor_position,
    );

    let hint = Paragraph::new("Tab: switch field | Enter: add | Esc: cancel")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(hint, rows[2]);
}

fn render_draft_field(
    f: &mut Frame,
    area: Rect,
    title: &str,
    text: &str,
    active: bool,
    cursor: usize,
) {
    let border_style = if active {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::Gray)
    };

    let line = if active {
        let mut cursor = cursor.min(text.len());
        while !text.is_char_boundary(cursor) {
            cursor -= 1;
        }
        let (before, rest) = text.split_at(cursor);
        let (under_cursor, after) = match rest.chars().next() {
            Some(c) => rest.split_at(c.len_utf8()),
            None => (" ", ""),
        };
        Line::from(vec![
            Span::raw(before.to_string()),
            Span::styled(
                under_cursor.to_string(),
                Style::default().add_modifier(Modifier::REVERSED),
            ),
            Span::raw(after.to_string()),
        ])
    } else {
        Line::from(text.to_string())
    };

    let field = Paragraph::new(line)
        .block(Block::default().borders(Borders::ALL).title(title).border_style(border_style));
    f.render_widget(field, area);
}
