//! Blocking message boxes drawn over the quiz screen.

use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Borders, Clear, Padding, Paragraph, Wrap},
};

use crate::models::Verdict;

const POPUP_WIDTH: u16 = 64;
/// Border plus horizontal padding on each side.
const POPUP_CHROME_WIDTH: u16 = 4;
const POPUP_CHROME_HEIGHT: u16 = 2;

/// Title and body of the message shown after an answer.
pub fn feedback_text(verdict: &Verdict) -> (&'static str, String) {
    let (title, mut message) = if verdict.is_correct {
        ("Correct!", "That's right!".to_string())
    } else {
        (
            "Incorrect!",
            format!("Sorry, the correct answer was {}.", verdict.correct_label),
        )
    };

    if let Some(explanation) = &verdict.explanation {
        message.push_str("\n\nExplanation: ");
        message.push_str(explanation);
    }

    (title, message)
}

pub fn render_feedback(frame: &mut Frame, area: Rect, verdict: &Verdict) {
    let (title, message) = feedback_text(verdict);
    let color = if verdict.is_correct {
        Color::Green
    } else {
        Color::Yellow
    };
    render_box(frame, area, title, &message, color);
}

pub fn render_error(frame: &mut Frame, area: Rect, message: &str) {
    render_box(frame, area, "Error", message, Color::Red);
}

fn render_box(frame: &mut Frame, area: Rect, title: &str, message: &str, color: Color) {
    let mut lines: Vec<Line> = message
        .lines()
        .map(|line| Line::from(line.to_string()))
        .collect();
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "enter / esc to close",
        Style::default().fg(Color::DarkGray),
    )));

    let text = Paragraph::new(lines).wrap(Wrap { trim: true }).fg(Color::White);
    let width = POPUP_WIDTH.min(area.width);
    let popup = centered(area, width, popup_height(&text, width));

    let widget = text.block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(color))
            .title(format!(" {} ", title))
            .title_style(Style::default().fg(color).bold())
            .padding(Padding::horizontal(1)),
    );

    frame.render_widget(Clear, popup);
    frame.render_widget(widget, popup);
}

/// Rows needed to show every wrapped line of `text` inside a popup `width` wide.
fn popup_height(text: &Paragraph, width: u16) -> u16 {
    let inner_width = width.saturating_sub(POPUP_CHROME_WIDTH).max(1);
    let lines = u16::try_from(text.line_count(inner_width)).unwrap_or(u16::MAX);
    lines.saturating_add(POPUP_CHROME_HEIGHT)
}

fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}
