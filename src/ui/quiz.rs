use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Padding, Paragraph, Wrap},
};

use crate::app::Screen;
use crate::models::{Label, QuestionView};

const QUESTION_CHROME: u16 = 4;
const MIN_QUESTION_HEIGHT: u16 = 7;
const MIN_OPTIONS_HEIGHT: u16 = 6;

/// How one option box is drawn.
#[derive(Clone, Copy)]
enum OptionLook {
    Idle,
    Highlighted,
    Disabled,
    Correct,
    WrongChoice,
}

impl OptionLook {
    fn style(self) -> Style {
        match self {
            OptionLook::Idle => Style::default().fg(Color::White),
            OptionLook::Highlighted => Style::default().fg(Color::Cyan).bold(),
            OptionLook::Disabled => Style::default().fg(Color::DarkGray),
            OptionLook::Correct => Style::default().fg(Color::Green).bold(),
            OptionLook::WrongChoice => Style::default().fg(Color::Red).bold(),
        }
    }
}

pub fn render(frame: &mut Frame, area: Rect, screen: &Screen) {
    let (view, looks) = match screen {
        Screen::Question { view, selected } => (
            view,
            Label::ALL.map(|label| {
                if label == *selected {
                    OptionLook::Highlighted
                } else {
                    OptionLook::Idle
                }
            }),
        ),
        Screen::Answered {
            view,
            chosen,
            verdict,
            ..
        } => (
            view,
            Label::ALL.map(|label| {
                if label == verdict.correct_label {
                    OptionLook::Correct
                } else if label == *chosen {
                    OptionLook::WrongChoice
                } else {
                    OptionLook::Disabled
                }
            }),
        ),
        Screen::Empty => return,
    };

    let question = question_paragraph(&view.text);
    let question_height = question_box_height(&question, area.width);

    let chunks = Layout::vertical([
        Constraint::Length(question_height),
        Constraint::Min(MIN_OPTIONS_HEIGHT),
    ])
    .spacing(1)
    .split(area);

    render_question_text(frame, chunks[0], question);
    render_options(frame, chunks[1], view, &looks);
}

fn question_paragraph(text: &str) -> Paragraph<'_> {
    Paragraph::new(text)
        .wrap(Wrap { trim: true })
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::White).italic())
}

/// Border and one cell of padding on every side, plus the wrapped text.
fn question_box_height(question: &Paragraph, width: u16) -> u16 {
    let inner_width = width.saturating_sub(QUESTION_CHROME).max(1);
    let lines = u16::try_from(question.line_count(inner_width)).unwrap_or(u16::MAX);
    lines
        .saturating_add(QUESTION_CHROME)
        .max(MIN_QUESTION_HEIGHT)
}

fn render_question_text(frame: &mut Frame, area: Rect, question: Paragraph) {
    let widget = question
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray))
                .padding(Padding::uniform(1)),
        );

    frame.render_widget(widget, area);
}

/// Options sit in a 2x2 grid, A and B on the first row.
fn render_options(frame: &mut Frame, area: Rect, view: &QuestionView, looks: &[OptionLook; 4]) {
    let rows = Layout::vertical([Constraint::Fill(1), Constraint::Fill(1)]).split(area);

    for (row_index, row) in rows.iter().enumerate() {
        let cells = Layout::horizontal([Constraint::Fill(1), Constraint::Fill(1)])
            .spacing(2)
            .split(*row);

        for (col_index, cell) in cells.iter().enumerate() {
            let index = row_index * 2 + col_index;
            let (label, text) = &view.options[index];
            render_option(frame, *cell, *label, text, looks[index]);
        }
    }
}

fn render_option(frame: &mut Frame, area: Rect, label: Label, text: &str, look: OptionLook) {
    let style = look.style();
    let widget = Paragraph::new(format!("{}: {}", label, text))
        .wrap(Wrap { trim: true })
        .alignment(Alignment::Center)
        .style(style)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(style)
                .padding(Padding::horizontal(1)),
        );

    frame.render_widget(widget, area);
}
