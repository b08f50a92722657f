mod popup;
mod quiz;

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

use crate::app::{App, Screen};
use crate::store::QuestionStore;

const TITLE: &str = "Python Quiz Challenge";

pub fn render<S: QuestionStore>(frame: &mut Frame, app: &App<S>) {
    let area = frame.area();
    frame.render_widget(Block::default().bg(Color::Reset), area);

    let chunks = Layout::vertical([
        Constraint::Length(3),
        Constraint::Fill(1),
        Constraint::Length(1),
    ])
    .margin(1)
    .split(area);

    render_header(frame, chunks[0]);

    match app.screen() {
        Screen::Empty => render_placeholder(frame, chunks[1]),
        screen => quiz::render(frame, chunks[1], screen),
    }

    render_controls(frame, chunks[2], app.screen());

    if let Some(message) = app.error() {
        popup::render_error(frame, area, message);
    } else if let Screen::Answered {
        verdict,
        feedback_open: true,
        ..
    } = app.screen()
    {
        popup::render_feedback(frame, area, verdict);
    }
}

fn render_header(frame: &mut Frame, area: Rect) {
    let widget = Paragraph::new(Span::styled(
        TITLE,
        Style::default().fg(Color::Green).bold(),
    ))
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Color::DarkGray),
    );
    frame.render_widget(widget, area);
}

fn render_placeholder(frame: &mut Frame, area: Rect) {
    let widget = Paragraph::new("No question loaded.")
        .alignment(Alignment::Center)
        .fg(Color::DarkGray);
    frame.render_widget(widget, area);
}

fn render_controls(frame: &mut Frame, area: Rect, screen: &Screen) {
    let hint = match screen {
        Screen::Question { .. } => "a-d answer  ·  arrows/hjkl move  ·  enter select  ·  n skip  ·  q quit",
        Screen::Answered { .. } => "n / enter next question  ·  q quit",
        Screen::Empty => "n next question  ·  q quit",
    };
    let widget = Paragraph::new(hint)
        .alignment(Alignment::Center)
        .fg(Color::DarkGray);
    frame.render_widget(widget, area);
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use ratatui::{Terminal, backend::TestBackend};

    use super::*;
    use crate::data::sample_questions;
    use crate::engine::RoundEngine;
    use crate::models::{Label, NewQuestion};
    use crate::store::MemoryQuestionStore;

    fn draw<S: QuestionStore>(app: &App<S>) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|frame| render(frame, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    fn app() -> App<MemoryQuestionStore> {
        let question = sample_questions().unwrap().remove(0);
        App::new(RoundEngine::new(MemoryQuestionStore::with_questions(vec![
            question,
        ])))
    }

    #[test]
    fn renders_question_and_all_options() {
        let mut app = app();
        app.next_question();

        let screen = draw(&app);
        assert!(screen.contains(TITLE));
        assert!(screen.contains("print(2 ** 3)"));
        assert!(screen.contains("A: 6"));
        assert!(screen.contains("B: 8"));
        assert!(screen.contains("C: 9"));
        assert!(screen.contains("D: 12"));
        assert!(!screen.contains("Correct!"));
    }

    #[test]
    fn renders_feedback_after_wrong_answer() {
        let mut app = app();
        app.next_question();
        app.handle_key(KeyEvent::new(KeyCode::Char('a'), KeyModifiers::NONE));

        let screen = draw(&app);
        assert!(screen.contains("Incorrect!"));
        assert!(screen.contains("the correct answer was B"));
    }

    #[test]
    fn renders_error_popup() {
        let mut app = App::new(RoundEngine::new(MemoryQuestionStore::new()));
        app.next_question();

        let screen = draw(&app);
        assert!(screen.contains("the question store is empty"));
    }

    fn app_with_long_text(text: String, explanation: String) -> App<MemoryQuestionStore> {
        let question = NewQuestion {
            text,
            options: ["6", "8", "9", "12"].map(String::from),
            correct_label: Label::B,
            explanation: Some(explanation),
        };
        App::new(RoundEngine::new(MemoryQuestionStore::with_questions(vec![
            question,
        ])))
    }

    #[test]
    fn long_explanation_is_shown_in_full() {
        let explanation = format!("{}END_OF_EXPLANATION", "lorem ipsum dolor ".repeat(22));
        let mut app = app_with_long_text("What is 2**3?".to_string(), explanation);
        app.next_question();
        app.handle_key(KeyEvent::new(KeyCode::Char('a'), KeyModifiers::NONE));

        let screen = draw(&app);
        assert!(screen.contains("Incorrect!"));
        assert!(screen.contains("END_OF_EXPLANATION"));
        assert!(screen.contains("enter / esc to close"));
    }

    #[test]
    fn long_prompt_is_shown_in_full() {
        let text = format!("{}END_OF_PROMPT", "how many bytes fit in here ".repeat(13));
        let mut app = app_with_long_text(text, "Because.".to_string());
        app.next_question();

        let screen = draw(&app);
        assert!(screen.contains("END_OF_PROMPT"));
        assert!(screen.contains("D: 12"));
    }
}
