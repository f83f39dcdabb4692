//! # Reflection Screen
//!
//! Weekly journal entry: pick an emotional state from the grid, answer
//! the seven fixed questions, save with Ctrl+S. Saving is disabled
//! until an emotion is selected — the guard simply ignores the save,
//! it never raises an error.
//!
//! The save itself is a core concern: the root marks the week
//! reflected, raises the success toast, and navigates back.

use chrono::Local;
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::core::action::Action;
use crate::core::state::App;
use crate::tui::event::TuiEvent;
use crate::tui::text_field::TextField;

/// Emotions per grid row.
const GRID_COLUMNS: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Focus {
    Emotions,
    Question(usize),
}

pub struct ReflectionScreen {
    week_number: u32,
    focus: Focus,
    /// Cursor inside the emotion grid.
    emotion_cursor: usize,
    /// Chosen emotion, if any. Required before saving.
    selected_emotion: Option<usize>,
    answers: Vec<TextField>,
}

impl ReflectionScreen {
    pub fn new(week_number: u32, app: &App) -> Self {
        Self {
            week_number,
            focus: Focus::Emotions,
            emotion_cursor: 0,
            selected_emotion: None,
            answers: vec![TextField::new(); app.content.reflection_questions.len()],
        }
    }

    pub fn capturing_input(&self) -> bool {
        matches!(self.focus, Focus::Question(_))
    }

    pub fn handle_event(&mut self, event: &TuiEvent, app: &App) -> Option<Action> {
        // Save works from anywhere on the screen, but only once an
        // emotion has been chosen.
        if *event == TuiEvent::SaveShortcut {
            return self.selected_emotion.map(|_| Action::SaveReflection {
                week_number: self.week_number,
            });
        }

        let emotion_count = app.content.emotions.len();
        let question_count = self.answers.len();

        match self.focus {
            Focus::Emotions => match event {
                TuiEvent::CursorLeft => {
                    self.emotion_cursor = self.emotion_cursor.saturating_sub(1);
                    None
                }
                TuiEvent::CursorRight => {
                    self.emotion_cursor = (self.emotion_cursor + 1).min(emotion_count - 1);
                    None
                }
                TuiEvent::CursorUp => {
                    self.emotion_cursor = self.emotion_cursor.saturating_sub(GRID_COLUMNS);
                    None
                }
                TuiEvent::CursorDown => {
                    if self.emotion_cursor + GRID_COLUMNS < emotion_count {
                        self.emotion_cursor += GRID_COLUMNS;
                    }
                    None
                }
                TuiEvent::Submit | TuiEvent::InputChar(' ') => {
                    self.selected_emotion = Some(self.emotion_cursor);
                    None
                }
                TuiEvent::NextField => {
                    self.focus = Focus::Question(0);
                    None
                }
                _ => None,
            },
            Focus::Question(index) => match event {
                TuiEvent::Escape => {
                    self.focus = Focus::Emotions;
                    None
                }
                TuiEvent::NextField | TuiEvent::CursorDown | TuiEvent::Submit => {
                    if index + 1 < question_count {
                        self.focus = Focus::Question(index + 1);
                    } else {
                        self.focus = Focus::Emotions;
                    }
                    None
                }
                TuiEvent::PrevField | TuiEvent::CursorUp => {
                    if index == 0 {
                        self.focus = Focus::Emotions;
                    } else {
                        self.focus = Focus::Question(index - 1);
                    }
                    None
                }
                other => {
                    self.answers[index].handle_event(other);
                    None
                }
            },
        }
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect, app: &App) {
        let emotion_rows = app.content.emotions.len().div_ceil(GRID_COLUMNS) as u16;
        let [header_area, emotions_area, questions_area, help_area] = Layout::vertical([
            Constraint::Length(2),
            Constraint::Length(emotion_rows + 1),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .areas(area);

        // Header: week + date
        let date = Local::now().format("%b %-d, %Y").to_string();
        frame.render_widget(
            Paragraph::new(vec![
                Line::from(vec![
                    Span::styled(
                        "Weekly Reflection  ",
                        Style::default()
                            .fg(Color::Magenta)
                            .add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(
                        format!("Week {}  ·  {}", self.week_number, date),
                        Style::default().fg(Color::DarkGray),
                    ),
                ]),
                Line::from(Span::styled(
                    "How are you feeling?",
                    Style::default().add_modifier(Modifier::BOLD),
                )),
            ]),
            header_area,
        );

        // Emotion grid
        let mut grid_lines = Vec::new();
        for (row, chunk) in app.content.emotions.chunks(GRID_COLUMNS).enumerate() {
            let mut spans = Vec::new();
            for (col, emotion) in chunk.iter().enumerate() {
                let index = row * GRID_COLUMNS + col;
                let is_cursor = self.focus == Focus::Emotions && index == self.emotion_cursor;
                let is_selected = self.selected_emotion == Some(index);
                let mut style = Style::default();
                if is_selected {
                    style = style.fg(Color::Magenta).add_modifier(Modifier::BOLD);
                }
                if is_cursor {
                    style = style.add_modifier(Modifier::REVERSED);
                }
                let mark = if is_selected { "●" } else { " " };
                spans.push(Span::styled(
                    format!("{}{} {:<10}", mark, emotion.emoji, emotion.label),
                    style,
                ));
            }
            grid_lines.push(Line::from(spans));
        }
        frame.render_widget(Paragraph::new(grid_lines), emotions_area);

        // Questions
        let mut question_lines = Vec::new();
        for (i, q) in app.content.reflection_questions.iter().enumerate() {
            let focused = self.focus == Focus::Question(i);
            let style = if focused {
                Style::default()
                    .fg(Color::Magenta)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            question_lines.push(Line::from(vec![
                Span::styled(format!("{}. ", i + 1), style),
                Span::styled(q.question.clone(), style),
            ]));
            let answer = self.answers[i].text();
            let answer_line = if answer.is_empty() && !focused {
                Span::styled("   …", Style::default().fg(Color::DarkGray))
            } else {
                Span::raw(format!("   {}", answer))
            };
            let mut line = vec![answer_line];
            if focused {
                line.push(Span::styled("▏", Style::default().fg(Color::Magenta)));
            }
            question_lines.push(Line::from(line));
        }
        frame.render_widget(Paragraph::new(question_lines), questions_area);

        // Help: the save hint dims until an emotion is chosen.
        let save_style = if self.selected_emotion.is_some() {
            Style::default().fg(Color::Green)
        } else {
            Style::default().fg(Color::DarkGray).add_modifier(Modifier::DIM)
        };
        frame.render_widget(
            Line::from(vec![
                Span::styled("Ctrl+S Save  ", save_style),
                Span::styled(
                    "Tab Questions  Enter/Space Pick emotion  Esc Back",
                    Style::default().fg(Color::DarkGray),
                ),
            ]),
            help_area,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::test_app;

    #[test]
    fn test_save_ignored_without_emotion() {
        let app = test_app();
        let mut screen = ReflectionScreen::new(5, &app);
        assert_eq!(screen.handle_event(&TuiEvent::SaveShortcut, &app), None);
    }

    #[test]
    fn test_save_after_selecting_emotion() {
        let app = test_app();
        let mut screen = ReflectionScreen::new(5, &app);
        screen.handle_event(&TuiEvent::CursorRight, &app);
        screen.handle_event(&TuiEvent::Submit, &app);
        let action = screen.handle_event(&TuiEvent::SaveShortcut, &app);
        assert_eq!(action, Some(Action::SaveReflection { week_number: 5 }));
    }

    #[test]
    fn test_emotion_grid_navigation_stays_in_bounds() {
        let app = test_app();
        let mut screen = ReflectionScreen::new(1, &app);
        screen.handle_event(&TuiEvent::CursorLeft, &app);
        assert_eq!(screen.emotion_cursor, 0);
        for _ in 0..30 {
            screen.handle_event(&TuiEvent::CursorRight, &app);
        }
        assert_eq!(screen.emotion_cursor, app.content.emotions.len() - 1);
        screen.handle_event(&TuiEvent::CursorDown, &app);
        assert_eq!(screen.emotion_cursor, app.content.emotions.len() - 1);
    }

    #[test]
    fn test_typing_goes_to_focused_question() {
        let app = test_app();
        let mut screen = ReflectionScreen::new(1, &app);
        screen.handle_event(&TuiEvent::NextField, &app);
        assert!(screen.capturing_input());
        for c in "date night".chars() {
            screen.handle_event(&TuiEvent::InputChar(c), &app);
        }
        assert_eq!(screen.answers[0].text(), "date night");

        // Move to the next question and type there.
        screen.handle_event(&TuiEvent::NextField, &app);
        screen.handle_event(&TuiEvent::InputChar('x'), &app);
        assert_eq!(screen.answers[1].text(), "x");
    }

    #[test]
    fn test_escape_from_question_returns_to_emotions() {
        let app = test_app();
        let mut screen = ReflectionScreen::new(1, &app);
        screen.handle_event(&TuiEvent::NextField, &app);
        screen.handle_event(&TuiEvent::Escape, &app);
        assert!(!screen.capturing_input());
    }

    #[test]
    fn test_renders() {
        use ratatui::Terminal;
        use ratatui::backend::TestBackend;

        let app = test_app();
        let mut screen = ReflectionScreen::new(3, &app);
        let backend = TestBackend::new(100, 30);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| screen.render(f, f.area(), &app)).unwrap();

        let text: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect();
        assert!(text.contains("Weekly Reflection"));
        assert!(text.contains("What brought you joy this week?"));
    }
}
