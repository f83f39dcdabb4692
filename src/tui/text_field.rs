//! # Single-Line Text Field
//!
//! Minimal editable text buffer used by the search bar, note composer,
//! reflection answers, and profile editor. Cursor movement is
//! char-boundary aware; rendering windows the buffer so the cursor
//! stays visible in narrow areas.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use unicode_width::UnicodeWidthStr;

use crate::tui::event::TuiEvent;

#[derive(Debug, Default, Clone)]
pub struct TextField {
    buffer: String,
    /// Cursor as a byte offset into `buffer`, always on a char boundary.
    cursor: usize,
}

/// Largest byte index `<= index` that lies on a char boundary.
fn prev_char_boundary(s: &str, index: usize) -> usize {
    let mut i = index.min(s.len());
    while i > 0 && !s.is_char_boundary(i) {
        i -= 1;
    }
    i
}

/// Smallest byte index `> index` on a char boundary, capped at `len`.
fn next_char_boundary(s: &str, index: usize) -> usize {
    let mut i = (index + 1).min(s.len());
    while i < s.len() && !s.is_char_boundary(i) {
        i += 1;
    }
    i
}

impl TextField {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_text(text: &str) -> Self {
        Self {
            buffer: text.to_string(),
            cursor: text.len(),
        }
    }

    pub fn text(&self) -> &str {
        &self.buffer
    }

    pub fn is_blank(&self) -> bool {
        self.buffer.trim().is_empty()
    }

    pub fn set_text(&mut self, text: &str) {
        self.buffer = text.to_string();
        self.cursor = self.buffer.len();
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
        self.cursor = 0;
    }

    /// Consume editing events. Returns true if the event was handled.
    pub fn handle_event(&mut self, event: &TuiEvent) -> bool {
        match event {
            TuiEvent::InputChar(c) => {
                self.buffer.insert(self.cursor, *c);
                self.cursor += c.len_utf8();
                true
            }
            TuiEvent::Backspace => {
                if self.cursor > 0 {
                    let start = prev_char_boundary(&self.buffer, self.cursor - 1);
                    self.buffer.replace_range(start..self.cursor, "");
                    self.cursor = start;
                }
                true
            }
            TuiEvent::CursorLeft => {
                if self.cursor > 0 {
                    self.cursor = prev_char_boundary(&self.buffer, self.cursor - 1);
                }
                true
            }
            TuiEvent::CursorRight => {
                if self.cursor < self.buffer.len() {
                    self.cursor = next_char_boundary(&self.buffer, self.cursor);
                }
                true
            }
            _ => false,
        }
    }

    /// Render as a single line. When focused, the char under the cursor
    /// is shown reversed; when empty, `placeholder` is shown dimmed.
    pub fn render(&self, frame: &mut Frame, area: Rect, focused: bool, placeholder: &str) {
        if self.buffer.is_empty() && !focused {
            let line = Line::from(Span::styled(
                placeholder.to_string(),
                Style::default().fg(Color::DarkGray),
            ));
            frame.render_widget(line, area);
            return;
        }

        let (before, after) = self.buffer.split_at(self.cursor);
        let mut cursor_char = after.chars().next().map(|c| c.to_string());
        let rest_start = cursor_char.as_ref().map(|c| c.len()).unwrap_or(0);
        let rest = &after[rest_start..];
        if cursor_char.is_none() {
            cursor_char = Some(" ".to_string());
        }

        // Keep the cursor visible: trim the head until it fits.
        let width = area.width as usize;
        let mut visible_before = before;
        while visible_before.width() + 1 > width && !visible_before.is_empty() {
            let cut = next_char_boundary(visible_before, 0);
            visible_before = &visible_before[cut..];
        }

        let mut spans = vec![Span::raw(visible_before.to_string())];
        if focused {
            spans.push(Span::styled(
                cursor_char.unwrap_or_default(),
                Style::default().add_modifier(Modifier::REVERSED),
            ));
            spans.push(Span::raw(rest.to_string()));
        } else {
            spans.push(Span::raw(after.to_string()));
        }
        frame.render_widget(Line::from(spans), area);
    }
}
