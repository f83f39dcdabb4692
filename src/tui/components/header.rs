//! # Header Component
//!
//! Top bar shown on tab-level screens. Displays either a fixed screen
//! title or the default greeting ("Welcome back, <name>"), plus an
//! unread-notification badge fed by local sample data.
//!
//! Stateless: all props are set per frame by the root.

use chrono::{Local, Timelike};
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

use crate::tui::component::Component;

/// Number of unread entries in the sample notification feed. The app
/// has no push channel; the badge exists to exercise the header layout.
pub const SAMPLE_UNREAD_NOTIFICATIONS: usize = 2;

pub struct Header {
    /// Fixed title, or `None` for the greeting.
    pub title: Option<&'static str>,
    pub user_name: String,
}

impl Header {
    pub fn new(title: Option<&'static str>, user_name: String) -> Self {
        Self { title, user_name }
    }

    /// Time-of-day salutation for the greeting line.
    fn salutation() -> &'static str {
        match Local::now().hour() {
            5..=11 => "Good morning",
            12..=17 => "Good afternoon",
            _ => "Good evening",
        }
    }
}

impl Component for Header {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let initial: String = self.user_name.chars().take(1).collect();
        let badge = if SAMPLE_UNREAD_NOTIFICATIONS > 0 {
            format!("  🔔{}", SAMPLE_UNREAD_NOTIFICATIONS)
        } else {
            String::new()
        };

        let line = match self.title {
            Some(title) => Line::from(vec![
                Span::styled(
                    format!(" ({}) ", initial),
                    Style::default().fg(Color::Magenta),
                ),
                Span::styled(title, Style::default().add_modifier(Modifier::BOLD)),
                Span::styled(badge, Style::default().fg(Color::Yellow)),
            ]),
            None => Line::from(vec![
                Span::styled(
                    format!(" ({}) ", initial),
                    Style::default().fg(Color::Magenta),
                ),
                Span::styled(
                    format!("{}, ", Self::salutation()),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::styled(
                    self.user_name.clone(),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Span::styled(badge, Style::default().fg(Color::Yellow)),
            ]),
        };

        frame.render_widget(line, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn rendered_text(header: &mut Header) -> String {
        let backend = TestBackend::new(60, 1);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| header.render(f, f.area())).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_header_with_title() {
        let mut header = Header::new(Some("Devotionals"), "Sarah".to_string());
        let text = rendered_text(&mut header);
        assert!(text.contains("Devotionals"));
        assert!(!text.contains("Welcome"));
    }

    #[test]
    fn test_header_greeting_uses_name() {
        let mut header = Header::new(None, "Sarah".to_string());
        let text = rendered_text(&mut header);
        assert!(text.contains("Sarah"));
        assert!(text.contains("Good"));
    }
}
