//! # Welcome Overlay
//!
//! First-run onboarding card, shown until dismissed once. The
//! dismissal is persisted under its own storage key, so the overlay
//! never returns on later launches.
//!
//! A four-page carousel in miniature: Left/Right move between pages,
//! Enter (or Esc on the last page) dismisses.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Clear, Padding, Paragraph, Wrap};

use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

struct WelcomePage {
    title: &'static str,
    body: &'static str,
}

const PAGES: [WelcomePage; 4] = [
    WelcomePage {
        title: "Welcome to The Marriage Journal",
        body: "A faith-based devotional app designed to help you and your spouse \
               grow closer together in love and faith.",
    },
    WelcomePage {
        title: "Weekly Devotionals",
        body: "Explore 54+ devotionals covering topics like communication, \
               intimacy, spiritual growth, and more.",
    },
    WelcomePage {
        title: "Reflect Together",
        body: "Journal your thoughts, track your progress, and share reflections \
               with your spouse.",
    },
    WelcomePage {
        title: "SHMILY Notes",
        body: "Send surprise love notes to your spouse and remind them: \
               'See How Much I Love You.'",
    },
];

/// Emitted when the user leaves the overlay.
pub enum WelcomeEvent {
    Dismiss,
}

pub struct WelcomeOverlay {
    page: usize,
}

impl WelcomeOverlay {
    pub fn new() -> Self {
        Self { page: 0 }
    }

    pub fn page(&self) -> usize {
        self.page
    }
}

impl Default for WelcomeOverlay {
    fn default() -> Self {
        Self::new()
    }
}

impl EventHandler for WelcomeOverlay {
    type Event = WelcomeEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<WelcomeEvent> {
        match event {
            TuiEvent::CursorRight | TuiEvent::NextField => {
                if self.page + 1 < PAGES.len() {
                    self.page += 1;
                    None
                } else {
                    Some(WelcomeEvent::Dismiss)
                }
            }
            TuiEvent::CursorLeft | TuiEvent::PrevField => {
                self.page = self.page.saturating_sub(1);
                None
            }
            TuiEvent::Submit | TuiEvent::Escape => Some(WelcomeEvent::Dismiss),
            _ => None,
        }
    }
}

impl Component for WelcomeOverlay {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let overlay = centered_rect(70, 50, area);
        frame.render_widget(Clear, overlay);

        let page = &PAGES[self.page];
        let dots: String = (0..PAGES.len())
            .map(|i| if i == self.page { '●' } else { '○' })
            .collect();

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Magenta))
            .title(" The Marriage Journal ")
            .title_bottom(Line::from(" ←/→ Browse  Enter Start ").centered())
            .padding(Padding::uniform(1));
        let inner = block.inner(overlay);
        frame.render_widget(block, overlay);

        let [title_area, body_area, dots_area] = Layout::vertical([
            Constraint::Length(2),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .areas(inner);

        frame.render_widget(
            Paragraph::new(page.title)
                .alignment(Alignment::Center)
                .style(Style::default().add_modifier(Modifier::BOLD)),
            title_area,
        );
        frame.render_widget(
            Paragraph::new(page.body)
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true }),
            body_area,
        );
        frame.render_widget(
            Paragraph::new(dots)
                .alignment(Alignment::Center)
                .style(Style::default().fg(Color::Magenta)),
            dots_area,
        );
    }
}

/// Compute a centered rect using percentage of the outer rect.
fn centered_rect(percent_x: u16, percent_y: u16, outer: Rect) -> Rect {
    let [_, center_v, _] = Layout::vertical([
        Constraint::Percentage((100 - percent_y) / 2),
        Constraint::Percentage(percent_y),
        Constraint::Percentage((100 - percent_y) / 2),
    ])
    .areas(outer);
    let [_, center, _] = Layout::horizontal([
        Constraint::Percentage((100 - percent_x) / 2),
        Constraint::Percentage(percent_x),
        Constraint::Percentage((100 - percent_x) / 2),
    ])
    .areas(center_v);
    center
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paging_then_dismiss() {
        let mut overlay = WelcomeOverlay::new();
        for expected in 1..PAGES.len() {
            assert!(overlay.handle_event(&TuiEvent::CursorRight).is_none());
            assert_eq!(overlay.page(), expected);
        }
        // Advancing past the last page dismisses.
        assert!(matches!(
            overlay.handle_event(&TuiEvent::CursorRight),
            Some(WelcomeEvent::Dismiss)
        ));
    }

    #[test]
    fn test_enter_dismisses_immediately() {
        let mut overlay = WelcomeOverlay::new();
        assert!(matches!(
            overlay.handle_event(&TuiEvent::Submit),
            Some(WelcomeEvent::Dismiss)
        ));
    }

    #[test]
    fn test_left_saturates_at_first_page() {
        let mut overlay = WelcomeOverlay::new();
        assert!(overlay.handle_event(&TuiEvent::CursorLeft).is_none());
        assert_eq!(overlay.page(), 0);
    }

    #[test]
    fn test_renders_current_page() {
        use ratatui::Terminal;
        use ratatui::backend::TestBackend;

        let backend = TestBackend::new(80, 24);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut overlay = WelcomeOverlay::new();
        overlay.handle_event(&TuiEvent::CursorRight);
        terminal.draw(|f| overlay.render(f, f.area())).unwrap();

        let text: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect();
        assert!(text.contains("Weekly Devotionals"));
    }
}
