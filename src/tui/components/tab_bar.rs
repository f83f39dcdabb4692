//! # Tab Bar Component
//!
//! Bottom navigation across the five primary screens. The highlight
//! comes from the navigator's active tab, which is preserved while a
//! sub-screen is open so returning restores the right tab.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

use crate::core::nav::Tab;
use crate::tui::component::Component;

pub struct TabBar {
    pub active: Tab,
}

impl TabBar {
    pub fn new(active: Tab) -> Self {
        Self { active }
    }
}

impl Component for TabBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let cells = Layout::horizontal([Constraint::Ratio(1, 5); 5]).split(area);

        for (i, tab) in Tab::ALL.iter().enumerate() {
            let selected = *tab == self.active;
            let style = if selected {
                Style::default()
                    .fg(Color::Magenta)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::DarkGray)
            };
            let line = Line::from(vec![
                Span::styled(format!("{} ", i + 1), style.add_modifier(Modifier::DIM)),
                Span::styled(tab.label(), style),
            ])
            .centered();
            frame.render_widget(line, cells[i]);
        }
    }
}
