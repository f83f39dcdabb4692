//! # Toast Overlay
//!
//! Renders the current toast as a one-line banner centered near the
//! top of the screen, colored by kind. Lifetime is owned by the core
//! toast channel; this component only draws whatever is visible.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::core::toast::{Toast, ToastKind};
use crate::tui::component::Component;

pub struct ToastView {
    pub toast: Toast,
}

impl ToastView {
    pub fn new(toast: Toast) -> Self {
        Self { toast }
    }

    fn color(kind: ToastKind) -> Color {
        match kind {
            ToastKind::Success => Color::Green,
            ToastKind::Error => Color::Red,
            ToastKind::Info => Color::Cyan,
        }
    }

    fn icon(kind: ToastKind) -> &'static str {
        match kind {
            ToastKind::Success => "✓",
            ToastKind::Error => "✗",
            ToastKind::Info => "i",
        }
    }
}

impl Component for ToastView {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let text = format!("{} {}", Self::icon(self.toast.kind), self.toast.message);
        let width = (text.chars().count() as u16 + 4).min(area.width.saturating_sub(2));
        let overlay = Rect {
            x: area.x + (area.width.saturating_sub(width)) / 2,
            y: area.y + 1,
            width,
            height: 3,
        };

        frame.render_widget(Clear, overlay);
        let banner = Paragraph::new(text)
            .alignment(Alignment::Center)
            .style(Style::default().fg(Self::color(self.toast.kind)))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Self::color(self.toast.kind))),
            );
        frame.render_widget(banner, overlay);
    }
}
