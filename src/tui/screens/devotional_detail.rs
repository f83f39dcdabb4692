//! # Devotional Detail Screen
//!
//! Long-form view of a single devotional: scripture, body, ponder
//! questions, a practice checklist, and the closing prayer, inside a
//! scroll view. The route guarantees the record is present, and the
//! root marks it read on entry.

use ratatui::Frame;
use ratatui::layout::{Rect, Size};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Wrap};
use tui_scrollview::{ScrollView, ScrollViewState, ScrollbarVisibility};

use crate::content::Devotional;
use crate::core::action::Action;
use crate::core::nav::Route;
use crate::core::state::App;
use crate::core::toast::ToastKind;
use crate::tui::event::TuiEvent;

pub struct DevotionalDetailScreen {
    devotional: Devotional,
    practice_checked: Vec<bool>,
    practice_cursor: usize,
    scroll: ScrollViewState,
}

impl DevotionalDetailScreen {
    pub fn new(devotional: Devotional) -> Self {
        let practice_checked = vec![false; devotional.practice_items.len()];
        Self {
            devotional,
            practice_checked,
            practice_cursor: 0,
            scroll: ScrollViewState::default(),
        }
    }

    pub fn handle_event(&mut self, event: &TuiEvent, _app: &App) -> Option<Action> {
        match event {
            TuiEvent::CursorUp => {
                self.scroll.scroll_up();
                None
            }
            TuiEvent::CursorDown => {
                self.scroll.scroll_down();
                None
            }
            TuiEvent::PageUp => {
                self.scroll.scroll_page_up();
                None
            }
            TuiEvent::PageDown => {
                self.scroll.scroll_page_down();
                None
            }
            TuiEvent::InputChar('b') => {
                Some(Action::ToggleBookmark(self.devotional.id.clone()))
            }
            TuiEvent::InputChar('r') => Some(Action::Navigate(Route::Reflection {
                week_number: self.devotional.week_number,
                from_devotional: Some(self.devotional.clone()),
            })),
            TuiEvent::InputChar('s') => Some(Action::ShowToast {
                message: "Link copied to clipboard!".to_string(),
                kind: ToastKind::Success,
            }),
            // Left/Right pick a practice item, Space/x checks it off.
            TuiEvent::CursorLeft => {
                self.practice_cursor = self.practice_cursor.saturating_sub(1);
                None
            }
            TuiEvent::CursorRight => {
                if !self.practice_checked.is_empty() {
                    self.practice_cursor =
                        (self.practice_cursor + 1).min(self.practice_checked.len() - 1);
                }
                None
            }
            TuiEvent::InputChar(' ') | TuiEvent::InputChar('x') => {
                let cursor = self.practice_cursor;
                if let Some(checked) = self.practice_checked.get_mut(cursor) {
                    *checked = !*checked;
                }
                None
            }
            _ => None,
        }
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect, app: &App) {
        let d = &self.devotional;
        let bookmark = if app.progress.is_bookmarked(&d.id) { "♥" } else { "♡" };

        let mut lines: Vec<Line> = Vec::new();
        lines.push(Line::from(vec![
            Span::styled(
                format!("Week {}: {} ", d.week_number, d.title),
                Style::default()
                    .fg(Color::Magenta)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(bookmark, Style::default().fg(Color::Red)),
        ]));
        lines.push(Line::default());

        lines.push(section("Scripture"));
        lines.push(Line::from(Span::styled(
            format!("“{}”", d.scripture_text),
            Style::default().add_modifier(Modifier::ITALIC),
        )));
        lines.push(Line::from(Span::styled(
            format!("— {}", d.scripture_reference),
            Style::default().fg(Color::DarkGray),
        )));
        lines.push(Line::default());

        lines.push(section("Devotional"));
        for paragraph in d.body.split("\n\n") {
            lines.push(Line::from(paragraph.to_string()));
            lines.push(Line::default());
        }

        lines.push(section("Ponder Together"));
        for (i, q) in d.ponder_questions.iter().enumerate() {
            lines.push(Line::from(format!("{}. {}", i + 1, q)));
        }
        lines.push(Line::default());

        lines.push(section("Practice This Week"));
        for (i, item) in d.practice_items.iter().enumerate() {
            let checked = self.practice_checked.get(i).copied().unwrap_or(false);
            let (mark, mut style) = if checked {
                ("[x]", Style::default().fg(Color::Green))
            } else {
                ("[ ]", Style::default())
            };
            let marker = if i == self.practice_cursor { "▸ " } else { "  " };
            if i == self.practice_cursor {
                style = style.add_modifier(Modifier::BOLD);
            }
            lines.push(Line::from(vec![
                Span::styled(marker, style),
                Span::styled(format!("{} ", mark), style),
                Span::styled(item.clone(), style),
            ]));
        }
        lines.push(Line::default());

        lines.push(section("Prayer"));
        lines.push(Line::from(Span::styled(
            d.prayer.clone(),
            Style::default().add_modifier(Modifier::ITALIC),
        )));
        lines.push(Line::default());
        lines.push(Line::from(Span::styled(
            "↑/↓ Scroll  b Bookmark  r Reflect  s Share  ←/→+Space Practice  Esc Back",
            Style::default().fg(Color::DarkGray),
        )));

        let content_width = area.width.saturating_sub(1);
        let paragraph = Paragraph::new(lines).wrap(Wrap { trim: true });
        let total_height = paragraph.line_count(content_width) as u16;

        let mut scroll_view = ScrollView::new(Size::new(content_width, total_height))
            .vertical_scrollbar_visibility(ScrollbarVisibility::Automatic)
            .horizontal_scrollbar_visibility(ScrollbarVisibility::Never);
        scroll_view.render_widget(
            paragraph,
            Rect::new(0, 0, content_width, total_height),
        );
        frame.render_stateful_widget(scroll_view, area, &mut self.scroll);
    }
}

fn section(title: &str) -> Line<'static> {
    Line::from(Span::styled(
        title.to_string(),
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    ))
}
