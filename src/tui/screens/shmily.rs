//! # SHMILY Screen
//!
//! "See How Much I Love You" — short love notes between the couple.
//! Compose tab: free-text input plus six quick messages. History tab:
//! sent/received notes with relative dates. Notes live for the session
//! only; the seed feed is sample data.

use chrono::{DateTime, Duration, Local};
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::content::NoteDirection;
use crate::core::action::Action;
use crate::core::state::App;
use crate::core::toast::ToastKind;
use crate::tui::event::TuiEvent;
use crate::tui::text_field::TextField;

#[derive(Debug, Clone, PartialEq)]
pub struct ShmilyNote {
    pub id: String,
    pub message: String,
    pub sent_at: DateTime<Local>,
    pub read: bool,
    pub direction: NoteDirection,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum NotesTab {
    Compose,
    History,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ComposeFocus {
    Input,
    QuickList,
}

pub struct ShmilyScreen {
    tab: NotesTab,
    focus: ComposeFocus,
    compose: TextField,
    quick_cursor: usize,
    history_cursor: usize,
    notes: Vec<ShmilyNote>,
}

impl ShmilyScreen {
    pub fn new(app: &App) -> Self {
        let now = Local::now();
        let notes = app
            .content
            .sample_notes
            .iter()
            .enumerate()
            .map(|(i, sample)| ShmilyNote {
                id: (i + 1).to_string(),
                message: sample.message.clone(),
                sent_at: now - Duration::days(sample.days_ago),
                read: true,
                direction: sample.direction,
            })
            .collect();
        Self {
            tab: NotesTab::Compose,
            focus: ComposeFocus::Input,
            compose: TextField::new(),
            quick_cursor: 0,
            history_cursor: 0,
            notes,
        }
    }

    pub fn capturing_input(&self) -> bool {
        self.tab == NotesTab::Compose && self.focus == ComposeFocus::Input
    }

    pub fn handle_event(&mut self, event: &TuiEvent, app: &App) -> Option<Action> {
        if *event == TuiEvent::NextField {
            self.tab = match self.tab {
                NotesTab::Compose => NotesTab::History,
                NotesTab::History => NotesTab::Compose,
            };
            return None;
        }

        match self.tab {
            NotesTab::Compose => self.handle_compose(event, app),
            NotesTab::History => {
                match event {
                    TuiEvent::CursorUp => self.history_cursor = self.history_cursor.saturating_sub(1),
                    TuiEvent::CursorDown => {
                        if !self.notes.is_empty() {
                            self.history_cursor =
                                (self.history_cursor + 1).min(self.notes.len() - 1);
                        }
                    }
                    TuiEvent::InputChar('d') => {
                        if let Some(note) = self.notes.get(self.history_cursor) {
                            let id = note.id.clone();
                            self.notes.retain(|n| n.id != id);
                            self.history_cursor =
                                self.history_cursor.min(self.notes.len().saturating_sub(1));
                        }
                    }
                    _ => {}
                }
                None
            }
        }
    }

    fn handle_compose(&mut self, event: &TuiEvent, app: &App) -> Option<Action> {
        match (self.focus, event) {
            (ComposeFocus::Input, TuiEvent::Submit) => self.send(app),
            (ComposeFocus::Input, TuiEvent::CursorDown) => {
                self.focus = ComposeFocus::QuickList;
                None
            }
            (ComposeFocus::Input, TuiEvent::Escape) => {
                self.focus = ComposeFocus::QuickList;
                None
            }
            (ComposeFocus::Input, other) => {
                self.compose.handle_event(other);
                None
            }
            (ComposeFocus::QuickList, TuiEvent::CursorUp) => {
                if self.quick_cursor == 0 {
                    self.focus = ComposeFocus::Input;
                } else {
                    self.quick_cursor -= 1;
                }
                None
            }
            (ComposeFocus::QuickList, TuiEvent::CursorDown) => {
                let count = app.content.quick_messages.len();
                if count > 0 {
                    self.quick_cursor = (self.quick_cursor + 1).min(count - 1);
                }
                None
            }
            (ComposeFocus::QuickList, TuiEvent::Submit) => {
                if let Some(message) = app.content.quick_messages.get(self.quick_cursor) {
                    self.compose.set_text(message);
                    self.focus = ComposeFocus::Input;
                }
                None
            }
            _ => None,
        }
    }

    /// Send the composed note. Blank input is ignored, not an error.
    fn send(&mut self, app: &App) -> Option<Action> {
        if self.compose.is_blank() {
            return None;
        }
        let note = ShmilyNote {
            id: uuid::Uuid::new_v4().to_string(),
            message: self.compose.text().trim().to_string(),
            sent_at: Local::now(),
            read: false,
            direction: NoteDirection::Sent,
        };
        self.notes.insert(0, note);
        self.compose.clear();
        Some(Action::ShowToast {
            message: format!("Love note sent to {}! 💕", app.profile.partner_name),
            kind: ToastKind::Success,
        })
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect, app: &App) {
        let [hero_area, tabs_area, body_area, help_area] = Layout::vertical([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .areas(area);

        frame.render_widget(
            Paragraph::new(vec![
                Line::from(Span::styled(
                    "♥ SHMILY",
                    Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                ))
                .centered(),
                Line::from(Span::styled(
                    "See How Much I Love You",
                    Style::default().fg(Color::Red),
                ))
                .centered(),
            ]),
            hero_area,
        );

        // Tabs
        let mut spans = Vec::new();
        for (tab, label) in [(NotesTab::Compose, "Send Note"), (NotesTab::History, "History")] {
            let style = if tab == self.tab {
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::DarkGray)
            };
            spans.push(Span::styled(format!("  {}  ", label), style));
        }
        frame.render_widget(Line::from(spans).centered(), tabs_area);

        match self.tab {
            NotesTab::Compose => self.render_compose(frame, body_area, app),
            NotesTab::History => self.render_history(frame, body_area),
        }

        frame.render_widget(
            Span::styled(
                " Tab Switch view  Enter Send/Pick  ↑/↓ Move  d Delete (history)",
                Style::default().fg(Color::DarkGray),
            ),
            help_area,
        );
    }

    fn render_compose(&mut self, frame: &mut Frame, area: Rect, app: &App) {
        let [input_area, quick_area] =
            Layout::vertical([Constraint::Length(3), Constraint::Min(0)]).areas(area);

        let focused = self.focus == ComposeFocus::Input;
        let border_style = if focused {
            Style::default().fg(Color::Red)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(format!(" To {} ", app.profile.partner_name));
        let inner = block.inner(input_area);
        frame.render_widget(block, input_area);
        self.compose
            .render(frame, inner, focused, "Write something sweet...");

        let mut lines = vec![Line::from(Span::styled(
            "Quick messages",
            Style::default().fg(Color::DarkGray),
        ))];
        for (i, message) in app.content.quick_messages.iter().enumerate() {
            let selected = self.focus == ComposeFocus::QuickList && i == self.quick_cursor;
            let style = if selected {
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            let marker = if selected { "▸ " } else { "  " };
            lines.push(Line::from(vec![
                Span::styled(marker, style),
                Span::styled(message.clone(), style),
            ]));
        }
        frame.render_widget(Paragraph::new(lines), quick_area);
    }

    fn render_history(&mut self, frame: &mut Frame, area: Rect) {
        if self.notes.is_empty() {
            frame.render_widget(
                Paragraph::new("No notes yet — send the first one!")
                    .style(Style::default().fg(Color::DarkGray)),
                area,
            );
            return;
        }

        let message_width = (area.width as usize).saturating_sub(24).max(20);
        let mut lines = Vec::new();
        for (i, note) in self.notes.iter().enumerate() {
            let selected = i == self.history_cursor;
            let (tag, tag_style) = match note.direction {
                NoteDirection::Sent => ("→ sent", Style::default().fg(Color::DarkGray)),
                NoteDirection::Received => ("← received", Style::default().fg(Color::Red)),
            };
            let style = if selected {
                Style::default().add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            for (j, wrapped) in textwrap::wrap(&note.message, message_width).iter().enumerate() {
                if j == 0 {
                    let date = if note.read {
                        relative_date(note.sent_at)
                    } else {
                        format!("{} •", relative_date(note.sent_at))
                    };
                    lines.push(Line::from(vec![
                        Span::styled(format!("{:<11}", tag), tag_style),
                        Span::styled(
                            format!("{:<12}", date),
                            Style::default().fg(Color::DarkGray),
                        ),
                        Span::styled(wrapped.to_string(), style),
                    ]));
                } else {
                    lines.push(Line::from(vec![
                        Span::raw(" ".repeat(23)),
                        Span::styled(wrapped.to_string(), style),
                    ]));
                }
            }
        }
        frame.render_widget(Paragraph::new(lines), area);
    }
}

/// Compact relative date: "today", "yesterday", or "3 days ago".
fn relative_date(when: DateTime<Local>) -> String {
    let days = (Local::now().date_naive() - when.date_naive()).num_days();
    match days {
        0 => "today".to_string(),
        1 => "yesterday".to_string(),
        n => format!("{} days ago", n),
    }
}
