//! # Home Screen
//!
//! Landing tab: hero with the daily quote, a journey progress card,
//! this week's devotional, and quick actions into the other features.
//! A plain selectable list drives everything; Enter activates the
//! highlighted entry.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Padding, Paragraph, Wrap};

use crate::content::TOTAL_WEEKS;
use crate::core::action::Action;
use crate::core::nav::Route;
use crate::core::state::App;
use crate::tui::event::TuiEvent;

/// Entries on the home screen, top to bottom.
const ENTRIES: [&str; 6] = [
    "Your Journey",
    "This Week's Devotional",
    "All Devotionals",
    "Weekly Reflection",
    "SHMILY Notes",
    "Lists & Goals",
];

pub struct HomeScreen {
    selected: usize,
}

impl HomeScreen {
    pub fn new() -> Self {
        Self { selected: 0 }
    }

    pub fn handle_event(&mut self, event: &TuiEvent, app: &App) -> Option<Action> {
        match event {
            TuiEvent::CursorUp => {
                self.selected = self.selected.saturating_sub(1);
                None
            }
            TuiEvent::CursorDown => {
                self.selected = (self.selected + 1).min(ENTRIES.len() - 1);
                None
            }
            TuiEvent::Submit => self.activate(app),
            _ => None,
        }
    }

    fn activate(&self, app: &App) -> Option<Action> {
        let current = app.content.current_week()?;
        let route = match self.selected {
            0 => Route::Calendar,
            1 => Route::DevotionalDetail {
                devotional: current.clone(),
            },
            2 => Route::DevotionalList,
            3 => Route::Reflection {
                week_number: current.week_number,
                from_devotional: None,
            },
            4 => Route::ShmilyNotes,
            _ => Route::ListsGoals,
        };
        Some(Action::Navigate(route))
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect, app: &App) {
        let [hero_area, progress_area, week_area, actions_area] = Layout::vertical([
            Constraint::Length(6),
            Constraint::Length(3),
            Constraint::Length(5),
            Constraint::Min(0),
        ])
        .areas(area);

        self.render_hero(frame, hero_area, app);
        self.render_progress(frame, progress_area, app);
        self.render_current_week(frame, week_area, app);
        self.render_actions(frame, actions_area);
    }

    fn render_hero(&self, frame: &mut Frame, area: Rect, app: &App) {
        let quote = &app.content.daily_quote;
        let lines = vec![
            Line::from(Span::styled(
                "The Marriage Journal",
                Style::default()
                    .fg(Color::Magenta)
                    .add_modifier(Modifier::BOLD),
            ))
            .centered(),
            Line::from(Span::styled(
                "Connect • Express • Communicate • Love • Grow Together",
                Style::default().fg(Color::DarkGray),
            ))
            .centered(),
            Line::default(),
            Line::from(vec![
                Span::styled("“", Style::default().fg(Color::Yellow)),
                Span::styled(
                    quote.text.clone(),
                    Style::default().add_modifier(Modifier::ITALIC),
                ),
                Span::styled("”", Style::default().fg(Color::Yellow)),
                Span::styled(
                    format!(" — {}", quote.author),
                    Style::default().fg(Color::DarkGray),
                ),
            ]),
        ];
        frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), area);
    }

    fn render_progress(&self, frame: &mut Frame, area: Rect, app: &App) {
        let reflected = app.progress.progress().reflected.len() as u32;
        let percent = reflected * 100 / TOTAL_WEEKS;
        let style = self.entry_style(0);
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(style);
        let line = Line::from(vec![
            Span::styled(format!("Week {} of {}", reflected.max(1), TOTAL_WEEKS), style),
            Span::styled(
                format!("  ({}% of the journey)", percent),
                Style::default().fg(Color::DarkGray),
            ),
        ]);
        frame.render_widget(Paragraph::new(line).block(block), area);
    }

    fn render_current_week(&self, frame: &mut Frame, area: Rect, app: &App) {
        let style = self.entry_style(1);
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(style)
            .title(" This Week's Devotional ")
            .padding(Padding::horizontal(1));

        let lines = match app.content.current_week() {
            Some(d) => {
                let read = if app.progress.is_read(&d.id) { " ✓ read" } else { " NEW" };
                vec![
                    Line::from(vec![
                        Span::styled(
                            format!("Week {}: {}", d.week_number, d.title),
                            style.add_modifier(Modifier::BOLD),
                        ),
                        Span::styled(read, Style::default().fg(Color::Yellow)),
                    ]),
                    Line::from(Span::styled(
                        d.scripture_reference.clone(),
                        Style::default().fg(Color::DarkGray),
                    )),
                ]
            }
            None => vec![Line::from("No devotionals available.")],
        };
        frame.render_widget(Paragraph::new(lines).block(block), area);
    }

    fn render_actions(&self, frame: &mut Frame, area: Rect) {
        let mut lines = Vec::new();
        for (i, label) in ENTRIES.iter().enumerate().skip(2) {
            let style = self.entry_style(i);
            let marker = if i == self.selected { "▸ " } else { "  " };
            lines.push(Line::from(vec![
                Span::styled(marker, style),
                Span::styled(*label, style),
            ]));
        }
        lines.push(Line::default());
        lines.push(Line::from(Span::styled(
            "↑/↓ Select  Enter Open  1-5 Tabs  q Quit",
            Style::default().fg(Color::DarkGray),
        )));
        frame.render_widget(Paragraph::new(lines), area);
    }

    fn entry_style(&self, index: usize) -> Style {
        if index == self.selected {
            Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        }
    }
}

impl Default for HomeScreen {
    fn default() -> Self {
        Self::new()
    }
}
