//! # Profile Screen
//!
//! Couple profile: names, emails, anniversary, relationship status.
//! View mode shows the resolved profile; `e` switches to edit mode
//! with a field per row. Ctrl+S saves (emitting `SaveProfile`, which
//! the root persists to the config file); Esc cancels edits.

use chrono::NaiveDate;
use log::warn;
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::core::action::Action;
use crate::core::config::{Profile, RelationshipStatus};
use crate::core::state::App;
use crate::tui::event::TuiEvent;
use crate::tui::text_field::TextField;

const FIELD_LABELS: [&str; 5] = [
    "Your name",
    "Your email",
    "Partner name",
    "Partner email",
    "Anniversary",
];

/// Text fields plus the status selector row at the end.
const ROW_COUNT: usize = FIELD_LABELS.len() + 1;

enum Mode {
    View,
    Edit {
        fields: Vec<TextField>,
        status: RelationshipStatus,
        row: usize,
    },
}

pub struct ProfileScreen {
    mode: Mode,
}

impl ProfileScreen {
    pub fn new() -> Self {
        Self { mode: Mode::View }
    }

    pub fn capturing_input(&self) -> bool {
        matches!(self.mode, Mode::Edit { .. })
    }

    fn edit_mode_from(profile: &Profile) -> Mode {
        Mode::Edit {
            fields: vec![
                TextField::with_text(&profile.name),
                TextField::with_text(&profile.email),
                TextField::with_text(&profile.partner_name),
                TextField::with_text(&profile.partner_email),
                TextField::with_text(&profile.anniversary.format("%Y-%m-%d").to_string()),
            ],
            status: profile.relationship_status,
            row: 0,
        }
    }

    pub fn handle_event(&mut self, event: &TuiEvent, app: &App) -> Option<Action> {
        match &mut self.mode {
            Mode::View => match event {
                TuiEvent::InputChar('e') | TuiEvent::Submit => {
                    self.mode = Self::edit_mode_from(&app.profile);
                    None
                }
                _ => None,
            },
            Mode::Edit { fields, status, row } => match event {
                TuiEvent::Escape => {
                    self.mode = Mode::View;
                    None
                }
                TuiEvent::SaveShortcut => {
                    let profile = build_profile(fields, *status, &app.profile);
                    self.mode = Mode::View;
                    Some(Action::SaveProfile(profile))
                }
                TuiEvent::NextField | TuiEvent::CursorDown => {
                    *row = (*row + 1) % ROW_COUNT;
                    None
                }
                TuiEvent::PrevField | TuiEvent::CursorUp => {
                    *row = row.checked_sub(1).unwrap_or(ROW_COUNT - 1);
                    None
                }
                TuiEvent::Submit if *row == ROW_COUNT - 1 => {
                    *status = status.next();
                    None
                }
                other => {
                    if let Some(field) = fields.get_mut(*row) {
                        field.handle_event(other);
                    }
                    None
                }
            },
        }
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect, app: &App) {
        let [title_area, body_area, help_area] = Layout::vertical([
            Constraint::Length(2),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .areas(area);

        frame.render_widget(
            Paragraph::new(Span::styled(
                "Profile",
                Style::default()
                    .fg(Color::Magenta)
                    .add_modifier(Modifier::BOLD),
            )),
            title_area,
        );

        match &self.mode {
            Mode::View => self.render_view(frame, body_area, app),
            Mode::Edit { fields, status, row } => {
                render_edit(frame, body_area, fields, *status, *row);
            }
        }

        let help = match self.mode {
            Mode::View => " e Edit  Esc Back",
            Mode::Edit { .. } => " Tab/↑/↓ Field  Enter Cycle status  Ctrl+S Save  Esc Cancel",
        };
        frame.render_widget(
            Span::styled(help, Style::default().fg(Color::DarkGray)),
            help_area,
        );
    }

    fn render_view(&self, frame: &mut Frame, area: Rect, app: &App) {
        let profile = &app.profile;
        let rows = [
            (FIELD_LABELS[0], profile.name.clone()),
            (FIELD_LABELS[1], profile.email.clone()),
            (FIELD_LABELS[2], profile.partner_name.clone()),
            (FIELD_LABELS[3], profile.partner_email.clone()),
            (
                FIELD_LABELS[4],
                profile.anniversary.format("%B %-d, %Y").to_string(),
            ),
            ("Status", profile.relationship_status.label().to_string()),
        ];
        let mut lines = Vec::new();
        for (label, value) in rows {
            lines.push(Line::from(vec![
                Span::styled(
                    format!("  {:<16}", label),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::raw(value),
            ]));
        }
        frame.render_widget(Paragraph::new(lines), area);
    }
}

fn render_edit(
    frame: &mut Frame,
    area: Rect,
    fields: &[TextField],
    status: RelationshipStatus,
    row: usize,
) {
    let mut constraints = vec![Constraint::Length(1); ROW_COUNT];
    constraints.push(Constraint::Min(0));
    let rows_areas = Layout::vertical(constraints).split(area);

    for (i, field) in fields.iter().enumerate() {
        let focused = i == row;
        let label_style = if focused {
            Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let [label_area, field_area] =
            Layout::horizontal([Constraint::Length(18), Constraint::Min(0)])
                .areas(rows_areas[i]);
        frame.render_widget(
            Span::styled(format!("  {:<16}", FIELD_LABELS[i]), label_style),
            label_area,
        );
        field.render(frame, field_area, focused, "");
    }

    // Status selector row
    let focused = row == ROW_COUNT - 1;
    let style = if focused {
        Style::default()
            .fg(Color::Magenta)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    frame.render_widget(
        Line::from(vec![
            Span::styled(format!("  {:<16}", "Status"), style),
            Span::styled(status.label(), Style::default().fg(Color::Cyan)),
            Span::styled("  (Enter cycles)", Style::default().fg(Color::DarkGray)),
        ]),
        rows_areas[ROW_COUNT - 1],
    );
}

/// Build the profile from the edit fields. An unparseable anniversary
/// keeps the previous date rather than blocking the save.
fn build_profile(fields: &[TextField], status: RelationshipStatus, previous: &Profile) -> Profile {
    let anniversary = match NaiveDate::parse_from_str(fields[4].text().trim(), "%Y-%m-%d") {
        Ok(date) => date,
        Err(e) => {
            warn!("Keeping previous anniversary, new value unparseable: {}", e);
            previous.anniversary
        }
    };
    Profile {
        name: fields[0].text().trim().to_string(),
        email: fields[1].text().trim().to_string(),
        partner_name: fields[2].text().trim().to_string(),
        partner_email: fields[3].text().trim().to_string(),
        anniversary,
        relationship_status: status,
    }
}

impl Default for ProfileScreen {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::test_app;

    #[test]
    fn test_edit_then_save_emits_profile() {
        let app = test_app();
        let mut screen = ProfileScreen::new();
        screen.handle_event(&TuiEvent::InputChar('e'), &app);
        assert!(screen.capturing_input());

        // Clear the name and type a new one.
        for _ in 0..10 {
            screen.handle_event(&TuiEvent::Backspace, &app);
        }
        for c in "Ana".chars() {
            screen.handle_event(&TuiEvent::InputChar(c), &app);
        }
        let action = screen.handle_event(&TuiEvent::SaveShortcut, &app);
        match action {
            Some(Action::SaveProfile(profile)) => {
                assert_eq!(profile.name, "Ana");
                assert_eq!(profile.partner_name, "Michael");
            }
            other => panic!("unexpected action: {:?}", other),
        }
        assert!(!screen.capturing_input());
    }

    #[test]
    fn test_escape_cancels_edits() {
        let app = test_app();
        let mut screen = ProfileScreen::new();
        screen.handle_event(&TuiEvent::InputChar('e'), &app);
        screen.handle_event(&TuiEvent::InputChar('X'), &app);
        let action = screen.handle_event(&TuiEvent::Escape, &app);
        assert_eq!(action, None);
        assert!(!screen.capturing_input());
    }

    #[test]
    fn test_status_cycles_on_enter() {
        let app = test_app();
        let mut screen = ProfileScreen::new();
        screen.handle_event(&TuiEvent::InputChar('e'), &app);
        // Move to the status row (last).
        screen.handle_event(&TuiEvent::PrevField, &app);
        screen.handle_event(&TuiEvent::Submit, &app);
        let action = screen.handle_event(&TuiEvent::SaveShortcut, &app);
        match action {
            Some(Action::SaveProfile(profile)) => {
                // Married cycles to Dating.
                assert_eq!(profile.relationship_status, RelationshipStatus::Dating);
            }
            other => panic!("unexpected action: {:?}", other),
        }
    }

    #[test]
    fn test_invalid_anniversary_keeps_previous() {
        let app = test_app();
        let mut screen = ProfileScreen::new();
        screen.handle_event(&TuiEvent::InputChar('e'), &app);
        // Move to the anniversary field and mangle it.
        for _ in 0..4 {
            screen.handle_event(&TuiEvent::NextField, &app);
        }
        for c in "oops".chars() {
            screen.handle_event(&TuiEvent::InputChar(c), &app);
        }
        let action = screen.handle_event(&TuiEvent::SaveShortcut, &app);
        match action {
            Some(Action::SaveProfile(profile)) => {
                assert_eq!(profile.anniversary, app.profile.anniversary);
            }
            other => panic!("unexpected action: {:?}", other),
        }
    }

    #[test]
    fn test_renders_view_mode() {
        use ratatui::Terminal;
        use ratatui::backend::TestBackend;

        let app = test_app();
        let mut screen = ProfileScreen::new();
        let backend = TestBackend::new(70, 20);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| screen.render(f, f.area(), &app)).unwrap();

        let text: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect();
        assert!(text.contains("Sarah"));
        assert!(text.contains("Michael"));
        assert!(text.contains("Married"));
    }
}
