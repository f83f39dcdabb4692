//! # Settings Screen
//!
//! Notification, sound, and appearance preferences. Toggles flip with
//! Space or Enter; the reminder time and font size cycle through their
//! choices. Changes apply to the running session via
//! `Action::UpdateSettings`; they are written to disk alongside the
//! profile when that is saved.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::core::action::Action;
use crate::core::config::Settings;
use crate::core::state::App;
use crate::tui::event::TuiEvent;

const REMINDER_TIMES: [&str; 6] = ["06:00", "07:00", "08:00", "09:00", "20:00", "21:00"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Row {
    Notifications,
    DailyReminder,
    PartnerActivity,
    ShmilyAlerts,
    Sound,
    Vibration,
    ReminderTime,
    FontSize,
}

const ROWS: [Row; 8] = [
    Row::Notifications,
    Row::DailyReminder,
    Row::PartnerActivity,
    Row::ShmilyAlerts,
    Row::Sound,
    Row::Vibration,
    Row::ReminderTime,
    Row::FontSize,
];

impl Row {
    fn label(self) -> &'static str {
        match self {
            Row::Notifications => "Notifications",
            Row::DailyReminder => "Daily Reminder",
            Row::PartnerActivity => "Partner Activity",
            Row::ShmilyAlerts => "SHMILY Alerts",
            Row::Sound => "Sound",
            Row::Vibration => "Vibration",
            Row::ReminderTime => "Reminder Time",
            Row::FontSize => "Font Size",
        }
    }
}

pub struct SettingsScreen {
    selected: usize,
}

impl SettingsScreen {
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
                self.selected = (self.selected + 1).min(ROWS.len() - 1);
                None
            }
            TuiEvent::Submit | TuiEvent::InputChar(' ') => {
                let mut settings = app.settings.clone();
                apply_row(&mut settings, ROWS[self.selected]);
                Some(Action::UpdateSettings(settings))
            }
            _ => None,
        }
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect, app: &App) {
        let settings = &app.settings;
        let mut lines = vec![
            Line::from(Span::styled(
                "Settings",
                Style::default()
                    .fg(Color::Magenta)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::default(),
        ];
        for (i, row) in ROWS.iter().enumerate() {
            let selected = i == self.selected;
            let style = if selected {
                Style::default()
                    .fg(Color::Magenta)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            let marker = if selected { "▸ " } else { "  " };
            let value = row_value(settings, *row);
            lines.push(Line::from(vec![
                Span::styled(marker, style),
                Span::styled(format!("{:<18}", row.label()), style),
                Span::styled(value, Style::default().fg(Color::Cyan)),
            ]));
        }
        lines.push(Line::default());
        lines.push(Line::from(Span::styled(
            "↑/↓ Select  Space/Enter Change  Esc Back",
            Style::default().fg(Color::DarkGray),
        )));
        frame.render_widget(Paragraph::new(lines), area);
    }
}

fn row_value(settings: &Settings, row: Row) -> String {
    fn onoff(value: bool) -> String {
        if value { "on".to_string() } else { "off".to_string() }
    }
    match row {
        Row::Notifications => onoff(settings.notifications),
        Row::DailyReminder => onoff(settings.daily_reminder),
        Row::PartnerActivity => onoff(settings.partner_activity),
        Row::ShmilyAlerts => onoff(settings.shmily_alerts),
        Row::Sound => onoff(settings.sound_enabled),
        Row::Vibration => onoff(settings.vibration),
        Row::ReminderTime => settings.reminder_time.clone(),
        Row::FontSize => settings.font_size.label().to_string(),
    }
}

fn apply_row(settings: &mut Settings, row: Row) {
    match row {
        Row::Notifications => settings.notifications = !settings.notifications,
        Row::DailyReminder => settings.daily_reminder = !settings.daily_reminder,
        Row::PartnerActivity => settings.partner_activity = !settings.partner_activity,
        Row::ShmilyAlerts => settings.shmily_alerts = !settings.shmily_alerts,
        Row::Sound => settings.sound_enabled = !settings.sound_enabled,
        Row::Vibration => settings.vibration = !settings.vibration,
        Row::ReminderTime => {
            let current = REMINDER_TIMES
                .iter()
                .position(|t| *t == settings.reminder_time)
                .unwrap_or(0);
            settings.reminder_time =
                REMINDER_TIMES[(current + 1) % REMINDER_TIMES.len()].to_string();
        }
        Row::FontSize => settings.font_size = settings.font_size.next(),
    }
}

impl Default for SettingsScreen {
    fn default() -> Self {
        Self::new()
    }
}
