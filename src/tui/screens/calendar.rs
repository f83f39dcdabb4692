//! # Calendar Screen
//!
//! Month grid with progress stats. Day markers (completed, reflected)
//! are sample data, matching the demo feed elsewhere; the stats row is
//! real and comes from the progress store. Special dates show the
//! anniversary from the profile and Valentine's Day.

use chrono::{Datelike, Local, Months, NaiveDate};
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::core::action::Action;
use crate::core::state::App;
use crate::tui::event::TuiEvent;

/// Sample day-of-month markers for devotional completion.
const COMPLETED_DAYS: [u32; 8] = [3, 7, 10, 14, 17, 21, 24, 28];
/// Sample day-of-month markers for reflections.
const REFLECTED_DAYS: [u32; 4] = [7, 14, 21, 28];
/// Sample streak shown in the stats row.
const SAMPLE_STREAK: u32 = 7;

pub struct CalendarScreen {
    /// First day of the month being shown.
    month: NaiveDate,
}

impl CalendarScreen {
    pub fn new() -> Self {
        let today = Local::now().date_naive();
        Self {
            month: today.with_day(1).unwrap_or(today),
        }
    }

    pub fn handle_event(&mut self, event: &TuiEvent, _app: &App) -> Option<Action> {
        match event {
            TuiEvent::CursorLeft | TuiEvent::InputChar('p') => {
                self.month = self.month - Months::new(1);
                None
            }
            TuiEvent::CursorRight | TuiEvent::InputChar('n') => {
                self.month = self.month + Months::new(1);
                None
            }
            _ => None,
        }
    }

    fn days_in_month(&self) -> u32 {
        let next = self.month + Months::new(1);
        next.signed_duration_since(self.month).num_days() as u32
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect, app: &App) {
        let [stats_area, title_area, grid_area, legend_area] = Layout::vertical([
            Constraint::Length(3),
            Constraint::Length(2),
            Constraint::Min(8),
            Constraint::Length(3),
        ])
        .areas(area);

        self.render_stats(frame, stats_area, app);

        // Month navigation header
        frame.render_widget(
            Paragraph::new(Line::from(vec![
                Span::styled("← ", Style::default().fg(Color::DarkGray)),
                Span::styled(
                    self.month.format("%B %Y").to_string(),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Span::styled(" →", Style::default().fg(Color::DarkGray)),
            ]))
            .centered(),
            title_area,
        );

        self.render_grid(frame, grid_area, app);

        // Legend + special dates
        let anniversary = app.profile.anniversary;
        let legend = vec![
            Line::from(vec![
                Span::styled("● ", Style::default().fg(Color::Green)),
                Span::raw("Devotional  "),
                Span::styled("◆ ", Style::default().fg(Color::Magenta)),
                Span::raw("Reflection  "),
                Span::styled("♥ ", Style::default().fg(Color::Red)),
                Span::raw("Special date"),
            ]),
            Line::from(Span::styled(
                format!(
                    "Anniversary: {}  ·  Valentine's Day: Feb 14",
                    anniversary.format("%B %-d")
                ),
                Style::default().fg(Color::DarkGray),
            )),
            Line::from(Span::styled(
                "←/→ Change month",
                Style::default().fg(Color::DarkGray),
            )),
        ];
        frame.render_widget(Paragraph::new(legend), legend_area);
    }

    fn render_stats(&self, frame: &mut Frame, area: Rect, app: &App) {
        let progress = app.progress.progress();
        let cells = Layout::horizontal([Constraint::Ratio(1, 3); 3]).split(area);
        let stats = [
            (progress.read.len().to_string(), "Devotionals Read"),
            (progress.reflected.len().to_string(), "Reflections"),
            (format!("{} 🔥", SAMPLE_STREAK), "Day Streak"),
        ];
        for (i, (value, label)) in stats.iter().enumerate() {
            frame.render_widget(
                Paragraph::new(vec![
                    Line::from(Span::styled(
                        value.clone(),
                        Style::default().add_modifier(Modifier::BOLD),
                    ))
                    .centered(),
                    Line::from(Span::styled(
                        *label,
                        Style::default().fg(Color::DarkGray),
                    ))
                    .centered(),
                ]),
                cells[i],
            );
        }
    }

    fn render_grid(&self, frame: &mut Frame, area: Rect, app: &App) {
        let today = Local::now().date_naive();
        let anniversary = app.profile.anniversary;
        let start_offset = self.month.weekday().num_days_from_sunday() as usize;
        let days = self.days_in_month();

        let mut lines = Vec::new();
        lines.push(Line::from(Span::styled(
            " Sun  Mon  Tue  Wed  Thu  Fri  Sat",
            Style::default().fg(Color::DarkGray),
        )));

        let mut week_spans: Vec<Span> = Vec::new();
        for _ in 0..start_offset {
            week_spans.push(Span::raw("     "));
        }
        for day in 1..=days {
            let date = self.month.with_day(day);
            let is_today = date == Some(today);
            let completed = COMPLETED_DAYS.contains(&day);
            let reflected = REFLECTED_DAYS.contains(&day);
            let special = (self.month.month() == 2 && day == 14)
                || (self.month.month() == anniversary.month() && day == anniversary.day());

            let mut style = Style::default();
            let marker = if special {
                style = style.fg(Color::Red);
                "♥"
            } else if reflected {
                style = style.fg(Color::Magenta);
                "◆"
            } else if completed {
                style = style.fg(Color::Green);
                "●"
            } else {
                " "
            };
            if is_today {
                style = style.add_modifier(Modifier::REVERSED);
            }
            week_spans.push(Span::styled(format!(" {:>2}{} ", day, marker), style));

            if (start_offset + day as usize) % 7 == 0 {
                lines.push(Line::from(std::mem::take(&mut week_spans)));
            }
        }
        if !week_spans.is_empty() {
            lines.push(Line::from(week_spans));
        }

        frame.render_widget(Paragraph::new(lines), area);
    }
}

impl Default for CalendarScreen {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::test_app;

    #[test]
    fn test_month_navigation_round_trip() {
        let app = test_app();
        let mut screen = CalendarScreen::new();
        let start = screen.month;
        screen.handle_event(&TuiEvent::CursorRight, &app);
        assert_ne!(screen.month, start);
        screen.handle_event(&TuiEvent::CursorLeft, &app);
        assert_eq!(screen.month, start);
    }

    #[test]
    fn test_days_in_month() {
        let app = test_app();
        let mut screen = CalendarScreen::new();
        screen.month = NaiveDate::from_ymd_opt(2024, 2, 1).unwrap();
        assert_eq!(screen.days_in_month(), 29);
        screen.handle_event(&TuiEvent::InputChar('n'), &app);
        assert_eq!(screen.days_in_month(), 31);
    }

    #[test]
    fn test_renders_stats_from_progress() {
        use ratatui::Terminal;
        use ratatui::backend::TestBackend;

        let app = test_app();
        let mut screen = CalendarScreen::new();
        let backend = TestBackend::new(80, 24);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| screen.render(f, f.area(), &app)).unwrap();

        let text: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect();
        assert!(text.contains("Devotionals Read"));
        assert!(text.contains("Reflections"));
        assert!(text.contains("Sun"));
    }
}
