//! # Premium Screen
//!
//! Upsell page: feature list and a monthly/yearly plan choice.
//! Subscribing is a demo flow that raises the welcome toast and
//! returns to the menu.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::core::action::Action;
use crate::core::state::App;
use crate::core::toast::ToastKind;
use crate::tui::event::TuiEvent;

const FEATURES: [&str; 5] = [
    "All 54+ Weekly Devotionals",
    "Unlimited SHMILY Notes",
    "Partner Sync & Sharing",
    "Export Journal Entries",
    "Ad-Free Experience",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Plan {
    Monthly,
    Yearly,
}

impl Plan {
    fn label(self) -> &'static str {
        match self {
            Plan::Monthly => "Monthly  $4.99/mo",
            Plan::Yearly => "Yearly   $39.99/yr  (save 33%)",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Row {
    Plans,
    Subscribe,
    Restore,
}

pub struct PremiumScreen {
    plan: Plan,
    row: Row,
}

impl PremiumScreen {
    pub fn new() -> Self {
        Self {
            plan: Plan::Yearly,
            row: Row::Plans,
        }
    }

    pub fn handle_event(&mut self, event: &TuiEvent, _app: &App) -> Option<Action> {
        match event {
            TuiEvent::CursorLeft | TuiEvent::CursorRight if self.row == Row::Plans => {
                self.plan = match self.plan {
                    Plan::Monthly => Plan::Yearly,
                    Plan::Yearly => Plan::Monthly,
                };
                None
            }
            TuiEvent::CursorUp => {
                self.row = match self.row {
                    Row::Plans | Row::Subscribe => Row::Plans,
                    Row::Restore => Row::Subscribe,
                };
                None
            }
            TuiEvent::CursorDown => {
                self.row = match self.row {
                    Row::Plans => Row::Subscribe,
                    Row::Subscribe | Row::Restore => Row::Restore,
                };
                None
            }
            TuiEvent::Submit => match self.row {
                Row::Plans => {
                    self.row = Row::Subscribe;
                    None
                }
                Row::Subscribe => Some(Action::Batch(vec![
                    Action::ShowToast {
                        message: "Welcome to Premium! Enjoy all features.".to_string(),
                        kind: ToastKind::Success,
                    },
                    Action::GoBack,
                ])),
                Row::Restore => Some(Action::Batch(vec![
                    Action::ShowToast {
                        message: "No previous purchase found.".to_string(),
                        kind: ToastKind::Info,
                    },
                    Action::GoBack,
                ])),
            },
            _ => None,
        }
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect, _app: &App) {
        let [hero_area, features_area, plans_area, buttons_area] = Layout::vertical([
            Constraint::Length(3),
            Constraint::Length(FEATURES.len() as u16 + 1),
            Constraint::Length(4),
            Constraint::Min(0),
        ])
        .areas(area);

        frame.render_widget(
            Paragraph::new(vec![
                Line::from(Span::styled(
                    "♛ Upgrade to Premium",
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                ))
                .centered(),
                Line::from(Span::styled(
                    "Everything you need to grow together",
                    Style::default().fg(Color::DarkGray),
                ))
                .centered(),
            ]),
            hero_area,
        );

        let mut feature_lines = Vec::new();
        for feature in FEATURES {
            feature_lines.push(Line::from(vec![
                Span::styled("  ✓ ", Style::default().fg(Color::Green)),
                Span::raw(feature),
            ]));
        }
        frame.render_widget(Paragraph::new(feature_lines), features_area);

        // Plan picker
        let border_style = if self.row == Row::Plans {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(" Choose a plan ");
        let inner = block.inner(plans_area);
        frame.render_widget(block, plans_area);
        let mut plan_lines = Vec::new();
        for plan in [Plan::Monthly, Plan::Yearly] {
            let selected = plan == self.plan;
            let style = if selected {
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::DarkGray)
            };
            let mark = if selected { "(•) " } else { "( ) " };
            plan_lines.push(Line::from(vec![
                Span::styled(mark, style),
                Span::styled(plan.label(), style),
            ]));
        }
        frame.render_widget(Paragraph::new(plan_lines), inner);

        // Subscribe / restore rows
        let subscribe_style = if self.row == Row::Subscribe {
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD | Modifier::REVERSED)
        } else {
            Style::default().fg(Color::Yellow)
        };
        let restore_style = if self.row == Row::Restore {
            Style::default().add_modifier(Modifier::BOLD | Modifier::REVERSED)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        frame.render_widget(
            Paragraph::new(vec![
                Line::default(),
                Line::from(Span::styled("  Start Premium  ", subscribe_style)).centered(),
                Line::from(Span::styled(" Restore Purchase ", restore_style)).centered(),
                Line::default(),
                Line::from(Span::styled(
                    "↑/↓ Move  ←/→ Plan  Enter Confirm  Esc Back",
                    Style::default().fg(Color::DarkGray),
                ))
                .centered(),
            ]),
            buttons_area,
        );
    }
}

impl Default for PremiumScreen {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::test_app;

    #[test]
    fn test_subscribe_toasts_and_goes_back() {
        let app = test_app();
        let mut screen = PremiumScreen::new();
        screen.handle_event(&TuiEvent::CursorDown, &app);
        let action = screen.handle_event(&TuiEvent::Submit, &app);
        match action {
            Some(Action::Batch(actions)) => {
                assert_eq!(actions.len(), 2);
                assert!(matches!(
                    actions[0],
                    Action::ShowToast {
                        kind: ToastKind::Success,
                        ..
                    }
                ));
                assert_eq!(actions[1], Action::GoBack);
            }
            other => panic!("unexpected action: {:?}", other),
        }
    }

    #[test]
    fn test_plan_switching() {
        let app = test_app();
        let mut screen = PremiumScreen::new();
        assert_eq!(screen.plan, Plan::Yearly);
        screen.handle_event(&TuiEvent::CursorLeft, &app);
        assert_eq!(screen.plan, Plan::Monthly);
    }

    #[test]
    fn test_renders_features() {
        use ratatui::Terminal;
        use ratatui::backend::TestBackend;

        let app = test_app();
        let mut screen = PremiumScreen::new();
        let backend = TestBackend::new(70, 24);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| screen.render(f, f.area(), &app)).unwrap();

        let text: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect();
        assert!(text.contains("Upgrade to Premium"));
        assert!(text.contains("Partner Sync"));
    }
}
