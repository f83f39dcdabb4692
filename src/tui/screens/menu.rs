//! # Menu Screen
//!
//! Grouped entry points into the profile, lists & goals, premium,
//! settings, and a few informational rows. Rows that have no real
//! behavior in the local build raise an info toast instead.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::core::action::Action;
use crate::core::nav::Route;
use crate::core::state::App;
use crate::core::toast::ToastKind;
use crate::tui::event::TuiEvent;

enum MenuTarget {
    Go(Route),
    Toast(&'static str),
}

struct MenuItem {
    label: &'static str,
    description: &'static str,
    target: MenuTarget,
    premium: bool,
}

fn menu_items() -> Vec<MenuItem> {
    vec![
        MenuItem {
            label: "Profile",
            description: "Your info and your partner's",
            target: MenuTarget::Go(Route::Profile),
            premium: false,
        },
        MenuItem {
            label: "Lists & Goals",
            description: "Bucket list, prayers, goals, date nights",
            target: MenuTarget::Go(Route::ListsGoals),
            premium: false,
        },
        MenuItem {
            label: "Go Premium",
            description: "All 54+ devotionals and partner sync",
            target: MenuTarget::Go(Route::Premium),
            premium: true,
        },
        MenuItem {
            label: "Settings",
            description: "Reminders, sounds, appearance",
            target: MenuTarget::Go(Route::Settings),
            premium: false,
        },
        MenuItem {
            label: "Help Center",
            description: "FAQs and contact",
            target: MenuTarget::Toast("Help Center opens in the mobile app."),
            premium: false,
        },
        MenuItem {
            label: "Terms & Privacy",
            description: "The fine print",
            target: MenuTarget::Toast("Terms & Privacy open in the mobile app."),
            premium: false,
        },
        MenuItem {
            label: "Log Out",
            description: "Sign out of this device",
            target: MenuTarget::Toast("Demo build: accounts are local only."),
            premium: false,
        },
    ]
}

pub struct MenuScreen {
    selected: usize,
}

impl MenuScreen {
    pub fn new() -> Self {
        Self { selected: 0 }
    }

    pub fn handle_event(&mut self, event: &TuiEvent, _app: &App) -> Option<Action> {
        let items = menu_items();
        match event {
            TuiEvent::CursorUp => {
                self.selected = self.selected.saturating_sub(1);
                None
            }
            TuiEvent::CursorDown => {
                self.selected = (self.selected + 1).min(items.len() - 1);
                None
            }
            TuiEvent::Submit => match items.into_iter().nth(self.selected)?.target {
                MenuTarget::Go(route) => Some(Action::Navigate(route)),
                MenuTarget::Toast(message) => Some(Action::ShowToast {
                    message: message.to_string(),
                    kind: ToastKind::Info,
                }),
            },
            _ => None,
        }
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect, _app: &App) {
        let mut lines = vec![
            Line::from(Span::styled(
                "Menu",
                Style::default()
                    .fg(Color::Magenta)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::default(),
        ];
        for (i, item) in menu_items().iter().enumerate() {
            let selected = i == self.selected;
            let mut style = if selected {
                Style::default()
                    .fg(Color::Magenta)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            if item.premium {
                style = style.fg(Color::Yellow);
            }
            let marker = if selected { "▸ " } else { "  " };
            lines.push(Line::from(vec![
                Span::styled(marker, style),
                Span::styled(format!("{:<16}", item.label), style),
                Span::styled(
                    item.description,
                    Style::default().fg(Color::DarkGray),
                ),
            ]));
        }
        lines.push(Line::default());
        lines.push(Line::from(Span::styled(
            "↑/↓ Select  Enter Open  1-5 Tabs",
            Style::default().fg(Color::DarkGray),
        )));
        frame.render_widget(Paragraph::new(lines), area);
    }
}

impl Default for MenuScreen {
    fn default() -> Self {
        Self::new()
    }
}
