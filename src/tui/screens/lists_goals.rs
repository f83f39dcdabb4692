//! # Lists & Goals Screen
//!
//! Four shared lists (bucket list, prayer requests, goals, date night
//! ideas) with completable items. Items can be added and deleted;
//! everything lives for the session only. Adding a blank item is
//! silently ignored.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::core::action::Action;
use crate::core::state::App;
use crate::tui::event::TuiEvent;
use crate::tui::text_field::TextField;

struct ListItem {
    text: String,
    completed: bool,
}

struct ListCategory {
    title: &'static str,
    items: Vec<ListItem>,
}

fn item(text: &str, completed: bool) -> ListItem {
    ListItem {
        text: text.to_string(),
        completed,
    }
}

fn seed_categories() -> Vec<ListCategory> {
    vec![
        ListCategory {
            title: "Bucket List",
            items: vec![
                item("Visit Paris together", false),
                item("Learn to dance salsa", false),
                item("Go on a hot air balloon ride", true),
            ],
        },
        ListCategory {
            title: "Prayer Requests",
            items: vec![
                item("Pray for wisdom in career decisions", false),
                item("Pray for family health", false),
            ],
        },
        ListCategory {
            title: "Goals",
            items: vec![
                item("Save $10,000 for vacation", false),
                item("Read 12 books together this year", false),
            ],
        },
        ListCategory {
            title: "Date Night Ideas",
            items: vec![
                item("Cooking class together", false),
                item("Stargazing picnic", false),
            ],
        },
    ]
}

pub struct ListsGoalsScreen {
    categories: Vec<ListCategory>,
    category: usize,
    cursor: usize,
    adding: Option<TextField>,
}

impl ListsGoalsScreen {
    pub fn new() -> Self {
        Self {
            categories: seed_categories(),
            category: 0,
            cursor: 0,
            adding: None,
        }
    }

    pub fn capturing_input(&self) -> bool {
        self.adding.is_some()
    }

    fn current(&self) -> &ListCategory {
        &self.categories[self.category]
    }

    pub fn handle_event(&mut self, event: &TuiEvent, _app: &App) -> Option<Action> {
        if let Some(field) = &mut self.adding {
            match event {
                TuiEvent::Escape => self.adding = None,
                TuiEvent::Submit => {
                    // Blank entries are dropped at the boundary.
                    if !field.is_blank() {
                        let text = field.text().trim().to_string();
                        self.categories[self.category]
                            .items
                            .push(ListItem { text, completed: false });
                    }
                    self.adding = None;
                }
                other => {
                    field.handle_event(other);
                }
            }
            return None;
        }

        match event {
            TuiEvent::CursorLeft => {
                self.category = self.category.saturating_sub(1);
                self.cursor = 0;
            }
            TuiEvent::CursorRight => {
                self.category = (self.category + 1).min(self.categories.len() - 1);
                self.cursor = 0;
            }
            TuiEvent::CursorUp => self.cursor = self.cursor.saturating_sub(1),
            TuiEvent::CursorDown => {
                let len = self.current().items.len();
                if len > 0 {
                    self.cursor = (self.cursor + 1).min(len - 1);
                }
            }
            TuiEvent::InputChar(' ') | TuiEvent::InputChar('x') | TuiEvent::Submit => {
                let cursor = self.cursor;
                if let Some(entry) = self.categories[self.category].items.get_mut(cursor) {
                    entry.completed = !entry.completed;
                }
            }
            TuiEvent::InputChar('a') => self.adding = Some(TextField::new()),
            TuiEvent::InputChar('d') => {
                let cursor = self.cursor;
                let items = &mut self.categories[self.category].items;
                if cursor < items.len() {
                    items.remove(cursor);
                    self.cursor = self.cursor.min(items.len().saturating_sub(1));
                }
            }
            _ => {}
        }
        None
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect, _app: &App) {
        let [title_area, tabs_area, list_area, input_area, help_area] = Layout::vertical([
            Constraint::Length(2),
            Constraint::Length(2),
            Constraint::Min(0),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(area);

        frame.render_widget(
            Paragraph::new(Span::styled(
                "Lists & Goals",
                Style::default()
                    .fg(Color::Magenta)
                    .add_modifier(Modifier::BOLD),
            )),
            title_area,
        );

        // Category tabs
        let mut spans = Vec::new();
        for (i, category) in self.categories.iter().enumerate() {
            let style = if i == self.category {
                Style::default()
                    .fg(Color::Magenta)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::DarkGray)
            };
            spans.push(Span::styled(format!(" {} ", category.title), style));
        }
        frame.render_widget(Line::from(spans), tabs_area);

        // Items
        let mut lines = Vec::new();
        if self.current().items.is_empty() {
            lines.push(Line::from(Span::styled(
                "Nothing here yet — press a to add.",
                Style::default().fg(Color::DarkGray),
            )));
        }
        for (i, entry) in self.current().items.iter().enumerate() {
            let selected = i == self.cursor && self.adding.is_none();
            let mark = if entry.completed { "[x]" } else { "[ ]" };
            let mut style = if entry.completed {
                Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::CROSSED_OUT)
            } else {
                Style::default()
            };
            if selected {
                style = style.add_modifier(Modifier::BOLD).fg(Color::Magenta);
            }
            let marker = if selected { "▸ " } else { "  " };
            lines.push(Line::from(vec![
                Span::styled(marker, style),
                Span::styled(format!("{} ", mark), style),
                Span::styled(entry.text.clone(), style),
            ]));
        }
        frame.render_widget(Paragraph::new(lines), list_area);

        // Add-item input
        if let Some(field) = &self.adding {
            let [label_area, field_area] =
                Layout::horizontal([Constraint::Length(7), Constraint::Min(0)]).areas(input_area);
            frame.render_widget(
                Span::styled(" Add: ", Style::default().fg(Color::Yellow)),
                label_area,
            );
            field.render(frame, field_area, true, "");
        }

        frame.render_widget(
            Span::styled(
                " ←/→ Category  ↑/↓ Item  Space Toggle  a Add  d Delete  Esc Back",
                Style::default().fg(Color::DarkGray),
            ),
            help_area,
        );
    }
}

impl Default for ListsGoalsScreen {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::test_app;

    #[test]
    fn test_toggle_item_completion() {
        let app = test_app();
        let mut screen = ListsGoalsScreen::new();
        assert!(!screen.current().items[0].completed);
        screen.handle_event(&TuiEvent::InputChar(' '), &app);
        assert!(screen.current().items[0].completed);
        screen.handle_event(&TuiEvent::InputChar(' '), &app);
        assert!(!screen.current().items[0].completed);
    }

    #[test]
    fn test_add_item_commits_on_enter() {
        let app = test_app();
        let mut screen = ListsGoalsScreen::new();
        let before = screen.current().items.len();
        screen.handle_event(&TuiEvent::InputChar('a'), &app);
        assert!(screen.capturing_input());
        for c in "Build a bookshelf".chars() {
            screen.handle_event(&TuiEvent::InputChar(c), &app);
        }
        screen.handle_event(&TuiEvent::Submit, &app);
        assert!(!screen.capturing_input());
        assert_eq!(screen.current().items.len(), before + 1);
        assert_eq!(screen.current().items.last().unwrap().text, "Build a bookshelf");
    }

    #[test]
    fn test_blank_add_is_ignored() {
        let app = test_app();
        let mut screen = ListsGoalsScreen::new();
        let before = screen.current().items.len();
        screen.handle_event(&TuiEvent::InputChar('a'), &app);
        screen.handle_event(&TuiEvent::InputChar(' '), &app);
        screen.handle_event(&TuiEvent::Submit, &app);
        assert_eq!(screen.current().items.len(), before);
    }

    #[test]
    fn test_delete_item() {
        let app = test_app();
        let mut screen = ListsGoalsScreen::new();
        let before = screen.current().items.len();
        screen.handle_event(&TuiEvent::InputChar('d'), &app);
        assert_eq!(screen.current().items.len(), before - 1);
    }

    #[test]
    fn test_category_switch_resets_cursor() {
        let app = test_app();
        let mut screen = ListsGoalsScreen::new();
        screen.handle_event(&TuiEvent::CursorDown, &app);
        assert_eq!(screen.cursor, 1);
        screen.handle_event(&TuiEvent::CursorRight, &app);
        assert_eq!(screen.category, 1);
        assert_eq!(screen.cursor, 0);
    }

    #[test]
    fn test_renders() {
        use ratatui::Terminal;
        use ratatui::backend::TestBackend;

        let app = test_app();
        let mut screen = ListsGoalsScreen::new();
        let backend = TestBackend::new(90, 24);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| screen.render(f, f.area(), &app)).unwrap();

        let text: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect();
        assert!(text.contains("Bucket List"));
        assert!(text.contains("Visit Paris together"));
    }
}
