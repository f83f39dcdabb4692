//! # Devotional List Screen
//!
//! Searchable, filterable catalog of the weekly devotionals. Filter
//! tabs mirror the progress sets: All, Recent (read), and Bookmarked.
//! Sorting is by week (grouped by month) or alphabetical.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::content::{Content, Devotional};
use crate::core::action::Action;
use crate::core::nav::Route;
use crate::core::state::App;
use crate::tui::event::TuiEvent;
use crate::tui::text_field::TextField;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Filter {
    All,
    Recent,
    Bookmarked,
}

impl Filter {
    fn label(self) -> &'static str {
        match self {
            Filter::All => "All",
            Filter::Recent => "Recent",
            Filter::Bookmarked => "Bookmarked",
        }
    }

    fn next(self) -> Self {
        match self {
            Filter::All => Filter::Recent,
            Filter::Recent => Filter::Bookmarked,
            Filter::Bookmarked => Filter::All,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SortOrder {
    Week,
    Alphabetical,
}

impl SortOrder {
    fn label(self) -> &'static str {
        match self {
            SortOrder::Week => "By Week",
            SortOrder::Alphabetical => "A-Z",
        }
    }

    fn next(self) -> Self {
        match self {
            SortOrder::Week => SortOrder::Alphabetical,
            SortOrder::Alphabetical => SortOrder::Week,
        }
    }
}

pub struct DevotionalListScreen {
    search: TextField,
    searching: bool,
    filter: Filter,
    sort: SortOrder,
    selected: usize,
}

impl DevotionalListScreen {
    pub fn new() -> Self {
        Self {
            search: TextField::new(),
            searching: false,
            filter: Filter::All,
            sort: SortOrder::Week,
            selected: 0,
        }
    }

    pub fn capturing_input(&self) -> bool {
        self.searching
    }

    /// Devotionals matching the current search + filter, in sort order.
    fn visible<'a>(&self, content: &'a Content, app: &App) -> Vec<&'a Devotional> {
        let query = self.search.text().to_lowercase();
        let mut items: Vec<&Devotional> = content
            .devotionals
            .iter()
            .filter(|d| {
                let matches_search = query.is_empty()
                    || d.title.to_lowercase().contains(&query)
                    || d.scripture_reference.to_lowercase().contains(&query);
                let matches_filter = match self.filter {
                    Filter::All => true,
                    Filter::Recent => app.progress.is_read(&d.id),
                    Filter::Bookmarked => app.progress.is_bookmarked(&d.id),
                };
                matches_search && matches_filter
            })
            .collect();
        if self.sort == SortOrder::Alphabetical {
            items.sort_by(|a, b| a.title.cmp(&b.title));
        }
        items
    }

    pub fn handle_event(&mut self, event: &TuiEvent, app: &App) -> Option<Action> {
        if self.searching {
            match event {
                TuiEvent::Escape => {
                    self.searching = false;
                    self.search.clear();
                }
                TuiEvent::Submit => self.searching = false,
                other => {
                    self.search.handle_event(other);
                }
            }
            self.selected = 0;
            return None;
        }

        let visible_len = self.visible(&app.content, app).len();
        match event {
            TuiEvent::InputChar('/') => {
                self.searching = true;
                None
            }
            TuiEvent::InputChar('f') => {
                self.filter = self.filter.next();
                self.selected = 0;
                None
            }
            TuiEvent::InputChar('s') => {
                self.sort = self.sort.next();
                self.selected = 0;
                None
            }
            TuiEvent::CursorUp => {
                self.selected = self.selected.saturating_sub(1);
                None
            }
            TuiEvent::CursorDown => {
                if visible_len > 0 {
                    self.selected = (self.selected + 1).min(visible_len - 1);
                }
                None
            }
            TuiEvent::InputChar('b') => {
                let visible = self.visible(&app.content, app);
                visible
                    .get(self.selected)
                    .map(|d| Action::ToggleBookmark(d.id.clone()))
            }
            TuiEvent::Submit => {
                let visible = self.visible(&app.content, app);
                visible.get(self.selected).map(|d| {
                    Action::Navigate(Route::DevotionalDetail {
                        devotional: (*d).clone(),
                    })
                })
            }
            _ => None,
        }
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect, app: &App) {
        let [search_area, tabs_area, list_area, help_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(2),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .areas(area);

        // Search bar
        let [label_area, field_area] =
            Layout::horizontal([Constraint::Length(9), Constraint::Min(0)]).areas(search_area);
        frame.render_widget(
            Span::styled(" Search: ", Style::default().fg(Color::DarkGray)),
            label_area,
        );
        self.search
            .render(frame, field_area, self.searching, "press / to search");

        // Filter + sort tabs
        let mut tab_spans = Vec::new();
        for filter in [Filter::All, Filter::Recent, Filter::Bookmarked] {
            let style = if filter == self.filter {
                Style::default()
                    .fg(Color::Magenta)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::DarkGray)
            };
            tab_spans.push(Span::styled(format!(" {} ", filter.label()), style));
        }
        tab_spans.push(Span::raw("   "));
        tab_spans.push(Span::styled(
            format!("Sort: {}", self.sort.label()),
            Style::default().fg(Color::DarkGray),
        ));
        frame.render_widget(Line::from(tab_spans), tabs_area);

        // List
        let visible = self.visible(&app.content, app);
        self.selected = self.selected.min(visible.len().saturating_sub(1));
        if visible.is_empty() {
            frame.render_widget(
                Paragraph::new("No devotionals match.")
                    .style(Style::default().fg(Color::DarkGray)),
                list_area,
            );
        } else {
            let mut lines = Vec::new();
            let mut last_month = 0;
            for (i, d) in visible.iter().enumerate() {
                if self.sort == SortOrder::Week && d.month_number != last_month {
                    last_month = d.month_number;
                    lines.push(Line::from(Span::styled(
                        Content::month_label(d.month_number),
                        Style::default()
                            .fg(Color::Yellow)
                            .add_modifier(Modifier::BOLD),
                    )));
                }
                lines.push(self.row(d, i == self.selected, app));
            }
            // Keep the selection in view on short terminals.
            let selected_line = lines
                .iter()
                .position(|l| l.spans.first().is_some_and(|s| s.content.starts_with('▸')))
                .unwrap_or(0);
            let scroll = (selected_line as u16).saturating_sub(list_area.height.saturating_sub(1));
            frame.render_widget(Paragraph::new(lines).scroll((scroll, 0)), list_area);
        }

        frame.render_widget(
            Span::styled(
                " / Search  f Filter  s Sort  b Bookmark  Enter Open",
                Style::default().fg(Color::DarkGray),
            ),
            help_area,
        );
    }

    fn row(&self, d: &Devotional, selected: bool, app: &App) -> Line<'static> {
        let style = if selected {
            Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };
        let marker = if selected { "▸ " } else { "  " };
        let read = if app.progress.is_read(&d.id) { "✓" } else { " " };
        let bookmark = if app.progress.is_bookmarked(&d.id) { "♥" } else { " " };
        Line::from(vec![
            Span::styled(marker.to_string(), style),
            Span::styled(format!("Week {:>2}  ", d.week_number), style),
            Span::styled(format!("{:<20}", d.title), style),
            Span::styled(format!(" {} ", read), Style::default().fg(Color::Green)),
            Span::styled(format!("{} ", bookmark), Style::default().fg(Color::Red)),
            Span::styled(
                d.scripture_reference.clone(),
                Style::default().fg(Color::DarkGray),
            ),
        ])
    }
}

impl Default for DevotionalListScreen {
    fn default() -> Self {
        Self::new()
    }
}
