//! # Screens
//!
//! One module per screen. Every screen follows the same collaborator
//! contract: it holds only presentation state, receives the `App`
//! read-only, and returns core `Action`s from `handle_event`. Screens
//! never mutate the navigator or the progress store directly.
//!
//! Screen state is rebuilt whenever the route changes — navigation
//! replaces the route wholesale, so the view starts fresh, matching
//! the mount/unmount lifecycle the screens were designed around.

mod calendar;
mod devotional_detail;
mod devotional_list;
mod home;
mod lists_goals;
mod menu;
mod premium;
mod profile;
mod reflection;
mod settings;
mod shmily;

pub use calendar::CalendarScreen;
pub use devotional_detail::DevotionalDetailScreen;
pub use devotional_list::DevotionalListScreen;
pub use home::HomeScreen;
pub use lists_goals::ListsGoalsScreen;
pub use menu::MenuScreen;
pub use premium::PremiumScreen;
pub use profile::ProfileScreen;
pub use reflection::ReflectionScreen;
pub use settings::SettingsScreen;
pub use shmily::ShmilyScreen;

use ratatui::Frame;
use ratatui::layout::Rect;

use crate::core::action::Action;
use crate::core::nav::Route;
use crate::core::state::App;
use crate::tui::event::TuiEvent;

/// The active screen's view state.
pub enum ScreenView {
    Home(HomeScreen),
    DevotionalList(DevotionalListScreen),
    DevotionalDetail(DevotionalDetailScreen),
    Reflection(ReflectionScreen),
    Calendar(CalendarScreen),
    Shmily(ShmilyScreen),
    Menu(MenuScreen),
    ListsGoals(ListsGoalsScreen),
    Settings(SettingsScreen),
    Profile(ProfileScreen),
    Premium(PremiumScreen),
}

impl ScreenView {
    /// Build fresh view state for a route.
    pub fn for_route(route: &Route, app: &App) -> Self {
        match route {
            Route::Home => ScreenView::Home(HomeScreen::new()),
            Route::DevotionalList => ScreenView::DevotionalList(DevotionalListScreen::new()),
            Route::DevotionalDetail { devotional } => {
                ScreenView::DevotionalDetail(DevotionalDetailScreen::new(devotional.clone()))
            }
            Route::Reflection { week_number, .. } => {
                ScreenView::Reflection(ReflectionScreen::new(*week_number, app))
            }
            Route::Calendar => ScreenView::Calendar(CalendarScreen::new()),
            Route::ShmilyNotes => ScreenView::Shmily(ShmilyScreen::new(app)),
            Route::Menu => ScreenView::Menu(MenuScreen::new()),
            Route::ListsGoals => ScreenView::ListsGoals(ListsGoalsScreen::new()),
            Route::Settings => ScreenView::Settings(SettingsScreen::new()),
            Route::Profile => ScreenView::Profile(ProfileScreen::new()),
            Route::Premium => ScreenView::Premium(PremiumScreen::new()),
        }
    }

    /// Whether the screen is currently consuming raw character input
    /// (search bars, composers, editors). While true, chrome shortcuts
    /// like `q` and the number row stay out of the way.
    pub fn capturing_input(&self) -> bool {
        match self {
            ScreenView::DevotionalList(s) => s.capturing_input(),
            ScreenView::Reflection(s) => s.capturing_input(),
            ScreenView::Shmily(s) => s.capturing_input(),
            ScreenView::ListsGoals(s) => s.capturing_input(),
            ScreenView::Profile(s) => s.capturing_input(),
            _ => false,
        }
    }

    pub fn handle_event(&mut self, event: &TuiEvent, app: &App) -> Option<Action> {
        match self {
            ScreenView::Home(s) => s.handle_event(event, app),
            ScreenView::DevotionalList(s) => s.handle_event(event, app),
            ScreenView::DevotionalDetail(s) => s.handle_event(event, app),
            ScreenView::Reflection(s) => s.handle_event(event, app),
            ScreenView::Calendar(s) => s.handle_event(event, app),
            ScreenView::Shmily(s) => s.handle_event(event, app),
            ScreenView::Menu(s) => s.handle_event(event, app),
            ScreenView::ListsGoals(s) => s.handle_event(event, app),
            ScreenView::Settings(s) => s.handle_event(event, app),
            ScreenView::Profile(s) => s.handle_event(event, app),
            ScreenView::Premium(s) => s.handle_event(event, app),
        }
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect, app: &App) {
        match self {
            ScreenView::Home(s) => s.render(frame, area, app),
            ScreenView::DevotionalList(s) => s.render(frame, area, app),
            ScreenView::DevotionalDetail(s) => s.render(frame, area, app),
            ScreenView::Reflection(s) => s.render(frame, area, app),
            ScreenView::Calendar(s) => s.render(frame, area, app),
            ScreenView::Shmily(s) => s.render(frame, area, app),
            ScreenView::Menu(s) => s.render(frame, area, app),
            ScreenView::ListsGoals(s) => s.render(frame, area, app),
            ScreenView::Settings(s) => s.render(frame, area, app),
            ScreenView::Profile(s) => s.render(frame, area, app),
            ScreenView::Premium(s) => s.render(frame, area, app),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{test_app, test_devotional};

    #[test]
    fn test_for_route_builds_matching_screen() {
        let app = test_app();
        let cases: Vec<(Route, fn(&ScreenView) -> bool)> = vec![
            (Route::Home, |s| matches!(s, ScreenView::Home(_))),
            (Route::DevotionalList, |s| {
                matches!(s, ScreenView::DevotionalList(_))
            }),
            (
                Route::DevotionalDetail {
                    devotional: test_devotional("1", 1),
                },
                |s| matches!(s, ScreenView::DevotionalDetail(_)),
            ),
            (
                Route::Reflection {
                    week_number: 2,
                    from_devotional: None,
                },
                |s| matches!(s, ScreenView::Reflection(_)),
            ),
            (Route::Calendar, |s| matches!(s, ScreenView::Calendar(_))),
            (Route::ShmilyNotes, |s| matches!(s, ScreenView::Shmily(_))),
            (Route::Menu, |s| matches!(s, ScreenView::Menu(_))),
            (Route::ListsGoals, |s| matches!(s, ScreenView::ListsGoals(_))),
            (Route::Settings, |s| matches!(s, ScreenView::Settings(_))),
            (Route::Profile, |s| matches!(s, ScreenView::Profile(_))),
            (Route::Premium, |s| matches!(s, ScreenView::Premium(_))),
        ];
        for (route, check) in cases {
            let view = ScreenView::for_route(&route, &app);
            assert!(check(&view), "wrong screen for {:?}", route);
        }
    }

    #[test]
    fn test_fresh_screens_do_not_capture_input() {
        let app = test_app();
        for route in [Route::Home, Route::DevotionalList, Route::Menu] {
            let view = ScreenView::for_route(&route, &app);
            assert!(!view.capturing_input());
        }
        // The SHMILY composer focuses its input immediately.
        let view = ScreenView::for_route(&Route::ShmilyNotes, &app);
        assert!(view.capturing_input());
    }
}
