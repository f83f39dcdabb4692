//! # Navigation Controller
//!
//! Owns which screen is current, its typed payload, and the active
//! bottom-tab highlight. Back-navigation is computed one step at a
//! time from the current route alone — there is no history stack, and
//! that is a deliberate contract, not a shortcut: every `go_back`
//! resolves immediately, and pressing back at the home screen is a
//! stable no-op.
//!
//! Routes pair each screen with the payload it needs, so a detail
//! screen can never be entered without its record.

use crate::content::Devotional;

/// Enumerated screen identity. Exactly one screen is current at any time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenId {
    Home,
    DevotionalList,
    DevotionalDetail,
    Reflection,
    Calendar,
    ShmilyNotes,
    Menu,
    ListsGoals,
    Settings,
    Profile,
    Premium,
}

/// The five primary bottom tabs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Home,
    Devotionals,
    Calendar,
    Shmily,
    Menu,
}

impl Tab {
    pub const ALL: [Tab; 5] = [Tab::Home, Tab::Devotionals, Tab::Calendar, Tab::Shmily, Tab::Menu];

    pub fn label(self) -> &'static str {
        match self {
            Tab::Home => "Home",
            Tab::Devotionals => "Devotionals",
            Tab::Calendar => "Calendar",
            Tab::Shmily => "SHMILY",
            Tab::Menu => "Menu",
        }
    }

    /// The payload-free route a tab press lands on.
    pub fn route(self) -> Route {
        match self {
            Tab::Home => Route::Home,
            Tab::Devotionals => Route::DevotionalList,
            Tab::Calendar => Route::Calendar,
            Tab::Shmily => Route::ShmilyNotes,
            Tab::Menu => Route::Menu,
        }
    }

    /// Tab at a 1-based position (the `1`..`5` key row), if any.
    pub fn from_index(index: usize) -> Option<Tab> {
        Tab::ALL.get(index.wrapping_sub(1)).copied()
    }
}

/// Current screen plus its screen-specific payload. Replaced wholesale
/// on every navigation action; never partially mutated.
#[derive(Debug, Clone, PartialEq)]
pub enum Route {
    Home,
    DevotionalList,
    DevotionalDetail {
        devotional: Devotional,
    },
    Reflection {
        week_number: u32,
        /// When the reflection was opened from a devotional detail
        /// screen, the record to return to on back-navigation.
        from_devotional: Option<Devotional>,
    },
    Calendar,
    ShmilyNotes,
    Menu,
    ListsGoals,
    Settings,
    Profile,
    Premium,
}

impl Route {
    pub fn screen(&self) -> ScreenId {
        match self {
            Route::Home => ScreenId::Home,
            Route::DevotionalList => ScreenId::DevotionalList,
            Route::DevotionalDetail { .. } => ScreenId::DevotionalDetail,
            Route::Reflection { .. } => ScreenId::Reflection,
            Route::Calendar => ScreenId::Calendar,
            Route::ShmilyNotes => ScreenId::ShmilyNotes,
            Route::Menu => ScreenId::Menu,
            Route::ListsGoals => ScreenId::ListsGoals,
            Route::Settings => ScreenId::Settings,
            Route::Profile => ScreenId::Profile,
            Route::Premium => ScreenId::Premium,
        }
    }

    /// The tab this route belongs to, if it is one of the five primary
    /// screens.
    pub fn tab(&self) -> Option<Tab> {
        match self.screen() {
            ScreenId::Home => Some(Tab::Home),
            ScreenId::DevotionalList => Some(Tab::Devotionals),
            ScreenId::Calendar => Some(Tab::Calendar),
            ScreenId::ShmilyNotes => Some(Tab::Shmily),
            ScreenId::Menu => Some(Tab::Menu),
            _ => None,
        }
    }
}

impl ScreenId {
    /// Header visible for tab-level screens other than the menu.
    pub fn shows_header(self) -> bool {
        !matches!(
            self,
            ScreenId::DevotionalDetail
                | ScreenId::Reflection
                | ScreenId::ListsGoals
                | ScreenId::Settings
                | ScreenId::Profile
                | ScreenId::Premium
                | ScreenId::Menu
        )
    }

    /// Tab bar visible everywhere except the menu sub-screens.
    pub fn shows_tab_bar(self) -> bool {
        !matches!(
            self,
            ScreenId::ListsGoals | ScreenId::Settings | ScreenId::Profile | ScreenId::Premium
        )
    }

    /// Fixed header title; `None` means the header shows the default
    /// greeting instead.
    pub fn header_title(self) -> Option<&'static str> {
        match self {
            ScreenId::DevotionalList => Some("Devotionals"),
            ScreenId::Calendar => Some("Calendar"),
            ScreenId::ShmilyNotes => Some("SHMILY"),
            ScreenId::Menu => Some("Menu"),
            _ => None,
        }
    }
}

/// The navigation state machine: current route + active tab.
///
/// `Tab` equals the current screen's tab whenever the screen is
/// primary; otherwise it retains the last primary tab visited, so
/// returning to a primary screen restores the correct highlight.
pub struct Navigator {
    route: Route,
    active_tab: Tab,
}

impl Navigator {
    pub fn new() -> Self {
        Self {
            route: Route::Home,
            active_tab: Tab::Home,
        }
    }

    pub fn route(&self) -> &Route {
        &self.route
    }

    pub fn screen(&self) -> ScreenId {
        self.route.screen()
    }

    pub fn active_tab(&self) -> Tab {
        self.active_tab
    }

    /// Replace the navigation state wholesale. Updates the tab
    /// highlight only when the target is a primary screen.
    pub fn navigate(&mut self, route: Route) {
        if let Some(tab) = route.tab() {
            self.active_tab = tab;
        }
        self.route = route;
    }

    /// One-step back-navigation computed from the current route alone.
    ///
    /// | current | target |
    /// |---|---|
    /// | DevotionalDetail | DevotionalList |
    /// | Reflection (from a devotional) | that DevotionalDetail |
    /// | Reflection (otherwise) | Home |
    /// | ListsGoals / Settings / Profile / Premium | Menu |
    /// | anything else | Home |
    pub fn go_back(&mut self) {
        let current = std::mem::replace(&mut self.route, Route::Home);
        let target = match current {
            Route::DevotionalDetail { .. } => Route::DevotionalList,
            Route::Reflection {
                from_devotional: Some(devotional),
                ..
            } => Route::DevotionalDetail { devotional },
            Route::Reflection {
                from_devotional: None,
                ..
            } => Route::Home,
            Route::ListsGoals | Route::Settings | Route::Profile | Route::Premium => Route::Menu,
            _ => Route::Home,
        };
        self.navigate(target);
    }

    /// Direct tab selection: highlight the tab and land on its
    /// payload-free route. No guard conditions.
    pub fn handle_tab_change(&mut self, tab: Tab) {
        self.active_tab = tab;
        self.route = tab.route();
    }
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::Devotional;

    fn devotional(id: &str, week: u32) -> Devotional {
        Devotional {
            id: id.to_string(),
            week_number: week,
            month_number: 1,
            title: format!("Week {}", week),
            scripture_text: "Text".to_string(),
            scripture_reference: "Ref 1:1".to_string(),
            body: "Body".to_string(),
            ponder_questions: vec![],
            practice_items: vec![],
            prayer: "Prayer".to_string(),
        }
    }

    #[test]
    fn test_navigate_to_primary_screen_moves_tab() {
        let mut nav = Navigator::new();
        nav.navigate(Route::Calendar);
        assert_eq!(nav.screen(), ScreenId::Calendar);
        assert_eq!(nav.active_tab(), Tab::Calendar);
    }

    #[test]
    fn test_navigate_to_sub_screen_retains_tab() {
        let mut nav = Navigator::new();
        nav.handle_tab_change(Tab::Menu);
        nav.navigate(Route::Settings);
        assert_eq!(nav.screen(), ScreenId::Settings);
        assert_eq!(nav.active_tab(), Tab::Menu);
    }

    #[test]
    fn test_back_from_detail_lands_on_list() {
        let mut nav = Navigator::new();
        nav.navigate(Route::DevotionalDetail {
            devotional: devotional("1", 1),
        });
        nav.go_back();
        assert_eq!(nav.screen(), ScreenId::DevotionalList);
        assert_eq!(nav.active_tab(), Tab::Devotionals);
    }

    #[test]
    fn test_back_from_reflection_restores_devotional_detail() {
        let mut nav = Navigator::new();
        let d = devotional("5", 5);
        nav.navigate(Route::Reflection {
            week_number: 5,
            from_devotional: Some(d.clone()),
        });
        nav.go_back();
        assert_eq!(nav.route(), &Route::DevotionalDetail { devotional: d });
        // Detail is not primary, so the tab is untouched.
        assert_eq!(nav.active_tab(), Tab::Home);
    }

    #[test]
    fn test_back_twice_from_reflection_does_not_loop() {
        let mut nav = Navigator::new();
        nav.navigate(Route::Reflection {
            week_number: 2,
            from_devotional: Some(devotional("2", 2)),
        });
        nav.go_back();
        assert_eq!(nav.screen(), ScreenId::DevotionalDetail);
        nav.go_back();
        assert_eq!(nav.screen(), ScreenId::DevotionalList);
    }

    #[test]
    fn test_back_from_standalone_reflection_lands_home() {
        let mut nav = Navigator::new();
        nav.navigate(Route::Reflection {
            week_number: 3,
            from_devotional: None,
        });
        nav.go_back();
        assert_eq!(nav.screen(), ScreenId::Home);
        assert_eq!(nav.active_tab(), Tab::Home);
    }

    #[test]
    fn test_back_from_menu_sub_screens_lands_on_menu() {
        for route in [Route::ListsGoals, Route::Settings, Route::Profile, Route::Premium] {
            let mut nav = Navigator::new();
            nav.navigate(route);
            nav.go_back();
            assert_eq!(nav.screen(), ScreenId::Menu);
            assert_eq!(nav.active_tab(), Tab::Menu);
        }
    }

    #[test]
    fn test_back_at_home_is_a_stable_no_op() {
        let mut nav = Navigator::new();
        nav.go_back();
        assert_eq!(nav.route(), &Route::Home);
        assert_eq!(nav.active_tab(), Tab::Home);
    }

    #[test]
    fn test_tab_change_clears_payload() {
        let mut nav = Navigator::new();
        nav.navigate(Route::DevotionalDetail {
            devotional: devotional("1", 1),
        });
        nav.handle_tab_change(Tab::Calendar);
        assert_eq!(nav.route(), &Route::Calendar);
        assert_eq!(nav.active_tab(), Tab::Calendar);
    }

    #[test]
    fn test_tab_from_index() {
        assert_eq!(Tab::from_index(1), Some(Tab::Home));
        assert_eq!(Tab::from_index(5), Some(Tab::Menu));
        assert_eq!(Tab::from_index(0), None);
        assert_eq!(Tab::from_index(6), None);
    }

    #[test]
    fn test_header_visibility() {
        assert!(ScreenId::Home.shows_header());
        assert!(ScreenId::DevotionalList.shows_header());
        assert!(ScreenId::Calendar.shows_header());
        assert!(ScreenId::ShmilyNotes.shows_header());
        for screen in [
            ScreenId::DevotionalDetail,
            ScreenId::Reflection,
            ScreenId::ListsGoals,
            ScreenId::Settings,
            ScreenId::Profile,
            ScreenId::Premium,
            ScreenId::Menu,
        ] {
            assert!(!screen.shows_header(), "{:?} should hide the header", screen);
        }
    }

    #[test]
    fn test_tab_bar_visibility() {
        assert!(ScreenId::Menu.shows_tab_bar());
        assert!(ScreenId::DevotionalDetail.shows_tab_bar());
        assert!(ScreenId::Reflection.shows_tab_bar());
        for screen in [
            ScreenId::ListsGoals,
            ScreenId::Settings,
            ScreenId::Profile,
            ScreenId::Premium,
        ] {
            assert!(!screen.shows_tab_bar(), "{:?} should hide the tab bar", screen);
        }
    }

    #[test]
    fn test_header_titles() {
        assert_eq!(ScreenId::DevotionalList.header_title(), Some("Devotionals"));
        assert_eq!(ScreenId::Calendar.header_title(), Some("Calendar"));
        assert_eq!(ScreenId::ShmilyNotes.header_title(), Some("SHMILY"));
        assert_eq!(ScreenId::Menu.header_title(), Some("Menu"));
        assert_eq!(ScreenId::Home.header_title(), None);
    }
}
