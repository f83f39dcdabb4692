//! # Application State
//!
//! The root composition's state: the two core containers (navigator,
//! progress store) plus the toast channel, resolved profile/settings,
//! the static content catalog, and a couple of lifecycle flags.
//!
//! Screens never touch this struct directly — they receive read-only
//! borrows and emit [`Action`](crate::core::action::Action) values,
//! which `update()` applies here.

use crate::content::Content;
use crate::core::config::{Profile, Settings};
use crate::core::nav::Navigator;
use crate::core::progress::ProgressStore;
use crate::core::store::KeyValueStore;
use crate::core::toast::ToastState;

pub struct App {
    pub navigator: Navigator,
    pub progress: ProgressStore,
    pub toasts: ToastState,
    pub profile: Profile,
    pub settings: Settings,
    pub content: Content,
    /// Onboarding overlay visibility; decided once at startup from the
    /// stored welcome flag.
    pub show_welcome: bool,
    pub should_quit: bool,
}

impl App {
    pub fn new(
        content: Content,
        store: Box<dyn KeyValueStore>,
        profile: Profile,
        settings: Settings,
    ) -> Self {
        let progress = ProgressStore::load(store);
        let show_welcome = !progress.has_seen_welcome();
        Self {
            navigator: Navigator::new(),
            progress,
            toasts: ToastState::new(),
            profile,
            settings,
            content,
            show_welcome,
            should_quit: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::core::nav::{ScreenId, Tab};
    use crate::core::progress::WELCOME_KEY;
    use crate::core::store::MemoryStore;
    use crate::test_support::{test_app, test_app_with_store};

    #[test]
    fn test_app_starts_at_home() {
        let app = test_app();
        assert_eq!(app.navigator.screen(), ScreenId::Home);
        assert_eq!(app.navigator.active_tab(), Tab::Home);
        assert!(!app.should_quit);
    }

    #[test]
    fn test_welcome_shown_on_first_run() {
        let app = test_app();
        assert!(app.show_welcome);
    }

    #[test]
    fn test_welcome_skipped_when_flag_stored() {
        let app = test_app_with_store(MemoryStore::new().with(WELCOME_KEY, "true"));
        assert!(!app.show_welcome);
    }
}
