//! Root frame composition: chrome (header, tab bar) around the active
//! screen, with the welcome overlay and toast drawn on top. Chrome
//! visibility is recomputed from the current screen on every frame,
//! never cached.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout};

use crate::core::state::App;
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{Header, TabBar, ToastView};

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState) {
    use Constraint::{Length, Min};

    let screen_id = app.navigator.screen();
    let header_height = if screen_id.shows_header() { 2 } else { 0 };
    let tab_height = if screen_id.shows_tab_bar() { 1 } else { 0 };

    let [header_area, main_area, tab_area] =
        Layout::vertical([Length(header_height), Min(0), Length(tab_height)])
            .areas(frame.area());

    if screen_id.shows_header() {
        let mut header = Header::new(screen_id.header_title(), app.profile.name.clone());
        header.render(frame, header_area);
    }

    tui.screen.render(frame, main_area, app);

    if screen_id.shows_tab_bar() {
        let mut tab_bar = TabBar::new(app.navigator.active_tab());
        tab_bar.render(frame, tab_area);
    }

    if app.show_welcome {
        tui.welcome.render(frame, frame.area());
    }

    if let Some(toast) = app.toasts.current() {
        let mut view = ToastView::new(toast.clone());
        view.render(frame, frame.area());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;
    use std::time::Instant;

    use crate::core::action::{Action, update};
    use crate::core::nav::{Route, Tab};
    use crate::core::toast::ToastKind;
    use crate::test_support::{test_app, test_devotional};
    use crate::tui::TuiState;

    fn render(app: &App, tui: &mut TuiState) -> String {
        let backend = TestBackend::new(90, 30);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| draw_ui(f, app, tui)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_home_shows_chrome_and_welcome() {
        let app = test_app();
        let mut tui = TuiState::new(&app);
        let text = render(&app, &mut tui);
        // Header greeting, tab labels, and the first-run overlay.
        assert!(text.contains("Sarah"));
        assert!(text.contains("SHMILY"));
        assert!(text.contains("Welcome to The Marriage Journal"));
    }

    #[test]
    fn test_settings_hides_header_and_tab_bar() {
        let mut app = test_app();
        update(&mut app, Action::DismissWelcome, Instant::now());
        update(&mut app, Action::SwitchTab(Tab::Menu), Instant::now());
        update(&mut app, Action::Navigate(Route::Settings), Instant::now());
        let mut tui = TuiState::new(&app);
        let text = render(&app, &mut tui);
        assert!(!text.contains("Good "));
        assert!(!text.contains("1 Home"));
        assert!(text.contains("Daily Reminder"));
    }

    #[test]
    fn test_detail_keeps_tab_bar_without_header() {
        let mut app = test_app();
        update(&mut app, Action::DismissWelcome, Instant::now());
        update(
            &mut app,
            Action::Navigate(Route::DevotionalDetail {
                devotional: test_devotional("1", 1),
            }),
            Instant::now(),
        );
        let mut tui = TuiState::new(&app);
        let text = render(&app, &mut tui);
        assert!(text.contains("Devotionals")); // tab label
        assert!(!text.contains("Good ")); // no greeting header
    }

    #[test]
    fn test_toast_renders_over_screen() {
        let mut app = test_app();
        update(&mut app, Action::DismissWelcome, Instant::now());
        update(
            &mut app,
            Action::ShowToast {
                message: "Saved!".to_string(),
                kind: ToastKind::Success,
            },
            Instant::now(),
        );
        let mut tui = TuiState::new(&app);
        let text = render(&app, &mut tui);
        assert!(text.contains("Saved!"));
    }
}
