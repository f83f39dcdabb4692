//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard events into core `Action` values. This is
//! the only module that knows about ratatui and crossterm.
//!
//! ## Event routing
//!
//! Per key event, in order:
//!
//! 1. Ctrl+C quits regardless of mode.
//! 2. While the welcome overlay is up, it gets every event.
//! 3. Chrome shortcuts (`q`, the 1-5 tab row, Esc for back) apply when
//!    the active screen is not capturing text input.
//! 4. Everything else goes to the active screen, which may return an
//!    `Action` for the reducer.
//!
//! Screen view-state is rebuilt whenever an action changes the route,
//! giving wholesale-replacement navigation its remount semantics.
//!
//! ## Redraw strategy
//!
//! Conditional redraw: the loop only draws after an event or an
//! applied action, and polls with a short timeout while a toast is
//! pending so its expiry repaints promptly (500ms otherwise).

mod component;
mod components;
mod event;
mod screens;
mod text_field;
mod ui;

use std::io;
use std::time::{Duration, Instant};

use log::warn;

use crate::core::action::{Action, Effect, update};
use crate::core::config;
use crate::core::nav::{Route, Tab};
use crate::core::state::App;
use crate::tui::component::EventHandler;
use crate::tui::components::{WelcomeEvent, WelcomeOverlay};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};
use crate::tui::screens::ScreenView;

/// Presentation state owned by the TUI layer: the active screen's view
/// state and the welcome overlay's page.
pub struct TuiState {
    pub screen: ScreenView,
    pub welcome: WelcomeOverlay,
    last_route: Route,
}

impl TuiState {
    pub fn new(app: &App) -> Self {
        Self {
            screen: ScreenView::for_route(app.navigator.route(), app),
            welcome: WelcomeOverlay::new(),
            last_route: app.navigator.route().clone(),
        }
    }

    /// Rebuild the screen view when the route changed.
    fn sync_route(&mut self, app: &App) {
        if app.navigator.route() != &self.last_route {
            self.last_route = app.navigator.route().clone();
            self.screen = ScreenView::for_route(app.navigator.route(), app);
        }
    }
}

/// Apply an action, run its effect, and refresh the screen view.
fn apply(app: &mut App, tui: &mut TuiState, action: Action) {
    let effect = update(app, action, Instant::now());
    match effect {
        Effect::PersistProfile => {
            if let Err(e) = config::save_profile(&app.profile, &app.settings) {
                warn!("Failed to persist profile: {}", e);
            }
        }
        Effect::None => {}
    }
    tui.sync_route(app);
}

pub fn run(mut app: App) -> io::Result<()> {
    let mut terminal = ratatui::init();
    let mut tui = TuiState::new(&app);
    let mut needs_redraw = true;

    loop {
        // Expire the toast before drawing; a visibility change is a
        // reason to repaint.
        let now = Instant::now();
        let toast_was_visible = app.toasts.is_visible();
        app.toasts.tick(now);
        if toast_was_visible != app.toasts.is_visible() {
            needs_redraw = true;
        }

        if needs_redraw {
            terminal.draw(|f| ui::draw_ui(f, &app, &mut tui))?;
            needs_redraw = false;
        }

        // Poll timeout: tight enough to catch the toast deadline, lazy
        // when idle.
        let timeout = match app.toasts.deadline() {
            Some(deadline) => deadline
                .saturating_duration_since(now)
                .min(Duration::from_millis(250)),
            None => Duration::from_millis(500),
        };

        let first_event = poll_event_timeout(timeout);
        if first_event.is_some() {
            needs_redraw = true;
        }

        // Process the first event plus anything already queued.
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            // Resize just needs the redraw flagged above.
            if event == TuiEvent::Resize {
                continue;
            }

            if event == TuiEvent::ForceQuit {
                apply(&mut app, &mut tui, Action::Quit);
                continue;
            }

            // The onboarding overlay owns the keyboard while visible.
            if app.show_welcome {
                if let Some(WelcomeEvent::Dismiss) = tui.welcome.handle_event(&event) {
                    apply(&mut app, &mut tui, Action::DismissWelcome);
                }
                continue;
            }

            // Chrome shortcuts, unless the screen is editing text.
            if !tui.screen.capturing_input() {
                match event {
                    TuiEvent::InputChar('q') => {
                        apply(&mut app, &mut tui, Action::Quit);
                        continue;
                    }
                    TuiEvent::InputChar(c @ '1'..='5')
                        if app.navigator.screen().shows_tab_bar() =>
                    {
                        if let Some(tab) = Tab::from_index(c as usize - '0' as usize) {
                            apply(&mut app, &mut tui, Action::SwitchTab(tab));
                        }
                        continue;
                    }
                    // Esc clears a visible toast before it navigates.
                    TuiEvent::Escape if app.toasts.is_visible() => {
                        apply(&mut app, &mut tui, Action::DismissToast);
                        continue;
                    }
                    TuiEvent::Escape => {
                        apply(&mut app, &mut tui, Action::GoBack);
                        continue;
                    }
                    _ => {}
                }
            }

            if let Some(action) = tui.screen.handle_event(&event, &app) {
                apply(&mut app, &mut tui, action);
            }
        }

        if app.should_quit {
            break;
        }
    }

    ratatui::restore();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::nav::ScreenId;
    use crate::core::toast::ToastKind;
    use crate::test_support::{test_app, test_devotional};

    #[test]
    fn test_apply_rebuilds_screen_on_navigation() {
        let mut app = test_app();
        let mut tui = TuiState::new(&app);
        assert!(matches!(tui.screen, ScreenView::Home(_)));

        apply(
            &mut app,
            &mut tui,
            Action::Navigate(Route::DevotionalDetail {
                devotional: test_devotional("2", 2),
            }),
        );
        assert!(matches!(tui.screen, ScreenView::DevotionalDetail(_)));
        assert_eq!(app.navigator.screen(), ScreenId::DevotionalDetail);
    }

    #[test]
    fn test_apply_keeps_screen_when_route_unchanged() {
        let mut app = test_app();
        let mut tui = TuiState::new(&app);
        // Mutate home-screen state, then apply a non-navigation action.
        if let ScreenView::Home(screen) = &mut tui.screen {
            screen.handle_event(&TuiEvent::CursorDown, &app);
        }
        apply(
            &mut app,
            &mut tui,
            Action::ShowToast {
                message: "hi".to_string(),
                kind: ToastKind::Info,
            },
        );
        // Still the same screen value (selection preserved).
        match &mut tui.screen {
            ScreenView::Home(screen) => {
                let action = screen.handle_event(&TuiEvent::Submit, &app);
                assert!(matches!(
                    action,
                    Some(Action::Navigate(Route::DevotionalDetail { .. }))
                ));
            }
            _ => panic!("expected home screen"),
        }
    }

    #[test]
    fn test_reflection_round_trip_rebuilds_detail() {
        let mut app = test_app();
        let mut tui = TuiState::new(&app);
        apply(
            &mut app,
            &mut tui,
            Action::Navigate(Route::Reflection {
                week_number: 4,
                from_devotional: Some(test_devotional("4", 4)),
            }),
        );
        assert!(matches!(tui.screen, ScreenView::Reflection(_)));

        apply(&mut app, &mut tui, Action::SaveReflection { week_number: 4 });
        // Back on the originating devotional, screen rebuilt to match.
        assert!(matches!(tui.screen, ScreenView::DevotionalDetail(_)));
        assert!(app.progress.is_reflected(4));
        assert!(app.toasts.is_visible());
    }
}
