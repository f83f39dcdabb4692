//! # Actions
//!
//! Everything a screen can ask of the core becomes an `Action`: a
//! navigation request, a progress mutation, a toast. Screens emit
//! actions from their event handlers; the event loop feeds them
//! through `update()`, which applies them to the [`App`] and returns
//! an [`Effect`] for the few operations that need I/O outside the
//! core (writing the config file).
//!
//! ```text
//! key event → screen → Action → update() → new state (+ Effect)
//! ```
//!
//! Progress mutations persist inside the progress store itself, so by
//! the time `update()` returns, durable state already matches memory.

use std::time::Instant;

use log::debug;

use crate::core::config::{Profile, Settings};
use crate::core::nav::{Route, Tab};
use crate::core::state::App;
use crate::core::toast::ToastKind;

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Navigate(Route),
    GoBack,
    SwitchTab(Tab),
    ToggleBookmark(String),
    MarkAsRead(String),
    SaveReflection { week_number: u32 },
    ShowToast { message: String, kind: ToastKind },
    DismissToast,
    UpdateSettings(Settings),
    SaveProfile(Profile),
    DismissWelcome,
    Quit,
    /// Apply several actions in order (e.g. toast + back on subscribe).
    Batch(Vec<Action>),
}

/// Follow-up work the event loop performs after an action is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    /// Write the profile (and current settings) back to the config file.
    PersistProfile,
}

pub fn update(app: &mut App, action: Action, now: Instant) -> Effect {
    debug!("Applying action: {:?}", action);
    match action {
        Action::Navigate(route) => {
            // Entering a detail screen counts as reading it.
            if let Route::DevotionalDetail { devotional } = &route {
                app.progress.mark_as_read(&devotional.id);
            }
            app.navigator.navigate(route);
        }
        Action::GoBack => app.navigator.go_back(),
        Action::SwitchTab(tab) => app.navigator.handle_tab_change(tab),
        Action::ToggleBookmark(id) => {
            app.progress.toggle_bookmark(&id);
        }
        Action::MarkAsRead(id) => app.progress.mark_as_read(&id),
        Action::SaveReflection { week_number } => {
            app.progress.mark_as_reflected(week_number);
            app.toasts
                .show("Reflection saved successfully!", ToastKind::Success, now);
            app.navigator.go_back();
        }
        Action::ShowToast { message, kind } => app.toasts.show(message, kind, now),
        Action::DismissToast => app.toasts.dismiss(),
        Action::UpdateSettings(settings) => app.settings = settings,
        Action::SaveProfile(profile) => {
            app.profile = profile;
            app.toasts
                .show("Profile updated successfully!", ToastKind::Success, now);
            return Effect::PersistProfile;
        }
        Action::DismissWelcome => {
            app.show_welcome = false;
            app.progress.mark_welcome_seen();
        }
        Action::Quit => app.should_quit = true,
        Action::Batch(actions) => {
            let mut effect = Effect::None;
            for action in actions {
                let e = update(app, action, now);
                if e != Effect::None {
                    effect = e;
                }
            }
            return effect;
        }
    }
    Effect::None
}
