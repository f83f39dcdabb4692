//! # Core Application Logic
//!
//! Everything here is UI-agnostic: the navigation state machine, the
//! persisted progress store, the toast channel, configuration, and the
//! action reducer that ties them together. The `tui` module is the
//! only consumer today, but nothing in this tree knows about ratatui.
//!
//! ```text
//!            ┌──────────────────────────────┐
//!            │            CORE              │
//!            │                              │
//!            │  nav       (screen machine)  │
//!            │  progress  (persisted sets)  │
//!            │  store     (kv persistence)  │
//!            │  toast     (ephemeral cell)  │
//!            │  config    (profile/settings)│
//!            │  state + action (reducer)    │
//!            └──────────────┬───────────────┘
//!                           │
//!                           ▼
//!                    ┌────────────┐
//!                    │    TUI     │
//!                    │  Adapter   │
//!                    │ (ratatui)  │
//!                    └────────────┘
//! ```

pub mod action;
pub mod config;
pub mod nav;
pub mod progress;
pub mod state;
pub mod store;
pub mod toast;
