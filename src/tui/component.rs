use ratatui::Frame;
use ratatui::layout::Rect;

/// A reusable chrome component (header, tab bar, overlays).
///
/// Components receive data via props (struct fields) and render into a
/// `Frame` within a given `Rect`. `render` takes `&mut self` so a
/// component can update internal presentation state (scroll offsets,
/// cached layout) during the render pass, matching ratatui's
/// `StatefulWidget` pattern.
pub trait Component {
    fn render(&mut self, frame: &mut Frame, area: Rect);
}

/// A component that handles terminal events.
pub trait EventHandler {
    /// The type of high-level event this component emits.
    type Event;

    /// Handle a low-level `TuiEvent` and optionally return a high-level event.
    fn handle_event(&mut self, event: &super::event::TuiEvent) -> Option<Self::Event>;
}
