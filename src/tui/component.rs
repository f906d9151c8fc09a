use ratatui::Frame;
use ratatui::layout::Rect;

/// A renderable screen element.
///
/// Components receive their data as struct fields ("props") and draw
/// into a `Frame` within the given `Rect`. They never reach into shared
/// state themselves; the caller hands them a snapshot of whatever they
/// need, which keeps dependencies explicit and components testable.
///
/// `render` takes `&mut self` so a component can update internal
/// presentation caches during the render pass, matching ratatui's
/// `StatefulWidget` shape.
pub trait Component {
    /// Render the component into the given area.
    fn render(&mut self, frame: &mut Frame, area: Rect);
}

/// A component that consumes terminal events and emits higher-level
/// screen events for the main loop to act on.
pub trait EventHandler {
    /// The type of high-level event this component emits.
    type Event;

    /// Handle a low-level [`TuiEvent`](super::event::TuiEvent).
    ///
    /// `None` means the event was ignored or consumed internally.
    fn handle_event(&mut self, event: &super::event::TuiEvent) -> Option<Self::Event>;
}
