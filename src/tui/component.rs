//! The two traits every storefront widget is built from.

use ratatui::Frame;
use ratatui::layout::Rect;

use crate::tui::event::TuiEvent;

/// Something that draws itself into a region of the frame.
///
/// Implementors are short-lived wrappers (`CarList`, `FilterBar`, ...)
/// built each frame from a persistent `FooState` plus borrowed props.
/// `render` takes `&mut self` because drawing may write back into that
/// state: the car list clamps its highlight to the current result count,
/// the drawer moves its scroll offset, and a focused `TextField` records
/// where the terminal cursor goes.
pub trait Component {
    fn render(&mut self, frame: &mut Frame, area: Rect);
}

/// Turns raw `TuiEvent`s into the widget's own vocabulary.
///
/// `None` means the event was consumed (or ignored) without anything the
/// event loop needs to act on. A `Some` is translated into a core `Action`.
pub trait EventHandler {
    type Event;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event>;
}
