mod bus;
mod events;

pub use bus::EventBus;
pub use events::SketchEvent;

use crate::session::SketchSession;

/// Receiver of session signals. The session dispatches to exactly one handler.
pub trait EventHandler {
    fn handle_event(&mut self, event: SketchEvent, session: &SketchSession);
}
