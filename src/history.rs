use crate::event::{EventBus, SketchEvent};
use crate::mark::Mark;

/// Committed marks in drawing order, plus the marks undone since the last commit.
///
/// Every mutation that changes something raises exactly one
/// [`SketchEvent::ContentChanged`] on the given bus.
#[derive(Debug, Default)]
pub struct History {
    /// Marks currently on the canvas, oldest first
    committed: Vec<Mark>,
    /// Undone marks; the last one is the next to be redone
    redo_buffer: Vec<Mark>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a mark. A new commit diverges the timeline, so redo is no longer possible.
    pub fn commit(&mut self, mark: Mark, bus: &EventBus) {
        log::debug!("Committing {} ({} marks)", mark.kind(), self.committed.len() + 1);
        self.committed.push(mark);
        self.redo_buffer.clear();
        bus.emit(SketchEvent::ContentChanged);
    }

    /// Move the newest mark to the redo buffer. Returns false if there was nothing to undo.
    pub fn undo(&mut self, bus: &EventBus) -> bool {
        let Some(mark) = self.committed.pop() else {
            return false;
        };
        log::debug!("Undo {}", mark.kind());
        self.redo_buffer.push(mark);
        bus.emit(SketchEvent::ContentChanged);
        true
    }

    /// Exact inverse of [`History::undo`]. Returns false if there was nothing to redo.
    pub fn redo(&mut self, bus: &EventBus) -> bool {
        let Some(mark) = self.redo_buffer.pop() else {
            return false;
        };
        log::debug!("Redo {}", mark.kind());
        self.committed.push(mark);
        bus.emit(SketchEvent::ContentChanged);
        true
    }

    /// Forget everything, including what could have been redone
    pub fn clear(&mut self, bus: &EventBus) {
        self.committed.clear();
        self.redo_buffer.clear();
        bus.emit(SketchEvent::ContentChanged);
    }

    /// Committed marks in the order they must be drawn
    pub fn snapshot(&self) -> &[Mark] {
        &self.committed
    }

    /// Undone marks; the last element is redone first
    pub fn redo_buffer(&self) -> &[Mark] {
        &self.redo_buffer
    }

    pub fn can_undo(&self) -> bool {
        !self.committed.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_buffer.is_empty()
    }

    pub fn is_empty(&self) -> bool {
        self.committed.is_empty()
    }

    pub fn len(&self) -> usize {
        self.committed.len()
    }
}
