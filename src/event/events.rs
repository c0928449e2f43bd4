/// Signals raised by the session whenever something visible changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SketchEvent {
    /// Committed marks or the stroke being drawn changed; replay everything
    ContentChanged,
    /// The preview moved or changed shape; only the overlay is stale
    PointerMoved,
}
