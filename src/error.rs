use thiserror::Error;

/// Errors that can occur while configuring tools or exporting a drawing.
///
/// Pointer input, undo, redo and clear never fail; they are no-ops when
/// there is nothing to do.
#[derive(Debug, Error)]
pub enum SketchError {
    /// A marker thickness of zero was requested
    #[error("marker thickness must be a positive integer")]
    ZeroThickness,

    /// A sticker glyph was empty or whitespace only
    #[error("sticker glyph must not be empty")]
    EmptyGlyph,

    /// No sticker button exists at this palette index
    #[error("no sticker at palette index {0}")]
    UnknownSticker(usize),

    /// The offscreen export surface could not be allocated
    #[error("cannot allocate a {width}x{height} export surface")]
    Surface { width: u32, height: u32 },

    #[error("failed to encode image: {0}")]
    Encode(#[from] image::ImageError),

    #[error("failed to write export: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid configuration: {0}")]
    Config(#[from] serde_json::Error),

    /// The browser refused to hand the file to the user
    #[error("download failed: {0}")]
    Download(String),
}

pub type SketchResult<T> = Result<T, SketchError>;
