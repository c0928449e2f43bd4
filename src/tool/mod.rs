mod palette;
mod state;

pub use palette::StickerPalette;
pub use state::{ToolControl, ToolMode, ToolState};
