#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod components;
pub mod config;
pub mod download;
pub mod error;
pub mod event;
pub mod export;
pub mod history;
pub mod input;
pub mod mark;
pub mod panels;
pub mod preview;
pub mod renderer;
pub mod session;
pub mod tool;

pub use app::SketchApp;
pub use config::SketchConfig;
pub use error::{SketchError, SketchResult};
pub use event::{EventBus, EventHandler, SketchEvent};
pub use export::{ExportedImage, Exporter};
pub use history::History;
pub use input::{InputEvent, InputLocation};
pub use mark::{Mark, Point, StickerMark, StrokeMark};
pub use preview::Preview;
pub use renderer::Renderer;
pub use session::{DrawState, SketchSession};
pub use tool::{StickerPalette, ToolControl, ToolMode, ToolState};
