//! The sketch session: single owner of everything the input handlers mutate.
//!
//! A drag with the marker goes through a small state machine:
//!
//! ```text
//! Idle --pointer down--> Drawing --pointer up--> Idle (stroke committed)
//! Idle --pointer down (sticker tool)--> Idle (sticker committed)
//! ```
//!
//! The stroke being drawn is staged in [`DrawState::Drawing`] and only reaches
//! the [`History`] on pointer up, so undo during a drag never tears it apart.

use std::num::NonZeroU32;

use crate::config::SketchConfig;
use crate::error::{SketchError, SketchResult};
use crate::event::{EventBus, EventHandler, SketchEvent};
use crate::history::History;
use crate::input::InputEvent;
use crate::mark::{Mark, Point, StickerMark, StrokeMark};
use crate::preview::Preview;
use crate::tool::{StickerPalette, ToolControl, ToolState};

/// Whether a marker drag is in progress
#[derive(Debug, Clone, Default, PartialEq)]
pub enum DrawState {
    #[default]
    Idle,
    Drawing { stroke: StrokeMark },
}

#[derive(Debug)]
pub struct SketchSession {
    history: History,
    tool: ToolState,
    palette: StickerPalette,
    preview: Option<Preview>,
    state: DrawState,
    /// The one tool button shown as selected, if the tool came from a button
    highlighted: Option<ToolControl>,
    thin_thickness: u32,
    thick_thickness: u32,
    /// Last canvas position seen while hovering
    pointer: Option<Point>,
    bus: EventBus,
}

impl Default for SketchSession {
    fn default() -> Self {
        Self::new(&SketchConfig::default())
    }
}

impl SketchSession {
    pub fn new(config: &SketchConfig) -> Self {
        let thickness = NonZeroU32::new(config.initial_thickness).unwrap_or(NonZeroU32::MIN);
        Self {
            history: History::new(),
            tool: ToolState::marker(thickness),
            palette: StickerPalette::new(&config.stickers),
            preview: None,
            state: DrawState::Idle,
            highlighted: None,
            thin_thickness: config.thin_thickness,
            thick_thickness: config.thick_thickness,
            pointer: None,
            bus: EventBus::new(),
        }
    }

    pub fn handle_input(&mut self, event: InputEvent) {
        match event {
            InputEvent::PointerDown { location } if location.is_in_canvas => {
                self.pointer_down(location.position);
            }
            InputEvent::PointerMove { location } if location.is_in_canvas => {
                self.pointer_move(location.position);
            }
            InputEvent::PointerUp { .. } => self.pointer_up(),
            InputEvent::PointerLeave => self.pointer_leave(),
            _ => {}
        }
    }

    /// Start a stroke, or place a sticker right away
    pub fn pointer_down(&mut self, at: Point) {
        if self.is_drawing() {
            // The release was lost; finish the previous stroke first
            self.pointer_up();
        }
        self.pointer = Some(at);

        match &self.tool {
            ToolState::Marker { thickness } => {
                self.state = DrawState::Drawing {
                    stroke: StrokeMark::new(at, *thickness),
                };
                self.preview = None;
                self.bus.emit(SketchEvent::ContentChanged);
            }
            ToolState::Sticker { glyph } => {
                let sticker = StickerMark::new(at, glyph.clone());
                log::debug!("Sticker {} placed at {:?}", sticker.glyph(), at);
                self.history.commit(Mark::Sticker(sticker), &self.bus);
            }
        }
    }

    /// Extend the stroke being drawn, or move the preview
    pub fn pointer_move(&mut self, at: Point) {
        self.pointer = Some(at);
        match &mut self.state {
            DrawState::Drawing { stroke } => {
                stroke.push(at);
                self.bus.emit(SketchEvent::ContentChanged);
            }
            DrawState::Idle => {
                Preview::track(&mut self.preview, &self.tool, at);
                self.bus.emit(SketchEvent::PointerMoved);
            }
        }
    }

    /// Finish the stroke being drawn. No-op when idle.
    pub fn pointer_up(&mut self) {
        if let DrawState::Drawing { stroke } = std::mem::take(&mut self.state) {
            log::debug!("Stroke finished with {} points", stroke.points().len());
            self.history.commit(Mark::Stroke(stroke), &self.bus);
        }
    }

    /// Hide the preview once the pointer is off the canvas
    pub fn pointer_leave(&mut self) {
        self.pointer = None;
        if self.preview.take().is_some() {
            self.bus.emit(SketchEvent::PointerMoved);
        }
    }

    pub fn undo(&mut self) -> bool {
        let undone = self.history.undo(&self.bus);
        if undone {
            log::info!("Undo ({} marks left)", self.history.len());
        }
        undone
    }

    pub fn redo(&mut self) -> bool {
        let redone = self.history.redo(&self.bus);
        if redone {
            log::info!("Redo ({} marks)", self.history.len());
        }
        redone
    }

    pub fn clear(&mut self) {
        log::info!("Clearing {} marks", self.history.len());
        self.history.clear(&self.bus);
    }

    pub fn select_thickness(&mut self, thickness: u32) -> SketchResult<()> {
        self.tool.select_thickness(thickness)?;
        self.highlighted = None;
        self.refresh_preview();
        Ok(())
    }

    pub fn select_sticker(&mut self, glyph: &str) -> SketchResult<()> {
        self.tool.select_sticker(glyph)?;
        self.highlighted = None;
        self.refresh_preview();
        Ok(())
    }

    /// Select the tool behind a panel button and highlight that button alone
    pub fn select_control(&mut self, control: ToolControl) -> SketchResult<()> {
        match control {
            ToolControl::ThinMarker => self.select_thickness(self.thin_thickness)?,
            ToolControl::ThickMarker => self.select_thickness(self.thick_thickness)?,
            ToolControl::Sticker(index) => self.select_palette_sticker(index)?,
        }
        self.highlighted = Some(control);
        Ok(())
    }

    /// The selected tool button; `None` until a button has been used
    pub fn highlighted(&self) -> Option<ToolControl> {
        self.highlighted
    }

    pub fn is_highlighted(&self, control: ToolControl) -> bool {
        self.highlighted == Some(control)
    }

    /// Select the sticker behind the palette button at `index`
    pub fn select_palette_sticker(&mut self, index: usize) -> SketchResult<()> {
        let glyph = self
            .palette
            .get(index)
            .ok_or(SketchError::UnknownSticker(index))?
            .to_owned();
        self.select_sticker(&glyph)
    }

    /// Register the answer of the custom sticker dialog (`None` when cancelled)
    pub fn add_custom_sticker(&mut self, response: Option<&str>) -> Option<usize> {
        self.palette.add_custom(response)
    }

    /// Deliver pending signals, oldest first
    pub fn dispatch(&self, handler: &mut dyn EventHandler) {
        while let Some(event) = self.bus.pop() {
            handler.handle_event(event, self);
        }
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn tool(&self) -> &ToolState {
        &self.tool
    }

    pub fn palette(&self) -> &StickerPalette {
        &self.palette
    }

    /// The preview to draw; hidden while a stroke is being drawn
    pub fn preview(&self) -> Option<&Preview> {
        if self.is_drawing() {
            None
        } else {
            self.preview.as_ref()
        }
    }

    /// The stroke being drawn, not yet committed
    pub fn active_stroke(&self) -> Option<&StrokeMark> {
        match &self.state {
            DrawState::Drawing { stroke } => Some(stroke),
            DrawState::Idle => None,
        }
    }

    pub fn is_drawing(&self) -> bool {
        matches!(self.state, DrawState::Drawing { .. })
    }

    pub fn bus(&self) -> &EventBus {
        &self.bus
    }

    /// A new tool always gets a fresh preview at the last pointer position
    fn refresh_preview(&mut self) {
        self.preview = self.pointer.map(|at| Preview::for_tool(&self.tool, at));
        self.bus.emit(SketchEvent::PointerMoved);
    }
}
