use egui::{Key, KeyboardShortcut, Modifiers};

use crate::config::SketchConfig;
use crate::download::offer_download;
use crate::error::SketchResult;
use crate::export::Exporter;
use crate::input::InputHandler;
use crate::panels;
use crate::renderer::Renderer;
use crate::session::SketchSession;

const UNDO: KeyboardShortcut = KeyboardShortcut::new(Modifiers::COMMAND, Key::Z);
const REDO: KeyboardShortcut = KeyboardShortcut::new(Modifiers::COMMAND.plus(Modifiers::SHIFT), Key::Z);
const REDO_ALT: KeyboardShortcut = KeyboardShortcut::new(Modifiers::COMMAND, Key::Y);

pub struct SketchApp {
    config: SketchConfig,
    session: SketchSession,
    renderer: Renderer,
    exporter: Exporter,
    input: InputHandler,
    /// Text of the custom sticker dialog while it is open
    sticker_dialog: Option<String>,
}

impl SketchApp {
    /// Called once before the first frame.
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        Self::with_config(cc.egui_ctx.clone(), SketchConfig::load())
    }

    pub fn with_config(ctx: egui::Context, config: SketchConfig) -> Self {
        Self {
            session: SketchSession::new(&config),
            renderer: Renderer::new(ctx, &config),
            exporter: Exporter::new(&config),
            input: InputHandler::new(egui::Rect::NOTHING),
            sticker_dialog: None,
            config,
        }
    }

    pub fn config(&self) -> &SketchConfig {
        &self.config
    }

    pub fn session(&self) -> &SketchSession {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut SketchSession {
        &mut self.session
    }

    /// Feed this frame's pointer input over the `canvas` widget into the session
    pub fn handle_input(&mut self, ctx: &egui::Context, canvas: &egui::Response) {
        for event in self.input.process_input(ctx, canvas) {
            self.session.handle_input(event);
        }
    }

    /// Deliver pending signals to the renderer, then paint
    pub fn paint_canvas(&mut self, painter: &egui::Painter, canvas_rect: egui::Rect) {
        self.session.dispatch(&mut self.renderer);
        self.renderer.paint(painter, canvas_rect);
    }

    /// Export the committed marks and hand the PNG to the user
    pub fn export(&self) -> SketchResult<()> {
        let image = self
            .exporter
            .export_image(self.session.history().snapshot(), self.config.export_scale)?;
        let png = image.to_png()?;
        offer_download(&png, &self.config.export_file_name)
    }

    pub fn open_sticker_dialog(&mut self) {
        self.sticker_dialog = Some(self.config.custom_sticker_default.clone());
    }

    pub fn sticker_dialog_mut(&mut self) -> Option<&mut String> {
        self.sticker_dialog.as_mut()
    }

    /// Close the dialog; `None` means it was cancelled
    pub fn close_sticker_dialog(&mut self, accepted: bool) {
        let text = self.sticker_dialog.take();
        let response = text.as_deref().filter(|_| accepted);
        if let Some(index) = self.session.add_custom_sticker(response) {
            log::debug!("Custom sticker button {}", index);
        }
    }

    fn handle_shortcuts(&mut self, ctx: &egui::Context) {
        if self.sticker_dialog.is_some() {
            return;
        }
        let (undo, redo) = ctx.input_mut(|input| {
            let redo = input.consume_shortcut(&REDO) || input.consume_shortcut(&REDO_ALT);
            let undo = input.consume_shortcut(&UNDO);
            (undo, redo)
        });
        if redo {
            self.session.redo();
        }
        if undo {
            self.session.undo();
        }
    }
}

impl eframe::App for SketchApp {
    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_shortcuts(ctx);
        panels::tools_panel(self, ctx);
        panels::central_panel(self, ctx);
        panels::sticker_dialog(self, ctx);
    }
}
