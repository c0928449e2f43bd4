use crate::SketchApp;
use crate::components::ToolButton;
use crate::tool::ToolControl;

const TEXT_BUTTON_WIDTH: f32 = 64.0;

pub fn tools_panel(app: &mut SketchApp, ctx: &egui::Context) {
    egui::SidePanel::left("tools_panel")
        .resizable(true)
        .default_width(200.0)
        .show(ctx, |ui| {
            ui.heading("Tools");

            ui.horizontal(|ui| {
                let history = app.session().history();
                let (can_undo, can_redo) = (history.can_undo(), history.can_redo());

                if ui.button("Clear").clicked() {
                    app.session_mut().clear();
                }
                if ui.add_enabled(can_undo, egui::Button::new("Undo")).clicked() {
                    app.session_mut().undo();
                }
                if ui.add_enabled(can_redo, egui::Button::new("Redo")).clicked() {
                    app.session_mut().redo();
                }
            });
            ui.separator();

            let mut picked = None;

            ui.label("Marker");
            ui.horizontal(|ui| {
                for (label, control) in [
                    ("Thin", ToolControl::ThinMarker),
                    ("Thick", ToolControl::ThickMarker),
                ] {
                    let button = ToolButton::new(label, app.session().is_highlighted(control))
                        .width(TEXT_BUTTON_WIDTH);
                    if button.show(ui).clicked() {
                        picked = Some(control);
                    }
                }
            });
            ui.separator();

            ui.label("Stickers");
            ui.horizontal_wrapped(|ui| {
                let session = app.session();
                for (index, sticker) in session.palette().iter().enumerate() {
                    let control = ToolControl::Sticker(index);
                    if ToolButton::new(sticker, session.is_highlighted(control))
                        .show(ui)
                        .clicked()
                    {
                        picked = Some(control);
                    }
                }
            });
            if let Some(control) = picked {
                if let Err(err) = app.session_mut().select_control(control) {
                    log::warn!("Cannot select {:?}: {}", control, err);
                }
            }
            if ui.button("Add Custom Sticker").clicked() {
                app.open_sticker_dialog();
            }
            ui.separator();

            if ui.button("Export").clicked() {
                if let Err(err) = app.export() {
                    log::warn!("Export failed: {}", err);
                }
            }
        });
}
