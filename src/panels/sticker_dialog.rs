use crate::SketchApp;

/// Modal asking for the text of a new sticker
pub fn sticker_dialog(app: &mut SketchApp, ctx: &egui::Context) {
    let Some(text) = app.sticker_dialog_mut() else {
        return;
    };

    let mut outcome = None;
    egui::Window::new("Add Custom Sticker")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
        .show(ctx, |ui| {
            ui.label("Enter custom sticker:");
            let edit = ui.text_edit_singleline(text);
            edit.request_focus();
            let submitted = edit.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));

            ui.horizontal(|ui| {
                if ui.button("OK").clicked() || submitted {
                    outcome = Some(true);
                }
                if ui.button("Cancel").clicked() || ui.input(|i| i.key_pressed(egui::Key::Escape)) {
                    outcome = Some(false);
                }
            });
        });

    if let Some(accepted) = outcome {
        app.close_sticker_dialog(accepted);
    }
}
