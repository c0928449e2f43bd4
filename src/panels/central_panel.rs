use crate::SketchApp;

pub fn central_panel(app: &mut SketchApp, ctx: &egui::Context) {
    egui::CentralPanel::default().show(ctx, |ui| {
        ui.heading(app.config().title.as_str());

        let side = app.config().canvas_size as f32;
        let (response, painter) =
            ui.allocate_painter(egui::vec2(side, side), egui::Sense::click_and_drag());
        app.handle_input(ctx, &response);
        app.paint_canvas(&painter, response.rect);
    });
}
