use crate::app::ZenspaceApp;
use crate::panels::{menu_bar, paint_background};

pub fn show(ctx: &egui::Context, app: &mut ZenspaceApp) {
    egui::CentralPanel::default().show(ctx, |ui| {
        let rect = ui.available_rect_before_wrap();
        paint_background(ui, rect);

        ui.vertical_centered(|ui| {
            ui.add_space(rect.height() * 0.35);
            if let Some(ref task) = app.ui_state.busy {
                ui.spinner();
                ui.label(task.as_str());
                return;
            }
            ui.heading("Open a room photo to begin");
            ui.add_space(8.0);
            ui.label("JPEG, PNG or WebP");
            ui.add_space(12.0);
            if ui.button("Choose Photo...").clicked() {
                menu_bar::open_photo(app);
            }
        });
    });
}
