use crate::app::ZenspaceApp;
use crate::panels::menu_bar;
use crate::states::Mode;

const LEFT_PANEL_WIDTH: f32 = 220.0;
const THUMBNAIL_WIDTH: f32 = 88.0;

pub fn show(ctx: &egui::Context, app: &mut ZenspaceApp) {
    egui::SidePanel::left("controls")
        .default_width(LEFT_PANEL_WIDTH)
        .resizable(true)
        .show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                ui.set_min_width(LEFT_PANEL_WIDTH - 20.0);

                photo_section(ui, app);
                match app.ui_state.mode {
                    Mode::Upload => {}
                    Mode::Mask => {
                        ui.separator();
                        mask_section(ui, app);
                    }
                    Mode::Result => {
                        ui.separator();
                        result_section(ui, app);
                    }
                }
            });
        });
}

fn section_header(ui: &mut egui::Ui, label: &str, status: Option<&str>) {
    ui.horizontal(|ui| {
        ui.strong(label);
        if let Some(s) = status {
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.small(s);
            });
        }
    });
}

fn file_name(path: &std::path::Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default()
}

fn photo_section(ui: &mut egui::Ui, app: &mut ZenspaceApp) {
    section_header(ui, "Photo", None);
    ui.add_space(4.0);

    if ui
        .add_enabled(!app.ui_state.is_busy(), egui::Button::new("Open Photo..."))
        .clicked()
    {
        menu_bar::open_photo(app);
    }

    if let Some(ref path) = app.ui_state.photo_path {
        ui.label(file_name(path));
    }
    if let Some(size) = app.viewport.image_size {
        ui.small(format!("{}x{}", size[0], size[1]));
    }
}

fn mask_section(ui: &mut egui::Ui, app: &mut ZenspaceApp) {
    let has_mask = app.painter.as_ref().is_some_and(|p| p.has_mask());
    section_header(ui, "Mask", Some(if has_mask { "painted" } else { "empty" }));
    ui.add_space(4.0);

    ui.small("Drag over the photo to mark objects for removal.");
    ui.add_space(4.0);

    if ui.add_enabled(has_mask, egui::Button::new("Clear Mask")).clicked() {
        if let Some(painter) = app.painter.as_mut() {
            painter.clear();
            app.ui_state.add_log("Mask cleared".into());
        }
    }

    if ui.button("Export Masked...").clicked() {
        menu_bar::export_masked(app);
    }

    ui.add_space(8.0);
    if ui
        .add_enabled(!app.ui_state.is_busy(), egui::Button::new("Open Results..."))
        .clicked()
    {
        menu_bar::open_results(app);
    }
}

fn result_section(ui: &mut egui::Ui, app: &mut ZenspaceApp) {
    let count = app.results.len();
    let status = format!("{} of {count}", app.results.selected_index() + 1);
    section_header(ui, "Result", (count > 1).then_some(status.as_str()));
    ui.add_space(4.0);

    if let Some(variation) = app.results.selected() {
        ui.label(file_name(&variation.path));
    }
    if let Some(comparator) = app.comparator.as_ref() {
        ui.small(format!(
            "{} {:.0}% / {} {:.0}%",
            comparator.before_label(),
            comparator.boundary().percent(),
            comparator.after_label(),
            100.0 - comparator.boundary().percent()
        ));
    }
    ui.add_space(4.0);

    if let Some(index) = variation_strip(ui, app) {
        app.select_variation(index);
    }
    ui.add_space(4.0);

    if ui.button("Back to Mask").clicked() {
        app.ui_state.mode = Mode::Mask;
    }
    if ui.button("Save Selected...").clicked() {
        menu_bar::save_selected(app);
    }
    if ui
        .add_enabled(count > 1, egui::Button::new("Save All..."))
        .clicked()
    {
        menu_bar::save_all(app);
    }
}

/// Thumbnail per variation. Returns the one clicked this frame.
fn variation_strip(ui: &mut egui::Ui, app: &ZenspaceApp) -> Option<usize> {
    let mut clicked = None;
    ui.horizontal_wrapped(|ui| {
        for (i, variation) in app.results.variations().iter().enumerate() {
            let [w, h] = variation.texture.size();
            let scale = THUMBNAIL_WIDTH / w.max(1) as f32;
            let size = egui::vec2(THUMBNAIL_WIDTH, h as f32 * scale);
            let thumbnail = egui::Image::new((variation.texture.id(), size));
            let response = ui
                .add(egui::Button::image(thumbnail).selected(i == app.results.selected_index()))
                .on_hover_text(format!("Variation {}", i + 1));
            if response.clicked() {
                clicked = Some(i);
            }
        }
    });
    clicked
}
