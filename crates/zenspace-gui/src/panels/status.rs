use zenspace_core::mask::brush::brush_width;

use crate::app::ZenspaceApp;
use crate::states::Mode;

pub fn show(ctx: &egui::Context, app: &mut ZenspaceApp) {
    egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
        ui.add_space(2.0);

        if let Some(ref task) = app.ui_state.busy {
            ui.add(egui::ProgressBar::new(0.0).text(format!("{task}...")).animate(true));
        } else {
            // Same height as the busy bar so the layout does not jump.
            ui.add(egui::ProgressBar::new(0.0).text(""));
        }

        // Log area, fixed height for 4 lines.
        let line_height = ui.text_style_height(&egui::TextStyle::Body);
        let spacing = ui.spacing().item_spacing.y;
        let log_height = line_height * 4.0 + spacing * 3.0;

        egui::ScrollArea::vertical()
            .max_height(log_height)
            .min_scrolled_height(log_height)
            .stick_to_bottom(true)
            .show(ui, |ui| {
                if app.ui_state.log_messages.is_empty() {
                    for _ in 0..4 {
                        ui.label("");
                    }
                } else {
                    for msg in &app.ui_state.log_messages {
                        ui.label(msg);
                    }
                }
            });

        ui.horizontal(|ui| {
            if let Some(ref size) = app.viewport.image_size {
                ui.label(format!("{}x{}", size[0], size[1]));
                ui.separator();
                let width = brush_width(size[0] as u32, &app.config.brush);
                ui.label(format!("Brush: {width:.0}px"));
                ui.separator();
            }
            match app.ui_state.mode {
                Mode::Mask => {
                    let strokes = app.painter.as_ref().map_or(0, |p| p.strokes().len());
                    ui.label(format!("Strokes: {strokes}"));
                    ui.separator();
                }
                Mode::Result => {
                    if let Some(comparator) = app.comparator.as_ref() {
                        ui.label(format!("Split: {:.0}%", comparator.boundary().percent()));
                        ui.separator();
                    }
                }
                Mode::Upload => {}
            }
            ui.label(format!("Mode: {}", app.ui_state.mode));
        });

        ui.add_space(2.0);
    });
}
