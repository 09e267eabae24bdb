use zenspace_core::gesture::{Disposition, PointerPhase};

use crate::app::ZenspaceApp;
use crate::convert::{region_to_color_image, rgba_to_color_image};
use crate::panels::{draw_image, fit_image_rect, paint_background, pointer_input, to_display_rect};

const HINT: &str = "Paint over objects to remove";

pub fn show(ctx: &egui::Context, app: &mut ZenspaceApp) {
    egui::CentralPanel::default().show(ctx, |ui| {
        let rect = ui.available_rect_before_wrap();
        paint_background(ui, rect);

        let Some(image_size) = app.viewport.image_size else {
            return;
        };
        let img_rect = fit_image_rect(rect, image_size);
        let response = ui.allocate_rect(img_rect, egui::Sense::click_and_drag());

        handle_input(ctx, &response, app, img_rect);
        sync_texture(ctx, app);

        if let Some(texture) = app.viewport.mask_texture.as_ref() {
            draw_image(ui, texture.id(), img_rect);
        }

        let painting = app.painter.as_ref().is_some_and(|p| p.is_painting());
        if response.hovered() || painting {
            ctx.set_cursor_icon(egui::CursorIcon::Crosshair);
        }

        if app.painter.as_ref().is_some_and(|p| p.is_ready() && !p.has_mask()) {
            draw_hint(ui, img_rect);
        }
    });
}

fn handle_input(ctx: &egui::Context, response: &egui::Response, app: &mut ZenspaceApp, img_rect: egui::Rect) {
    let events = pointer_input::collect_events(ctx, &mut app.viewport.touch_active);
    let Some(painter) = app.painter.as_mut() else {
        return;
    };
    let display = to_display_rect(img_rect);

    for event in &events {
        // Presses on other widgets stacked above the canvas are not strokes.
        if event.phase == PointerPhase::Down && !response.contains_pointer() {
            continue;
        }
        if painter.handle_event(event, &display) == Disposition::PreventDefault {
            pointer_input::suppress_scroll(ctx);
        }
    }
}

/// Upload the painter's dirty region, or the whole surface when no texture exists.
fn sync_texture(ctx: &egui::Context, app: &mut ZenspaceApp) {
    let Some(painter) = app.painter.as_mut() else {
        return;
    };
    let dirty = painter.take_dirty();
    let Some(surface) = painter.surface() else {
        return;
    };

    if let Some(texture) = app.viewport.mask_texture.as_mut() {
        if let Some(rect) = dirty {
            texture.set_partial(
                [rect.x as usize, rect.y as usize],
                region_to_color_image(surface.canvas(), rect),
                egui::TextureOptions::LINEAR,
            );
        }
    } else {
        app.viewport.mask_texture = Some(ctx.load_texture(
            "mask_surface",
            rgba_to_color_image(surface.canvas()),
            egui::TextureOptions::LINEAR,
        ));
    }
}

fn draw_hint(ui: &egui::Ui, img_rect: egui::Rect) {
    let pos = egui::pos2(img_rect.center().x, img_rect.bottom() - 24.0);
    let font = egui::FontId::proportional(15.0);
    let galley = ui
        .painter()
        .layout_no_wrap(HINT.to_string(), font.clone(), egui::Color32::WHITE);
    let bg = egui::Rect::from_center_size(pos, galley.size() + egui::vec2(20.0, 10.0));
    ui.painter()
        .rect_filled(bg, 12.0, egui::Color32::from_black_alpha(160));
    ui.painter()
        .text(pos, egui::Align2::CENTER_CENTER, HINT, font, egui::Color32::WHITE);
}
