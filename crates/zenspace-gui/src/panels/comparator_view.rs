use zenspace_core::comparator::SplitLayout;
use zenspace_core::geometry::DisplayRect;
use zenspace_core::gesture::{Disposition, PointerPhase};

use crate::app::ZenspaceApp;
use crate::panels::{draw_image, fit_image_rect, paint_background, pointer_input, to_display_rect};

pub fn show(ctx: &egui::Context, app: &mut ZenspaceApp) {
    egui::CentralPanel::default().show(ctx, |ui| {
        let rect = ui.available_rect_before_wrap();
        paint_background(ui, rect);

        let (Some(image_size), Some(before), Some(after)) = (
            app.viewport.image_size,
            app.viewport.before_texture.as_ref().map(|t| t.id()),
            app.results.selected().map(|v| v.texture.id()),
        ) else {
            return;
        };

        let img_rect = fit_image_rect(rect, image_size);
        let response = ui.allocate_rect(img_rect, egui::Sense::click_and_drag());
        let display = to_display_rect(img_rect);

        handle_input(ctx, &response, app, &display);

        let Some(comparator) = app.comparator.as_ref() else {
            return;
        };
        let layout = comparator.layout(&display);

        draw_image(ui, after, img_rect);
        ui.painter()
            .with_clip_rect(egui_rect(&layout.before_clip).intersect(img_rect))
            .image(
                before,
                img_rect,
                egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
                egui::Color32::WHITE,
            );
        draw_handle(ui, &layout);
        draw_labels(ui, &layout, comparator.before_label(), comparator.after_label());

        if comparator.is_dragging() || egui_rect(&layout.grab).contains(ctx.pointer_hover_pos().unwrap_or_default()) {
            ctx.set_cursor_icon(egui::CursorIcon::ResizeHorizontal);
        }
    });
}

fn handle_input(ctx: &egui::Context, response: &egui::Response, app: &mut ZenspaceApp, display: &DisplayRect) {
    let events = pointer_input::collect_events(ctx, &mut app.viewport.touch_active);
    let Some(comparator) = app.comparator.as_mut() else {
        return;
    };

    for event in &events {
        let routed = match event.phase {
            PointerPhase::Down => response.contains_pointer(),
            // Move and release are global, but only while this view holds a capture.
            _ => comparator.has_capture(),
        };
        if !routed {
            continue;
        }
        if comparator.handle_event(event, display) == Disposition::PreventDefault {
            pointer_input::suppress_scroll(ctx);
        }
    }
}

fn egui_rect(r: &DisplayRect) -> egui::Rect {
    egui::Rect::from_min_size(egui::pos2(r.left, r.top), egui::vec2(r.width.max(0.0), r.height.max(0.0)))
}

fn draw_handle(ui: &egui::Ui, layout: &SplitLayout) {
    let handle = egui_rect(&layout.handle);
    ui.painter().rect_filled(handle, 0.0, egui::Color32::WHITE);

    let knob = egui::pos2(layout.divider_x, handle.center().y);
    ui.painter().circle_filled(knob, 16.0, egui::Color32::WHITE);
    ui.painter().text(
        knob,
        egui::Align2::CENTER_CENTER,
        "\u{2194}",
        egui::FontId::proportional(16.0),
        egui::Color32::from_gray(60),
    );
}

fn draw_labels(ui: &egui::Ui, layout: &SplitLayout, before: &str, after: &str) {
    draw_label(ui, layout.before_label_anchor, egui::Align2::LEFT_TOP, before);
    draw_label(ui, layout.after_label_anchor, egui::Align2::RIGHT_TOP, after);
}

fn draw_label(ui: &egui::Ui, anchor: zenspace_core::geometry::Point, align: egui::Align2, text: &str) {
    let font = egui::FontId::proportional(12.0);
    let galley = ui
        .painter()
        .layout_no_wrap(text.to_string(), font.clone(), egui::Color32::WHITE);
    let padding = egui::vec2(8.0, 4.0);
    let bg = align.anchor_size(egui::pos2(anchor.x, anchor.y), galley.size() + padding * 2.0);
    ui.painter()
        .rect_filled(bg, 4.0, egui::Color32::from_black_alpha(150));
    ui.painter()
        .text(bg.center(), egui::Align2::CENTER_CENTER, text, font, egui::Color32::WHITE);
}
