pub mod comparator_view;
pub mod controls;
pub mod mask_canvas;
pub mod menu_bar;
pub mod pointer_input;
pub mod status;
pub mod upload;

use zenspace_core::geometry::DisplayRect;

pub(crate) fn paint_background(ui: &egui::Ui, rect: egui::Rect) {
    ui.painter()
        .rect_filled(rect, 0.0, egui::Color32::from_gray(30));
}

/// Largest rect with the image's aspect ratio that fits centred in `available`.
pub(crate) fn fit_image_rect(available: egui::Rect, image_size: [usize; 2]) -> egui::Rect {
    let size = egui::vec2(image_size[0] as f32, image_size[1] as f32);
    if size.x <= 0.0 || size.y <= 0.0 {
        return available;
    }
    let scale = (available.width() / size.x).min(available.height() / size.y);
    egui::Rect::from_center_size(available.center(), size * scale)
}

pub(crate) fn to_display_rect(rect: egui::Rect) -> DisplayRect {
    DisplayRect::new(rect.left(), rect.top(), rect.width(), rect.height())
}

pub(crate) fn draw_image(ui: &egui::Ui, texture_id: egui::TextureId, img_rect: egui::Rect) {
    ui.painter().image(
        texture_id,
        img_rect,
        egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
        egui::Color32::WHITE,
    );
}
