use image::RgbaImage;
use zenspace_core::geometry::PixelRect;

/// Convert an RGBA raster to an egui ColorImage.
pub fn rgba_to_color_image(img: &RgbaImage) -> egui::ColorImage {
    let (w, h) = img.dimensions();
    egui::ColorImage::from_rgba_unmultiplied([w as usize, h as usize], img.as_raw())
}

/// Copy `rect` out of `img` as a ColorImage, for partial texture updates.
pub fn region_to_color_image(img: &RgbaImage, rect: PixelRect) -> egui::ColorImage {
    let row_len = img.width() as usize * 4;
    let raw = img.as_raw();
    let mut pixels = Vec::with_capacity(rect.width as usize * rect.height as usize * 4);
    for y in rect.y..rect.bottom() {
        let start = y as usize * row_len + rect.x as usize * 4;
        pixels.extend_from_slice(&raw[start..start + rect.width as usize * 4]);
    }
    egui::ColorImage::from_rgba_unmultiplied([rect.width as usize, rect.height as usize], &pixels)
}
