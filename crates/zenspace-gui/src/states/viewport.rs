/// Textures and input state for the central panel.
#[derive(Default)]
pub struct ViewportState {
    /// Painter surface, kept in sync through dirty-rect uploads.
    pub mask_texture: Option<egui::TextureHandle>,
    pub before_texture: Option<egui::TextureHandle>,
    /// Native size of the photo.
    pub image_size: Option<[usize; 2]>,
    /// A touch is down; synthesized mouse events are ignored until it ends.
    pub touch_active: bool,
}

impl ViewportState {
    pub fn clear_result(&mut self) {
        self.before_texture = None;
    }
}
