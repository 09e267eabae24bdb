use std::path::PathBuf;

use zenspace_core::encoding::EncodedImage;

/// One generated variation, with its texture for the thumbnail strip and the
/// comparator's "after" layer.
pub struct Variation {
    pub path: PathBuf,
    pub encoded: EncodedImage,
    pub texture: egui::TextureHandle,
}

/// Generated variations and which one the comparator shows.
#[derive(Default)]
pub struct ResultsState {
    variations: Vec<Variation>,
    selected: usize,
}

impl ResultsState {
    /// Replace all variations; the first one becomes selected.
    pub fn replace(&mut self, variations: Vec<Variation>) {
        self.variations = variations;
        self.selected = 0;
    }

    pub fn clear(&mut self) {
        self.replace(Vec::new());
    }

    pub fn is_empty(&self) -> bool {
        self.variations.is_empty()
    }

    pub fn len(&self) -> usize {
        self.variations.len()
    }

    pub fn variations(&self) -> &[Variation] {
        &self.variations
    }

    pub fn selected_index(&self) -> usize {
        self.selected
    }

    pub fn selected(&self) -> Option<&Variation> {
        self.variations.get(self.selected)
    }

    /// Switch to variation `index`. Returns it when the selection changed.
    pub fn select(&mut self, index: usize) -> Option<&Variation> {
        if index == self.selected || index >= self.variations.len() {
            return None;
        }
        self.selected = index;
        self.variations.get(index)
    }

    /// Payloads for "Save Selected".
    pub fn selected_images(&self) -> Vec<EncodedImage> {
        self.selected().map(|v| v.encoded.clone()).into_iter().collect()
    }

    /// Payloads for "Save All", in variation order.
    pub fn all_images(&self) -> Vec<EncodedImage> {
        self.variations.iter().map(|v| v.encoded.clone()).collect()
    }
}
