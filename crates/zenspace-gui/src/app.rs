use std::path::PathBuf;
use std::sync::mpsc;

use image::DynamicImage;
use zenspace_core::capture::PointerCapture;
use zenspace_core::comparator::SplitComparator;
use zenspace_core::config::EditorConfig;
use zenspace_core::mask::MaskPainter;
use zenspace_core::source::ImageSource;

use crate::convert::rgba_to_color_image;
use crate::messages::{LoadedResult, WorkerCommand, WorkerResult};
use crate::panels;
use crate::states::{Mode, ResultsState, UIState, Variation, ViewportState};
use crate::worker;

pub struct ZenspaceApp {
    pub cmd_tx: mpsc::Sender<WorkerCommand>,
    pub result_tx: mpsc::Sender<WorkerResult>,
    pub result_rx: mpsc::Receiver<WorkerResult>,
    pub ui_state: UIState,
    pub viewport: ViewportState,
    pub config: EditorConfig,
    /// Shared by every comparator so global pointer routing sees all captures.
    pub capture: PointerCapture,
    pub painter: Option<MaskPainter>,
    pub comparator: Option<SplitComparator>,
    /// Generated variations; the selected one is the comparator's "after".
    pub results: ResultsState,
}

impl ZenspaceApp {
    pub fn new(ctx: &egui::Context) -> Self {
        let (result_tx, result_rx) = mpsc::channel();
        let cmd_tx = worker::spawn_worker(result_tx.clone(), ctx.clone());

        Self {
            cmd_tx,
            result_tx,
            result_rx,
            ui_state: UIState::default(),
            viewport: ViewportState::default(),
            config: EditorConfig::default(),
            capture: PointerCapture::new(),
            painter: None,
            comparator: None,
            results: ResultsState::default(),
        }
    }

    /// Drain all pending results from the worker.
    fn poll_results(&mut self, ctx: &egui::Context) {
        while let Ok(result) = self.result_rx.try_recv() {
            match result {
                WorkerResult::PhotoPicked { path } => {
                    self.open_photo(path);
                }
                WorkerResult::MaskSourceDecoded { generation, image } => {
                    self.finish_photo_load(ctx, generation, &image);
                }
                WorkerResult::ResultsLoaded { results } => {
                    self.show_results(ctx, results);
                }
                WorkerResult::ExportSaved { path } => {
                    self.ui_state.busy = None;
                    self.ui_state.add_log(format!("Saved masked image: {}", path.display()));
                }
                WorkerResult::ResultsSaved { paths } => {
                    self.ui_state.busy = None;
                    for path in paths {
                        self.ui_state.add_log(format!("Saved: {}", path.display()));
                    }
                }
                WorkerResult::Error { message } => {
                    self.ui_state.busy = None;
                    self.ui_state.add_log(format!("ERROR: {message}"));
                }
            }
        }
    }

    /// Point the painter at a new photo and ask the worker to decode it.
    pub fn open_photo(&mut self, path: PathBuf) {
        match self.painter.as_mut() {
            Some(painter) => painter.set_source(path.clone()),
            None => self.painter = Some(MaskPainter::new(path.clone(), &self.config)),
        }
        let Some(request) = self.painter.as_ref().map(MaskPainter::load_request) else {
            return;
        };

        self.comparator = None;
        self.results.clear();
        self.viewport.mask_texture = None;
        self.viewport.clear_result();
        self.ui_state.photo_path = Some(path.clone());
        self.ui_state.busy = Some(format!("Loading {}", path.display()));
        self.send_command(WorkerCommand::LoadMaskSource { request });
    }

    fn finish_photo_load(&mut self, ctx: &egui::Context, generation: u64, image: &DynamicImage) {
        let Some(painter) = self.painter.as_mut() else {
            return;
        };
        match painter.complete_load(generation, image) {
            Ok(true) => {
                self.ui_state.busy = None;
                self.ui_state.mode = Mode::Mask;
                self.ui_state.add_log(format!(
                    "Opened: {} ({}x{})",
                    painter.source(),
                    image.width(),
                    image.height()
                ));
                self.viewport.image_size = Some([image.width() as usize, image.height() as usize]);
                // Full upload happens on the next frame from the dirty rect.
                self.viewport.mask_texture = None;
                ctx.request_repaint();
            }
            Ok(false) => {}
            Err(e) => {
                self.ui_state.busy = None;
                self.ui_state.add_log(format!("ERROR: {e}"));
            }
        }
    }

    fn show_results(&mut self, ctx: &egui::Context, loaded: Vec<LoadedResult>) {
        self.ui_state.busy = None;
        let Some(painter) = self.painter.as_ref() else {
            self.ui_state.add_log("Open a photo before loading results".into());
            return;
        };
        let Some(surface) = painter.surface() else {
            self.ui_state.add_log("Photo is still loading".into());
            return;
        };

        let variations: Vec<Variation> = loaded
            .into_iter()
            .enumerate()
            .map(|(i, result)| {
                self.ui_state.add_log(format!(
                    "Variation {}: {} ({}x{})",
                    i + 1,
                    result.path.display(),
                    result.image.width(),
                    result.image.height()
                ));
                Variation {
                    texture: ctx.load_texture(
                        format!("variation-{}", i + 1),
                        rgba_to_color_image(&result.image.to_rgba8()),
                        egui::TextureOptions::LINEAR,
                    ),
                    path: result.path,
                    encoded: result.encoded,
                }
            })
            .collect();
        let Some(first) = variations.first() else {
            return;
        };

        let before = painter.source().clone();
        let after = ImageSource::Encoded(first.encoded.clone());
        match self.comparator.as_mut() {
            Some(comparator) => comparator.set_images(before, after),
            None => {
                self.comparator = Some(SplitComparator::with_config(
                    before,
                    after,
                    &self.capture,
                    &self.config.comparator,
                ));
            }
        }

        self.viewport.before_texture = Some(ctx.load_texture(
            "before",
            rgba_to_color_image(surface.source()),
            egui::TextureOptions::LINEAR,
        ));
        self.results.replace(variations);
        self.ui_state.mode = Mode::Result;
    }

    /// Show variation `index` in the comparator against the same photo.
    pub fn select_variation(&mut self, index: usize) {
        let Some(variation) = self.results.select(index) else {
            return;
        };
        let after = ImageSource::Encoded(variation.encoded.clone());
        let path = variation.path.display().to_string();
        if let Some(comparator) = self.comparator.as_mut() {
            comparator.set_after(after);
        }
        self.ui_state.add_log(format!("Comparing variation {}: {path}", index + 1));
    }

    pub fn send_command(&self, cmd: WorkerCommand) {
        let _ = self.cmd_tx.send(cmd);
    }
}

impl eframe::App for ZenspaceApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_results(ctx);

        panels::menu_bar::show(ctx, self);
        panels::status::show(ctx, self);
        panels::controls::show(ctx, self);
        match self.ui_state.mode {
            Mode::Upload => panels::upload::show(ctx, self),
            Mode::Mask => panels::mask_canvas::show(ctx, self),
            Mode::Result => panels::comparator_view::show(ctx, self),
        }

        // About dialog
        if self.ui_state.show_about {
            egui::Window::new("About ZenSpace")
                .collapsible(false)
                .resizable(false)
                .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
                .show(ctx, |ui| {
                    ui.vertical_centered(|ui| {
                        ui.heading("ZenSpace");
                        ui.label("Room photo masking and comparison");
                        ui.add_space(8.0);
                        ui.label(format!("Version {}", env!("CARGO_PKG_VERSION")));
                        ui.add_space(8.0);
                        if ui.button("Close").clicked() {
                            self.ui_state.show_about = false;
                        }
                    });
                });
        }
    }
}
