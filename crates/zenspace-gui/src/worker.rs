use std::path::{Path, PathBuf};
use std::sync::mpsc;

use anyhow::Context;
use zenspace_core::edit::{save_results, unix_millis};
use zenspace_core::encoding::EncodedImage;
use zenspace_core::mask::LoadRequest;
use zenspace_core::source::ImageSource;

use crate::messages::{LoadedResult, WorkerCommand, WorkerResult};

pub fn spawn_worker(
    result_tx: mpsc::Sender<WorkerResult>,
    ctx: egui::Context,
) -> mpsc::Sender<WorkerCommand> {
    let (cmd_tx, cmd_rx) = mpsc::channel::<WorkerCommand>();

    std::thread::Builder::new()
        .name("zenspace-worker".into())
        .spawn(move || {
            worker_loop(cmd_rx, result_tx, ctx);
        })
        .expect("Failed to spawn worker thread");

    cmd_tx
}

fn send(tx: &mpsc::Sender<WorkerResult>, ctx: &egui::Context, result: WorkerResult) {
    let _ = tx.send(result);
    ctx.request_repaint();
}

fn send_error(tx: &mpsc::Sender<WorkerResult>, ctx: &egui::Context, msg: impl Into<String>) {
    send(tx, ctx, WorkerResult::Error { message: msg.into() });
}

fn worker_loop(
    cmd_rx: mpsc::Receiver<WorkerCommand>,
    tx: mpsc::Sender<WorkerResult>,
    ctx: egui::Context,
) {
    while let Ok(cmd) = cmd_rx.recv() {
        match cmd {
            WorkerCommand::LoadMaskSource { request } => {
                handle_load_mask_source(request, &tx, &ctx);
            }
            WorkerCommand::LoadResults { paths } => {
                handle_load_results(paths, &tx, &ctx);
            }
            WorkerCommand::SaveExport { path, image } => {
                handle_save_export(&path, &image, &tx, &ctx);
            }
            WorkerCommand::SaveResults { dir, images } => {
                handle_save_results(&dir, &images, &tx, &ctx);
            }
        }
    }
}

fn handle_load_mask_source(request: LoadRequest, tx: &mpsc::Sender<WorkerResult>, ctx: &egui::Context) {
    match request.source.decode() {
        Ok(image) => send(
            tx,
            ctx,
            WorkerResult::MaskSourceDecoded {
                generation: request.generation,
                image,
            },
        ),
        Err(e) => send_error(tx, ctx, format!("Failed to load {}: {e}", request.source)),
    }
}

fn load_result(path: PathBuf) -> anyhow::Result<LoadedResult> {
    let encoded = ImageSource::from(path.clone())
        .to_encoded()
        .with_context(|| format!("reading {}", path.display()))?;
    let image = encoded
        .decode()
        .with_context(|| format!("decoding {}", path.display()))?;
    Ok(LoadedResult { path, image, encoded })
}

/// Decode every picked file; unreadable ones are reported and skipped.
fn handle_load_results(paths: Vec<PathBuf>, tx: &mpsc::Sender<WorkerResult>, ctx: &egui::Context) {
    let mut results = Vec::with_capacity(paths.len());
    for path in paths {
        match load_result(path) {
            Ok(result) => results.push(result),
            Err(e) => send_error(tx, ctx, format!("Failed to load result: {e:#}")),
        }
    }
    if !results.is_empty() {
        send(tx, ctx, WorkerResult::ResultsLoaded { results });
    }
}

fn write_export(path: &Path, image: &EncodedImage) -> anyhow::Result<()> {
    let bytes = image.to_bytes().context("decoding base64 payload")?;
    std::fs::write(path, bytes).with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}

fn handle_save_export(path: &Path, image: &EncodedImage, tx: &mpsc::Sender<WorkerResult>, ctx: &egui::Context) {
    match write_export(path, image) {
        Ok(()) => send(tx, ctx, WorkerResult::ExportSaved { path: path.to_path_buf() }),
        Err(e) => send_error(tx, ctx, format!("Failed to save masked image: {e:#}")),
    }
}

fn handle_save_results(dir: &Path, images: &[EncodedImage], tx: &mpsc::Sender<WorkerResult>, ctx: &egui::Context) {
    match save_results(dir, images, unix_millis()) {
        Ok(paths) => send(tx, ctx, WorkerResult::ResultsSaved { paths }),
        Err(e) => send_error(tx, ctx, format!("Failed to save results: {e}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use zenspace_core::encoding::MimeType;

    fn missing_dir() -> PathBuf {
        std::env::temp_dir().join("zenspace-worker-missing").join("nested")
    }

    #[test]
    fn test_load_result_error_names_file() {
        let path = missing_dir().join("variation-1.png");
        let err = load_result(path).err().map(|e| format!("{e:#}")).unwrap_or_default();
        assert!(err.starts_with("reading "), "unexpected error: {err}");
        assert!(err.contains("variation-1.png"));
    }

    #[test]
    fn test_write_export_error_names_file() {
        let image = EncodedImage::from_bytes(MimeType::Jpeg, &[1, 2, 3]);
        let path = missing_dir().join("masked.jpg");
        let err = write_export(&path, &image).err().map(|e| format!("{e:#}")).unwrap_or_default();
        assert!(err.contains("writing"), "unexpected error: {err}");
        assert!(err.contains("masked.jpg"));
    }
}
