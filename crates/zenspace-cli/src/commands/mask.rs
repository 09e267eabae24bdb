use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::Args;
use indicatif::{ProgressBar, ProgressStyle};
use zenspace_core::config::EditorConfig;
use zenspace_core::encoding::EncodedImage;
use zenspace_core::mask::MaskPainter;

use super::load_config;
use crate::script::GestureScript;

#[derive(Args)]
pub struct MaskArgs {
    /// Input photo
    pub file: PathBuf,

    /// Gesture script (TOML) describing the display rect and paint strokes
    #[arg(long)]
    pub script: PathBuf,

    /// Output file path
    #[arg(short, long, default_value = "masked.jpg")]
    pub output: PathBuf,

    /// Print the export as a data URL instead of writing a file
    #[arg(long)]
    pub data_url: bool,

    /// Editor config file (TOML)
    #[arg(long)]
    pub config: Option<PathBuf>,
}

pub fn run(args: &MaskArgs) -> Result<()> {
    let config = load_config(args.config.as_deref())?;
    let script = GestureScript::load(&args.script)?;

    let painter = paint(&args.file, &script, &config)?;
    let encoded = painter
        .export_encoded()?
        .context("Mask surface was not loaded")?;

    if args.data_url {
        println!("{}", encoded.to_data_url());
        return Ok(());
    }

    crate::summary::print_mask_summary(&args.file, &painter, &config);
    write_export(&encoded, &args.output)?;
    println!("Saved to {}", args.output.display());

    Ok(())
}

/// Load `file` into a painter and replay every scripted gesture over it.
pub fn paint(file: &Path, script: &GestureScript, config: &EditorConfig) -> Result<MaskPainter> {
    let mut painter = MaskPainter::new(file, config);
    painter
        .load_blocking()
        .with_context(|| format!("Failed to load {}", file.display()))?;

    let Some((w, h)) = painter.dimensions() else {
        bail!("Mask surface was not loaded");
    };
    let display = script.display_for(w, h);
    let events = script.events();

    let pb = ProgressBar::new(events.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{msg} [{bar:40}] {pos}/{len}")?
            .progress_chars("=> "),
    );
    pb.set_message("Painting");

    for event in &events {
        painter.handle_event(event, &display);
        pb.inc(1);
    }
    pb.finish_and_clear();

    Ok(painter)
}

fn write_export(encoded: &EncodedImage, output: &Path) -> Result<()> {
    let expected = encoded.mime_type.image_format();
    if let Ok(format) = image::ImageFormat::from_path(output) {
        if format != expected {
            tracing::warn!(
                path = %output.display(),
                mime = %encoded.mime_type,
                "Output extension does not match export format"
            );
        }
    }
    std::fs::write(output, encoded.to_bytes()?)
        .with_context(|| format!("Failed to write {}", output.display()))?;
    Ok(())
}
