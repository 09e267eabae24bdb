use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::Args;
use image::imageops::{self, FilterType};
use image::{DynamicImage, ImageFormat, RgbaImage};
use tracing::warn;
use zenspace_core::capture::PointerCapture;
use zenspace_core::comparator::{compose_split, Boundary, SplitComparator};
use zenspace_core::geometry::DisplayRect;
use zenspace_core::gesture::{PointerEvent, PointerPhase};
use zenspace_core::source::ImageSource;

use super::load_config;

#[derive(Args)]
pub struct CompareArgs {
    /// Original photo
    pub before: PathBuf,

    /// Generated result
    pub after: PathBuf,

    /// Boundary position as a percentage of width (0-100)
    #[arg(long, conflicts_with = "drag_to")]
    pub boundary: Option<f32>,

    /// Drag the divider to this display x coordinate (may lie outside the surface)
    #[arg(long)]
    pub drag_to: Option<f32>,

    /// Display width used with --drag-to (defaults to the native width)
    #[arg(long, requires = "drag_to")]
    pub width: Option<f32>,

    /// Output file path
    #[arg(short, long, default_value = "comparison.png")]
    pub output: PathBuf,

    /// Editor config file (TOML)
    #[arg(long)]
    pub config: Option<PathBuf>,
}

pub fn run(args: &CompareArgs) -> Result<()> {
    let config = load_config(args.config.as_deref())?;

    let before = load_rgba(&args.before)?;
    let mut after = load_rgba(&args.after)?;
    let (w, h) = before.dimensions();
    if after.dimensions() != (w, h) {
        warn!(
            before = ?before.dimensions(),
            after = ?after.dimensions(),
            "Resizing generated image to match the original"
        );
        after = imageops::resize(&after, w, h, FilterType::Lanczos3);
    }

    let capture = PointerCapture::new();
    let mut comparator = SplitComparator::with_config(
        ImageSource::from(args.before.clone()),
        ImageSource::from(args.after.clone()),
        &capture,
        &config.comparator,
    );

    let boundary = match (args.boundary, args.drag_to) {
        (Some(percent), _) => Boundary::new(percent),
        (None, Some(x)) => {
            let display = DisplayRect::sized(args.width.unwrap_or(w as f32), h as f32);
            if !display.is_measurable() {
                bail!("Display width must be positive");
            }
            // Press mid-surface, then drag; moves outside the surface still track.
            let press = PointerEvent::mouse(PointerPhase::Down, display.width / 2.0, display.height / 2.0);
            comparator.handle_event(&press, &display);
            comparator.handle_event(&PointerEvent::mouse(PointerPhase::Move, x, press.position.y), &display);
            comparator.handle_event(&PointerEvent::mouse(PointerPhase::Up, x, press.position.y), &display);
            comparator.boundary()
        }
        (None, None) => comparator.boundary(),
    };

    let composed = compose_split(&before, &after, boundary)?;
    crate::summary::print_compare_summary(&args.before, &args.after, (w, h), boundary);

    let composed = DynamicImage::ImageRgba8(composed);
    let saved = match ImageFormat::from_path(&args.output) {
        // JPEG has no alpha channel.
        Ok(ImageFormat::Jpeg) => composed.to_rgb8().save(&args.output),
        _ => composed.save(&args.output),
    };
    saved.with_context(|| format!("Failed to write {}", args.output.display()))?;
    println!("Saved to {}", args.output.display());

    Ok(())
}

fn load_rgba(path: &Path) -> Result<RgbaImage> {
    let image = ImageSource::from(path)
        .decode()
        .with_context(|| format!("Failed to load {}", path.display()))?;
    Ok(image.to_rgba8())
}
