use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use zenspace_core::mask::brush::brush_width;
use zenspace_core::source::ImageSource;

use super::load_config;

#[derive(Args)]
pub struct InfoArgs {
    /// Input photo (JPEG, PNG or WebP)
    pub file: PathBuf,

    /// Editor config file (TOML)
    #[arg(long)]
    pub config: Option<PathBuf>,
}

pub fn run(args: &InfoArgs) -> Result<()> {
    let config = load_config(args.config.as_deref())?;
    let source = ImageSource::from(args.file.clone());
    let encoded = source
        .to_encoded()
        .with_context(|| format!("Failed to read {}", args.file.display()))?;
    let image = encoded
        .decode()
        .with_context(|| format!("Failed to decode {}", args.file.display()))?;

    let bytes = std::fs::metadata(&args.file)?.len();

    println!("File:        {}", args.file.display());
    println!("Format:      {}", encoded.mime_type);
    println!("Dimensions:  {}x{}", image.width(), image.height());
    println!("Color:       {:?}", image.color());
    println!("Brush width: {:.1} px", brush_width(image.width(), &config.brush));
    println!("File size:   {:.1} KB", bytes as f64 / 1024.0);

    Ok(())
}
