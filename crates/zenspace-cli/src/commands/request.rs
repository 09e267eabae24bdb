use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use zenspace_core::edit::{build_requests, EditKind};
use zenspace_core::encoding::EncodedImage;
use zenspace_core::source::ImageSource;

use super::load_config;
use super::mask::paint;
use crate::script::GestureScript;

#[derive(Args)]
pub struct RequestArgs {
    #[command(subcommand)]
    pub edit: EditCommand,
}

#[derive(Subcommand)]
pub enum EditCommand {
    /// Remove furniture, automatically or under a painted mask
    Remove(RemoveArgs),
    /// Add furniture items to the room
    Add(AddArgs),
    /// Redesign the room in a named style
    Restyle(RestyleArgs),
}

#[derive(Args)]
pub struct CommonArgs {
    /// Input photo
    #[arg(long)]
    pub photo: PathBuf,

    /// Write the JSON requests to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Editor config file (TOML)
    #[arg(long)]
    pub config: Option<PathBuf>,
}

#[derive(Args)]
pub struct RemoveArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Gesture script marking the items to remove (switches to masked removal)
    #[arg(long, conflicts_with = "keep")]
    pub mask_script: Option<PathBuf>,

    /// Items to keep while emptying the room
    #[arg(long)]
    pub keep: Option<String>,
}

#[derive(Args)]
pub struct AddArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Room type, e.g. "Living Room"
    #[arg(long, default_value = "Living Room")]
    pub room: String,

    /// Furniture item to add (repeatable)
    #[arg(long = "item")]
    pub items: Vec<String>,

    /// Free-form placement instructions
    #[arg(long)]
    pub notes: Option<String>,
}

#[derive(Args)]
pub struct RestyleArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Room type, e.g. "Bedroom"
    #[arg(long, default_value = "Living Room")]
    pub room: String,

    /// Interior design style, e.g. "Scandinavian"
    #[arg(long)]
    pub style: String,
}

pub fn run(args: &RequestArgs) -> Result<()> {
    let (common, kind, image) = match &args.edit {
        EditCommand::Remove(a) => match &a.mask_script {
            Some(script) => {
                let config = load_config(a.common.config.as_deref())?;
                let script = GestureScript::load(script)?;
                let painter = paint(&a.common.photo, &script, &config)?;
                let image = painter
                    .export_encoded()?
                    .context("Mask surface was not loaded")?;
                (&a.common, EditKind::RemoveMasked, image)
            }
            None => (
                &a.common,
                EditKind::RemoveAuto { keep: a.keep.clone() },
                read_photo(&a.common.photo)?,
            ),
        },
        EditCommand::Add(a) => (
            &a.common,
            EditKind::AddFurniture {
                room: a.room.clone(),
                items: a.items.clone(),
                notes: a.notes.clone(),
            },
            read_photo(&a.common.photo)?,
        ),
        EditCommand::Restyle(a) => (
            &a.common,
            EditKind::Restyle {
                room: a.room.clone(),
                style: a.style.clone(),
            },
            read_photo(&a.common.photo)?,
        ),
    };

    let requests = build_requests(&kind, &image).context("Invalid edit request")?;
    let json = serde_json::to_string_pretty(&requests)?;

    if let Some(ref path) = common.output {
        crate::summary::print_request_summary(&common.photo, &kind);
        std::fs::write(path, &json)
            .with_context(|| format!("Failed to write requests to {}", path.display()))?;
        println!("Saved {} request(s) to {}", requests.len(), path.display());
    } else {
        println!("{}", json);
    }

    Ok(())
}

fn read_photo(path: &Path) -> Result<EncodedImage> {
    ImageSource::from(path)
        .to_encoded()
        .with_context(|| format!("Failed to read {}", path.display()))
}
