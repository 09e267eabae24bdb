use std::fmt;

use serde::{Deserialize, Serialize};

use crate::consts::EDIT_VARIATION_COUNT;
use crate::error::{Result, ZenspaceError};

/// A room edit the user can request.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum EditKind {
    /// Empty the room, optionally keeping the described items.
    RemoveAuto { keep: Option<String> },
    /// Remove whatever the red mask paint covers. The input image must be the
    /// mask painter's export.
    RemoveMasked,
    /// Furnish the room with the listed items plus free-form notes.
    AddFurniture {
        room: String,
        items: Vec<String>,
        notes: Option<String>,
    },
    /// Redesign the room in a named style.
    Restyle { room: String, style: String },
}

impl EditKind {
    pub fn validate(&self) -> Result<()> {
        match self {
            Self::AddFurniture { items, notes, .. } => {
                let has_items = items.iter().any(|i| !i.trim().is_empty());
                let has_notes = notes.as_deref().is_some_and(|n| !n.trim().is_empty());
                if !has_items && !has_notes {
                    return Err(ZenspaceError::InvalidEdit(
                        "select at least one furniture item or provide a description".into(),
                    ));
                }
                Ok(())
            }
            Self::Restyle { room, style } => {
                if room.trim().is_empty() || style.trim().is_empty() {
                    return Err(ZenspaceError::InvalidEdit(
                        "restyle needs both a room type and a style".into(),
                    ));
                }
                Ok(())
            }
            Self::RemoveAuto { .. } | Self::RemoveMasked => Ok(()),
        }
    }

    pub fn variation_count(&self) -> usize {
        match self {
            Self::RemoveAuto { .. } | Self::RemoveMasked => 1,
            Self::AddFurniture { .. } | Self::Restyle { .. } => EDIT_VARIATION_COUNT,
        }
    }

    /// One instruction per requested variation.
    pub fn instructions(&self) -> Vec<String> {
        match self {
            Self::RemoveMasked => vec![REMOVE_MASKED.to_string()],
            Self::RemoveAuto { keep } => match keep.as_deref().map(str::trim) {
                Some(keep) if !keep.is_empty() => vec![format!(
                    "Edit this image. Remove most furniture, rugs, and decorations to clear the room, \
                     BUT explicitly KEEP and PRESERVE the following items: {keep}. Remove everything else. \
                     Inpaint the floor and walls where the removed items were, maintaining the original \
                     architectural structure, lighting, and window positions."
                )],
                _ => vec![REMOVE_ALL.to_string()],
            },
            Self::AddFurniture { room, items, notes } => {
                let items = items
                    .iter()
                    .map(|i| i.trim())
                    .filter(|i| !i.is_empty())
                    .collect::<Vec<_>>()
                    .join(", ");
                let notes = notes
                    .as_deref()
                    .map(str::trim)
                    .filter(|n| !n.is_empty())
                    .map(|n| format!("\nAdditional instructions from user: {n}\n"))
                    .unwrap_or_default();
                (0..self.variation_count())
                    .map(|i| {
                        format!(
                            "Edit this image. The room is a {room}.\n\n\
                             Task: Add the following furniture items to the room in a realistic layout: {items}.\n\
                             {notes}\n\
                             Design Variation: Option {}.\n\n\
                             CRITICAL CONSTRAINTS:\n\
                             1. DO NOT change the existing interior design style, wall colors, flooring material, or architectural details.\n\
                             2. The new furniture MUST match the exact style and lighting of the original room.\n\
                             3. Blend the new items naturally into the scene with correct perspective and shadows.\n\
                             4. Keep existing structural elements (windows, doors, fireplace) unchanged.",
                            variation_letter(i)
                        )
                    })
                    .collect()
            }
            Self::Restyle { room, style } => (0..self.variation_count())
                .map(|i| {
                    format!(
                        "Edit this image. Redesign this room as a {room} in a {style} interior design style.\n\
                         Variation approach: Variation {}.\n\
                         Keep the room's structural layout, ceiling height, and window positions exactly the same. \
                         Change the furniture, textures, lighting, and colors to match the {style} aesthetic. \
                         High quality, photorealistic, 4k resolution.",
                        i + 1
                    )
                })
                .collect(),
        }
    }
}

impl fmt::Display for EditKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RemoveAuto { .. } => write!(f, "Remove furniture (auto)"),
            Self::RemoveMasked => write!(f, "Remove furniture (mask)"),
            Self::AddFurniture { room, .. } => write!(f, "Add furniture ({room})"),
            Self::Restyle { style, .. } => write!(f, "Restyle ({style})"),
        }
    }
}

const REMOVE_MASKED: &str = "Edit this image. The areas marked with transparent red are items to be removed. \
     Remove the red masked objects completely. Inpaint the background where the red marks are to match \
     the surrounding floor, walls, and lighting perfectly. Leave the rest of the image (areas without red \
     marks) exactly as is. The result should be a clean, realistic photo.";

const REMOVE_ALL: &str = "Edit this image. Identify all furniture, rugs, decorations, and items in this room. \
     Remove them completely to show an empty room. Inpaint the floor and walls where the furniture was, \
     maintaining the original architectural structure, lighting, and window positions exactly. The result \
     should be a clean, empty real estate photo of the same room.";

fn variation_letter(i: usize) -> char {
    (b'A' + (i % 26) as u8) as char
}
