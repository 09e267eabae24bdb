//! Boundary to the external image-generation service.
//!
//! The service itself is not part of this crate; callers provide an
//! [`ImageGenerator`]. This module turns an [`EditKind`] into one request per
//! variation and collects the first image of every response.

pub mod kind;
pub mod request;
pub mod results;

use tracing::{debug, info};

use crate::encoding::EncodedImage;
use crate::error::{Result, ZenspaceError};

pub use kind::EditKind;
pub use request::{GenerationRequest, GenerationResponse, ImageGenerator};
pub use results::{result_file_name, save_results, unix_millis};

/// Requests for every variation of `kind`, all carrying `image`.
pub fn build_requests(kind: &EditKind, image: &EncodedImage) -> Result<Vec<GenerationRequest>> {
    kind.validate()?;
    Ok(kind
        .instructions()
        .into_iter()
        .map(|instruction| GenerationRequest {
            instruction,
            image: image.clone(),
        })
        .collect())
}

/// Run `kind` against `generator`. Variations run in order; the first failure
/// aborts the edit.
pub fn run_edit<G: ImageGenerator + ?Sized>(
    generator: &G,
    kind: &EditKind,
    image: &EncodedImage,
) -> Result<Vec<EncodedImage>> {
    let requests = build_requests(kind, image)?;
    info!(edit = %kind, variations = requests.len(), "Running edit");

    let mut results = Vec::with_capacity(requests.len());
    for (i, request) in requests.iter().enumerate() {
        let response = generator.generate(request)?;
        let first = response
            .images
            .into_iter()
            .next()
            .ok_or(ZenspaceError::EmptyResponse)?;
        debug!(variation = i + 1, mime = %first.mime_type, "Variation generated");
        results.push(first);
    }
    Ok(results)
}
