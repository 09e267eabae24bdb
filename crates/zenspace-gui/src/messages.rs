use std::path::PathBuf;

use image::DynamicImage;
use zenspace_core::encoding::EncodedImage;
use zenspace_core::mask::LoadRequest;

/// Commands sent from UI thread to worker thread.
pub enum WorkerCommand {
    /// Decode the mask painter's source photo.
    LoadMaskSource { request: LoadRequest },

    /// Read and decode generated results (one per variation) for comparison.
    LoadResults { paths: Vec<PathBuf> },

    /// Write the masked export to disk.
    SaveExport { path: PathBuf, image: EncodedImage },

    /// Write result variations into a directory.
    SaveResults {
        dir: PathBuf,
        images: Vec<EncodedImage>,
    },
}

/// One generated variation read from disk.
pub struct LoadedResult {
    pub path: PathBuf,
    pub image: DynamicImage,
    pub encoded: EncodedImage,
}

/// Results sent back to the UI thread, by the worker or by dialog threads.
pub enum WorkerResult {
    /// A photo was picked in the open dialog.
    PhotoPicked { path: PathBuf },

    MaskSourceDecoded {
        generation: u64,
        image: DynamicImage,
    },

    /// Results that decoded, in the order they were picked.
    ResultsLoaded { results: Vec<LoadedResult> },

    ExportSaved { path: PathBuf },
    ResultsSaved { paths: Vec<PathBuf> },
    Error { message: String },
}
