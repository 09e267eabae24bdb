use thiserror::Error;

#[derive(Error, Debug)]
pub enum ZenspaceError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image format error: {0}")]
    ImageError(#[from] image::ImageError),

    #[error("Invalid image dimensions: {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("Image sizes differ: {left_width}x{left_height} vs {right_width}x{right_height}")]
    DimensionMismatch {
        left_width: u32,
        left_height: u32,
        right_width: u32,
        right_height: u32,
    },

    #[error("Invalid data URL: {0}")]
    InvalidDataUrl(String),

    #[error("Base64 decode error: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("Unsupported MIME type: {0}")]
    UnsupportedMime(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Invalid edit request: {0}")]
    InvalidEdit(String),

    #[error("No image generated in response")]
    EmptyResponse,

    #[error("Generation service error: {0}")]
    Generation(String),
}

pub type Result<T> = std::result::Result<T, ZenspaceError>;
