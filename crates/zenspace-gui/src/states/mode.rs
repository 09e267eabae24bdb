use std::fmt;

/// Which widget occupies the central panel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Mode {
    /// No photo yet.
    #[default]
    Upload,
    /// Painting a removal mask over the photo.
    Mask,
    /// Comparing the photo against a generated result.
    Result,
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Upload => write!(f, "Upload"),
            Self::Mask => write!(f, "Mask"),
            Self::Result => write!(f, "Result"),
        }
    }
}
