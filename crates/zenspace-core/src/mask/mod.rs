pub mod brush;
pub mod painter;
pub mod stroke;
pub mod surface;

pub use brush::BrushStyle;
pub use painter::{LoadRequest, MaskPainter};
pub use stroke::Stroke;
pub use surface::RasterSurface;
