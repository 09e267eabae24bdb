/// Minimum pixel count (w*h) to use row-level Rayon parallelism.
pub const PARALLEL_PIXEL_THRESHOLD: usize = 65_536;

/// Smallest brush width in surface pixels, so narrow photos still get a usable brush.
pub const DEFAULT_MIN_BRUSH_WIDTH: f32 = 30.0;

/// Brush width as a fraction of surface width: `width / DEFAULT_BRUSH_WIDTH_DIVISOR`.
pub const DEFAULT_BRUSH_WIDTH_DIVISOR: f32 = 25.0;

/// Mask highlight colour (RGB).
pub const DEFAULT_MASK_COLOR: [u8; 3] = [255, 0, 0];

/// Mask highlight opacity in [0.0, 1.0].
pub const DEFAULT_MASK_OPACITY: f32 = 0.6;

/// JPEG quality used when exporting the flattened mask surface.
pub const DEFAULT_JPEG_QUALITY: u8 = 90;

/// Lowest comparator boundary, in percent of surface width.
pub const BOUNDARY_MIN: f32 = 0.0;

/// Highest comparator boundary, in percent of surface width.
pub const BOUNDARY_MAX: f32 = 100.0;

/// Comparator boundary on mount.
pub const DEFAULT_BOUNDARY: f32 = 50.0;

/// Visual width of the comparator handle, in display pixels.
pub const DEFAULT_HANDLE_WIDTH: f32 = 4.0;

/// Grabbable width around the comparator handle, in display pixels.
pub const DEFAULT_GRAB_WIDTH: f32 = 32.0;

/// Label drawn over the "before" image.
pub const DEFAULT_BEFORE_LABEL: &str = "ORIGINAL";

/// Label drawn over the "after" image.
pub const DEFAULT_AFTER_LABEL: &str = "AI GENERATED";

/// Inset of the comparator labels from the surface corners, in display pixels.
pub const LABEL_INSET: f32 = 16.0;

/// MIME type assumed for bare base64 payloads without a data-URL prefix.
pub const FALLBACK_MIME: &str = "image/jpeg";

/// Number of variations requested for add-furniture and restyle edits.
pub const EDIT_VARIATION_COUNT: usize = 3;
