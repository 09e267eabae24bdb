mod mode;
mod results;
mod ui;
mod viewport;

pub use mode::Mode;
pub use results::{ResultsState, Variation};
pub use ui::UIState;
pub use viewport::ViewportState;
