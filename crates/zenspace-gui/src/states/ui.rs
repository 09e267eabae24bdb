use std::path::PathBuf;

use super::Mode;

/// Overall UI state.
#[derive(Default)]
pub struct UIState {
    pub mode: Mode,
    pub photo_path: Option<PathBuf>,

    /// Background operation in flight, shown in the status bar.
    pub busy: Option<String>,

    /// Log messages.
    pub log_messages: Vec<String>,

    pub show_about: bool,
}

impl UIState {
    pub fn is_busy(&self) -> bool {
        self.busy.is_some()
    }

    pub fn add_log(&mut self, msg: String) {
        self.log_messages.push(msg);
    }
}
