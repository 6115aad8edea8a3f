use crate::app::mode::AppMode;
use crate::engine::{Analysis, Bubble, Config, Stats};

/// Snapshot of everything the UI draws in one frame
pub struct RenderState {
    pub mode: AppMode,
    pub config: Config,
    pub bubbles: Vec<Bubble>,
    pub stats: Stats,
    pub source: Option<String>,
    pub status: Option<String>,
    /// Text typed so far in command mode
    pub command_input: Option<String>,
    /// Line under the cursor in edit mode
    pub edit_line: Option<String>,
    pub show_help: bool,
}

impl RenderState {
    /// Create an empty render state for when no text is loaded
    pub fn empty(mode: AppMode, config: Config) -> Self {
        Self {
            mode,
            config,
            bubbles: vec![],
            stats: Stats::default(),
            source: None,
            status: None,
            command_input: None,
            edit_line: None,
            show_help: false,
        }
    }

    /// Create render state from the latest analysis pass
    pub fn from_analysis(mode: AppMode, config: Config, analysis: &Analysis) -> Self {
        Self {
            bubbles: analysis.bubbles.clone(),
            stats: analysis.stats.clone(),
            ..Self::empty(mode, config)
        }
    }

    pub fn is_empty(&self) -> bool {
        self.bubbles.is_empty()
    }
}
