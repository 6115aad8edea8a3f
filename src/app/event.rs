use crate::engine::ScaleLaw;

/// Application events
#[derive(Debug, PartialEq, Clone)]
pub enum AppEvent {
    LoadFile(String),
    LoadClipboard,
    SetText(String),
    /// Append to the text being edited
    InsertChar(char),
    /// Drop the last character of the text being edited
    DeleteChar,
    SetLaw(ScaleLaw),
    CycleLaw,
    /// Move scale by this many slider steps
    AdjustScale(i32),
    SetScale(f64),
    /// Move spacing by this many slider steps
    AdjustSpacing(i32),
    SetSpacing(f64),
    ToggleGrid,
    ToggleBreaks,
    ToggleStats,
    Reset,
    Quit,
    Help,
    InvalidCommand(String),
    None,
}
