// Configuration for the bubble engine and the terminal viewer
// Defaults match the classic Text Bubbles page: linear law, scale 5, spacing 1

use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

use crate::engine::error::EngineError;

/// Relationship between token length and bubble size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScaleLaw {
    #[default]
    Linear,
    Quadratic,
    Cubic,
}

impl ScaleLaw {
    pub const ALL: [ScaleLaw; 3] = [ScaleLaw::Linear, ScaleLaw::Quadratic, ScaleLaw::Cubic];

    /// Next law in selector order, wrapping around.
    pub fn next(self) -> Self {
        match self {
            ScaleLaw::Linear => ScaleLaw::Quadratic,
            ScaleLaw::Quadratic => ScaleLaw::Cubic,
            ScaleLaw::Cubic => ScaleLaw::Linear,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            ScaleLaw::Linear => "linear",
            ScaleLaw::Quadratic => "quadratic",
            ScaleLaw::Cubic => "cubic",
        }
    }
}

impl fmt::Display for ScaleLaw {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ScaleLaw {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "linear" | "lin" => Ok(ScaleLaw::Linear),
            "quadratic" | "quad" => Ok(ScaleLaw::Quadratic),
            "cubic" | "cube" => Ok(ScaleLaw::Cubic),
            other => Err(EngineError::UnknownLaw(other.to_string())),
        }
    }
}

/// Sizing parameters passed into every size computation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SizeConfig {
    pub law: ScaleLaw,

    /// Size multiplier, must be > 0 (default 5.0)
    pub scale: f64,

    /// Gap between bubbles in display units, must be >= 0 (default 1.0)
    pub spacing: f64,
}

impl SizeConfig {
    pub const DEFAULT_SCALE: f64 = 5.0;
    pub const DEFAULT_SPACING: f64 = 1.0;

    /// Slider bounds and step sizes for interactive adjustment
    pub const SCALE_RANGE: RangeInclusive<f64> = 0.1..=20.0;
    pub const SCALE_STEP: f64 = 0.1;
    pub const SPACING_RANGE: RangeInclusive<f64> = 0.0..=20.0;
    pub const SPACING_STEP: f64 = 0.2;

    pub fn new(law: ScaleLaw, scale: f64, spacing: f64) -> Self {
        Self {
            law,
            scale,
            spacing,
        }
    }

    pub fn validate_scale(&self) -> Result<(), EngineError> {
        if self.scale.is_finite() && self.scale > 0.0 {
            Ok(())
        } else {
            Err(EngineError::InvalidConfig(format!(
                "scale must be a positive number, got {}",
                self.scale
            )))
        }
    }

    pub fn validate(&self) -> Result<(), EngineError> {
        self.validate_scale()?;
        if self.spacing.is_finite() && self.spacing >= 0.0 {
            Ok(())
        } else {
            Err(EngineError::InvalidConfig(format!(
                "spacing must not be negative, got {}",
                self.spacing
            )))
        }
    }

    /// Copy with scale moved by `steps` slider steps, clamped to `SCALE_RANGE`.
    pub fn with_scale_steps(self, steps: i32) -> Self {
        let scale = snap(self.scale + steps as f64 * Self::SCALE_STEP);
        Self {
            scale: scale.clamp(*Self::SCALE_RANGE.start(), *Self::SCALE_RANGE.end()),
            ..self
        }
    }

    /// Copy with spacing moved by `steps` slider steps, clamped to `SPACING_RANGE`.
    pub fn with_spacing_steps(self, steps: i32) -> Self {
        let spacing = snap(self.spacing + steps as f64 * Self::SPACING_STEP);
        Self {
            spacing: spacing.clamp(*Self::SPACING_RANGE.start(), *Self::SPACING_RANGE.end()),
            ..self
        }
    }
}

// Rounds away accumulated float error from repeated stepping.
fn snap(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}

impl Default for SizeConfig {
    fn default() -> Self {
        Self {
            law: ScaleLaw::default(),
            scale: Self::DEFAULT_SCALE,
            spacing: Self::DEFAULT_SPACING,
        }
    }
}

/// Viewer-only switches
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayConfig {
    /// Place bubbles in fixed-width slots instead of a flowing row
    pub gridded: bool,

    /// Start a new row at each line break
    pub show_breaks: bool,

    /// Show the stats panel
    pub show_stats: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            gridded: false,
            show_breaks: true,
            show_stats: true,
        }
    }
}

/// Master configuration combining sizing and display settings
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Config {
    pub size: SizeConfig,
    pub display: DisplayConfig,
}

impl Config {
    /// Restores scale, spacing and grid mode; the selected law and other toggles stay.
    pub fn reset(&mut self) {
        self.size.scale = SizeConfig::DEFAULT_SCALE;
        self.size.spacing = SizeConfig::DEFAULT_SPACING;
        self.display.gridded = false;
    }
}
