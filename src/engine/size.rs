// Size model - maps a token's letter+digit count to a bubble size

use crate::engine::config::{ScaleLaw, SizeConfig};
use crate::engine::error::EngineError;
use crate::engine::token::Token;

/// Reference length at which every law yields the same size.
pub const BASE_LEN: f64 = 8.0;

/// Display-unit divisor applied to every size.
pub const NORMALIZATION_DIVISOR: f64 = 4.0;

/// Per-law factor that pins all laws together at `BASE_LEN`.
pub fn normalization(law: ScaleLaw) -> f64 {
    match law {
        ScaleLaw::Linear => 1.0,
        ScaleLaw::Quadratic => BASE_LEN.sqrt(),
        ScaleLaw::Cubic => BASE_LEN.powf(2.0 / 3.0),
    }
}

fn raw_size(n: f64, law: ScaleLaw) -> f64 {
    match law {
        ScaleLaw::Linear => n,
        ScaleLaw::Quadratic => n.sqrt(),
        ScaleLaw::Cubic => n.cbrt(),
    }
}

/// Bubble size for a token with `alpha_num_length` letters and digits.
///
/// Fails with [`EngineError::InvalidConfig`] when the scale is not positive.
/// Zero length gives zero under every law.
pub fn size(alpha_num_length: usize, config: &SizeConfig) -> Result<f64, EngineError> {
    config.validate_scale()?;
    Ok(scaled(alpha_num_length, config))
}

// Caller has already validated the scale.
pub(crate) fn scaled(alpha_num_length: usize, config: &SizeConfig) -> f64 {
    raw_size(alpha_num_length as f64, config.law) * normalization(config.law) * config.scale
        / NORMALIZATION_DIVISOR
}

/// Size for word tokens; fillers and breaks have none.
pub fn size_token(token: &Token, config: &SizeConfig) -> Result<Option<f64>, EngineError> {
    config.validate_scale()?;
    Ok(token
        .is_word()
        .then(|| scaled(token.alpha_num_length, config)))
}
