pub mod analysis;
pub mod charclass;
pub mod config;
pub mod error;
pub mod size;
pub mod stats;
pub mod token;
pub mod tokenizer;

pub use analysis::{analyze, Analysis, Bubble};
pub use config::{Config, DisplayConfig, ScaleLaw, SizeConfig};
pub use error::EngineError;
pub use size::{size, size_token, BASE_LEN, NORMALIZATION_DIVISOR};
pub use stats::{accumulate, Stats};
pub use token::{LineBreak, Token, TokenKind};
pub use tokenizer::{restore, tokenize};
