//! Text Bubbles: visualize text as a row of bubbles sized by word length.
//!
//! The [`engine`] module is the pure pipeline (tokenize, size, accumulate
//! stats). [`input`], [`app`] and [`ui`] make up the terminal viewer around it.

pub mod app;
pub mod engine;
pub mod input;
pub mod ui;
