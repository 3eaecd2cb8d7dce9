//! # Inline Tokenizer
//!
//! Turns the text of one block into a flat list of [`InlineSpan`]s.
//!
//! ## Stages
//!
//! 1. Delimiter pairs, in order `**`, `*`, `` ` ``. An odd delimiter count
//!    within a text span is a hard error.
//! 2. Images `![alt](target)`, then links `[text](target)`, found by a
//!    single cursor pass over each remaining text span.
//!
//! Each stage only re-splits [`InlineSpan::Text`]; extracted spans are
//! opaque to later stages.
//!
//! ## Modules
//!
//! - **`types`**: `InlineSpan` and its mapping to document nodes
//! - **`kinds`**: delimiter and reference syntax constants
//! - **`cursor`**: byte cursor used by the reference scan
//! - **`parser`**: `tokenize()` entry point

pub mod cursor;
pub mod kinds;
pub mod parser;
pub mod types;

pub use parser::tokenize;
pub use types::InlineSpan;
