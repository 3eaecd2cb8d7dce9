//! # Block Parsing
//!
//! Each blank-line-delimited block of a document goes through two steps.
//!
//! 1. **Classification** (`classify`): `BlockClassifier` assigns a
//!    `BlockKind` by scanning the leading token of every line.
//! 2. **Construction** (`builder`): `build` turns the block into a document
//!    node, running the inline tokenizer on its text where applicable.
//!    `BlockBuilder` collects the nodes and wraps them in the root element.
//!
//! ## Modules
//!
//! - **`types`**: `BlockKind`, `RawBlock`
//! - **`kinds`**: block-specific syntax (Heading, CodeFence, BlockQuote, lists)
//! - **`classify`**: `BlockClassifier`
//! - **`builder`**: `build`, `BlockBuilder`
//!
//! ## Key Invariants
//!
//! - No nesting: a block is exactly one kind, lists never contain quotes
//! - Code blocks are raw zones: no inline parsing inside

pub mod builder;
pub mod classify;
pub mod kinds;
pub mod types;

pub use builder::{BlockBuilder, build};
pub use classify::{BlockClassifier, classify};
pub use types::{BlockKind, RawBlock};
