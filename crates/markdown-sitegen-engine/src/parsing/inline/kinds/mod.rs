//! # Inline Kinds
//!
//! Inline-specific types that own their syntax delimiters.
//!
//! - **`Delimiter`**: symmetric markers `**`, `*` and `` ` ``
//! - **`Reference`**: bracketed `![alt](target)` and `[text](target)`
//!
//! The parser reads these constants; it never hardcodes `**` or `](`.

pub mod delimiter;
pub mod reference;

pub use delimiter::Delimiter;
pub use reference::Reference;
