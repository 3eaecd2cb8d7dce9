//! Markdown to HTML conversion for static sites.
//!
//! [`convert_document`] and [`extract_title`] are the conversion entry
//! points; [`site`] drives them over a content tree.

pub mod error;
pub mod io;
pub mod models;
pub mod parsing;
pub mod site;
pub mod tree;

#[cfg(test)]
pub mod tests;

// Re-export key types for easier usage
pub use error::ConversionError;
pub use models::ContentFile;
pub use parsing::{convert_document, extract_title};
pub use site::{BuildReport, SiteError, SiteLayout, build_site};
pub use tree::{DocumentNode, serialize};
