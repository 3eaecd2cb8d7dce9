//! # Document Tree
//!
//! Output of the conversion pipeline: tagged [`Element`] containers and
//! [`TextNode`] leaves, rendered to markup by [`serialize`].

pub mod node;
pub mod serialize;

pub use node::{Attributes, DocumentNode, Element, TextNode};
pub use serialize::serialize;
