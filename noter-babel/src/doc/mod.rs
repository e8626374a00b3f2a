//! The rich document tree.
//!
//! This is the canonical in-memory representation every format converts to or
//! from: a `doc` root holding block nodes, with inline formatting expressed as
//! marks on text nodes. Its JSON serialization is the TipTap/ProseMirror node
//! shape the editor and the persistence layer consume, so the serde attributes
//! in [`nodes`] are part of the contract, not cosmetics.

pub mod nodes;

pub use nodes::{HeadingAttrs, ImageAttrs, LinkAttrs, Mark, Node};
