//! Format implementations
//!
//! This module contains all format implementations that convert between
//! the rich document tree and external note representations.

pub mod markdown;
pub mod notestation;

pub use markdown::MarkdownFormat;
pub use notestation::NoteStationFormat;
