//! Multi-format interoperability for noter documents
//!
//!     This crate converts between external note representations and the rich
//!     document tree the noter backend stores (TipTap JSON). It powers bulk
//!     import of Note Station backups and the Markdown download/export paths.
//!
//!     TLDR: For format authors:
//!         - The document tree (./doc/nodes.rs) is the one representation every format converts to or from; its serde shape is the storage contract, do not bend it per format.
//!         - Import must not fail on bad markup. Bulk imports skip per-note errors and continue, which only works if conversion itself degrades instead of erroring.
//!         - Each format lives under ./formats/<format>/ with a parser.rs and/or serializer.rs and implements the Format trait.
//!         - Tests live per format under tests/<format>/, loaded through tests/lib.rs.
//!
//! Architecture
//!
//!     The split mirrors the rest of the toolchain: a Format trait (./format.rs)
//!     gives every format an identical interface, a FormatRegistry (./registry.rs)
//!     handles discovery and selection by name or file extension, and the
//!     format-specific code stays focused on its own data transformations.
//!
//!     This is a pure lib, that is, it powers noter-cli and the backend import
//!     routes but is shell agnostic; no code here should suppose a shell
//!     environment, be it std print, env vars or file I/O. The importer in
//!     particular does no I/O at all: attachment uploads happen upstream and
//!     arrive as a ready reference-to-URL map.
//!
//!     The file structure:
//!     .
//!     ├── error.rs
//!     ├── format.rs               # Format trait + exchange types
//!     ├── registry.rs             # FormatRegistry for discovery and selection
//!     ├── archive.rs              # Multi-note export planning
//!     ├── doc                     # The rich document tree (TipTap JSON shape)
//!     ├── formats
//!     │   ├── notestation         # Note Station HTML import
//!     │   └── markdown            # Markdown export + minimal import
//!     └── lib.rs
//!
//! Core Algorithms
//!
//!     The intricate part of the work is the Note Station conversion: a
//!     recursive descent over a permissively parsed DOM, keeping block and
//!     inline contexts apart, accumulating marks through nested inline
//!     wrappers, and resolving image references against the caller's map.
//!     See ./formats/notestation/parser.rs; everything else is bookkeeping
//!     around it.
//!
//! Formats
//!
//!     - Note Station (import): the reason this crate exists. HTML-flavored
//!       markup in, document tree out, never an error.
//!     - Markdown (export + import): notes leave the system as readable flat
//!       text with optional front matter and an attachments listing. The
//!       import direction is a minimal title-plus-paragraphs reader.
//!
//! Library Choices
//!
//!     We offload format handling to specialized crates where one exists:
//!     html5ever + markup5ever_rcdom give us a browser-grade, soup-tolerant
//!     DOM for the importer, and serde/serde_json carry the wire shape. The
//!     Markdown writer is hand-rolled on purpose - its output contract is a
//!     handful of fixed line shapes, not CommonMark rendering of the full
//!     tree.

pub mod archive;
pub mod doc;
pub mod error;
pub mod format;
pub mod formats;
pub mod registry;

pub use error::FormatError;
pub use format::{
    Attachment, ExportOptions, Format, ImportOptions, ImportedNote, NoteExport,
};
pub use registry::FormatRegistry;

/// Converts Note Station markup to a document tree.
///
/// Convenience wrapper over the notestation format for callers that have the
/// markup in hand and do not need registry dispatch. Never fails; see
/// [`formats::notestation::parser::import_document`].
pub fn import_note_station(markup: &str, options: &ImportOptions) -> doc::Node {
    formats::notestation::parser::import_document(markup, options)
}

/// Serializes a note to Markdown.
///
/// Convenience wrapper over the markdown format; the inverse-direction
/// counterpart to [`import_note_station`].
pub fn export_markdown(note: &NoteExport, options: &ExportOptions) -> String {
    formats::markdown::serializer::serialize_note(note, options)
}
