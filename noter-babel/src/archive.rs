//! Multi-note export planning.
//!
//! Exporting a whole folder or account produces one Markdown file per note,
//! packed into an archive by the caller. This module plans the entries —
//! sanitized filenames, optional folder prefixes, rendered contents — and
//! stays out of the zip business, which belongs to whatever storage or HTTP
//! layer is doing the download.

use crate::format::{ExportOptions, NoteExport};
use crate::formats::markdown::serializer::serialize_note;

/// Longest filename an entry may use, before any folder prefix.
const MAX_FILENAME_LEN: usize = 200;

/// One planned archive entry: a relative path and the file contents.
#[derive(Debug, Clone, PartialEq)]
pub struct ArchiveEntry {
    pub path: String,
    pub contents: String,
}

/// Plan the archive entries for a batch of notes.
///
/// Every note becomes a `<sanitized title>.md` entry; when
/// `preserve_structure` is set and the note has a folder, the entry path is
/// prefixed with the folder name.
pub fn plan_entries(notes: &[NoteExport], options: &ExportOptions) -> Vec<ArchiveEntry> {
    notes
        .iter()
        .map(|note| {
            let contents = serialize_note(note, options);
            let filename = sanitize_filename(&format!("{}.md", note.title));

            let path = match (&note.folder, options.preserve_structure) {
                (Some(folder), true) => format!("{folder}/{filename}"),
                _ => filename,
            };

            ArchiveEntry { path, contents }
        })
        .collect()
}

/// Make a note title safe as a filename: anything outside `[A-Za-z0-9_.-]`
/// becomes `_`, runs of `_` collapse to one, and the result is truncated to
/// 200 characters.
pub fn sanitize_filename(filename: &str) -> String {
    let mut sanitized = String::with_capacity(filename.len());
    let mut last_was_underscore = false;

    for ch in filename.chars() {
        let mapped = if ch.is_ascii_alphanumeric() || matches!(ch, '_' | '-' | '.') {
            ch
        } else {
            '_'
        };

        if mapped == '_' {
            if last_was_underscore {
                continue;
            }
            last_was_underscore = true;
        } else {
            last_was_underscore = false;
        }
        sanitized.push(mapped);
    }

    sanitized.chars().take(MAX_FILENAME_LEN).collect()
}
