use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Core internal coordinate system (0-based)
/// Does not directly use LSP Position to avoid coupling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Point {
    pub line: u32,
    pub col: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextRange {
    pub start: Point,
    pub end: Point,
}

impl TextRange {
    /// A collapsed range is a bare cursor position; replacing it
    /// degenerates to an insertion.
    pub fn is_collapsed(&self) -> bool {
        self.start == self.end
    }
}

/// Snapshot of the document currently focused in the host editor.
///
/// Owned by the host; the workflow reads it once and never retains it
/// beyond the call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActiveDocument {
    /// Absolute path of the document on disk
    pub path: PathBuf,
    /// Host language tag, e.g. "markdown"
    pub language_id: String,
}

impl ActiveDocument {
    pub fn is_markdown(&self) -> bool {
        self.language_id == "markdown"
    }

    /// Bare file name of the document, directory stripped. Used as the
    /// back-link target, which implies the new note lives in the same
    /// directory.
    pub fn basename(&self) -> String {
        self.path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default()
    }
}

/// Result of a successful create-note run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatedNote {
    /// Absolute path the note was written to
    pub path: PathBuf,
    /// Bare file name, e.g. `20240305143007-project-ideas.md`
    pub file_name: String,
    /// Markdown link that replaced the selection
    pub link_text: String,
}
