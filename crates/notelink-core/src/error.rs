use std::path::PathBuf;
use thiserror::Error;

/// User-facing workflow failures.
///
/// All of these are non-fatal to the host process: each one terminates the
/// command early with no partial artifacts. Display strings are shown to
/// the user verbatim.
#[derive(Debug, Error)]
pub enum WorkflowError {
    #[error("You have to open a hub document before you can create a new note")]
    NoActiveDocument,

    #[error("New notes can only be created from markdown documents")]
    UnsupportedDocumentType,

    #[error("Failed to write note {path:?}: {source}")]
    NoteWriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
