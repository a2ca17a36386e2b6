//! Capability traits supplied by the host editor.
//!
//! The workflow never talks to an editor directly. Everything it needs
//! (active document lookup, prompting, messages, selection editing) comes
//! in through these seams, so any host integration works and tests run
//! against fakes.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::WorkflowError;
use crate::model::ActiveDocument;

/// Single-line input prompt shown to the user.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InputBoxSpec {
    /// Pre-filled value
    pub value: String,
    /// Greyed-out hint shown while the box is empty
    pub place_holder: String,
}

/// Yields the document currently focused in the host editor.
#[async_trait]
pub trait DocumentAccessor: Send + Sync {
    /// Fails with [`WorkflowError::NoActiveDocument`] when nothing is
    /// focused. Document type validation happens in the workflow, not here.
    async fn active_document(&self) -> Result<ActiveDocument, WorkflowError>;
}

/// Modal single-line text prompt.
///
/// `None` means the user dismissed the prompt, which is a normal exit
/// path, not an error.
#[async_trait]
pub trait CaptionPrompt: Send + Sync {
    async fn input_box(&self, spec: InputBoxSpec) -> Option<String>;
}

/// User-visible message display.
#[async_trait]
pub trait UserNotifier: Send + Sync {
    async fn info(&self, message: &str);
    async fn error(&self, message: &str);
}

/// Replaces the host editor's current selection.
///
/// A zero-length selection degenerates to an insertion at the cursor.
/// Implementations must treat a missing editor as a silent no-op: the
/// editor may have been closed while the prompt was open.
#[async_trait]
pub trait SelectionEditor: Send + Sync {
    async fn replace_selection(&self, new_text: &str);
}
