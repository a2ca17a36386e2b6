//! The create-note workflow.
//!
//! Four steps over injected host capabilities: resolve the active
//! document, ask the user for a caption, write the new note next to the
//! active document, replace the selection with a link to it. The caption
//! prompt is the only suspension point; nothing here retains host state
//! across the call.

use chrono::NaiveDateTime;

use crate::error::WorkflowError;
use crate::host::{CaptionPrompt, DocumentAccessor, InputBoxSpec, SelectionEditor, UserNotifier};
use crate::model::CreatedNote;
use crate::template::render_note_body;
use crate::utils::slugify_caption;
use crate::utils::time::{compact_timestamp, Clock};
use crate::vfs::FileSystem;

/// Pre-filled value of the caption prompt.
pub const DEFAULT_CAPTION: &str = "New Note";
/// Placeholder hint of the caption prompt.
pub const CAPTION_PLACEHOLDER: &str = "Please enter the caption of the new note";
/// Validation message for empty input.
pub const EMPTY_CAPTION_MESSAGE: &str = "No caption entered";

/// Validate caption input. Empty and whitespace-only text is rejected;
/// returns the message to show the user, or `None` when the input is
/// acceptable.
pub fn validate_caption(text: &str) -> Option<&'static str> {
    if text.trim().is_empty() {
        Some(EMPTY_CAPTION_MESSAGE)
    } else {
        None
    }
}

/// Derive the new note's file name from a point in time and a caption:
/// `{compact timestamp}-{slug}.md`.
///
/// Deterministic at second precision, no uniqueness check: two notes
/// created within the same second with the same caption collide and the
/// later write wins.
pub fn note_file_name(at: NaiveDateTime, caption: &str) -> String {
    format!("{}-{}.md", compact_timestamp(at), slugify_caption(caption))
}

/// How a single command invocation ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Note written, confirmation shown, back-link inserted.
    Created(CreatedNote),
    /// The user dismissed the caption prompt. No side effects.
    Cancelled,
}

/// One invocation of the create-note command, borrowed over the host
/// capabilities it runs against.
pub struct CreateNote<'a> {
    pub docs: &'a dyn DocumentAccessor,
    pub prompt: &'a dyn CaptionPrompt,
    pub notifier: &'a dyn UserNotifier,
    pub editor: &'a dyn SelectionEditor,
    pub fs: &'a dyn FileSystem,
    pub clock: &'a dyn Clock,
}

impl CreateNote<'_> {
    /// Run the workflow to completion.
    ///
    /// Context-resolution failures abort before the prompt is shown; the
    /// caller is expected to surface the returned error to the user.
    pub async fn run(&self) -> Result<Outcome, WorkflowError> {
        let document = self.docs.active_document().await?;
        if !document.is_markdown() {
            return Err(WorkflowError::UnsupportedDocumentType);
        }

        let Some(caption) = self.ask_caption().await else {
            return Ok(Outcome::Cancelled);
        };

        let file_name = note_file_name(self.clock.now(), &caption);
        let path = document.path.with_file_name(&file_name);
        let body = render_note_body(&caption, &document.basename());

        self.fs
            .write(&path, &body)
            .map_err(|source| WorkflowError::NoteWriteFailed {
                path: path.clone(),
                source,
            })?;

        self.notifier.info(&format!("{file_name} created")).await;

        // The editor may have gone away while the prompt was open; the
        // SelectionEditor implementation swallows that race.
        let link_text = format!("[{caption}]({file_name})");
        self.editor.replace_selection(&link_text).await;

        Ok(Outcome::Created(CreatedNote {
            path,
            file_name,
            link_text,
        }))
    }

    /// Prompt until the user submits a valid caption or dismisses the
    /// prompt. Invalid input gets the validation message and another
    /// prompt; valid input is used verbatim, untrimmed.
    async fn ask_caption(&self) -> Option<String> {
        loop {
            let input = self
                .prompt
                .input_box(InputBoxSpec {
                    value: DEFAULT_CAPTION.to_string(),
                    place_holder: CAPTION_PLACEHOLDER.to_string(),
                })
                .await?;

            match validate_caption(&input) {
                None => return Some(input),
                Some(message) => self.notifier.error(message).await,
            }
        }
    }
}
