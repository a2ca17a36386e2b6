//! LSP-backed implementations of the core host capabilities.
//!
//! Each workflow invocation wires a fresh set of these around the shared
//! `Client` and the open-document table; none of them outlive the command.

use async_trait::async_trait;
use std::path::Path;
use tower_lsp::lsp_types::{MessageType, Url};
use tower_lsp::Client;

use notelink_core::error::WorkflowError;
use notelink_core::host::{CaptionPrompt, DocumentAccessor, InputBoxSpec, SelectionEditor, UserNotifier};
use notelink_core::model::{ActiveDocument, TextRange};

use crate::protocol::{CreateNoteParams, InputBox};
use crate::state::GlobalState;

/// Resolves the active document from the command argument and the
/// open-document table.
pub struct CommandContext<'a> {
    pub state: &'a GlobalState,
    pub params: Option<&'a CreateNoteParams>,
}

#[async_trait]
impl DocumentAccessor for CommandContext<'_> {
    async fn active_document(&self) -> Result<ActiveDocument, WorkflowError> {
        let params = self.params.ok_or(WorkflowError::NoActiveDocument)?;
        let path = params
            .uri
            .to_file_path()
            .map_err(|_| WorkflowError::NoActiveDocument)?;

        let language_id = {
            let docs = self.state.open_docs.read().await;
            docs.get(&params.uri).cloned()
        }
        // Clients that never opened the document over LSP still get a
        // type check, on the file extension.
        .unwrap_or_else(|| infer_language_id(&path));

        Ok(ActiveDocument { path, language_id })
    }
}

fn infer_language_id(path: &Path) -> String {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("md") | Some("markdown") => "markdown".to_string(),
        _ => "plaintext".to_string(),
    }
}

/// Prompt backed by the client-bound `notelink/inputBox` request.
pub struct ClientPrompt<'a> {
    pub client: &'a Client,
}

#[async_trait]
impl CaptionPrompt for ClientPrompt<'_> {
    async fn input_box(&self, spec: InputBoxSpec) -> Option<String> {
        // A client that fails the request, or does not implement it, is
        // indistinguishable from a dismissed prompt.
        self.client
            .send_request::<InputBox>(spec)
            .await
            .ok()
            .flatten()
    }
}

/// Messages via `window/showMessage`.
pub struct ClientNotifier<'a> {
    pub client: &'a Client,
}

#[async_trait]
impl UserNotifier for ClientNotifier<'_> {
    async fn info(&self, message: &str) {
        self.client.show_message(MessageType::INFO, message).await;
    }

    async fn error(&self, message: &str) {
        self.client.show_message(MessageType::ERROR, message).await;
    }
}

/// Replaces the selection supplied with the command via
/// `workspace/applyEdit`.
pub struct SelectionReplacer<'a> {
    pub client: &'a Client,
    /// `None` when the command arrived without an editor context.
    pub target: Option<(Url, TextRange)>,
}

#[async_trait]
impl SelectionEditor for SelectionReplacer<'_> {
    async fn replace_selection(&self, new_text: &str) {
        let Some((uri, selection)) = self.target.clone() else {
            return;
        };

        let edit = crate::conversion::selection_replacement(uri, selection, new_text);
        // The editor may have closed between context resolution and this
        // edit; a rejected or failed applyEdit stays silent.
        let _ = self.client.apply_edit(edit).await;
    }
}
