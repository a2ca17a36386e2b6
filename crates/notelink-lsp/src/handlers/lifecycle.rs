use tower_lsp::jsonrpc::Result;
use tower_lsp::lsp_types::*;
use tower_lsp::Client;

use crate::protocol::CREATE_NOTE_COMMAND;

/// Handle "initialize" request
pub async fn handle_initialize(
    client: &Client,
    params: InitializeParams,
) -> Result<InitializeResult> {
    if let Some(root_uri) = params.root_uri {
        client
            .log_message(
                MessageType::INFO,
                format!("Serving workspace at: {:?}", root_uri.to_file_path().ok()),
            )
            .await;
    }

    Ok(InitializeResult {
        capabilities: ServerCapabilities {
            // Only open/close tracking: the server needs each document's
            // language id, never its text.
            text_document_sync: Some(TextDocumentSyncCapability::Options(
                TextDocumentSyncOptions {
                    open_close: Some(true),
                    change: Some(TextDocumentSyncKind::NONE),
                    ..Default::default()
                },
            )),
            execute_command_provider: Some(ExecuteCommandOptions {
                commands: vec![CREATE_NOTE_COMMAND.to_string()],
                work_done_progress_options: Default::default(),
            }),
            ..Default::default()
        },
        ..Default::default()
    })
}
