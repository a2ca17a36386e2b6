use tower_lsp::jsonrpc::{Error, Result};
use tower_lsp::lsp_types::*;
use tower_lsp::Client;

use notelink_core::utils::time::SystemClock;
use notelink_core::vfs::PhysicalFileSystem;
use notelink_core::workflow::{CreateNote, Outcome};

use crate::capabilities::{ClientNotifier, ClientPrompt, CommandContext, SelectionReplacer};
use crate::conversion::lsp_range_to_text_range;
use crate::protocol::{CreateNoteParams, CREATE_NOTE_COMMAND};
use crate::state::GlobalState;

/// Handle "workspace/executeCommand" request
pub async fn handle_execute_command(
    client: &Client,
    state: &GlobalState,
    params: ExecuteCommandParams,
) -> Result<Option<serde_json::Value>> {
    match params.command.as_str() {
        CREATE_NOTE_COMMAND => handle_create_note(client, state, params).await,
        _ => Err(Error::method_not_found()),
    }
}

/// Handle the "notelink/createNote" command.
///
/// Returns the created note's URI, or null when the workflow ended
/// without creating one (cancelled prompt, reported failure).
pub async fn handle_create_note(
    client: &Client,
    state: &GlobalState,
    params: ExecuteCommandParams,
) -> Result<Option<serde_json::Value>> {
    // The argument is optional by design: a command triggered with no
    // focused editor arrives bare and takes the NoActiveDocument path
    // instead of failing the protocol call.
    let args: Option<CreateNoteParams> = match params.arguments.first() {
        Some(value) => Some(
            serde_json::from_value(value.clone())
                .map_err(|_| Error::invalid_params("Invalid createNote argument"))?,
        ),
        None => None,
    };

    let context = CommandContext {
        state,
        params: args.as_ref(),
    };
    let prompt = ClientPrompt { client };
    let notifier = ClientNotifier { client };
    let editor = SelectionReplacer {
        client,
        target: args
            .as_ref()
            .map(|a| (a.uri.clone(), lsp_range_to_text_range(a.selection))),
    };

    let workflow = CreateNote {
        docs: &context,
        prompt: &prompt,
        notifier: &notifier,
        editor: &editor,
        fs: &PhysicalFileSystem,
        clock: &SystemClock,
    };

    match workflow.run().await {
        Ok(Outcome::Created(note)) => {
            let uri = Url::from_file_path(&note.path).ok();
            Ok(uri.map(|u| serde_json::Value::String(u.to_string())))
        }
        Ok(Outcome::Cancelled) => Ok(None),
        Err(e) => {
            // Workflow failures are user-facing, not protocol errors.
            client.show_message(MessageType::ERROR, e.to_string()).await;
            Ok(None)
        }
    }
}
