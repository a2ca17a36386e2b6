use tower_lsp::lsp_types::*;

use crate::state::GlobalState;

/// Handle "textDocument/didOpen" notification
pub async fn handle_did_open(state: &GlobalState, params: DidOpenTextDocumentParams) {
    let mut docs = state.open_docs.write().await;
    docs.insert(
        params.text_document.uri,
        params.text_document.language_id,
    );
}

/// Handle "textDocument/didClose" notification
pub async fn handle_did_close(state: &GlobalState, params: DidCloseTextDocumentParams) {
    let mut docs = state.open_docs.write().await;
    docs.remove(&params.text_document.uri);
}
