use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use tower_lsp::lsp_types::Url;

/// Global state for the LSP server
/// Must be Send + Sync
#[derive(Clone)]
pub struct GlobalState {
    /// RwLock-protected table of open documents, URI → language id.
    /// Written by didOpen/didClose, read by the create-note command to
    /// check the focused document's type. Document text is never needed.
    pub open_docs: Arc<RwLock<HashMap<Url, String>>>,
}

impl GlobalState {
    pub fn new() -> Self {
        Self {
            open_docs: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}
