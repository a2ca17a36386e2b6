use notelink_core::host::InputBoxSpec;
use serde::{Deserialize, Serialize};
use tower_lsp::lsp_types::request::Request;
use tower_lsp::lsp_types::{Range, Url};

/// Command advertised through the server's executeCommand capabilities.
pub const CREATE_NOTE_COMMAND: &str = "notelink/createNote";

/// Argument of the `notelink/createNote` command: the client's active
/// editor at the moment the command was triggered. Clients invoke the
/// command without arguments when no editor is focused.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateNoteParams {
    /// URI of the focused document
    pub uri: Url,
    /// Selection to replace with the note link; a collapsed range means
    /// insert at the cursor
    pub selection: Range,
}

/// Client-bound request asking the editor to show a single-line input
/// box, corresponding to VS Code's `showInputBox`. The result is the
/// submitted text, or `null` when the user dismissed the prompt.
pub enum InputBox {}

impl Request for InputBox {
    type Params = InputBoxSpec;
    type Result = Option<String>;
    const METHOD: &'static str = "notelink/inputBox";
}
