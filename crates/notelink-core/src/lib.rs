//! Notelink Core Library
//!
//! Host-agnostic note creation workflow: context resolution, caption
//! prompting, note synthesis, back-link insertion. All host capabilities
//! (document access, prompts, file IO, editing) are injected as traits,
//! no direct IO here.
//!

pub mod error;
pub mod host;
pub mod model;
pub mod template;
pub mod utils;
pub mod vfs;
pub mod workflow;

pub use error::WorkflowError;
pub use model::{ActiveDocument, CreatedNote};
pub use utils::slugify_caption;
pub use workflow::{note_file_name, validate_caption, CreateNote, Outcome};
