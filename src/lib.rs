//! quill - a line-oriented text buffer with cursor editing and batched undo
//!
//! The core lives in [`editable`]. Everything else follows the Elm
//! Architecture: [`script`] turns command lines into [`Msg`] values,
//! [`update::update`] applies them to a [`TextEditor`], and the returned
//! [`Cmd`] says what to print.

pub mod cli;
pub mod commands;
pub mod config;
pub mod config_paths;
pub mod debug_dump;
pub mod editable;
pub mod messages;
pub mod script;
pub mod session;
pub mod tracing;
pub mod update;

// Re-export commonly used types
pub use commands::Cmd;
pub use config::EditorConfig;
pub use editable::{Direction, Position, TextEditor};
pub use messages::Msg;
pub use session::Session;
