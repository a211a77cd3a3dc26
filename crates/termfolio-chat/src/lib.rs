//! Conversation layer for termfolio.
//!
//! - [`session::ChatSession`] — in-memory turn history, session rate
//!   limit, and orchestration of provider calls
//! - [`prompt`] — system prompt assembly (preamble + profile document)

pub mod prompt;
pub mod session;

pub use prompt::build_system_prompt;
pub use session::{ChatError, ChatReply, ChatSession};
