//! Per-session conversation state

mod registry;
mod store;

pub use registry::SessionRegistry;
pub use store::{ConversationHandle, InMemorySessionStore, SessionStore};
