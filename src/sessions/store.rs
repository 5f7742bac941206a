use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use crate::ai::chat::Conversation;

/// Shared handle to a conversation. The async mutex serializes
/// concurrent turns for the same session.
pub type ConversationHandle = Arc<tokio::sync::Mutex<Conversation>>;

/// Storage for conversations keyed by session id.
///
/// Implementations must make `insert_if_absent` atomic: when two
/// callers race to create the same id, both get the same handle back.
pub trait SessionStore: Send + Sync {
    fn get(&self, id: &str) -> Option<ConversationHandle>;

    /// Store `conversation` under `id` unless an entry already exists.
    /// Returns whichever handle ends up stored.
    fn insert_if_absent(&self, id: &str, conversation: Conversation) -> ConversationHandle;

    fn remove(&self, id: &str) -> Option<ConversationHandle>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Process-local store. Entries are never evicted and are lost when
/// the process exits.
#[derive(Default)]
pub struct InMemorySessionStore {
    sessions: Mutex<HashMap<String, ConversationHandle>>,
}

impl InMemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn sessions(&self) -> MutexGuard<'_, HashMap<String, ConversationHandle>> {
        // Nothing panics while holding the lock so a poisoned map is
        // still consistent
        self.sessions.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl SessionStore for InMemorySessionStore {
    fn get(&self, id: &str) -> Option<ConversationHandle> {
        self.sessions().get(id).cloned()
    }

    fn insert_if_absent(&self, id: &str, conversation: Conversation) -> ConversationHandle {
        self.sessions()
            .entry(id.to_string())
            .or_insert_with(|| Arc::new(tokio::sync::Mutex::new(conversation)))
            .clone()
    }

    fn remove(&self, id: &str) -> Option<ConversationHandle> {
        self.sessions().remove(id)
    }

    fn len(&self) -> usize {
        self.sessions().len()
    }
}
