use std::sync::Arc;

use crate::ai::chat::{BoxedChatModel, Conversation, Transcript};
use super::store::{ConversationHandle, SessionStore};

/// Maps session ids to conversations, creating seeded ones on demand.
#[derive(Clone)]
pub struct SessionRegistry {
    store: Arc<dyn SessionStore>,
    model: BoxedChatModel,
    seed: Transcript,
}

impl SessionRegistry {
    pub fn new(store: Arc<dyn SessionStore>, model: BoxedChatModel, seed: Transcript) -> Self {
        Self { store, model, seed }
    }

    /// Return the conversation for `id`, starting a new one from the
    /// seed transcript if there isn't one yet. Existing conversations
    /// are returned unchanged.
    pub fn get_or_create(&self, id: &str) -> ConversationHandle {
        if let Some(handle) = self.store.get(id) {
            return handle;
        }

        tracing::debug!("Starting new conversation for session {}", id);
        let conversation = Conversation::new(Arc::clone(&self.model), self.seed.clone());
        self.store.insert_if_absent(id, conversation)
    }

    /// Discard the conversation for `id` so the next `get_or_create`
    /// starts over. Returns whether there was one to discard.
    pub fn reset(&self, id: &str) -> bool {
        let existed = self.store.remove(id).is_some();
        if existed {
            tracing::debug!("Discarded conversation for session {}", id);
        }
        existed
    }

    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }
}
