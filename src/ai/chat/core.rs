use std::sync::Arc;

use anyhow::{Error, Result};
use async_trait::async_trait;

use super::models::Transcript;
use crate::gemini::{Content, Role};

/// Anything that can produce the next model turn for a conversation
/// history. The last entry of `history` is always the new user
/// message.
#[async_trait]
pub trait ChatModel: Send + Sync {
    async fn send(&self, history: &[Content]) -> Result<String, Error>;
}

pub type BoxedChatModel = Arc<dyn ChatModel>;

/// A single ongoing dialogue with the model.
///
/// The remote API is stateless so the conversation keeps the whole
/// transcript locally and replays it on every turn. A turn is only
/// recorded once the model has replied; a failed turn leaves the
/// transcript untouched.
pub struct Conversation {
    model: BoxedChatModel,
    transcript: Transcript,
}

impl Conversation {
    /// Start a conversation from a seed transcript
    pub fn new(model: BoxedChatModel, transcript: Transcript) -> Self {
        Self { model, transcript }
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    /// Send `text` as the next user turn and return the model's reply.
    pub async fn send_message(&mut self, text: &str) -> Result<String, Error> {
        let user_msg = Content::new(Role::User, text);

        let mut history = self.transcript.messages();
        history.push(user_msg.clone());

        let reply = self.model.send(&history).await?;

        self.transcript.push(user_msg);
        self.transcript.push(Content::new(Role::Model, &reply));

        Ok(reply)
    }
}
