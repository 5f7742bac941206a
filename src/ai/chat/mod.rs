mod core;
mod models;

pub use self::core::{BoxedChatModel, ChatModel, Conversation};
pub use self::models::Transcript;
