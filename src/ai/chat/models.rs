//! The core models for managing a stateful chat with an LLM.
use crate::gemini::Content;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Transcript(Vec<Content>);

impl Transcript {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn new_with_messages(messages: Vec<Content>) -> Self {
        Self(messages)
    }

    pub fn messages(&self) -> Vec<Content> {
        self.0.clone()
    }

    pub fn push(&mut self, msg: Content) {
        self.0.push(msg)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Content> {
        self.0.iter()
    }
}
