//! Chat with the AI tutor.

use super::{push_char, Command, MAX_CHAT_LENGTH};
use crate::api::ApiError;
use crate::i18n;
use crate::models::ChatReply;
use crate::utils::{linkify, Segment};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatRole {
    User,
    Ai,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub text: String,
}

impl ChatMessage {
    pub fn segments(&self) -> Vec<Segment> {
        linkify(&self.text)
    }
}

#[derive(Debug, Default)]
pub struct ChatPage {
    pub messages: Vec<ChatMessage>,
    pub input: String,
    pub loading: bool,
    pub error: Option<String>,
}

impl ChatPage {
    pub fn type_char(&mut self, c: char) {
        push_char(&mut self.input, MAX_CHAT_LENGTH, c);
    }

    pub fn backspace(&mut self) {
        self.input.pop();
    }

    /// Send the input line. Blank input is ignored.
    pub fn send(&mut self) -> Option<Command> {
        if self.loading {
            return None;
        }
        let message = self.input.trim().to_string();
        if message.is_empty() {
            return None;
        }
        self.messages.push(ChatMessage {
            role: ChatRole::User,
            text: message.clone(),
        });
        self.input.clear();
        self.error = None;
        self.loading = true;
        Some(Command::SendChat(message))
    }

    pub fn apply_reply(&mut self, result: Result<ChatReply, ApiError>) {
        self.loading = false;
        match result {
            Ok(reply) => self.messages.push(ChatMessage {
                role: ChatRole::Ai,
                text: reply.reply,
            }),
            Err(_) => self.error = Some(i18n::CHAT_SEND_FAILED.to_string()),
        }
    }
}
