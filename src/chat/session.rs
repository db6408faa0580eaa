use chrono::{DateTime, Local};
use log::debug;

use crate::chat::intent::Intent;
use crate::chat::models::{GREETING, Message};
use crate::chat::store::MessageStore;
use crate::utils::is_blank;

pub const MAX_INPUT_CHARS: usize = 500;

/// Quick replies stay visible until the conversation has gone past the
/// greeting and the first exchange.
const QUICK_REPLY_THRESHOLD: usize = 2;

/// Reply computed at submit time, appended once its delay elapses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingReply {
    pub intent: Intent,
    pub text: &'static str,
}

/// State owned by the chat screen: the transcript and the input buffer.
#[derive(Debug, Clone)]
pub struct ChatSession {
    store: MessageStore,
    input: String,
}

impl ChatSession {
    pub fn new(now: DateTime<Local>) -> Self {
        let mut store = MessageStore::new();
        store.push(Message::from_assistant(GREETING, now));
        Self { store, input: String::new() }
    }

    pub fn messages(&self) -> &[Message] {
        self.store.as_slice()
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn set_input(&mut self, text: &str) {
        self.input = text.chars().take(MAX_INPUT_CHARS).collect();
    }

    pub fn can_send(&self) -> bool {
        !is_blank(&self.input)
    }

    pub fn show_quick_replies(&self) -> bool {
        self.store.as_slice().len() <= QUICK_REPLY_THRESHOLD
    }

    /// Appends the user's message and clears the input buffer. Blank text is
    /// ignored and leaves everything untouched.
    pub fn send(&mut self, text: &str, now: DateTime<Local>) -> Option<PendingReply> {
        if is_blank(text) {
            return None;
        }
        self.store.push(Message::from_user(text, now));
        self.input.clear();
        let intent = Intent::classify(text);
        debug!("Matched intent {intent:?}");
        Some(PendingReply { intent, text: intent.response() })
    }

    pub fn send_input(&mut self, now: DateTime<Local>) -> Option<PendingReply> {
        let text = std::mem::take(&mut self.input);
        let reply = self.send(&text, now);
        if reply.is_none() {
            self.input = text;
        }
        reply
    }

    pub fn deliver(&mut self, reply: PendingReply, now: DateTime<Local>) -> &Message {
        self.store.push(Message::from_assistant(reply.text, now))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_with_greeting() {
        let session = ChatSession::new(Local::now());
        assert_eq!(session.messages().len(), 1);
        assert!(!session.messages()[0].is_user);
        assert!(session.messages()[0].text.starts_with("नमस्ते!"));
        assert!(session.show_quick_replies());
    }

    #[test]
    fn blank_send_changes_nothing() {
        let mut session = ChatSession::new(Local::now());
        session.set_input("   ");
        assert!(!session.can_send());
        assert!(session.send_input(Local::now()).is_none());
        assert!(session.send("\n\t", Local::now()).is_none());
        assert_eq!(session.messages().len(), 1);
        assert_eq!(session.input(), "   ");
    }

    #[test]
    fn send_appends_user_message_and_clears_input() {
        let mut session = ChatSession::new(Local::now());
        session.set_input("Show crop advisory");
        assert!(session.can_send());
        let reply = session.send_input(Local::now()).unwrap();
        assert_eq!(reply.intent, Intent::Crop);
        assert_eq!(session.input(), "");
        let last = session.messages().last().unwrap();
        assert!(last.is_user);
        assert_eq!(last.text, "Show crop advisory");
    }

    #[test]
    fn quick_reply_send_also_clears_input() {
        let mut session = ChatSession::new(Local::now());
        session.set_input("half typed");
        session.send("Weather Forecast", Local::now()).unwrap();
        assert_eq!(session.input(), "");
    }

    #[test]
    fn deliver_appends_assistant_reply() {
        let mut session = ChatSession::new(Local::now());
        let reply = session.send("water level", Local::now()).unwrap();
        let delivered = session.deliver(reply.clone(), Local::now());
        assert!(!delivered.is_user);
        assert_eq!(delivered.text, reply.text);
        assert_eq!(session.messages().len(), 3);
        assert!(!session.show_quick_replies());
    }

    #[test]
    fn input_is_capped() {
        let mut session = ChatSession::new(Local::now());
        session.set_input(&"जल".repeat(400));
        assert_eq!(session.input().chars().count(), MAX_INPUT_CHARS);
    }
}
