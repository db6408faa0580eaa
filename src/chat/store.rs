use crate::chat::models::Message;

/// Append-only, insertion-ordered message list.
#[derive(Debug, Default, Clone)]
pub struct MessageStore {
    messages: Vec<Message>,
}

impl MessageStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, message: Message) -> &Message {
        self.messages.push(message);
        &self.messages[self.messages.len() - 1]
    }

    pub fn as_slice(&self) -> &[Message] {
        &self.messages
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Local;

    #[test]
    fn keeps_insertion_order_and_duplicates() {
        let now = Local::now();
        let mut store = MessageStore::new();
        assert!(store.as_slice().is_empty());
        store.push(Message::from_user("hello", now));
        store.push(Message::from_assistant("hi", now));
        store.push(Message::from_user("hello", now));

        let texts: Vec<&str> = store.as_slice().iter().map(|m| m.text.as_str()).collect();
        assert_eq!(texts, ["hello", "hi", "hello"]);
        assert!(store.as_slice().last().is_some_and(|m| m.is_user));
    }

    #[test]
    fn message_ids_are_unique() {
        let now = Local::now();
        let a = Message::from_user("same", now);
        let b = Message::from_user("same", now);
        assert_ne!(a.id, b.id);
    }
}
