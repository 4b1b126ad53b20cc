use chrono::{DateTime, Utc};
use serde::Deserialize;
use std::collections::BTreeMap;

/// Latest message received from one sender.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct RecentMessage {
    pub handle: String,
    pub timestamp: DateTime<Utc>,
    pub body: String,
}

/// Most recent message per sender, keyed by handle.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RecentMessages {
    by_handle: BTreeMap<String, RecentMessage>,
}

impl RecentMessages {
    pub fn new() -> Self {
        Self::default()
    }

    /// Keeps the entry only if it is newer than what is already stored for that sender.
    pub fn record(&mut self, message: RecentMessage) {
        match self.by_handle.get(&message.handle) {
            Some(current) if current.timestamp > message.timestamp => {}
            _ => {
                self.by_handle.insert(message.handle.clone(), message);
            }
        }
    }

    pub fn get(&self, handle: &str) -> Option<&RecentMessage> {
        self.by_handle.get(handle)
    }

    /// Number of distinct senders.
    pub fn sender_count(&self) -> usize {
        self.by_handle.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &RecentMessage> {
        self.by_handle.values()
    }
}

impl FromIterator<RecentMessage> for RecentMessages {
    fn from_iter<I: IntoIterator<Item = RecentMessage>>(iter: I) -> Self {
        let mut messages = Self::new();
        for message in iter {
            messages.record(message);
        }
        messages
    }
}
