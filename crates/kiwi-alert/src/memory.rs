use std::sync::RwLock;

use crate::error::NotificationError;
use crate::transport::{NotificationTransport, PublishRequest};

/// Notification transport that records every published request.
///
/// Intended for tests and embedding.
pub struct InMemoryNotificationTransport {
    published: RwLock<Vec<PublishRequest>>,
}

impl InMemoryNotificationTransport {
    pub fn new() -> Self {
        Self {
            published: RwLock::new(Vec::new()),
        }
    }

    /// All requests published so far, oldest first.
    pub fn published(&self) -> Vec<PublishRequest> {
        self.published.read().expect("lock poisoned").clone()
    }

    pub fn len(&self) -> usize {
        self.published.read().expect("lock poisoned").len()
    }

    pub fn is_empty(&self) -> bool {
        self.published.read().expect("lock poisoned").is_empty()
    }
}

impl Default for InMemoryNotificationTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl NotificationTransport for InMemoryNotificationTransport {
    fn publish(&self, request: &PublishRequest) -> Result<(), NotificationError> {
        self.published
            .write()
            .expect("lock poisoned")
            .push(request.clone());
        Ok(())
    }
}

impl std::fmt::Debug for InMemoryNotificationTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InMemoryNotificationTransport")
            .field("published_count", &self.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_in_order() {
        let transport = InMemoryNotificationTransport::new();
        for subject in ["first", "second"] {
            transport
                .publish(&PublishRequest {
                    topic: "t".into(),
                    subject: subject.into(),
                    message: "m".into(),
                })
                .unwrap();
        }
        let published = transport.published();
        assert_eq!(published.len(), 2);
        assert_eq!(published[0].subject, "first");
        assert_eq!(published[1].subject, "second");
    }

    #[test]
    fn starts_empty() {
        let transport = InMemoryNotificationTransport::default();
        assert!(transport.is_empty());
        assert!(format!("{transport:?}").contains("published_count"));
    }
}
