use std::sync::Arc;

use crate::error::NotificationError;

/// One message for one topic.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PublishRequest {
    pub topic: String,
    pub subject: String,
    pub message: String,
}

/// Notification client (an SNS-style topic API).
///
/// Delivery guarantees are whatever the implementation provides; callers make
/// a single attempt and report failure.
pub trait NotificationTransport: Send + Sync {
    fn publish(&self, request: &PublishRequest) -> Result<(), NotificationError>;
}

impl<T: NotificationTransport + ?Sized> NotificationTransport for Arc<T> {
    fn publish(&self, request: &PublishRequest) -> Result<(), NotificationError> {
        (**self).publish(request)
    }
}
