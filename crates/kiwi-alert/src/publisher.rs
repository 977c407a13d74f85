use kiwi_types::FloatingAverage;
use tracing::{debug, info, warn};

use crate::config::AlertConfig;
use crate::engine::AlertEngine;
use crate::env::EnvironmentVariables;
use crate::error::{AlertError, AlertResult};
use crate::transport::{NotificationTransport, PublishRequest};

/// Subject of every alert message.
pub const DEFAULT_SUBJECT: &str = "Floating Average Info - #NOFOMO";

/// Sends floating-average alerts.
pub trait Alert: Send + Sync {
    /// Alert on a batch of snapshots with a single message.
    ///
    /// An empty batch does nothing.
    fn alert_all(&self, averages: &[FloatingAverage]) -> AlertResult<()>;

    /// Alert on one snapshot. Same as a one-element batch.
    fn alert(&self, average: &FloatingAverage) -> AlertResult<()> {
        self.alert_all(std::slice::from_ref(average))
    }
}

/// Publishes alerts to the topic named by an environment variable.
///
/// The variable is looked up on every call, so a changed binding takes
/// effect on the next alert without rebuilding the publisher.
///
/// With the default [`SignalPolicy::Threshold`], a quote that stays within
/// the threshold band publishes nothing. Use [`SignalPolicy::Direction`] to
/// alert on every quote that differs from its average.
///
/// [`SignalPolicy::Threshold`]: crate::engine::SignalPolicy::Threshold
/// [`SignalPolicy::Direction`]: crate::engine::SignalPolicy::Direction
pub struct TopicAlert<N, E> {
    transport: N,
    topic_variable: String,
    environment: E,
    engine: AlertEngine,
    subject: String,
}

impl<N: NotificationTransport, E: EnvironmentVariables> TopicAlert<N, E> {
    pub fn new(transport: N, topic_variable: impl Into<String>, environment: E) -> Self {
        Self {
            transport,
            topic_variable: topic_variable.into(),
            environment,
            engine: AlertEngine::default(),
            subject: DEFAULT_SUBJECT.to_string(),
        }
    }

    pub fn from_config(transport: N, environment: E, config: &AlertConfig) -> Self {
        Self {
            transport,
            topic_variable: config.topic_env_variable.clone(),
            environment,
            engine: AlertEngine::new(config.policy),
            subject: config.subject.clone(),
        }
    }

    pub fn with_engine(mut self, engine: AlertEngine) -> Self {
        self.engine = engine;
        self
    }

    pub fn engine(&self) -> &AlertEngine {
        &self.engine
    }

    pub fn transport(&self) -> &N {
        &self.transport
    }

    fn resolve_topic(&self) -> AlertResult<String> {
        self.environment
            .value_from(&self.topic_variable)
            .ok_or_else(|| AlertError::MissingTopic {
                variable: self.topic_variable.clone(),
            })
    }
}

impl<N: NotificationTransport, E: EnvironmentVariables> Alert for TopicAlert<N, E> {
    fn alert_all(&self, averages: &[FloatingAverage]) -> AlertResult<()> {
        if averages.is_empty() {
            debug!("no averages, nothing to alert");
            return Ok(());
        }

        let Some(message) = self.engine.compose(averages)? else {
            debug!(count = averages.len(), "no average left its band");
            return Ok(());
        };
        let topic = self.resolve_topic()?;

        let request = PublishRequest {
            topic,
            subject: self.subject.clone(),
            message,
        };
        self.transport.publish(&request).map_err(|e| {
            warn!(topic = %request.topic, error = %e, "publish failed");
            AlertError::PublishFailed {
                topic: request.topic.clone(),
            }
        })?;

        info!(topic = %request.topic, count = averages.len(), "alert published");
        Ok(())
    }
}
