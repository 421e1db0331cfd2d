use crate::adapters::sink::ConsoleSink;
use crate::domain::model::{Channel, Delivery, OutputFormat};
use crate::domain::ports::{DeliverySink, NotificationService};
use crate::utils::error::Result;
use std::sync::Arc;

pub struct PushNotificationService {
    sink: Arc<dyn DeliverySink>,
}

impl PushNotificationService {
    pub fn new(sink: Arc<dyn DeliverySink>) -> Self {
        Self { sink }
    }
}

impl Default for PushNotificationService {
    fn default() -> Self {
        Self::new(Arc::new(ConsoleSink::stdout(OutputFormat::Text)))
    }
}

impl NotificationService for PushNotificationService {
    fn channel(&self) -> Channel {
        Channel::Push
    }

    fn notify(&self, message: &str) -> Result<()> {
        tracing::debug!("🔔 Push delivery: {}", message);
        self.sink.record(Delivery::new(
            Channel::Push,
            message,
            format!("Sending push notification: {}", message),
        ))
    }
}
