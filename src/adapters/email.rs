use crate::adapters::sink::ConsoleSink;
use crate::domain::model::{Channel, Delivery, OutputFormat};
use crate::domain::ports::{DeliverySink, NotificationService};
use crate::utils::error::Result;
use std::sync::Arc;

pub struct EmailNotificationService {
    sink: Arc<dyn DeliverySink>,
}

impl EmailNotificationService {
    pub fn new(sink: Arc<dyn DeliverySink>) -> Self {
        Self { sink }
    }
}

impl Default for EmailNotificationService {
    fn default() -> Self {
        Self::new(Arc::new(ConsoleSink::stdout(OutputFormat::Text)))
    }
}

impl NotificationService for EmailNotificationService {
    fn channel(&self) -> Channel {
        Channel::Email
    }

    fn notify(&self, message: &str) -> Result<()> {
        tracing::debug!("📧 Email delivery: {}", message);
        self.sink.record(Delivery::new(
            Channel::Email,
            message,
            format!("Sending email notification: {}", message),
        ))
    }
}
