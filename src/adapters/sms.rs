use crate::adapters::sink::ConsoleSink;
use crate::domain::model::{Channel, Delivery, OutputFormat};
use crate::domain::ports::{DeliverySink, NotificationService};
use crate::utils::error::Result;
use std::sync::Arc;

pub struct SmsNotificationService {
    sink: Arc<dyn DeliverySink>,
}

impl SmsNotificationService {
    pub fn new(sink: Arc<dyn DeliverySink>) -> Self {
        Self { sink }
    }
}

impl Default for SmsNotificationService {
    fn default() -> Self {
        Self::new(Arc::new(ConsoleSink::stdout(OutputFormat::Text)))
    }
}

impl NotificationService for SmsNotificationService {
    fn channel(&self) -> Channel {
        Channel::Sms
    }

    fn notify(&self, message: &str) -> Result<()> {
        tracing::debug!("📱 SMS delivery: {}", message);
        self.sink.record(Delivery::new(
            Channel::Sms,
            message,
            format!("Sending SMS: {}", message),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::sink::MemorySink;

    #[test]
    fn test_sms_delivery_keeps_empty_message() {
        let sink = Arc::new(MemorySink::new());
        let service = SmsNotificationService::new(sink.clone());

        service.notify("").unwrap();

        let deliveries = sink.deliveries();
        assert_eq!(deliveries.len(), 1);
        assert_eq!(deliveries[0].channel, Channel::Sms);
        assert_eq!(deliveries[0].message, "");
        assert_eq!(deliveries[0].summary, "Sending SMS: ");
    }
}
