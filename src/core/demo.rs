use crate::adapters::{EmailNotificationService, PushNotificationService, SmsNotificationService};
use crate::core::tight::TightUserService;
use crate::core::user_service::UserService;
use crate::core::{Channel, DeliverySink, NotificationService};
use crate::utils::error::Result;
use std::sync::Arc;

pub const DEFAULT_MESSAGE: &str = "Order Placed";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DemoSummary {
    /// Channels of the loosely coupled deliveries, in call order.
    pub channels: Vec<Channel>,
    /// Calls made through the tight consumer; these bypass the injected sink.
    pub tight_deliveries: usize,
}

impl DemoSummary {
    pub fn deliveries(&self) -> usize {
        self.channels.len() + self.tight_deliveries
    }
}

/// Wires each injection style against a shared sink and notifies once per consumer.
pub struct DemoEngine {
    sink: Arc<dyn DeliverySink>,
    message: String,
    with_tight: bool,
}

impl DemoEngine {
    pub fn new(sink: Arc<dyn DeliverySink>, message: impl Into<String>) -> Self {
        Self {
            sink,
            message: message.into(),
            with_tight: false,
        }
    }

    pub fn with_tight_consumer(mut self, enabled: bool) -> Self {
        self.with_tight = enabled;
        self
    }

    pub fn run(&self) -> Result<DemoSummary> {
        let mut summary = DemoSummary::default();

        tracing::info!("Tight coupling: consumer constructs its own email service");
        let tight = TightUserService::new();
        if self.with_tight {
            tight.notify_user(&self.message)?;
            summary.tight_deliveries += 1;
        } else {
            tracing::debug!("Tight consumer built but not invoked");
        }

        let email: Arc<dyn NotificationService> =
            Arc::new(EmailNotificationService::new(self.sink.clone()));
        let sms: Arc<dyn NotificationService> =
            Arc::new(SmsNotificationService::new(self.sink.clone()));
        let push: Arc<dyn NotificationService> =
            Arc::new(PushNotificationService::new(self.sink.clone()));

        tracing::info!("Loose coupling: constructor injection");
        for service in [&email, &sms, &push] {
            let consumer = UserService::with_service(service.clone());
            self.notify(&consumer, &mut summary)?;
        }

        tracing::info!("Loose coupling: setter injection, then field-style rebind");
        let mut consumer = UserService::new();
        consumer.set_notification_service(email.clone());
        if let Some(previous) = consumer.replace_notification_service(sms.clone()) {
            tracing::debug!("Rebound from {} to {}", previous.channel(), sms.channel());
        }
        self.notify(&consumer, &mut summary)?;

        tracing::info!("✅ Demo finished with {} deliveries", summary.deliveries());
        Ok(summary)
    }

    fn notify(&self, consumer: &UserService, summary: &mut DemoSummary) -> Result<()> {
        consumer.notify_user(&self.message)?;
        if let Some(channel) = consumer.channel() {
            summary.channels.push(channel);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::MemorySink;

    #[test]
    fn test_demo_runs_every_injection_style() {
        let sink = Arc::new(MemorySink::new());
        let summary = DemoEngine::new(sink.clone(), DEFAULT_MESSAGE).run().unwrap();

        let expected = vec![Channel::Email, Channel::Sms, Channel::Push, Channel::Sms];
        assert_eq!(summary.channels, expected);
        assert_eq!(summary.tight_deliveries, 0);
        assert_eq!(summary.deliveries(), 4);

        let deliveries = sink.deliveries();
        let recorded: Vec<Channel> = deliveries.iter().map(|d| d.channel).collect();
        assert_eq!(recorded, expected);
        assert!(deliveries.iter().all(|d| d.message == DEFAULT_MESSAGE));
    }

    #[test]
    fn test_tight_consumer_bypasses_sink() {
        let sink = Arc::new(MemorySink::new());
        let summary = DemoEngine::new(sink.clone(), "Shipped")
            .with_tight_consumer(true)
            .run()
            .unwrap();

        assert_eq!(summary.tight_deliveries, 1);
        assert_eq!(summary.deliveries(), 5);
        assert_eq!(sink.len(), 4);
    }
}
