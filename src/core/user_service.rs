use crate::core::{Channel, NotificationService};
use crate::utils::error::{DemoError, Result};
use std::sync::Arc;

/// Consumer that depends only on the `NotificationService` capability.
///
/// The service can be supplied at construction, through the setter, or by
/// swapping the slot with [`UserService::replace_notification_service`]. The
/// consumer's own logic never changes when the bound service does.
#[derive(Default)]
pub struct UserService {
    notification_service: Option<Arc<dyn NotificationService>>,
}

impl UserService {
    /// Builds a consumer with nothing bound yet.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_service(service: Arc<dyn NotificationService>) -> Self {
        Self {
            notification_service: Some(service),
        }
    }

    pub fn set_notification_service(&mut self, service: Arc<dyn NotificationService>) {
        self.notification_service = Some(service);
    }

    /// Rebinds the slot directly and returns whatever was bound before.
    pub fn replace_notification_service(
        &mut self,
        service: Arc<dyn NotificationService>,
    ) -> Option<Arc<dyn NotificationService>> {
        self.notification_service.replace(service)
    }

    pub fn clear_notification_service(&mut self) -> Option<Arc<dyn NotificationService>> {
        self.notification_service.take()
    }

    pub fn is_bound(&self) -> bool {
        self.notification_service.is_some()
    }

    pub fn channel(&self) -> Option<Channel> {
        self.notification_service
            .as_ref()
            .map(|service| service.channel())
    }

    /// Fails with [`DemoError::MissingDependency`] when nothing is bound.
    pub fn notify_user(&self, message: &str) -> Result<()> {
        let service = self
            .notification_service
            .as_ref()
            .ok_or(DemoError::MissingDependency {
                consumer: "UserService",
            })?;

        tracing::debug!("Notifying user via {}", service.channel());
        service.notify(message)
    }
}

impl std::fmt::Debug for UserService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UserService")
            .field("channel", &self.channel())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::{
        EmailNotificationService, MemorySink, PushNotificationService, SmsNotificationService,
    };

    #[test]
    fn test_unbound_consumer_fails_every_time() {
        let service = UserService::new();
        assert!(!service.is_bound());
        assert_eq!(service.channel(), None);

        for _ in 0..3 {
            let err = service.notify_user("Order Placed").unwrap_err();
            assert!(err.is_missing_dependency());
        }
    }

    #[test]
    fn test_constructor_injection() {
        let sink = Arc::new(MemorySink::new());
        let service = UserService::with_service(Arc::new(PushNotificationService::new(
            sink.clone(),
        )));

        assert_eq!(service.channel(), Some(Channel::Push));
        service.notify_user("Order Placed").unwrap();

        let deliveries = sink.deliveries();
        assert_eq!(deliveries.len(), 1);
        assert_eq!(deliveries[0].channel, Channel::Push);
    }

    #[test]
    fn test_setter_overwrites_previous_binding() {
        let sink = Arc::new(MemorySink::new());
        let mut service =
            UserService::with_service(Arc::new(EmailNotificationService::new(sink.clone())));

        service.set_notification_service(Arc::new(SmsNotificationService::new(sink.clone())));
        service.notify_user("Shipped").unwrap();

        let channels: Vec<Channel> = sink.deliveries().iter().map(|d| d.channel).collect();
        assert_eq!(channels, vec![Channel::Sms]);
    }

    #[test]
    fn test_replace_returns_previous_service() {
        let sink = Arc::new(MemorySink::new());
        let mut service = UserService::new();

        assert!(service
            .replace_notification_service(Arc::new(EmailNotificationService::new(sink.clone())))
            .is_none());

        let previous = service
            .replace_notification_service(Arc::new(SmsNotificationService::new(sink.clone())))
            .unwrap();
        assert_eq!(previous.channel(), Channel::Email);
        assert_eq!(service.channel(), Some(Channel::Sms));
    }

    #[test]
    fn test_clear_unbinds() {
        let sink = Arc::new(MemorySink::new());
        let mut service =
            UserService::with_service(Arc::new(EmailNotificationService::new(sink.clone())));

        let removed = service.clear_notification_service();
        assert!(removed.is_some());
        assert!(service.notify_user("Order Placed").is_err());
        assert!(sink.is_empty());
    }

    #[test]
    fn test_debug_shows_bound_channel() {
        let sink = Arc::new(MemorySink::new());
        let service =
            UserService::with_service(Arc::new(SmsNotificationService::new(sink)));
        assert_eq!(format!("{:?}", service), "UserService { channel: Some(Sms) }");
    }
}
