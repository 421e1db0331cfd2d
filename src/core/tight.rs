use crate::adapters::EmailNotificationService;
use crate::core::{Channel, NotificationService};
use crate::utils::error::Result;

/// Consumer that builds its own email dependency. There is no way to hand it
/// a different channel or a different sink.
pub struct TightUserService {
    email_service: EmailNotificationService,
}

impl TightUserService {
    pub fn new() -> Self {
        Self {
            email_service: EmailNotificationService::default(),
        }
    }

    pub fn channel(&self) -> Channel {
        self.email_service.channel()
    }

    pub fn notify_user(&self, message: &str) -> Result<()> {
        self.email_service.notify(message)
    }
}

impl Default for TightUserService {
    fn default() -> Self {
        Self::new()
    }
}
