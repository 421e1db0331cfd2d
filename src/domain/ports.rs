use crate::domain::model::{Channel, Delivery};
use crate::utils::error::Result;

/// A channel able to deliver a textual message.
pub trait NotificationService: Send + Sync {
    fn channel(&self) -> Channel;
    fn notify(&self, message: &str) -> Result<()>;
}

/// Where simulated deliveries become observable.
pub trait DeliverySink: Send + Sync {
    fn record(&self, delivery: Delivery) -> Result<()>;
}
