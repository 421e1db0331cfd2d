// Adapters layer: concrete notification channels and delivery sinks.

pub mod email;
pub mod push;
pub mod sink;
pub mod sms;

pub use email::EmailNotificationService;
pub use push::PushNotificationService;
pub use sink::{ConsoleSink, MemorySink};
pub use sms::SmsNotificationService;
