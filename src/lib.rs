pub mod adapters;
#[cfg(feature = "cli")]
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::{
    ConsoleSink, EmailNotificationService, MemorySink, PushNotificationService,
    SmsNotificationService,
};
pub use core::{
    demo::{DemoEngine, DemoSummary},
    tight::TightUserService,
    user_service::UserService,
};
pub use domain::model::{Channel, Delivery, OutputFormat};
pub use domain::ports::{DeliverySink, NotificationService};
pub use utils::error::{DemoError, Result};
