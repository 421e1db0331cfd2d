pub mod demo;
pub mod tight;
pub mod user_service;

pub use crate::domain::model::{Channel, Delivery, OutputFormat};
pub use crate::domain::ports::{DeliverySink, NotificationService};
pub use crate::utils::error::Result;
