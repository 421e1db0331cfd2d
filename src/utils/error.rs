use thiserror::Error;

#[derive(Error, Debug)]
pub enum DemoError {
    #[error("Missing dependency: {consumer} has no notification service bound")]
    MissingDependency { consumer: &'static str },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Invalid value for '{field}': {value} ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl DemoError {
    pub fn user_friendly_message(&self) -> String {
        match self {
            DemoError::MissingDependency { consumer } => {
                format!("{} cannot notify anyone until a notification service is injected", consumer)
            }
            DemoError::IoError(e) => format!("Could not write notification output: {}", e),
            DemoError::SerializationError(e) => format!("Could not encode notification: {}", e),
            DemoError::InvalidConfigValueError { field, reason, .. } => {
                format!("Invalid --{}: {}", field.replace('_', "-"), reason)
            }
        }
    }

    pub fn is_missing_dependency(&self) -> bool {
        matches!(self, DemoError::MissingDependency { .. })
    }
}

pub type Result<T> = std::result::Result<T, DemoError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_dependency_message() {
        let err = DemoError::MissingDependency {
            consumer: "UserService",
        };
        assert!(err.is_missing_dependency());
        assert!(err.to_string().contains("UserService"));
        assert!(err.user_friendly_message().contains("injected"));
    }

    #[test]
    fn test_invalid_value_names_flag() {
        let err = DemoError::InvalidConfigValueError {
            field: "message".to_string(),
            value: " ".to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        };
        assert!(!err.is_missing_dependency());
        assert_eq!(
            err.user_friendly_message(),
            "Invalid --message: Value cannot be empty or whitespace-only"
        );
    }
}
