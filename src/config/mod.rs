use crate::core::demo::DEFAULT_MESSAGE;
use crate::core::OutputFormat;
use crate::utils::error::{DemoError, Result};
use crate::utils::validation::{validate_non_empty_string, validate_single_line, Validate};
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "coupling-demo")]
#[command(about = "Contrasts a tightly coupled consumer with injected notification services")]
pub struct CliConfig {
    #[arg(long, default_value = DEFAULT_MESSAGE, help = "Message sent through every channel")]
    pub message: String,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    #[arg(long, help = "Also invoke the tightly coupled consumer")]
    pub with_tight: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("message", &self.message)?;
        validate_single_line("message", &self.message)?;

        // The tight consumer prints text straight to stdout and cannot be redirected.
        if self.with_tight && self.format == OutputFormat::Json {
            return Err(DemoError::InvalidConfigValueError {
                field: "with_tight".to_string(),
                value: "true".to_string(),
                reason: "cannot be combined with --format json".to_string(),
            });
        }
        Ok(())
    }
}
