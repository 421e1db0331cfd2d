use crate::domain::model::{Delivery, OutputFormat};
use crate::domain::ports::DeliverySink;
use crate::utils::error::Result;
use std::io::{self, Stdout, Write};
use std::sync::{Mutex, MutexGuard};

/// Renders a delivery as a single output line, without the trailing newline.
pub fn render(delivery: &Delivery, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(format!("[{}] {}", delivery.channel, delivery.summary)),
        OutputFormat::Json => Ok(serde_json::to_string(delivery)?),
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Writes one line per delivery to a writer, stdout by default.
pub struct ConsoleSink<W: Write + Send = Stdout> {
    writer: Mutex<W>,
    format: OutputFormat,
}

impl ConsoleSink<Stdout> {
    pub fn stdout(format: OutputFormat) -> Self {
        Self::new(io::stdout(), format)
    }
}

impl<W: Write + Send> ConsoleSink<W> {
    pub fn new(writer: W, format: OutputFormat) -> Self {
        Self {
            writer: Mutex::new(writer),
            format,
        }
    }

    pub fn into_inner(self) -> W {
        self.writer
            .into_inner()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl<W: Write + Send> DeliverySink for ConsoleSink<W> {
    fn record(&self, delivery: Delivery) -> Result<()> {
        let line = render(&delivery, self.format)?;
        let mut writer = lock(&self.writer);
        writeln!(writer, "{}", line)?;
        writer.flush()?;
        Ok(())
    }
}

/// Keeps every delivery in memory, in arrival order.
#[derive(Debug, Default)]
pub struct MemorySink {
    deliveries: Mutex<Vec<Delivery>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn deliveries(&self) -> Vec<Delivery> {
        lock(&self.deliveries).clone()
    }

    pub fn len(&self) -> usize {
        lock(&self.deliveries).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&self) {
        lock(&self.deliveries).clear();
    }
}

impl DeliverySink for MemorySink {
    fn record(&self, delivery: Delivery) -> Result<()> {
        lock(&self.deliveries).push(delivery);
        Ok(())
    }
}
