use crate::core::{Operation, Output};
use crate::utils::error::Result;
use std::time::Instant;

pub struct Engine<O: Operation> {
    operation: O,
}

impl<O: Operation> Engine<O> {
    pub fn new(operation: O) -> Self {
        Self { operation }
    }

    pub async fn run(&self) -> Result<Output> {
        let name = self.operation.name();
        let start = Instant::now();
        tracing::info!("Running {}", name);

        match self.operation.run().await {
            Ok(output) => {
                tracing::info!(elapsed_ms = start.elapsed().as_millis() as u64, "{} finished", name);
                tracing::debug!("{} output: {:?}", name, output);
                Ok(output)
            }
            Err(e) => {
                tracing::error!(
                    "{} failed: {} (Severity: {:?})",
                    name,
                    e,
                    e.severity()
                );
                Err(e)
            }
        }
    }
}
