use crate::core::Pipeline;
use crate::utils::error::Result;
use crate::utils::monitor::RunMonitor;

pub struct EtlEngine<P: Pipeline> {
    pipeline: P,
    monitoring: bool,
}

impl<P: Pipeline> EtlEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self::new_with_monitoring(pipeline, false)
    }

    pub fn new_with_monitoring(pipeline: P, monitoring: bool) -> Self {
        Self {
            pipeline,
            monitoring,
        }
    }

    /// Extract, transform and load in order. Nothing is written unless the
    /// first two phases succeed.
    pub async fn run(&self) -> Result<String> {
        let mut monitor = RunMonitor::new(self.monitoring);
        tracing::info!("Starting projection...");

        let raw_data = self.pipeline.extract().await?;
        tracing::info!("Extracted {} records", raw_data.len());
        monitor.log_phase("Extract");

        let result = self.pipeline.transform(raw_data).await?;
        tracing::info!(
            "Projected {} of {} records",
            result.records.len(),
            result.source_count
        );
        monitor.log_phase("Transform");

        let output_path = self.pipeline.load(result).await?;
        tracing::info!("Output saved to: {}", output_path);
        monitor.log_phase("Load");

        monitor.log_final_stats();
        Ok(output_path)
    }
}
