use crate::core::projection::{project_records, records_from_document};
use crate::core::{ConfigProvider, Pipeline, ProjectionResult, Record, Storage};
use crate::utils::error::{ProjectorError, Result};

pub struct ProjectionPipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
}

impl<S: Storage, C: ConfigProvider> ProjectionPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self { storage, config }
    }
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider> Pipeline for ProjectionPipeline<S, C> {
    async fn extract(&self) -> Result<Vec<Record>> {
        let input_path = self.config.input_path();
        tracing::debug!("Reading input from: {}", input_path);

        let bytes = self.storage.read_file(input_path).await?;
        tracing::debug!("Read {} bytes", bytes.len());

        let document: serde_json::Value = serde_json::from_slice(&bytes)
            .map_err(|e| ProjectorError::parse(input_path, e))?;

        records_from_document(document)
    }

    async fn transform(&self, data: Vec<Record>) -> Result<ProjectionResult> {
        let fields = self.config.fields();
        tracing::debug!("Projecting {} records onto {:?}", data.len(), fields);

        let records = project_records(&data, fields)?;

        Ok(ProjectionResult {
            source_count: data.len(),
            records,
        })
    }

    async fn load(&self, result: ProjectionResult) -> Result<String> {
        let output_path = self.config.output_path();

        // 兩格縮排，非 ASCII 字元原樣輸出
        let json_data = serde_json::to_vec_pretty(&result.records)?;

        tracing::debug!("Writing {} bytes to {}", json_data.len(), output_path);
        self.storage.write_file(output_path, &json_data).await?;

        Ok(output_path.to_string())
    }
}
