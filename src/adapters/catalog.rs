use crate::domain::model::StoreRecord;
use crate::domain::ports::StoreCatalog;
use crate::utils::error::Result;
use async_trait::async_trait;

/// Catalog backed by a JSON file containing an array of store records.
/// Read fresh on every call; the file is small and treating it as the
/// source of truth keeps queries consistent with edits.
#[derive(Debug, Clone)]
pub struct FileCatalog {
    stores_file: String,
}

impl FileCatalog {
    pub fn new(stores_file: impl Into<String>) -> Self {
        Self {
            stores_file: stores_file.into(),
        }
    }
}

#[async_trait]
impl StoreCatalog for FileCatalog {
    async fn list(&self) -> Result<Vec<StoreRecord>> {
        tracing::debug!("Reading store catalog from: {}", self.stores_file);
        let data = tokio::fs::read(&self.stores_file).await?;
        let records: Vec<StoreRecord> = serde_json::from_slice(&data)?;
        tracing::debug!("Catalog contains {} stores", records.len());
        Ok(records)
    }
}
