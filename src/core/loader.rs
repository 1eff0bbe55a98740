use crate::core::{Dataset, DatasetOrigin, PincodeInfo, Product, Storage};
use crate::utils::error::Result;
use serde::Deserialize;

/// On-disk layout of the data file. Unknown keys are ignored.
#[derive(Debug, Deserialize)]
struct DataFile {
    products: Vec<Product>,
    delivery_info: DeliveryInfo,
}

#[derive(Debug, Deserialize)]
struct DeliveryInfo {
    pincode_data: Vec<PincodeInfo>,
}

pub fn parse_dataset(bytes: &[u8]) -> Result<Dataset> {
    let file: DataFile = serde_json::from_slice(bytes)?;
    Ok(Dataset::new(file.products, file.delivery_info.pincode_data))
}

pub struct DatasetLoader<S: Storage> {
    storage: S,
}

impl<S: Storage> DatasetLoader<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    /// Reads and parses the whole file. Either everything parses or an
    /// error comes back; the caller decides what to fall back to.
    pub async fn load(&self, path: &str) -> Result<Dataset> {
        tracing::debug!("Reading dataset from {}", path);
        let bytes = self.storage.read_file(path).await?;
        let dataset = parse_dataset(&bytes)?;
        tracing::info!(
            "Loaded {} products and {} pincodes from {}",
            dataset.products.len(),
            dataset.pincodes.len(),
            path
        );
        Ok(dataset)
    }

    /// Like [`load`](Self::load), but any failure swaps in
    /// [`Dataset::sample`] wholesale.
    pub async fn load_or_sample(&self, path: &str) -> (Dataset, DatasetOrigin) {
        match self.load(path).await {
            Ok(dataset) => (dataset, DatasetOrigin::File(path.to_string())),
            Err(e) => {
                tracing::warn!("Could not load {} ({:?}): {}", path, e.category(), e);
                tracing::warn!("Serving the built-in sample dataset instead");
                (Dataset::sample(), DatasetOrigin::Sample)
            }
        }
    }
}
