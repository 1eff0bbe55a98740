use crate::core::{Pipeline, Storage, TransformResult};
use crate::utils::error::{CatalogError, Result};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use serde_json::Value;

pub const DEFAULT_IMAGE_URLS: [&str; 7] = [
    "https://s.cdnsbn.com/images/products/l/21233566801.jpg",
    "https://s.cdnsbn.com/images/products/l/21235166801.jpg",
    "https://s.cdnsbn.com/images/products/l/13989180431-1.jpg",
    "https://s.cdnsbn.com/images/products/l/33146881101.jpg",
    "https://s.cdnsbn.com/images/products/l/24146821601.jpg",
    "https://s.cdnsbn.com/images/products/l/33535402744.jpg",
    "https://s.cdnsbn.com/images/products/l/18489000444.jpg",
];

pub fn default_image_urls() -> Vec<String> {
    DEFAULT_IMAGE_URLS.iter().map(|s| s.to_string()).collect()
}

/// Reads a products document, sets `product_image` on every product to a
/// randomly picked URL and writes the document back out. Everything else in
/// the document is passed through untouched.
pub struct ImageAnnotationPipeline<S: Storage> {
    storage: S,
    input: String,
    output: String,
    image_urls: Vec<String>,
    seed: Option<u64>,
}

impl<S: Storage> ImageAnnotationPipeline<S> {
    pub fn new(storage: S, input: String, output: String, image_urls: Vec<String>) -> Result<Self> {
        if image_urls.is_empty() {
            return Err(CatalogError::ConfigError {
                message: "at least one image URL is required".to_string(),
            });
        }
        Ok(Self {
            storage,
            input,
            output,
            image_urls,
            seed: None,
        })
    }

    /// Fixes the RNG seed so runs are reproducible.
    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}

#[async_trait::async_trait]
impl<S: Storage> Pipeline for ImageAnnotationPipeline<S> {
    async fn extract(&self) -> Result<Value> {
        tracing::debug!("Reading products from {}", self.input);
        let bytes = self.storage.read_file(&self.input).await?;
        let document: Value = serde_json::from_slice(&bytes)?;
        Ok(document)
    }

    async fn transform(&self, mut document: Value) -> Result<TransformResult> {
        let products = document
            .get_mut("products")
            .and_then(Value::as_array_mut)
            .ok_or_else(|| CatalogError::ProcessingError {
                message: format!("{} has no \"products\" array", self.input),
            })?;

        let mut rng = self.rng();
        let mut annotated_products = 0;

        for (index, product) in products.iter_mut().enumerate() {
            let fields = product
                .as_object_mut()
                .ok_or_else(|| CatalogError::ProcessingError {
                    message: format!("products[{}] is not an object", index),
                })?;
            let url = self
                .image_urls
                .choose(&mut rng)
                .ok_or_else(|| CatalogError::ConfigError {
                    message: "no image URLs to choose from".to_string(),
                })?;
            fields.insert("product_image".to_string(), Value::String(url.clone()));
            annotated_products += 1;
        }

        Ok(TransformResult {
            document,
            annotated_products,
        })
    }

    async fn load(&self, result: TransformResult) -> Result<String> {
        let data = serde_json::to_vec_pretty(&result.document)?;
        self.storage.write_file(&self.output, &data).await?;
        tracing::debug!("Wrote {} bytes to {}", data.len(), self.output);
        Ok(self.output.clone())
    }
}
