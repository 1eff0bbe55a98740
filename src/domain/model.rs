use crate::domain::lenient;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    #[serde(deserialize_with = "lenient::deserialize_int")]
    pub product_id: i64,
    pub product_name: String,
    #[serde(deserialize_with = "lenient::deserialize_float")]
    pub price: f64,
    #[serde(deserialize_with = "lenient::deserialize_bool")]
    pub in_stock: bool,
    #[serde(default)]
    pub product_image: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PincodeInfo {
    #[serde(deserialize_with = "lenient::deserialize_int")]
    pub pincode: i64,
    pub logistics_provider: String,
    #[serde(deserialize_with = "lenient::deserialize_int")]
    pub delivery_tat_days: i64,
}

/// The in-memory collections served by the catalog.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    pub products: Vec<Product>,
    pub pincodes: Vec<PincodeInfo>,
}

impl Dataset {
    pub fn new(products: Vec<Product>, pincodes: Vec<PincodeInfo>) -> Self {
        Self { products, pincodes }
    }

    /// Built-in records used when the data file cannot be loaded.
    pub fn sample() -> Self {
        Self {
            products: vec![Product {
                product_id: 1,
                product_name: "Product 1".to_string(),
                price: 63.54,
                in_stock: true,
                product_image: None,
            }],
            pincodes: vec![PincodeInfo {
                pincode: 117485,
                logistics_provider: "General Partners".to_string(),
                delivery_tat_days: 4,
            }],
        }
    }
}

/// Where a dataset came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DatasetOrigin {
    File(String),
    Sample,
}

impl DatasetOrigin {
    pub fn label(&self) -> &str {
        match self {
            DatasetOrigin::File(path) => path,
            DatasetOrigin::Sample => "sample",
        }
    }
}

/// One page of a filtered listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total: usize,
    pub page: usize,
    pub total_pages: usize,
    pub has_next: bool,
    pub has_prev: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct CatalogStats {
    pub products: usize,
    pub pincodes: usize,
    pub source: String,
    pub loaded_at: DateTime<Utc>,
}

/// Output of the transform step of an annotation run.
#[derive(Debug, Clone)]
pub struct TransformResult {
    pub document: serde_json::Value,
    pub annotated_products: usize,
}
