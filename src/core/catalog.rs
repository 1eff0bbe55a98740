//! Read-only queries over the loaded product and pincode collections.

use crate::core::{CatalogStats, Dataset, DatasetOrigin, Page, PincodeInfo, Product};
use crate::utils::error::{CatalogError, Result};
use chrono::{DateTime, Utc};

/// A validated page/limit pair. Both are 1-based and never zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: usize,
    limit: usize,
}

impl PageRequest {
    pub fn new(page: usize, limit: usize) -> Result<Self> {
        if page == 0 {
            return Err(CatalogError::ValidationError {
                message: "page must be greater than 0".to_string(),
            });
        }
        if limit == 0 {
            return Err(CatalogError::ValidationError {
                message: "limit must be greater than 0".to_string(),
            });
        }
        Ok(Self { page, limit })
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    fn offset(&self) -> usize {
        (self.page - 1).saturating_mul(self.limit)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProductFilter {
    pub in_stock: Option<bool>,
}

impl ProductFilter {
    fn matches(&self, product: &Product) -> bool {
        self.in_stock.map_or(true, |flag| product.in_stock == flag)
    }
}

pub struct Catalog {
    dataset: Dataset,
    origin: DatasetOrigin,
    loaded_at: DateTime<Utc>,
}

impl Catalog {
    pub fn new(dataset: Dataset, origin: DatasetOrigin) -> Self {
        Self {
            dataset,
            origin,
            loaded_at: Utc::now(),
        }
    }

    /// Filter, then slice. Pages past the end come back empty with
    /// `has_next == false`.
    pub fn list_products(&self, request: PageRequest, filter: ProductFilter) -> Page<Product> {
        let filtered: Vec<&Product> = self
            .dataset
            .products
            .iter()
            .filter(|p| filter.matches(p))
            .collect();

        let total = filtered.len();
        let total_pages = total.div_ceil(request.limit());

        let items = filtered
            .into_iter()
            .skip(request.offset())
            .take(request.limit())
            .cloned()
            .collect();

        Page {
            items,
            total,
            page: request.page(),
            total_pages,
            has_next: request.page() < total_pages,
            has_prev: request.page() > 1,
        }
    }

    pub fn get_product(&self, product_id: i64) -> Result<&Product> {
        self.dataset
            .products
            .iter()
            .find(|p| p.product_id == product_id)
            .ok_or(CatalogError::ProductNotFound { product_id })
    }

    pub fn get_pincode(&self, pincode: i64) -> Result<&PincodeInfo> {
        self.dataset
            .pincodes
            .iter()
            .find(|p| p.pincode == pincode)
            .ok_or(CatalogError::PincodeNotFound { pincode })
    }

    pub fn stats(&self) -> CatalogStats {
        CatalogStats {
            products: self.dataset.products.len(),
            pincodes: self.dataset.pincodes.len(),
            source: self.origin.label().to_string(),
            loaded_at: self.loaded_at,
        }
    }
}
