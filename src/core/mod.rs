pub mod catalog;
pub mod etl;
pub mod loader;

pub use crate::domain::model::{
    CatalogStats, Dataset, DatasetOrigin, Page, PincodeInfo, Product, TransformResult,
};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
pub use catalog::{Catalog, PageRequest, ProductFilter};
pub use etl::EtlEngine;
pub use loader::DatasetLoader;
