pub mod api;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;
pub use crate::config::{cli::LocalStorage, toml_config::TomlConfig};

pub use crate::app::pipelines::image_pipeline::ImageAnnotationPipeline;
pub use crate::core::{catalog::Catalog, etl::EtlEngine, loader::DatasetLoader};
pub use crate::utils::error::{CatalogError, Result};
