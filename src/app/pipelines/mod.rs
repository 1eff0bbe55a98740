pub mod image_pipeline;
