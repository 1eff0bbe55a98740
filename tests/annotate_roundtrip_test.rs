use anyhow::Result;
use pincode_catalog::app::pipelines::image_pipeline::DEFAULT_IMAGE_URLS;
use pincode_catalog::core::{DatasetOrigin, PageRequest, ProductFilter};
use pincode_catalog::{Catalog, DatasetLoader, EtlEngine, ImageAnnotationPipeline, LocalStorage};
use tempfile::TempDir;

fn raw_products(n: usize) -> Vec<serde_json::Value> {
    (1..=n)
        .map(|i| {
            serde_json::json!({
                "product_id": i,
                "product_name": format!("Product {}", i),
                "price": 5.25 * i as f64,
                "in_stock": i % 4 != 0
            })
        })
        .collect()
}

fn input_document(n: usize) -> serde_json::Value {
    serde_json::json!({
        "products": raw_products(n),
        "delivery_info": {
            "pincode_data": [
                {"pincode": 117485, "logistics_provider": "General Partners", "delivery_tat_days": 4},
                {"pincode": 400001, "logistics_provider": "Ecom Express", "delivery_tat_days": 3}
            ]
        }
    })
}

/// Annotated output must load into the same products, each with an image.
#[tokio::test]
async fn test_annotated_file_loads_with_images() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let base = temp_dir.path().to_str().unwrap().to_string();
    tokio::fs::write(
        temp_dir.path().join("data.json"),
        serde_json::to_vec(&input_document(25))?,
    )
    .await?;

    let pipeline = ImageAnnotationPipeline::new(
        LocalStorage::new(base.clone()),
        "data.json".to_string(),
        "out/data_with_images.json".to_string(),
        DEFAULT_IMAGE_URLS.iter().map(|s| s.to_string()).collect(),
    )?;
    let output = EtlEngine::new(pipeline).run().await?;
    assert_eq!(output, "out/data_with_images.json");

    let loader = DatasetLoader::new(LocalStorage::new(base));
    let dataset = loader.load(&output).await?;

    assert_eq!(dataset.products.len(), 25);
    assert_eq!(dataset.pincodes.len(), 2);
    for (i, product) in dataset.products.iter().enumerate() {
        assert_eq!(product.product_id, i as i64 + 1);
        let image = product.product_image.as_deref().unwrap_or_default();
        assert!(!image.is_empty());
        assert!(DEFAULT_IMAGE_URLS.contains(&image));
    }

    let catalog = Catalog::new(dataset, DatasetOrigin::File(output));
    let page = catalog.list_products(PageRequest::new(3, 10)?, ProductFilter::default());
    assert_eq!(page.items.len(), 5);
    assert_eq!(page.total_pages, 3);

    Ok(())
}

#[tokio::test]
async fn test_output_is_pretty_printed_and_keeps_key_order() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let base = temp_dir.path().to_str().unwrap().to_string();
    tokio::fs::write(
        temp_dir.path().join("data.json"),
        serde_json::to_vec(&input_document(1))?,
    )
    .await?;

    let pipeline = ImageAnnotationPipeline::new(
        LocalStorage::new(base),
        "data.json".to_string(),
        "annotated.json".to_string(),
        vec!["https://img.example.com/only.jpg".to_string()],
    )?
    .with_seed(Some(1));
    EtlEngine::new(pipeline).run().await?;

    let text = tokio::fs::read_to_string(temp_dir.path().join("annotated.json")).await?;
    assert!(text.starts_with("{\n  \"products\": [\n"));
    assert!(text.contains("\"product_image\": \"https://img.example.com/only.jpg\""));

    let products_at = text.find("\"products\"").unwrap();
    let delivery_at = text.find("\"delivery_info\"").unwrap();
    assert!(products_at < delivery_at);

    Ok(())
}

#[tokio::test]
async fn test_missing_input_leaves_no_output() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let base = temp_dir.path().to_str().unwrap().to_string();

    let pipeline = ImageAnnotationPipeline::new(
        LocalStorage::new(base),
        "missing.json".to_string(),
        "data_with_images.json".to_string(),
        DEFAULT_IMAGE_URLS.iter().map(|s| s.to_string()).collect(),
    )?;
    assert!(EtlEngine::new(pipeline).run().await.is_err());
    assert!(!temp_dir.path().join("data_with_images.json").exists());

    Ok(())
}
