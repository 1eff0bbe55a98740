use crate::api::AppState;
use crate::core::{Page, PageRequest, PincodeInfo, Product, ProductFilter};
use crate::domain::lenient;
use crate::utils::error::CatalogError;
use axum::{
    extract::{
        rejection::{PathRejection, QueryRejection},
        Path, Query, State,
    },
    response::Html,
    Json,
};
use serde::Deserialize;
use serde_json::json;

#[derive(Debug, Deserialize)]
pub struct ProductListParams {
    pub page: Option<i64>,
    pub limit: Option<i64>,
    #[serde(default, deserialize_with = "lenient::deserialize_opt_bool")]
    pub in_stock: Option<bool>,
}

const DEFAULT_INDEX_HTML: &str = r#"<html>
    <head>
        <title>Pincode Catalog</title>
    </head>
    <body>
        <h1>Welcome to Pincode Catalog</h1>
        <p>Place an index.html in the templates directory to serve it here.</p>
    </body>
</html>
"#;

fn positive(parameter: &str, value: i64) -> Result<usize, CatalogError> {
    if value <= 0 {
        return Err(CatalogError::InvalidQuery {
            parameter: parameter.to_string(),
            reason: "must be greater than 0".to_string(),
        });
    }
    usize::try_from(value).map_err(|_| CatalogError::InvalidQuery {
        parameter: parameter.to_string(),
        reason: "value is too large".to_string(),
    })
}

/// GET /api/products
pub async fn list_products(
    State(state): State<AppState>,
    params: Result<Query<ProductListParams>, QueryRejection>,
) -> Result<Json<Page<Product>>, CatalogError> {
    let Query(params) = params?;

    let page = positive("page", params.page.unwrap_or(1))?;
    let limit = match params.limit {
        Some(limit) => positive("limit", limit)?,
        None => state.default_limit,
    };
    let request = PageRequest::new(page, limit)?;
    let filter = ProductFilter {
        in_stock: params.in_stock,
    };

    let result = state.catalog.list_products(request, filter);
    tracing::debug!(
        "Listed page {}/{} ({} of {} products)",
        result.page,
        result.total_pages,
        result.items.len(),
        result.total
    );
    Ok(Json(result))
}

/// GET /api/products/:product_id
pub async fn get_product(
    State(state): State<AppState>,
    product_id: Result<Path<i64>, PathRejection>,
) -> Result<Json<Product>, CatalogError> {
    let Path(product_id) = product_id?;
    let product = state.catalog.get_product(product_id)?;
    Ok(Json(product.clone()))
}

/// GET /api/pincode/:pincode
pub async fn get_pincode(
    State(state): State<AppState>,
    pincode: Result<Path<i64>, PathRejection>,
) -> Result<Json<PincodeInfo>, CatalogError> {
    let Path(pincode) = pincode?;
    let info = state.catalog.get_pincode(pincode)?;
    Ok(Json(info.clone()))
}

pub async fn health(State(state): State<AppState>) -> Json<serde_json::Value> {
    let stats = state.catalog.stats();
    Json(json!({
        "status": "healthy",
        "products": stats.products,
        "pincodes": stats.pincodes,
        "source": stats.source,
        "loaded_at": stats.loaded_at,
    }))
}

/// Serves `index.html` from the templates directory, or a placeholder page.
pub async fn index(State(state): State<AppState>) -> Html<String> {
    let path = state.templates_dir.join("index.html");
    match tokio::fs::read_to_string(&path).await {
        Ok(content) => Html(content),
        Err(e) => {
            tracing::debug!("No index page at {}: {}", path.display(), e);
            Html(DEFAULT_INDEX_HTML.to_string())
        }
    }
}
