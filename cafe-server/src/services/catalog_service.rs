//! Catalog Service - product definitions
//!
//! Products are immutable once created; the catalog only grows.

use shared::models::{Category, Product, ProductCreate};
use sqlx::SqlitePool;

use crate::db::repository::{RepoResult, product};
use crate::utils::validation::{MAX_NAME_LEN, validate_price, validate_required_text};

/// Catalog store over the `product` table
#[derive(Clone)]
pub struct CatalogService {
    pool: SqlitePool,
}

impl std::fmt::Debug for CatalogService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CatalogService").finish_non_exhaustive()
    }
}

impl CatalogService {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Add a product to the menu
    ///
    /// The name is trimmed and must be non-empty; the price must be a
    /// positive finite amount.
    pub async fn add_product(&self, data: ProductCreate) -> RepoResult<Product> {
        validate_required_text(&data.name, "name", MAX_NAME_LEN)?;
        validate_price(data.price)?;

        let data = ProductCreate {
            name: data.name.trim().to_string(),
            ..data
        };
        let product = product::create(&self.pool, &data).await?;
        tracing::info!(
            product_id = product.id,
            name = %product.name,
            price = product.price,
            category = %product.category,
            "Product added"
        );
        Ok(product)
    }

    /// All products, or those of one category, in id order
    pub async fn list_products(&self, category: Option<Category>) -> RepoResult<Vec<Product>> {
        match category {
            Some(category) => product::find_by_category(&self.pool, category).await,
            None => product::find_all(&self.pool).await,
        }
    }

    pub async fn get_product(&self, id: i64) -> RepoResult<Option<Product>> {
        product::find_by_id(&self.pool, id).await
    }
}
