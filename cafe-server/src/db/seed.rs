//! Sample catalog for a fresh store

use shared::models::{Category, ProductCreate};
use sqlx::SqlitePool;

use super::repository::{RepoResult, product};

/// Default coffee menu (name, price)
const DEFAULT_COFFEES: [(&str, f64); 6] = [
    ("Espresso", 60.0),
    ("Latte", 70.0),
    ("Cappuccino", 75.0),
    ("Americano", 65.0),
    ("Mocha", 80.0),
    ("Türk Kahvesi", 55.0),
];

/// Insert the default menu when the catalog is empty
///
/// Returns the number of products inserted (0 when the catalog already has
/// entries).
pub async fn seed_catalog_if_empty(pool: &SqlitePool) -> RepoResult<usize> {
    if product::count(pool).await? > 0 {
        return Ok(0);
    }

    let mut tx = pool.begin().await?;
    for (name, price) in DEFAULT_COFFEES {
        let data = ProductCreate {
            name: name.to_string(),
            price,
            category: Category::Coffee,
        };
        product::create(&mut *tx, &data).await?;
    }
    tx.commit().await?;

    tracing::info!(count = DEFAULT_COFFEES.len(), "Seeded default catalog");
    Ok(DEFAULT_COFFEES.len())
}
