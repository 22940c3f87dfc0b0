//! Product Repository

use super::{RepoError, RepoResult};
use shared::models::{Category, Product, ProductCreate};
use sqlx::SqliteExecutor;

const PRODUCT_SELECT: &str = "SELECT id, name, price, category FROM product";

pub async fn find_all<'e>(executor: impl SqliteExecutor<'e>) -> RepoResult<Vec<Product>> {
    let sql = format!("{PRODUCT_SELECT} ORDER BY id");
    let products = sqlx::query_as::<_, Product>(&sql)
        .fetch_all(executor)
        .await?;
    Ok(products)
}

pub async fn find_by_category<'e>(
    executor: impl SqliteExecutor<'e>,
    category: Category,
) -> RepoResult<Vec<Product>> {
    let sql = format!("{PRODUCT_SELECT} WHERE category = ? ORDER BY id");
    let products = sqlx::query_as::<_, Product>(&sql)
        .bind(category)
        .fetch_all(executor)
        .await?;
    Ok(products)
}

pub async fn find_by_id<'e>(
    executor: impl SqliteExecutor<'e>,
    id: i64,
) -> RepoResult<Option<Product>> {
    let sql = format!("{PRODUCT_SELECT} WHERE id = ?");
    let product = sqlx::query_as::<_, Product>(&sql)
        .bind(id)
        .fetch_optional(executor)
        .await?;
    Ok(product)
}

/// Insert a product and return it with its new id
///
/// Callers validate the payload; the store only enforces NOT NULL.
pub async fn create<'e>(
    executor: impl SqliteExecutor<'e>,
    data: &ProductCreate,
) -> RepoResult<Product> {
    let sql = "INSERT INTO product (name, price, category) VALUES (?, ?, ?) \
               RETURNING id, name, price, category";
    let product = sqlx::query_as::<_, Product>(sql)
        .bind(&data.name)
        .bind(data.price)
        .bind(data.category)
        .fetch_optional(executor)
        .await?;
    product.ok_or_else(|| RepoError::Database("Failed to create product".into()))
}

pub async fn count<'e>(executor: impl SqliteExecutor<'e>) -> RepoResult<i64> {
    let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM product")
        .fetch_one(executor)
        .await?;
    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::DbService;

    fn payload(name: &str, price: f64, category: Category) -> ProductCreate {
        ProductCreate {
            name: name.to_string(),
            price,
            category,
        }
    }

    #[tokio::test]
    async fn test_create_and_find() {
        let db = DbService::open_in_memory().await.unwrap();
        let latte = create(&db.pool, &payload("Latte", 70.0, Category::Coffee))
            .await
            .unwrap();
        assert!(latte.id > 0);
        assert_eq!(latte.category, Category::Coffee);

        let found = find_by_id(&db.pool, latte.id).await.unwrap();
        assert_eq!(found, Some(latte));
        assert_eq!(find_by_id(&db.pool, 999).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_find_by_category_in_id_order() {
        let db = DbService::open_in_memory().await.unwrap();
        create(&db.pool, &payload("Limonata", 45.0, Category::ColdDrink))
            .await
            .unwrap();
        create(&db.pool, &payload("Espresso", 60.0, Category::Coffee))
            .await
            .unwrap();
        create(&db.pool, &payload("Ice Tea", 40.0, Category::ColdDrink))
            .await
            .unwrap();

        let cold = find_by_category(&db.pool, Category::ColdDrink).await.unwrap();
        let names: Vec<_> = cold.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Limonata", "Ice Tea"]);

        assert!(find_by_category(&db.pool, Category::Dessert).await.unwrap().is_empty());
        assert_eq!(find_all(&db.pool).await.unwrap().len(), 3);
        assert_eq!(count(&db.pool).await.unwrap(), 3);
    }
}
