//! Product API Handlers

use axum::{
    Json,
    extract::{Query, State},
};
use shared::models::{Category, CategoryInfo, Product, ProductCreate, ProductQuery};

use crate::core::ServerState;
use crate::utils::{ApiResponse, AppResult, ok, ok_with_message};

/// GET /api/products - 获取菜单
pub async fn list(
    State(state): State<ServerState>,
    Query(query): Query<ProductQuery>,
) -> AppResult<Json<ApiResponse<Vec<Product>>>> {
    let products = state.catalog.list_products(query.category).await?;
    Ok(ok(products))
}

/// POST /api/products - 新增菜品
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<ProductCreate>,
) -> AppResult<Json<ApiResponse<Product>>> {
    let product = state.catalog.add_product(payload).await?;
    Ok(ok_with_message(product, "Product created"))
}

/// GET /api/categories - 分类列表
pub async fn categories() -> Json<ApiResponse<Vec<CategoryInfo>>> {
    ok(Category::ALL.into_iter().map(CategoryInfo::from).collect())
}
