//! Order Line Repository
//!
//! Raw row access only. Quantity rules (merge on add, delete at zero,
//! partial payment) live in the ledger.

use super::RepoResult;
use shared::models::{OrderLine, OrderLineView};
use sqlx::SqliteExecutor;

const LINE_SELECT: &str = "SELECT id, table_no, product_id, quantity, note FROM order_line";

const VIEW_SELECT: &str = "SELECT ol.id, ol.table_no, ol.product_id, \
    p.name AS product_name, p.price AS unit_price, ol.quantity, ol.note \
    FROM order_line ol JOIN product p ON p.id = ol.product_id";

pub async fn find_by_id<'e>(
    executor: impl SqliteExecutor<'e>,
    id: i64,
) -> RepoResult<Option<OrderLine>> {
    let sql = format!("{LINE_SELECT} WHERE id = ?");
    let line = sqlx::query_as::<_, OrderLine>(&sql)
        .bind(id)
        .fetch_optional(executor)
        .await?;
    Ok(line)
}

/// Oldest line for (table, product)
///
/// After a table move there can be more than one; the oldest one absorbs
/// further additions.
pub async fn find_by_table_and_product<'e>(
    executor: impl SqliteExecutor<'e>,
    table_no: i32,
    product_id: i64,
) -> RepoResult<Option<OrderLine>> {
    let sql = format!("{LINE_SELECT} WHERE table_no = ? AND product_id = ? ORDER BY id LIMIT 1");
    let line = sqlx::query_as::<_, OrderLine>(&sql)
        .bind(table_no)
        .bind(product_id)
        .fetch_optional(executor)
        .await?;
    Ok(line)
}

pub async fn find_view_by_id<'e>(
    executor: impl SqliteExecutor<'e>,
    id: i64,
) -> RepoResult<Option<OrderLineView>> {
    let sql = format!("{VIEW_SELECT} WHERE ol.id = ?");
    let line = sqlx::query_as::<_, OrderLineView>(&sql)
        .bind(id)
        .fetch_optional(executor)
        .await?;
    Ok(line)
}

/// Lines of one table in insertion order
pub async fn find_views_by_table<'e>(
    executor: impl SqliteExecutor<'e>,
    table_no: i32,
) -> RepoResult<Vec<OrderLineView>> {
    let sql = format!("{VIEW_SELECT} WHERE ol.table_no = ? ORDER BY ol.id");
    let lines = sqlx::query_as::<_, OrderLineView>(&sql)
        .bind(table_no)
        .fetch_all(executor)
        .await?;
    Ok(lines)
}

/// Every open line, grouped by table
pub async fn find_all_views<'e>(
    executor: impl SqliteExecutor<'e>,
) -> RepoResult<Vec<OrderLineView>> {
    let sql = format!("{VIEW_SELECT} ORDER BY ol.table_no, ol.id");
    let lines = sqlx::query_as::<_, OrderLineView>(&sql)
        .fetch_all(executor)
        .await?;
    Ok(lines)
}

pub async fn occupied_tables<'e>(executor: impl SqliteExecutor<'e>) -> RepoResult<Vec<i32>> {
    let tables = sqlx::query_scalar::<_, i32>(
        "SELECT DISTINCT table_no FROM order_line ORDER BY table_no",
    )
    .fetch_all(executor)
    .await?;
    Ok(tables)
}

pub async fn table_has_lines<'e>(
    executor: impl SqliteExecutor<'e>,
    table_no: i32,
) -> RepoResult<bool> {
    let exists = sqlx::query_scalar::<_, bool>(
        "SELECT EXISTS (SELECT 1 FROM order_line WHERE table_no = ?)",
    )
    .bind(table_no)
    .fetch_one(executor)
    .await?;
    Ok(exists)
}

pub async fn insert<'e>(
    executor: impl SqliteExecutor<'e>,
    table_no: i32,
    product_id: i64,
    quantity: i32,
    note: &str,
) -> RepoResult<i64> {
    let id = sqlx::query_scalar::<_, i64>(
        "INSERT INTO order_line (table_no, product_id, quantity, note) VALUES (?, ?, ?, ?) RETURNING id",
    )
    .bind(table_no)
    .bind(product_id)
    .bind(quantity)
    .bind(note)
    .fetch_one(executor)
    .await?;
    Ok(id)
}

/// Add `delta` to a line's quantity; returns affected rows
pub async fn add_quantity<'e>(
    executor: impl SqliteExecutor<'e>,
    id: i64,
    delta: i32,
) -> RepoResult<u64> {
    let rows = sqlx::query("UPDATE order_line SET quantity = quantity + ? WHERE id = ?")
        .bind(delta)
        .bind(id)
        .execute(executor)
        .await?;
    Ok(rows.rows_affected())
}

pub async fn set_quantity<'e>(
    executor: impl SqliteExecutor<'e>,
    id: i64,
    quantity: i32,
) -> RepoResult<u64> {
    let rows = sqlx::query("UPDATE order_line SET quantity = ? WHERE id = ?")
        .bind(quantity)
        .bind(id)
        .execute(executor)
        .await?;
    Ok(rows.rows_affected())
}

pub async fn set_note<'e>(executor: impl SqliteExecutor<'e>, id: i64, note: &str) -> RepoResult<u64> {
    let rows = sqlx::query("UPDATE order_line SET note = ? WHERE id = ?")
        .bind(note)
        .bind(id)
        .execute(executor)
        .await?;
    Ok(rows.rows_affected())
}

pub async fn delete<'e>(executor: impl SqliteExecutor<'e>, id: i64) -> RepoResult<u64> {
    let rows = sqlx::query("DELETE FROM order_line WHERE id = ?")
        .bind(id)
        .execute(executor)
        .await?;
    Ok(rows.rows_affected())
}

pub async fn delete_by_table<'e>(executor: impl SqliteExecutor<'e>, table_no: i32) -> RepoResult<u64> {
    let rows = sqlx::query("DELETE FROM order_line WHERE table_no = ?")
        .bind(table_no)
        .execute(executor)
        .await?;
    Ok(rows.rows_affected())
}

/// Reassign every line of `from` to `to` without merging
pub async fn reassign_table<'e>(
    executor: impl SqliteExecutor<'e>,
    from: i32,
    to: i32,
) -> RepoResult<u64> {
    let rows = sqlx::query("UPDATE order_line SET table_no = ? WHERE table_no = ?")
        .bind(to)
        .bind(from)
        .execute(executor)
        .await?;
    Ok(rows.rows_affected())
}
