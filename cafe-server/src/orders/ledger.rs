//! OrderLedger - the order line state machine

use std::collections::{BTreeMap, BTreeSet};
use std::sync::Arc;

use shared::models::{LineMutation, OrderLineView, TableClose, TableLines, TableMove, TableStatus};
use sqlx::{Sqlite, SqliteExecutor, SqlitePool, Transaction};
use tokio::sync::Mutex;

use super::{LedgerError, LedgerResult};
use crate::db::repository::{order_line, product};
use crate::order_money::{self, PaymentOutcome};
use crate::utils::validation::{MAX_NOTE_LEN, validate_text_len};

/// Order ledger over the SQLite store
///
/// Cheap to clone; clones share the pool and the write gate.
#[derive(Clone)]
pub struct OrderLedger {
    pool: SqlitePool,
    table_count: i32,
    write_gate: Arc<Mutex<()>>,
}

impl std::fmt::Debug for OrderLedger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OrderLedger")
            .field("table_count", &self.table_count)
            .finish()
    }
}

impl OrderLedger {
    /// Create a ledger for tables `1..=table_count`
    pub fn new(pool: SqlitePool, table_count: i32) -> Self {
        Self {
            pool,
            table_count,
            write_gate: Arc::new(Mutex::new(())),
        }
    }

    pub fn table_count(&self) -> i32 {
        self.table_count
    }

    fn check_table(&self, table_no: i32) -> LedgerResult<()> {
        if !(1..=self.table_count).contains(&table_no) {
            return Err(LedgerError::TableOutOfRange {
                table_no,
                max: self.table_count,
            });
        }
        Ok(())
    }

    /// Like [`check_table`](Self::check_table), but a table outside the range
    /// that still holds lines (left over from a larger `table_count`) passes.
    async fn check_existing_table<'e>(
        &self,
        executor: impl SqliteExecutor<'e>,
        table_no: i32,
    ) -> LedgerResult<()> {
        if self.check_table(table_no).is_ok() {
            return Ok(());
        }
        if order_line::table_has_lines(executor, table_no).await? {
            return Ok(());
        }
        self.check_table(table_no)
    }

    // ========== Commands ==========

    /// Add one unit of a product to a table
    ///
    /// An existing line for the same product is incremented (its note is
    /// kept) and its id returned; otherwise a new line with quantity 1 and
    /// the given note is created.
    pub async fn add_item(&self, table_no: i32, product_id: i64, note: &str) -> LedgerResult<i64> {
        self.check_table(table_no)?;
        validate_text_len(note, "note", MAX_NOTE_LEN)?;

        let _gate = self.write_gate.lock().await;
        let mut tx = self.pool.begin().await?;

        if product::find_by_id(&mut *tx, product_id).await?.is_none() {
            return Err(LedgerError::ProductNotFound(product_id));
        }

        let existing = order_line::find_by_table_and_product(&mut *tx, table_no, product_id).await?;
        let line_id = match existing {
            Some(line) => {
                order_line::add_quantity(&mut *tx, line.id, 1).await?;
                tracing::debug!(table_no, line_id = line.id, quantity = line.quantity + 1, "Line incremented");
                line.id
            }
            None => {
                let id = order_line::insert(&mut *tx, table_no, product_id, 1, note.trim()).await?;
                tracing::debug!(table_no, line_id = id, product_id, "Line created");
                id
            }
        };

        tx.commit().await?;
        tracing::info!(table_no, product_id, line_id, "Item added");
        Ok(line_id)
    }

    /// quantity += 1
    pub async fn increase_quantity(&self, line_id: i64) -> LedgerResult<LineMutation> {
        let _gate = self.write_gate.lock().await;
        let mut tx = self.pool.begin().await?;

        let line = load_line(&mut tx, line_id).await?;
        order_line::add_quantity(&mut *tx, line_id, 1).await?;
        let mutation = reload(&mut tx, &line).await?;

        tx.commit().await?;
        tracing::info!(table_no = line.table_no, line_id, quantity = line.quantity + 1, "Quantity increased");
        Ok(mutation)
    }

    /// quantity -= 1; a line at quantity 1 is deleted
    pub async fn decrease_quantity(&self, line_id: i64) -> LedgerResult<LineMutation> {
        let _gate = self.write_gate.lock().await;
        let mut tx = self.pool.begin().await?;

        let line = load_line(&mut tx, line_id).await?;
        let mutation = if line.quantity > 1 {
            order_line::add_quantity(&mut *tx, line_id, -1).await?;
            reload(&mut tx, &line).await?
        } else {
            order_line::delete(&mut *tx, line_id).await?;
            removed(&line)
        };

        tx.commit().await?;
        tracing::info!(
            table_no = line.table_no,
            line_id,
            removed = mutation.removed(),
            "Quantity decreased"
        );
        Ok(mutation)
    }

    /// Remove a line regardless of quantity
    pub async fn delete_line(&self, line_id: i64) -> LedgerResult<LineMutation> {
        let _gate = self.write_gate.lock().await;
        let mut tx = self.pool.begin().await?;

        let line = load_line(&mut tx, line_id).await?;
        order_line::delete(&mut *tx, line_id).await?;

        tx.commit().await?;
        tracing::info!(table_no = line.table_no, line_id, "Line deleted");
        Ok(removed(&line))
    }

    /// Settle part of a line
    ///
    /// `amount_paid` must lie in `[0, line_total]`. The unpaid remainder is
    /// converted back to whole units rounding down; a line left with no whole
    /// unit is deleted. The note is kept.
    pub async fn partial_payment(&self, line_id: i64, amount_paid: f64) -> LedgerResult<LineMutation> {
        let _gate = self.write_gate.lock().await;
        let mut tx = self.pool.begin().await?;

        let line = load_line(&mut tx, line_id).await?;
        let outcome = order_money::apply_partial_payment(line.unit_price, line.quantity, amount_paid)?;

        let mutation = match outcome {
            PaymentOutcome::Cleared { discarded } => {
                order_line::delete(&mut *tx, line_id).await?;
                tracing::info!(
                    table_no = line.table_no,
                    line_id,
                    amount_paid,
                    discarded = %discarded,
                    "Partial payment cleared line"
                );
                removed(&line)
            }
            PaymentOutcome::Requantized { quantity, discarded } => {
                order_line::set_quantity(&mut *tx, line_id, quantity).await?;
                tracing::info!(
                    table_no = line.table_no,
                    line_id,
                    amount_paid,
                    from_quantity = line.quantity,
                    to_quantity = quantity,
                    discarded = %discarded,
                    "Partial payment applied"
                );
                reload(&mut tx, &line).await?
            }
        };

        tx.commit().await?;
        Ok(mutation)
    }

    /// Replace the note of a line
    pub async fn set_note(&self, line_id: i64, note: &str) -> LedgerResult<LineMutation> {
        validate_text_len(note, "note", MAX_NOTE_LEN)?;

        let _gate = self.write_gate.lock().await;
        let mut tx = self.pool.begin().await?;

        let line = load_line(&mut tx, line_id).await?;
        order_line::set_note(&mut *tx, line_id, note.trim()).await?;
        let mutation = reload(&mut tx, &line).await?;

        tx.commit().await?;
        tracing::info!(table_no = line.table_no, line_id, "Note updated");
        Ok(mutation)
    }

    /// Delete every line of a table. Closing an empty table is a no-op.
    pub async fn close_table(&self, table_no: i32) -> LedgerResult<TableClose> {
        let _gate = self.write_gate.lock().await;
        let mut tx = self.pool.begin().await?;
        self.check_existing_table(&mut *tx, table_no).await?;
        let removed_lines = order_line::delete_by_table(&mut *tx, table_no).await?;
        tx.commit().await?;

        tracing::info!(table_no, removed_lines, "Table closed");
        Ok(TableClose {
            table_no,
            removed_lines,
        })
    }

    /// Move every line of `from` to `to` in one step
    ///
    /// Lines are not merged with lines already on `to`, so the target may end
    /// up with two lines for the same product. `to` must be in range; `from`
    /// may be a leftover occupied table outside it.
    pub async fn move_table(&self, from: i32, to: i32) -> LedgerResult<TableMove> {
        self.check_table(to)?;

        let _gate = self.write_gate.lock().await;
        let mut tx = self.pool.begin().await?;
        self.check_existing_table(&mut *tx, from).await?;

        if from == to {
            return Ok(TableMove {
                from_table_no: from,
                to_table_no: to,
                moved_lines: 0,
            });
        }

        let moved_lines = order_line::reassign_table(&mut *tx, from, to).await?;
        tx.commit().await?;

        tracing::info!(from, to, moved_lines, "Table moved");
        Ok(TableMove {
            from_table_no: from,
            to_table_no: to,
            moved_lines,
        })
    }

    // ========== Queries ==========

    /// Lines of a table in insertion order, with line totals
    ///
    /// Tables outside the range are readable while they still hold lines.
    pub async fn get_order_lines(&self, table_no: i32) -> LedgerResult<Vec<OrderLineView>> {
        let lines = order_line::find_views_by_table(&self.pool, table_no).await?;
        if lines.is_empty() {
            self.check_table(table_no)?;
        }
        Ok(lines.into_iter().map(order_money::with_line_total).collect())
    }

    /// Σ unit price × quantity over the table's lines
    pub async fn get_total(&self, table_no: i32) -> LedgerResult<f64> {
        let lines = self.get_order_lines(table_no).await?;
        Ok(order_money::to_f64(order_money::lines_total(&lines)))
    }

    /// Lines and total of a table from a single read
    pub async fn table_lines(&self, table_no: i32) -> LedgerResult<TableLines> {
        let lines = self.get_order_lines(table_no).await?;
        let total = order_money::to_f64(order_money::lines_total(&lines));
        Ok(TableLines {
            table_no,
            lines,
            total,
        })
    }

    pub async fn get_line(&self, line_id: i64) -> LedgerResult<OrderLineView> {
        order_line::find_view_by_id(&self.pool, line_id)
            .await?
            .map(order_money::with_line_total)
            .ok_or(LedgerError::LineNotFound(line_id))
    }

    /// Tables with at least one open line
    pub async fn get_occupied_tables(&self) -> LedgerResult<BTreeSet<i32>> {
        let tables = order_line::occupied_tables(&self.pool).await?;
        Ok(tables.into_iter().collect())
    }

    /// Status of every table in range
    ///
    /// Occupied tables outside the range (left over from a larger
    /// `table_count`) are appended. They can still be read, closed and moved
    /// into the range.
    pub async fn table_overview(&self) -> LedgerResult<Vec<TableStatus>> {
        let lines = order_line::find_all_views(&self.pool).await?;

        let mut by_table: BTreeMap<i32, Vec<OrderLineView>> = BTreeMap::new();
        for line in lines {
            by_table.entry(line.table_no).or_default().push(line);
        }

        let mut table_nos: BTreeSet<i32> = (1..=self.table_count).collect();
        table_nos.extend(by_table.keys().copied());

        let overview = table_nos
            .into_iter()
            .map(|table_no| {
                let lines = by_table.get(&table_no).map(Vec::as_slice).unwrap_or(&[]);
                TableStatus {
                    table_no,
                    occupied: !lines.is_empty(),
                    line_count: lines.len(),
                    total: order_money::to_f64(order_money::lines_total(lines)),
                }
            })
            .collect();
        Ok(overview)
    }
}

// ========== Transaction helpers ==========

async fn load_line(
    tx: &mut Transaction<'_, Sqlite>,
    line_id: i64,
) -> LedgerResult<OrderLineView> {
    order_line::find_view_by_id(&mut **tx, line_id)
        .await?
        .ok_or(LedgerError::LineNotFound(line_id))
}

/// Re-read a line after an update inside the same transaction
async fn reload(
    tx: &mut Transaction<'_, Sqlite>,
    before: &OrderLineView,
) -> LedgerResult<LineMutation> {
    let line = load_line(tx, before.id).await?;
    Ok(LineMutation {
        line_id: before.id,
        table_no: before.table_no,
        line: Some(order_money::with_line_total(line)),
    })
}

fn removed(before: &OrderLineView) -> LineMutation {
    LineMutation {
        line_id: before.id,
        table_no: before.table_no,
        line: None,
    }
}
