//! Order Line Model

use serde::{Deserialize, Serialize};

/// Order line row (one product on one table's open tab)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct OrderLine {
    pub id: i64,
    pub table_no: i32,
    pub product_id: i64,
    /// Always >= 1; a line reaching zero is deleted
    pub quantity: i32,
    /// Empty string when no note was given
    pub note: String,
}

/// Order line joined with its product, as listed for a table
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct OrderLineView {
    pub id: i64,
    pub table_no: i32,
    pub product_id: i64,
    pub product_name: String,
    pub unit_price: f64,
    pub quantity: i32,
    pub note: String,

    // -- Derived (populated by application code, skipped by FromRow) --

    /// unit_price × quantity, rounded to 2 decimals
    #[cfg_attr(feature = "db", sqlx(skip))]
    #[serde(default)]
    pub line_total: f64,
}

/// Add item payload (`POST /api/tables/{no}/lines`)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddItemRequest {
    pub product_id: i64,
    #[serde(default)]
    pub note: Option<String>,
}

/// Partial payment payload (`POST /api/lines/{id}/payment`)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PartialPaymentRequest {
    /// Amount paid in currency unit
    pub amount: f64,
}

/// Set note payload (`PUT /api/lines/{id}/note`)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SetNoteRequest {
    pub note: String,
}

/// Outcome of a mutation on a single line
///
/// `line` is `None` when the mutation removed the line.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LineMutation {
    pub line_id: i64,
    pub table_no: i32,
    pub line: Option<OrderLineView>,
}

impl LineMutation {
    /// Whether the line no longer exists after the mutation
    pub fn removed(&self) -> bool {
        self.line.is_none()
    }
}
