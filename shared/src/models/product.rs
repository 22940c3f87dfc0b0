//! Product Model

use serde::{Deserialize, Serialize};
use std::fmt;

/// Menu category (fixed set)
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[cfg_attr(feature = "db", derive(sqlx::Type))]
#[cfg_attr(feature = "db", sqlx(rename_all = "SCREAMING_SNAKE_CASE"))]
pub enum Category {
    /// Kahveler
    Coffee,
    /// Soğuk İçecekler
    ColdDrink,
    /// Tatlılar
    Dessert,
}

impl Category {
    /// Every category, in menu order
    pub const ALL: [Category; 3] = [Category::Coffee, Category::ColdDrink, Category::Dessert];

    /// Name shown on menus and receipts
    pub fn display_name(&self) -> &'static str {
        match self {
            Category::Coffee => "Coffees",
            Category::ColdDrink => "Cold Drinks",
            Category::Dessert => "Desserts",
        }
    }

    /// Stored / wire representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Coffee => "COFFEE",
            Category::ColdDrink => "COLD_DRINK",
            Category::Dessert => "DESSERT",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Product entity
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Product {
    pub id: i64,
    pub name: String,
    /// Unit price in currency unit
    pub price: f64,
    pub category: Category,
}

/// Create product payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductCreate {
    pub name: String,
    pub price: f64,
    pub category: Category,
}

/// Product list filter (`GET /api/products?category=COFFEE`)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProductQuery {
    pub category: Option<Category>,
}

/// Category listing entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryInfo {
    pub category: Category,
    pub display_name: String,
}

impl From<Category> for CategoryInfo {
    fn from(category: Category) -> Self {
        Self {
            category,
            display_name: category.display_name().to_string(),
        }
    }
}
