//! Categories Data

use crate::domain::categories::records::CategoryId;

/// New Category Data
#[derive(Debug, Clone, PartialEq)]
pub struct NewCategory {
    pub name: String,
    pub description: Option<String>,
    pub image: Option<String>,
    pub parent_id: Option<CategoryId>,
    pub is_active: bool,
    pub sort_order: i32,
}

/// Category Update Data
///
/// Sparse patch: outer `None` leaves the column untouched. For nullable
/// columns the inner `Option` distinguishes "set to null" from a value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CategoryUpdate {
    pub name: Option<String>,
    pub description: Option<Option<String>>,
    pub image: Option<Option<String>>,
    pub parent_id: Option<Option<CategoryId>>,
    pub is_active: Option<bool>,
    pub sort_order: Option<i32>,
}

/// Category list filter.
///
/// `parent_id: None` selects root categories (the default listing); a
/// concrete id selects that parent's children.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CategoryFilter {
    pub parent_id: Option<CategoryId>,
    pub is_active: Option<bool>,
}
