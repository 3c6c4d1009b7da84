//! Category Records

use jiff::Timestamp;

use crate::ids::TypedId;

/// Category id
pub type CategoryId = TypedId<CategoryRecord>;

/// Category Record
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryRecord {
    pub id: CategoryId,
    pub name: String,
    pub slug: String,
    pub description: Option<String>,
    pub image: Option<String>,
    pub parent_id: Option<CategoryId>,
    pub is_active: bool,
    pub sort_order: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// An active root category together with its direct subcategories.
///
/// The tree materializes a single level; deeper nesting is structurally
/// possible in the table but never traversed here.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryTreeNode {
    pub category: CategoryRecord,
    pub subcategories: Vec<CategoryRecord>,
}
