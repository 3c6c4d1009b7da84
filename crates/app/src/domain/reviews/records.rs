//! Review Records

use jiff::Timestamp;

use crate::{domain::products::records::ProductId, ids::TypedId};

/// Review id
pub type ReviewId = TypedId<ReviewRecord>;

/// Product Review Record
///
/// `helpful_count` is mutated by collaborators outside this service.
#[derive(Debug, Clone, PartialEq)]
pub struct ReviewRecord {
    pub id: ReviewId,
    pub product_id: ProductId,
    pub user_id: String,
    pub rating: i32,
    pub title: Option<String>,
    pub comment: Option<String>,
    pub images: Vec<String>,
    pub is_verified_purchase: bool,
    pub is_approved: bool,
    pub helpful_count: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
