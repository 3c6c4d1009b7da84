//! Reviews Data

/// New Review Data
///
/// The author and the verified-purchase flag come from the caller context,
/// never from this payload.
#[derive(Debug, Clone, PartialEq)]
pub struct NewReview {
    pub rating: i32,
    pub title: Option<String>,
    pub comment: Option<String>,
    pub images: Vec<String>,
}
