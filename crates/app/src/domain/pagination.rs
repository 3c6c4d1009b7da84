//! Offset pagination input shared by the store accessors.

/// Offset/limit window, applied after filtering and ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    pub skip: i64,
    pub limit: i64,
}

impl Page {
    #[must_use]
    pub const fn new(skip: i64, limit: i64) -> Self {
        Self { skip, limit }
    }
}
