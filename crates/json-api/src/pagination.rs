//! Page-number pagination: query validation and the response envelope.

use salvo::{oapi::ToSchema, prelude::StatusError};
use serde::{Deserialize, Serialize};

use vitrine_app::domain::pagination::Page;

/// Validated `page`/`limit` query parameters.
#[derive(Debug, Clone, Copy)]
pub(crate) struct PageQuery {
    pub page: i64,
    pub limit: i64,
}

impl PageQuery {
    /// Validate page-number pagination: `page >= 1`, `1 <= limit <= max`.
    pub(crate) fn resolve(
        page: Option<i64>,
        limit: Option<i64>,
        default_limit: i64,
        max_limit: i64,
    ) -> Result<Self, StatusError> {
        let page = page.unwrap_or(1);
        let limit = limit.unwrap_or(default_limit);

        if page < 1 {
            return Err(StatusError::bad_request().brief("page: must be at least 1"));
        }

        if !(1..=max_limit).contains(&limit) {
            return Err(StatusError::bad_request()
                .brief(format!("limit: must be between 1 and {max_limit}")));
        }

        Ok(Self { page, limit })
    }

    pub(crate) fn window(self) -> Page {
        Page::new((self.page - 1) * self.limit, self.limit)
    }

    pub(crate) fn envelope<T: ToSchema + 'static>(
        self,
        items: Vec<T>,
        total: i64,
    ) -> PaginatedResponse<T> {
        PaginatedResponse {
            items,
            total,
            page: self.page,
            limit: self.limit,
            total_pages: (total + self.limit - 1) / self.limit,
        }
    }
}

/// Validate offset pagination: `skip >= 0`, `1 <= limit <= max`.
pub(crate) fn resolve_window(
    skip: Option<i64>,
    limit: Option<i64>,
    default_limit: i64,
    max_limit: i64,
) -> Result<Page, StatusError> {
    let skip = skip.unwrap_or(0);
    let limit = limit.unwrap_or(default_limit);

    if skip < 0 {
        return Err(StatusError::bad_request().brief("skip: must not be negative"));
    }

    if !(1..=max_limit).contains(&limit) {
        return Err(
            StatusError::bad_request().brief(format!("limit: must be between 1 and {max_limit}"))
        );
    }

    Ok(Page::new(skip, limit))
}

/// Page envelope returned by the paginated list endpoints.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct PaginatedResponse<T: ToSchema + 'static> {
    pub items: Vec<T>,
    pub total: i64,
    pub page: i64,
    pub limit: i64,
    pub total_pages: i64,
}
