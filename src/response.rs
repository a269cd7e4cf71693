use serde::Serialize;
use utoipa::ToSchema;

/// Page metadata, recomputed on every request from the post-filter item count
/// and the sanitized page/limit. Never cached.
#[derive(Debug, Serialize, ToSchema, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub current_page: i64,
    pub total_pages: i64,
    pub total_items: i64,
    pub items_per_page: i64,
    pub has_next: bool,
    pub has_previous: bool,
}

impl Pagination {
    /// `limit` must already be sanitized (>= 1).
    pub fn new(total_items: i64, current_page: i64, items_per_page: i64) -> Self {
        let total_pages = (total_items as u64).div_ceil(items_per_page as u64) as i64;
        Self {
            current_page,
            total_pages,
            total_items,
            items_per_page,
            has_next: current_page < total_pages,
            // An empty result has no previous page either, whatever page was asked for.
            has_previous: total_pages > 0 && current_page > 1,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ApiResponse<T> {
    pub message: String,
    pub data: Option<T>,
    pub pagination: Option<Pagination>,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn success(message: impl Into<String>, data: T, pagination: Option<Pagination>) -> Self {
        Self {
            message: message.into(),
            data: Some(data),
            pagination,
        }
    }
}
