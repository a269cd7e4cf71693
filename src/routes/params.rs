use serde::Deserialize;
use utoipa::ToSchema;

/// Raw list query as it arrives on the wire: every field optional and
/// string-valued. Typing and defaulting happen in `filters::parse_filters`,
/// so a malformed value can never reject the request.
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PhoneQuery {
    pub brand: Option<String>,
    pub price_min: Option<String>,
    pub price_max: Option<String>,
    pub sort_by: Option<String>,
    pub sort_order: Option<String>,
    pub page: Option<String>,
    pub limit: Option<String>,
}
