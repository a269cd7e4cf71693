use serde::Serialize;
use utoipa::ToSchema;

use crate::models::Phone;
use crate::response::Pagination;

/// One page of the catalogue together with its metadata. Produced by the
/// service pipeline; the route flattens it into the response envelope.
#[derive(Debug, Clone, PartialEq)]
pub struct PhonePage {
    pub data: Vec<Phone>,
    pub pagination: Pagination,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(transparent)]
pub struct BrandList {
    #[schema(value_type = Vec<String>)]
    pub items: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct PriceRange {
    pub min: f64,
    pub max: f64,
}
