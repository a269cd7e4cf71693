use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PhoneSpecs {
    pub display: String,
    pub storage: String,
    pub camera: String,
    pub battery: String,
}

/// One catalogue entry. The loaded set is read-only for the lifetime of the
/// process; the query pipeline never mutates it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Phone {
    pub id: u32,
    pub name: String,
    pub brand: String,
    pub price: f64,
    pub description: String,
    pub specs: PhoneSpecs,
    pub image: String,
    pub in_stock: bool,
}
