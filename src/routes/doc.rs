use utoipa::OpenApi;
use utoipa::openapi::OpenApi as OpenApiSpec;
use utoipa_scalar::{Scalar, Servable};

use crate::{
    dto::phones::{BrandList, PriceRange},
    filters::{SortField, SortOrder},
    models::{Phone, PhoneSpecs},
    response::{ApiResponse, Pagination},
    routes::{health, params, phones},
};

#[derive(OpenApi)]
#[openapi(
    paths(
        health::health_check,
        phones::list_phones,
        phones::get_phone,
        phones::list_brands,
        phones::get_price_range,
    ),
    components(
        schemas(
            Phone,
            PhoneSpecs,
            BrandList,
            PriceRange,
            SortField,
            SortOrder,
            Pagination,
            params::PhoneQuery,
            health::HealthData,
            ApiResponse<Phone>,
            ApiResponse<Vec<Phone>>,
            ApiResponse<BrandList>,
            ApiResponse<PriceRange>,
            ApiResponse<health::HealthData>
        )
    ),
    tags(
        (name = "Health", description = "Health check endpoint"),
        (name = "phones", description = "Phone catalogue endpoints"),
    )
)]
pub struct ApiDoc;

pub fn scalar_docs() -> Scalar<OpenApiSpec> {
    Scalar::with_url("/docs", ApiDoc::openapi())
}
