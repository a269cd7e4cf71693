use axum::{
    Json, Router,
    extract::{Path, Query, State},
    routing::get,
};

use crate::{
    dto::phones::{BrandList, PriceRange},
    error::{AppError, AppResult},
    models::Phone,
    response::ApiResponse,
    routes::params::PhoneQuery,
    services::phone_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_phones))
        .route("/brands", get(list_brands))
        .route("/price-range", get(get_price_range))
        .route("/{id}", get(get_phone))
}

#[utoipa::path(
    get,
    path = "/api/phones",
    params(
        ("brand" = Option<String>, Query, description = "Brand filter, substring and case-insensitive by default"),
        ("priceMin" = Option<String>, Query, description = "Inclusive lower price bound"),
        ("priceMax" = Option<String>, Query, description = "Inclusive upper price bound"),
        ("sortBy" = Option<String>, Query, description = "Sort field: name, brand or price (default name)"),
        ("sortOrder" = Option<String>, Query, description = "asc or desc (default asc)"),
        ("page" = Option<String>, Query, description = "Page number, default 1"),
        ("limit" = Option<String>, Query, description = "Items per page, default 10"),
    ),
    responses(
        (status = 200, description = "One page of phones with pagination metadata", body = ApiResponse<Vec<Phone>>)
    ),
    tag = "phones"
)]
pub async fn list_phones(
    State(state): State<AppState>,
    Query(query): Query<PhoneQuery>,
) -> Json<ApiResponse<Vec<Phone>>> {
    // Malformed query values degrade to defaults inside the pipeline, so this
    // handler has no failure path.
    let page = phone_service::filtered_phones(&state.store, &state.business, &query);
    Json(ApiResponse::success(
        "Phones",
        page.data,
        Some(page.pagination),
    ))
}

#[utoipa::path(
    get,
    path = "/api/phones/{id}",
    params(
        ("id" = u32, Path, description = "Phone ID")
    ),
    responses(
        (status = 200, description = "Get phone", body = ApiResponse<Phone>),
        (status = 400, description = "Invalid phone ID"),
        (status = 404, description = "Phone not found"),
    ),
    tag = "phones"
)]
pub async fn get_phone(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> AppResult<Json<ApiResponse<Phone>>> {
    let id: u32 = id
        .parse()
        .map_err(|_| AppError::BadRequest("Invalid phone ID".to_string()))?;
    let phone = phone_service::phone_by_id(&state.store, id)
        .cloned()
        .ok_or(AppError::NotFound)?;
    Ok(Json(ApiResponse::success("Phone", phone, None)))
}

#[utoipa::path(
    get,
    path = "/api/phones/brands",
    responses(
        (status = 200, description = "Distinct brands, sorted", body = ApiResponse<BrandList>)
    ),
    tag = "phones"
)]
pub async fn list_brands(State(state): State<AppState>) -> Json<ApiResponse<BrandList>> {
    let brands = phone_service::available_brands(&state.store);
    Json(ApiResponse::success("Brands", brands, None))
}

#[utoipa::path(
    get,
    path = "/api/phones/price-range",
    responses(
        (status = 200, description = "Lowest and highest catalogue price", body = ApiResponse<PriceRange>)
    ),
    tag = "phones"
)]
pub async fn get_price_range(State(state): State<AppState>) -> Json<ApiResponse<PriceRange>> {
    let range = phone_service::price_range(&state.store);
    Json(ApiResponse::success("Price range", range, None))
}
