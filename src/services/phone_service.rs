use std::cmp::Ordering;

use crate::config::BusinessConfig;
use crate::dto::phones::{BrandList, PhonePage, PriceRange};
use crate::filters::{PhoneFilters, SortField, SortOrder, parse_filters, sanitize_filters};
use crate::models::Phone;
use crate::response::Pagination;
use crate::routes::params::PhoneQuery;
use crate::store::PhoneStore;

/// Run the full query pipeline: normalize and sanitize the raw query, then
/// filter, sort, and slice one page of the catalogue.
pub fn filtered_phones(
    store: &PhoneStore,
    config: &BusinessConfig,
    query: &PhoneQuery,
) -> PhonePage {
    let filters = sanitize_filters(parse_filters(query, config), config);
    filtered_page(store.phones(), config, &filters)
}

/// The pipeline over an already-sanitized specification. Each stage is a pure
/// function; the source slice is never reordered, only borrowed from.
pub fn filtered_page(
    phones: &[Phone],
    config: &BusinessConfig,
    filters: &PhoneFilters,
) -> PhonePage {
    let mut selected = apply_filters(phones, filters, config);
    apply_sorting(&mut selected, filters);
    paginate(&selected, filters.page, filters.limit)
}

pub fn phone_by_id(store: &PhoneStore, id: u32) -> Option<&Phone> {
    store.phone_by_id(id)
}

/// Distinct brand values across the catalogue, sorted.
pub fn available_brands(store: &PhoneStore) -> BrandList {
    let mut items: Vec<String> = store
        .phones()
        .iter()
        .map(|phone| phone.brand.clone())
        .collect();
    items.sort();
    items.dedup();
    BrandList { items }
}

/// Lowest and highest catalogue price, `{0, 0}` for an empty catalogue.
pub fn price_range(store: &PhoneStore) -> PriceRange {
    let phones = store.phones();
    if phones.is_empty() {
        return PriceRange { min: 0.0, max: 0.0 };
    }
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for phone in phones {
        min = min.min(phone.price);
        max = max.max(phone.price);
    }
    PriceRange { min, max }
}

/// Brand and price predicates composed with AND. Survivors keep their
/// relative order from the source slice.
fn apply_filters<'a>(
    phones: &'a [Phone],
    filters: &PhoneFilters,
    config: &BusinessConfig,
) -> Vec<&'a Phone> {
    phones
        .iter()
        .filter(|phone| brand_matches(&phone.brand, filters.brand.as_deref(), config))
        .filter(|phone| within_price_range(phone.price, filters.price_min, filters.price_max))
        .collect()
}

fn brand_matches(brand: &str, filter: Option<&str>, config: &BusinessConfig) -> bool {
    let Some(filter) = filter else {
        return true;
    };
    let (value, needle) = if config.brand_case_sensitive {
        (brand.to_string(), filter.to_string())
    } else {
        (brand.to_lowercase(), filter.to_lowercase())
    };
    if config.brand_partial_match {
        value.contains(&needle)
    } else {
        value == needle
    }
}

fn within_price_range(price: f64, min: Option<f64>, max: Option<f64>) -> bool {
    if let Some(min) = min {
        if price < min {
            return false;
        }
    }
    if let Some(max) = max {
        if price > max {
            return false;
        }
    }
    true
}

/// Stable sort by the chosen field. Descending inverts the comparator rather
/// than reversing the sequence, so ties keep their input order in both
/// directions.
fn apply_sorting(phones: &mut [&Phone], filters: &PhoneFilters) {
    phones.sort_by(|a, b| {
        let ordering = compare_by_field(a, b, filters.sort_by);
        match filters.sort_order {
            SortOrder::Asc => ordering,
            SortOrder::Desc => ordering.reverse(),
        }
    });
}

fn compare_by_field(a: &Phone, b: &Phone, field: SortField) -> Ordering {
    match field {
        SortField::Name => compare_text(&a.name, &b.name),
        SortField::Brand => compare_text(&a.brand, &b.brand),
        // Incomparable values (NaN) count as equal instead of erroring.
        SortField::Price => a.price.partial_cmp(&b.price).unwrap_or(Ordering::Equal),
    }
}

fn compare_text(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase())
}

/// Slice the window `[(page-1)*limit, +limit)` and compute metadata. A page
/// past the end yields an empty slice, not an error.
fn paginate(phones: &[&Phone], page: i64, limit: i64) -> PhonePage {
    let pagination = Pagination::new(phones.len() as i64, page, limit);
    let start = usize::try_from((page - 1).saturating_mul(limit)).unwrap_or(usize::MAX);
    let data = phones
        .iter()
        .skip(start)
        .take(limit as usize)
        .map(|phone| (*phone).clone())
        .collect();
    PhonePage { data, pagination }
}
