use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::config::BusinessConfig;
use crate::routes::params::PhoneQuery;

/// The closed set of sortable fields. Dispatching on this enum keeps the
/// per-field comparators exhaustive instead of looking fields up by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum SortField {
    Name,
    Brand,
    Price,
}

impl FromStr for SortField {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" => Ok(SortField::Name),
            "brand" => Ok(SortField::Brand),
            "price" => Ok(SortField::Price),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    Desc,
}

impl FromStr for SortOrder {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "asc" => Ok(SortOrder::Asc),
            "desc" => Ok(SortOrder::Desc),
            _ => Err(()),
        }
    }
}

/// Typed filter/sort/page specification. After [`sanitize_filters`] the sort
/// and page fields are always in range; the optionals keep "absent means
/// unconstrained" semantics, so a zero bound is a real bound.
#[derive(Debug, Clone, PartialEq)]
pub struct PhoneFilters {
    pub brand: Option<String>,
    pub price_min: Option<f64>,
    pub price_max: Option<f64>,
    pub sort_by: SortField,
    pub sort_order: SortOrder,
    pub page: i64,
    pub limit: i64,
}

/// Turn the raw, all-string query into a typed specification. Defensive by
/// contract: unparsable values degrade to defaults or to "absent", never to an
/// error.
pub fn parse_filters(query: &PhoneQuery, config: &BusinessConfig) -> PhoneFilters {
    PhoneFilters {
        brand: parse_string_filter(query.brand.as_deref()),
        price_min: parse_number_filter(query.price_min.as_deref()),
        price_max: parse_number_filter(query.price_max.as_deref()),
        sort_by: query
            .sort_by
            .as_deref()
            .and_then(|v| v.parse().ok())
            .unwrap_or(config.default_sort_by),
        sort_order: query
            .sort_order
            .as_deref()
            .and_then(|v| v.parse().ok())
            .unwrap_or(config.default_sort_order),
        page: parse_int_with_default(query.page.as_deref(), config.default_page),
        limit: clamp_limit(
            parse_int_with_default(query.limit.as_deref(), config.default_limit),
            config.max_limit,
        ),
    }
}

fn parse_string_filter(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

fn parse_number_filter(value: Option<&str>) -> Option<f64> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .and_then(|v| v.parse::<f64>().ok())
}

fn parse_int_with_default(value: Option<&str>, default: i64) -> i64 {
    value
        .and_then(|v| v.trim().parse::<i64>().ok())
        .unwrap_or(default)
}

fn clamp_limit(limit: i64, max_limit: i64) -> i64 {
    limit.clamp(1, max_limit)
}

/// A single policy repair applied by the sanitizer. Reported through the
/// observer callback so the correction logic stays independent of logging.
#[derive(Debug, Clone, PartialEq)]
pub enum Correction {
    PriceMinRaised { from: f64, to: f64 },
    PriceMaxLowered { from: f64, to: f64 },
    PriceBoundsSwapped { min: f64, max: f64 },
    EmptyBrandCleared,
    PageReset { from: i64 },
    LimitClamped { from: i64, to: i64 },
    LimitReset { from: i64, to: i64 },
}

impl fmt::Display for Correction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Correction::PriceMinRaised { from, to } => {
                write!(f, "price minimum {from} below allowed {to}, using minimum")
            }
            Correction::PriceMaxLowered { from, to } => {
                write!(f, "price maximum {from} exceeds limit {to}, using maximum")
            }
            Correction::PriceBoundsSwapped { min, max } => {
                write!(f, "price minimum {min} greater than maximum {max}, swapping bounds")
            }
            Correction::EmptyBrandCleared => {
                write!(f, "empty brand filter not allowed, removing filter")
            }
            Correction::PageReset { from } => write!(f, "invalid page {from}, using page 1"),
            Correction::LimitClamped { from, to } => {
                write!(f, "limit {from} exceeds maximum {to}, using maximum")
            }
            Correction::LimitReset { from, to } => {
                write!(f, "invalid limit {from}, using default {to}")
            }
        }
    }
}

/// Sanitize with the default observer, which logs every repair.
pub fn sanitize_filters(filters: PhoneFilters, config: &BusinessConfig) -> PhoneFilters {
    sanitize_filters_with(filters, config, |correction| {
        tracing::warn!(%correction, "filter sanitized");
    })
}

/// Business-policy repair pass over an already-typed specification. Violations
/// are fixed, never rejected. Idempotent: running it twice yields the same
/// specification.
///
/// Two deliberate asymmetries are part of the contract: swapped price bounds
/// are exchanged rather than dropped, and a limit below 1 resets to the
/// configured default rather than clamping to 1.
pub fn sanitize_filters_with(
    mut filters: PhoneFilters,
    config: &BusinessConfig,
    mut observe: impl FnMut(Correction),
) -> PhoneFilters {
    if config.validate_price_range {
        clamp_price_bounds(&mut filters, config, &mut observe);
        if let (Some(min), Some(max)) = (filters.price_min, filters.price_max) {
            if min > max {
                observe(Correction::PriceBoundsSwapped { min, max });
                filters.price_min = Some(max);
                filters.price_max = Some(min);
            }
        }
        // A swap can move a bound outside the allowed window; clamp again so
        // a second sanitization pass is a no-op.
        clamp_price_bounds(&mut filters, config, &mut observe);
    }

    if !config.allow_empty_brand_filter && filters.brand.as_deref() == Some("") {
        observe(Correction::EmptyBrandCleared);
        filters.brand = None;
    }

    if filters.page < 1 {
        observe(Correction::PageReset { from: filters.page });
        filters.page = 1;
    }

    if filters.limit > config.max_limit {
        observe(Correction::LimitClamped {
            from: filters.limit,
            to: config.max_limit,
        });
        filters.limit = config.max_limit;
    }

    if filters.limit < 1 {
        observe(Correction::LimitReset {
            from: filters.limit,
            to: config.default_limit,
        });
        filters.limit = config.default_limit;
    }

    filters
}

fn clamp_price_bounds(
    filters: &mut PhoneFilters,
    config: &BusinessConfig,
    observe: &mut impl FnMut(Correction),
) {
    if let Some(min) = filters.price_min {
        if min < config.min_allowed_price {
            observe(Correction::PriceMinRaised {
                from: min,
                to: config.min_allowed_price,
            });
            filters.price_min = Some(config.min_allowed_price);
        }
    }
    if let Some(max) = filters.price_max {
        if max > config.max_price_range {
            observe(Correction::PriceMaxLowered {
                from: max,
                to: config.max_price_range,
            });
            filters.price_max = Some(config.max_price_range);
        }
    }
}
