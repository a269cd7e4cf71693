use std::env;
use std::str::FromStr;

use crate::filters::{SortField, SortOrder};

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub data_path: String,
    pub cors_origin: String,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let host = env::var("APP_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("APP_PORT")
            .ok()
            .and_then(|p| p.parse::<u16>().ok())
            .unwrap_or(3001);
        let data_path = env::var("DATA_PATH").unwrap_or_else(|_| "data/phones.json".to_string());
        let cors_origin =
            env::var("CORS_ORIGIN").unwrap_or_else(|_| "http://localhost:3000".to_string());
        Self {
            host,
            port,
            data_path,
            cors_origin,
        }
    }
}

/// Business policy knobs for the query pipeline. Read once at startup; every
/// value has a default and a malformed variable falls back silently.
#[derive(Debug, Clone)]
pub struct BusinessConfig {
    pub default_page: i64,
    pub default_limit: i64,
    pub max_limit: i64,
    pub default_sort_by: SortField,
    pub default_sort_order: SortOrder,
    pub brand_case_sensitive: bool,
    pub brand_partial_match: bool,
    pub allow_empty_brand_filter: bool,
    pub validate_price_range: bool,
    pub min_allowed_price: f64,
    pub max_price_range: f64,
}

impl Default for BusinessConfig {
    fn default() -> Self {
        Self {
            default_page: 1,
            default_limit: 10,
            max_limit: 100,
            default_sort_by: SortField::Name,
            default_sort_order: SortOrder::Asc,
            brand_case_sensitive: false,
            brand_partial_match: true,
            allow_empty_brand_filter: true,
            validate_price_range: false,
            min_allowed_price: 0.0,
            max_price_range: 50_000.0,
        }
    }
}

impl BusinessConfig {
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            default_page: env_parse("PHONE_CATALOGUE_DEFAULT_PAGE", defaults.default_page),
            default_limit: env_parse("PHONE_CATALOGUE_DEFAULT_LIMIT", defaults.default_limit),
            max_limit: env_parse("PHONE_CATALOGUE_MAX_LIMIT", defaults.max_limit),
            default_sort_by: env_parse(
                "PHONE_CATALOGUE_DEFAULT_SORT_BY",
                defaults.default_sort_by,
            ),
            default_sort_order: env_parse(
                "PHONE_CATALOGUE_DEFAULT_SORT_ORDER",
                defaults.default_sort_order,
            ),
            brand_case_sensitive: env_parse(
                "PHONE_CATALOGUE_BRAND_CASE_SENSITIVE",
                defaults.brand_case_sensitive,
            ),
            brand_partial_match: env_parse(
                "PHONE_CATALOGUE_BRAND_PARTIAL_MATCH",
                defaults.brand_partial_match,
            ),
            allow_empty_brand_filter: env_parse(
                "PHONE_CATALOGUE_ALLOW_EMPTY_BRAND",
                defaults.allow_empty_brand_filter,
            ),
            validate_price_range: env_parse(
                "PHONE_CATALOGUE_VALIDATE_PRICE_RANGE",
                defaults.validate_price_range,
            ),
            min_allowed_price: env_parse(
                "PHONE_CATALOGUE_PRICE_MIN_ALLOWED",
                defaults.min_allowed_price,
            ),
            max_price_range: env_parse(
                "PHONE_CATALOGUE_PRICE_MAX_RANGE",
                defaults.max_price_range,
            ),
        }
    }
}

fn env_parse<T: FromStr>(key: &str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|v| v.parse::<T>().ok())
        .unwrap_or(default)
}
