use phone_catalogue_api::config::BusinessConfig;
use phone_catalogue_api::filters::{PhoneFilters, SortField, SortOrder};
use phone_catalogue_api::models::{Phone, PhoneSpecs};
use phone_catalogue_api::routes::params::PhoneQuery;
use phone_catalogue_api::services::phone_service;
use phone_catalogue_api::store::PhoneStore;

fn make_phone(id: u32, name: &str, brand: &str, price: f64, in_stock: bool) -> Phone {
    Phone {
        id,
        name: name.to_string(),
        brand: brand.to_string(),
        price,
        description: format!("{name} description"),
        specs: PhoneSpecs {
            display: "6.1-inch".to_string(),
            storage: "256GB".to_string(),
            camera: "48MP".to_string(),
            battery: "4000mAh".to_string(),
        },
        image: format!("{}.jpg", name.to_lowercase().replace(' ', "-")),
        in_stock,
    }
}

fn fixture_store() -> PhoneStore {
    PhoneStore::new(vec![
        make_phone(1, "iPhone 15 Pro", "Apple", 1199.0, true),
        make_phone(2, "Galaxy S24 Ultra", "Samsung", 1299.0, true),
        make_phone(3, "Pixel 8 Pro", "Google", 999.0, false),
    ])
}

fn config() -> BusinessConfig {
    BusinessConfig::default()
}

fn names(page: &phone_catalogue_api::dto::phones::PhonePage) -> Vec<&str> {
    page.data.iter().map(|p| p.name.as_str()).collect()
}

#[test]
fn empty_query_returns_everything_sorted_by_name() {
    let store = fixture_store();
    let page = phone_service::filtered_phones(&store, &config(), &PhoneQuery::default());

    assert_eq!(
        names(&page),
        vec!["Galaxy S24 Ultra", "iPhone 15 Pro", "Pixel 8 Pro"]
    );
    assert_eq!(page.pagination.current_page, 1);
    assert_eq!(page.pagination.total_pages, 1);
    assert_eq!(page.pagination.total_items, 3);
    assert_eq!(page.pagination.items_per_page, 10);
    assert!(!page.pagination.has_next);
    assert!(!page.pagination.has_previous);
}

#[test]
fn brand_filter_is_case_insensitive_and_partial_by_default() {
    let store = fixture_store();
    let query = PhoneQuery {
        brand: Some("apple".to_string()),
        ..PhoneQuery::default()
    };
    let page = phone_service::filtered_phones(&store, &config(), &query);

    assert_eq!(page.data.len(), 1);
    assert_eq!(page.data[0].brand, "Apple");
    assert_eq!(page.pagination.total_items, 1);
}

#[test]
fn brand_filter_respects_case_sensitive_exact_policy() {
    let store = fixture_store();
    let config = BusinessConfig {
        brand_case_sensitive: true,
        brand_partial_match: false,
        ..BusinessConfig::default()
    };

    let query = PhoneQuery {
        brand: Some("apple".to_string()),
        ..PhoneQuery::default()
    };
    assert!(phone_service::filtered_phones(&store, &config, &query).data.is_empty());

    let query = PhoneQuery {
        brand: Some("Apple".to_string()),
        ..PhoneQuery::default()
    };
    assert_eq!(
        phone_service::filtered_phones(&store, &config, &query).data.len(),
        1
    );
}

#[test]
fn price_range_filter_uses_inclusive_bounds() {
    let store = fixture_store();
    let query = PhoneQuery {
        price_min: Some("1000".to_string()),
        price_max: Some("1200".to_string()),
        ..PhoneQuery::default()
    };
    let page = phone_service::filtered_phones(&store, &config(), &query);

    assert_eq!(page.data.len(), 1);
    assert_eq!(page.data[0].price, 1199.0);

    // Bounds are inclusive on both ends.
    let query = PhoneQuery {
        price_min: Some("999".to_string()),
        price_max: Some("1299".to_string()),
        ..PhoneQuery::default()
    };
    let page = phone_service::filtered_phones(&store, &config(), &query);
    assert_eq!(page.data.len(), 3);
}

#[test]
fn sorting_by_price_descending() {
    let store = fixture_store();
    let query = PhoneQuery {
        sort_by: Some("price".to_string()),
        sort_order: Some("desc".to_string()),
        ..PhoneQuery::default()
    };
    let page = phone_service::filtered_phones(&store, &config(), &query);

    let prices: Vec<f64> = page.data.iter().map(|p| p.price).collect();
    assert_eq!(prices, vec![1299.0, 1199.0, 999.0]);
}

#[test]
fn second_page_with_limit_two() {
    let store = fixture_store();
    let query = PhoneQuery {
        page: Some("2".to_string()),
        limit: Some("2".to_string()),
        ..PhoneQuery::default()
    };
    let page = phone_service::filtered_phones(&store, &config(), &query);

    // Third record by name order.
    assert_eq!(names(&page), vec!["Pixel 8 Pro"]);
    assert_eq!(page.pagination.current_page, 2);
    assert_eq!(page.pagination.total_pages, 2);
    assert_eq!(page.pagination.total_items, 3);
    assert_eq!(page.pagination.items_per_page, 2);
    assert!(!page.pagination.has_next);
    assert!(page.pagination.has_previous);
}

#[test]
fn unknown_brand_yields_an_empty_page_not_an_error() {
    let store = fixture_store();
    let query = PhoneQuery {
        brand: Some("NonExistent".to_string()),
        ..PhoneQuery::default()
    };
    let page = phone_service::filtered_phones(&store, &config(), &query);

    assert!(page.data.is_empty());
    assert_eq!(page.pagination.total_items, 0);
    assert_eq!(page.pagination.total_pages, 0);
    assert!(!page.pagination.has_next);
    assert!(!page.pagination.has_previous);
}

#[test]
fn page_past_the_end_is_empty_with_honest_metadata() {
    let store = fixture_store();
    let query = PhoneQuery {
        page: Some("99".to_string()),
        ..PhoneQuery::default()
    };
    let page = phone_service::filtered_phones(&store, &config(), &query);

    assert!(page.data.is_empty());
    assert_eq!(page.pagination.current_page, 99);
    assert_eq!(page.pagination.total_pages, 1);
    assert_eq!(page.pagination.total_items, 3);
    assert!(!page.pagination.has_next);
    assert!(page.pagination.has_previous);
}

#[test]
fn sort_is_stable_in_both_directions() {
    let phones = vec![
        make_phone(1, "Model C", "Zenith", 500.0, true),
        make_phone(2, "Model A", "Acme", 300.0, true),
        make_phone(3, "Model B", "Acme", 400.0, true),
    ];
    let filters = PhoneFilters {
        brand: None,
        price_min: None,
        price_max: None,
        sort_by: SortField::Brand,
        sort_order: SortOrder::Asc,
        page: 1,
        limit: 10,
    };

    let asc = phone_service::filtered_page(&phones, &config(), &filters);
    let asc_ids: Vec<u32> = asc.data.iter().map(|p| p.id).collect();
    assert_eq!(asc_ids, vec![2, 3, 1]);

    // Descending inverts the comparator, so the two Acme records keep their
    // input order instead of flipping.
    let filters = PhoneFilters {
        sort_order: SortOrder::Desc,
        ..filters
    };
    let desc = phone_service::filtered_page(&phones, &config(), &filters);
    let desc_ids: Vec<u32> = desc.data.iter().map(|p| p.id).collect();
    assert_eq!(desc_ids, vec![1, 2, 3]);
}

#[test]
fn filtering_preserves_source_order() {
    // Identical names make the sort a no-op, exposing the filter's ordering.
    let phones = vec![
        make_phone(10, "Same", "A", 100.0, true),
        make_phone(20, "Same", "B", 900.0, true),
        make_phone(30, "Same", "C", 200.0, true),
        make_phone(40, "Same", "D", 300.0, true),
    ];
    let filters = PhoneFilters {
        brand: None,
        price_min: Some(100.0),
        price_max: Some(300.0),
        sort_by: SortField::Name,
        sort_order: SortOrder::Asc,
        page: 1,
        limit: 10,
    };

    let page = phone_service::filtered_page(&phones, &config(), &filters);
    let ids: Vec<u32> = page.data.iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![10, 30, 40]);
}

#[test]
fn pipeline_never_mutates_the_store() {
    let store = fixture_store();
    let before: Vec<u32> = store.phones().iter().map(|p| p.id).collect();

    let query = PhoneQuery {
        sort_by: Some("price".to_string()),
        sort_order: Some("desc".to_string()),
        ..PhoneQuery::default()
    };
    let _ = phone_service::filtered_phones(&store, &config(), &query);

    let after: Vec<u32> = store.phones().iter().map(|p| p.id).collect();
    assert_eq!(before, after);
}

#[test]
fn filtering_by_a_records_own_brand_always_includes_it() {
    let store = fixture_store();
    for phone in store.phones() {
        let query = PhoneQuery {
            brand: Some(phone.brand.to_lowercase()),
            ..PhoneQuery::default()
        };
        let page = phone_service::filtered_phones(&store, &config(), &query);
        assert!(
            page.data.iter().any(|p| p.id == phone.id),
            "brand {} did not match its own record",
            phone.brand
        );
    }
}

#[test]
fn page_slice_length_follows_the_pagination_law() {
    let store = fixture_store();
    for limit in 1..=5_i64 {
        for page_no in 1..=4_i64 {
            let query = PhoneQuery {
                page: Some(page_no.to_string()),
                limit: Some(limit.to_string()),
                ..PhoneQuery::default()
            };
            let page = phone_service::filtered_phones(&store, &config(), &query);

            let total = page.pagination.total_items;
            assert_eq!(page.pagination.total_pages, (total + limit - 1) / limit);
            let expected_len = limit.min((total - (page_no - 1) * limit).max(0));
            assert_eq!(page.data.len() as i64, expected_len);
        }
    }
}

#[test]
fn lookup_by_id_signals_found_and_not_found() {
    let store = fixture_store();

    let phone = phone_service::phone_by_id(&store, 2).expect("phone 2 exists");
    assert_eq!(phone.name, "Galaxy S24 Ultra");

    assert!(phone_service::phone_by_id(&store, 999).is_none());
}

#[test]
fn available_brands_are_unique_and_sorted() {
    let store = PhoneStore::new(vec![
        make_phone(1, "One", "Samsung", 100.0, true),
        make_phone(2, "Two", "Apple", 200.0, true),
        make_phone(3, "Three", "Samsung", 300.0, true),
        make_phone(4, "Four", "Google", 400.0, true),
    ]);

    let brands = phone_service::available_brands(&store);
    assert_eq!(brands.items, vec!["Apple", "Google", "Samsung"]);
}

#[test]
fn price_range_over_the_catalogue() {
    let store = fixture_store();
    let range = phone_service::price_range(&store);
    assert_eq!(range.min, 999.0);
    assert_eq!(range.max, 1299.0);

    let empty = phone_service::price_range(&PhoneStore::empty());
    assert_eq!(empty.min, 0.0);
    assert_eq!(empty.max, 0.0);
}

#[test]
fn missing_data_file_degrades_to_an_empty_catalogue() {
    let store = PhoneStore::load_or_empty("does/not/exist.json");
    assert!(store.is_empty());

    let page = phone_service::filtered_phones(&store, &config(), &PhoneQuery::default());
    assert!(page.data.is_empty());
    assert_eq!(page.pagination.total_pages, 0);
}

#[test]
fn load_rejects_malformed_records() {
    let dir = std::env::temp_dir();

    let bad_json = dir.join("phone-catalogue-bad-json.json");
    std::fs::write(&bad_json, "not json").expect("write fixture");
    assert!(PhoneStore::load(&bad_json).is_err());

    let dup_ids = dir.join("phone-catalogue-dup-ids.json");
    std::fs::write(
        &dup_ids,
        serde_json::to_string(&vec![
            make_phone(1, "One", "Acme", 100.0, true),
            make_phone(1, "Two", "Acme", 200.0, true),
        ])
        .expect("serialize fixture"),
    )
    .expect("write fixture");
    assert!(PhoneStore::load(&dup_ids).is_err());
}

#[test]
fn seed_catalogue_loads_and_validates() {
    let store = PhoneStore::load("data/phones.json").expect("seed data is valid");
    assert!(!store.is_empty());
    assert!(store.phone_by_id(1).is_some());
}
