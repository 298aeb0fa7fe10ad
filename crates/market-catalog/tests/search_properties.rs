//! Property tests for catalog search and ranking.

use market_catalog::prelude::*;
use proptest::prelude::*;

const CATEGORIES: &[&str] = &["Produce", "bakery", "CRAFTS", "Food"];
const WORDS: &[&str] = &["Apple", "apple pie", "Pear", "Bread", "RYE", "Jam", "Pineapple"];
const QUERIES: &[&str] = &["apple", "APPLE", " pie ", "e", "bread", "zzz", "", "   "];

fn arb_catalog() -> impl Strategy<Value = Vec<Vendor>> {
    // A handful of price points so ties are common.
    let product = (0..WORDS.len(), 0i64..5);
    let vendor = (0..CATEGORIES.len(), 0.0f64..=5.0, prop::collection::vec(product, 0..6));
    prop::collection::vec(vendor, 0..6).prop_map(|vendors| {
        vendors
            .into_iter()
            .enumerate()
            .map(|(vi, (cat, rating, products))| {
                let vendor_id = format!("v{}", vi);
                let mut vendor = Vendor::new(
                    vendor_id.clone(),
                    format!("Vendor {}", vi),
                    VendorCategory::parse(CATEGORIES[cat]),
                    rating,
                );
                for (pi, (word, cents)) in products.into_iter().enumerate() {
                    vendor = vendor.with_product(Product::new(
                        format!("{}-p{}", vendor_id, pi),
                        vendor_id.clone(),
                        WORDS[word],
                        Money::new(cents, Currency::USD),
                    ));
                }
                vendor
            })
            .collect()
    })
}

/// Position of each product in vendor-major, product-minor order.
fn enumeration_index(catalog: &[Vendor], id: &ProductId) -> usize {
    catalog
        .iter()
        .flat_map(|v| v.products.iter())
        .position(|p| &p.id == id)
        .expect("result item must come from the catalog")
}

fn assert_ranked(catalog: &[Vendor], results: &[SearchResultItem]) {
    for pair in results.windows(2) {
        let (a, b) = (&pair[0], &pair[1]);
        assert!(a.price.amount_cents <= b.price.amount_cents);
        if a.price.amount_cents == b.price.amount_cents {
            assert!(enumeration_index(catalog, &a.id) < enumeration_index(catalog, &b.id));
        }
    }
}

proptest! {
    #[test]
    fn empty_filters_return_every_product(catalog in arb_catalog()) {
        let results = search(&catalog, &SearchFilters::default());
        let total: usize = catalog.iter().map(|v| v.products.len()).sum();

        prop_assert_eq!(results.len(), total);
        prop_assert!(results.iter().all(|r| !r.low_price));

        let mut ids: Vec<&str> = results.iter().map(|r| r.id.as_str()).collect();
        ids.sort();
        ids.dedup();
        prop_assert_eq!(ids.len(), total);
        assert_ranked(&catalog, &results);
    }

    #[test]
    fn category_filter_keeps_only_matching_vendors(
        catalog in arb_catalog(),
        cat in 0..CATEGORIES.len(),
    ) {
        let filter = CATEGORIES[cat].to_lowercase();
        let results = search(&catalog, &SearchFilters::new().with_category(filter.clone()));

        for item in &results {
            let vendor = catalog.iter().find(|v| v.id == item.vendor_id).unwrap();
            prop_assert!(vendor.category.matches(&filter));
            prop_assert_eq!(&item.vendor_name, &vendor.name);
            prop_assert!(!item.low_price);
        }
        let expected: usize = catalog
            .iter()
            .filter(|v| v.category.matches(&filter))
            .map(|v| v.products.len())
            .sum();
        prop_assert_eq!(results.len(), expected);
        assert_ranked(&catalog, &results);
    }

    #[test]
    fn query_results_contain_query_and_flag_minimum(
        catalog in arb_catalog(),
        q in 0..QUERIES.len(),
    ) {
        let raw = QUERIES[q];
        let needle = raw.trim().to_lowercase();
        let results = search(&catalog, &SearchFilters::new().with_query(raw));
        assert_ranked(&catalog, &results);

        if needle.is_empty() {
            prop_assert!(results.iter().all(|r| !r.low_price));
            return Ok(());
        }

        for item in &results {
            prop_assert!(item.name.to_lowercase().contains(&needle));
        }
        if let Some(min) = results.iter().map(|r| r.price.amount_cents).min() {
            for item in &results {
                prop_assert_eq!(item.low_price, item.price.amount_cents == min);
            }
        }
    }

    #[test]
    fn pagination_preserves_ranking(
        catalog in arb_catalog(),
        page in 1usize..5,
        per_page in 1usize..5,
    ) {
        let ranked = search(&catalog, &SearchFilters::new().with_query("a"));
        let page_of = paginate(ranked.clone(), page, per_page);
        let offset = (page - 1) * per_page;
        let expected: Vec<_> = ranked.into_iter().skip(offset).take(per_page).collect();
        prop_assert_eq!(page_of.items, expected);
    }
}

#[test]
fn low_price_scenario_from_storefront() {
    let usd = |amount: f64| Money::from_decimal(amount, Currency::USD);
    let catalog = vec![
        Vendor::new("a", "Vendor A", VendorCategory::Produce, 4.5)
            .with_product(Product::new("apple", "a", "Apple", usd(3.99)))
            .with_product(Product::new("pear", "a", "Pear", usd(4.50))),
        Vendor::new("b", "Vendor B", VendorCategory::Bakery, 4.0)
            .with_product(Product::new("pie", "b", "Apple Pie", usd(8.00))),
    ];

    let results = search(&catalog, &SearchFilters::new().with_query("apple"));
    let ids: Vec<(&str, bool)> = results.iter().map(|r| (r.id.as_str(), r.low_price)).collect();
    assert_eq!(ids, vec![("apple", true), ("pie", false)]);

    let results = search(&catalog, &SearchFilters::new().with_category("Produce"));
    let ids: Vec<(&str, bool)> = results.iter().map(|r| (r.id.as_str(), r.low_price)).collect();
    assert_eq!(ids, vec![("apple", false), ("pear", false)]);
}

#[test]
fn catalog_round_trips_through_search_and_lookup() {
    let json = r#"{
        "vendors": [
            {"id": "v1", "name": "Threads", "category": "Clothing", "rating": 4.9,
             "products": [
                {"id": "t1", "vendor_id": "v1", "name": "Linen Shirt",
                 "price": {"amount_cents": 4200}, "sizes": ["S", "M", "L"]},
                {"id": "t2", "vendor_id": "v1", "name": "Wool Socks",
                 "price": {"amount_cents": 1200}, "colors": ["Grey"]}
             ]}
        ]
    }"#;
    let catalog = Catalog::from_json(json).unwrap();
    assert!(catalog.validate().is_empty());

    let results = search(catalog.vendors(), &SearchFilters::new().with_query("sOcK"));
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].colors, vec!["Grey".to_string()]);
    assert!(results[0].low_price);

    let (vendor, product) = catalog.require_product(&results[0].id).unwrap();
    assert_eq!(vendor.id, results[0].vendor_id);
    assert_eq!(product.name, results[0].name);
}
