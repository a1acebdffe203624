use happyhome_backend::catalog::{group_by, Catalog};

#[test]
fn find_by_slug_returns_none_for_unknown_slugs() {
    let catalog = Catalog::new();
    assert!(catalog.product_by_slug("nonexistent-slug").is_none());
    assert!(catalog.location_by_slug("nonexistent-slug").is_none());
    assert!(catalog.care_service_by_slug("nonexistent-slug").is_none());
}

#[test]
fn find_by_slug_resolves_bundled_records() {
    let catalog = Catalog::new();
    let cane = catalog
        .product_by_slug("adjustable-aluminum-cane")
        .expect("bundled product");
    assert_eq!(cane.id, "mob-001");
    assert_eq!(cane.category_slug, "mobility-aids");

    let la_jolla = catalog.location_by_slug("la-jolla").expect("bundled location");
    assert_eq!(la_jolla.region, "Coastal North County");

    let nursing = catalog
        .care_service_by_slug("skilled-nursing")
        .expect("bundled care service");
    assert_eq!(nursing.title, "Skilled Nursing");
}

#[test]
fn filter_by_category_preserves_catalog_order() {
    let catalog = Catalog::new();
    let wheelchairs = catalog.products_by_category("wheelchairs");
    let slugs: Vec<&str> = wheelchairs.iter().map(|p| p.slug.as_str()).collect();
    assert_eq!(
        slugs,
        vec![
            "lightweight-manual-wheelchair",
            "transport-chair-hand-brakes",
            "premium-power-wheelchair",
        ]
    );
}

#[test]
fn filter_by_unknown_category_is_empty_not_an_error() {
    let catalog = Catalog::new();
    assert!(catalog.products_by_category("time-machines").is_empty());
}

#[test]
fn featured_products_respects_limit_and_order() {
    let catalog = Catalog::new();

    let top_two = catalog.featured_products(Some(2));
    assert_eq!(top_two.len(), 2);
    assert!(top_two.iter().all(|p| p.popular));
    assert_eq!(top_two[0].slug, "adjustable-aluminum-cane");
    assert_eq!(top_two[1].slug, "heavy-duty-quad-cane");

    let all = catalog.featured_products(None);
    assert!(all.len() > 2);
    assert!(all.iter().all(|p| p.popular));

    // A limit beyond the match count returns the full matching set.
    let generous = catalog.featured_products(Some(1000));
    assert_eq!(generous.len(), all.len());
}

#[test]
fn related_products_excludes_the_product_itself() {
    let catalog = Catalog::new();
    let related = catalog.related_products("adjustable-aluminum-cane", 3);
    let slugs: Vec<&str> = related.iter().map(|p| p.slug.as_str()).collect();
    assert_eq!(
        slugs,
        vec!["folding-walking-stick-led", "heavy-duty-quad-cane"]
    );
    assert!(related.iter().all(|p| p.category_slug == "mobility-aids"));
}

#[test]
fn related_products_for_unknown_slug_is_empty() {
    let catalog = Catalog::new();
    assert!(catalog.related_products("unknown-slug", 3).is_empty());
}

#[test]
fn search_is_case_insensitive_over_name_description_and_features() {
    let catalog = Catalog::new();
    let hits = catalog.search_products("LED");
    let slugs: Vec<&str> = hits.iter().map(|p| p.slug.as_str()).collect();
    assert!(slugs.contains(&"folding-walking-stick-led"));
    assert!(slugs.contains(&"led-illuminated-magnifying-glass"));

    // Same matches regardless of query case.
    let lower = catalog.search_products("led");
    assert_eq!(lower.len(), hits.len());

    // "Trendelenburg" only appears in a feature string.
    let feature_hit = catalog.search_products("trendelenburg");
    assert_eq!(feature_hit.len(), 1);
    assert_eq!(feature_hit[0].slug, "full-electric-hospital-bed-package");
}

#[test]
fn empty_search_matches_everything() {
    let catalog = Catalog::new();
    assert_eq!(
        catalog.search_products("").len(),
        catalog.products().len()
    );
}

#[test]
fn derived_category_counts_always_match_the_live_filter() {
    let catalog = Catalog::new();
    let categories = catalog.categories();
    for category in &categories {
        assert_eq!(
            category.product_count,
            catalog.products_by_category(&category.slug).len(),
            "stale product_count for {}",
            category.slug
        );
    }

    let hospital_beds = categories
        .iter()
        .find(|c| c.slug == "hospital-beds")
        .expect("hospital-beds category");
    assert_eq!(hospital_beds.product_count, 3);
    assert_eq!(hospital_beds.name, "Hospital Beds");
    assert!(!hospital_beds.description.is_empty());
}

#[test]
fn categories_appear_in_first_appearance_order() {
    let catalog = Catalog::new();
    let slugs: Vec<String> = catalog.categories().into_iter().map(|c| c.slug).collect();
    assert_eq!(
        slugs,
        vec![
            "mobility-aids",
            "walkers-rollators",
            "wheelchairs",
            "hospital-beds",
            "lift-chairs",
            "bathroom-safety",
            "hearing-aids",
            "oxygen-equipment",
            "daily-living-aids",
        ]
    );
}

#[test]
fn locations_group_by_region_in_first_appearance_order() {
    let catalog = Catalog::new();
    let grouped = catalog.locations_by_region();
    assert_eq!(grouped[0].0, "Central San Diego");

    let coastal_north = grouped
        .iter()
        .find(|(region, _)| region == "Coastal North County")
        .expect("Coastal North County group");
    let slugs: Vec<&str> = coastal_north.1.iter().map(|l| l.slug.as_str()).collect();
    assert_eq!(
        slugs,
        vec![
            "la-jolla",
            "del-mar",
            "encinitas",
            "carlsbad",
            "oceanside",
            "solana-beach",
        ]
    );
}

#[test]
fn group_by_preserves_item_order_within_groups() {
    let items = vec![("a", 1), ("b", 2), ("a", 3), ("c", 4), ("b", 5)];
    let grouped = group_by(&items, |(k, _)| *k);
    let keys: Vec<&str> = grouped.iter().map(|(k, _)| *k).collect();
    assert_eq!(keys, vec!["a", "b", "c"]);
    let a_values: Vec<i32> = grouped[0].1.iter().map(|(_, v)| *v).collect();
    assert_eq!(a_values, vec![1, 3]);
}

#[test]
fn stats_reflect_the_bundled_catalog() {
    let catalog = Catalog::new();
    let stats = catalog.stats();
    assert_eq!(stats.total_products, 26);
    assert_eq!(stats.total_categories, 9);
    assert_eq!(stats.featured_products, 19);
    assert_eq!(catalog.locations().len(), 15);
    assert_eq!(catalog.care_services().len(), 6);
}
