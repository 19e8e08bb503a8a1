//! End-to-end checks of the search and comparison core against the
//! reference catalog.

use storefront_commerce::prelude::*;
use storefront_commerce::search::DEFAULT_PAGE_SIZE;

fn ids(products: &[Product]) -> Vec<u32> {
    products.iter().map(|p| p.id.get()).collect()
}

/// A spread of criteria used by the property checks.
fn criteria_samples() -> Vec<FilterCriteria> {
    vec![
        FilterCriteria::new(),
        FilterCriteria::new().with_query("pro"),
        FilterCriteria::new().with_category(Category::Electronics),
        FilterCriteria::new()
            .with_category(Category::Fashion)
            .with_category(Category::Home),
        FilterCriteria::new().with_price_range(Some(100.0), Some(2500.0)),
        FilterCriteria::new().with_min_rating(4.5).with_free_shipping(),
        FilterCriteria::new().with_min_discount(30),
        FilterCriteria::new().with_query("zzz"),
    ]
}

#[test]
fn default_criteria_return_full_catalog_in_order() {
    let catalog = reference_catalog();
    let results = FilterCriteria::default().apply(catalog.products());
    assert_eq!(results, catalog.products());
}

#[test]
fn filtering_is_idempotent() {
    let catalog = reference_catalog();
    for criteria in criteria_samples() {
        let once = criteria.apply(catalog.products());
        let twice = criteria.apply(&once);
        assert_eq!(once, twice, "criteria {:?}", criteria);
    }
}

#[test]
fn narrowing_never_grows_results() {
    let catalog = reference_catalog();
    let base = FilterCriteria::new().with_category(Category::Electronics);
    let narrower = base.clone().with_min_discount(40);
    let narrowest = narrower.clone().with_query("watch");

    let a = base.apply(catalog.products());
    let b = narrower.apply(catalog.products());
    let c = narrowest.apply(catalog.products());

    assert!(b.len() <= a.len());
    assert!(c.len() <= b.len());
    assert!(b.iter().all(|p| a.contains(p)));
    assert!(c.iter().all(|p| b.contains(p)));
}

#[test]
fn every_sort_is_a_permutation() {
    let catalog = reference_catalog();
    for criteria in criteria_samples() {
        let filtered = criteria.apply(catalog.products());
        for key in SortKey::ALL {
            let mut sorted = ids(&key.apply(&filtered));
            let mut original = ids(&filtered);
            sorted.sort_unstable();
            original.sort_unstable();
            assert_eq!(sorted, original, "{:?} over {:?}", key, criteria);
        }
    }
}

#[test]
fn price_sorts_are_reverses() {
    let catalog = reference_catalog();
    let asc = ids(&SortKey::PriceAsc.apply(catalog.products()));
    let mut desc = ids(&SortKey::PriceDesc.apply(catalog.products()));
    desc.reverse();
    assert_eq!(asc, desc);
}

#[test]
fn previous_on_first_page_stays() {
    let mut session = SearchSession::new(reference_catalog(), DEFAULT_PAGE_SIZE);
    session.previous_page();
    assert_eq!(session.page().current_page(), 1);
}

#[test]
fn query_nike() {
    let catalog = reference_catalog();
    let results = FilterCriteria::new()
        .with_query("nike")
        .apply(catalog.products());

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].name, "Tênis Nike Air Max");
    assert_eq!(results[0].category, Category::Sports);
    assert_eq!(results[0].price.display(), "R$ 479.90");
}

#[test]
fn electronics_with_big_discounts() {
    let catalog = reference_catalog();
    let results = FilterCriteria::new()
        .with_category(Category::Electronics)
        .with_min_discount(40)
        .apply(catalog.products());

    let names: Vec<_> = results.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["Smart TV 65\" 4K", "Apple Watch Series 9"]);
}

#[test]
fn comparison_winner() {
    let catalog = reference_catalog();
    let mut slots = ComparisonSlots::new();
    slots
        .place(0, catalog.require(ProductId::new(1)).unwrap().clone())
        .unwrap();
    slots
        .place(1, catalog.require(ProductId::new(2)).unwrap().clone())
        .unwrap();

    let scores = slots.scores();
    assert!((scores[0].score - 146.71).abs() < 0.01);
    assert!((scores[1].score - 160.84).abs() < 0.01);

    let winner = slots.winner().unwrap();
    assert_eq!(winner.product.name, "Tênis Nike Air Max");
}

#[test]
fn clearing_filters_restores_relevance_view() {
    let catalog = reference_catalog();
    let mut session = SearchSession::new(catalog.clone(), 5);
    session.apply_inputs(&FilterInputs {
        query: "a".into(),
        categories: vec!["eletronicos".into()],
        ratings: vec!["5".into()],
        sort: "price-asc".into(),
        ..Default::default()
    });
    session.next_page();
    assert!(session.result_count() < catalog.len());

    session.clear_filters();
    let view = session.view();
    assert_eq!(view.products, catalog.products());
    assert_eq!(view.sort, SortKey::Relevance);
    assert_eq!(view.pagination.page, 1);
    assert!(view.active_filters.is_empty());
    assert_eq!(ids(view.page_items), vec![1, 2, 3, 4, 5]);
}

#[test]
fn url_query_drives_first_view() {
    let session =
        SearchSession::from_query_string(reference_catalog(), "?q=Smart+TV", DEFAULT_PAGE_SIZE);
    let view = session.view();
    assert_eq!(view.query, Some("Smart TV"));
    assert_eq!(view.count, 1);
    assert_eq!(view.headline(), "Encontramos 1 produtos");
}

#[test]
fn paging_past_the_end_is_empty_not_an_error() {
    let mut session = SearchSession::new(reference_catalog(), 5);
    for _ in 0..5 {
        session.next_page();
    }
    let view = session.view();
    assert_eq!(view.pagination.page, 6);
    assert!(view.pagination.is_past_end());
    assert!(view.page_items.is_empty());
    assert_eq!(view.count, 12);
}
