//! Search state for one page view.

use crate::catalog::{Catalog, Category, Product};
use crate::search::{
    query_param, FilterCriteria, FilterInputs, FilterTag, PageState, Pagination, SortKey,
};
use serde::Serialize;

/// Owns the criteria, sort key, page and ordered results of a search page.
///
/// Every criteria-changing call recomputes the results from the catalog,
/// applies the active sort and returns to page 1. Sort changes reorder the
/// current results and keep the page.
///
/// # Example
///
/// ```
/// use storefront_commerce::catalog::reference_catalog;
/// use storefront_commerce::search::{SearchSession, SortKey};
///
/// let mut session = SearchSession::from_query_string(reference_catalog(), "?q=pro", 12);
/// session.set_sort(SortKey::PriceAsc);
///
/// let names: Vec<_> = session.results().iter().map(|p| p.name.as_str()).collect();
/// assert_eq!(names, ["AirPods Pro 2", "iPhone 15 Pro Max"]);
/// ```
#[derive(Debug, Clone)]
pub struct SearchSession {
    catalog: Catalog,
    criteria: FilterCriteria,
    sort: SortKey,
    page: PageState,
    filtered: Vec<Product>,
    results: Vec<Product>,
}

impl SearchSession {
    /// Start a session showing the whole catalog.
    pub fn new(catalog: Catalog, page_size: usize) -> Self {
        let filtered = catalog.products().to_vec();
        let results = filtered.clone();
        tracing::debug!(products = catalog.len(), page_size, "search session started");
        Self {
            catalog,
            criteria: FilterCriteria::default(),
            sort: SortKey::Relevance,
            page: PageState::new(page_size),
            filtered,
            results,
        }
    }

    /// Start a session from the page's URL query string, honouring `q`.
    pub fn from_query_string(catalog: Catalog, query_string: &str, page_size: usize) -> Self {
        let mut session = Self::new(catalog, page_size);
        if let Some(q) = query_param(query_string) {
            session.set_query(&q);
        }
        session
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn sort_key(&self) -> SortKey {
        self.sort
    }

    pub fn page(&self) -> &PageState {
        &self.page
    }

    /// The full ordered result set.
    pub fn results(&self) -> &[Product] {
        &self.results
    }

    pub fn result_count(&self) -> usize {
        self.results.len()
    }

    /// Results on the current page.
    pub fn page_items(&self) -> &[Product] {
        self.page.slice(&self.results)
    }

    /// Replace the text query.
    pub fn set_query(&mut self, query: &str) {
        self.criteria.set_query(query);
        self.recompute();
    }

    /// Replace all criteria at once.
    pub fn set_criteria(&mut self, criteria: FilterCriteria) {
        self.criteria = criteria;
        self.recompute();
    }

    /// Take a fresh snapshot of every filter widget, including the sort selector.
    pub fn apply_inputs(&mut self, inputs: &FilterInputs) {
        self.criteria = inputs.criteria();
        self.sort = inputs.sort_key();
        self.recompute();
    }

    /// Check or uncheck a category box.
    pub fn toggle_category(&mut self, category: Category) {
        if !self.criteria.categories.remove(&category) {
            self.criteria.categories.insert(category);
        }
        self.recompute();
    }

    /// Set both price bounds, e.g. from a price-range shortcut.
    pub fn set_price_range(&mut self, min: Option<f64>, max: Option<f64>) {
        self.criteria.min_price = min;
        self.criteria.max_price = max;
        self.recompute();
    }

    pub fn set_min_rating(&mut self, min_rating: Option<f64>) {
        self.criteria.min_rating = min_rating;
        self.recompute();
    }

    pub fn set_min_discount(&mut self, min_discount: Option<u8>) {
        self.criteria.min_discount = min_discount;
        self.recompute();
    }

    pub fn set_free_shipping(&mut self, required: bool) {
        self.criteria.require_free_shipping = required;
        self.recompute();
    }

    /// Drop the selection behind one active-filter tag.
    pub fn remove_filter(&mut self, tag: &FilterTag) {
        tag.remove_from(&mut self.criteria);
        self.recompute();
    }

    /// Back to the full catalog in relevance order on page 1.
    pub fn clear_filters(&mut self) {
        self.criteria = FilterCriteria::default();
        self.sort = SortKey::Relevance;
        self.recompute();
    }

    /// Reorder the current results. The page is kept.
    pub fn set_sort(&mut self, sort: SortKey) {
        self.sort = sort;
        self.results = sort.apply(&self.filtered);
        tracing::debug!(sort = sort.as_str(), "results re-sorted");
    }

    pub fn next_page(&mut self) {
        self.page.next();
        tracing::debug!(page = self.page.current_page(), "next page");
    }

    pub fn previous_page(&mut self) {
        self.page.previous();
        tracing::debug!(page = self.page.current_page(), "previous page");
    }

    /// Jump straight to `page` (0 means 1). No upper bound, like `next_page`.
    pub fn go_to_page(&mut self, page: usize) {
        self.page.go_to(page);
        tracing::debug!(page = self.page.current_page(), "go to page");
    }

    /// Active filters as removable tags.
    pub fn active_filters(&self) -> Vec<FilterTag> {
        FilterTag::from_criteria(&self.criteria)
    }

    /// Everything the renderer needs to draw the page.
    pub fn view(&self) -> SearchView<'_> {
        SearchView {
            query: self.criteria.query.as_deref(),
            sort: self.sort,
            count: self.results.len(),
            pagination: self.page.summary(self.results.len()),
            products: &self.results,
            page_items: self.page_items(),
            active_filters: self.active_filters(),
            is_empty: self.results.is_empty(),
        }
    }

    fn recompute(&mut self) {
        self.filtered = self.criteria.apply(self.catalog.products());
        self.results = self.sort.apply(&self.filtered);
        self.page.reset();
        tracing::debug!(
            query = self.criteria.query.as_deref().unwrap_or(""),
            sort = self.sort.as_str(),
            results = self.results.len(),
            "search results recomputed"
        );
    }
}

/// Rendering snapshot of a search session.
#[derive(Debug, Clone, Serialize)]
pub struct SearchView<'a> {
    pub query: Option<&'a str>,
    pub sort: SortKey,
    pub count: usize,
    pub pagination: Pagination,
    pub products: &'a [Product],
    pub page_items: &'a [Product],
    pub active_filters: Vec<FilterTag>,
    /// When true the renderer shows the "no results" prompt with a clear action.
    pub is_empty: bool,
}

impl SearchView<'_> {
    /// Results count line, e.g. "Encontramos 3 produtos".
    pub fn headline(&self) -> String {
        format!("Encontramos {} produtos", self.count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::reference_catalog;

    fn session() -> SearchSession {
        SearchSession::new(reference_catalog(), 4)
    }

    #[test]
    fn test_starts_with_full_catalog() {
        let session = session();
        assert_eq!(session.result_count(), 12);
        assert_eq!(session.page().current_page(), 1);
        assert_eq!(session.page_items().len(), 4);
        assert!(session.criteria().is_default());
    }

    #[test]
    fn test_url_query_applied_at_start() {
        let session = SearchSession::from_query_string(reference_catalog(), "?q=Nike", 4);
        assert_eq!(session.result_count(), 1);
        assert_eq!(session.criteria().query.as_deref(), Some("Nike"));
    }

    #[test]
    fn test_criteria_change_resets_page() {
        let mut session = session();
        session.next_page();
        session.next_page();
        assert_eq!(session.page().current_page(), 3);

        session.toggle_category(Category::Electronics);
        assert_eq!(session.page().current_page(), 1);
        assert_eq!(session.result_count(), 5);
    }

    #[test]
    fn test_sort_survives_recompute() {
        let mut session = session();
        session.set_sort(SortKey::PriceAsc);
        session.set_free_shipping(true);

        let prices: Vec<i64> = session
            .results()
            .iter()
            .map(|p| p.price.amount_cents)
            .collect();
        let mut sorted = prices.clone();
        sorted.sort();
        assert_eq!(prices, sorted);
        assert!(session.results().iter().all(|p| p.free_shipping));
    }

    #[test]
    fn test_sort_keeps_page() {
        let mut session = session();
        session.next_page();
        session.set_sort(SortKey::Newest);
        assert_eq!(session.page().current_page(), 2);
        assert_eq!(session.page_items()[0].id.get(), 8);
    }

    #[test]
    fn test_go_to_far_page() {
        let mut session = session();
        session.go_to_page(usize::MAX);
        assert_eq!(session.page().current_page(), usize::MAX);
        assert!(session.page_items().is_empty());

        let view = session.view();
        assert!(view.pagination.is_past_end());
        assert_eq!(view.pagination.start_item(), 0);
        assert_eq!(view.count, 12);

        session.go_to_page(0);
        assert_eq!(session.page().current_page(), 1);
    }

    #[test]
    fn test_toggle_category_twice_restores() {
        let mut session = session();
        session.toggle_category(Category::Games);
        assert_eq!(session.result_count(), 2);
        session.toggle_category(Category::Games);
        assert_eq!(session.result_count(), 12);
    }

    #[test]
    fn test_apply_inputs() {
        let mut session = session();
        session.apply_inputs(&FilterInputs {
            categories: vec!["moda".into()],
            max_price: "50".into(),
            sort: "price-desc".into(),
            ..Default::default()
        });
        assert_eq!(session.sort_key(), SortKey::PriceDesc);
        let names: Vec<_> = session.results().iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Camiseta Básica"]);
    }

    #[test]
    fn test_remove_filter_tag() {
        let mut session = session();
        session.set_free_shipping(true);
        session.set_min_discount(Some(40));
        assert_eq!(session.active_filters().len(), 2);

        session.remove_filter(&FilterTag::Discount { min: 40 });
        assert_eq!(session.active_filters(), vec![FilterTag::FreeShipping]);
        assert_eq!(session.result_count(), 8);
    }

    #[test]
    fn test_empty_results_view() {
        let mut session = session();
        session.set_query("geladeira");
        let view = session.view();
        assert!(view.is_empty);
        assert_eq!(view.count, 0);
        assert_eq!(view.headline(), "Encontramos 0 produtos");
        assert_eq!(view.pagination.total_pages, 1);
    }

    #[test]
    fn test_clear_filters() {
        let mut session = session();
        session.set_query("apple");
        session.set_sort(SortKey::Rating);
        session.next_page();

        session.clear_filters();
        assert_eq!(session.results(), session.catalog().products());
        assert_eq!(session.sort_key(), SortKey::Relevance);
        assert_eq!(session.page().current_page(), 1);
    }
}
