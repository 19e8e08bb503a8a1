//! Search module.
//!
//! Filter criteria, sorting, pagination and the search-page session that
//! ties them together.

mod criteria;
mod inputs;
mod pagination;
mod query;
mod session;
mod sort;
mod tags;

pub use criteria::FilterCriteria;
pub use inputs::{parse_decimal, FilterInputs};
pub use pagination::{PageState, Pagination, DEFAULT_PAGE_SIZE};
pub use query::{
    param, query_param, search_link, suggestions, url_decode, url_encode, DEFAULT_SUGGESTIONS,
};
pub use session::{SearchSession, SearchView};
pub use sort::SortKey;
pub use tags::FilterTag;
