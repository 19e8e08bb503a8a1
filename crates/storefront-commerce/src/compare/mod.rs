//! Product comparison.
//!
//! Up to four products side by side, a value score per product and a
//! winner once two or more are compared. The compare basket collects
//! products from listing pages before the comparison page is opened.

mod list;
mod score;
mod slots;

pub use list::{CompareAdd, CompareList, COMPARE_LIST_KEY};
pub use score::{pick_winner, score, ScoredProduct};
pub use slots::{selector_candidates, ComparisonSlots, COMPARE_SLOTS};
