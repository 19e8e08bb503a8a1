//! Storefront domain types and logic.
//!
//! This crate holds the interactive core of the storefront, with no
//! rendering attached:
//!
//! - **Catalog**: Products, categories, the reference catalog
//! - **Search**: Filter criteria, sorting, pagination, search sessions
//! - **Compare**: Comparison slots, value scoring, the compare basket
//! - **Notifications**: Toasts and the notification center
//! - **Detail**: Product page state
//! - **Device**: Handheld and tablet detection
//!
//! # Example
//!
//! ```rust
//! use storefront_commerce::prelude::*;
//!
//! let mut session = SearchSession::new(reference_catalog(), 12);
//! session.toggle_category(Category::Electronics);
//! session.set_min_discount(Some(40));
//!
//! let view = session.view();
//! assert_eq!(view.count, 2);
//! assert_eq!(view.products[0].price.display(), "R$ 2199.00");
//! ```

pub mod config;
pub mod error;
pub mod ids;
pub mod money;

pub mod catalog;
pub mod compare;
pub mod detail;
pub mod device;
pub mod notifications;
pub mod search;

pub use config::StorefrontConfig;
pub use error::CommerceError;
pub use ids::*;
pub use money::{Currency, Money};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::config::StorefrontConfig;
    pub use crate::error::CommerceError;
    pub use crate::ids::*;
    pub use crate::money::{Currency, Money};

    // Catalog
    pub use crate::catalog::{
        reference_catalog, Catalog, Category, Product, StarRating, StockStatus,
    };

    // Search
    pub use crate::search::{
        FilterCriteria, FilterInputs, FilterTag, PageState, Pagination, SearchSession,
        SearchView, SortKey,
    };

    // Compare
    pub use crate::compare::{CompareList, ComparisonSlots, ScoredProduct};

    // Notifications
    pub use crate::notifications::{Notification, NotificationCenter, NotificationKind, Toast};

    // Detail
    pub use crate::detail::{ProductPage, QuantitySelector};
    pub use crate::device::DeviceClass;
}
