//! Removable tags describing the active filters.

use crate::catalog::Category;
use crate::search::FilterCriteria;
use serde::{Deserialize, Serialize};

/// One active filter, as shown above the result grid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum FilterTag {
    Category { category: Category },
    Rating { min: f64 },
    Discount { min: u8 },
    FreeShipping,
    Price { min: Option<f64>, max: Option<f64> },
}

impl FilterTag {
    /// Text on the tag.
    pub fn label(&self) -> String {
        match self {
            FilterTag::Category { category } => category.label().to_string(),
            FilterTag::Rating { min } => format!("{} estrelas ou mais", format_number(*min)),
            FilterTag::Discount { min } => format!("{}% ou mais", min),
            FilterTag::FreeShipping => "Frete grátis".to_string(),
            FilterTag::Price { min, max } => format!(
                "R$ {} - R$ {}",
                min.map_or_else(|| "0".to_string(), format_number),
                max.map_or_else(|| "\u{221e}".to_string(), format_number),
            ),
        }
    }

    /// Tags for every active selection, in widget order.
    ///
    /// The text query is not a tag; it lives in the search box.
    pub fn from_criteria(criteria: &FilterCriteria) -> Vec<FilterTag> {
        let mut tags: Vec<FilterTag> = criteria
            .categories
            .iter()
            .map(|&category| FilterTag::Category { category })
            .collect();

        if let Some(min) = criteria.min_rating {
            tags.push(FilterTag::Rating { min });
        }
        if let Some(min) = criteria.min_discount {
            tags.push(FilterTag::Discount { min });
        }
        if criteria.require_free_shipping {
            tags.push(FilterTag::FreeShipping);
        }
        if criteria.min_price.is_some() || criteria.max_price.is_some() {
            tags.push(FilterTag::Price {
                min: criteria.min_price,
                max: criteria.max_price,
            });
        }
        tags
    }

    /// Clear the selection this tag stands for.
    pub fn remove_from(&self, criteria: &mut FilterCriteria) {
        match self {
            FilterTag::Category { category } => {
                criteria.categories.remove(category);
            }
            FilterTag::Rating { .. } => criteria.min_rating = None,
            FilterTag::Discount { .. } => criteria.min_discount = None,
            FilterTag::FreeShipping => criteria.require_free_shipping = false,
            FilterTag::Price { .. } => {
                criteria.min_price = None;
                criteria.max_price = None;
            }
        }
    }
}

/// Whole numbers without decimals, others with two.
fn format_number(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{:.0}", value)
    } else {
        format!("{:.2}", value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_tags_for_default() {
        assert!(FilterTag::from_criteria(&FilterCriteria::new().with_query("tv")).is_empty());
    }

    #[test]
    fn test_tags_in_order() {
        let criteria = FilterCriteria::new()
            .with_category(Category::Sports)
            .with_category(Category::Electronics)
            .with_min_discount(30)
            .with_free_shipping()
            .with_price_range(Some(100.0), None);

        let labels: Vec<String> = FilterTag::from_criteria(&criteria)
            .iter()
            .map(FilterTag::label)
            .collect();
        assert_eq!(
            labels,
            vec![
                "Eletrônicos",
                "Esportes",
                "30% ou mais",
                "Frete grátis",
                "R$ 100 - R$ \u{221e}",
            ]
        );
    }

    #[test]
    fn test_price_label() {
        let tag = FilterTag::Price {
            min: None,
            max: Some(499.9),
        };
        assert_eq!(tag.label(), "R$ 0 - R$ 499.90");
    }

    #[test]
    fn test_remove_from() {
        let mut criteria = FilterCriteria::new()
            .with_category(Category::Home)
            .with_min_rating(4.0)
            .with_price_range(Some(10.0), Some(20.0));

        FilterTag::Category {
            category: Category::Home,
        }
        .remove_from(&mut criteria);
        FilterTag::Price {
            min: Some(10.0),
            max: Some(20.0),
        }
        .remove_from(&mut criteria);

        assert!(criteria.categories.is_empty());
        assert_eq!(criteria.min_price, None);
        assert_eq!(criteria.max_price, None);
        assert_eq!(criteria.min_rating, Some(4.0));
    }
}
