//! Comparison scoring.

use crate::catalog::Product;
use serde::Serialize;

/// Value score of a product on the comparison page.
///
/// `10000 / price + rating * 20 + discount + (free shipping ? 10 : 0)`.
/// A zero price scores infinity.
pub fn score(product: &Product) -> f64 {
    let price_score = 10_000.0 / product.price.to_decimal();
    let rating_score = product.rating * 20.0;
    let discount_score = f64::from(product.discount);
    let shipping_score = if product.free_shipping { 10.0 } else { 0.0 };

    price_score + rating_score + discount_score + shipping_score
}

/// A compared product together with its slot and score.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ScoredProduct<'a> {
    pub slot: usize,
    pub product: &'a Product,
    pub score: f64,
}

/// Pick the highest-scoring entry. The earliest entry wins a tie.
///
/// Returns `None` for fewer than two entries: a lone product has nothing
/// to win against.
pub fn pick_winner<'a>(scored: &[ScoredProduct<'a>]) -> Option<ScoredProduct<'a>> {
    if scored.len() < 2 {
        return None;
    }

    let mut best = scored[0];
    for candidate in &scored[1..] {
        if candidate.score > best.score {
            best = *candidate;
        }
    }
    Some(best)
}
