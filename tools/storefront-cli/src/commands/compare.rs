//! Compare command.

use anyhow::{bail, Context as _, Result};
use serde::Serialize;
use storefront_commerce::compare::{CompareList, ComparisonSlots, ScoredProduct, COMPARE_SLOTS};
use storefront_commerce::ProductId;

use super::CompareArgs;
use crate::context::Context;
use crate::output::{stock_badge, star_string};

const WIDTHS: [usize; 8] = [5, 24, 12, 10, 6, 7, 18, 8];

#[derive(Serialize)]
struct ComparisonReport<'a> {
    products: Vec<ScoredProduct<'a>>,
    winner: Option<ScoredProduct<'a>>,
}

/// Parse a product id argument.
pub fn parse_id(raw: &str) -> Result<ProductId> {
    raw.parse::<ProductId>()
        .with_context(|| format!("Invalid product id: {}", raw))
}

/// Run the compare command.
pub fn run(args: CompareArgs, ctx: &Context) -> Result<()> {
    let catalog = ctx.catalog()?;

    let slots = if args.ids.is_empty() {
        let store = ctx.open_store()?;
        let compare = &ctx.storefront().compare;
        let list = CompareList::load(&store, &compare.storage_key, compare.max_products)?;
        ctx.output.debug(&format!("Using {} products from the compare list", list.len()));
        list.to_slots(&catalog)?
    } else {
        if args.ids.len() > COMPARE_SLOTS {
            bail!("At most {} products can be compared", COMPARE_SLOTS);
        }
        let mut slots = ComparisonSlots::new();
        for (slot, raw) in args.ids.iter().enumerate() {
            let product = catalog.require(parse_id(raw)?)?.clone();
            slots.place(slot, product)?;
        }
        slots
    };

    let report = ComparisonReport {
        products: slots.scores(),
        winner: slots.winner(),
    };

    if ctx.output.is_json() {
        ctx.output.json(&report);
        return Ok(());
    }

    if !slots.has_products() {
        ctx.output.info("Nenhum produto para comparar. Adicione produtos à lista de comparação.");
        return Ok(());
    }

    ctx.output.header("Comparação");
    ctx.output.table_row(
        &["Slot", "Produto", "Preço", "Avaliação", "Desc.", "Frete", "Estoque", "Pontos"],
        &WIDTHS,
    );
    for scored in &report.products {
        let product = scored.product;
        let slot = (scored.slot + 1).to_string();
        let price = product.price.display();
        let stars = star_string(product.rating);
        let discount = product
            .discount_badge()
            .unwrap_or_else(|| "Sem desconto".to_string());
        let shipping = if product.free_shipping { "Grátis" } else { "Pago" };
        let stock = stock_badge(product.stock);
        let score = format!("{:.2}", scored.score);
        ctx.output.table_row(
            &[
                &slot,
                &product.name,
                &price,
                &stars,
                &discount,
                shipping,
                &stock,
                &score,
            ],
            &WIDTHS,
        );
    }

    println!();
    match &report.winner {
        Some(winner) => ctx.output.success(&format!(
            "Melhor custo-benefício: {} ({:.2} pontos)",
            winner.product.name, winner.score
        )),
        None => ctx
            .output
            .info("Adicione pelo menos 2 produtos para ver o vencedor"),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_id() {
        assert_eq!(parse_id(" 3 ").unwrap(), ProductId::new(3));
        assert!(parse_id("abc").is_err());
    }
}
