//! Search command.

use anyhow::Result;
use storefront_commerce::search::{query_param, SearchSession, SearchView};

use super::SearchArgs;
use crate::context::Context;
use crate::output::star_string;

const WIDTHS: [usize; 7] = [4, 24, 12, 12, 6, 10, 8];

/// Run the search command.
pub fn run(args: SearchArgs, ctx: &Context) -> Result<()> {
    let mut inputs = args.inputs();
    if inputs.query.trim().is_empty() {
        if let Some(url) = &args.url {
            inputs.query = query_param(url).unwrap_or_default();
        }
    }

    let catalog = ctx.catalog()?;
    let mut session = SearchSession::new(catalog, ctx.storefront().search.page_size);
    session.apply_inputs(&inputs);
    session.go_to_page(args.page);

    let view = session.view();
    if ctx.output.is_json() {
        ctx.output.json(&view);
        return Ok(());
    }

    render(&view, ctx);
    Ok(())
}

fn render(view: &SearchView<'_>, ctx: &Context) {
    let title = match view.query {
        Some(q) => format!("Resultados para \"{}\"", q),
        None => "Todos os produtos".to_string(),
    };
    ctx.output.header(&title);
    ctx.output.info(&view.headline());
    ctx.output.debug(&format!("Ordenação: {}", view.sort.display_name()));

    if !view.active_filters.is_empty() {
        ctx.output.info("Filtros ativos:");
        for tag in &view.active_filters {
            ctx.output.list_item(&tag.label());
        }
    }

    if view.is_empty {
        ctx.output.warn("Nenhum produto encontrado");
        ctx.output
            .info("Tente outros termos ou limpe os filtros (rode o comando sem filtros)");
        return;
    }

    if view.page_items.is_empty() {
        ctx.output.warn(&format!(
            "Página {} está além da última ({})",
            view.pagination.page, view.pagination.total_pages
        ));
        return;
    }

    println!();
    ctx.output.table_row(
        &["ID", "Produto", "Categoria", "Preço", "Desc.", "Avaliação", "Frete"],
        &WIDTHS,
    );
    for product in view.page_items {
        let id = product.id.to_string();
        let price = product.price.display();
        let discount = product.discount_badge().unwrap_or_default();
        let stars = star_string(product.rating);
        let shipping = if product.free_shipping { "Grátis" } else { "" };
        ctx.output.table_row(
            &[
                &id,
                &product.name,
                product.category.label(),
                &price,
                &discount,
                &stars,
                shipping,
            ],
            &WIDTHS,
        );
    }

    let p = &view.pagination;
    println!();
    ctx.output.kv(
        "Página",
        &format!(
            "{} de {} (itens {}-{} de {})",
            p.page,
            p.total_pages,
            p.start_item(),
            p.end_item(),
            p.total
        ),
    );
}
