//! Compare basket commands.

use anyhow::{bail, Result};
use storefront_cache::Cache;
use storefront_commerce::catalog::Catalog;
use storefront_commerce::compare::{CompareAdd, CompareList};
use storefront_commerce::notifications::{NotificationCenter, NotificationKind};
use storefront_commerce::CommerceError;

use super::compare::parse_id;
use super::{CompareListArgs, CompareListCommand};
use crate::context::Context;

/// Run the compare-list command.
pub fn run(args: CompareListArgs, ctx: &Context) -> Result<()> {
    let store = ctx.open_store()?;
    let compare = &ctx.storefront().compare;
    let mut list = CompareList::load(&store, &compare.storage_key, compare.max_products)?;
    let catalog = ctx.catalog()?;

    match args.command {
        CompareListCommand::Add { id } => add(&id, &mut list, &catalog, &store, ctx)?,
        CompareListCommand::Remove { id } => {
            let id = parse_id(&id)?;
            if list.remove(id) {
                list.save(&store, &compare.storage_key)?;
                ctx.save_store(&store)?;
                ctx.output.success(&format!("Produto {} removido da comparação", id));
            } else {
                ctx.output.warn(&format!("Produto {} não está na lista", id));
            }
        }
        CompareListCommand::Clear => {
            list.clear();
            list.save(&store, &compare.storage_key)?;
            ctx.save_store(&store)?;
            ctx.output.success("Lista de comparação limpa");
        }
        CompareListCommand::Show => {}
    }

    show(&list, &catalog, ctx);
    Ok(())
}

fn add(
    raw: &str,
    list: &mut CompareList,
    catalog: &Catalog,
    store: &Cache,
    ctx: &Context,
) -> Result<()> {
    if !ctx.storefront().features.compare_button {
        bail!("The compare button is disabled in the configuration");
    }

    let product = catalog.require(parse_id(raw)?)?;
    let outcome = match list.add(product.id) {
        Ok(outcome) => outcome,
        Err(CommerceError::CompareListFull(max)) => bail!(
            "Você já tem {} produtos para comparar. Remova um para adicionar outro.",
            max
        ),
        Err(e) => return Err(e.into()),
    };

    if outcome == CompareAdd::AlreadyListed {
        ctx.output.info(&format!("{} já está na comparação", product.name));
        return Ok(());
    }

    let compare = &ctx.storefront().compare;
    list.save(store, &compare.storage_key)?;

    let settings = &ctx.storefront().notifications;
    if ctx.storefront().features.notifications {
        let mut center = NotificationCenter::load(store, &settings.storage_key, settings.badge_cap)?;
        center.show(
            "Produto adicionado!",
            format!("{} foi adicionado à comparação", product.name),
            NotificationKind::Success,
            3_000,
        );
        center.save(store, &settings.storage_key)?;
    }

    ctx.save_store(store)?;
    ctx.output
        .success(&format!("{} foi adicionado à comparação", product.name));
    Ok(())
}

fn show(list: &CompareList, catalog: &Catalog, ctx: &Context) {
    if ctx.output.is_json() {
        ctx.output.json(&list.ids());
        return;
    }

    ctx.output.header(&format!(
        "Comparar ({})",
        list.badge().map_or_else(|| "vazio".to_string(), |n| n.to_string())
    ));
    for id in list.ids() {
        match catalog.get(*id) {
            Some(product) => ctx
                .output
                .list_item(&format!("{} {}  {}", id, product.name, product.price)),
            None => ctx
                .output
                .list_item(&format!("{} (fora do catálogo)", id)),
        }
    }
}
