//! Suggest command.

use anyhow::Result;
use serde::Serialize;
use storefront_commerce::search::{search_link, suggestions};

use super::SuggestArgs;
use crate::context::Context;

#[derive(Serialize)]
struct Suggestion<'a> {
    text: &'a str,
    link: Option<String>,
}

/// Run the suggest command.
pub fn run(args: SuggestArgs, ctx: &Context) -> Result<()> {
    let search = &ctx.storefront().search;

    if !ctx.storefront().features.search_suggestions {
        ctx.output.warn("Search suggestions are disabled in the configuration");
        return Ok(());
    }

    let matches: Vec<Suggestion<'_>> =
        suggestions(&args.text, &search.suggestions, search.suggestion_min_chars)
            .into_iter()
            .map(|text| Suggestion {
                text,
                link: search_link(&search.search_page, text),
            })
            .collect();

    if ctx.output.is_json() {
        ctx.output.json(&matches);
        return Ok(());
    }

    if args.text.trim().chars().count() < search.suggestion_min_chars {
        ctx.output.info(&format!(
            "Digite pelo menos {} caracteres",
            search.suggestion_min_chars
        ));
        return Ok(());
    }

    if matches.is_empty() {
        ctx.output.info("Nenhuma sugestão");
        return Ok(());
    }

    ctx.output.header("Sugestões");
    for suggestion in &matches {
        match &suggestion.link {
            Some(link) => ctx.output.kv(suggestion.text, link),
            None => ctx.output.list_item(suggestion.text),
        }
    }
    Ok(())
}
