use std::cmp::Ordering;

use vitrine_catalog::Product;

use crate::selection::{Selection, SortKey};

/// Derive the ordered product view for the current selection.
///
/// Stage order is fixed because each stage assumes the previous ones
/// already narrowed the set:
///
/// 1. category filter — an empty selected set imposes no constraint;
/// 2. subcategory filter — same rule, ANDed with stage 1;
/// 3. search filter — runs only when `search_visible` is set *and* the
///    selection carries a non-empty term; case-insensitive substring match
///    on the product name. The visibility flag is an explicit input, never
///    inferred from the term;
/// 4. sort — `Relevance` leaves the post-filter order untouched; every
///    other key sorts stably, so equal-key products keep their relative
///    catalog order.
///
/// Pure function: inputs are never mutated and a fresh sequence is
/// returned on every call. An empty catalog yields an empty view.
pub fn compute<'a>(
    catalog: &'a [Product],
    selection: &Selection,
    search_visible: bool,
) -> Vec<&'a Product> {
    let mut items: Vec<&Product> = catalog.iter().collect();

    if !selection.categories().is_empty() {
        items.retain(|p| selection.categories().contains(&p.category));
    }

    if !selection.subcategories().is_empty() {
        items.retain(|p| selection.subcategories().contains(&p.sub_category));
    }

    if search_visible {
        if let Some(term) = selection.search_term().filter(|t| !t.is_empty()) {
            let needle = term.to_lowercase();
            items.retain(|p| p.name.to_lowercase().contains(&needle));
        }
    }

    match selection.sort_key() {
        SortKey::Relevance => {}
        key => items.sort_by(|a, b| ordering(key, a, b)),
    }

    items
}

/// Comparator for a sort key, dispatched exhaustively.
///
/// Unpriced products (`price == None`) rank lowest: first under
/// `PriceAscending`, last under `PriceDescending`. Name ordering is
/// case-insensitive (Unicode lowercase) lexicographic.
fn ordering(key: SortKey, a: &Product, b: &Product) -> Ordering {
    match key {
        SortKey::Relevance => Ordering::Equal,
        SortKey::PriceAscending => a.price.cmp(&b.price),
        SortKey::PriceDescending => b.price.cmp(&a.price),
        SortKey::NameAscending => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
        SortKey::NameDescending => b.name.to_lowercase().cmp(&a.name.to_lowercase()),
    }
}
