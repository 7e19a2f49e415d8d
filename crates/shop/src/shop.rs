use tracing::debug;

use vitrine_catalog::{Catalog, Product};
use vitrine_collection::{compute, Selection};
use vitrine_core::{DomainError, DomainResult, ProductId};
use vitrine_detail::ProductView;

use crate::config::ShopConfig;
use crate::search::SearchState;

/// How many related products a detail page shows.
const RELATED_LIMIT: usize = 5;

/// The storefront context: catalog snapshot, config, and search state.
///
/// Collection and detail logic stay pure; this type only holds the state
/// the host owns and passes snapshots of it into those calls. The search
/// term lives here (next to its visibility toggle), so `browse` merges it
/// into the selection before invoking the engine.
#[derive(Debug, Clone, Default)]
pub struct Shop {
    catalog: Catalog,
    config: ShopConfig,
    search: SearchState,
}

impl Shop {
    pub fn new(catalog: Catalog) -> Self {
        Self::with_config(catalog, ShopConfig::default())
    }

    pub fn with_config(catalog: Catalog, config: ShopConfig) -> Self {
        Self {
            catalog,
            config,
            search: SearchState::default(),
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn config(&self) -> &ShopConfig {
        &self.config
    }

    pub fn search(&self) -> &SearchState {
        &self.search
    }

    /// Replace the search state. The caller applies updates between
    /// queries; the engine itself never mutates it.
    pub fn set_search(&mut self, search: SearchState) {
        self.search = search;
    }

    /// Evaluate the collection page for `selection`.
    ///
    /// The shop-held search term overrides whatever term the selection
    /// carries; visibility is passed through as the engine's explicit
    /// search flag.
    pub fn browse(&self, selection: &Selection) -> Vec<&Product> {
        let selection = match self.search.term() {
            Some(term) => selection.with_search_term(term),
            None => selection.without_search_term(),
        };

        let view = compute(self.catalog.products(), &selection, self.search.is_visible());
        debug!(
            total = self.catalog.len(),
            shown = view.len(),
            sort = ?selection.sort_key(),
            search_visible = self.search.is_visible(),
            "collection view computed"
        );
        view
    }

    /// Detail-page lookup; an unknown id is simply `None`.
    pub fn product(&self, id: &ProductId) -> Option<&Product> {
        self.catalog.get(id)
    }

    /// Open a detail view for a product: first image selected, no size.
    pub fn view(&self, id: &ProductId) -> Option<ProductView<'_>> {
        self.product(id).map(ProductView::new)
    }

    /// Cross-sell products for a detail page (same category and
    /// subcategory).
    pub fn related(&self, id: &ProductId) -> DomainResult<Vec<&Product>> {
        let product = self.catalog.get(id).ok_or_else(DomainError::not_found)?;
        Ok(self.catalog.related(product, RELATED_LIMIT))
    }
}
