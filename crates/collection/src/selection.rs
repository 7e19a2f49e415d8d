use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Sort order applied as the engine's final stage.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortKey {
    /// Preserve catalog order (no reordering).
    #[default]
    Relevance,
    PriceAscending,
    PriceDescending,
    NameAscending,
    NameDescending,
}

/// Filter axis a toggle applies to.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum FilterAxis {
    Category,
    Subcategory,
}

/// The user's current filter and sort choices.
///
/// Every update returns a fresh value and leaves the receiver untouched,
/// so callers can keep prior selections around for history/undo.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    categories: BTreeSet<String>,
    subcategories: BTreeSet<String>,
    search_term: Option<String>,
    sort_key: SortKey,
}

impl Selection {
    /// Set-toggle a filter value: present gets removed, absent gets
    /// inserted.
    #[must_use]
    pub fn toggle(&self, axis: FilterAxis, value: impl Into<String>) -> Self {
        let value = value.into();
        let mut next = self.clone();
        let set = match axis {
            FilterAxis::Category => &mut next.categories,
            FilterAxis::Subcategory => &mut next.subcategories,
        };
        if !set.remove(&value) {
            set.insert(value);
        }
        next
    }

    #[must_use]
    pub fn with_sort_key(&self, sort_key: SortKey) -> Self {
        Self {
            sort_key,
            ..self.clone()
        }
    }

    #[must_use]
    pub fn with_search_term(&self, term: impl Into<String>) -> Self {
        Self {
            search_term: Some(term.into()),
            ..self.clone()
        }
    }

    #[must_use]
    pub fn without_search_term(&self) -> Self {
        Self {
            search_term: None,
            ..self.clone()
        }
    }

    /// Selected categories; empty means no constraint.
    pub fn categories(&self) -> &BTreeSet<String> {
        &self.categories
    }

    /// Selected subcategories; empty means no constraint.
    pub fn subcategories(&self) -> &BTreeSet<String> {
        &self.subcategories
    }

    pub fn search_term(&self) -> Option<&str> {
        self.search_term.as_deref()
    }

    pub fn sort_key(&self) -> SortKey {
        self.sort_key
    }
}
