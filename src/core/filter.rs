// src/core/filter.rs
//
// Category filter + free-text search over the working list.
// The result is a list of row indices into the working list; the list itself
// is never copied or reordered.

use std::collections::BTreeSet;

use crate::config::consts::{ALL_CATEGORIES, KNOWN_CATEGORIES};
use crate::core::deal::Deal;

#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(String),
}

impl CategoryFilter {
    /// `"all"` (any case) or blank selects everything.
    pub fn from_key(key: &str) -> Self {
        let k = key.trim();
        if k.is_empty() || k.eq_ignore_ascii_case(ALL_CATEGORIES) {
            CategoryFilter::All
        } else {
            CategoryFilter::Only(lc!(k))
        }
    }

    pub fn key(&self) -> &str {
        match self {
            CategoryFilter::All => ALL_CATEGORIES,
            CategoryFilter::Only(c) => c,
        }
    }

    pub fn keeps(&self, deal: &Deal) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(c) => deal.in_category(c),
        }
    }
}

/// Normalized search text: trimmed and lower-cased, empty means "no search".
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Query(String);

impl Query {
    pub fn new(raw: &str) -> Self {
        Query(lc!(raw.trim()))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn keeps(&self, deal: &Deal) -> bool {
        self.is_empty() || deal.mentions(&self.0)
    }
}

/// Filtered projection of a deal slice.
#[derive(Clone, Debug)]
pub struct DealView<'a> {
    /// Positions of kept deals in the working list
    pub row_ix: Vec<usize>,
    deals: &'a [Deal],
}

impl<'a> DealView<'a> {
    /// Category first, then search.
    pub fn new(deals: &'a [Deal], category: &CategoryFilter, query: &Query) -> Self {
        let row_ix = deals
            .iter()
            .enumerate()
            .filter(|(_, d)| category.keeps(d))
            .filter(|(_, d)| query.keeps(d))
            .map(|(i, _)| i)
            .collect();
        Self { row_ix, deals }
    }

    pub fn all(deals: &'a [Deal]) -> Self {
        Self { row_ix: (0..deals.len()).collect(), deals }
    }

    pub fn len(&self) -> usize { self.row_ix.len() }
    pub fn is_empty(&self) -> bool { self.row_ix.is_empty() }

    pub fn get(&self, i: usize) -> Option<&'a Deal> {
        self.row_ix.get(i).and_then(|&ix| self.deals.get(ix))
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a Deal> + '_ {
        self.row_ix.iter().filter_map(|&ix| self.deals.get(ix))
    }
}

/// Category buttons: `all`, the fixed set, then extras seen in `deals`.
pub fn category_keys(deals: &[Deal]) -> Vec<String> {
    let mut keys: Vec<String> = std::iter::once(ALL_CATEGORIES)
        .chain(KNOWN_CATEGORIES.iter().copied())
        .map(String::from)
        .collect();

    let extras: BTreeSet<String> = deals
        .iter()
        .map(|d| lc!(d.category.trim()))
        .filter(|c| !c.is_empty() && !keys.contains(c))
        .collect();
    keys.extend(extras);
    keys
}
