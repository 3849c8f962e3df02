//! Catalog view derivation: category list, filtering and price sorting.
//!
//! Nothing here mutates the catalog. The selectors only change which products
//! are shown and in what order.

use crate::product::Product;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Select value meaning "no category filter".
pub const ALL_CATEGORIES: &str = "All";

static PRICE_NOISE: Lazy<Option<Regex>> = Lazy::new(|| Regex::new(r"[^0-9.\-]+").ok());

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ViewError {
    #[error("unknown sort order '{0}'")]
    UnknownSortOrder(String),
}

/// Category selector. Serialized as its select value (`"All"` or the category).
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum CategoryFilter {
    #[default]
    All,
    Only(String),
}

impl CategoryFilter {
    /// Interpret a `<select>` value.
    #[must_use]
    pub fn from_value(value: &str) -> Self {
        if value == ALL_CATEGORIES {
            Self::All
        } else {
            Self::Only(value.to_string())
        }
    }

    #[must_use]
    pub fn as_value(&self) -> &str {
        match self {
            Self::All => ALL_CATEGORIES,
            Self::Only(category) => category,
        }
    }

    #[must_use]
    pub fn matches(&self, product: &Product) -> bool {
        match self {
            Self::All => true,
            Self::Only(category) => product.category == *category,
        }
    }
}

impl From<String> for CategoryFilter {
    fn from(value: String) -> Self {
        if value == ALL_CATEGORIES {
            Self::All
        } else {
            Self::Only(value)
        }
    }
}

impl From<CategoryFilter> for String {
    fn from(filter: CategoryFilter) -> Self {
        match filter {
            CategoryFilter::All => ALL_CATEGORIES.to_string(),
            CategoryFilter::Only(category) => category,
        }
    }
}

/// Price ordering selector.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortOrder {
    /// Store insertion order
    #[default]
    Default,
    PriceAsc,
    PriceDesc,
}

impl SortOrder {
    pub const ALL: [Self; 3] = [Self::Default, Self::PriceAsc, Self::PriceDesc];

    #[must_use]
    pub const fn as_value(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::PriceAsc => "price-asc",
            Self::PriceDesc => "price-desc",
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Default => "Sort by Default",
            Self::PriceAsc => "Price: Low to High",
            Self::PriceDesc => "Price: High to Low",
        }
    }
}

impl FromStr for SortOrder {
    type Err = ViewError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|order| order.as_value() == value)
            .ok_or_else(|| ViewError::UnknownSortOrder(value.to_string()))
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_value())
    }
}

/// Both selectors together.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewSelection {
    pub filter: CategoryFilter,
    pub sort: SortOrder,
}

impl ViewSelection {
    #[must_use]
    pub fn apply<'a>(&self, products: &'a [Product]) -> Vec<&'a Product> {
        visible(products, &self.filter, self.sort)
    }
}

/// `"All"` followed by each distinct category in first-seen order.
#[must_use]
pub fn categories(products: &[Product]) -> Vec<String> {
    let mut out = vec![ALL_CATEGORIES.to_string()];
    for product in products {
        if !out[1..].contains(&product.category) {
            out.push(product.category.clone());
        }
    }
    out
}

/// Text shown for a category option.
#[must_use]
pub fn category_label(category: &str) -> &str {
    if category == ALL_CATEGORIES {
        "All Categories"
    } else {
        category
    }
}

/// Products matching the filter, ordered by the sort selector.
///
/// Price sorting is stable. Prices that do not parse sort after every
/// parsed price in both directions.
#[must_use]
pub fn visible<'a>(
    products: &'a [Product],
    filter: &CategoryFilter,
    sort: SortOrder,
) -> Vec<&'a Product> {
    let filtered = products.iter().filter(|product| filter.matches(product));
    if sort == SortOrder::Default {
        return filtered.collect();
    }

    let mut keyed: Vec<(Option<f64>, &Product)> = filtered
        .map(|product| (parse_price(&product.price), product))
        .collect();
    keyed.sort_by(|(a, _), (b, _)| compare_prices(*a, *b, sort));
    keyed.into_iter().map(|(_, product)| product).collect()
}

fn compare_prices(a: Option<f64>, b: Option<f64>, sort: SortOrder) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => {
            let ord = a.partial_cmp(&b).unwrap_or(Ordering::Equal);
            if sort == SortOrder::PriceDesc {
                ord.reverse()
            } else {
                ord
            }
        }
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

fn strip_price(raw: &str) -> String {
    PRICE_NOISE
        .as_ref()
        .map(|re| re.replace_all(raw, "").into_owned())
        .unwrap_or_default()
}

/// Numeric value of a display price such as `¥1,299` or `$1,234.50`.
///
/// Every character outside `[0-9.-]` is dropped first. Returns `None` when no
/// digit remains or the remainder is not a single number (`1.2.3`, `12-3`).
#[must_use]
pub fn parse_price(raw: &str) -> Option<f64> {
    let stripped = strip_price(raw);
    if !stripped.bytes().any(|b| b.is_ascii_digit()) {
        return None;
    }
    stripped.parse::<f64>().ok()
}
