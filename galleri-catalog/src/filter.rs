//! Category filtering, sorting and paging for the gallery grid.
//!
//! [`FilterState`] is an immutable value; every transition returns a new
//! state. [`derive_view`] turns a catalog and a state into a [`CatalogView`]
//! without touching the catalog.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

use galleri_core::settings::DEFAULT_PAGE_SIZE;
use galleri_core::{CatalogItem, Collation, slugify};

use crate::catalog::Catalog;
use crate::pagination::Pagination;

/// Sentinel category that selects every item.
pub const ALL_CATEGORIES: &str = "all";

/// Query parameter carrying the category slug on the gallery page.
pub const CATEGORY_PARAM: &str = "kategori";

// ── Category ────────────────────────────────────────────────────────────────

/// The category selection.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    /// A category display name or slug.
    Category(String),
}

impl CategoryFilter {
    /// Parse a selection. Empty, `all` and the site's `alla` are the sentinel.
    pub fn parse(value: &str) -> Self {
        let value = value.trim();
        if value.is_empty()
            || value.eq_ignore_ascii_case(ALL_CATEGORIES)
            || value.eq_ignore_ascii_case("alla")
        {
            Self::All
        } else {
            Self::Category(value.to_string())
        }
    }

    /// Read the selection from a page query string (`?kategori=djur`).
    pub fn from_query(query: &str) -> Self {
        let query = query.trim_start_matches('?');
        let Ok(url) = reqwest::Url::parse(&format!("http://localhost/?{query}")) else {
            return Self::All;
        };
        url.query_pairs()
            .find(|(key, _)| key == CATEGORY_PARAM)
            .map(|(_, value)| Self::parse(&value))
            .unwrap_or_default()
    }

    /// Whether an item belongs to this selection.
    ///
    /// Matches when the item's category equals the selection ignoring case,
    /// or when the item's category slug equals the selection.
    pub fn matches(&self, item: &CatalogItem) -> bool {
        let selected = match self {
            Self::All => return true,
            Self::Category(selected) => selected.to_lowercase(),
        };
        match item.category.as_deref() {
            Some(category) => {
                category.to_lowercase() == selected || slugify(category) == selected
            }
            None => false,
        }
    }

    /// Slug for the `kategori` query parameter; `None` for the sentinel.
    pub fn query_value(&self) -> Option<String> {
        match self {
            Self::All => None,
            Self::Category(c) => Some(slugify(c)),
        }
    }
}

impl std::fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::All => f.write_str(ALL_CATEGORIES),
            Self::Category(c) => f.write_str(c),
        }
    }
}

// ── Sort ────────────────────────────────────────────────────────────────────

/// Sort orders offered by the gallery's sort select.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortKey {
    #[default]
    Newest,
    Oldest,
    PriceLow,
    PriceHigh,
    NameAscending,
}

impl SortKey {
    pub fn all() -> &'static [SortKey] {
        &[
            Self::Newest,
            Self::Oldest,
            Self::PriceLow,
            Self::PriceHigh,
            Self::NameAscending,
        ]
    }

    /// The select option value used by the site.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Newest => "newest",
            Self::Oldest => "oldest",
            Self::PriceLow => "price-low",
            Self::PriceHigh => "price-high",
            Self::NameAscending => "name-az",
        }
    }

    /// Stable sort of `items` in place.
    pub fn sort(&self, items: &mut [&CatalogItem], collation: Collation) {
        match self {
            Self::Newest => items.sort_by_key(|item| std::cmp::Reverse(date_key(item))),
            Self::Oldest => items.sort_by_key(|item| date_key(item)),
            Self::PriceLow => items.sort_by(|a, b| price_key(a).total_cmp(&price_key(b))),
            Self::PriceHigh => items.sort_by(|a, b| price_key(b).total_cmp(&price_key(a))),
            Self::NameAscending => items.sort_by(|a, b| collation.compare(&a.name, &b.name)),
        }
    }
}

impl std::fmt::Display for SortKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown sort key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortKeyParseError(pub String);

impl std::fmt::Display for SortKeyParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "unknown sort key: '{}' (expected newest, oldest, price-low, price-high or name-az)",
            self.0
        )
    }
}

impl std::error::Error for SortKeyParseError {}

impl std::str::FromStr for SortKey {
    type Err = SortKeyParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "newest" => Ok(Self::Newest),
            "oldest" => Ok(Self::Oldest),
            "price-low" | "price-asc" => Ok(Self::PriceLow),
            "price-high" | "price-desc" => Ok(Self::PriceHigh),
            "name-az" | "name-ascending" | "name" => Ok(Self::NameAscending),
            _ => Err(SortKeyParseError(s.to_string())),
        }
    }
}

/// Milliseconds since the epoch for `dateAdded`; missing or unparseable
/// dates count as the epoch itself.
pub(crate) fn date_key(item: &CatalogItem) -> i64 {
    item.date_added.as_deref().and_then(parse_date).unwrap_or(0)
}

fn parse_date(s: &str) -> Option<i64> {
    let s = s.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.timestamp_millis());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S") {
        return Some(dt.and_utc().timestamp_millis());
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc().timestamp_millis())
}

/// Missing prices sort as zero.
fn price_key(item: &CatalogItem) -> f64 {
    item.price.unwrap_or(0.0)
}

// ── State & view ────────────────────────────────────────────────────────────

/// What the visitor has selected on the gallery page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterState {
    category: CategoryFilter,
    sort: SortKey,
    page: usize,
    page_size: usize,
}

impl Default for FilterState {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl FilterState {
    /// All categories, newest first, page 1.
    pub fn new(page_size: usize) -> Self {
        Self {
            category: CategoryFilter::All,
            sort: SortKey::default(),
            page: 1,
            page_size: page_size.max(1),
        }
    }

    /// Select a category; returns to page 1.
    #[must_use]
    pub fn with_category(self, category: CategoryFilter) -> Self {
        Self {
            category,
            page: 1,
            ..self
        }
    }

    /// Change the sort order; returns to page 1.
    #[must_use]
    pub fn with_sort(self, sort: SortKey) -> Self {
        Self {
            sort,
            page: 1,
            ..self
        }
    }

    /// Go to a 1-based page. Pages past the end are allowed and render empty.
    #[must_use]
    pub fn with_page(self, page: usize) -> Self {
        Self {
            page: page.max(1),
            ..self
        }
    }

    pub fn category(&self) -> &CategoryFilter {
        &self.category
    }

    pub fn sort(&self) -> SortKey {
        self.sort
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }
}

/// The filtered, sorted item list for one [`FilterState`].
#[derive(Debug, Clone)]
pub struct CatalogView<'a> {
    items: Vec<&'a CatalogItem>,
    page: usize,
    page_size: usize,
}

/// Derive the visible items for a state. Pure: the catalog is not modified.
pub fn derive_view<'a>(
    catalog: &'a Catalog,
    state: &FilterState,
    collation: Collation,
) -> CatalogView<'a> {
    let mut items: Vec<&CatalogItem> = catalog
        .iter()
        .filter(|item| state.category.matches(item))
        .collect();
    state.sort.sort(&mut items, collation);

    CatalogView {
        items,
        page: state.page,
        page_size: state.page_size,
    }
}

impl<'a> CatalogView<'a> {
    /// The whole filtered and sorted list.
    pub fn items(&self) -> &[&'a CatalogItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// True when nothing matches; the page shows its empty state.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn page_number(&self) -> usize {
        self.page
    }

    pub fn total_pages(&self) -> usize {
        self.items.len().div_ceil(self.page_size)
    }

    /// Items on the current page.
    pub fn page(&self) -> &[&'a CatalogItem] {
        self.page_at(self.page)
    }

    /// Items on a given 1-based page; empty when out of range.
    pub fn page_at(&self, page: usize) -> &[&'a CatalogItem] {
        if page == 0 {
            return &[];
        }
        let start = (page - 1).saturating_mul(self.page_size);
        if start >= self.items.len() {
            return &[];
        }
        let end = (start + self.page_size).min(self.items.len());
        &self.items[start..end]
    }

    /// Pagination controls, or `None` when everything fits on one page.
    pub fn pagination(&self) -> Option<Pagination> {
        Pagination::build(self.page, self.total_pages())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sentinel_aliases() {
        assert_eq!(CategoryFilter::parse("all"), CategoryFilter::All);
        assert_eq!(CategoryFilter::parse("Alla"), CategoryFilter::All);
        assert_eq!(CategoryFilter::parse(" "), CategoryFilter::All);
        assert_eq!(
            CategoryFilter::parse("Djur"),
            CategoryFilter::Category("Djur".to_string())
        );
    }

    #[test]
    fn category_from_query_string() {
        assert_eq!(
            CategoryFilter::from_query("?kategori=vilda-djur&sida=2"),
            CategoryFilter::Category("vilda-djur".to_string())
        );
        assert_eq!(CategoryFilter::from_query("kategori=alla"), CategoryFilter::All);
        assert_eq!(CategoryFilter::from_query(""), CategoryFilter::All);
        assert_eq!(
            CategoryFilter::from_query("kategori=Bl%C3%A5tt"),
            CategoryFilter::Category("Blått".to_string())
        );
    }

    #[test]
    fn matches_name_or_slug() {
        let mut item = CatalogItem::new("a", "A");
        item.category = Some("Vilda Djur".to_string());
        assert!(CategoryFilter::parse("vilda djur").matches(&item));
        assert!(CategoryFilter::parse("VILDA DJUR").matches(&item));
        assert!(CategoryFilter::parse("vilda-djur").matches(&item));
        assert!(!CategoryFilter::parse("vilda").matches(&item));
        assert!(CategoryFilter::All.matches(&item));

        item.category = None;
        assert!(!CategoryFilter::parse("vilda-djur").matches(&item));
        assert!(CategoryFilter::All.matches(&item));
    }

    #[test]
    fn sort_key_parses_site_values() {
        for &key in SortKey::all() {
            assert_eq!(key.as_str().parse::<SortKey>().unwrap(), key);
        }
        assert_eq!("name-ascending".parse::<SortKey>().unwrap(), SortKey::NameAscending);
        assert!("random".parse::<SortKey>().is_err());
    }

    #[test]
    fn dates_parse_in_several_shapes() {
        assert_eq!(parse_date("1970-01-02"), Some(86_400_000));
        assert_eq!(parse_date("1970-01-01T00:00:01Z"), Some(1_000));
        assert_eq!(parse_date("1970-01-01T00:00:02"), Some(2_000));
        assert_eq!(parse_date("igår"), None);
    }

    #[test]
    fn transitions_reset_page() {
        let state = FilterState::default().with_page(3);
        assert_eq!(state.page(), 3);
        assert_eq!(state.clone().with_sort(SortKey::Oldest).page(), 1);
        assert_eq!(
            state.with_category(CategoryFilter::parse("djur")).page(),
            1
        );
        assert_eq!(FilterState::default().with_page(0).page(), 1);
    }
}
