//! Relative links into the site's pages.
//!
//! The product id and the category slug are the only externally addressable
//! state; both travel as query parameters.

use crate::filter::CATEGORY_PARAM;

/// Gallery grid page.
pub const GALLERY_PAGE: &str = "galleri.html";

/// Product detail page.
pub const PRODUCT_PAGE: &str = "produkt.html";

/// Query parameter carrying the product id on the detail page.
pub const PRODUCT_PARAM: &str = "id";

/// Link to a product's detail page, e.g. `produkt.html?id=kar001`.
pub fn product_url(id: &str) -> String {
    page_with_param(PRODUCT_PAGE, PRODUCT_PARAM, id)
}

/// Link to the gallery filtered on a category slug.
///
/// An empty slug links to the unfiltered gallery.
pub fn category_query(slug: &str) -> String {
    if slug.is_empty() {
        return GALLERY_PAGE.to_string();
    }
    page_with_param(GALLERY_PAGE, CATEGORY_PARAM, slug)
}

/// Read the product id from a detail page query string (`?id=kar001`).
pub fn product_id_from_query(query: &str) -> Option<String> {
    let url = reqwest::Url::parse(&format!("http://localhost/?{}", query.trim_start_matches('?')))
        .ok()?;
    url.query_pairs()
        .find(|(key, _)| key == PRODUCT_PARAM)
        .map(|(_, value)| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

fn page_with_param(page: &str, key: &str, value: &str) -> String {
    let mut url = match reqwest::Url::parse("http://localhost/") {
        Ok(url) => url,
        Err(_) => return format!("{page}?{key}={value}"),
    };
    url.query_pairs_mut().append_pair(key, value);
    match url.query() {
        Some(query) => format!("{page}?{query}"),
        None => page.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn product_links() {
        assert_eq!(product_url("kar001"), "produkt.html?id=kar001");
        assert_eq!(product_url("a b&c"), "produkt.html?id=a+b%26c");
    }

    #[test]
    fn category_links() {
        assert_eq!(category_query("vilda-djur"), "galleri.html?kategori=vilda-djur");
        assert_eq!(category_query(""), "galleri.html");
    }

    #[test]
    fn product_id_round_trips_through_query() {
        assert_eq!(product_id_from_query("?id=kar001").as_deref(), Some("kar001"));
        assert_eq!(product_id_from_query("id=a+b%26c").as_deref(), Some("a b&c"));
        assert_eq!(product_id_from_query("id="), None);
        assert_eq!(product_id_from_query(""), None);
    }
}
