//! Pagination controls model.
//!
//! First and last page are always shown, plus current ±1. The pages at
//! current ±2 are replaced by an ellipsis unless they are the first or last
//! page; pages further out are omitted.

/// One entry in the page-number row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageLink {
    Page { number: usize, current: bool },
    Ellipsis,
}

/// The controls below the gallery grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pagination {
    /// Current page, clamped to `1..=total_pages`.
    pub current: usize,
    pub total_pages: usize,
    /// Target of the "previous" arrow, if shown.
    pub previous: Option<usize>,
    /// Target of the "next" arrow, if shown.
    pub next: Option<usize>,
    pub links: Vec<PageLink>,
}

impl Pagination {
    /// Build the controls, or `None` when there is at most one page.
    pub fn build(current: usize, total_pages: usize) -> Option<Self> {
        if total_pages <= 1 {
            return None;
        }
        let current = current.clamp(1, total_pages);

        let mut links = Vec::new();
        for page in 1..=total_pages {
            let in_window = page + 1 >= current && page <= current + 1;
            if page == 1 || page == total_pages || in_window {
                links.push(PageLink::Page {
                    number: page,
                    current: page == current,
                });
            } else if page + 2 == current || page == current + 2 {
                links.push(PageLink::Ellipsis);
            }
        }

        Some(Self {
            current,
            total_pages,
            previous: (current > 1).then(|| current - 1),
            next: (current < total_pages).then(|| current + 1),
            links,
        })
    }

    /// Page numbers shown, in order.
    pub fn page_numbers(&self) -> Vec<usize> {
        self.links
            .iter()
            .filter_map(|link| match link {
                PageLink::Page { number, .. } => Some(*number),
                PageLink::Ellipsis => None,
            })
            .collect()
    }
}
