//! Page resolution and the paginated result handed to templates.

use serde::Serialize;

/// Rows shown per listing page.
pub const DEFAULT_ITEMS_PER_PAGE: usize = 25;

/// Parses the `page` query parameter. Missing, non-numeric and values below 1
/// all fall back to the first page.
pub fn parse_page(raw: Option<&str>) -> usize {
    raw.and_then(|value| value.trim().parse::<i64>().ok())
        .filter(|page| *page >= 1)
        .and_then(|page| usize::try_from(page).ok())
        .unwrap_or(1)
}

/// A requested page clamped against the number of matching rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    pub page: usize,
    pub per_page: usize,
    pub total: usize,
    pub max_page: usize,
}

impl PageWindow {
    /// Clamps `requested` into `1..=max_page`. With no rows the page stays 1.
    pub fn resolve(requested: usize, total: usize, per_page: usize) -> Self {
        let per_page = per_page.max(1);
        let max_page = total.div_ceil(per_page);
        let mut page = requested.max(1);
        if max_page > 0 && page > max_page {
            page = max_page;
        }

        Self {
            page,
            per_page,
            total,
            max_page,
        }
    }

    /// Rows before this page. Saturates for pages far past an empty result.
    pub fn offset(&self) -> usize {
        self.page.saturating_sub(1).saturating_mul(self.per_page)
    }
}

fn get_pages(
    total_pages: usize,
    current_page: usize,
    left_edge: usize,
    left_current: usize,
    right_current: usize,
    right_edge: usize,
) -> Vec<Option<usize>> {
    let last_page = total_pages;

    if last_page == 0 {
        return vec![];
    }

    let mut pages = Vec::new();

    let left_end = (1 + left_edge).min(last_page + 1);
    pages.extend((1..left_end).map(Some));

    let mid_start = left_end.max(current_page.saturating_sub(left_current));
    let mid_end = (current_page + right_current + 1).min(last_page + 1);

    if mid_start > left_end {
        pages.push(None);
    }
    pages.extend((mid_start..mid_end).map(Some));

    let right_start = mid_end.max(last_page.saturating_sub(right_edge) + 1);

    if right_start > mid_end {
        pages.push(None);
    }
    pages.extend((right_start..=last_page).map(Some));

    pages
}

/// One page of rows plus the counters the listing template renders.
#[derive(Debug, Serialize)]
pub struct Paginated<T> {
    pub items: Vec<T>,
    /// Page links to render; `None` marks a gap.
    pub pages: Vec<Option<usize>>,
    /// The page actually served after clamping.
    pub page: usize,
    /// Rows up to and including this page (`offset + items.len()`).
    pub shown: usize,
    /// Rows matching the filter across all pages.
    pub total: usize,
    pub has_more: bool,
}

impl<T> Paginated<T> {
    pub fn new(items: Vec<T>, window: &PageWindow) -> Self {
        let shown = window
            .offset()
            .saturating_add(items.len())
            .min(window.total);
        let pages = get_pages(window.max_page, window.page, 2, 2, 4, 2);

        Self {
            items,
            pages,
            page: window.page,
            shown,
            total: window.total,
            has_more: shown < window.total,
        }
    }

    /// Page to request for the "load more" link.
    pub fn next_page(&self) -> Option<usize> {
        self.has_more.then_some(self.page + 1)
    }
}
