//! Page arithmetic shared by every list screen.
//!
//! The controller only tracks the current page; everything a view needs to
//! draw page links is derived here from [`PageInfo`].

use serde::Serialize;

/// Number of page-number links shown around the current page.
pub const PAGE_WINDOW: usize = 5;

/// Number of pages needed to show `total_items`, zero when there is nothing to show.
pub fn total_pages(total_items: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    total_items.div_ceil(page_size)
}

/// Returns the first and last page number of the window around `current_page`.
///
/// The window is `width` pages wide, centred on the current page and shifted
/// left when it would run past the last page.
pub fn page_window(current_page: usize, total_pages: usize, width: usize) -> (usize, usize) {
    let width = width.max(1);

    let mut start = current_page.saturating_sub(width / 2).max(1);
    let end = (start + width - 1).min(total_pages);

    if end.saturating_sub(start) < width - 1 {
        start = (end + 1).saturating_sub(width).max(1);
    }

    (start, end)
}

/// Page links in display order; `None` marks an ellipsis placeholder.
fn get_pages(total_pages: usize, current_page: usize, width: usize) -> Vec<Option<usize>> {
    if total_pages == 0 {
        return vec![];
    }

    let (start, end) = page_window(current_page, total_pages, width);
    let mut pages = Vec::new();

    if start > 1 {
        pages.push(Some(1));
        if start > 2 {
            pages.push(None);
        }
    }

    pages.extend((start..=end).map(Some));

    if end < total_pages {
        if end < total_pages - 1 {
            pages.push(None);
        }
        pages.push(Some(total_pages));
    }

    pages
}

/// Position of the current page within the filtered set.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct PageInfo {
    /// 1-based current page.
    pub page: usize,
    pub total_pages: usize,
    pub total_items: usize,
    pub page_size: usize,
}

impl PageInfo {
    pub fn new(page: usize, total_items: usize, page_size: usize) -> Self {
        let page = if page == 0 { 1 } else { page };

        Self {
            page,
            total_pages: total_pages(total_items, page_size),
            total_items,
            page_size,
        }
    }

    /// 1-based position of the first item on the page, zero when the set is empty.
    pub fn first_item(&self) -> usize {
        if self.total_items == 0 {
            return 0;
        }
        (self.page - 1) * self.page_size + 1
    }

    /// 1-based position of the last item on the page.
    pub fn last_item(&self) -> usize {
        (self.page * self.page_size).min(self.total_items)
    }

    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }
}

/// Everything needed to draw the pagination controls under a table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PaginationBar {
    pub page: usize,
    pub total_pages: usize,
    pub total_items: usize,
    pub pages: Vec<Option<usize>>,
    /// Target of the "previous" control, `None` when it is disabled.
    pub previous: Option<usize>,
    /// Target of the "next" control, `None` when it is disabled.
    pub next: Option<usize>,
    pub first_item: usize,
    pub last_item: usize,
}

impl PaginationBar {
    /// Builds the bar for `info`; there is no bar at all for a single page or none.
    pub fn new(info: &PageInfo) -> Option<Self> {
        Self::with_window(info, PAGE_WINDOW)
    }

    pub fn with_window(info: &PageInfo, width: usize) -> Option<Self> {
        if info.total_pages <= 1 {
            return None;
        }

        Some(Self {
            page: info.page,
            total_pages: info.total_pages,
            total_items: info.total_items,
            pages: get_pages(info.total_pages, info.page, width),
            previous: info.has_previous().then(|| info.page - 1),
            next: info.has_next().then(|| info.page + 1),
            first_item: info.first_item(),
            last_item: info.last_item(),
        })
    }
}
