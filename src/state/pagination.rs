/// Pages always visible at each end of the pager.
const MARGIN_PAGES: u32 = 1;

/// Pages shown around the current one.
const PAGE_WINDOW: u32 = 5;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub(crate) enum PaginationError {
    #[error("Page {requested} is outside 1..={total}")]
    OutOfRange { requested: u32, total: u32 },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum PageItem {
    Page(u32),
    Ellipsis,
}

/// Current page of the notes list and the page count reported by the server.
///
/// `page` is always within `1..=total_pages` and `total_pages` is never 0.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct Pagination {
    page: u32,
    total_pages: u32,
}

impl Default for Pagination {
    fn default() -> Self {
        Self::new()
    }
}

impl Pagination {
    pub fn new() -> Self {
        Self {
            page: 1,
            total_pages: 1,
        }
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn total_pages(&self) -> u32 {
        self.total_pages
    }

    /// A page number from an older search term means nothing under a new filter.
    pub fn on_search_change(&mut self) {
        self.page = 1;
    }

    pub fn set_page(&mut self, page: u32) -> Result<(), PaginationError> {
        if page == 0 || page > self.total_pages {
            return Err(PaginationError::OutOfRange {
                requested: page,
                total: self.total_pages,
            });
        }
        self.page = page;
        Ok(())
    }

    pub fn prev(&mut self) -> Result<(), PaginationError> {
        self.set_page(self.page.saturating_sub(1))
    }

    pub fn next(&mut self) -> Result<(), PaginationError> {
        self.set_page(self.page.saturating_add(1))
    }

    /// Called with `totalPages` of every successful list response.
    pub fn apply_total_pages(&mut self, total_pages: u32) {
        self.total_pages = total_pages.max(1);
        self.page = self.page.min(self.total_pages);
    }

    /// Pager controls are not rendered for a single page.
    pub fn is_visible(&self) -> bool {
        self.total_pages > 1
    }

    pub fn has_prev(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }

    /// Buttons to render: margin pages at both ends, a window around the
    /// current page, and an ellipsis for every gap wider than one page.
    pub fn page_items(&self) -> Vec<PageItem> {
        let total = self.total_pages;
        if total <= PAGE_WINDOW + 2 * MARGIN_PAGES {
            return (1..=total).map(PageItem::Page).collect();
        }

        let start = self
            .page
            .saturating_sub(PAGE_WINDOW / 2)
            .max(1)
            .min(total - PAGE_WINDOW + 1);
        let end = start + PAGE_WINDOW - 1;

        let shown = (1..=total)
            .filter(|n| *n <= MARGIN_PAGES || *n > total - MARGIN_PAGES || (start..=end).contains(n));

        let mut items = Vec::new();
        let mut prev = 0;
        for n in shown {
            match n - prev {
                1 => {}
                2 => items.push(PageItem::Page(prev + 1)),
                _ => items.push(PageItem::Ellipsis),
            }
            items.push(PageItem::Page(n));
            prev = n;
        }
        items
    }
}
