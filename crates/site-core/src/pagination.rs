use crate::constants::INFO_PAGE_SIZE;
use crate::error::{Error, Result};
use std::ops::Range;

/// One button in the pagination bar.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageButton {
    pub label: String,
    /// 1-based page this button navigates to.
    pub page: usize,
    pub is_current: bool,
}

/// Fixed-size paging over a list of `item_count` items. Pages are 1-based.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Paginator {
    item_count: usize,
    per_page: usize,
}

impl Paginator {
    pub fn new(item_count: usize) -> Result<Self> {
        Self::with_page_size(item_count, INFO_PAGE_SIZE)
    }

    pub fn with_page_size(item_count: usize, per_page: usize) -> Result<Self> {
        if per_page == 0 {
            return Err(Error::ZeroPageSize);
        }
        if item_count == 0 {
            return Err(Error::EmptyList);
        }
        Ok(Self {
            item_count,
            per_page,
        })
    }

    #[inline]
    pub fn item_count(&self) -> usize {
        self.item_count
    }

    #[inline]
    pub fn per_page(&self) -> usize {
        self.per_page
    }

    #[inline]
    pub fn page_count(&self) -> usize {
        self.item_count.div_ceil(self.per_page)
    }

    #[inline]
    pub fn clamp(&self, page: usize) -> usize {
        page.clamp(1, self.page_count())
    }

    /// Item indices shown on `page` (clamped first).
    pub fn visible_range(&self, page: usize) -> Range<usize> {
        let page = self.clamp(page);
        let start = (page - 1) * self.per_page;
        let end = (page * self.per_page).min(self.item_count);
        start..end
    }

    #[inline]
    pub fn is_visible(&self, page: usize, index: usize) -> bool {
        self.visible_range(page).contains(&index)
    }

    /// PREV, one button per page, NEXT. PREV and NEXT clamp at the ends.
    pub fn buttons(&self, current: usize) -> Vec<PageButton> {
        let current = self.clamp(current);
        let pages = self.page_count();
        let mut out = Vec::with_capacity(pages + 2);
        out.push(PageButton {
            label: "PREV".to_string(),
            page: current.saturating_sub(1).max(1),
            is_current: false,
        });
        out.extend((1..=pages).map(|page| PageButton {
            label: page.to_string(),
            page,
            is_current: page == current,
        }));
        out.push(PageButton {
            label: "NEXT".to_string(),
            page: (current + 1).min(pages),
            is_current: false,
        });
        out
    }
}

/// Parse a `data-page` attribute. Empty, zero and non-numeric values are
/// ignored by the click handler, so they map to `None`.
pub fn parse_page(raw: &str) -> Option<usize> {
    match raw.trim().parse::<usize>() {
        Ok(0) | Err(_) => None,
        Ok(page) => Some(page),
    }
}
