//! Display ordering and client-side pagination on top of the projection.

use super::record::ListRecord;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortSpec {
    pub field: String,
    pub ascending: bool,
}

impl SortSpec {
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            ascending: true,
        }
    }

    /// Header click: same column flips direction, another column sorts ascending
    pub fn toggle(&mut self, field: &str) {
        if self.field == field {
            self.ascending = !self.ascending;
        } else {
            self.field = field.to_string();
            self.ascending = true;
        }
    }

    /// Header indicator for a column
    pub fn indicator(&self, field: &str) -> &'static str {
        if self.field == field {
            if self.ascending {
                " ▲"
            } else {
                " ▼"
            }
        } else {
            " ⇅"
        }
    }
}

/// Stable sort, equal keys keep projection order
pub fn sort_rows<R: ListRecord>(rows: &mut [&R], sort: &SortSpec) {
    rows.sort_by(|a, b| {
        let cmp = a.field(&sort.field).compare(&b.field(&sort.field));
        if sort.ascending {
            cmp
        } else {
            cmp.reverse()
        }
    });
}

pub const DEFAULT_PAGE_SIZE: usize = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Paging {
    pub page: usize,
    pub page_size: usize,
    pub total_count: usize,
    pub total_pages: usize,
}

impl Default for Paging {
    fn default() -> Self {
        Self {
            page: 0,
            page_size: DEFAULT_PAGE_SIZE,
            total_count: 0,
            total_pages: 1,
        }
    }
}

impl Paging {
    /// Recompute page count for a new total and clamp the current page
    pub fn recalc(&mut self, total_count: usize) {
        self.page_size = self.page_size.max(1);
        self.total_count = total_count;
        self.total_pages = if total_count == 0 {
            1
        } else {
            (total_count + self.page_size - 1) / self.page_size
        };
        if self.page >= self.total_pages {
            self.page = self.total_pages.saturating_sub(1);
        }
    }

    pub fn go_to(&mut self, page: usize) {
        self.page = page.min(self.total_pages.saturating_sub(1));
    }

    pub fn set_page_size(&mut self, size: usize) {
        self.page_size = size.max(1);
        self.page = 0;
        self.recalc(self.total_count);
    }

    pub fn range(&self) -> std::ops::Range<usize> {
        let size = self.page_size.max(1);
        let start = (self.page * size).min(self.total_count);
        let end = (start + size).min(self.total_count);
        start..end
    }
}
