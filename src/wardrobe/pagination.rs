//! Fixed-size pages over the generated outfits.
//!
//! Pages are 1-based. An empty list has zero pages; asking for any page of it
//! yields an empty slice rather than an error.

pub const DEFAULT_PAGE_SIZE: usize = 5;

/// Number of pages needed for `len` entries. Zero entries means zero pages.
pub fn total_pages(len: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    len.div_ceil(page_size)
}

/// Clamps a requested page into `[1, total_pages]`, or to 1 when there are none.
pub fn clamp_page(page: usize, len: usize, page_size: usize) -> usize {
    page.clamp(1, total_pages(len, page_size).max(1))
}

/// The entries shown on `page`. Out-of-range pages are empty.
pub fn page_slice<T>(entries: &[T], page: usize, page_size: usize) -> &[T] {
    if page == 0 || page_size == 0 {
        return &[];
    }
    let start = (page - 1).saturating_mul(page_size);
    if start >= entries.len() {
        return &[];
    }
    let end = start.saturating_add(page_size).min(entries.len());
    &entries[start..end]
}

/// One rendered page plus the numbers needed to draw navigation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<'a, T> {
    pub entries: &'a [T],
    pub number: usize,
    pub total_pages: usize,
    pub total_entries: usize,
    /// 0-based position of the first entry on this page within the full list.
    pub offset: usize,
}

impl<'a, T> Page<'a, T> {
    /// The page at `number`, clamped into range.
    pub fn of(entries: &'a [T], number: usize, page_size: usize) -> Self {
        let number = clamp_page(number, entries.len(), page_size);
        Self {
            entries: page_slice(entries, number, page_size),
            number,
            total_pages: total_pages(entries.len(), page_size),
            total_entries: entries.len(),
            offset: (number - 1) * page_size,
        }
    }

    pub fn has_next(&self) -> bool {
        self.number < self.total_pages
    }

    pub fn has_prev(&self) -> bool {
        self.number > 1
    }
}
