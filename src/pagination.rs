//! This modules defines the common functionality for paging data.

/// The config for pagination
#[derive(Debug, Clone)]
pub struct PaginationConfig {
    /// The number of rows to display on each page.
    pub page_size: usize,
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self { page_size: 15 }
    }
}

/// The number of pages needed to show `item_count` items, `page_size` at a time.
///
/// An empty list has zero pages.
pub fn page_count(item_count: usize, page_size: usize) -> usize {
    item_count.div_ceil(page_size.max(1))
}

/// Get the items on the 1-indexed `page`.
///
/// Pages past the end of `items` are empty.
pub fn page_slice<T>(items: &[T], page: usize, page_size: usize) -> &[T] {
    let start = page.saturating_sub(1).saturating_mul(page_size);

    if start >= items.len() {
        return &[];
    }

    let end = start.saturating_add(page_size).min(items.len());

    &items[start..end]
}

/// Clamp `page` to the range of valid page numbers.
///
/// Page 1 is always valid, even when there are no pages.
pub fn clamp_page(page: usize, page_count: usize) -> usize {
    page.clamp(1, page_count.max(1))
}
