/// Fixed page size for every question listing the service returns.
pub const QUESTIONS_PER_PAGE: usize = 10;

/// Returns the 1-indexed `page` of `items`, `page_size` entries per page.
///
/// A non-positive page is treated as page 1. Pages past the end of the
/// input yield an empty vector, never an error.
pub fn paginate<T: Clone>(items: &[T], page: i64, page_size: usize) -> Vec<T> {
    let page = usize::try_from(page).unwrap_or(1).max(1);
    let start = (page - 1).saturating_mul(page_size);

    if start >= items.len() {
        return Vec::new();
    }

    let end = start.saturating_add(page_size).min(items.len());
    items[start..end].to_vec()
}
