//! Paged results: a bounded slice of a larger ordered collection plus
//! the metadata needed to drive previous/next navigation.

use serde::Serialize;

/// One page of an ordered, filtered result set.
///
/// `total_pages` is computed once at construction from `total_count`
/// and `page_size` and never mutated independently. A page number past
/// the end is not an error: it yields an empty `items` with
/// `has_next() == false`.
#[derive(Debug, Clone, Serialize)]
pub struct PagedList<T> {
    pub items: Vec<T>,
    pub total_count: i64,
    pub page_size: i64,
    pub current_page: i64,
    pub total_pages: i64,
}

impl<T> PagedList<T> {
    /// Wrap an already-sliced page.
    ///
    /// Used by repositories that count and slice in SQL: `items` is the
    /// current page's rows and `total_count` the filtered total before
    /// slicing. `page_size` is floored to 1 so the page count division
    /// is always defined.
    pub fn from_counted(items: Vec<T>, total_count: i64, page_number: i64, page_size: i64) -> Self {
        let page_size = page_size.max(1);
        Self {
            items,
            total_count,
            page_size,
            current_page: page_number,
            // Ceiling division; page_size >= 1 and total_count >= 0.
            total_pages: (total_count + page_size - 1) / page_size,
        }
    }

    /// Slice one page out of a fully materialized source.
    ///
    /// Counts before slicing, then skips `(page_number - 1) * page_size`
    /// elements and takes up to `page_size`.
    pub fn create(source: Vec<T>, page_number: i64, page_size: i64) -> Self {
        let page_size = page_size.max(1);
        let total_count = source.len() as i64;
        let skip = (page_number - 1).max(0) * page_size;

        let items: Vec<T> = source
            .into_iter()
            .skip(skip as usize)
            .take(page_size as usize)
            .collect();

        Self::from_counted(items, total_count, page_number, page_size)
    }

    pub fn has_previous(&self) -> bool {
        self.current_page > 1
    }

    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages
    }

    /// Map page items while keeping the pagination metadata
    /// (entity -> DTO conversion convenience).
    pub fn map_items<U>(self, f: impl FnMut(T) -> U) -> PagedList<U> {
        PagedList {
            items: self.items.into_iter().map(f).collect(),
            total_count: self.total_count,
            page_size: self.page_size,
            current_page: self.current_page,
            total_pages: self.total_pages,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn source(n: i64) -> Vec<i64> {
        (1..=n).collect()
    }

    #[test]
    fn middle_page_of_25_elements() {
        let page = PagedList::create(source(25), 2, 10);
        assert_eq!(page.items, (11..=20).collect::<Vec<_>>());
        assert_eq!(page.total_count, 25);
        assert_eq!(page.total_pages, 3);
        assert!(page.has_previous());
        assert!(page.has_next());
    }

    #[test]
    fn last_partial_page() {
        let page = PagedList::create(source(25), 3, 10);
        assert_eq!(page.items.len(), 5);
        assert!(page.has_previous());
        assert!(!page.has_next());
    }

    #[test]
    fn first_page_has_no_previous() {
        let page = PagedList::create(source(25), 1, 10);
        assert_eq!(page.items.len(), 10);
        assert!(!page.has_previous());
        assert!(page.has_next());
    }

    #[test]
    fn out_of_range_page_is_empty_not_an_error() {
        let page = PagedList::create(source(25), 99, 10);
        assert!(page.items.is_empty());
        assert_eq!(page.total_count, 25);
        assert!(!page.has_next());
        assert!(page.has_previous());
    }

    #[test]
    fn exact_multiple_has_no_phantom_page() {
        let page = PagedList::create(source(20), 2, 10);
        assert_eq!(page.total_pages, 2);
        assert!(!page.has_next());
    }

    #[test]
    fn empty_source() {
        let page = PagedList::create(source(0), 1, 10);
        assert!(page.items.is_empty());
        assert_eq!(page.total_pages, 0);
        assert!(!page.has_previous());
        assert!(!page.has_next());
    }

    #[test]
    fn zero_page_size_is_floored_to_one() {
        let page = PagedList::create(source(3), 1, 0);
        assert_eq!(page.page_size, 1);
        assert_eq!(page.items, vec![1]);
        assert_eq!(page.total_pages, 3);
    }

    #[test]
    fn from_counted_trusts_caller_counts() {
        let page = PagedList::from_counted(vec![11, 12], 25, 2, 10);
        assert_eq!(page.total_count, 25);
        assert_eq!(page.total_pages, 3);
        assert!(page.has_previous());
        assert!(page.has_next());
    }

    #[test]
    fn map_items_keeps_metadata() {
        let page = PagedList::create(source(25), 2, 10).map_items(|n| n.to_string());
        assert_eq!(page.items[0], "11");
        assert_eq!(page.total_count, 25);
        assert_eq!(page.total_pages, 3);
    }
}
