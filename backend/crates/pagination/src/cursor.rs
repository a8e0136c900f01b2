//! Sequential offset cursor.
//!
//! The cursor starts at offset zero with an unknown total. Each page fed to
//! [`OffsetCursor::advance`] refines the total and moves the offset forward by
//! the number of source records the page covered. A page covering no records
//! always ends the walk, even when the reported total has not been reached, so
//! a source that stops producing records cannot make a reader loop forever.

use crate::Page;

/// Result of feeding one page into an [`OffsetCursor`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
    /// More items remain; request the page at [`OffsetCursor::offset`].
    Continue,
    /// The walk is finished.
    Exhausted,
}

/// Tracks progress through an offset-paginated collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct OffsetCursor {
    offset: u64,
    total: Option<u64>,
    drained: bool,
}

impl OffsetCursor {
    /// Start a walk at offset zero with no known total.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            offset: 0,
            total: None,
            drained: false,
        }
    }

    /// Offset of the next page to request.
    #[must_use]
    pub const fn offset(&self) -> u64 {
        self.offset
    }

    /// Most recently reported collection size, if any page has been seen.
    #[must_use]
    pub const fn total(&self) -> Option<u64> {
        self.total
    }

    /// Whether another page should be requested.
    ///
    /// # Examples
    /// ```
    /// use pagination::{OffsetCursor, Page};
    ///
    /// let mut cursor = OffsetCursor::new();
    /// cursor.advance(&Page::new(vec![1], 3, 0, 1));
    /// assert!(cursor.has_more());
    /// cursor.advance(&Page::<u8>::empty(3, 1));
    /// assert!(!cursor.has_more());
    /// ```
    #[must_use]
    pub fn has_more(&self) -> bool {
        !self.drained && self.total.is_none_or(|total| self.offset < total)
    }

    /// Record one page and report whether the walk continues.
    pub fn advance<T>(&mut self, page: &Page<T>) -> Advance {
        self.total = Some(page.total);
        self.offset = self.offset.saturating_add(page.offset_delta());
        if page.offset_delta() == 0 {
            self.drained = true;
        }
        if self.has_more() {
            Advance::Continue
        } else {
            Advance::Exhausted
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn page(len: usize, total: u64, skip: u64) -> Page<usize> {
        Page::new((0..len).collect(), total, skip, 30)
    }

    #[test]
    fn fresh_cursor_wants_first_page() {
        let cursor = OffsetCursor::new();
        assert!(cursor.has_more());
        assert_eq!(cursor.offset(), 0);
        assert_eq!(cursor.total(), None);
    }

    #[test]
    fn walks_until_reported_total() {
        let mut cursor = OffsetCursor::new();
        assert_eq!(cursor.advance(&page(30, 70, 0)), Advance::Continue);
        assert_eq!(cursor.offset(), 30);
        assert_eq!(cursor.advance(&page(30, 70, 30)), Advance::Continue);
        assert_eq!(cursor.offset(), 60);
        assert_eq!(cursor.advance(&page(10, 70, 60)), Advance::Exhausted);
        assert_eq!(cursor.offset(), 70);
        assert_eq!(cursor.total(), Some(70));
        assert!(!cursor.has_more());
    }

    #[rstest]
    #[case::short_of_total(10, 0)]
    #[case::after_progress(10, 5)]
    fn empty_page_ends_walk_before_total(#[case] total: u64, #[case] consumed: usize) {
        let mut cursor = OffsetCursor::new();
        if consumed > 0 {
            cursor.advance(&page(consumed, total, 0));
        }
        assert_eq!(
            cursor.advance(&Page::<usize>::empty(total, cursor.offset())),
            Advance::Exhausted
        );
        assert!(!cursor.has_more());
    }

    #[test]
    fn page_with_only_dropped_records_keeps_walking() {
        let mut cursor = OffsetCursor::new();
        let filtered = Page::<usize>::new(Vec::new(), 4, 0, 2).with_dropped(2);
        assert_eq!(cursor.advance(&filtered), Advance::Continue);
        assert_eq!(cursor.offset(), 2);
        assert_eq!(cursor.advance(&page(2, 4, 2)), Advance::Exhausted);
        assert_eq!(cursor.offset(), 4);
    }

    #[test]
    fn zero_total_on_first_page_ends_walk() {
        let mut cursor = OffsetCursor::new();
        assert_eq!(cursor.advance(&Page::<usize>::empty(0, 0)), Advance::Exhausted);
        assert_eq!(cursor.offset(), 0);
    }

    #[test]
    fn shrinking_total_ends_walk() {
        let mut cursor = OffsetCursor::new();
        cursor.advance(&page(30, 100, 0));
        assert_eq!(cursor.advance(&page(5, 35, 30)), Advance::Exhausted);
        assert_eq!(cursor.offset(), 35);
    }

    #[test]
    fn offset_saturates() {
        let mut cursor = OffsetCursor {
            offset: u64::MAX - 1,
            total: Some(u64::MAX),
            drained: false,
        };
        cursor.advance(&page(5, u64::MAX, u64::MAX - 1));
        assert_eq!(cursor.offset(), u64::MAX);
        assert!(!cursor.has_more());
    }
}
