//! Page envelope returned by offset-paginated sources.

/// One page of an offset-paginated collection.
///
/// `total` is the size of the whole collection as reported by the source at
/// the time the page was produced; it may change between pages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<T> {
    /// Items on this page, in source order.
    pub items: Vec<T>,
    /// Reported size of the whole collection.
    pub total: u64,
    /// Offset of the first item on this page.
    pub skip: u64,
    /// Page size the source applied.
    pub limit: u64,
    /// Source records at this offset that were left out of `items`. They
    /// still count toward the offset of the next page.
    pub dropped: u64,
}

impl<T> Page<T> {
    /// Build a page envelope.
    ///
    /// # Examples
    /// ```
    /// use pagination::Page;
    ///
    /// let page = Page::new(vec![1, 2, 3], 10, 0, 3);
    /// assert_eq!(page.len(), 3);
    /// ```
    #[must_use]
    pub const fn new(items: Vec<T>, total: u64, skip: u64, limit: u64) -> Self {
        Self {
            items,
            total,
            skip,
            limit,
            dropped: 0,
        }
    }

    /// Record that `dropped` source records were left out of `items`.
    ///
    /// # Examples
    /// ```
    /// use pagination::Page;
    ///
    /// let page = Page::new(vec!["a"], 10, 0, 3).with_dropped(2);
    /// assert_eq!(page.len(), 1);
    /// assert_eq!(page.offset_delta(), 3);
    /// ```
    #[must_use]
    pub fn with_dropped(mut self, dropped: u64) -> Self {
        self.dropped = dropped;
        self
    }

    /// Build an empty page, as returned past the end of a collection.
    #[must_use]
    pub const fn empty(total: u64, skip: u64) -> Self {
        Self::new(Vec::new(), total, skip, 0)
    }

    /// Number of items on this page.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether this page carries no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of source records this page covered, kept or dropped.
    #[must_use]
    pub fn offset_delta(&self) -> u64 {
        u64::try_from(self.items.len())
            .unwrap_or(u64::MAX)
            .saturating_add(self.dropped)
    }

    /// Consume the envelope and return its items.
    #[must_use]
    pub fn into_items(self) -> Vec<T> {
        self.items
    }
}
