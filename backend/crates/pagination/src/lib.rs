//! Offset/limit pagination primitives.
//!
//! Upstream collections that page by `skip`/`limit` answer every request with
//! a [`Page`] envelope. [`OffsetCursor`] walks such a collection strictly in
//! order, one page at a time, and decides when the walk is finished.
//!
//! ```
//! use pagination::{Advance, OffsetCursor, Page};
//!
//! let mut cursor = OffsetCursor::new();
//! assert!(cursor.has_more());
//!
//! let page = Page::new(vec!["a", "b"], 2, 0, 30);
//! assert_eq!(cursor.advance(&page), Advance::Exhausted);
//! assert_eq!(cursor.offset(), 2);
//! ```

mod cursor;
mod page;

pub use cursor::{Advance, OffsetCursor};
pub use page::Page;
