//! Batch reducer folding user records into department aggregates.

use super::department::AggregateMap;
use super::user_record::UserRecord;

/// Fold `records` into `map`, in order.
///
/// Each record lazily creates its department's aggregate and then updates
/// gender, age range, hair colour and address, in that order. Counts and
/// ranges do not depend on record order; the address map does, because a
/// later record with the same name overwrites an earlier one.
///
/// An empty batch leaves `map` untouched.
///
/// # Examples
/// ```
/// use department_stats::domain::{AggregateMap, process_batch};
///
/// let mut map = AggregateMap::new();
/// process_batch(&[], &mut map);
/// assert!(map.is_empty());
/// ```
pub fn process_batch(records: &[UserRecord], map: &mut AggregateMap) {
    for record in records {
        map.ensure(&record.department).record(record);
    }
}
