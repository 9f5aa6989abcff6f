//! Free-text search as applied by callers of the list operation.
//!
//! Search runs over a page that has already been fetched, never over the whole
//! store, so a match sitting on another page is not returned.

use super::domain::ApplicationRecord;

/// Records whose name or id contains `query`, ignoring case. An empty query
/// keeps the page intact.
pub fn filter_page<'a>(records: &'a [ApplicationRecord], query: &str) -> Vec<&'a ApplicationRecord> {
    let needle = query.to_lowercase();
    records
        .iter()
        .filter(|record| {
            record.name.to_lowercase().contains(&needle)
                || record.id.as_str().to_lowercase().contains(&needle)
        })
        .collect()
}
