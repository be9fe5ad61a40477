// dataclean-core/src/application/search.rs

use crate::domain::{Integration, Monitor, MonitorWithAlerts};

/// Field accessor used to match a search query.
pub type FieldSelector<T> = fn(&T) -> &str;

/// Keeps the items where ANY selected field contains `query`, ignoring case.
///
/// An empty query keeps everything. Input order is preserved.
pub fn filter_by_search<T: Clone>(items: &[T], query: &str, fields: &[FieldSelector<T>]) -> Vec<T> {
    if query.is_empty() {
        return items.to_vec();
    }
    let needle = query.to_lowercase();
    items
        .iter()
        .filter(|item| {
            fields
                .iter()
                .any(|select| select(item).to_lowercase().contains(&needle))
        })
        .cloned()
        .collect()
}

/// Default searchable fields of each list view.
pub trait Searchable: Sized + Clone + 'static {
    fn search_fields() -> &'static [FieldSelector<Self>];
}

pub fn search<T: Searchable>(items: &[T], query: &str) -> Vec<T> {
    filter_by_search(items, query, T::search_fields())
}

impl Searchable for Monitor {
    fn search_fields() -> &'static [FieldSelector<Self>] {
        const FIELDS: &[FieldSelector<Monitor>] =
            &[|m| m.name.as_str(), |m| m.table.as_str(), |m| m.database.as_str()];
        FIELDS
    }
}

impl Searchable for MonitorWithAlerts {
    fn search_fields() -> &'static [FieldSelector<Self>] {
        const FIELDS: &[FieldSelector<MonitorWithAlerts>] = &[
            |g| g.monitor_name.as_str(),
            |g| g.table.as_str(),
            |g| g.database.as_str(),
        ];
        FIELDS
    }
}

impl Searchable for Integration {
    fn search_fields() -> &'static [FieldSelector<Self>] {
        const FIELDS: &[FieldSelector<Integration>] =
            &[|i| i.name.as_str(), |i| i.source_type.as_str()];
        FIELDS
    }
}
