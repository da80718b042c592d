use crate::domain::model::{Category, Discoverable, PostRecord, ServiceRecord, Stage, WorkshopRecord};
use std::collections::BTreeMap;

/// Sentinel category meaning "no category filter".
pub const ALL_CATEGORIES: &str = "All";

/// Partition `records` by `key`. Within-group relative order follows the
/// input; bucket keys come out in `K`'s order. The input is never stored
/// grouped, so this recomputes from the flat list every time.
pub fn group_by<'a, R, K, F>(records: &'a [R], key: F) -> BTreeMap<K, Vec<&'a R>>
where
    K: Ord,
    F: Fn(&R) -> K,
{
    let mut groups: BTreeMap<K, Vec<&R>> = BTreeMap::new();
    for record in records {
        groups.entry(key(record)).or_default().push(record);
    }
    groups
}

pub fn services_by_category(services: &[ServiceRecord]) -> BTreeMap<Category, Vec<&ServiceRecord>> {
    group_by(services, |s| s.category)
}

pub fn workshops_by_stage(workshops: &[WorkshopRecord]) -> BTreeMap<Stage, Vec<&WorkshopRecord>> {
    group_by(workshops, |w| w.stage)
}

/// Listing-page filter: a record matches when the category selection is
/// `"All"` or an exact label match, AND the search term is empty or a
/// case-insensitive substring of the title or excerpt. Original order is
/// preserved.
pub fn filter_by_search_and_category<'a, R>(
    records: &'a [R],
    search_term: &str,
    category: &str,
) -> Vec<&'a R>
where
    R: Discoverable,
{
    let needle = search_term.to_lowercase();
    records
        .iter()
        .filter(|record| {
            let matches_category =
                category == ALL_CATEGORIES || record.category_label() == category;
            let matches_search = search_term.is_empty()
                || record.title().to_lowercase().contains(&needle)
                || record.excerpt().to_lowercase().contains(&needle);
            matches_category && matches_search
        })
        .collect()
}

/// The post the blog page pins above the grid. Only shown in the
/// unfiltered view; at most one post carries the flag (enforced at load).
pub fn featured_post(posts: &[PostRecord]) -> Option<&PostRecord> {
    posts.iter().find(|p| p.featured)
}
