use crate::domain::model::HasId;
use crate::utils::error::{Result, SiteError};
use std::time::Duration;
use tokio::sync::RwLock;

/// Per-operation artificial delays, imitating the round-trip times of the
/// backend this store stands in for.
#[derive(Debug, Clone, Copy)]
pub struct LatencyProfile {
    pub list: Duration,
    pub get: Duration,
    pub create: Duration,
    pub update: Duration,
    pub delete: Duration,
}

impl LatencyProfile {
    pub fn realistic() -> Self {
        Self {
            list: Duration::from_millis(300),
            get: Duration::from_millis(200),
            create: Duration::from_millis(400),
            update: Duration::from_millis(300),
            delete: Duration::from_millis(250),
        }
    }

    /// No delays at all. Used by tests and the `--no-latency` flag.
    pub fn none() -> Self {
        Self {
            list: Duration::ZERO,
            get: Duration::ZERO,
            create: Duration::ZERO,
            update: Duration::ZERO,
            delete: Duration::ZERO,
        }
    }
}

impl Default for LatencyProfile {
    fn default() -> Self {
        Self::realistic()
    }
}

/// In-memory collection with remote-service semantics: every operation
/// suspends for its configured latency and hands out clones, never
/// references into the backing storage.
///
/// The flat insertion-ordered `Vec` is the canonical representation; the
/// `RwLock` gives concurrent callers defined semantics (in particular, id
/// assignment in `create_with` happens under the write lock).
#[derive(Debug)]
pub struct MemStore<R> {
    noun: &'static str,
    latency: LatencyProfile,
    records: RwLock<Vec<R>>,
}

impl<R> MemStore<R>
where
    R: HasId + Clone + Send + Sync,
{
    pub fn new(noun: &'static str, records: Vec<R>, latency: LatencyProfile) -> Self {
        Self {
            noun,
            latency,
            records: RwLock::new(records),
        }
    }

    pub fn noun(&self) -> &'static str {
        self.noun
    }

    fn not_found(&self) -> SiteError {
        SiteError::NotFound { what: self.noun }
    }

    /// Route segments arrive as strings; anything that is not a plain
    /// decimal integer cannot match a record.
    fn parse_id(id: &str) -> Option<u32> {
        id.trim().parse().ok()
    }

    pub async fn list_all(&self) -> Result<Vec<R>> {
        tokio::time::sleep(self.latency.list).await;
        let records = self.records.read().await;
        Ok(records.clone())
    }

    pub async fn get_by_id(&self, id: &str) -> Result<R> {
        tokio::time::sleep(self.latency.get).await;
        let wanted = Self::parse_id(id).ok_or_else(|| self.not_found())?;
        let records = self.records.read().await;
        records
            .iter()
            .find(|r| r.id() == wanted)
            .cloned()
            .ok_or_else(|| self.not_found())
    }

    /// Appends the record produced by `build`, which receives the freshly
    /// assigned id: `max(existing) + 1`, or 1 for an empty collection.
    pub async fn create_with<F>(&self, build: F) -> Result<R>
    where
        F: FnOnce(u32) -> R + Send,
    {
        tokio::time::sleep(self.latency.create).await;
        let mut records = self.records.write().await;
        let next_id = records.iter().map(HasId::id).max().map_or(1, |max| max + 1);
        let record = build(next_id);
        records.push(record.clone());
        Ok(record)
    }

    pub async fn update_with<F>(&self, id: &str, apply: F) -> Result<R>
    where
        F: FnOnce(&mut R) + Send,
    {
        tokio::time::sleep(self.latency.update).await;
        let wanted = Self::parse_id(id).ok_or_else(|| self.not_found())?;
        let mut records = self.records.write().await;
        let record = records
            .iter_mut()
            .find(|r| r.id() == wanted)
            .ok_or_else(|| self.not_found())?;
        apply(record);
        Ok(record.clone())
    }

    pub async fn delete(&self, id: &str) -> Result<R> {
        tokio::time::sleep(self.latency.delete).await;
        let wanted = Self::parse_id(id).ok_or_else(|| self.not_found())?;
        let mut records = self.records.write().await;
        let index = records
            .iter()
            .position(|r| r.id() == wanted)
            .ok_or_else(|| self.not_found())?;
        Ok(records.remove(index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Item {
        id: u32,
        name: String,
    }

    impl HasId for Item {
        fn id(&self) -> u32 {
            self.id
        }
    }

    fn item(id: u32, name: &str) -> Item {
        Item {
            id,
            name: name.to_string(),
        }
    }

    fn store(records: Vec<Item>) -> MemStore<Item> {
        MemStore::new("Item", records, LatencyProfile::none())
    }

    #[tokio::test]
    async fn test_list_all_returns_stored_order() {
        let store = store(vec![item(3, "c"), item(1, "a"), item(2, "b")]);
        let all = store.list_all().await.unwrap();
        let ids: Vec<u32> = all.iter().map(|i| i.id).collect();
        assert_eq!(ids, [3, 1, 2]);
    }

    #[tokio::test]
    async fn test_get_by_id_parses_route_segment() {
        let store = store(vec![item(1, "a"), item(7, "g")]);

        assert_eq!(store.get_by_id("7").await.unwrap().name, "g");
        assert_eq!(store.get_by_id(" 7 ").await.unwrap().name, "g");
        assert!(store.get_by_id("8").await.is_err());
        assert!(store.get_by_id("abc").await.is_err());
        assert!(store.get_by_id("7abc").await.is_err());
        assert!(store.get_by_id("-1").await.is_err());
    }

    #[tokio::test]
    async fn test_create_assigns_max_plus_one() {
        let store = store(vec![item(2, "b"), item(9, "i")]);
        let created = store.create_with(|id| item(id, "new")).await.unwrap();
        assert_eq!(created.id, 10);
        assert_eq!(store.list_all().await.unwrap().len(), 3);
    }

    #[tokio::test]
    async fn test_create_on_empty_collection_assigns_one() {
        let store = store(vec![]);
        let created = store.create_with(|id| item(id, "first")).await.unwrap();
        assert_eq!(created.id, 1);
    }

    #[tokio::test]
    async fn test_concurrent_creates_get_distinct_ids() {
        let store = std::sync::Arc::new(store(vec![item(1, "a")]));

        let mut handles = Vec::new();
        for _ in 0..8 {
            let store = store.clone();
            handles.push(tokio::spawn(async move {
                store.create_with(|id| item(id, "spawned")).await.unwrap().id
            }));
        }

        let mut ids = Vec::new();
        for handle in handles {
            ids.push(handle.await.unwrap());
        }
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 8);
    }

    #[tokio::test]
    async fn test_delete_removes_exactly_one() {
        let store = store(vec![item(1, "a"), item(2, "b")]);
        let removed = store.delete("1").await.unwrap();
        assert_eq!(removed.name, "a");
        assert_eq!(store.list_all().await.unwrap().len(), 1);
        assert!(store.get_by_id("1").await.is_err());
        assert!(store.delete("1").await.is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn test_get_waits_for_configured_latency() {
        let store = MemStore::new(
            "Item",
            vec![item(1, "a")],
            LatencyProfile {
                get: Duration::from_millis(200),
                ..LatencyProfile::none()
            },
        );

        let started = tokio::time::Instant::now();
        store.get_by_id("1").await.unwrap();
        assert!(started.elapsed() >= Duration::from_millis(200));
    }
}
