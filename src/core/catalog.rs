use crate::core::store::{LatencyProfile, MemStore};
use crate::domain::model::{
    HasId, PostRecord, ServiceDraft, ServicePatch, ServiceRecord, WorkshopDraft, WorkshopPatch,
    WorkshopRecord,
};
use crate::domain::ports::Repository;
use crate::utils::error::{Result, SiteError};
use crate::utils::validation;
use async_trait::async_trait;
use std::collections::HashSet;
use std::path::Path;

const SERVICES_JSON: &str = include_str!("../../data/services.json");
const WORKSHOPS_JSON: &str = include_str!("../../data/workshops.json");
const POSTS_JSON: &str = include_str!("../../data/posts.json");

/// Load-time schema checks shared by every collection: ids must be positive
/// and unique, image URLs must be well-formed. A violation fails the whole
/// load; the store never holds a half-valid dataset.
fn check_dataset<R, F>(noun: &str, records: &[R], image_url: F) -> Result<()>
where
    R: HasId,
    F: Fn(&R) -> &str,
{
    let mut seen = HashSet::with_capacity(records.len());
    for record in records {
        if record.id() == 0 {
            return Err(SiteError::DatasetError {
                message: format!("{} dataset contains a zero id", noun),
            });
        }
        if !seen.insert(record.id()) {
            return Err(SiteError::DatasetError {
                message: format!("{} dataset contains duplicate id {}", noun, record.id()),
            });
        }
        validation::validate_url("imageUrl", image_url(record)).map_err(|e| {
            SiteError::DatasetError {
                message: format!("{} {}: {}", noun, record.id(), e),
            }
        })?;
    }
    Ok(())
}

/// Typed façade over the in-memory service collection.
#[derive(Debug)]
pub struct ServiceCatalog {
    store: MemStore<ServiceRecord>,
}

impl ServiceCatalog {
    pub fn from_json_str(json: &str, latency: LatencyProfile) -> Result<Self> {
        let records: Vec<ServiceRecord> = serde_json::from_str(json)?;
        check_dataset("Service", &records, |r| &r.image_url)?;
        tracing::debug!("Loaded {} services", records.len());
        Ok(Self {
            store: MemStore::new("Service", records, latency),
        })
    }

    pub fn from_file<P: AsRef<Path>>(path: P, latency: LatencyProfile) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json_str(&content, latency)
    }

    /// The dataset shipped with the site.
    pub fn builtin(latency: LatencyProfile) -> Result<Self> {
        Self::from_json_str(SERVICES_JSON, latency)
    }
}

#[async_trait]
impl Repository for ServiceCatalog {
    type Record = ServiceRecord;
    type Draft = ServiceDraft;
    type Patch = ServicePatch;

    async fn list_all(&self) -> Result<Vec<ServiceRecord>> {
        self.store.list_all().await
    }

    async fn get_by_id(&self, id: &str) -> Result<ServiceRecord> {
        self.store.get_by_id(id).await
    }

    async fn create(&self, draft: ServiceDraft) -> Result<ServiceRecord> {
        self.store.create_with(|id| draft.into_record(id)).await
    }

    async fn update(&self, id: &str, patch: ServicePatch) -> Result<ServiceRecord> {
        self.store.update_with(id, |record| patch.apply(record)).await
    }

    async fn delete(&self, id: &str) -> Result<ServiceRecord> {
        self.store.delete(id).await
    }
}

/// Typed façade over the in-memory workshop collection.
#[derive(Debug)]
pub struct WorkshopCatalog {
    store: MemStore<WorkshopRecord>,
}

impl WorkshopCatalog {
    pub fn from_json_str(json: &str, latency: LatencyProfile) -> Result<Self> {
        let records: Vec<WorkshopRecord> = serde_json::from_str(json)?;
        check_dataset("Workshop", &records, |r| &r.image_url)?;
        tracing::debug!("Loaded {} workshops", records.len());
        Ok(Self {
            store: MemStore::new("Workshop", records, latency),
        })
    }

    pub fn from_file<P: AsRef<Path>>(path: P, latency: LatencyProfile) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json_str(&content, latency)
    }

    pub fn builtin(latency: LatencyProfile) -> Result<Self> {
        Self::from_json_str(WORKSHOPS_JSON, latency)
    }
}

#[async_trait]
impl Repository for WorkshopCatalog {
    type Record = WorkshopRecord;
    type Draft = WorkshopDraft;
    type Patch = WorkshopPatch;

    async fn list_all(&self) -> Result<Vec<WorkshopRecord>> {
        self.store.list_all().await
    }

    async fn get_by_id(&self, id: &str) -> Result<WorkshopRecord> {
        self.store.get_by_id(id).await
    }

    async fn create(&self, draft: WorkshopDraft) -> Result<WorkshopRecord> {
        self.store.create_with(|id| draft.into_record(id)).await
    }

    async fn update(&self, id: &str, patch: WorkshopPatch) -> Result<WorkshopRecord> {
        self.store.update_with(id, |record| patch.apply(record)).await
    }

    async fn delete(&self, id: &str) -> Result<WorkshopRecord> {
        self.store.delete(id).await
    }
}

/// Blog posts are read-only editorial content; they load as a plain list
/// rather than through a store.
pub fn load_posts(json: &str) -> Result<Vec<PostRecord>> {
    let posts: Vec<PostRecord> = serde_json::from_str(json)?;
    check_dataset("Post", &posts, |p| &p.image_url)?;
    let featured = posts.iter().filter(|p| p.featured).count();
    if featured > 1 {
        return Err(SiteError::DatasetError {
            message: format!("Post dataset flags {} posts as featured", featured),
        });
    }
    tracing::debug!("Loaded {} posts", posts.len());
    Ok(posts)
}

pub fn load_posts_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<PostRecord>> {
    let content = std::fs::read_to_string(path)?;
    load_posts(&content)
}

pub fn builtin_posts() -> Result<Vec<PostRecord>> {
    load_posts(POSTS_JSON)
}
