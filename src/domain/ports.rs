use crate::utils::error::Result;
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::time::Duration;

/// Asynchronous data-access seam the pages are written against. The in-tree
/// implementation is the in-memory mock store; a real backend client would
/// slot in behind the same trait.
#[async_trait]
pub trait Repository: Send + Sync {
    type Record: Clone + Send + Sync;
    type Draft: Send;
    type Patch: Send;

    /// Full collection in stored order.
    async fn list_all(&self) -> Result<Vec<Self::Record>>;

    /// Lookup by the raw route segment; an unparseable or unknown id is
    /// `NotFound`.
    async fn get_by_id(&self, id: &str) -> Result<Self::Record>;

    async fn create(&self, draft: Self::Draft) -> Result<Self::Record>;

    async fn update(&self, id: &str, patch: Self::Patch) -> Result<Self::Record>;

    /// Removes the record and returns it.
    async fn delete(&self, id: &str) -> Result<Self::Record>;
}

/// Toast stand-in. Messages are fire-and-forget; `display_for` is how long
/// the notification should stay on screen.
pub trait Notifier: Send + Sync {
    fn success(&self, message: &str, display_for: Duration);
    fn failure(&self, message: &str, display_for: Duration);
}

/// Where a submitted form payload goes. The shipped implementation only
/// sleeps; a real transport implements the same contract, including the
/// error path.
#[async_trait]
pub trait SubmissionGateway: Send + Sync {
    async fn submit(&self, form_name: &str, payload: &BTreeMap<String, String>) -> Result<()>;
}
