use crate::utils::error::Result;
use std::future::Future;

/// What a page sees while loading data: the three render states of every
/// listing and detail view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchState<T> {
    Loading,
    Ready(T),
    Failed(String),
}

impl<T> FetchState<T> {
    pub fn ready(&self) -> Option<&T> {
        match self {
            FetchState::Ready(value) => Some(value),
            _ => None,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            FetchState::Failed(message) => Some(message),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, FetchState::Loading)
    }
}

/// Drives one load to completion, collapsing any error into the
/// human-readable message the error view renders. `what` feeds the
/// fallback message when an error has no text of its own.
pub async fn run_fetch<T, Fut>(what: &str, fut: Fut) -> FetchState<T>
where
    Fut: Future<Output = Result<T>>,
{
    match fut.await {
        Ok(value) => FetchState::Ready(value),
        Err(e) => {
            tracing::warn!("Failed to load {}: {}", what, e);
            let message = e.user_facing_message();
            if message.is_empty() {
                FetchState::Failed(format!("Failed to load {}", what))
            } else {
                FetchState::Failed(message)
            }
        }
    }
}

/// A reusable load: `fetch` runs it, and the error view's "Try Again"
/// action is just another `fetch` call on the same value.
pub struct Fetcher<F> {
    what: &'static str,
    load: F,
}

impl<F> Fetcher<F> {
    pub fn new(what: &'static str, load: F) -> Self {
        Self { what, load }
    }
}

impl<F, T, Fut> Fetcher<F>
where
    F: Fn() -> Fut,
    Fut: Future<Output = Result<T>>,
{
    pub async fn fetch(&self) -> FetchState<T> {
        run_fetch(self.what, (self.load)()).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::SiteError;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[tokio::test]
    async fn test_run_fetch_ready() {
        let state = run_fetch("services", async { Ok(vec![1, 2, 3]) }).await;
        assert_eq!(state.ready(), Some(&vec![1, 2, 3]));
    }

    #[tokio::test]
    async fn test_run_fetch_failed_carries_error_message() {
        let state: FetchState<Vec<u32>> = run_fetch("services", async {
            Err(SiteError::NotFound { what: "Service" })
        })
        .await;
        assert_eq!(state.error_message(), Some("Service not found"));
    }

    #[tokio::test]
    async fn test_fetcher_retry_reinvokes_the_same_load() {
        let attempts = AtomicUsize::new(0);
        let fetcher = Fetcher::new("workshops", || async {
            if attempts.fetch_add(1, Ordering::SeqCst) == 0 {
                Err(SiteError::DatasetError {
                    message: "transient".to_string(),
                })
            } else {
                Ok(7u32)
            }
        });

        let first = fetcher.fetch().await;
        assert!(first.error_message().is_some());

        let second = fetcher.fetch().await;
        assert_eq!(second.ready(), Some(&7));
        assert_eq!(attempts.load(Ordering::SeqCst), 2);
    }
}
