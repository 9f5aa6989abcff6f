use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, warn};

use super::domain::{ApplicationId, ApplicationPatch, ApplicationRecord};
use super::metrics::MetricsSnapshot;
use super::mutation::ApplicationMutations;
use super::pagination::{ApplicationPage, PageRequest};
use super::query::{ApplicationLookup, ApplicationQueries};
use super::store::{ApplicationRepository, RepositoryError};

/// Async facade over the query and mutation services.
///
/// Every operation waits `latency` before touching the store, so a call sees
/// the store as it is when the call resolves rather than when it was issued.
pub struct AdmissionsService<R> {
    queries: ApplicationQueries<R>,
    mutations: ApplicationMutations<R>,
    latency: Duration,
}

impl<R> AdmissionsService<R>
where
    R: ApplicationRepository + 'static,
{
    pub fn new(repository: Arc<R>, latency: Duration) -> Self {
        Self {
            queries: ApplicationQueries::new(Arc::clone(&repository)),
            mutations: ApplicationMutations::new(repository),
            latency,
        }
    }

    pub fn latency(&self) -> Duration {
        self.latency
    }

    pub async fn metrics(&self) -> Result<MetricsSnapshot, ApplicationServiceError> {
        simulate_latency(self.latency).await;
        let snapshot = self.queries.metrics()?;
        debug!(total = snapshot.total_applicants, "computed admissions metrics");
        Ok(snapshot)
    }

    pub async fn list(
        &self,
        request: PageRequest,
    ) -> Result<ApplicationPage, ApplicationServiceError> {
        simulate_latency(self.latency).await;
        let page = self.queries.list(request)?;
        debug!(
            page = page.page,
            page_size = page.page_size,
            returned = page.data.len(),
            total = page.total,
            "listed applications"
        );
        Ok(page)
    }

    pub async fn get(
        &self,
        id: &ApplicationId,
    ) -> Result<ApplicationLookup, ApplicationServiceError> {
        simulate_latency(self.latency).await;
        self.queries.get(id).inspect_err(|err| log_failure(id, err))
    }

    /// Apply `patch` on a detached task. Dropping the returned future abandons
    /// the result but the write still commits.
    pub async fn update(
        &self,
        id: ApplicationId,
        patch: ApplicationPatch,
    ) -> Result<ApplicationRecord, ApplicationServiceError> {
        let mutations = self.mutations.clone();
        let latency = self.latency;
        let task = tokio::spawn(async move {
            simulate_latency(latency).await;
            let outcome = mutations.update(&id, &patch);
            match &outcome {
                Ok(record) => debug!(%record.id, status = %record.status, "application updated"),
                Err(err) => log_failure(&id, err),
            }
            outcome
        });

        task.await
            .map_err(|err| ApplicationServiceError::Interrupted(err.to_string()))?
    }
}

async fn simulate_latency(latency: Duration) {
    if !latency.is_zero() {
        tokio::time::sleep(latency).await;
    }
}

fn log_failure(id: &ApplicationId, err: &ApplicationServiceError) {
    match err {
        ApplicationServiceError::NotFound(_) => warn!(%id, "application not found"),
        other => warn!(%id, error = %other, "application request failed"),
    }
}

/// Error raised by the admissions services.
#[derive(Debug, thiserror::Error)]
pub enum ApplicationServiceError {
    #[error("application {0} not found")]
    NotFound(ApplicationId),
    #[error("invalid page request: {reason}")]
    InvalidPage { reason: &'static str },
    #[error(transparent)]
    Repository(#[from] RepositoryError),
    #[error("update task interrupted: {0}")]
    Interrupted(String),
}
