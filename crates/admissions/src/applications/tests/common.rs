use std::sync::Arc;
use std::time::Duration;

use axum::response::Response;
use serde_json::Value;

use crate::applications::domain::{ApplicationId, ApplicationRecord};
use crate::applications::fixtures::FixtureConfig;
use crate::applications::store::{
    ApplicationRepository, InMemoryApplicationStore, RecordWindow, RepositoryError,
};
use crate::applications::{application_router, AdmissionsService};

pub(super) fn store() -> InMemoryApplicationStore {
    InMemoryApplicationStore::generate(&FixtureConfig::default()).expect("fixture builds")
}

pub(super) fn id(raw: &str) -> ApplicationId {
    ApplicationId::from(raw)
}

pub(super) fn build_service(
    latency: Duration,
) -> (AdmissionsService<InMemoryApplicationStore>, InMemoryApplicationStore) {
    let store = store();
    let service = AdmissionsService::new(Arc::new(store.clone()), latency);
    (service, store)
}

pub(super) fn router_with_store(store: InMemoryApplicationStore) -> axum::Router {
    application_router(Arc::new(AdmissionsService::new(
        Arc::new(store),
        Duration::ZERO,
    )))
}

pub(super) struct UnavailableRepository;

impl ApplicationRepository for UnavailableRepository {
    fn count(&self) -> Result<usize, RepositoryError> {
        Err(RepositoryError::Unavailable("store offline".to_string()))
    }

    fn all(&self) -> Result<Vec<ApplicationRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("store offline".to_string()))
    }

    fn window(&self, _offset: usize, _limit: usize) -> Result<RecordWindow, RepositoryError> {
        Err(RepositoryError::Unavailable("store offline".to_string()))
    }

    fn fetch(&self, _id: &ApplicationId) -> Result<Option<ApplicationRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("store offline".to_string()))
    }

    fn update_with(
        &self,
        _id: &ApplicationId,
        _merge: &mut dyn FnMut(&ApplicationRecord) -> ApplicationRecord,
    ) -> Result<Option<ApplicationRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("store offline".to_string()))
    }
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
