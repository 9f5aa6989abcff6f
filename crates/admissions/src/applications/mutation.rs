use std::sync::Arc;

use super::domain::{ApplicationId, ApplicationPatch, ApplicationRecord};
use super::service::ApplicationServiceError;
use super::store::ApplicationRepository;

/// Write side of the admissions backend. Patches are merged field by field
/// with no enum or transition checks.
pub struct ApplicationMutations<R> {
    repository: Arc<R>,
}

impl<R> Clone for ApplicationMutations<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

impl<R> ApplicationMutations<R>
where
    R: ApplicationRepository,
{
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    pub fn update(
        &self,
        id: &ApplicationId,
        patch: &ApplicationPatch,
    ) -> Result<ApplicationRecord, ApplicationServiceError> {
        self.repository
            .update_with(id, &mut |current| patch.merge(current))?
            .ok_or_else(|| ApplicationServiceError::NotFound(id.clone()))
    }
}
