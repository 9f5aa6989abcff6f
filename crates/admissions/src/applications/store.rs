use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use super::domain::{ApplicationId, ApplicationRecord};
use super::fixtures::{generate_applications, FixtureConfig, FixtureError};

/// Storage abstraction so the query and mutation services can be exercised in isolation.
pub trait ApplicationRepository: Send + Sync {
    fn count(&self) -> Result<usize, RepositoryError>;
    fn all(&self) -> Result<Vec<ApplicationRecord>, RepositoryError>;
    /// Records in `[offset, offset + limit)` clamped to the collection, read
    /// together with the total so both describe the same state.
    fn window(&self, offset: usize, limit: usize) -> Result<RecordWindow, RepositoryError>;
    fn fetch(&self, id: &ApplicationId) -> Result<Option<ApplicationRecord>, RepositoryError>;
    /// Replace the record matching `id` with `merge(current)` in place and
    /// return the stored value. `Ok(None)` when no record matches.
    fn update_with(
        &self,
        id: &ApplicationId,
        merge: &mut dyn FnMut(&ApplicationRecord) -> ApplicationRecord,
    ) -> Result<Option<ApplicationRecord>, RepositoryError>;
}

#[derive(Debug, Clone, PartialEq)]
pub struct RecordWindow {
    pub records: Vec<ApplicationRecord>,
    pub total: usize,
}

/// Error enumeration for repository failures.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}

/// Fixture store holding the canonical ordered collection. Clones share the
/// same records, so writes through one handle are visible through all.
#[derive(Debug, Default, Clone)]
pub struct InMemoryApplicationStore {
    records: Arc<RwLock<Vec<ApplicationRecord>>>,
}

impl InMemoryApplicationStore {
    pub fn from_records(records: Vec<ApplicationRecord>) -> Self {
        Self {
            records: Arc::new(RwLock::new(records)),
        }
    }

    pub fn generate(config: &FixtureConfig) -> Result<Self, FixtureError> {
        Ok(Self::from_records(generate_applications(config)?))
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Vec<ApplicationRecord>>, RepositoryError> {
        self.records
            .read()
            .map_err(|_| RepositoryError::Unavailable("store lock poisoned".to_string()))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Vec<ApplicationRecord>>, RepositoryError> {
        self.records
            .write()
            .map_err(|_| RepositoryError::Unavailable("store lock poisoned".to_string()))
    }
}

impl ApplicationRepository for InMemoryApplicationStore {
    fn count(&self) -> Result<usize, RepositoryError> {
        Ok(self.read()?.len())
    }

    fn all(&self) -> Result<Vec<ApplicationRecord>, RepositoryError> {
        Ok(self.read()?.clone())
    }

    fn window(&self, offset: usize, limit: usize) -> Result<RecordWindow, RepositoryError> {
        let guard = self.read()?;
        let total = guard.len();
        let start = offset.min(total);
        let end = offset.saturating_add(limit).min(total);
        Ok(RecordWindow {
            records: guard[start..end].to_vec(),
            total,
        })
    }

    fn fetch(&self, id: &ApplicationId) -> Result<Option<ApplicationRecord>, RepositoryError> {
        let guard = self.read()?;
        Ok(guard.iter().find(|record| &record.id == id).cloned())
    }

    fn update_with(
        &self,
        id: &ApplicationId,
        merge: &mut dyn FnMut(&ApplicationRecord) -> ApplicationRecord,
    ) -> Result<Option<ApplicationRecord>, RepositoryError> {
        let mut guard = self.write()?;
        let Some(index) = guard.iter().position(|record| &record.id == id) else {
            return Ok(None);
        };
        let merged = merge(&guard[index]);
        guard[index] = merged.clone();
        Ok(Some(merged))
    }
}
