use std::sync::Arc;

use super::domain::{ApplicationId, ApplicationRecord};
use super::metrics::MetricsSnapshot;
use super::pagination::{ApplicationPage, PageRequest};
use super::service::ApplicationServiceError;
use super::store::{ApplicationRepository, RecordWindow};

/// Caching instruction attached to single-record lookups.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheDirective {
    NoStore,
}

impl CacheDirective {
    pub fn header_value(&self) -> &'static str {
        match self {
            CacheDirective::NoStore => "no-store",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ApplicationLookup {
    pub record: ApplicationRecord,
    pub cache: CacheDirective,
}

/// Read side of the admissions backend.
pub struct ApplicationQueries<R> {
    repository: Arc<R>,
}

impl<R> Clone for ApplicationQueries<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

impl<R> ApplicationQueries<R>
where
    R: ApplicationRepository,
{
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    pub fn metrics(&self) -> Result<MetricsSnapshot, ApplicationServiceError> {
        let records = self.repository.all()?;
        Ok(MetricsSnapshot::from_records(&records))
    }

    /// Page over the full, unfiltered collection in store order.
    pub fn list(&self, request: PageRequest) -> Result<ApplicationPage, ApplicationServiceError> {
        if request.page_size == 0 {
            return Err(ApplicationServiceError::InvalidPage {
                reason: "pageSize must be greater than zero",
            });
        }

        let window = match request.offset() {
            Some(offset) => self
                .repository
                .window(offset, request.page_size as usize)?,
            None => RecordWindow {
                records: Vec::new(),
                total: self.repository.count()?,
            },
        };

        Ok(ApplicationPage {
            total_pages: request.total_pages(window.total),
            data: window.records,
            total: window.total,
            page: request.page,
            page_size: request.page_size,
        })
    }

    pub fn get(&self, id: &ApplicationId) -> Result<ApplicationLookup, ApplicationServiceError> {
        let record = self
            .repository
            .fetch(id)?
            .ok_or_else(|| ApplicationServiceError::NotFound(id.clone()))?;
        Ok(ApplicationLookup {
            record,
            cache: CacheDirective::NoStore,
        })
    }
}
