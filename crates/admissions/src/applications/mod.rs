//! Admission application records and the in-memory backend that serves them.
//!
//! The store is generated once from synthetic fixtures and shared by the query
//! side (metrics, paginated listing, lookup by id) and the mutation side
//! (field-scoped partial updates). [`AdmissionsService`] layers the simulated
//! network latency on top and [`application_router`] binds it to HTTP.

pub mod domain;
pub mod fixtures;
pub mod metrics;
pub mod mutation;
pub mod pagination;
pub mod query;
pub mod router;
pub mod search;
pub mod service;
pub mod store;

#[cfg(test)]
mod tests;

pub use domain::{ApplicationId, ApplicationPatch, ApplicationRecord, ApplicationStatus, TestScores};
pub use fixtures::{generate_applications, FixtureConfig, FixtureError, PROGRAMS};
pub use metrics::{MetricsSnapshot, ProgramCount, TrendPoint};
pub use mutation::ApplicationMutations;
pub use pagination::{ApplicationPage, PageParams, PageRequest};
pub use query::{ApplicationLookup, ApplicationQueries, CacheDirective};
pub use router::application_router;
pub use search::filter_page;
pub use service::{AdmissionsService, ApplicationServiceError};
pub use store::{ApplicationRepository, InMemoryApplicationStore, RecordWindow, RepositoryError};
