use super::common::*;
use std::sync::Arc;
use std::time::Duration;

use crate::applications::domain::{ApplicationPatch, ApplicationStatus};
use crate::applications::pagination::PageRequest;
use crate::applications::service::{AdmissionsService, ApplicationServiceError};
use crate::applications::store::ApplicationRepository;

const LATENCY: Duration = Duration::from_millis(500);

#[tokio::test(start_paused = true)]
async fn every_operation_waits_for_the_configured_latency() {
    let (service, _) = build_service(LATENCY);
    assert_eq!(service.latency(), LATENCY);

    let start = tokio::time::Instant::now();
    service.metrics().await.expect("metrics compute");
    assert!(start.elapsed() >= LATENCY);

    let start = tokio::time::Instant::now();
    service
        .list(PageRequest::new(1, 6))
        .await
        .expect("page lists");
    assert!(start.elapsed() >= LATENCY);

    let start = tokio::time::Instant::now();
    service
        .update(id("APP-2023-001"), ApplicationPatch::default())
        .await
        .expect("update succeeds");
    assert!(start.elapsed() >= LATENCY);
}

#[tokio::test(start_paused = true)]
async fn in_flight_reads_observe_writes_committed_before_they_resolve() {
    let (service, store) = build_service(LATENCY);
    let service = Arc::new(service);

    let reader = {
        let service = Arc::clone(&service);
        tokio::spawn(async move {
            let target = id("APP-2023-003");
            service.get(&target).await
        })
    };
    tokio::task::yield_now().await;

    store
        .update_with(&id("APP-2023-003"), &mut |current| {
            let mut next = current.clone();
            next.status = ApplicationStatus::Rejected;
            next
        })
        .expect("update runs")
        .expect("record exists");

    let lookup = reader
        .await
        .expect("reader joins")
        .expect("record found");
    assert_eq!(lookup.record.status, ApplicationStatus::Rejected);
}

#[tokio::test(start_paused = true)]
async fn abandoned_updates_still_commit() {
    let (service, store) = build_service(LATENCY);
    let patch = ApplicationPatch {
        notes: Some("Interview scheduled".to_string()),
        ..ApplicationPatch::default()
    };

    let abandoned = tokio::time::timeout(
        Duration::from_millis(10),
        service.update(id("APP-2023-004"), patch),
    )
    .await;
    assert!(abandoned.is_err(), "caller gave up before the write resolved");

    tokio::time::sleep(LATENCY * 2).await;

    let stored = store
        .fetch(&id("APP-2023-004"))
        .expect("fetch succeeds")
        .expect("record present");
    assert_eq!(stored.notes, "Interview scheduled");
}

#[tokio::test(start_paused = true)]
async fn concurrent_updates_to_one_record_both_land() {
    let (service, store) = build_service(LATENCY);
    let target = id("APP-2023-006");

    let rename = ApplicationPatch {
        name: Some("Grace Hopper".to_string()),
        ..ApplicationPatch::default()
    };
    let verify = ApplicationPatch {
        status: Some(ApplicationStatus::Verified),
        ..ApplicationPatch::default()
    };

    let (first, second) = tokio::join!(
        service.update(target.clone(), rename),
        service.update(target.clone(), verify)
    );
    first.expect("rename succeeds");
    second.expect("verify succeeds");

    let stored = store
        .fetch(&target)
        .expect("fetch succeeds")
        .expect("record present");
    assert_eq!(stored.name, "Grace Hopper");
    assert_eq!(stored.status, ApplicationStatus::Verified);
}

#[tokio::test]
async fn update_then_get_reflects_the_merge() {
    let (service, _) = build_service(Duration::ZERO);
    let target = id("APP-2023-012");
    let before = service.get(&target).await.expect("record found").record;

    service
        .update(
            target.clone(),
            ApplicationPatch {
                status: Some(ApplicationStatus::Verified),
                ..ApplicationPatch::default()
            },
        )
        .await
        .expect("update succeeds");

    let after = service.get(&target).await.expect("record found").record;
    assert_eq!(after.status, ApplicationStatus::Verified);
    assert_eq!(after.name, before.name);
    assert_eq!(after.test_scores, before.test_scores);
    assert_eq!(after.documents, before.documents);

    let metrics = service.metrics().await.expect("metrics compute");
    assert_eq!(metrics.verified_applicants, 10);
}

#[tokio::test]
async fn service_propagates_domain_errors() {
    let (service, _) = build_service(Duration::ZERO);

    assert!(matches!(
        service.get(&id("APP-2023-999")).await,
        Err(ApplicationServiceError::NotFound(_))
    ));
    assert!(matches!(
        service
            .update(id("APP-2023-999"), ApplicationPatch::default())
            .await,
        Err(ApplicationServiceError::NotFound(_))
    ));
    assert!(matches!(
        service.list(PageRequest::new(1, 0)).await,
        Err(ApplicationServiceError::InvalidPage { .. })
    ));

    let offline = AdmissionsService::new(Arc::new(UnavailableRepository), Duration::ZERO);
    assert!(matches!(
        offline.list(PageRequest::default()).await,
        Err(ApplicationServiceError::Repository(_))
    ));
}
