/*
 * SPDX-FileCopyrightText: 2026 Pixis Contributors
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

//! Persistence gateway tests against an in-memory SQLite store

use pixis_core::database::*;
use pixis_core::types::*;
use sea_orm::ActiveValue::Set;
use sea_orm::{ColumnTrait, Condition, ConnectOptions, DatabaseConnection};

async fn memory_db() -> DatabaseConnection {
    let mut opt = ConnectOptions::new("sqlite::memory:");
    opt.max_connections(1).min_connections(1).sqlx_logging(false);
    open_db(opt).await.expect("in-memory store should open")
}

fn department(label: &str) -> ADepartment {
    ADepartment {
        label: Set(label.to_string()),
        ..Default::default()
    }
}

#[tokio::test]
async fn test_create_assigns_id_and_timestamps() {
    let db = memory_db().await;

    let created = create(&db, department("Signals")).await.unwrap();

    assert!(created.id > 0);
    assert_eq!(created.label, "Signals");
    assert_eq!(created.created_at, created.updated_at);

    let fetched = find_by_id::<EDepartment>(&db, created.id, "Department")
        .await
        .unwrap();
    assert_eq!(fetched, created);
}

#[tokio::test]
async fn test_find_by_id_missing_is_not_found() {
    let db = memory_db().await;

    let result = find_by_id::<EDepartment>(&db, 99, "Department").await;

    assert!(matches!(result, Err(StoreError::NotFound("Department"))));
}

#[tokio::test]
async fn test_duplicate_label_is_conflict() {
    let db = memory_db().await;

    create(&db, department("Ops")).await.unwrap();
    let result = create(&db, department("Ops")).await;

    assert!(matches!(result, Err(StoreError::Conflict(_))));
}

#[tokio::test]
async fn test_unknown_reference_is_rejected() {
    let db = memory_db().await;

    let service = AService {
        label: Set("Radio".to_string()),
        department_id: Set(42),
        ..Default::default()
    };

    let result = create(&db, service).await;

    assert!(matches!(result, Err(StoreError::InvalidReference(_))));
}

#[tokio::test]
async fn test_find_all_with_filter() {
    let db = memory_db().await;

    let first = create(&db, department("First")).await.unwrap();
    let second = create(&db, department("Second")).await.unwrap();

    for (label, department_id) in [("Radio", first.id), ("Supply", first.id), ("Mess", second.id)] {
        let service = AService {
            label: Set(label.to_string()),
            department_id: Set(department_id),
            ..Default::default()
        };
        create(&db, service).await.unwrap();
    }

    let all = find_all::<EService>(&db, Condition::all()).await.unwrap();
    assert_eq!(all.len(), 3);

    let filtered = find_all::<EService>(
        &db,
        Condition::all().add(CService::DepartmentId.eq(first.id)),
    )
    .await
    .unwrap();
    assert_eq!(filtered.len(), 2);
    assert!(filtered.iter().all(|s| s.department_id == first.id));
}

#[tokio::test]
async fn test_update_refreshes_updated_at() {
    let db = memory_db().await;

    let created = create(&db, department("Medical")).await.unwrap();

    let mut adepartment: ADepartment = created.clone().into();
    adepartment.label = Set("Medical Corps".to_string());
    let updated = update(&db, adepartment).await.unwrap();

    assert_eq!(updated.id, created.id);
    assert_eq!(updated.label, "Medical Corps");
    assert_eq!(updated.created_at, created.created_at);
    assert!(updated.updated_at >= created.updated_at);
}

#[tokio::test]
async fn test_delete_then_find_is_not_found() {
    let db = memory_db().await;

    let created = create(&db, department("Transport")).await.unwrap();

    delete_by_id::<EDepartment>(&db, created.id, "Department")
        .await
        .unwrap();

    let result = find_by_id::<EDepartment>(&db, created.id, "Department").await;
    assert!(matches!(result, Err(StoreError::NotFound(_))));

    let again = delete_by_id::<EDepartment>(&db, created.id, "Department").await;
    assert!(matches!(again, Err(StoreError::NotFound(_))));
}

#[tokio::test]
async fn test_delete_referenced_is_conflict() {
    let db = memory_db().await;

    let parent = create(&db, department("Engineering")).await.unwrap();
    let service = AService {
        label: Set("Bridges".to_string()),
        department_id: Set(parent.id),
        ..Default::default()
    };
    create(&db, service).await.unwrap();

    let result = delete_by_id::<EDepartment>(&db, parent.id, "Department").await;

    assert!(matches!(result, Err(StoreError::Conflict(_))));
}

#[tokio::test]
async fn test_find_one_by_condition() {
    let db = memory_db().await;

    create(&db, department("Archive")).await.unwrap();

    let found = find_one::<EDepartment>(
        &db,
        Condition::all().add(CDepartment::Label.eq("Archive")),
        "Department",
    )
    .await
    .unwrap();
    assert_eq!(found.label, "Archive");

    let missing = find_one::<EDepartment>(
        &db,
        Condition::all().add(CDepartment::Label.eq("Nope")),
        "Department",
    )
    .await;
    assert!(matches!(missing, Err(StoreError::NotFound("Department"))));
}
