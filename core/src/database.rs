/*
 * SPDX-FileCopyrightText: 2026 Pixis Contributors
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

//! Persistence gateway over the shared sea-orm connection.
//!
//! Every operation is a single statement against one relation. Failures are
//! folded into [`StoreError`] so callers can tell a missing row apart from a
//! constraint violation or a broken store.

use anyhow::{Context, Result};
use migration::{Migrator, MigratorTrait};
use sea_orm::{
    ActiveModelBehavior, ActiveModelTrait, Condition, ConnectOptions, Database,
    DatabaseConnection, DbErr, EntityTrait, IntoActiveModel, PrimaryKeyTrait, QueryFilter, SqlErr,
};
use std::time::Duration;

use super::types::Cli;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("{0} not found")]
    NotFound(&'static str),
    #[error("conflicting record: {0}")]
    Conflict(String),
    #[error("invalid reference: {0}")]
    InvalidReference(String),
    #[error("database error: {0}")]
    Database(#[source] DbErr),
}

impl From<DbErr> for StoreError {
    fn from(err: DbErr) -> Self {
        match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(msg)) => StoreError::Conflict(msg),
            Some(SqlErr::ForeignKeyConstraintViolation(msg)) => StoreError::InvalidReference(msg),
            _ => StoreError::Database(err),
        }
    }
}

pub type IdOf<E> = <<E as EntityTrait>::PrimaryKey as PrimaryKeyTrait>::ValueType;

pub async fn connect_db(cli: &Cli) -> Result<DatabaseConnection> {
    let db_url = if let Some(file) = &cli.database_url_file {
        std::fs::read_to_string(file)
            .context("Failed to read database url from file")?
            .trim()
            .to_string()
    } else {
        cli.database_url.clone()
    };

    let mut opt = ConnectOptions::new(db_url);

    // Only log statements when explicitly debugging
    let verbose = matches!(cli.log_level.as_str(), "debug" | "trace");

    opt.sqlx_logging(verbose)
        .max_connections(cli.max_connections)
        .min_connections(1)
        .connect_timeout(Duration::from_secs(8))
        .acquire_timeout(Duration::from_secs(8));

    open_db(opt).await
}

/// Opens the store and brings the schema up to date.
pub async fn open_db(opt: ConnectOptions) -> Result<DatabaseConnection> {
    let db = Database::connect(opt)
        .await
        .context("Failed to connect to database")?;
    Migrator::up(&db, None)
        .await
        .context("Failed to run database migrations")?;
    Ok(db)
}

pub async fn create<A>(
    db: &DatabaseConnection,
    record: A,
) -> Result<<A::Entity as EntityTrait>::Model, StoreError>
where
    A: ActiveModelTrait + ActiveModelBehavior + Send + 'static,
    <A::Entity as EntityTrait>::Model: IntoActiveModel<A>,
{
    Ok(record.insert(db).await?)
}

pub async fn find_all<E>(db: &DatabaseConnection, filter: Condition) -> Result<Vec<E::Model>, StoreError>
where
    E: EntityTrait,
{
    Ok(E::find().filter(filter).all(db).await?)
}

pub async fn find_one<E>(
    db: &DatabaseConnection,
    filter: Condition,
    resource: &'static str,
) -> Result<E::Model, StoreError>
where
    E: EntityTrait,
{
    E::find()
        .filter(filter)
        .one(db)
        .await?
        .ok_or(StoreError::NotFound(resource))
}

pub async fn find_by_id<E>(
    db: &DatabaseConnection,
    id: IdOf<E>,
    resource: &'static str,
) -> Result<E::Model, StoreError>
where
    E: EntityTrait,
{
    E::find_by_id(id)
        .one(db)
        .await?
        .ok_or(StoreError::NotFound(resource))
}

pub async fn update<A>(
    db: &DatabaseConnection,
    record: A,
) -> Result<<A::Entity as EntityTrait>::Model, StoreError>
where
    A: ActiveModelTrait + ActiveModelBehavior + Send + 'static,
    <A::Entity as EntityTrait>::Model: IntoActiveModel<A>,
{
    Ok(record.update(db).await?)
}

/// Deletes one row by primary key. A row that is still referenced by
/// another relation is reported as a conflict.
pub async fn delete_by_id<E>(
    db: &DatabaseConnection,
    id: IdOf<E>,
    resource: &'static str,
) -> Result<(), StoreError>
where
    E: EntityTrait,
{
    let result = E::delete_by_id(id)
        .exec(db)
        .await
        .map_err(|e| match StoreError::from(e) {
            StoreError::InvalidReference(msg) => StoreError::Conflict(msg),
            other => other,
        })?;

    if result.rows_affected == 0 {
        return Err(StoreError::NotFound(resource));
    }

    Ok(())
}
