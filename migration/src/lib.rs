/*
 * SPDX-FileCopyrightText: 2026 Pixis Contributors
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

pub use sea_orm_migration::prelude::*;

mod m20250601_000001_create_table_department;
mod m20250601_000002_create_table_service;
mod m20250601_000003_create_table_conscript;
mod m20250601_000004_create_table_duty;
mod m20250601_000005_create_table_conscript_duty;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250601_000001_create_table_department::Migration),
            Box::new(m20250601_000002_create_table_service::Migration),
            Box::new(m20250601_000003_create_table_conscript::Migration),
            Box::new(m20250601_000004_create_table_duty::Migration),
            Box::new(m20250601_000005_create_table_conscript_duty::Migration),
        ]
    }
}
