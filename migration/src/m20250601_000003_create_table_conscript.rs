/*
 * SPDX-FileCopyrightText: 2026 Pixis Contributors
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Conscript::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Conscript::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Conscript::FirstName).string().not_null())
                    .col(ColumnDef::new(Conscript::LastName).string().not_null())
                    .col(
                        ColumnDef::new(Conscript::RegistryNumber)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(Conscript::Username)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Conscript::Password).string().not_null())
                    .col(ColumnDef::new(Conscript::DepartmentId).integer().not_null())
                    .col(
                        ColumnDef::new(Conscript::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Conscript::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-conscript-department_id")
                            .from(Conscript::Table, Conscript::DepartmentId)
                            .to(Department::Table, Department::Id)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Conscript::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Conscript {
    Table,
    Id,
    FirstName,
    LastName,
    RegistryNumber,
    Username,
    Password,
    DepartmentId,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Department {
    Table,
    Id,
}
