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
                    .table(ConscriptDuty::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ConscriptDuty::ConscriptId)
                            .integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(ConscriptDuty::DutyId).integer().not_null())
                    .col(ColumnDef::new(ConscriptDuty::StartTime).timestamp_with_time_zone())
                    .col(ColumnDef::new(ConscriptDuty::EndTime).timestamp_with_time_zone())
                    .col(
                        ColumnDef::new(ConscriptDuty::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ConscriptDuty::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .primary_key(
                        Index::create()
                            .name("pk-conscript_duty")
                            .col(ConscriptDuty::ConscriptId)
                            .col(ConscriptDuty::DutyId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-conscript_duty-conscript_id")
                            .from(ConscriptDuty::Table, ConscriptDuty::ConscriptId)
                            .to(Conscript::Table, Conscript::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-conscript_duty-duty_id")
                            .from(ConscriptDuty::Table, ConscriptDuty::DutyId)
                            .to(Duty::Table, Duty::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ConscriptDuty::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum ConscriptDuty {
    Table,
    ConscriptId,
    DutyId,
    StartTime,
    EndTime,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Conscript {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Duty {
    Table,
    Id,
}
