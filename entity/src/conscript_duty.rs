/*
 * SPDX-FileCopyrightText: 2026 Pixis Contributors
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use chrono::Utc;
use sea_orm::ActiveValue::Set;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Assignment of a duty to a conscript for an optional time window.
///
/// The pair `(conscript_id, duty_id)` is the primary key, so a duty can be
/// assigned to the same conscript at most once.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Deserialize, Serialize)]
#[sea_orm(table_name = "conscript_duty")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub conscript_id: i32,
    #[sea_orm(primary_key, auto_increment = false)]
    pub duty_id: i32,
    pub start_time: Option<DateTimeUtc>,
    pub end_time: Option<DateTimeUtc>,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::conscript::Entity",
        from = "Column::ConscriptId",
        to = "super::conscript::Column::Id"
    )]
    Conscript,
    #[sea_orm(
        belongs_to = "super::duty::Entity",
        from = "Column::DutyId",
        to = "super::duty::Column::Id"
    )]
    Duty,
}

impl Related<super::conscript::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Conscript.def()
    }
}

impl Related<super::duty::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Duty.def()
    }
}

#[async_trait::async_trait]
impl ActiveModelBehavior for ActiveModel {
    async fn before_save<C>(mut self, _db: &C, insert: bool) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        let now = Utc::now();
        if insert {
            self.created_at = Set(now);
        }
        self.updated_at = Set(now);
        Ok(self)
    }
}
