/*
 * SPDX-FileCopyrightText: 2026 Pixis Contributors
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use super::input::{greater_than_zero, port_in_range};
use clap::Parser;
use entity::*;
use sea_orm::DatabaseConnection;
use serde::{Deserialize, Serialize};

#[derive(Parser, Debug, Clone)]
#[command(name = "Pixis", display_name = "Pixis", bin_name = "pixis-server", version, about, long_about = None)]
pub struct Cli {
    #[arg(long, env = "PIXIS_LOG_LEVEL", default_value = "info")]
    pub log_level: String,
    #[arg(long, env = "PIXIS_LOG_JSON", default_value = "false")]
    pub log_json: bool,
    #[arg(long, env = "PIXIS_IP", default_value = "127.0.0.1")]
    pub ip: String,
    #[arg(long, env = "PIXIS_PORT", value_parser = port_in_range, default_value_t = 3000)]
    pub port: u16,
    #[arg(long, env = "PIXIS_SERVE_URL")]
    pub serve_url: Option<String>,
    #[arg(
        long,
        env = "PIXIS_DATABASE_URL",
        default_value = "sqlite://pixis.db?mode=rwc"
    )]
    pub database_url: String,
    #[arg(long, env = "PIXIS_DATABASE_URL_FILE")]
    pub database_url_file: Option<String>,
    #[arg(long, env = "PIXIS_MAX_CONNECTIONS", value_parser = greater_than_zero::<u32>, default_value = "10")]
    pub max_connections: u32,
    #[arg(long, env = "PIXIS_JWT_SECRET_FILE")]
    pub jwt_secret_file: Option<String>,
    #[arg(long, env = "PIXIS_JWT_SECRET", hide_env_values = true)]
    pub jwt_secret: Option<String>,
}

/// Shared state handed to every request handler.
#[derive(Debug)]
pub struct ServerState {
    pub db: DatabaseConnection,
    pub cli: Cli,
    pub jwt_secret: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct StatusResponse {
    pub status: String,
}

pub type EConscript = conscript::Entity;
pub type EConscriptDuty = conscript_duty::Entity;
pub type EDepartment = department::Entity;
pub type EDuty = duty::Entity;
pub type EService = service::Entity;

pub type MConscript = conscript::Model;
pub type MConscriptDuty = conscript_duty::Model;
pub type MDepartment = department::Model;
pub type MDuty = duty::Model;
pub type MService = service::Model;

pub type AConscript = conscript::ActiveModel;
pub type AConscriptDuty = conscript_duty::ActiveModel;
pub type ADepartment = department::ActiveModel;
pub type ADuty = duty::ActiveModel;
pub type AService = service::ActiveModel;

pub type CConscript = conscript::Column;
pub type CConscriptDuty = conscript_duty::Column;
pub type CDepartment = department::Column;
pub type CDuty = duty::Column;
pub type CService = service::Column;
