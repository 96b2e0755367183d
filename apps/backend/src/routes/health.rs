use actix_web::{web, HttpResponse};
use migration::get_latest_migration_version;
use sea_orm::{ConnectionTrait, DatabaseConnection, Statement};
use serde::Serialize;
use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;

use crate::db::require_db;
use crate::error::AppError;
use crate::state::app_state::AppState;

pub async fn root() -> Result<HttpResponse, AppError> {
    Ok(HttpResponse::Ok().body("Local library backend"))
}

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: &'static str,
    app_version: &'static str,
    #[serde(flatten)]
    db: DbHealth,
    time: String,
}

#[derive(Debug, Serialize)]
struct DbHealth {
    db: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    db_error: Option<String>,
    migrations: String,
}

impl DbHealth {
    fn failed(error: String) -> Self {
        Self {
            db: "error",
            db_error: Some(error),
            migrations: "unknown".to_string(),
        }
    }
}

async fn probe_db(db: &DatabaseConnection) -> DbHealth {
    let ping = Statement::from_string(db.get_database_backend(), "SELECT 1");
    if let Err(e) = db.query_one(ping).await {
        return DbHealth::failed(format!("DB query failed: {e}"));
    }

    let migrations = match get_latest_migration_version(db).await {
        Ok(Some(version)) => version,
        Ok(None) => "no_migrations".to_string(),
        Err(_) => "unknown".to_string(),
    };

    DbHealth {
        db: "ok",
        db_error: None,
        migrations,
    }
}

/// Always 200; database trouble is reported in the body.
async fn health(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let db = match require_db(&app_state) {
        Ok(conn) => probe_db(conn).await,
        Err(e) => DbHealth::failed(format!("DB unavailable: {e}")),
    };

    let time = OffsetDateTime::now_utc()
        .format(&Rfc3339)
        .unwrap_or_else(|_| "unknown".to_string());

    Ok(HttpResponse::Ok().json(HealthResponse {
        status: "ok",
        app_version: env!("CARGO_PKG_VERSION"),
        db,
        time,
    }))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health));
}
