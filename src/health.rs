use actix_web::{get, web, Responder};
use sea_orm::{ConnectionTrait, DatabaseConnection, Statement};
use serde::Serialize;
use std::sync::Arc;
use tracing::warn;
use utoipa::ToSchema;

use crate::{
    api::schemas::{ErrorResponse, SuccessResponse},
    shared::api::ApiResponse,
};

#[derive(Serialize, ToSchema)]
pub struct HealthStatus {
    #[schema(example = "OK")]
    pub status: &'static str,
    #[schema(example = "Server is running")]
    pub message: &'static str,
}

#[derive(Serialize, ToSchema)]
pub struct ReadinessStatus {
    #[schema(example = "ready")]
    pub status: &'static str,
    #[schema(example = "ok")]
    pub database: &'static str,
}

/// LIVENESS PROBE
/// - No I/O
#[utoipa::path(
    get,
    path = "/api/health",
    tag = "health",
    responses((status = 200, description = "Process is up", body = inline(SuccessResponse<HealthStatus>)))
)]
#[get("/api/health")]
pub async fn health() -> impl Responder {
    ApiResponse::success(HealthStatus {
        status: "OK",
        message: "Server is running",
    })
}

/// READINESS PROBE
/// - Checks the database answers
#[utoipa::path(
    get,
    path = "/api/ready",
    tag = "health",
    responses(
        (status = 200, description = "Dependencies reachable", body = inline(SuccessResponse<ReadinessStatus>)),
        (status = 503, description = "Database unreachable", body = ErrorResponse)
    )
)]
#[get("/api/ready")]
pub async fn readiness(db: web::Data<Arc<DatabaseConnection>>) -> impl Responder {
    let probe = db
        .execute(Statement::from_string(
            db.get_database_backend(),
            "SELECT 1",
        ))
        .await;

    match probe {
        Ok(_) => ApiResponse::success(ReadinessStatus {
            status: "ready",
            database: "ok",
        }),
        Err(e) => {
            warn!(error = %e, "Readiness probe failed");
            ApiResponse::service_unavailable("DATABASE_UNAVAILABLE", "Database is not reachable")
        }
    }
}
