use actix_web::{get, web, HttpResponse, Responder};
use chrono::Utc;
use sea_orm::{ConnectionTrait, DatabaseBackend, Statement};
use serde::Serialize;
use utoipa::ToSchema;

use crate::AppState;

#[derive(Serialize, ToSchema)]
pub struct DatabaseHealth {
    pub healthy: bool,
    pub message: String,
}

#[derive(Serialize, ToSchema)]
pub struct HealthServices {
    pub database: DatabaseHealth,
}

#[derive(Serialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: String,
    pub services: HealthServices,
}

/// Liveness probe: a trivial round trip to the database decides between
/// 200 "healthy" and 503 "unhealthy". Fault details stay in the log.
#[utoipa::path(
    get,
    path = "/api/health",
    responses(
        (status = 200, description = "Service and database reachable", body = HealthResponse),
        (status = 503, description = "Database unreachable", body = HealthResponse)
    ),
    tag = "health"
)]
#[get("/api/health")]
pub async fn health_handler(data: web::Data<AppState>) -> impl Responder {
    let probe = data
        .db
        .execute(Statement::from_string(
            DatabaseBackend::Postgres,
            "SELECT 1",
        ))
        .await;

    let database = match probe {
        Ok(_) => DatabaseHealth {
            healthy: true,
            message: "Database connection is healthy".to_string(),
        },
        Err(err) => {
            tracing::error!(error = %err, "health probe failed");
            DatabaseHealth {
                healthy: false,
                message: "Database connection failed".to_string(),
            }
        }
    };

    let body = HealthResponse {
        status: if database.healthy {
            "healthy"
        } else {
            "unhealthy"
        }
        .to_string(),
        timestamp: Utc::now().to_rfc3339(),
        services: HealthServices { database },
    };

    if body.services.database.healthy {
        HttpResponse::Ok().json(body)
    } else {
        HttpResponse::ServiceUnavailable().json(body)
    }
}
