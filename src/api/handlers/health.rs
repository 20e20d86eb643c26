//! Handler for health check endpoint.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::health::{CheckStatus, HealthChecks, HealthResponse};
use crate::state::AppState;

/// Returns service health status with component checks.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Response Codes
///
/// - **200 OK**: All components healthy
/// - **503 Service Unavailable**: One or more components degraded
///
/// # Response
///
/// ```json
/// {
///   "status": "healthy",
///   "version": "0.1.0",
///   "checks": {
///     "catalog": { "status": "ok", "message": "42 gift cards" },
///     "route_table": { "status": "ok", "message": "8 patterns, prefix app://open" }
///   }
/// }
/// ```
pub async fn health_handler(
    State(state): State<AppState>,
) -> Result<Json<HealthResponse>, (StatusCode, Json<HealthResponse>)> {
    let catalog_check = check_catalog(&state).await;
    let route_check = check_route_table(&state);

    let all_healthy = catalog_check.status == "ok" && route_check.status == "ok";

    let response = HealthResponse {
        status: if all_healthy { "healthy" } else { "degraded" }.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: HealthChecks {
            catalog: catalog_check,
            route_table: route_check,
        },
    };

    if all_healthy {
        Ok(Json(response))
    } else {
        Err((StatusCode::SERVICE_UNAVAILABLE, Json(response)))
    }
}

async fn check_catalog(state: &AppState) -> CheckStatus {
    if !state.catalog.health_check().await {
        return CheckStatus {
            status: "error".to_string(),
            message: Some("Catalog health check failed".to_string()),
        };
    }

    match state.catalog.snapshot().await {
        Ok(snapshot) => CheckStatus {
            status: "ok".to_string(),
            message: Some(format!("{} gift cards", snapshot.len())),
        },
        Err(e) => CheckStatus {
            status: "error".to_string(),
            message: Some(format!("Catalog error: {}", e)),
        },
    }
}

fn check_route_table(state: &AppState) -> CheckStatus {
    let patterns = state.resolver.route_table().patterns().len();

    if patterns == 0 {
        CheckStatus {
            status: "error".to_string(),
            message: Some("Route table is empty".to_string()),
        }
    } else {
        CheckStatus {
            status: "ok".to_string(),
            message: Some(format!(
                "{} patterns, prefix {}",
                patterns,
                state.resolver.prefix()
            )),
        }
    }
}
