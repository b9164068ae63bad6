use actix_web::{web, HttpResponse, Responder};
use validator::Validate;
use crate::core::TeamBuilder;
use crate::error::TeamBuildError;
use crate::models::{BuildTeamsRequest, BuildTeamsResponse, ErrorResponse, HealthResponse};

/// Application state shared across all handlers
#[derive(Debug, Clone)]
pub struct AppState {
    pub builder: TeamBuilder,
}

/// Configure all team-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/teams/build", web::post().to(build_teams));
}

/// Health check endpoint
async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Build teams endpoint
///
/// POST /api/v1/teams/build
///
/// Request body:
/// ```json
/// {
///   "teamLeads": [{"id": 1, "name": "string"}],
///   "juniors": [{"id": 1, "name": "string"}],
///   "teamLeadsWishlists": [{"employeeId": 1, "desiredEmployees": [1]}],
///   "juniorsWishlists": [{"employeeId": 1, "desiredEmployees": [1]}]
/// }
/// ```
async fn build_teams(
    state: web::Data<AppState>,
    req: web::Json<BuildTeamsRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for build_teams request: {:?}", errors);
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    let build_id = uuid::Uuid::new_v4().to_string();
    tracing::info!(
        "Building {} teams (build {})",
        req.team_leads.len(),
        build_id
    );

    // The optimizer is CPU bound, keep it off the async worker
    let builder = state.builder.clone();
    let req = req.into_inner();
    let result = web::block(move || {
        builder.build_with_report(
            &req.team_leads,
            &req.juniors,
            &req.team_leads_wishlists,
            &req.juniors_wishlists,
        )
    })
    .await;

    match result {
        Ok(Ok(report)) => {
            tracing::info!(
                "Build {} done: cost {} -> {}, harmonic mean {:.3}",
                build_id,
                report.greedy_cost,
                report.total_cost,
                report.harmonic_mean
            );
            HttpResponse::Ok().json(BuildTeamsResponse { build_id, report })
        }
        Ok(Err(e)) => {
            tracing::info!("Build {} rejected: {}", build_id, e);
            let error = match &e {
                TeamBuildError::TeamSizeMismatch { .. } => "Team size mismatch",
                TeamBuildError::EmptyWishlist(_) => "Empty wishlist",
            };
            HttpResponse::BadRequest().json(ErrorResponse {
                error: error.to_string(),
                message: e.to_string(),
                status_code: 400,
            })
        }
        Err(e) => {
            tracing::error!("Team build {} failed to run: {}", build_id, e);
            HttpResponse::InternalServerError().json(ErrorResponse {
                error: "Failed to build teams".to_string(),
                message: e.to_string(),
                status_code: 500,
            })
        }
    }
}
