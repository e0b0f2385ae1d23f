use actix_web::{web, HttpResponse, Responder};
use validator::Validate;
use crate::core::Matcher;
use crate::models::{ErrorResponse, FindMatchesRequest, FindMatchesResponse, HealthResponse, LocationRecord};
use std::sync::Arc;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<Vec<LocationRecord>>,
    pub matcher: Matcher,
    pub default_limit: u16,
    pub max_limit: u16,
}

/// Configure all match-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/locations", web::get().to(list_locations))
        .route("/matches/find", web::post().to(find_matches));
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    let status = if state.catalog.is_empty() { "degraded" } else { "healthy" };

    HttpResponse::Ok().json(HealthResponse {
        status: status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
        locations: state.catalog.len(),
    })
}

/// Catalog listing endpoint
///
/// GET /api/v1/locations
async fn list_locations(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(state.catalog.as_slice())
}

/// Find matches endpoint
///
/// POST /api/v1/matches/find
///
/// Request body:
/// ```json
/// {
///   "preferences": {
///     "commute": { "maxTime": 30, "preferredModes": ["walk"] },
///     "housing": { "type": "any", "priceRange": { "min": 1000, "max": 3000 }, "size": "any" },
///     "lifestyle": { "nightlife": 3, "culture": 3, "outdoors": 3, "dining": 3,
///                    "shopping": 3, "quietness": 3, "walkability": 4, "safety": 5 },
///     "priorities": { "safety": 10 }
///   },
///   "limit": 10
/// }
/// ```
async fn find_matches(
    state: web::Data<AppState>,
    req: web::Json<FindMatchesRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::warn!("Validation failed for find_matches request: {}", errors);
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    // Presentation limit only; the full catalog is always ranked
    let limit = req
        .limit
        .unwrap_or(state.default_limit)
        .min(state.max_limit) as usize;

    let mut matches = match state.matcher.find_matches(&req.preferences, &state.catalog) {
        Ok(matches) => matches,
        Err(e) => {
            tracing::warn!("Rejected preference profile: {}", e);
            return HttpResponse::BadRequest().json(ErrorResponse {
                error: "Invalid preferences".to_string(),
                message: e.to_string(),
                status_code: 400,
            });
        }
    };

    let total_results = matches.len();
    matches.truncate(limit);

    let response = FindMatchesResponse {
        run_id: uuid::Uuid::new_v4(),
        generated_at: chrono::Utc::now(),
        matches,
        total_results,
    };

    tracing::info!(
        "Returning {} matches (from {} locations), run {}",
        response.matches.len(),
        total_results,
        response.run_id
    );

    HttpResponse::Ok().json(response)
}
