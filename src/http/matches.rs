//! Match submission and history endpoints.

use actix_web::{get, post, web, HttpResponse};

use crate::error::ServiceError;
use crate::league::recorder::MatchSubmission;
use crate::league::service::LeagueService;
use crate::metrics;

/// POST /api/matches — confirm a finished match.
#[post("/matches")]
pub async fn submit(
    svc: web::Data<LeagueService>,
    body: web::Json<MatchSubmission>,
) -> Result<HttpResponse, ServiceError> {
    let outcome = svc.submit_match(body.into_inner()).await?;
    metrics::MATCHES_RECORDED.inc();
    Ok(HttpResponse::Ok().json(outcome))
}

/// GET /api/matches — full history, oldest first.
#[get("/matches")]
pub async fn history(svc: web::Data<LeagueService>) -> Result<HttpResponse, ServiceError> {
    Ok(HttpResponse::Ok().json(svc.history().await?))
}

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(submit).service(history);
}
