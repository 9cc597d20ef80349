//! Ranked-table endpoint.

use actix_web::{get, web, HttpResponse};

use crate::error::ServiceError;
use crate::league::service::LeagueService;

/// GET /api/leaderboard
#[get("/leaderboard")]
pub async fn leaderboard(svc: web::Data<LeagueService>) -> Result<HttpResponse, ServiceError> {
    let rows = svc.leaderboard().await?;
    Ok(HttpResponse::Ok().json(rows))
}

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(leaderboard);
}
