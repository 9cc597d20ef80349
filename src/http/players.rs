//! Player registration and listing.

use actix_web::{get, post, web, HttpResponse};
use serde::Deserialize;

use crate::error::ServiceError;
use crate::league::service::LeagueService;

#[derive(Deserialize)]
pub struct NewPlayer {
    pub name: String,
}

/// POST /api/players — register a new player at the initial rating.
#[post("/players")]
pub async fn add(
    svc: web::Data<LeagueService>,
    body: web::Json<NewPlayer>,
) -> Result<HttpResponse, ServiceError> {
    let outcome = svc.add_player(&body.name).await?;
    Ok(HttpResponse::Ok().json(outcome))
}

/// GET /api/players — raw player table in insertion order.
#[get("/players")]
pub async fn list(svc: web::Data<LeagueService>) -> Result<HttpResponse, ServiceError> {
    Ok(HttpResponse::Ok().json(svc.players().await?))
}

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(add).service(list);
}
