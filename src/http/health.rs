//! Simple liveness / readiness probe

use actix_web::{get, web, HttpResponse, Responder};

use crate::league::service::LeagueService;

#[get("/healthz")]
pub async fn healthz(svc: web::Data<LeagueService>) -> impl Responder {
    if svc.ping().await.is_err() {
        return HttpResponse::ServiceUnavailable().body("db");
    }
    HttpResponse::Ok().body("ok")
}

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(healthz);
}
