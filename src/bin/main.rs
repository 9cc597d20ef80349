use actix_web::{middleware::Logger, web, App, HttpServer};
use foosball_server::league::service::LeagueService;
use foosball_server::store::PgStore;
use foosball_server::{http, metrics};
use once_cell::sync::Lazy;
use sqlx::postgres::PgPoolOptions;
use std::env;
use std::sync::Arc;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init();

    // Configuration
    let database_url = env::var("DATABASE_URL").expect("DATABASE_URL must be set");
    let server_addr = env::var("SERVER_ADDR").unwrap_or_else(|_| "127.0.0.1:8080".into());

    // One long-lived Postgres pool; storage is opened once at startup,
    // not re-authenticated per request.
    let db_pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&database_url)
        .await
        .expect("Failed to create Postgres pool");

    sqlx::migrate!("./migrations")
        .run(&db_pool)
        .await
        .expect("Failed to run migrations");

    let service = web::Data::new(LeagueService::new(Arc::new(PgStore::new(db_pool))));

    // Rebuild win/loss counters in case the history table was edited by hand.
    if let Err(e) = service.warm().await {
        log::warn!("startup counter rebuild failed: {e}");
    }

    Lazy::force(&metrics::MATCHES_RECORDED);

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .wrap(metrics::METRICS.clone())
            .app_data(service.clone())
            .configure(http::routes::init_routes)
    })
    .bind(&server_addr)?
    .run()
    .await
}
