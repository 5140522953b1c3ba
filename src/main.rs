use actix_web::{middleware::Logger, web, App, HttpServer};
use std::sync::Arc;
use tracing::info;
use user_service::config::{config, EnvConfig, CONFIG};
use user_service::db::DbService;
use user_service::routes::configure_routes;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));
    CONFIG.get_or_init(EnvConfig::from_env);
    let config = config();
    let addr = format!("{}:{}", config.host, config.port);

    let db_service = Arc::new(
        DbService::new(&config.db_url)
            .await
            .map_err(std::io::Error::other)?,
    );

    info!("Starting server on {}", addr);

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(web::Data::new(Arc::clone(&db_service)))
            .configure(configure_routes)
    })
    .bind(addr)?
    .run()
    .await
}
