//Third-party-dependencies
use actix_cors::Cors;
use actix_web::{web, App, HttpServer};
use log::{error, info};

use team_admin::config::AppConfig;
use team_admin::routes::team_routes;
use team_admin::services::team_store::TeamStore;
use team_admin::services::team_workflow::TeamWorkflow;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let config = AppConfig::from_env();

    let store = match &config.seed_file {
        Some(path) => TeamStore::load_seed_file(path).map_err(|e| {
            error!("❌ Could not seed teams: {}", e);
            std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string())
        })?,
        None => TeamStore::new(),
    };

    let workflow = TeamWorkflow::new(store, config.page_size, config.latency);

    info!("Server started at {}", config.bind_address);
    HttpServer::new(move || {
        App::new()
            .wrap(Cors::permissive())
            .app_data(web::Data::new(workflow.clone()))
            .configure(team_routes::init_routes)
    })
        .bind(&config.bind_address)?
        .run()
        .await
}
