use std::env;
use std::sync::Arc;

use dotenvy::dotenv;

use news_search::models::config::ServerConfig;
use news_search::news::NewsApiClient;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok(); // Load .env file
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    // Select config profile (defaults to `local`).
    let app_env = env::var("APP_ENV").unwrap_or_else(|_| "local".into());

    let server_config = match ServerConfig::load(&app_env) {
        Ok(server_config) => server_config,
        Err(err) => {
            log::error!("Error loading server config: {}", err);
            std::process::exit(1);
        }
    };

    let news_client = match NewsApiClient::from_config(&server_config) {
        Ok(news_client) => news_client,
        Err(err) => {
            log::error!("Error building news client: {}", err);
            std::process::exit(1);
        }
    };

    news_search::run(server_config, Arc::new(news_client)).await
}
