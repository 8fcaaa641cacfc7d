#[cfg(feature = "server")]
use std::sync::Arc;

#[cfg(feature = "server")]
use actix_files::Files;
#[cfg(feature = "server")]
use actix_web::{App, HttpServer, middleware, web};
#[cfg(feature = "server")]
use tera::Tera;

#[cfg(feature = "server")]
use crate::models::config::ServerConfig;
#[cfg(feature = "server")]
use crate::news::NewsClient;
#[cfg(feature = "server")]
use crate::routes::main::{not_found, show_index};
#[cfg(feature = "server")]
use crate::routes::search::search;

#[cfg(feature = "data")]
pub mod domain;
#[cfg(feature = "data")]
pub mod dto;
#[cfg(feature = "data")]
pub mod pagination;

#[cfg(feature = "server")]
pub mod forms;
#[cfg(feature = "server")]
pub mod models;
#[cfg(feature = "server")]
pub mod news;
#[cfg(feature = "server")]
pub mod routes;
#[cfg(feature = "server")]
pub mod services;

/// Registers shared state, static assets and every route of the application.
#[cfg(feature = "server")]
pub fn configure(
    cfg: &mut web::ServiceConfig,
    tera: Tera,
    news_client: Arc<dyn NewsClient>,
    assets_dir: &str,
) {
    cfg.app_data(web::Data::new(tera))
        .app_data(web::Data::from(news_client))
        .service(Files::new("/assets", assets_dir))
        .service(show_index)
        .service(search)
        .default_service(web::to(not_found));
}

/// Builds and runs the Actix-Web HTTP server using the provided configuration.
#[cfg(feature = "server")]
pub async fn run(
    server_config: ServerConfig,
    news_client: Arc<dyn NewsClient>,
) -> std::io::Result<()> {
    let tera = Tera::new(&server_config.templates_dir)
        .map_err(|e| std::io::Error::other(format!("Template parsing error(s): {e}")))?;

    let bind_address = (server_config.address.clone(), server_config.port);
    log::info!(
        "Listening on {}:{} with page size {}",
        bind_address.0,
        bind_address.1,
        news_client.page_size()
    );

    HttpServer::new(move || {
        App::new()
            .wrap(middleware::Compress::default())
            .wrap(middleware::Logger::default())
            .configure(|cfg| {
                configure(
                    cfg,
                    tera.clone(),
                    news_client.clone(),
                    &server_config.assets_dir,
                )
            })
    })
    .bind(bind_address)?
    .run()
    .await
}
