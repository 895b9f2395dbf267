mod config;
mod doc;
mod dtos;
mod error;
mod routes;
mod state;
mod utils;

use crate::{config::ServerConfig, doc::ApiDoc, state::AppState, utils::shutdown::shutdown_signal};
use database::{
    config::{DatabaseConfig, SearchConfig},
    db::create_connection,
};
use log::info;
use tower::ServiceBuilder;
use tower_http::compression::CompressionLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    env_logger::init();

    let server_config = ServerConfig::from_env()?;
    let database_config = DatabaseConfig::from_env()?;
    let search_config = SearchConfig::from_env()?;
    info!(
        "Sale prices use the {} window, pages default to {} of at most {}",
        search_config.sale_price_window,
        search_config.default_page_size,
        search_config.max_page_size
    );

    let state = AppState {
        db: create_connection(&database_config).await?,
        search: search_config,
    };

    let app = routes::router(state)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(ServiceBuilder::new().layer(CompressionLayer::new()));

    let listener = tokio::net::TcpListener::bind(&server_config.bind_address).await?;
    info!("Running axum on http://{}", server_config.bind_address);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}
