use crate::config::DatabaseConfig;
use log::info;
use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr};

/// Creates a database connection pool
pub async fn create_connection(config: &DatabaseConfig) -> Result<DatabaseConnection, DbErr> {
    let mut options = ConnectOptions::new(config.url.clone());
    options
        .max_connections(config.max_connections)
        .sqlx_logging(false);

    let db = Database::connect(options).await?;
    info!(
        "Connected to database with up to {} connections",
        config.max_connections
    );

    Ok(db)
}
