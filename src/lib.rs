// Artifact Catalogue Library
// Aggregate material and projectile-point statistics over catalogue collections

pub mod analytics;
pub mod error;
pub mod local_server;
pub mod models;
pub mod storage;

use std::path::Path;
use std::sync::{Arc, Mutex};

use tracing::info;

use error::AppError;
use local_server::{ReportServer, ServerConfig};
use storage::{Database, SqliteRepository};

/// Open the catalogue database and serve the report endpoints until Ctrl-C
///
/// # Arguments
/// * `config_dir` - Directory holding `settings.yaml` and, by default, the database
pub async fn run(config_dir: &Path) -> Result<(), AppError> {
    std::fs::create_dir_all(config_dir)?;

    let config = ServerConfig::load(config_dir);
    let db_path = config.resolve_database_path(config_dir);
    info!(config_dir = %config_dir.display(), database = %db_path.display(), "starting");

    let db = Database::new(&db_path)?;
    let repo = Arc::new(SqliteRepository::new(Arc::new(Mutex::new(db))));

    let server = ReportServer::new(config_dir.to_path_buf(), repo);
    let handle = server.start(Some(config.port)).await?;

    tokio::signal::ctrl_c().await?;
    info!("shutdown requested");
    handle.shutdown();

    Ok(())
}
