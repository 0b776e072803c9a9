use std::path::PathBuf;

use tracing::error;
use tracing_subscriber::EnvFilter;

/// Overrides the configuration directory
const CONFIG_DIR_ENV: &str = "ARTIFACT_CATALOGUE_CONFIG_DIR";

fn config_dir() -> PathBuf {
    if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV) {
        return PathBuf::from(dir);
    }
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("artifact-catalogue")
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    if let Err(e) = artifact_catalogue::run(&config_dir()).await {
        error!(error = %e, "artifact-catalogue exited with an error");
        std::process::exit(1);
    }
}
