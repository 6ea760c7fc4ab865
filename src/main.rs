use std::sync::Arc;

use clap::Parser;
use scripture::config::{Cli, Config, default_config_path};
use scripture::handler::AppState;
use scripture::provider::BibleApiProvider;
use scripture::storage::MemStorage;
use tokio::signal;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    let args = Cli::parse();

    dotenvy::dotenv().ok();
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().json().with_env_filter(filter).init();
    tracing::info!("scripture.svc starting");

    // An explicit --config must load; the default path is optional.
    let cfg = match args.config_path {
        Some(path) => Config::new(&path).unwrap_or_else(|e| {
            tracing::error!(error = %e, path = %path, "failed to load config file");
            std::process::exit(1);
        }),
        None => {
            let path = default_config_path();
            if path.exists() {
                Config::new(&path.to_string_lossy()).unwrap_or_else(|e| {
                    tracing::error!(error = %e, path = ?path, "failed to load config file");
                    std::process::exit(1);
                })
            } else {
                tracing::info!(path = ?path, "no config file found, using defaults");
                Config::default()
            }
        }
    };

    let storage = Arc::new(MemStorage::new().unwrap_or_else(|e| {
        tracing::error!(error = %e, "failed to setup storage");
        std::process::exit(1);
    }));
    let provider = Arc::new(BibleApiProvider::new(&cfg).unwrap_or_else(|e| {
        tracing::error!(error = %scripture::unpack_error(&e), "failed to setup provider client");
        std::process::exit(1);
    }));

    let app = scripture::app(AppState {
        storage,
        provider,
        search: Arc::new(cfg.search.clone()),
    });

    let address = format!("0.0.0.0:{}", cfg.app.get_port());
    let listener = tokio::net::TcpListener::bind(&address).await.unwrap_or_else(|e| {
        tracing::error!(error = %e, "failed to setup tcp listener");
        std::process::exit(1);
    });

    tracing::info!("scripture.svc running on {}", &address);
    tokio::select! {
        result = axum::serve(listener, app) => {
            if let Err(err) = result {
                tracing::error!(error = %err, "server exited with error");
                std::process::exit(1);
            }
        }
        _ = signal::ctrl_c() => {
            tracing::info!("ctrl+c signal received, preparing to shutdown");
        }
    }

    tracing::info!("scripture.svc going off");
}
