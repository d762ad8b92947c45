use std::path::Path;

use tracing::{error, info};
use tracing_subscriber::EnvFilter;
use viaduct_proxy::{Config, Service};

#[tokio::main]
async fn main() {
    let path = std::env::var("CONFIG_FILE")
        .ok()
        .filter(|p| !p.is_empty())
        .or_else(|| std::env::args().nth(1));
    let Some(path) = path else {
        let template = serde_json::to_string_pretty(&Config::default_template())
            .expect("default config serializes");
        eprintln!("CONFIG_FILE not set, here is the default config:\n{template}");
        return;
    };

    let config = match Config::load(Path::new(&path)) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("failed to load config: {e}");
            std::process::exit(1);
        }
    };

    let directive = match config.log_level.as_str() {
        "trace" => "trace",
        "debug" => "debug",
        "silent" | "disabled" => "off",
        _ => "info",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(directive)),
        )
        .init();

    let service = match Service::new(config) {
        Ok(service) => service,
        Err(e) => {
            error!("failed to start service: {e}");
            std::process::exit(1);
        }
    };

    info!("service is starting");
    tokio::select! {
        result = service.clone().run() => {
            if let Err(e) = result {
                error!("service exited: {e}");
                std::process::exit(1);
            }
        }
        _ = tokio::signal::ctrl_c() => {
            info!("signal received, stopping service");
            service.stop();
        }
    }
}
