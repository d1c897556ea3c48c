use clap::Parser;

use nowplaying::http::state::AppState;
use nowplaying::player::NormalizeOptions;
use nowplaying::{cli, config, http, server};

/// Resolves on the first Ctrl+C. A second Ctrl+C while the listener is
/// closing exits immediately.
async fn wait_for_shutdown() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        eprintln!("error: failed to install Ctrl+C handler: {}", e);
        std::process::exit(1);
    }
    tokio::spawn(async {
        if tokio::signal::ctrl_c().await.is_ok() {
            eprintln!("\nnowplaying: forced exit");
            std::process::exit(1);
        }
    });
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let args = cli::Args::parse();

    let file_config = config::find_config_file(args.config.as_deref()).and_then(|path| {
        match config::load_config(&path) {
            Ok(cfg) => {
                tracing::debug!("Loaded config from {}", path.display());
                Some(cfg)
            }
            Err(e) => {
                tracing::warn!("Failed to parse config file: {}", e);
                None
            }
        }
    });

    let config = config::Config::resolve(file_config, &args);

    if !config.enabled {
        tracing::info!("Query endpoint disabled in config -- not listening");
        return;
    }

    let Some(spec) = config.source.clone() else {
        eprintln!("error: no player source configured (use --source or `source = ...` in the config file)");
        std::process::exit(1);
    };
    let source = spec.clone().into_source().unwrap_or_else(|e| {
        eprintln!("error: failed to set up player source {}: {}", spec, e);
        std::process::exit(1);
    });

    tracing::info!(
        "nowplaying {} reading player state from {} (timeout {} ms)",
        env!("CARGO_PKG_VERSION"),
        spec,
        config.fetch_timeout.as_millis()
    );

    let state = AppState::new(source)
        .with_fetch_timeout(config.fetch_timeout)
        .with_normalize_options(NormalizeOptions {
            track_url_template: config.track_url_template.clone(),
        });
    let app = http::build_router(state);

    let bind = server::BindOptions {
        port: config.port,
        public: config.public,
    };
    let handle = server::start(bind, app).await.unwrap_or_else(|e| {
        eprintln!("error: {}", e);
        std::process::exit(1);
    });

    wait_for_shutdown().await;
    tracing::info!("Shutting down -- closing query endpoint...");
    handle.shutdown().await;
    tracing::info!("Goodbye.");
}
