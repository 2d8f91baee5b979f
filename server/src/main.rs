use std::path::Path;

use clap::Parser;
use common::config::Validate;
use common::{log, logger};
use tictactoe_server::cleanup_task::CleanupTask;
use tictactoe_server::game_session_manager::GameSessionManager;
use tictactoe_server::server_config::{DEFAULT_CONFIG_PATH, get_config_manager};
use tictactoe_server::web_server::{WebServerState, run_web_server};

#[derive(Parser)]
#[command(name = "tictactoe_server")]
struct Args {
    /// YAML config file; written with defaults if it does not exist.
    #[arg(long, default_value = DEFAULT_CONFIG_PATH)]
    config: String,
    /// Overrides `bind_address` from the config file.
    #[arg(long)]
    bind: Option<String>,
    #[arg(long)]
    use_log_prefix: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let prefix = if args.use_log_prefix {
        Some("Server".to_string())
    } else {
        None
    };
    logger::init_logger(prefix);

    let mut config = get_config_manager(&args.config).get_or_create_config()?;
    if let Some(bind) = args.bind {
        config.bind_address = bind;
        config.validate()?;
    }
    log!("Loaded config from {}: {:?}", args.config, config);

    let session_manager = GameSessionManager::new(config.bot_type);

    let cleanup_task = CleanupTask::new(
        session_manager.clone(),
        config.cleanup_interval(),
        config.inactivity_timeout(),
    );
    tokio::spawn(async move {
        cleanup_task.run().await;
    });

    let shutdown_signal = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            log!("Failed to listen for Ctrl+C, running until killed: {}", e);
            std::future::pending::<()>().await;
        }
        log!("Shutdown signal received");
    };

    let state = WebServerState { session_manager };
    run_web_server(
        state,
        &config.bind_address,
        config.static_files_path.as_deref().map(Path::new),
        shutdown_signal,
    )
    .await?;

    log!("Server shut down gracefully");

    Ok(())
}
