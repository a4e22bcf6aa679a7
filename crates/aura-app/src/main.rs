mod boot;
mod cli;
mod commands;
mod console;
mod logging;
mod metrics;
mod persona;
mod provider;
mod thoughts;
mod ticker;

use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use aura_common::{ConfigError, Event, EventBus};
use aura_config::AuraConfig;

use cli::Command;
use commands::AppContext;

const EVENT_CAPACITY: usize = 64;

/// Load environment variables from a .env file (KEY=VALUE lines).
///
/// Variables already set in the process environment win.
fn load_dotenv() {
    let manifest_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let candidates = [
        PathBuf::from(".env"),
        // Workspace root, two levels up from crates/aura-app/
        manifest_dir.join("..").join("..").join(".env"),
    ];

    for path in &candidates {
        if let Ok(contents) = std::fs::read_to_string(path) {
            for line in contents.lines() {
                let line = line.trim();
                if line.is_empty() || line.starts_with('#') {
                    continue;
                }
                if let Some((key, value)) = line.split_once('=') {
                    let key = key.trim();
                    let value = value.trim().trim_matches('"').trim_matches('\'');
                    if std::env::var(key).is_err() {
                        std::env::set_var(key, value);
                    }
                }
            }
            return;
        }
    }
}

fn resolve_config_path(args: &cli::Args) -> Result<PathBuf, ConfigError> {
    match &args.config {
        Some(path) => Ok(path.clone()),
        None => aura_config::default_config_path(),
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    load_dotenv();
    let args = cli::parse();

    let (config_path, loaded) = match resolve_config_path(&args) {
        Ok(path) => {
            let loaded = aura_config::load_config_from(Some(&path));
            (Some(path), loaded)
        }
        Err(e) => (None, Err(e)),
    };

    let directive = match (&args.log_level, &loaded) {
        (Some(level), _) => level.clone(),
        (None, Ok(config)) => config.logging.directive(),
        (None, Err(_)) => logging::DEFAULT_LOG_DIRECTIVE.to_string(),
    };
    logging::init(&directive);
    tracing::info!("AuraOS Nexus v{} starting...", env!("CARGO_PKG_VERSION"));

    let Some(config_path) = config_path else {
        if let Err(e) = &loaded {
            tracing::error!("cannot resolve config path: {e}");
        }
        return ExitCode::FAILURE;
    };
    // Config actions read and write the file themselves.
    let config = match (loaded, args.command()) {
        (Ok(config), _) => config,
        (Err(e), Command::Config { .. }) => {
            tracing::debug!("startup config load failed: {e}");
            AuraConfig::default()
        }
        (Err(e), _) => {
            tracing::warn!("config load failed, using defaults: {e}");
            AuraConfig::default()
        }
    };
    tracing::info!(path = %config_path.display(), persona = %config.persona.name, "config loaded");

    let events: EventBus = EventBus::new(EVENT_CAPACITY);
    let ctrl_c_bus = events.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            tracing::info!("interrupt received, shutting down");
            ctrl_c_bus.publish(Event::Shutdown);
        }
    });

    let ctx = AppContext {
        config,
        config_path,
        events,
        boot: !args.no_boot,
    };

    let result = match args.command() {
        Command::Chat => commands::chat::run(&ctx).await,
        Command::Console => commands::console::run(&ctx).await,
        Command::Dashboard { ticks } => {
            let shutdown = ctx.events.subscribe();
            commands::dashboard::run(&ctx.config.metrics, ticks, shutdown, &mut io::stdout())
                .await
                .map_err(Into::into)
        }
        Command::Thoughts { count } => {
            let shutdown = ctx.events.subscribe();
            commands::thoughts::run(&ctx.config.thoughts, count, shutdown, &mut io::stdout())
                .await
                .map_err(Into::into)
        }
        Command::Config { action } => {
            commands::config::run(&action, &ctx.config_path, &ctx.events, &mut io::stdout())
        }
    };

    ctx.events.publish(Event::Shutdown);
    match result {
        Ok(()) => {
            tracing::info!("shutdown complete");
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!("{e}");
            ExitCode::FAILURE
        }
    }
}
