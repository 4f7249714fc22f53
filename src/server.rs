//! Server initialization and startup logic for ShiftDesk.

use std::sync::Arc;

use tracing::{info, warn};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer, Registry};

use shiftdesk_api::{ApiServer, ApiServerConfig, AppState};
use shiftdesk_config::{Config, ConfigError, ConfigLoader, LoggingConfig, StorageConfig};
use shiftdesk_core::{
    MemoryScheduleStore, ScheduleStore, SchedulingConfig as EngineConfig, SchedulingEngine,
};
use shiftdesk_sqlite::SqliteScheduleStore;

type BoxedLayer = Box<dyn Layer<Registry> + Send + Sync>;

/// Initialize tracing with console and optional file output.
///
/// `RUST_LOG` takes precedence over `logging.level`. When `logging.log_dir` is
/// set, logs are also written there with daily rotation.
pub(crate) fn init_tracing(logging: &LoggingConfig) -> Result<(), Box<dyn std::error::Error>> {
    let mut layers: Vec<BoxedLayer> = Vec::new();

    // Console layer
    layers.push(if logging.json {
        fmt::layer().json().with_target(true).boxed()
    } else {
        fmt::layer().with_target(true).with_ansi(true).boxed()
    });

    if let Some(dir) = &logging.log_dir {
        let log_dir = ConfigLoader::expand_path(dir);
        std::fs::create_dir_all(&log_dir)?;

        let file_appender = RollingFileAppender::builder()
            .rotation(Rotation::DAILY)
            .filename_prefix("shiftdesk")
            .filename_suffix("log")
            .max_log_files(30)
            .build(&log_dir)?;

        let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

        // Flushes pending lines on exit
        static GUARD: std::sync::OnceLock<tracing_appender::non_blocking::WorkerGuard> =
            std::sync::OnceLock::new();
        let _ = GUARD.set(guard);

        layers.push(if logging.json {
            fmt::layer().json().with_writer(non_blocking).boxed()
        } else {
            fmt::layer().with_writer(non_blocking).with_ansi(false).boxed()
        });
    }

    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&logging.level))?;

    tracing_subscriber::registry()
        .with(layers)
        .with(env_filter)
        .try_init()?;

    Ok(())
}

/// Engine settings from the `[scheduling]` section.
pub(crate) fn engine_config(config: &Config) -> EngineConfig {
    EngineConfig {
        all_or_nothing: config.scheduling.all_or_nothing,
        reject_overlaps: config.scheduling.reject_overlaps,
        replacement_identity: config.scheduling.replacement_identity,
    }
}

/// Open the configured store.
pub(crate) async fn open_store(
    storage: &StorageConfig,
) -> Result<Arc<dyn ScheduleStore>, Box<dyn std::error::Error>> {
    match storage.backend.as_str() {
        "memory" => {
            warn!("Using in-memory storage, data is lost on exit");
            Ok(Arc::new(MemoryScheduleStore::new()))
        }
        "sqlite" => {
            let path = storage.resolved_db_path();
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            let store = SqliteScheduleStore::open(&path).await?;
            info!("Schedule database: {}", path.display());
            Ok(Arc::new(store))
        }
        other => Err(ConfigError::InvalidValue {
            field: "storage.backend".to_string(),
            message: format!("unknown backend '{}'", other),
        }
        .into()),
    }
}

/// Build the scheduling engine from configuration.
pub(crate) async fn build_engine(
    config: &Config,
) -> Result<Arc<SchedulingEngine>, Box<dyn std::error::Error>> {
    let engine_config = engine_config(config);
    let store = open_store(&config.storage).await?;
    Ok(Arc::new(SchedulingEngine::with_store(engine_config, store)))
}

/// Run the HTTP server in foreground.
pub(crate) async fn run_server(
    config: Config,
    host: Option<String>,
    port: Option<u16>,
) -> Result<(), Box<dyn std::error::Error>> {
    info!("Starting ShiftDesk v{}", env!("CARGO_PKG_VERSION"));

    let engine = build_engine(&config).await?;
    let state = Arc::new(AppState::new(engine));

    let server_config = ApiServerConfig::new(
        host.unwrap_or(config.server.host),
        port.unwrap_or(config.server.port),
    );
    ApiServer::new(server_config, state).run().await
}
