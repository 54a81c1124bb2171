//! GCS File Gateway - upload, download, and delete files in a GCS bucket

use clap::Parser;
use gcs_file_gateway::{config::DEFAULT_MAX_FILE_SIZE, run_server, GatewayConfig};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(name = "gcs-file-gateway")]
#[command(about = "HTTP API for uploading, downloading, and deleting files in a GCS bucket")]
#[command(version)]
struct Args {
    /// Bucket to store files in
    #[arg(long, env = "GCP_BUCKET_NAME")]
    bucket: String,

    /// Maximum upload size in bytes
    #[arg(long, default_value_t = DEFAULT_MAX_FILE_SIZE, env = "MAX_FILE_SIZE")]
    max_file_size: u64,

    /// Comma-separated list of allowed file extensions (all allowed when unset)
    #[arg(long, env = "ALLOWED_FILE_TYPES")]
    allowed_file_types: Option<String>,

    /// Host to bind to
    #[arg(short = 'H', long, default_value = "0.0.0.0", env = "HOST")]
    host: String,

    /// Port to listen on
    #[arg(short, long, default_value = "8080", env = "PORT")]
    port: u16,

    /// Static OAuth2 access token (default: discover credentials from the environment)
    #[arg(long, env = "GCS_ACCESS_TOKEN", hide_env_values = true)]
    gcs_access_token: Option<String>,

    /// Storage request timeout in seconds
    #[arg(long, default_value = "30", env = "GCS_TIMEOUT_SECS")]
    gcs_timeout_secs: u64,

    /// Use in-memory storage (for testing, data will not persist)
    #[arg(long, env = "GATEWAY_MEMORY_STORE")]
    memory_store: bool,

    /// Disable CORS headers
    #[arg(long, env = "GATEWAY_NO_CORS")]
    no_cors: bool,

    /// Enable debug logging
    #[arg(short, long, env = "GATEWAY_DEBUG")]
    debug: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    // Missing GCP_BUCKET_NAME exits here with a usage error
    let args = Args::parse();

    // Setup logging
    let log_level = if args.debug { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            format!(
                "gcs_file_gateway={level},gcs_file_store={level},tower_http=debug",
                level = log_level
            )
            .into()
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting GCS file gateway on {}:{}", args.host, args.port);
    tracing::info!("Bucket: {}", args.bucket);
    tracing::info!("Max file size: {} bytes", args.max_file_size);

    match args.allowed_file_types.as_deref() {
        Some(types) if !types.is_empty() => tracing::info!("Allowed file types: {}", types),
        _ => tracing::info!("Allowed file types: all"),
    }

    if args.memory_store {
        tracing::warn!("⚠️  Using in-memory storage - data will NOT persist!");
    }

    let config = GatewayConfig {
        host: args.host,
        port: args.port,
        bucket_name: args.bucket,
        max_file_size: args.max_file_size,
        allowed_file_types: args.allowed_file_types,
        gcs_access_token: args.gcs_access_token,
        gcs_timeout_secs: args.gcs_timeout_secs,
        use_memory_store: args.memory_store,
        cors_enabled: !args.no_cors,
    };

    run_server(config).await
}
