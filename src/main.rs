use anyhow::Context;
use database::{connect, ensure_schema, Repositories};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// The main entry point for the Depot service.
#[tokio::main]
async fn main() {
    // Load environment variables from .env file, if there is one.
    dotenvy::dotenv().ok();

    // Keep the guard alive for the whole run so buffered log lines are flushed on exit.
    let (writer, guard) = tracing_appender::non_blocking(std::io::stdout());
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(writer)
        .finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to install the tracing subscriber: {e}");
    }

    if let Err(e) = run().await {
        tracing::error!(error = ?e, "Depot stopped.");
        drop(guard);
        std::process::exit(1);
    }
}

/// Startup is all-or-nothing: any failure here ends the process, with no retry.
async fn run() -> anyhow::Result<()> {
    let settings = configuration::load_settings().context("Failed to load settings")?;

    let db_pool = connect(&settings.database)
        .await
        .context("Failed to connect to the database")?;
    ensure_schema(&db_pool)
        .await
        .context("Failed to create the database tables")?;

    let repositories = Repositories::postgres(db_pool);
    web_server::run_server(settings.server.socket_addr(), repositories).await
}
