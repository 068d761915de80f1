use anyhow::Context;
use api::db::{self, PgStore};
use api::settings::{Settings, StorageBackend};
use api::{telemetry, AppState};
use store::MemoryStore;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let settings = Settings::load().context("Failed to load settings")?;
    telemetry::init(&settings.log.filter);

    let state = match settings.database.backend {
        StorageBackend::Postgres => {
            let url = settings
                .database
                .url
                .as_deref()
                .context("database.url (or DATABASE_URL) must be set for the postgres backend")?;
            let pool = db::connect(url, settings.database.max_connections)
                .await
                .context("Failed to connect to database")?;
            db::migrate(&pool)
                .await
                .context("Failed to run migrations")?;
            AppState::new(PgStore::new(pool))
        }
        StorageBackend::Memory => {
            tracing::warn!("Using in-memory storage; records are lost on shutdown");
            AppState::new(MemoryStore::new())
        }
    };

    let app = api::router(state, &settings.server.cors_origins);
    api::serve(&settings.server.socket_addr(), app)
        .await
        .context("Server error")?;
    Ok(())
}
