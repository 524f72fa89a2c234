use configs::DatabaseConfig;
use migration::MigratorTrait;
use models::db::connect_with_config;
use sea_orm::DatabaseConnection;
use tokio::sync::OnceCell;

// Migrations run once per test process
static MIGRATED: OnceCell<()> = OnceCell::const_new();

fn test_config() -> Option<DatabaseConfig> {
    if std::env::var("SKIP_DB_TESTS").is_ok() {
        return None;
    }
    let _ = dotenvy::dotenv();
    let mut cfg = DatabaseConfig::from_env();
    if cfg.url.trim().is_empty() {
        return None;
    }
    cfg.min_connections = 1;
    cfg.max_connections = cfg.max_connections.max(5);
    Some(cfg)
}

/// A migrated connection, or `None` when no database is configured.
pub async fn get_db() -> Result<Option<DatabaseConnection>, anyhow::Error> {
    let Some(cfg) = test_config() else {
        return Ok(None);
    };
    MIGRATED
        .get_or_try_init(|| async {
            let db = connect_with_config(&cfg).await?;
            migration::Migrator::up(&db, None).await?;
            Ok::<(), anyhow::Error>(())
        })
        .await?;
    // fresh pool bound to the calling test's runtime
    Ok(Some(connect_with_config(&cfg).await?))
}
