use catalog_api::infra::telemetry;
use catalog_api::storage::postgres;
use catalog_api::AppConfig;

fn usage_and_exit() -> ! {
    eprintln!(
        "Usage: cargo run --bin preflight -- [--init-schema]\n\
         \n\
         Requires env vars:\n\
           DATABASE_URL (or DB_CONN)\n\
         Optional:\n\
           PORT, HOST, DB_MAX_CONNECTIONS, DB_MIN_CONNECTIONS,\n\
           DB_IDLE_TIMEOUT_SECS, DB_MAX_LIFETIME_SECS, DB_ACQUIRE_TIMEOUT_SECS\n"
    );
    std::process::exit(2);
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    telemetry::init_tracing();

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.iter().any(|a| a == "-h" || a == "--help") {
        usage_and_exit();
    }
    let init_schema = args.iter().any(|a| a == "--init-schema");

    // Force-read config (nice error messages if missing)
    let config = AppConfig::from_env()?;

    println!("> Preflight:");
    println!("  bind address={}", config.bind_addr());
    println!(
        "  pool: max={} min={} idle_timeout={}s max_lifetime={}s",
        config.pool.max_connections,
        config.pool.min_connections,
        config.pool.idle_timeout.as_secs(),
        config.pool.max_lifetime.as_secs()
    );

    let pool = postgres::connect(&config).await?;
    let version: String = sqlx::query_scalar("SELECT version()").fetch_one(&pool).await?;
    println!("  database: {}", version);

    let mut missing = postgres::missing_tables(&pool).await?;
    if !missing.is_empty() && init_schema {
        println!("  creating schema (missing: {})", missing.join(", "));
        postgres::ensure_schema(&pool).await?;
        missing = postgres::missing_tables(&pool).await?;
    }

    pool.close().await;

    if missing.is_empty() {
        println!("> Preflight OK");
        Ok(())
    } else {
        Err(anyhow::anyhow!(
            "Missing tables: {} (re-run with --init-schema or start api_server once)",
            missing.join(", ")
        ))
    }
}
