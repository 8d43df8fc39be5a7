use dreaming_flowers::{Config, PostgresShopStore, ShopStore};

fn usage_and_exit() -> ! {
    eprintln!(
        "Usage: cargo run --bin preflight -- [--create-table-if-missing]\n\
         \n\
         Requires env vars:\n\
           DATABASE_URL\n\
         Optional:\n\
           SERVER_HOST, SERVER_PORT, DB_MAX_CONNECTIONS, REQUEST_TIMEOUT_SECS,\n\
           DB_ENSURE_SCHEMA, STRICT_WRITES, LOG_FORMAT\n"
    );
    std::process::exit(2);
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.iter().any(|a| a == "-h" || a == "--help") {
        usage_and_exit();
    }

    let create_table_if_missing = args.iter().any(|a| a == "--create-table-if-missing");

    // Force-read config (nice error messages if missing)
    let config = Config::from_env()?;
    let addr = config.bind_addr()?;

    println!("> Preflight:");
    println!("  bind address={}", addr);
    println!("  DB_MAX_CONNECTIONS={}", config.db_max_connections);
    println!("  REQUEST_TIMEOUT_SECS={}", config.request_timeout.as_secs());
    println!("  STRICT_WRITES={}", config.strict_writes);

    // Basic DB connectivity
    let store = PostgresShopStore::connect(&config.database_url, 1)
        .await
        .map_err(|e| anyhow::anyhow!("Database is not reachable: {}", e))?;
    store.ping().await?;
    println!("  Database is reachable.");

    // Table existence
    if store.table_exists().await? {
        println!("  Table florerias exists.");
    } else if create_table_if_missing {
        println!("  Table florerias missing -> creating it...");
        store.ensure_schema().await?;
        if !store.table_exists().await? {
            return Err(anyhow::anyhow!("Table florerias still missing after create"));
        }
        println!("  Table florerias created.");
    } else {
        return Err(anyhow::anyhow!(
            "Table florerias does not exist. Re-run with --create-table-if-missing"
        ));
    }

    // Rows readable
    let shops = store.list().await?;
    println!("  Table is readable (ok). {} floreria(s) stored.", shops.len());

    println!("> Preflight OK.");
    Ok(())
}
