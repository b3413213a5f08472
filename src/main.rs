//! Binary entry point for the catalog seeder.
//!
//! Exit code 1 is reserved for an unreachable database; skipped or invalid
//! records never affect the exit code.

use catalog_seeder::config::{database, sources};
use catalog_seeder::core::seed;
use dotenvy::dotenv;
use std::process::ExitCode;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    // 1. Initialize tracing (as early as possible)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // 2. Load .env file (non-fatal, env vars can be set externally)
    dotenv().ok();

    info!("Starting data loading process...");

    // 3. Resolve where the input files live
    let source_files = match sources::resolve_source_files() {
        Ok(files) => files,
        Err(e) => {
            error!("Failed to resolve input sources: {e}");
            return ExitCode::FAILURE;
        }
    };

    // 4. Connect and verify reachability before touching any data
    let database_url = database::get_database_url();
    let db = match database::create_connection(&database_url).await {
        Ok(db) => db,
        Err(e) => {
            error!("Could not connect to the database: {e}. Exiting.");
            return ExitCode::from(1);
        }
    };
    if !database::check_connection(&db).await {
        error!("Could not connect to the database. Exiting.");
        return ExitCode::from(1);
    }

    // 5. Make sure the tables exist
    if let Err(e) = database::create_tables(&db).await {
        error!("Failed to initialize database tables: {e}");
        return ExitCode::FAILURE;
    }

    // 6. Run the seed pass; failures inside it are logged, not propagated
    let report = seed::run(&db, &source_files).await;
    info!(
        "Run summary: categories {} new / {} existing, products {} new / {} skipped.",
        report.categories.new, report.categories.existing, report.products.new,
        report.products.skipped
    );

    if let Err(e) = db.close().await {
        error!("Error while closing the database connection: {e}");
    }

    info!("Data loading process completed.");
    ExitCode::SUCCESS
}
