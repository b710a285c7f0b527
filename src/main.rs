//! MongoDB Purge Tool
//!
//! Empties every collection in the target database except a preserved one
//! (by default `users`), deleting documents in bounded batches of at most
//! 500 per commit.
//!
//! # Usage
//!
//! ```bash
//! # Purge everything except 'users' in the database named in the URI
//! mongopurge mongodb://localhost:27017/staging
//!
//! # Connection target from a credential file
//! mongopurge --credentials ./credentials.json
//! ```
//!
//! Deletion is irreversible. There is no dry-run and no undo.

use tracing::Level;

mod cli;
mod config;
mod connection;
mod error;
mod purge;
mod store;

use cli::CliInterface;
use connection::ConnectionManager;
use error::{PurgeError, Result};
use purge::Orchestrator;
use store::MongoStore;

/// Application entry point
#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        match &e {
            PurgeError::Connection(_) => {
                eprintln!("❌ Error: {}", e);
                eprintln!("Make sure the credential file exists and the server is reachable.");
            }
            _ => eprintln!("Error: {}", e),
        }
        std::process::exit(1);
    }
}

/// Main application logic
///
/// This function orchestrates the run:
/// 1. Parse command-line arguments and load configuration
/// 2. Initialize logging
/// 3. Establish and verify the store connection
/// 4. Hand the session to the orchestrator
///
/// A connection failure aborts here, before any collection is enumerated.
///
/// # Returns
/// * `Result<()>` - Success or error
async fn run() -> Result<()> {
    let cli = CliInterface::new()?;

    initialize_logging(&cli);

    if cli.handle_subcommand()? {
        return Ok(());
    }

    let credentials = cli.load_credentials()?;
    cli.print_banner(credentials.as_ref());

    let uri = cli.connection_uri(credentials.as_ref());
    let database = cli.database_name(credentials.as_ref())?;

    let mut manager = ConnectionManager::new(uri, cli.config().connection.clone());
    manager.connect().await?;
    println!("✅ Connection established.");

    let store = MongoStore::new(manager.database(&database)?);
    let orchestrator = Orchestrator::new(store, cli.config().purge.clone());

    orchestrator.run().await
}

/// Initialize logging system based on verbosity level
///
/// # Arguments
/// * `cli` - CLI interface with verbosity settings
fn initialize_logging(cli: &CliInterface) {
    let level = if cli.args().very_verbose {
        Level::TRACE
    } else if cli.args().verbose {
        Level::DEBUG
    } else {
        cli.config().logging.level.to_tracing_level()
    };

    // Progress lines go to stdout; diagnostics stay on stderr
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr);

    if cli.config().logging.timestamps {
        subscriber.init();
    } else {
        subscriber.without_time().init();
    }
}
