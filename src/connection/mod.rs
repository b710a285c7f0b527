//! Connection management for MongoDB
//!
//! This module provides connection management functionality including:
//! - Loading the credential artifact
//! - Connection establishment with a reachability check
//! - Handing out the tenant database handle
//!
//! The manager is constructed once in `main` and passed by handle into the
//! rest of the run; there is no ambient connection state.

use mongodb::{Client, Database, options::ClientOptions};
use mongodb::bson::doc;
use tracing::{debug, info};

use crate::config::ConnectionConfig;
use crate::error::{ConnectionError, Result};

mod credentials;

pub use credentials::Credentials;

/// MongoDB connection manager
///
/// Owns the client for the lifetime of the run. Connecting verifies the
/// server is actually reachable with a ping, so a bad URI or dead server
/// fails here, before any collection is enumerated.
pub struct ConnectionManager {
    /// MongoDB client instance
    client: Option<Client>,

    /// Connection configuration
    config: ConnectionConfig,

    /// Current connection state
    state: ConnectionState,

    /// Connection URI
    uri: String,
}

/// Connection state information
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConnectionState {
    /// Not connected
    Disconnected,

    /// Currently connecting
    Connecting,

    /// Connected and ready
    Connected,

    /// Connection failed
    Failed(String),
}

impl ConnectionManager {
    /// Create a new connection manager
    ///
    /// # Arguments
    /// * `uri` - MongoDB connection URI
    /// * `config` - Connection configuration
    ///
    /// # Returns
    /// * `Self` - New connection manager instance
    pub fn new(uri: String, config: ConnectionConfig) -> Self {
        Self {
            client: None,
            config,
            state: ConnectionState::Disconnected,
            uri,
        }
    }

    /// Establish the connection and verify the server answers a ping
    ///
    /// # Returns
    /// * `Result<()>` - Success or connection error
    pub async fn connect(&mut self) -> Result<()> {
        self.state = ConnectionState::Connecting;

        match self.try_connect().await {
            Ok(client) => {
                self.client = Some(client);
                self.state = ConnectionState::Connected;
                info!("Connected to {}", self.uri);
                Ok(())
            }
            Err(e) => {
                self.state = ConnectionState::Failed(e.to_string());
                Err(e)
            }
        }
    }

    /// Get a handle on the tenant database
    ///
    /// # Arguments
    /// * `name` - Database name
    ///
    /// # Returns
    /// * `Result<Database>` - Database handle or error
    pub fn database(&self, name: &str) -> Result<Database> {
        let client = self.client()?;
        Ok(client.database(name))
    }

    /// Get the MongoDB client
    ///
    /// # Returns
    /// * `Result<&Client>` - Reference to client or error
    pub fn client(&self) -> Result<&Client> {
        self.client
            .as_ref()
            .ok_or_else(|| ConnectionError::NotConnected.into())
    }

    /// Get current connection state
    pub fn state(&self) -> &ConnectionState {
        &self.state
    }

    /// Check if currently connected
    pub fn is_connected(&self) -> bool {
        matches!(self.state, ConnectionState::Connected)
    }

    async fn try_connect(&self) -> Result<Client> {
        let options = self.parse_uri().await?;

        let client = Client::with_options(options)
            .map_err(|e| ConnectionError::ConnectionFailed(e.to_string()))?;

        self.ping(&client).await?;

        Ok(client)
    }

    /// Parse the connection URI and apply configured timeouts
    async fn parse_uri(&self) -> Result<ClientOptions> {
        let mut options = ClientOptions::parse(&self.uri)
            .await
            .map_err(|e| ConnectionError::InvalidUri(e.to_string()))?;

        let timeout = std::time::Duration::from_secs(self.config.timeout);
        options.connect_timeout = Some(timeout);
        options.server_selection_timeout = Some(timeout);

        Ok(options)
    }

    /// Verify the server is reachable by sending a ping
    async fn ping(&self, client: &Client) -> Result<()> {
        debug!("Pinging server to verify connectivity");

        client
            .database("admin")
            .run_command(doc! { "ping": 1 })
            .await
            .map_err(|e| ConnectionError::PingFailed(e.to_string()))?;

        Ok(())
    }
}
