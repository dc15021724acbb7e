//! MongoDB connection settings loaded via OrthoConfig.

use std::time::Duration;

use ortho_config::OrthoConfig;
use serde::Deserialize;

const DEFAULT_HOST: &str = "localhost";
const DEFAULT_PORT: u16 = 27017;
const DEFAULT_TIMEOUT_SECS: u64 = 5;

/// Connection target for the todo store.
///
/// Read from `MONGO_HOST`, `MONGO_PORT`, and `MONGO_TIMEOUT_SECS`; unset
/// values fall back to a local default server.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "MONGO")]
pub struct MongoSettings {
    /// Server host name or address.
    #[ortho_config(default = String::from(DEFAULT_HOST))]
    pub host: String,
    /// Server port.
    #[ortho_config(default = DEFAULT_PORT)]
    pub port: u16,
    /// Upper bound for connecting and selecting a server, in seconds.
    #[ortho_config(default = DEFAULT_TIMEOUT_SECS)]
    pub timeout_secs: u64,
}

impl MongoSettings {
    /// Return the configured host; `localhost` unless overridden.
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Return the configured port; `27017` unless overridden.
    pub fn port(&self) -> u16 {
        self.port
    }

    /// Return the connect/server-selection timeout.
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Connection string handed to the driver.
    ///
    /// # Examples
    /// ```
    /// use todo_backend::outbound::persistence::MongoSettings;
    ///
    /// let settings = MongoSettings {
    ///     host: "db".to_owned(),
    ///     port: 27017,
    ///     timeout_secs: 5,
    /// };
    /// assert_eq!(settings.connection_uri(), "mongodb://db:27017");
    /// ```
    pub fn connection_uri(&self) -> String {
        format!("mongodb://{}:{}", self.host(), self.port())
    }
}
