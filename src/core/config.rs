//! Configuration management for the dining MCP server.
//!
//! Values come from defaults overridden by environment variables (a `.env`
//! file is honoured through `dotenvy`).

use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::info;

use super::transport::TransportConfig;
use crate::domains::dining::DEFAULT_MENU_URL;

/// Main configuration structure for the server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server identification and metadata.
    pub server: ServerConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,

    /// Transport configuration.
    pub transport: TransportConfig,

    /// Upstream dining site configuration.
    pub dining: DiningConfig,

    /// Tool execution limits.
    pub tools: ToolsConfig,
}

/// Server identification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// The name of the server as reported to clients.
    pub name: String,

    /// The version of the server.
    pub version: String,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "trace").
    pub level: String,

    /// Whether to include timestamps in log output.
    pub with_timestamps: bool,
}

/// Where and how the dining menu page is fetched.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiningConfig {
    /// URL of the ASP.NET menu page; GETs and postbacks both target it.
    pub menu_url: String,

    /// `User-Agent` sent with every upstream request.
    pub user_agent: String,
}

/// Limits applied around each tool call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolsConfig {
    /// Upper bound on a single tool call, in seconds.
    pub timeout_secs: u64,
}

impl ToolsConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for DiningConfig {
    fn default() -> Self {
        Self {
            menu_url: DEFAULT_MENU_URL.to_string(),
            user_agent: concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"))
                .to_string(),
        }
    }
}

impl Default for ToolsConfig {
    fn default() -> Self {
        Self { timeout_secs: 60 }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                name: "stanford-dining-mcp".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            logging: LoggingConfig {
                level: "info".to_string(),
                with_timestamps: true,
            },
            transport: TransportConfig::default(),
            dining: DiningConfig::default(),
            tools: ToolsConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Server settings use the `MCP_` prefix (`MCP_SERVER_NAME`,
    /// `MCP_LOG_LEVEL`, ...); upstream settings use `DINING_`.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let mut config = Self::default();

        if let Ok(name) = std::env::var("MCP_SERVER_NAME") {
            config.server.name = name;
        }

        if let Ok(level) = std::env::var("MCP_LOG_LEVEL") {
            config.logging.level = level;
        }

        if let Ok(timestamps) = std::env::var("MCP_LOG_TIMESTAMPS") {
            config.logging.with_timestamps =
                timestamps.to_lowercase() != "false" && timestamps != "0";
        }

        config.transport = TransportConfig::from_env();

        if let Ok(url) = std::env::var("DINING_MENU_URL") {
            info!("Using dining menu page {}", url);
            config.dining.menu_url = url;
        }

        if let Ok(agent) = std::env::var("DINING_USER_AGENT") {
            config.dining.user_agent = agent;
        }

        if let Some(secs) = std::env::var("MCP_TOOL_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .filter(|secs: &u64| *secs > 0)
        {
            config.tools.timeout_secs = secs;
        }

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Mutex to ensure env var tests run serially
    static ENV_TEST_LOCK: Mutex<()> = Mutex::new(());

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.server.name, "stanford-dining-mcp");
        assert_eq!(config.dining.menu_url, DEFAULT_MENU_URL);
        assert!(config.dining.user_agent.starts_with("stanford_dining_mcp/"));
        assert_eq!(config.tools.timeout(), Duration::from_secs(60));
    }

    #[test]
    fn test_dining_url_from_env() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::set_var("DINING_MENU_URL", "http://127.0.0.1:9/Menu.aspx");
        }
        let config = Config::from_env();
        assert_eq!(config.dining.menu_url, "http://127.0.0.1:9/Menu.aspx");
        unsafe {
            std::env::remove_var("DINING_MENU_URL");
        }
    }

    #[test]
    fn test_timeout_from_env() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::set_var("MCP_TOOL_TIMEOUT_SECS", "15");
        }
        assert_eq!(Config::from_env().tools.timeout_secs, 15);

        unsafe {
            std::env::set_var("MCP_TOOL_TIMEOUT_SECS", "0");
        }
        assert_eq!(Config::from_env().tools.timeout_secs, 60);

        unsafe {
            std::env::remove_var("MCP_TOOL_TIMEOUT_SECS");
        }
    }
}
