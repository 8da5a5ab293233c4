//! Server configuration.
//!
//! There is exactly one knob: the listen port, read from the `PORT`
//! environment variable with a hardcoded default. The server always binds
//! every interface so devices on the local network can reach it.

/// Environment variable that overrides the listen port.
const PORT_ENV: &str = "PORT";

/// Listen port used when `PORT` is unset or unparsable.
const DEFAULT_PORT: u16 = 3000;

/// Runtime configuration for the server binary.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// TCP port the WebSocket listener binds.
    pub port: u16,
}

impl ServerConfig {
    /// Loads configuration from the environment.
    pub fn from_env() -> Self {
        Self {
            port: parse_port(std::env::var(PORT_ENV).ok()),
        }
    }

    /// The bind address: all interfaces, configured port.
    pub fn bind_addr(&self) -> String {
        format!("0.0.0.0:{}", self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { port: DEFAULT_PORT }
    }
}

fn parse_port(value: Option<String>) -> u16 {
    match value {
        None => DEFAULT_PORT,
        Some(raw) => raw.parse().unwrap_or_else(|_| {
            tracing::warn!(%raw, default = DEFAULT_PORT, "invalid PORT value, using default");
            DEFAULT_PORT
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_port() {
        assert_eq!(ServerConfig::default().port, 3000);
    }

    #[test]
    fn test_bind_addr_covers_all_interfaces() {
        let config = ServerConfig { port: 4500 };
        assert_eq!(config.bind_addr(), "0.0.0.0:4500");
    }

    #[test]
    fn test_parse_port_accepts_valid_values() {
        assert_eq!(parse_port(Some("8080".into())), 8080);
    }

    #[test]
    fn test_parse_port_falls_back_on_garbage() {
        assert_eq!(parse_port(Some("not-a-port".into())), DEFAULT_PORT);
        assert_eq!(parse_port(Some("99999".into())), DEFAULT_PORT);
        assert_eq!(parse_port(None), DEFAULT_PORT);
    }
}
