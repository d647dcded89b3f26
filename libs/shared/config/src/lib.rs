use std::env;
use std::net::SocketAddr;
use tracing::warn;

const DEFAULT_PORT: u16 = 4000;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub port: u16,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let port = match env::var("CLINIC_API_PORT") {
            Ok(raw) => raw.parse().unwrap_or_else(|_| {
                warn!("CLINIC_API_PORT is not a valid port: {}, using default {}", raw, DEFAULT_PORT);
                DEFAULT_PORT
            }),
            Err(_) => {
                warn!("CLINIC_API_PORT not set, using default {}", DEFAULT_PORT);
                DEFAULT_PORT
            }
        };

        Self { port }
    }

    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::from(([0, 0, 0, 0], self.port))
    }
}
