use std::env;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use tracing::warn;

const DEFAULT_PORT: u16 = 5000;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: IpAddr,
    pub port: u16,
    pub seed_mock_data: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: DEFAULT_PORT,
            seed_mock_data: true,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let config = Self {
            host: env::var("HOST")
                .ok()
                .and_then(|raw| {
                    raw.parse().map_err(|_| {
                        warn!("HOST '{}' is not a valid IP address, using {}", raw, defaults.host);
                    }).ok()
                })
                .unwrap_or(defaults.host),
            port: match env::var("PORT") {
                Ok(raw) => raw.parse().unwrap_or_else(|_| {
                    warn!("PORT '{}' is not a valid port, using {}", raw, DEFAULT_PORT);
                    DEFAULT_PORT
                }),
                Err(_) => {
                    warn!("PORT not set, using default {}", DEFAULT_PORT);
                    DEFAULT_PORT
                }
            },
            seed_mock_data: env::var("SEED_MOCK_DATA")
                .map(|raw| parse_flag(&raw).unwrap_or_else(|| {
                    warn!("SEED_MOCK_DATA '{}' is not a boolean, seeding anyway", raw);
                    true
                }))
                .unwrap_or(defaults.seed_mock_data),
        };

        if !config.seed_mock_data {
            warn!("Mock data seeding disabled - doctor and hospital directories start empty");
        }

        config
    }

    pub fn bind_address(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
