use std::net::IpAddr;

#[derive(Debug, Clone)]
pub struct Config {
    pub host: IpAddr,
    pub port: u16,
    pub max_body_size: usize,
    pub log_level: String,
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        let host: IpAddr = env_or("PROJECTS_HOST", "0.0.0.0")
            .parse()
            .map_err(|e| format!("Invalid PROJECTS_HOST: {e}"))?;

        let port: u16 = env_or("PROJECTS_PORT", "3333")
            .parse()
            .map_err(|e| format!("Invalid PROJECTS_PORT: {e}"))?;

        let max_body_size: usize = env_or("PROJECTS_MAX_BODY_SIZE", "102400")
            .parse()
            .map_err(|e| format!("Invalid PROJECTS_MAX_BODY_SIZE: {e}"))?;

        let log_level = env_or("PROJECTS_LOG_LEVEL", "info");

        Ok(Config {
            host,
            port,
            max_body_size,
            log_level,
        })
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
