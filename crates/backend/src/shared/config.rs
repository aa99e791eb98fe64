use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub static_files: StaticFilesConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct StaticFilesConfig {
    /// Directory with the built frontend (index.html + wasm bundle)
    pub dir: String,
}

impl ServerConfig {
    /// Адрес для `TcpListener::bind`: host может быть IP или именем ("localhost")
    pub fn bind_addr(&self) -> (&str, u16) {
        (self.host.as_str(), self.port)
    }
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[server]
host = "127.0.0.1"
port = 3000

[static_files]
dir = "dist"
"#;

/// Load configuration from config.toml file
///
/// Search order:
/// 1. Next to the executable (for production)
/// 2. Falls back to embedded default config
pub fn load_config() -> anyhow::Result<Config> {
    // Try to find config.toml next to the executable
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            let config_path = exe_dir.join("config.toml");

            if config_path.exists() {
                tracing::info!("Loading config from: {}", config_path.display());
                let contents = std::fs::read_to_string(&config_path)?;
                let config: Config = toml::from_str(&contents)?;
                return Ok(config);
            } else {
                tracing::warn!("config.toml not found at: {}", config_path.display());
            }
        }
    }

    // Fall back to default config
    tracing::info!("Using default embedded configuration");
    let config: Config = toml::from_str(DEFAULT_CONFIG)?;
    Ok(config)
}

/// Get the static files directory from configuration
/// Resolves relative paths relative to the executable directory
pub fn get_static_dir(config: &Config) -> PathBuf {
    resolve_static_dir(
        &config.static_files.dir,
        std::env::current_exe()
            .ok()
            .as_deref()
            .and_then(Path::parent),
    )
}

fn resolve_static_dir(dir: &str, exe_dir: Option<&Path>) -> PathBuf {
    let path = Path::new(dir);

    // If absolute path, use as is
    if path.is_absolute() {
        return path.to_path_buf();
    }

    match exe_dir {
        Some(exe_dir) => exe_dir.join(path),
        // Fallback: use relative to current directory
        None => PathBuf::from(dir),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config: Result<Config, _> = toml::from_str(DEFAULT_CONFIG);
        assert!(config.is_ok());
        let config = config.unwrap();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.static_files.dir, "dist");
        assert_eq!(config.server.bind_addr(), ("127.0.0.1", 3000));
    }

    #[test]
    fn test_hostname_host_resolves() {
        use std::net::ToSocketAddrs;

        let server = ServerConfig {
            host: "localhost".to_string(),
            port: 3000,
        };
        let addrs: Vec<_> = server.bind_addr().to_socket_addrs().unwrap().collect();
        assert!(!addrs.is_empty());
        assert!(addrs.iter().all(|a| a.ip().is_loopback() && a.port() == 3000));
    }

    #[test]
    #[cfg(unix)]
    fn test_resolve_static_dir() {
        let exe_dir = Path::new("/opt/catalog");
        assert_eq!(
            resolve_static_dir("dist", Some(exe_dir)),
            PathBuf::from("/opt/catalog/dist")
        );
        assert_eq!(resolve_static_dir("dist", None), PathBuf::from("dist"));
        assert_eq!(
            resolve_static_dir("/srv/www", Some(exe_dir)),
            PathBuf::from("/srv/www")
        );
    }
}
