use std::env;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

#[derive(Clone, Debug)]
pub struct Config {
    pub bind_addr: IpAddr,
    pub port: u16,
    /// Base URL of the GitHub REST API (overridable for tests and proxies)
    pub github_api_url: String,
    /// Overrides the profile's GitHub account when set
    pub github_handle: Option<String>,
    /// JSON profile to load instead of the built-in one
    pub profile_path: Option<PathBuf>,
    pub cv_path: PathBuf,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self::from_vars(|key| env::var(key).ok())
    }

    fn from_vars(var: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            bind_addr: var("BIND_ADDR")
                .and_then(|v| v.parse().ok())
                .unwrap_or(IpAddr::V4(Ipv4Addr::UNSPECIFIED)),
            port: var("PORT").and_then(|p| p.parse().ok()).unwrap_or(8080),
            github_api_url: var("GITHUB_API_URL")
                .unwrap_or_else(|| "https://api.github.com".to_string()),
            github_handle: var("GITHUB_HANDLE").filter(|h| !h.trim().is_empty()),
            profile_path: var("PROFILE_PATH").map(PathBuf::from),
            cv_path: var("CV_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("public/cv.pdf")),
        }
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind_addr, self.port)
    }
}
