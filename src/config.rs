use std::{env, path::PathBuf, time::Duration};

pub const DEFAULT_USER: &str = "josip";
const DEFAULT_USERS: &str = "josip,ana";
const DEFAULT_PORT: u16 = 8080;
const DEFAULT_STATUS_URL: &str = "http://127.0.0.1:5000";
const DEFAULT_TIMEOUT_SECS: u64 = 15;

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub data_path: PathBuf,
    pub status_url: String,
    pub users: Vec<String>,
    pub default_user: String,
    pub request_timeout: Option<Duration>,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let port = lookup("PORT")
            .and_then(|value| value.parse::<u16>().ok())
            .unwrap_or(DEFAULT_PORT);

        let data_path = lookup("APP_DATA_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("data/state.json"));

        let status_url = lookup("STATUS_API_URL")
            .map(|url| url.trim().trim_end_matches('/').to_string())
            .filter(|url| !url.is_empty())
            .unwrap_or_else(|| DEFAULT_STATUS_URL.to_string());

        let mut users = parse_users(&lookup("APP_USERS").unwrap_or_default());
        if users.is_empty() {
            users = parse_users(DEFAULT_USERS);
        }

        let default_user = lookup("APP_DEFAULT_USER")
            .map(|user| user.trim().to_string())
            .filter(|user| !user.is_empty())
            .unwrap_or_else(|| DEFAULT_USER.to_string());

        // 0 disables the timeout entirely
        let timeout_secs = lookup("STATUS_TIMEOUT_SECS")
            .and_then(|value| value.parse::<u64>().ok())
            .unwrap_or(DEFAULT_TIMEOUT_SECS);
        let request_timeout = (timeout_secs > 0).then(|| Duration::from_secs(timeout_secs));

        Self {
            port,
            data_path,
            status_url,
            users,
            default_user,
            request_timeout,
        }
    }
}

fn parse_users(raw: &str) -> Vec<String> {
    let mut users: Vec<String> = Vec::new();
    for user in raw.split(',').map(str::trim).filter(|user| !user.is_empty()) {
        if !users.iter().any(|known| known == user) {
            users.push(user.to_string());
        }
    }
    users
}
