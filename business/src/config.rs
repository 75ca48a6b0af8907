#[cfg(not(target_arch = "wasm32"))]
use serde::Deserialize;

/// Endpoint serving the members list.
pub const DEFAULT_MEMBERS_URL: &str =
    "https://geektrust.s3-ap-southeast-1.amazonaws.com/adminui-problem/members.json";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BusinessConfig {
    pub members_url: String,
}

// Environment variables, all optional.
#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug, Default, Deserialize)]
struct RawConfig {
    members_url: Option<String>,
}

impl BusinessConfig {
    pub fn new(members_url: impl Into<String>) -> Self {
        Self {
            members_url: members_url.into(),
        }
    }

    pub fn members_url(&self) -> &str {
        &self.members_url
    }

    /// Reads `MEMBERS_URL` from the environment, falling back to the default
    /// endpoint when it is unset, empty or unreadable.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn from_env() -> Self {
        let raw: Result<RawConfig, _> = serde_env::from_iter(std::env::vars());
        match raw {
            Ok(raw) => Self::from_raw(raw),
            Err(err) => {
                log::warn!("Ignoring unreadable environment configuration: {err}");
                Self::default()
            }
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn from_raw(raw: RawConfig) -> Self {
        match raw.members_url {
            Some(url) if !url.trim().is_empty() => {
                log::info!("Using MEMBERS_URL: {url}");
                Self::new(url)
            }
            _ => Self::default(),
        }
    }
}

impl Default for BusinessConfig {
    fn default() -> Self {
        Self::new(DEFAULT_MEMBERS_URL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_points_at_members_endpoint() {
        assert_eq!(BusinessConfig::default().members_url(), DEFAULT_MEMBERS_URL);
    }

    #[cfg(not(target_arch = "wasm32"))]
    mod env {
        use serde_env::from_iter;

        use super::super::{BusinessConfig, RawConfig};

        #[test]
        fn env_overrides_members_url() {
            let raw: RawConfig =
                from_iter(vec![("MEMBERS_URL", "http://localhost:9000/members.json")])
                    .expect("RawConfig should deserialize");

            let config = BusinessConfig::from_raw(raw);
            assert_eq!(config.members_url(), "http://localhost:9000/members.json");
        }

        #[test]
        fn blank_override_falls_back_to_default() {
            let raw: RawConfig =
                from_iter(vec![("MEMBERS_URL", "  ")]).expect("RawConfig should deserialize");

            assert_eq!(BusinessConfig::from_raw(raw), BusinessConfig::default());
        }

        #[test]
        fn missing_override_falls_back_to_default() {
            let raw: RawConfig =
                from_iter(Vec::<(&str, &str)>::new()).expect("RawConfig should deserialize");

            assert_eq!(BusinessConfig::from_raw(raw), BusinessConfig::default());
        }
    }
}
