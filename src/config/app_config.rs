use super::error::{ConfigError, ConfigResult};
use crate::domain::{
    Account, NotificationItem, RecentMessage, RecentMessages, ThemeMode, WalletIdentity,
    DEFAULT_NOTIFICATIONS,
};
use crate::store::GlobalState;
use crate::ui::badges::UnreadPolicy;
use crate::ui::components::avatar::DEFAULT_GROUP_MAX;
use crate::utils::{is_valid_date_format, DEFAULT_DATE_FORMAT};
use serde::Deserialize;
use std::{fs, io, path::Path};
use tracing::{info, warn};

pub const DEFAULT_CONFIG_PATH: &str = "app-config.yaml";
pub const CONFIG_PATH_ENV: &str = "PEERSWAP_CONFIG";

/// State the store starts with.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct SessionSeed {
    pub wallet: Option<WalletIdentity>,
    pub account: Option<Account>,
    pub theme: ThemeMode,
    pub recent_messages: Vec<RecentMessage>,
}

impl SessionSeed {
    pub fn into_state(self) -> GlobalState {
        GlobalState {
            wallet: self.wallet,
            account: self.account,
            recent_messages: self.recent_messages.into_iter().collect::<RecentMessages>(),
            theme: self.theme,
        }
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    pub title: String,
    /// Bars narrower than this collapse their actions into the overflow menu.
    pub mobile_breakpoint: f32,
    pub drawer_width: f32,
    pub avatar_group_max: usize,
    pub date_format: String,
    pub unread_policy: UnreadPolicy,
    pub notifications: Vec<NotificationItem>,
    pub session: SessionSeed,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            title: "Peerswap".to_string(),
            mobile_breakpoint: 900.0,
            drawer_width: 200.0,
            avatar_group_max: DEFAULT_GROUP_MAX,
            date_format: DEFAULT_DATE_FORMAT.to_string(),
            unread_policy: UnreadPolicy::default(),
            notifications: DEFAULT_NOTIFICATIONS.to_vec(),
            session: SessionSeed::default(),
        }
    }
}

impl AppConfig {
    pub fn from_yaml_str(config_str: &str, path: &Path) -> ConfigResult<Self> {
        let config: AppConfig =
            serde_yaml::from_str(config_str).map_err(|source| ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            })?;
        config.validate()?;
        Ok(config)
    }

    pub fn load_yaml_from_file(file_path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = file_path.as_ref();
        let config_str = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml_str(&config_str, path)
    }

    /// Loads from `$PEERSWAP_CONFIG` or `app-config.yaml`, using defaults when the file is absent.
    pub fn load() -> ConfigResult<Self> {
        let path = std::env::var(CONFIG_PATH_ENV).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.into());
        match Self::load_yaml_from_file(&path) {
            Ok(config) => {
                info!(path = %path, "config loaded");
                Ok(config)
            }
            Err(ConfigError::Io { source, .. }) if source.kind() == io::ErrorKind::NotFound => {
                warn!(path = %path, "config file not found, using defaults");
                Ok(Self::default())
            }
            Err(err) => Err(err),
        }
    }

    pub fn validate(&self) -> ConfigResult<()> {
        if self.mobile_breakpoint.is_nan() || self.mobile_breakpoint <= 0.0 {
            return Err(ConfigError::Invalid(format!(
                "mobile_breakpoint must be positive, got {}",
                self.mobile_breakpoint
            )));
        }
        if self.avatar_group_max == 0 {
            return Err(ConfigError::Invalid(
                "avatar_group_max must be at least 1".to_string(),
            ));
        }
        if !is_valid_date_format(&self.date_format) {
            return Err(ConfigError::Invalid(format!(
                "date_format {:?} is not a valid strftime format",
                self.date_format
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(yaml: &str) -> ConfigResult<AppConfig> {
        AppConfig::from_yaml_str(yaml, Path::new("test.yaml"))
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let config = parse("title: Swapper\n").unwrap();
        assert_eq!(config.title, "Swapper");
        assert_eq!(config.avatar_group_max, 4);
        assert_eq!(config.mobile_breakpoint, 900.0);
        assert_eq!(config.notifications.len(), 3);
        assert_eq!(config.unread_policy, UnreadPolicy::Sticky);
        assert!(config.session.wallet.is_none());
    }

    #[test]
    fn test_session_seed() {
        let yaml = r#"
unread_policy: reset_on_growth
session:
  wallet:
    address: bc1qexample
  account:
    emoji: "🦊"
  theme: dark
  recent_messages:
    - handle: alice
      timestamp: 2024-03-09T12:00:00Z
      body: hi
    - handle: alice
      timestamp: 2024-03-09T13:00:00Z
      body: still there?
"#;
        let config = parse(yaml).unwrap();
        assert_eq!(config.unread_policy, UnreadPolicy::ResetOnGrowth);
        let state = config.session.into_state();
        assert_eq!(state.theme, ThemeMode::Dark);
        assert_eq!(state.account.unwrap().emoji, "🦊");
        assert_eq!(state.recent_messages.sender_count(), 1);
        assert_eq!(
            state.recent_messages.get("alice").unwrap().body,
            "still there?"
        );
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        assert!(matches!(
            parse("mobile_breakpoint: 0.0\n"),
            Err(ConfigError::Invalid(_))
        ));
        assert!(matches!(
            parse("avatar_group_max: 0\n"),
            Err(ConfigError::Invalid(_))
        ));
    }

    #[test]
    fn test_unknown_date_specifier_is_rejected() {
        let err = parse("date_format: \"%Q\"\n").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(msg) if msg.contains("%Q")));
        assert!(parse("date_format: \"%d/%m %H:%M\"\n").is_ok());
    }

    #[test]
    fn test_malformed_yaml() {
        assert!(matches!(parse("title: [\n"), Err(ConfigError::Parse { .. })));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = AppConfig::load_yaml_from_file("/nonexistent/peerswap.yaml").unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
