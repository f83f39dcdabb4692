//! # Configuration
//!
//! Profile and app settings live in `~/.amity/config.toml`. All fields
//! are optional in the file; `resolve()` collapses them against sample
//! defaults. If the file is missing on first run, a commented-out
//! default is generated so users can discover the options. A malformed
//! file degrades to defaults rather than failing startup.
//!
//! The Profile screen writes edits back through [`save_profile`].

use std::fmt;
use std::fs;
use std::path::PathBuf;

use chrono::NaiveDate;
use log::{info, warn};
use serde::{Deserialize, Serialize};

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct AmityConfig {
    #[serde(default)]
    pub profile: ProfileConfig,
    #[serde(default)]
    pub settings: SettingsConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ProfileConfig {
    pub name: Option<String>,
    pub email: Option<String>,
    pub partner_name: Option<String>,
    pub partner_email: Option<String>,
    pub anniversary: Option<String>,
    pub relationship_status: Option<RelationshipStatus>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct SettingsConfig {
    pub notifications: Option<bool>,
    pub daily_reminder: Option<bool>,
    pub partner_activity: Option<bool>,
    pub shmily_alerts: Option<bool>,
    pub sound_enabled: Option<bool>,
    pub vibration: Option<bool>,
    pub reminder_time: Option<String>,
    pub font_size: Option<FontSize>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RelationshipStatus {
    Dating,
    Engaged,
    Married,
}

impl RelationshipStatus {
    pub fn label(self) -> &'static str {
        match self {
            RelationshipStatus::Dating => "Dating",
            RelationshipStatus::Engaged => "Engaged",
            RelationshipStatus::Married => "Married",
        }
    }

    pub fn next(self) -> Self {
        match self {
            RelationshipStatus::Dating => RelationshipStatus::Engaged,
            RelationshipStatus::Engaged => RelationshipStatus::Married,
            RelationshipStatus::Married => RelationshipStatus::Dating,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FontSize {
    Small,
    #[default]
    Medium,
    Large,
}

impl FontSize {
    pub fn label(self) -> &'static str {
        match self {
            FontSize::Small => "Small",
            FontSize::Medium => "Medium",
            FontSize::Large => "Large",
        }
    }

    pub fn next(self) -> Self {
        match self {
            FontSize::Small => FontSize::Medium,
            FontSize::Medium => FontSize::Large,
            FontSize::Large => FontSize::Small,
        }
    }
}

// ============================================================================
// Resolved values (concrete, no Options)
// ============================================================================

pub const DEFAULT_ANNIVERSARY: &str = "2018-06-15";
pub const DEFAULT_REMINDER_TIME: &str = "08:00";

#[derive(Debug, Clone, PartialEq)]
pub struct Profile {
    pub name: String,
    pub email: String,
    pub partner_name: String,
    pub partner_email: String,
    pub anniversary: NaiveDate,
    pub relationship_status: RelationshipStatus,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub notifications: bool,
    pub daily_reminder: bool,
    pub partner_activity: bool,
    pub shmily_alerts: bool,
    pub sound_enabled: bool,
    pub vibration: bool,
    pub reminder_time: String,
    pub font_size: FontSize,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Encode(toml::ser::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Encode(e) => write!(f, "config encode error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.amity/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".amity").join("config.toml"))
}

/// Load config from `~/.amity/config.toml`.
///
/// Missing file: generates a commented-out default and returns
/// `AmityConfig::default()`. Malformed file: warns and returns
/// defaults — configuration trouble never blocks startup.
pub fn load_config() -> AmityConfig {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return AmityConfig::default();
        }
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return AmityConfig::default();
    }

    match fs::read_to_string(&path) {
        Ok(contents) => match toml::from_str(&contents) {
            Ok(config) => {
                info!("Loaded config from {}", path.display());
                config
            }
            Err(e) => {
                warn!("Config file is malformed, using defaults: {}", e);
                AmityConfig::default()
            }
        },
        Err(e) => {
            warn!("Failed to read config file, using defaults: {}", e);
            AmityConfig::default()
        }
    }
}

fn generate_default_config(path: &PathBuf) {
    let default_content = r#"# Amity Configuration
# All settings are optional — defaults are used for anything not specified.

# [profile]
# name = "Sarah"
# email = "sarah.johnson@email.com"
# partner_name = "Michael"
# partner_email = "michael.johnson@email.com"
# anniversary = "2018-06-15"
# relationship_status = "married"   # "dating", "engaged", or "married"

# [settings]
# notifications = true
# daily_reminder = true
# partner_activity = true
# shmily_alerts = true
# sound_enabled = true
# vibration = true
# reminder_time = "08:00"
# font_size = "medium"              # "small", "medium", or "large"
"#;

    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            warn!("Failed to create config directory: {}", e);
            return;
        }
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Collapse a sparse config into concrete profile + settings values.
pub fn resolve(config: &AmityConfig) -> (Profile, Settings) {
    let anniversary = config
        .profile
        .anniversary
        .as_deref()
        .and_then(|s| match NaiveDate::parse_from_str(s, "%Y-%m-%d") {
            Ok(date) => Some(date),
            Err(e) => {
                warn!("Unparseable anniversary {:?}: {}", s, e);
                None
            }
        })
        .unwrap_or_else(default_anniversary);

    let profile = Profile {
        name: config.profile.name.clone().unwrap_or_else(|| "Sarah".to_string()),
        email: config
            .profile
            .email
            .clone()
            .unwrap_or_else(|| "sarah.johnson@email.com".to_string()),
        partner_name: config
            .profile
            .partner_name
            .clone()
            .unwrap_or_else(|| "Michael".to_string()),
        partner_email: config
            .profile
            .partner_email
            .clone()
            .unwrap_or_else(|| "michael.johnson@email.com".to_string()),
        anniversary,
        relationship_status: config
            .profile
            .relationship_status
            .unwrap_or(RelationshipStatus::Married),
    };

    let settings = Settings {
        notifications: config.settings.notifications.unwrap_or(true),
        daily_reminder: config.settings.daily_reminder.unwrap_or(true),
        partner_activity: config.settings.partner_activity.unwrap_or(true),
        shmily_alerts: config.settings.shmily_alerts.unwrap_or(true),
        sound_enabled: config.settings.sound_enabled.unwrap_or(true),
        vibration: config.settings.vibration.unwrap_or(true),
        reminder_time: config
            .settings
            .reminder_time
            .clone()
            .unwrap_or_else(|| DEFAULT_REMINDER_TIME.to_string()),
        font_size: config.settings.font_size.unwrap_or_default(),
    };

    (profile, settings)
}

fn default_anniversary() -> NaiveDate {
    NaiveDate::parse_from_str(DEFAULT_ANNIVERSARY, "%Y-%m-%d").unwrap_or_default()
}

/// Write edited profile fields back to the config file, preserving the
/// current settings values alongside them.
pub fn save_profile(profile: &Profile, settings: &Settings) -> Result<(), ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, profile not saved");
            return Ok(());
        }
    };

    let config = AmityConfig {
        profile: ProfileConfig {
            name: Some(profile.name.clone()),
            email: Some(profile.email.clone()),
            partner_name: Some(profile.partner_name.clone()),
            partner_email: Some(profile.partner_email.clone()),
            anniversary: Some(profile.anniversary.format("%Y-%m-%d").to_string()),
            relationship_status: Some(profile.relationship_status),
        },
        settings: SettingsConfig {
            notifications: Some(settings.notifications),
            daily_reminder: Some(settings.daily_reminder),
            partner_activity: Some(settings.partner_activity),
            shmily_alerts: Some(settings.shmily_alerts),
            sound_enabled: Some(settings.sound_enabled),
            vibration: Some(settings.vibration),
            reminder_time: Some(settings.reminder_time.clone()),
            font_size: Some(settings.font_size),
        },
    };

    let contents = toml::to_string_pretty(&config).map_err(ConfigError::Encode)?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(ConfigError::Io)?;
    }
    fs::write(&path, contents).map_err(ConfigError::Io)?;
    info!("Profile saved to {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_uses_defaults_when_empty() {
        let (profile, settings) = resolve(&AmityConfig::default());
        assert_eq!(profile.name, "Sarah");
        assert_eq!(profile.partner_name, "Michael");
        assert_eq!(profile.relationship_status, RelationshipStatus::Married);
        assert_eq!(profile.anniversary.to_string(), DEFAULT_ANNIVERSARY);
        assert!(settings.notifications);
        assert_eq!(settings.reminder_time, DEFAULT_REMINDER_TIME);
        assert_eq!(settings.font_size, FontSize::Medium);
    }

    #[test]
    fn test_sparse_toml_parses() {
        // Only override one thing — everything else stays default
        let toml_str = r#"
[profile]
name = "Ana"
"#;
        let config: AmityConfig = toml::from_str(toml_str).unwrap();
        let (profile, settings) = resolve(&config);
        assert_eq!(profile.name, "Ana");
        assert_eq!(profile.partner_name, "Michael");
        assert!(settings.daily_reminder);
    }

    #[test]
    fn test_toml_round_trip() {
        let toml_str = r#"
[profile]
name = "Ana"
partner_name = "Luis"
anniversary = "2020-02-29"
relationship_status = "engaged"

[settings]
notifications = false
reminder_time = "21:30"
font_size = "large"
"#;
        let config: AmityConfig = toml::from_str(toml_str).unwrap();
        let (profile, settings) = resolve(&config);
        assert_eq!(profile.name, "Ana");
        assert_eq!(profile.partner_name, "Luis");
        assert_eq!(profile.anniversary.to_string(), "2020-02-29");
        assert_eq!(profile.relationship_status, RelationshipStatus::Engaged);
        assert!(!settings.notifications);
        assert_eq!(settings.reminder_time, "21:30");
        assert_eq!(settings.font_size, FontSize::Large);
    }

    #[test]
    fn test_invalid_anniversary_falls_back() {
        let config = AmityConfig {
            profile: ProfileConfig {
                anniversary: Some("not-a-date".to_string()),
                ..Default::default()
            },
            ..Default::default()
        };
        let (profile, _) = resolve(&config);
        assert_eq!(profile.anniversary.to_string(), DEFAULT_ANNIVERSARY);
    }

    #[test]
    fn test_status_and_font_cycles_cover_all_variants() {
        let mut status = RelationshipStatus::Dating;
        for _ in 0..3 {
            status = status.next();
        }
        assert_eq!(status, RelationshipStatus::Dating);

        let mut font = FontSize::Small;
        for _ in 0..3 {
            font = font.next();
        }
        assert_eq!(font, FontSize::Small);
    }
}
