//! Input Configuration
//!
//! Raw inputs are read by clap from flags or the GitHub Actions environment,
//! then validated once into an immutable [`Config`]. Clap never rejects a value
//! on its own: every field has a default so that validation (and its exit
//! codes) stays in [`Config::from_inputs`].

use clap::Parser;
use std::path::PathBuf;
use std::str::FromStr;
use thiserror::Error;

/// Default location of the 5mods site
pub const DEFAULT_BASE_URL: &str = "https://www.gta5-mods.com";

/// The only trigger event the publisher accepts
const RELEASE_EVENT: &str = "release";

/// Raw inputs, straight from the command line or environment
#[derive(Parser, Clone)]
#[command(name = "fangy")]
#[command(about = "Post GitHub release changelogs as comments on 5mods", long_about = None)]
#[command(version)]
pub struct Inputs {
    /// Name of the event that triggered the run
    #[arg(long, env = "GITHUB_EVENT_NAME", default_value = "")]
    pub event_name: String,

    /// Path to the JSON event document
    #[arg(long, env = "GITHUB_EVENT_PATH", default_value = "")]
    pub event_path: String,

    /// Git ref of the release (e.g. refs/tags/v1.0.0)
    #[arg(long, env = "GITHUB_REF", default_value = "")]
    pub git_ref: String,

    /// 5mods username
    #[arg(long, env = "INPUT_USERNAME", default_value = "")]
    pub username: String,

    /// 5mods password
    #[arg(long, env = "INPUT_PASSWORD", default_value = "", hide_env_values = true)]
    pub password: String,

    /// Mod category (tools, vehicles, paintjobs, weapons, scripts, player, maps, misc)
    #[arg(long, env = "INPUT_MODTYPE", default_value = "")]
    pub mod_type: String,

    /// Mod slug as shown in the page URL
    #[arg(long, env = "INPUT_MODNAME", default_value = "")]
    pub mod_name: String,

    /// Pin the comment after posting ("true" to enable)
    #[arg(long, env = "INPUT_PIN", default_value = "true")]
    pub pin: String,

    /// Feature the comment after posting ("true" to enable, implies pin)
    #[arg(long, env = "INPUT_FEATURE", default_value = "true")]
    pub feature: String,

    /// Base URL of the 5mods site
    #[arg(long, env = "FIVEMODS_URL", default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Log output format: text (default), json
    #[arg(long, env = "FANGY_LOG_FORMAT", default_value = "text")]
    pub log_format: String,
}

impl std::fmt::Debug for Inputs {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Inputs")
            .field("event_name", &self.event_name)
            .field("event_path", &self.event_path)
            .field("git_ref", &self.git_ref)
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("mod_type", &self.mod_type)
            .field("mod_name", &self.mod_name)
            .field("pin", &self.pin)
            .field("feature", &self.feature)
            .field("base_url", &self.base_url)
            .field("verbose", &self.verbose)
            .field("log_format", &self.log_format)
            .finish()
    }
}

/// Mod categories hosted by 5mods
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModType {
    Tools,
    Vehicles,
    Paintjobs,
    Weapons,
    Scripts,
    Player,
    Maps,
    Misc,
}

impl ModType {
    pub const ALL: [ModType; 8] = [
        ModType::Tools,
        ModType::Vehicles,
        ModType::Paintjobs,
        ModType::Weapons,
        ModType::Scripts,
        ModType::Player,
        ModType::Maps,
        ModType::Misc,
    ];

    /// Path segment used by the site for this category
    pub fn as_str(&self) -> &'static str {
        match self {
            ModType::Tools => "tools",
            ModType::Vehicles => "vehicles",
            ModType::Paintjobs => "paintjobs",
            ModType::Weapons => "weapons",
            ModType::Scripts => "scripts",
            ModType::Player => "player",
            ModType::Maps => "maps",
            ModType::Misc => "misc",
        }
    }
}

impl std::fmt::Display for ModType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ModType {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ModType::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or(ConfigError::InvalidModType)
    }
}

/// Login credentials for 5mods
#[derive(Clone)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Validated publisher configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub event_path: PathBuf,
    /// Release ref, may be empty (the event's tag name is used then)
    pub git_ref: String,
    pub credentials: Credentials,
    pub mod_type: ModType,
    pub mod_name: String,
    pub pin: bool,
    pub feature: bool,
    pub base_url: String,
}

/// Invalid or missing inputs
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("This action can only be triggered on Releases (got event '{0}')")]
    InvalidEvent(String),

    #[error("Username is not valid and/or only contains whitespaces")]
    InvalidUsername,

    #[error("Password is not valid and/or only contains whitespaces")]
    InvalidPassword,

    #[error("Mod Type is not valid and/or only contains whitespaces")]
    InvalidModType,

    #[error("Mod Name is not valid and/or only contains whitespaces")]
    InvalidModName,

    #[error("Event path is not valid and/or only contains whitespaces")]
    InvalidEventPath,
}

impl ConfigError {
    /// Process exit code, one per invalid field
    pub fn exit_code(&self) -> i32 {
        match self {
            ConfigError::InvalidEvent(_) => 1,
            ConfigError::InvalidUsername => 11,
            ConfigError::InvalidPassword => 12,
            ConfigError::InvalidModType => 13,
            ConfigError::InvalidModName => 14,
            ConfigError::InvalidEventPath => 15,
        }
    }
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

fn is_enabled(value: &str) -> bool {
    value.eq_ignore_ascii_case("true")
}

impl Config {
    /// Validate raw inputs, checking fields in a fixed order
    pub fn from_inputs(inputs: &Inputs) -> Result<Self, ConfigError> {
        if inputs.event_name != RELEASE_EVENT {
            return Err(ConfigError::InvalidEvent(inputs.event_name.clone()));
        }
        if is_blank(&inputs.username) {
            return Err(ConfigError::InvalidUsername);
        }
        if is_blank(&inputs.password) {
            return Err(ConfigError::InvalidPassword);
        }
        if is_blank(&inputs.mod_type) {
            return Err(ConfigError::InvalidModType);
        }
        let mod_type: ModType = inputs.mod_type.parse()?;
        if is_blank(&inputs.mod_name) {
            return Err(ConfigError::InvalidModName);
        }
        if is_blank(&inputs.event_path) {
            return Err(ConfigError::InvalidEventPath);
        }

        Ok(Self {
            event_path: PathBuf::from(&inputs.event_path),
            git_ref: inputs.git_ref.clone(),
            credentials: Credentials {
                username: inputs.username.clone(),
                password: inputs.password.clone(),
            },
            mod_type,
            mod_name: inputs.mod_name.clone(),
            pin: is_enabled(&inputs.pin),
            feature: is_enabled(&inputs.feature),
            base_url: inputs.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Site path of the target mod page
    pub fn mod_path(&self) -> String {
        crate::mods::mod_path(self.mod_type, &self.mod_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_inputs() -> Inputs {
        Inputs::parse_from([
            "fangy",
            "--event-name",
            "release",
            "--event-path",
            "/tmp/event.json",
            "--git-ref",
            "refs/tags/v1.0.0",
            "--username",
            "lemon",
            "--password",
            "hunter2",
            "--mod-type",
            "scripts",
            "--mod-name",
            "my-script",
            "--base-url",
            "http://localhost:1234/",
        ])
    }

    #[test]
    fn test_valid_inputs() {
        let config = Config::from_inputs(&valid_inputs()).unwrap();

        assert_eq!(config.mod_type, ModType::Scripts);
        assert_eq!(config.mod_name, "my-script");
        assert_eq!(config.mod_path(), "/scripts/my-script");
        assert_eq!(config.base_url, "http://localhost:1234");
        assert!(config.pin);
        assert!(config.feature);
    }

    #[test]
    fn test_rejects_non_release_event() {
        let mut inputs = valid_inputs();
        inputs.event_name = "push".to_string();

        let err = Config::from_inputs(&inputs).unwrap_err();
        assert_eq!(err, ConfigError::InvalidEvent("push".to_string()));
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn test_blank_fields_have_distinct_exit_codes() {
        let cases: [(fn(&mut Inputs), ConfigError, i32); 5] = [
            (|i| i.username = "   ".into(), ConfigError::InvalidUsername, 11),
            (|i| i.password = "\t".into(), ConfigError::InvalidPassword, 12),
            (|i| i.mod_type = "".into(), ConfigError::InvalidModType, 13),
            (|i| i.mod_name = " \n ".into(), ConfigError::InvalidModName, 14),
            (|i| i.event_path = " ".into(), ConfigError::InvalidEventPath, 15),
        ];

        for (blank, expected, code) in cases {
            let mut inputs = valid_inputs();
            blank(&mut inputs);
            let err = Config::from_inputs(&inputs).unwrap_err();
            assert_eq!(err, expected);
            assert_eq!(err.exit_code(), code);
        }
    }

    #[test]
    fn test_unknown_mod_type() {
        let mut inputs = valid_inputs();
        inputs.mod_type = "Scripts".to_string();

        assert_eq!(
            Config::from_inputs(&inputs).unwrap_err(),
            ConfigError::InvalidModType
        );
    }

    #[test]
    fn test_toggles_are_case_insensitive() {
        let mut inputs = valid_inputs();
        inputs.pin = "TRUE".to_string();
        inputs.feature = "yes".to_string();

        let config = Config::from_inputs(&inputs).unwrap();
        assert!(config.pin);
        assert!(!config.feature);
    }

    #[test]
    fn test_mod_type_round_trips_all_categories() {
        for t in ModType::ALL {
            assert_eq!(t.as_str().parse::<ModType>().unwrap(), t);
        }
    }

    #[test]
    fn test_inputs_debug_redacts_password() {
        let debug = format!("{:?}", valid_inputs());
        assert!(debug.contains("my-script"));
        assert!(debug.contains("<redacted>"));
        assert!(!debug.contains("hunter2"));
    }

    #[test]
    fn test_credentials_debug_redacts_password() {
        let config = Config::from_inputs(&valid_inputs()).unwrap();
        let debug = format!("{:?}", config.credentials);
        assert!(debug.contains("lemon"));
        assert!(!debug.contains("hunter2"));
    }
}
