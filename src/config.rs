//! Local settings: `[gvoice]` and `[auth]` sections in a TOML file.
//!
//! Resolution order for the file:
//!   1. GVOICE_CONFIG environment variable
//!   2. {user_config_dir}/gvoice/config.toml
//!
//! The file is created with empty defaults the first time it is loaded.

use anyhow::{bail, Result};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::model::PhoneType;

pub const DEFAULT_CONFIG: &str = r#"[auth]
# Google Account email address (one associated w/ your Voice account)
email = ""

# Raw password used for login
password = ""

# SMS key, if your account requires one
smsKey = ""

[gvoice]
# Number to place calls from (eg, your cell)
forwardingNumber = ""

# Default phoneType for your forwardingNumber as defined below
#  1 - Home
#  2 - Mobile
#  3 - Work
#  4 - Gizmo
phoneType = "2"

# Secret page token, filled in after login
secret = ""
"#;

pub const SECTIONS: [&str; 2] = ["gvoice", "auth"];

type Section = BTreeMap<String, toml::Value>;

/// Return the OS-native gvoice config directory.
pub fn config_dir() -> PathBuf {
    if let Some(proj_dirs) = directories::ProjectDirs::from("", "", "gvoice") {
        proj_dirs.config_dir().to_path_buf()
    } else {
        home_dir().join(".config").join("gvoice")
    }
}

/// Return the config file path, honoring GVOICE_CONFIG.
pub fn config_path() -> PathBuf {
    if let Ok(env) = std::env::var("GVOICE_CONFIG") {
        if !env.is_empty() {
            return PathBuf::from(env);
        }
    }
    config_dir().join("config.toml")
}

fn home_dir() -> PathBuf {
    std::env::var_os("HOME")
        .or_else(|| std::env::var_os("USERPROFILE"))
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."))
}

#[derive(Debug, Clone)]
pub struct Config {
    path: PathBuf,
    sections: BTreeMap<String, Section>,
}

impl Config {
    /// Load the config at `path` (or [`config_path`]), writing the defaults
    /// first if the file does not exist yet.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = path.map(PathBuf::from).unwrap_or_else(config_path);
        if !path.exists() {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(&path, DEFAULT_CONFIG)?;
        }
        let content = std::fs::read_to_string(&path)?;
        let sections: BTreeMap<String, Section> = toml::from_str(&content)?;
        Ok(Self { path, sections })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Trimmed value of `option` in `section`; empty values read as `None`.
    ///
    /// Non-string values (`phoneType = 2`) are rendered as text.
    pub fn get(&self, option: &str, section: &str) -> Option<String> {
        let value = match self.sections.get(section)?.get(option)? {
            toml::Value::String(s) => s.trim().to_string(),
            other => other.to_string(),
        };
        if value.is_empty() { None } else { Some(value) }
    }

    pub fn set(&mut self, option: &str, value: &str, section: &str) -> Result<()> {
        if !SECTIONS.contains(&section) {
            bail!(
                "Unknown section '{}'. Available: {}",
                section,
                SECTIONS.join(", ")
            );
        }
        self.sections
            .entry(section.to_string())
            .or_default()
            .insert(option.to_string(), toml::Value::String(value.to_string()));
        Ok(())
    }

    /// Write the current values back to [`path`](Self::path).
    pub fn save(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(&self.sections)?;
        std::fs::write(&self.path, content)?;
        Ok(())
    }

    pub fn forwarding_number(&self) -> Option<String> {
        self.get("forwardingNumber", "gvoice")
    }

    /// Numeric phone type; `None` when unset or not a number.
    pub fn phone_type(&self) -> Option<i64> {
        self.get("phoneType", "gvoice")?.parse().ok()
    }

    /// [`phone_type`](Self::phone_type) when it names a known line type.
    pub fn known_phone_type(&self) -> Option<PhoneType> {
        PhoneType::try_from(self.phone_type()?).ok()
    }

    pub fn secret(&self) -> Option<String> {
        self.get("secret", "gvoice")
    }

    pub fn email(&self) -> Option<String> {
        self.get("email", "auth")
    }

    pub fn password(&self) -> Option<String> {
        self.get("password", "auth")
    }

    pub fn sms_key(&self) -> Option<String> {
        self.get("smsKey", "auth")
    }
}
