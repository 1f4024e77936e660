//! # Desk Configuration
//!
//! Where the hotel tables live and how absent values are shown.
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Command Line (highest priority)                                    │
//! │     --data-dir ./data                                                  │
//! │                                                                         │
//! │  2. Environment Variables                                              │
//! │     HOTEL_DATA_DIR=/srv/hotel                                          │
//! │     HOTEL_BOOKINGS_FILE="Bookings 2025.csv"                            │
//! │                                                                         │
//! │  3. TOML Config File                                                   │
//! │     ~/.config/hotel-desk/hotel.toml (Linux)                            │
//! │     ~/Library/Application Support/com.hoteldesk.hotel-desk/hotel.toml  │
//! │                                                                         │
//! │  4. Default Values (lowest priority)                                   │
//! │     current directory, Guest.csv, Companies.csv, ...                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! # hotel.toml
//! [data]
//! dir = "/srv/hotel"
//! guests_file = "Guest.csv"
//! companies_file = "Companies.csv"
//! bookings_file = "Future booking.csv"
//! services_file = "Hotel_Services.csv"
//!
//! [display]
//! fallback = "N/A"
//! room_placeholder = "The room will be assigned by hotel reservation agents"
//! ```

use std::path::{Path, PathBuf};

use hotel_store::hotel::{BOOKINGS_FILE, COMPANIES_FILE, GUESTS_FILE, SERVICES_FILE};
use hotel_store::TablePaths;
use serde::Deserialize;
use tracing::{debug, info, warn};

use crate::error::ConfigError;

/// Result type for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

// =============================================================================
// Data Settings
// =============================================================================

/// Location of the four tables.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DataSettings {
    /// Directory holding the tables.
    #[serde(default = "default_data_dir")]
    pub dir: PathBuf,

    #[serde(default = "default_guests_file")]
    pub guests_file: String,

    #[serde(default = "default_companies_file")]
    pub companies_file: String,

    #[serde(default = "default_bookings_file")]
    pub bookings_file: String,

    #[serde(default = "default_services_file")]
    pub services_file: String,
}

fn default_data_dir() -> PathBuf {
    PathBuf::from(".")
}

fn default_guests_file() -> String {
    GUESTS_FILE.to_string()
}

fn default_companies_file() -> String {
    COMPANIES_FILE.to_string()
}

fn default_bookings_file() -> String {
    BOOKINGS_FILE.to_string()
}

fn default_services_file() -> String {
    SERVICES_FILE.to_string()
}

impl Default for DataSettings {
    fn default() -> Self {
        DataSettings {
            dir: default_data_dir(),
            guests_file: default_guests_file(),
            companies_file: default_companies_file(),
            bookings_file: default_bookings_file(),
            services_file: default_services_file(),
        }
    }
}

// =============================================================================
// Display Settings
// =============================================================================

/// How records are shown on screen.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DisplaySettings {
    /// Shown in place of a field the record does not have.
    #[serde(default = "default_fallback")]
    pub fallback: String,

    /// Shown for a booking without a room.
    #[serde(default = "default_room_placeholder")]
    pub room_placeholder: String,
}

fn default_fallback() -> String {
    "N/A".to_string()
}

fn default_room_placeholder() -> String {
    "The room will be assigned by hotel reservation agents".to_string()
}

impl Default for DisplaySettings {
    fn default() -> Self {
        DisplaySettings {
            fallback: default_fallback(),
            room_placeholder: default_room_placeholder(),
        }
    }
}

// =============================================================================
// Main Configuration
// =============================================================================

/// Complete desk configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct HotelConfig {
    #[serde(default)]
    pub data: DataSettings,

    #[serde(default)]
    pub display: DisplaySettings,
}

impl HotelConfig {
    /// Loads configuration from file, environment, and defaults.
    ///
    /// ## Load Order (later overrides earlier)
    /// 1. Default values
    /// 2. Config file (hotel.toml)
    /// 3. Environment variables
    ///
    /// A missing file at the default location falls back to defaults; a
    /// missing file that was named explicitly is an error.
    pub fn load(config_path: Option<PathBuf>) -> ConfigResult<Self> {
        let mut config = match config_path {
            Some(path) if !path.exists() => return Err(ConfigError::NotFound(path)),
            Some(path) => Self::from_file(&path)?,
            None => match Self::default_config_path() {
                Some(path) if path.exists() => Self::from_file(&path)?,
                Some(path) => {
                    debug!(?path, "Config file not found, using defaults");
                    Self::default()
                }
                None => Self::default(),
            },
        };

        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    fn from_file(path: &Path) -> ConfigResult<Self> {
        info!(?path, "Loading desk config from file");
        let contents = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&contents)?)
    }

    /// Validates the configuration.
    pub fn validate(&self) -> ConfigResult<()> {
        if self.data.dir.as_os_str().is_empty() {
            return Err(ConfigError::Invalid("data.dir must not be empty".into()));
        }

        let files = self.file_names();
        for (key, file) in files {
            if file.trim().is_empty() {
                return Err(ConfigError::Invalid(format!("data.{} must not be empty", key)));
            }
        }
        for (i, (key, file)) in files.iter().enumerate() {
            if let Some((other, _)) = files[i + 1..].iter().find(|(_, f)| f == file) {
                return Err(ConfigError::Invalid(format!(
                    "data.{} and data.{} both name '{}'",
                    key, other, file
                )));
            }
        }
        Ok(())
    }

    /// Applies environment variable overrides.
    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    /// Applies overrides from `lookup`, which maps a variable name to its
    /// value.
    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        // Data directory
        if let Some(dir) = lookup("HOTEL_DATA_DIR") {
            debug!(dir = %dir, "Overriding data directory from environment");
            self.data.dir = PathBuf::from(dir);
        }

        // Table file names
        let files = [
            ("HOTEL_GUESTS_FILE", &mut self.data.guests_file),
            ("HOTEL_COMPANIES_FILE", &mut self.data.companies_file),
            ("HOTEL_BOOKINGS_FILE", &mut self.data.bookings_file),
            ("HOTEL_SERVICES_FILE", &mut self.data.services_file),
        ];
        for (var, slot) in files {
            match lookup(var) {
                Some(file) if file.trim().is_empty() => {
                    warn!(var, "Ignoring empty table file name in environment");
                }
                Some(file) => {
                    debug!(var, file = %file, "Overriding table file from environment");
                    *slot = file;
                }
                None => {}
            }
        }
    }

    /// Returns the default config file path.
    pub fn default_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "hoteldesk", "hotel-desk")
            .map(|dirs| dirs.config_dir().join("hotel.toml"))
    }

    // =========================================================================
    // Convenience Methods
    // =========================================================================

    /// Full paths of the four tables.
    pub fn table_paths(&self) -> TablePaths {
        TablePaths::in_dir(&self.data.dir)
            .guests(&self.data.guests_file)
            .companies(&self.data.companies_file)
            .bookings(&self.data.bookings_file)
            .services(&self.data.services_file)
    }

    fn file_names(&self) -> [(&'static str, &str); 4] {
        [
            ("guests_file", self.data.guests_file.as_str()),
            ("companies_file", self.data.companies_file.as_str()),
            ("bookings_file", self.data.bookings_file.as_str()),
            ("services_file", self.data.services_file.as_str()),
        ]
    }
}
