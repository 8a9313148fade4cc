use crate::ui::messages::warning;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    /// Path of the SQLite store file.
    pub database: String,

    /// Worker name used when a command omits it. Empty means none.
    #[serde(default)]
    pub default_worker: String,

    /// Directory where reports land when no explicit file is given.
    #[serde(default = "default_export_dir")]
    pub export_dir: String,
}

fn default_export_dir() -> String {
    ".".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: Self::database_file().to_string_lossy().to_string(),
            default_worker: String::new(),
            export_dir: default_export_dir(),
        }
    }
}

impl Config {
    /// Standard configuration directory, under the user's home.
    pub fn config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".horario")
    }

    /// Full path of the config file.
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("horario.conf")
    }

    /// Full path of the SQLite store.
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("horario.sqlite")
    }

    /// Load configuration from file, or return defaults if not found.
    /// A file that fails to parse is reported and replaced by defaults so a
    /// broken config never blocks the CLI.
    pub fn load() -> Self {
        let path = Self::config_file();

        if !path.exists() {
            return Self::default();
        }

        match fs::read_to_string(&path) {
            Ok(content) => serde_yaml::from_str(&content).unwrap_or_else(|e| {
                warning(format!("Ignoring malformed config file: {e}"));
                Self::default()
            }),
            Err(e) => {
                warning(format!("Failed to read config file: {e}"));
                Self::default()
            }
        }
    }

    /// Initialize configuration and store files.
    pub fn init_all(custom_db: Option<String>, is_test: bool) -> io::Result<PathBuf> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        // Store path: user provided or default
        let db_path = if let Some(name) = custom_db {
            let p = PathBuf::from(&name);
            if p.is_absolute() { p } else { dir.join(p) }
        } else {
            Self::database_file()
        };

        let config = Config {
            database: db_path.to_string_lossy().to_string(),
            ..Self::default()
        };

        // Tests skip the config write so the user's real file is untouched
        if !is_test {
            let yaml = serde_yaml::to_string(&config)
                .map_err(|e| io::Error::other(format!("config serialization error: {e}")))?;
            let mut file = fs::File::create(Self::config_file())?;
            file.write_all(yaml.as_bytes())?;
        }

        Ok(db_path)
    }
}
