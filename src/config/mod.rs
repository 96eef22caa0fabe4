use crate::core::extract::{DEFAULT_YEAR, ExtractOptions, PLACEHOLDER_TITLE};
use crate::errors::{AppError, AppResult};
use crate::utils::path::expand_tilde;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Environment variable overriding the configuration directory.
pub const HOME_ENV: &str = "LOCANDINE_HOME";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// JSON collection file.
    pub data_file: String,
    /// Relative paths below are resolved against the data file's folder.
    #[serde(default = "default_uploads_dir")]
    pub uploads_dir: String,
    #[serde(default = "default_output_dir")]
    pub output_dir: String,
    /// Raw OCR dump used to seed an empty collection on first run.
    #[serde(default = "default_seed_file")]
    pub seed_file: String,
    /// Year appended to poster dates that omit it.
    #[serde(default = "default_year")]
    pub default_year: i32,
    #[serde(default = "default_placeholder_title")]
    pub placeholder_title: String,
}

fn default_uploads_dir() -> String {
    "uploads".to_string()
}
fn default_output_dir() -> String {
    "output".to_string()
}
fn default_seed_file() -> String {
    "locandine.json".to_string()
}
fn default_year() -> i32 {
    DEFAULT_YEAR
}
fn default_placeholder_title() -> String {
    PLACEHOLDER_TITLE.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_file: Self::data_file_default().to_string_lossy().to_string(),
            uploads_dir: default_uploads_dir(),
            output_dir: default_output_dir(),
            seed_file: default_seed_file(),
            default_year: default_year(),
            placeholder_title: default_placeholder_title(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if let Ok(custom) = env::var(HOME_ENV)
            && !custom.trim().is_empty()
        {
            return expand_tilde(&custom);
        }

        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("locandine")
        } else {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".locandine")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("locandine.conf")
    }

    pub fn data_file_default() -> PathBuf {
        Self::config_dir().join("data.json")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path).map_err(|_| AppError::ConfigLoad)?;
        let cfg: Config = serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("{}: {}", path.display(), e)))?;
        Ok(cfg)
    }

    pub fn save(&self) -> AppResult<()> {
        let yaml = serde_yaml::to_string(self)?;
        let mut file = fs::File::create(Self::config_file()).map_err(|_| AppError::ConfigSave)?;
        file.write_all(yaml.as_bytes())
            .map_err(|_| AppError::ConfigSave)?;
        Ok(())
    }

    pub fn data_path(&self) -> PathBuf {
        expand_tilde(&self.data_file)
    }

    /// Folder holding the data file; base for the relative paths.
    fn base_dir(&self) -> PathBuf {
        self.data_path()
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("."))
    }

    fn resolve(&self, raw: &str) -> PathBuf {
        let p = expand_tilde(raw);
        if p.is_absolute() { p } else { self.base_dir().join(p) }
    }

    pub fn uploads_path(&self) -> PathBuf {
        self.resolve(&self.uploads_dir)
    }

    pub fn output_path(&self) -> PathBuf {
        self.resolve(&self.output_dir)
    }

    pub fn seed_path(&self) -> PathBuf {
        self.resolve(&self.seed_file)
    }

    pub fn extract_options(&self) -> ExtractOptions {
        ExtractOptions {
            default_year: self.default_year,
            placeholder_title: self.placeholder_title.clone(),
        }
    }

    /// Create the config directory, the config file (unless `is_test`), an
    /// empty collection and the uploads/output folders.
    pub fn init_all(custom_data: Option<String>, is_test: bool) -> io::Result<Self> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        let mut config = Self::default();
        if let Some(name) = custom_data {
            let p = expand_tilde(&name);
            let p = if p.is_absolute() { p } else { dir.join(p) };
            config.data_file = p.to_string_lossy().to_string();
        }

        if !is_test {
            let yaml = serde_yaml::to_string(&config).map_err(io::Error::other)?;
            let mut file = fs::File::create(Self::config_file())?;
            file.write_all(yaml.as_bytes())?;
            println!("✅ Config file: {:?}", Self::config_file());
        }

        let data_path = config.data_path();
        if let Some(parent) = data_path.parent() {
            fs::create_dir_all(parent)?;
        }
        if !data_path.exists() {
            fs::write(&data_path, "[]")?;
        }
        fs::create_dir_all(config.uploads_path())?;
        fs::create_dir_all(config.output_path())?;

        println!("✅ Data file:   {:?}", data_path);

        Ok(config)
    }
}
