use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{AdtError, Result};

/// Config file picked up from the working directory when `--config` is not
/// given.
pub const DEFAULT_CONFIG_FILE: &str = "adt.toml";

/// Largest tower the CLI will solve; 2^32 - 1 moves is already far too many
/// to print.
pub const MAX_HANOI_DISKS: u32 = 32;

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub log: LogSettings,
    pub hanoi: HanoiSettings,
    pub expression: ExpressionSettings,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogSettings {
    pub level: String,
    pub json: bool,
}

impl Default for LogSettings {
    fn default() -> Self {
        LogSettings {
            level: "info".to_string(),
            json: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HanoiSettings {
    pub max_disks: u32,
}

impl Default for HanoiSettings {
    fn default() -> Self {
        HanoiSettings { max_disks: 20 }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExpressionSettings {
    /// Decimal places printed for computed values.
    pub precision: usize,
}

impl Default for ExpressionSettings {
    fn default() -> Self {
        ExpressionSettings { precision: 4 }
    }
}

impl Settings {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let settings: Settings = toml::from_str(content)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Loads `path` if given, else [`DEFAULT_CONFIG_FILE`] if it exists, else
    /// the defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => {
                let default_path = Path::new(DEFAULT_CONFIG_FILE);
                if default_path.is_file() {
                    Self::load(default_path)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }
}

impl Validate for Settings {
    fn validate(&self) -> Result<()> {
        self.log.validate()?;
        self.hanoi.validate()?;
        self.expression.validate()
    }
}

impl Validate for LogSettings {
    fn validate(&self) -> Result<()> {
        if !LOG_LEVELS.contains(&self.level.to_ascii_lowercase().as_str()) {
            return Err(AdtError::Config(format!(
                "log.level must be one of {}, got `{}`",
                LOG_LEVELS.join(", "),
                self.level
            )));
        }
        Ok(())
    }
}

impl Validate for HanoiSettings {
    fn validate(&self) -> Result<()> {
        if self.max_disks == 0 || self.max_disks > MAX_HANOI_DISKS {
            return Err(AdtError::Config(format!(
                "hanoi.max_disks must be between 1 and {MAX_HANOI_DISKS}, got {}",
                self.max_disks
            )));
        }
        Ok(())
    }
}

impl Validate for ExpressionSettings {
    fn validate(&self) -> Result<()> {
        if self.precision > 15 {
            return Err(AdtError::Config(format!(
                "expression.precision must be at most 15, got {}",
                self.precision
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults() {
        let settings = Settings::default();
        assert_eq!(settings.log.level, "info");
        assert!(!settings.log.json);
        assert_eq!(settings.hanoi.max_disks, 20);
        assert_eq!(settings.expression.precision, 4);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn partial_file_keeps_defaults() {
        let settings = Settings::from_toml_str(
            r#"
            [log]
            json = true

            [hanoi]
            max_disks = 8
            "#,
        )
        .unwrap();

        assert!(settings.log.json);
        assert_eq!(settings.log.level, "info");
        assert_eq!(settings.hanoi.max_disks, 8);
        assert_eq!(settings.expression.precision, 4);
    }

    #[test]
    fn invalid_values() {
        for content in [
            "[hanoi]\nmax_disks = 0",
            "[hanoi]\nmax_disks = 40",
            "[expression]\nprecision = 16",
            "[log]\nlevel = \"loud\"",
        ] {
            assert!(
                matches!(Settings::from_toml_str(content), Err(AdtError::Config(_))),
                "{content}"
            );
        }

        assert!(matches!(
            Settings::from_toml_str("[hanoi]\nmax_disks = \"many\""),
            Err(AdtError::Toml(_))
        ));
    }

    #[test]
    fn load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[expression]\nprecision = 2").unwrap();

        let settings = Settings::load_or_default(Some(file.path())).unwrap();
        assert_eq!(settings.expression.precision, 2);

        let missing = file.path().with_extension("missing");
        assert!(matches!(Settings::load(&missing), Err(AdtError::Io(_))));
    }

    #[test]
    fn default_file_in_working_directory() {
        let dir = tempfile::tempdir().unwrap();
        let previous = std::env::current_dir().unwrap();
        std::env::set_current_dir(dir.path()).unwrap();

        let without_file = Settings::load_or_default(None);

        std::fs::write(DEFAULT_CONFIG_FILE, "[hanoi]\nmax_disks = 5\n").unwrap();
        let with_file = Settings::load_or_default(None);

        std::fs::write(DEFAULT_CONFIG_FILE, "[hanoi]\nmax_disks = 0\n").unwrap();
        let invalid_file = Settings::load_or_default(None);

        std::env::set_current_dir(previous).unwrap();

        assert_eq!(without_file.unwrap(), Settings::default());
        assert_eq!(with_file.unwrap().hanoi.max_disks, 5);
        assert!(matches!(invalid_file, Err(AdtError::Config(_))));
    }

    #[test]
    fn round_trips_through_toml() {
        let settings = Settings::default();
        let text = toml::to_string(&settings).unwrap();
        assert_eq!(Settings::from_toml_str(&text).unwrap(), settings);
    }
}
