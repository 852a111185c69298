use crate::errors::{AppError, AppResult};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Header names used to locate the source columns.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ColumnNames {
    #[serde(default = "default_employee_column")]
    pub employee: String,
    #[serde(default = "default_date_column")]
    pub date: String,
    #[serde(default = "default_description_column")]
    pub description: String,
    #[serde(default = "default_total_hours_column")]
    pub total_hours: String,
}

/// How far a merged task description is remembered for one employee.
///
/// - `Month`: a description is merged once per employee for the whole month
///   (a task repeated on a later day is dropped there).
/// - `Day`: a description is merged once per employee and day.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum DedupScope {
    #[default]
    Month,
    Day,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub columns: ColumnNames,
    #[serde(default = "default_date_formats")]
    pub date_formats: Vec<String>,
    #[serde(default = "default_title")]
    pub default_title: String,
    #[serde(default = "default_leave_label")]
    pub leave_label: String,
    #[serde(default = "default_summary_status")]
    pub summary_status: String,
    #[serde(default)]
    pub task_dedup: DedupScope,
}

fn default_employee_column() -> String {
    "Emp Name".to_string()
}
fn default_date_column() -> String {
    "Date".to_string()
}
fn default_description_column() -> String {
    "Description".to_string()
}
fn default_total_hours_column() -> String {
    "Total Hours".to_string()
}
fn default_date_formats() -> Vec<String> {
    // DD-MMM-YYYY first, then the "Mar 03, 2025" layout of newer exports
    vec!["%d-%b-%Y".to_string(), "%b %d, %Y".to_string()]
}
fn default_title() -> String {
    "Development".to_string()
}
fn default_leave_label() -> String {
    "On Leave".to_string()
}
fn default_summary_status() -> String {
    "Existing".to_string()
}

impl Default for ColumnNames {
    fn default() -> Self {
        Self {
            employee: default_employee_column(),
            date: default_date_column(),
            description: default_description_column(),
            total_hours: default_total_hours_column(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            columns: ColumnNames::default(),
            date_formats: default_date_formats(),
            default_title: default_title(),
            leave_label: default_leave_label(),
            summary_status: default_summary_status(),
            task_dedup: DedupScope::default(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory (`~/.rtimeweaver`)
    pub fn config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".rtimeweaver")
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rtimeweaver.conf")
    }

    /// Load configuration from `path` (or the standard location),
    /// falling back to defaults when the file does not exist.
    pub fn load(path: Option<&Path>) -> AppResult<Self> {
        let path = path
            .map(Path::to_path_buf)
            .unwrap_or_else(Self::config_file);

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path).map_err(|_| AppError::ConfigLoad)?;
        let cfg: Config = serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("{}: {e}", path.display())))?;
        cfg.check()?;
        Ok(cfg)
    }

    /// Write this configuration as YAML, creating the parent directory.
    pub fn save(&self, path: &Path) -> AppResult<()> {
        if let Some(dir) = path.parent()
            && !dir.as_os_str().is_empty()
        {
            fs::create_dir_all(dir)?;
        }

        let yaml = serde_yaml::to_string(self).map_err(|_| AppError::ConfigSave)?;
        let mut file = fs::File::create(path)?;
        file.write_all(yaml.as_bytes())?;
        Ok(())
    }

    fn check(&self) -> AppResult<()> {
        if self.date_formats.is_empty() {
            return Err(AppError::Config(
                "date_formats must list at least one pattern".to_string(),
            ));
        }

        let cols = [
            &self.columns.employee,
            &self.columns.date,
            &self.columns.description,
            &self.columns.total_hours,
        ];
        if cols.iter().any(|c| c.trim().is_empty()) {
            return Err(AppError::Config("column names cannot be empty".to_string()));
        }

        Ok(())
    }
}
