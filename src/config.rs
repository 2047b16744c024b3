//! Session configuration.
//!
//! Loaded from TOML. Every section is optional; missing keys fall back to
//! defaults.
//!
//! ```toml
//! [labels]
//! prefix = "Day"
//!
//! [export]
//! layout = "by-day"
//!
//! [demo]
//! students = 5
//! min_courses = 1
//! max_courses = 4
//! seed = 42
//!
//! [catalog]
//! courses = ["Math", "Physics", "Chemistry"]
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::demo::COURSE_CATALOG;
use crate::error::{Result, ScheduleError};
use crate::models::DayLabels;

/// Tabular layout for exported schedules.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ExportLayout {
    /// One `course,day,label` row per course.
    Flat,
    /// One column per day, courses listed beneath.
    #[default]
    ByDay,
}

/// Export settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    /// Table layout.
    pub layout: ExportLayout,
}

/// Random registration generator settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    /// Number of students to generate.
    pub students: usize,
    /// Fewest courses per student.
    pub min_courses: usize,
    /// Most courses per student.
    pub max_courses: usize,
    /// RNG seed. `None` = nondeterministic.
    pub seed: Option<u64>,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            students: 5,
            min_courses: 1,
            max_courses: 4,
            seed: None,
        }
    }
}

/// Course catalog students pick from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// Course names.
    pub courses: Vec<String>,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            courses: COURSE_CATALOG.iter().map(|c| c.to_string()).collect(),
        }
    }
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SchedulerConfig {
    /// Day label format.
    pub labels: DayLabels,
    /// Export settings.
    pub export: ExportConfig,
    /// Demo data settings.
    pub demo: DemoConfig,
    /// Course catalog.
    pub catalog: CatalogConfig,
}

impl SchedulerConfig {
    /// Parses configuration from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Loads configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|e| ScheduleError::io(path, e))?;
        Self::from_toml_str(&text)
    }

    /// Sets the day label prefix.
    pub fn with_day_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.labels = DayLabels::new(prefix);
        self
    }

    /// Sets the export layout.
    pub fn with_layout(mut self, layout: ExportLayout) -> Self {
        self.export.layout = layout;
        self
    }

    /// Sets the demo RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.demo.seed = Some(seed);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = SchedulerConfig::default();
        assert_eq!(config.labels.prefix, "Day");
        assert_eq!(config.export.layout, ExportLayout::ByDay);
        assert_eq!(config.demo.students, 5);
        assert_eq!(config.catalog.courses.len(), COURSE_CATALOG.len());
    }

    #[test]
    fn test_empty_toml_is_default() {
        let config = SchedulerConfig::from_toml_str("").unwrap();
        assert_eq!(config, SchedulerConfig::default());
    }

    #[test]
    fn test_partial_toml() {
        let config = SchedulerConfig::from_toml_str(
            r#"
            [labels]
            prefix = "Session"

            [export]
            layout = "flat"

            [demo]
            seed = 7
            "#,
        )
        .unwrap();
        assert_eq!(config.labels.label(0), "Session 1");
        assert_eq!(config.export.layout, ExportLayout::Flat);
        assert_eq!(config.demo.seed, Some(7));
        assert_eq!(config.demo.max_courses, 4);
    }

    #[test]
    fn test_invalid_toml() {
        let err = SchedulerConfig::from_toml_str("[export]\nlayout = \"diagonal\"").unwrap_err();
        assert!(matches!(err, ScheduleError::Config(_)));
    }

    #[test]
    fn test_load_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[catalog]\ncourses = [\"Art\", \"Music\"]").unwrap();
        let config = SchedulerConfig::load(file.path()).unwrap();
        assert_eq!(config.catalog.courses, vec!["Art", "Music"]);

        let missing = SchedulerConfig::load("/nonexistent/exam.toml").unwrap_err();
        assert!(matches!(missing, ScheduleError::Io { .. }));
    }

    #[test]
    fn test_builders() {
        let config = SchedulerConfig::default()
            .with_day_prefix("Slot")
            .with_layout(ExportLayout::Flat)
            .with_seed(3);
        assert_eq!(config.labels.prefix, "Slot");
        assert_eq!(config.export.layout, ExportLayout::Flat);
        assert_eq!(config.demo.seed, Some(3));
    }
}
