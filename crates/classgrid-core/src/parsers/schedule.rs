//! Schedule file parser (JSON or YAML)

use crate::error::{CoreError, LoadError, LoadReport};
use crate::models::{Schedule, SemesterPlanning, Session};
use serde::Deserialize;
use std::path::Path;
use tracing::debug;

/// Serialization format of a schedule file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScheduleFormat {
    Json,
    Yaml,
}

impl ScheduleFormat {
    /// Detect the format from the file extension
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_lowercase();
        match ext.as_str() {
            "json" => Some(ScheduleFormat::Json),
            "yaml" | "yml" => Some(ScheduleFormat::Yaml),
            _ => None,
        }
    }
}

/// Document shape before per-session validation
#[derive(Deserialize)]
struct RawSchedule {
    semester: SemesterPlanning,
    #[serde(default)]
    sessions: Vec<serde_json::Value>,
}

/// Parser for schedule files
pub struct ScheduleParser;

impl Default for ScheduleParser {
    fn default() -> Self {
        Self::new()
    }
}

impl ScheduleParser {
    pub fn new() -> Self {
        Self
    }

    /// Read and parse a schedule file
    pub fn load(&self, path: &Path, report: &mut LoadReport) -> Result<Schedule, CoreError> {
        let format = ScheduleFormat::from_path(path).ok_or_else(|| CoreError::UnsupportedFormat {
            path: path.to_path_buf(),
        })?;

        let content = std::fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                CoreError::FileNotFound {
                    path: path.to_path_buf(),
                }
            } else {
                CoreError::FileRead {
                    path: path.to_path_buf(),
                    source: e,
                }
            }
        })?;

        let schedule = self.parse_str(&content, format, path, report)?;
        debug!(
            ?path,
            sessions = schedule.len(),
            skipped = report.sessions_skipped,
            "Loaded schedule"
        );
        Ok(schedule)
    }

    /// Load a schedule, recording any failure in the report
    ///
    /// Returns `None` when the file could not be loaded at all; the report
    /// then holds a fatal entry with a suggestion for the user.
    pub fn load_reported(&self, path: &Path, report: &mut LoadReport) -> Option<Schedule> {
        match self.load(path, report) {
            Ok(schedule) => Some(schedule),
            Err(e) => {
                debug!(?path, error = %e, "Failed to load schedule");
                report.add_error(LoadError::from_core_error(path.display().to_string(), &e));
                None
            }
        }
    }

    /// Parse schedule content
    ///
    /// Session entries that do not deserialize are skipped and reported.
    /// Sessions outside the 07:00-21:00 quarter-hour grid are kept with a
    /// warning.
    pub fn parse_str(
        &self,
        content: &str,
        format: ScheduleFormat,
        path: &Path,
        report: &mut LoadReport,
    ) -> Result<Schedule, CoreError> {
        let document: serde_json::Value = match format {
            ScheduleFormat::Json => {
                serde_json::from_str(content).map_err(|e| CoreError::JsonParse {
                    path: path.to_path_buf(),
                    message: e.to_string(),
                    source: e,
                })?
            }
            ScheduleFormat::Yaml => {
                serde_yaml::from_str(content).map_err(|e| CoreError::YamlParse {
                    path: path.to_path_buf(),
                    message: e.to_string(),
                    source: e,
                })?
            }
        };

        let raw: RawSchedule =
            serde_json::from_value(document).map_err(|e| CoreError::InvalidSchedule {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;

        let mut sessions = Vec::with_capacity(raw.sessions.len());
        for (index, entry) in raw.sessions.into_iter().enumerate() {
            let source = format!("sessions[{}]", index);
            match serde_json::from_value::<Session>(entry) {
                Ok(session) => {
                    if !session.is_within_grid() {
                        debug!(%source, name = %session.name, "Session outside the grid");
                        report.add_warning(
                            source,
                            format!(
                                "'{}' ({}) is outside the 07:00-21:00 quarter-hour grid",
                                session.name,
                                session.time_range()
                            ),
                        );
                    }
                    sessions.push(session);
                }
                Err(e) => {
                    debug!(%source, error = %e, "Skipping malformed session");
                    report.add_error(
                        LoadError::error(source, e.to_string())
                            .with_suggestion("Expected day MONDAY..SUNDAY, week A or B"),
                    );
                    report.sessions_skipped += 1;
                }
            }
        }

        report.sessions_loaded = sessions.len();
        Ok(Schedule::new(raw.semester, sessions))
    }
}
