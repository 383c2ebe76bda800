//! Error types for classgrid-core
//!
//! Layout computation never fails; errors only come from loading schedule
//! files and preferences.

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Core error type for classgrid operations
#[derive(Error, Debug)]
pub enum CoreError {
    // ===================
    // IO Errors
    // ===================
    #[error("Failed to read file: {path}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("File not found: {path}")]
    FileNotFound { path: PathBuf },

    // ===================
    // Parse Errors
    // ===================
    #[error("Failed to parse JSON in {path}: {message}")]
    JsonParse {
        path: PathBuf,
        message: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to parse YAML in {path}: {message}")]
    YamlParse {
        path: PathBuf,
        message: String,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("Invalid schedule in {path}: {message}")]
    InvalidSchedule { path: PathBuf, message: String },

    #[error("Unsupported schedule format: {path} (expected .json, .yaml or .yml)")]
    UnsupportedFormat { path: PathBuf },
}

/// Severity level for errors during load
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    /// The entry is kept as-is
    Warning,
    /// The entry is skipped, the rest of the file still loads
    Error,
    /// Nothing could be loaded
    Fatal,
}

/// Individual error entry in load report
#[derive(Debug, Clone)]
pub struct LoadError {
    pub source: String,
    pub message: String,
    pub severity: ErrorSeverity,
    /// Actionable suggestion for user (optional)
    pub suggestion: Option<String>,
}

impl LoadError {
    pub fn warning(source: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            message: message.into(),
            severity: ErrorSeverity::Warning,
            suggestion: None,
        }
    }

    pub fn error(source: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            message: message.into(),
            severity: ErrorSeverity::Error,
            suggestion: None,
        }
    }

    /// Add an actionable suggestion to this error
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    /// Create user-friendly error from CoreError with context-aware suggestions
    pub fn from_core_error(source: impl Into<String>, error: &CoreError) -> Self {
        let source = source.into();
        let (message, suggestion) = match error {
            CoreError::FileNotFound { path } => (
                format!("File not found: {}", path.display()),
                Some("Pass the schedule with --schedule <file>".to_string()),
            ),
            CoreError::FileRead { path, .. } => (
                format!("Cannot read file: {}", path.display()),
                Some(format!("Check permissions: chmod +r {}", path.display())),
            ),
            CoreError::JsonParse { path, message, .. } => (
                format!("Invalid JSON in {}: {}", path.display(), message),
                Some("Validate JSON syntax with: jq . <file>".to_string()),
            ),
            CoreError::YamlParse { path, message, .. } => (
                format!("Invalid YAML in {}: {}", path.display(), message),
                Some("Check indentation and quoting around the reported line".to_string()),
            ),
            CoreError::InvalidSchedule { path, message } => (
                format!("Invalid schedule in {}: {}", path.display(), message),
                Some("A schedule needs a 'semester' block with 'weekAlternance'".to_string()),
            ),
            CoreError::UnsupportedFormat { path } => (
                error.to_string(),
                Some(format!(
                    "Rename {} with a .json or .yaml extension",
                    path.display()
                )),
            ),
        };

        Self {
            source,
            message,
            severity: ErrorSeverity::Fatal,
            suggestion,
        }
    }
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.source, self.message)?;
        if let Some(suggestion) = &self.suggestion {
            write!(f, " (hint: {})", suggestion)?;
        }
        Ok(())
    }
}

/// Report of problems encountered while loading a schedule
///
/// Malformed session entries are skipped and recorded here instead of
/// failing the whole load.
#[derive(Debug, Default)]
pub struct LoadReport {
    pub errors: Vec<LoadError>,
    pub sessions_loaded: usize,
    pub sessions_skipped: usize,
}

impl LoadReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_error(&mut self, error: LoadError) {
        self.errors.push(error);
    }

    pub fn add_warning(&mut self, source: impl Into<String>, message: impl Into<String>) {
        self.errors.push(LoadError::warning(source, message));
    }

    /// Returns true if there are any fatal errors
    pub fn has_fatal_errors(&self) -> bool {
        self.errors
            .iter()
            .any(|e| e.severity == ErrorSeverity::Fatal)
    }

    /// Returns true if there are any errors (including warnings)
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// First fatal error, if loading failed
    pub fn fatal(&self) -> Option<&LoadError> {
        self.errors
            .iter()
            .find(|e| e.severity == ErrorSeverity::Fatal)
    }

    /// Returns count by severity
    pub fn error_count(&self) -> (usize, usize, usize) {
        let count = |severity: ErrorSeverity| {
            self.errors
                .iter()
                .filter(|e| e.severity == severity)
                .count()
        };
        (
            count(ErrorSeverity::Warning),
            count(ErrorSeverity::Error),
            count(ErrorSeverity::Fatal),
        )
    }

    /// One-line summary for status bars
    pub fn summary(&self) -> String {
        let (warnings, errors, fatal) = self.error_count();
        format!(
            "{} sessions loaded, {} skipped ({} warnings, {} errors, {} fatal)",
            self.sessions_loaded, self.sessions_skipped, warnings, errors, fatal
        )
    }
}
