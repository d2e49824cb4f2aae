//! Issue model shared by every validation level, plus the loader error type.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Stable machine-readable issue codes, grouped by level.
pub mod codes {
    // Level 1: document loading
    pub const XML_PARSE_ERROR: &str = "XML_PARSE_ERROR";
    pub const FILE_NOT_FOUND: &str = "FILE_NOT_FOUND";
    pub const INVALID_OPTIONS: &str = "INVALID_OPTIONS";

    // Level 2: document basics
    pub const INVALID_ROOT: &str = "INVALID_ROOT";
    pub const MISSING_BPMN_NAMESPACE: &str = "MISSING_BPMN_NAMESPACE";
    pub const NO_PROCESS: &str = "NO_PROCESS";
    pub const PROCESS_NO_ID: &str = "PROCESS_NO_ID";

    // Level 3: element index
    pub const NO_START_EVENT: &str = "NO_START_EVENT";
    pub const NO_END_EVENT: &str = "NO_END_EVENT";
    pub const DUPLICATE_ID: &str = "DUPLICATE_ID";
    pub const INVALID_ID_FORMAT: &str = "INVALID_ID_FORMAT";

    // Level 4: connectivity
    pub const INVALID_SOURCE_REF: &str = "INVALID_SOURCE_REF";
    pub const INVALID_TARGET_REF: &str = "INVALID_TARGET_REF";
    pub const ORPHAN_ELEMENT: &str = "ORPHAN_ELEMENT";
    pub const GATEWAY_SINGLE_OUTPUT: &str = "GATEWAY_SINGLE_OUTPUT";
    pub const MISSING_CONDITION: &str = "MISSING_CONDITION";

    // Level 5: platform configuration
    pub const SERVICE_TASK_NO_CONFIG: &str = "SERVICE_TASK_NO_CONFIG";
    pub const SERVICE_TASK_NO_AGENT: &str = "SERVICE_TASK_NO_AGENT";
    pub const AGENT_CONFIG_INCOMPLETE: &str = "AGENT_CONFIG_INCOMPLETE";
    pub const AGENT_NO_PROMPT: &str = "AGENT_NO_PROMPT";
    pub const USER_TASK_NO_ASSIGNEE: &str = "USER_TASK_NO_ASSIGNEE";
    pub const SCRIPT_TASK_NO_CONFIG: &str = "SCRIPT_TASK_NO_CONFIG";
    pub const SCRIPT_TASK_NO_FUNCTION: &str = "SCRIPT_TASK_NO_FUNCTION";
    pub const FUNCTION_CONFIG_INCOMPLETE: &str = "FUNCTION_CONFIG_INCOMPLETE";
    pub const SEND_TASK_NO_CONFIG: &str = "SEND_TASK_NO_CONFIG";
    pub const SEND_TASK_NO_EMAIL: &str = "SEND_TASK_NO_EMAIL";
    pub const CALL_ACTIVITY_NO_TARGET: &str = "CALL_ACTIVITY_NO_TARGET";
    pub const TIMER_NO_DEFINITION: &str = "TIMER_NO_DEFINITION";
}

/// The pipeline level an issue originates from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum Level {
    Load = 1,
    Basics = 2,
    Index = 3,
    Connectivity = 4,
    Rules = 5,
}

impl Level {
    pub fn number(self) -> u8 {
        self as u8
    }
}

impl From<Level> for u8 {
    fn from(level: Level) -> u8 {
        level.number()
    }
}

impl TryFrom<u8> for Level {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Level::Load),
            2 => Ok(Level::Basics),
            3 => Ok(Level::Index),
            4 => Ok(Level::Connectivity),
            5 => Ok(Level::Rules),
            other => Err(format!("validation level must be 1-5, got {}", other)),
        }
    }
}

impl std::fmt::Display for Level {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "L{}", self.number())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
    Info,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Error => write!(f, "ERROR"),
            Severity::Warning => write!(f, "WARNING"),
            Severity::Info => write!(f, "INFO"),
        }
    }
}

/// A single finding. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationIssue {
    pub level: Level,
    pub severity: Severity,
    pub code: String,
    pub message: String,
    pub element_id: Option<String>,
    pub element_type: Option<String>,
    pub suggestion: Option<String>,
}

impl std::fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "[{}:{}:{}] {}",
            self.level, self.severity, self.code, self.message
        )?;
        if let Some(id) = &self.element_id {
            write!(f, " (element '{}')", id)?;
        }
        Ok(())
    }
}

impl ValidationIssue {
    fn new(level: Level, severity: Severity, code: &str, message: impl Into<String>) -> Self {
        ValidationIssue {
            level,
            severity,
            code: code.into(),
            message: message.into(),
            element_id: None,
            element_type: None,
            suggestion: None,
        }
    }

    pub fn error(level: Level, code: &str, message: impl Into<String>) -> Self {
        Self::new(level, Severity::Error, code, message)
    }

    pub fn warning(level: Level, code: &str, message: impl Into<String>) -> Self {
        Self::new(level, Severity::Warning, code, message)
    }

    pub fn info(level: Level, code: &str, message: impl Into<String>) -> Self {
        Self::new(level, Severity::Info, code, message)
    }

    pub fn with_element(mut self, id: impl Into<String>, element_type: impl Into<String>) -> Self {
        self.element_id = Some(id.into());
        self.element_type = Some(element_type.into());
        self
    }

    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

/// Failure to turn a path or a string into a navigable document.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("file not found: {path}")]
    NotFound { path: String },

    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("XML parse error: {0}")]
    Parse(#[from] roxmltree::Error),
}

impl LoadError {
    pub fn code(&self) -> &'static str {
        match self {
            LoadError::NotFound { .. } => codes::FILE_NOT_FOUND,
            LoadError::Io { .. } | LoadError::Parse(_) => codes::XML_PARSE_ERROR,
        }
    }

    pub fn into_issue(self) -> ValidationIssue {
        let suggestion = match &self {
            LoadError::NotFound { .. } => "Check the path to the BPMN file",
            LoadError::Io { .. } => "Check that the file is readable and UTF-8 encoded",
            LoadError::Parse(_) => "Fix the XML syntax before validating the process",
        };
        ValidationIssue::error(Level::Load, self.code(), self.to_string())
            .with_suggestion(suggestion)
    }
}
