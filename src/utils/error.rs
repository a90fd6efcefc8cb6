use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProjectorError {
    #[error("IO error on '{path}': {source}")]
    IoError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid JSON in '{path}': {source}")]
    ParseError {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Schema error{}: {message}", record_suffix(.index))]
    SchemaError {
        index: Option<usize>,
        message: String,
    },

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Io,
    Parse,
    Schema,
    Serialization,
    Configuration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl ProjectorError {
    pub fn io(path: impl Into<String>, source: std::io::Error) -> Self {
        Self::IoError {
            path: path.into(),
            source,
        }
    }

    pub fn parse(path: impl Into<String>, source: serde_json::Error) -> Self {
        Self::ParseError {
            path: path.into(),
            source,
        }
    }

    pub fn schema(index: Option<usize>, message: impl Into<String>) -> Self {
        Self::SchemaError {
            index,
            message: message.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::IoError { .. } => ErrorCategory::Io,
            Self::ParseError { .. } => ErrorCategory::Parse,
            Self::SchemaError { .. } => ErrorCategory::Schema,
            Self::SerializationError(_) => ErrorCategory::Serialization,
            Self::ConfigError { .. }
            | Self::InvalidConfigValueError { .. }
            | Self::MissingConfigError { .. } => ErrorCategory::Configuration,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Io => ErrorSeverity::Critical,
            ErrorCategory::Serialization => ErrorSeverity::Medium,
            ErrorCategory::Parse | ErrorCategory::Schema | ErrorCategory::Configuration => {
                ErrorSeverity::High
            }
        }
    }

    /// 給終端使用者看的訊息
    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::IoError { path, source } => match source.kind() {
                std::io::ErrorKind::NotFound => format!("File not found: {}", path),
                std::io::ErrorKind::PermissionDenied => format!("Permission denied: {}", path),
                _ => format!("Could not access '{}': {}", path, source),
            },
            Self::ParseError { path, source } => format!(
                "'{}' is not valid JSON (line {}, column {})",
                path,
                source.line(),
                source.column()
            ),
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Io => "Check that the input file exists and the output location is writable",
            ErrorCategory::Parse => "Fix the JSON syntax of the input file",
            ErrorCategory::Schema => {
                "Make sure the input is an array of objects that all carry the projected fields"
            }
            ErrorCategory::Serialization => "Inspect the input values for content JSON cannot encode",
            ErrorCategory::Configuration => "Review the command line flags or the config file",
        }
    }

    /// 依嚴重程度對應的行程結束碼
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }
}

fn record_suffix(index: &Option<usize>) -> String {
    index.map(|i| format!(" at record {}", i)).unwrap_or_default()
}

pub type Result<T> = std::result::Result<T, ProjectorError>;
