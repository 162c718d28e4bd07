use thiserror::Error;

/// Result type alias using KpgError
pub type Result<T> = std::result::Result<T, KpgError>;

// ========== Error Facility ==========

/// How the orchestrating caller must treat an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Bad configuration (synonym file, config file). Aborts before any check runs.
    FatalConfiguration,
    /// Bad or missing input document. Aborts before any check runs.
    FatalInput,
    /// Data-quality problem that is surfaced inline and never blocks later checks.
    DataQuality,
    /// A bug or an environment failure inside the tool itself.
    Internal,
}

/// Canonical error kind taxonomy
///
/// Each kind maps to a stable error code usable for programmatic handling,
/// tests and exit diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    // Configuration
    /// A synonym line cannot be split into double-quoted tokens
    InvalidSynonymLine,
    /// A channel name belongs to more than one synonym group
    AmbiguousSynonym,
    /// The TOML configuration is unreadable or has unknown keys
    InvalidConfig,

    // Input
    /// The export document is not a supported variant
    UnsupportedDocument,
    /// The primary input argument is absent, unreadable or has the wrong extension
    InvalidInputFile,
    /// A channel entry lacks one of the eleven required fields
    MissingField,
    Io,

    // Internal
    Serialization,
    Internal,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::InvalidSynonymLine => "ERR_INVALID_SYNONYM_LINE",
            ExErrorKind::AmbiguousSynonym => "ERR_AMBIGUOUS_SYNONYM",
            ExErrorKind::InvalidConfig => "ERR_INVALID_CONFIG",
            ExErrorKind::UnsupportedDocument => "ERR_UNSUPPORTED_DOCUMENT",
            ExErrorKind::InvalidInputFile => "ERR_INVALID_INPUT_FILE",
            ExErrorKind::MissingField => "ERR_MISSING_FIELD",
            ExErrorKind::Io => "ERR_IO",
            ExErrorKind::Serialization => "ERR_SERIALIZATION",
            ExErrorKind::Internal => "ERR_INTERNAL",
        }
    }

    /// Get the handling category for this kind
    pub fn category(&self) -> ErrorCategory {
        match self {
            ExErrorKind::InvalidSynonymLine | ExErrorKind::InvalidConfig => {
                ErrorCategory::FatalConfiguration
            }
            ExErrorKind::AmbiguousSynonym => ErrorCategory::DataQuality,
            ExErrorKind::UnsupportedDocument
            | ExErrorKind::InvalidInputFile
            | ExErrorKind::MissingField
            | ExErrorKind::Io => ErrorCategory::FatalInput,
            ExErrorKind::Serialization | ExErrorKind::Internal => ErrorCategory::Internal,
        }
    }
}

/// Canonical structured error type
///
/// Carries a classification kind plus optional context for diagnostics.
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    entity: Option<String>,
    line: Option<usize>,
    message: String,
}

impl ExError {
    /// Create a new error with the specified kind
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            entity: None,
            line: None,
            message: String::new(),
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add entity context (a file path, a field name or a channel name)
    pub fn with_entity(mut self, entity: impl Into<String>) -> Self {
        self.entity = Some(entity.into());
        self
    }

    /// Add line or entry number context
    pub fn with_line(mut self, line: usize) -> Self {
        self.line = Some(line);
        self
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    pub fn kind(&self) -> ExErrorKind {
        self.kind
    }

    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    pub fn category(&self) -> ErrorCategory {
        self.kind.category()
    }

    /// True unless the error is a data-quality note
    pub fn is_fatal(&self) -> bool {
        self.category() != ErrorCategory::DataQuality
    }

    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    pub fn entity(&self) -> Option<&str> {
        self.entity.as_deref()
    }

    pub fn line(&self) -> Option<usize> {
        self.line
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for ExError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.code())?;
        if let Some(op) = &self.op {
            write!(f, " in operation '{}'", op)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        if let Some(entity) = &self.entity {
            write!(f, " (entity: {})", entity)?;
        }
        if let Some(line) = self.line {
            write!(f, " (line: {})", line)?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {}

// ========== End Error Facility ==========

/// Error taxonomy for kpgcheck operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum KpgError {
    // ===== Configuration Errors =====
    /// Synonym line is not a sequence of double-quoted names
    #[error("Malformed synonym line {line_number}: {reason}: {line}")]
    InvalidSynonymLine {
        line_number: usize,
        line: String,
        reason: String,
    },

    /// A name is listed in several synonym groups (only raised under the reject policy)
    #[error("Channel name \"{name}\" appears in synonym groups on lines {lines:?}")]
    AmbiguousSynonym { name: String, lines: Vec<usize> },

    /// Configuration file is unreadable or invalid
    #[error("Invalid configuration: {reason}")]
    InvalidConfig { reason: String },

    // ===== Input Errors =====
    /// Export document is not a supported variant
    #[error("Unsupported document: {reason}")]
    UnsupportedDocument { reason: String },

    /// Primary input argument is missing or unusable
    #[error("Invalid input file {path}: {reason}")]
    InvalidInputFile { path: String, reason: String },

    /// Channel entry lacks a required field
    #[error("Channel entry {entry} is missing required field '{field}'")]
    MissingField { field: String, entry: usize },

    /// Underlying read or write failure
    #[error("I/O error on {path}: {message}")]
    Io { path: String, message: String },

    // ===== Internal Errors =====
    #[error("Serialization error: {message}")]
    Serialization { message: String },
}

/// Conversion from KpgError to ExError
impl From<KpgError> for ExError {
    fn from(err: KpgError) -> Self {
        match err {
            KpgError::InvalidSynonymLine {
                line_number,
                line,
                reason,
            } => ExError::new(ExErrorKind::InvalidSynonymLine)
                .with_op("load_synonyms")
                .with_line(line_number)
                .with_message(format!("{}: {}", reason, line)),

            KpgError::AmbiguousSynonym { name, lines } => {
                ExError::new(ExErrorKind::AmbiguousSynonym)
                    .with_op("load_synonyms")
                    .with_entity(name)
                    .with_message(format!("name appears in synonym groups on lines {:?}", lines))
            }

            KpgError::InvalidConfig { reason } => ExError::new(ExErrorKind::InvalidConfig)
                .with_op("load_config")
                .with_message(reason),

            KpgError::UnsupportedDocument { reason } => {
                ExError::new(ExErrorKind::UnsupportedDocument)
                    .with_op("extract_records")
                    .with_message(reason)
            }

            KpgError::InvalidInputFile { path, reason } => {
                ExError::new(ExErrorKind::InvalidInputFile)
                    .with_entity(path)
                    .with_message(reason)
            }

            KpgError::MissingField { field, entry } => ExError::new(ExErrorKind::MissingField)
                .with_op("build_record")
                .with_entity(field)
                .with_line(entry)
                .with_message("required channel field is absent"),

            KpgError::Io { path, message } => ExError::new(ExErrorKind::Io)
                .with_entity(path)
                .with_message(message),

            KpgError::Serialization { message } => {
                ExError::new(ExErrorKind::Serialization).with_message(message)
            }
        }
    }
}

/// Conversion from serde_json::Error to KpgError
impl From<serde_json::Error> for KpgError {
    fn from(err: serde_json::Error) -> Self {
        KpgError::Serialization {
            message: err.to_string(),
        }
    }
}
