use thiserror::Error;

/// Unified error type for the entire finwise-core library.
/// Every fallible public function returns `Result<T, CoreError>`.
#[derive(Debug, Error)]
pub enum CoreError {
    // ── Input / Validation ──────────────────────────────────────────
    #[error("Validation failed: {0}")]
    ValidationError(String),

    #[error("Missing required field: {0}")]
    MissingField(String),

    #[error("Invalid number for {field}: '{value}'")]
    InvalidNumber { field: String, value: String },

    // ── Session ─────────────────────────────────────────────────────
    #[error("{0}")]
    InvalidCredentials(String),

    #[error("Not logged in: please log in first")]
    NotAuthenticated,

    // ── Expense Log ─────────────────────────────────────────────────
    #[error("Expense not found: {0}")]
    ExpenseNotFound(String),

    // ── Configuration ───────────────────────────────────────────────
    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Deserialization error: {0}")]
    Deserialization(String),

    #[error("File I/O error: {0}")]
    FileIO(String),
}

impl CoreError {
    pub(crate) fn invalid_number(field: &str, value: &str) -> Self {
        CoreError::InvalidNumber {
            field: field.to_string(),
            value: value.to_string(),
        }
    }
}

// ── Conversion helpers (From impls) ─────────────────────────────────

impl From<std::io::Error> for CoreError {
    fn from(e: std::io::Error) -> Self {
        CoreError::FileIO(e.to_string())
    }
}

/// `?` on a serde_json error means a parse failure. Serializers map their
/// errors to `Serialization` explicitly.
impl From<serde_json::Error> for CoreError {
    fn from(e: serde_json::Error) -> Self {
        CoreError::Deserialization(e.to_string())
    }
}
