//! Canonical error facility for FleetDNS
//!
//! Provides a structured error type with a stable kind taxonomy. Each kind
//! maps to a stable error code usable for programmatic handling, testing,
//! and operator-facing output.

/// Result type alias using FdError
pub type Result<T> = std::result::Result<T, FdError>;

/// Canonical error kind taxonomy
///
/// Stable classification of all errors produced by the publishing subsystem.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FdErrorKind {
    // Structural/Validation
    InvalidInput,
    NotFound,
    /// A blobstore id recorded in the ledger has no backing artifact
    MissingBlob,

    // Integration/IO
    Io,
    Serialization,
    Persistence,
    /// Blob store create/fetch failed for an external reason
    ExternalService,
    Concurrency,

    // Internal
    Internal,
}

impl FdErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            FdErrorKind::InvalidInput => "ERR_INVALID_INPUT",
            FdErrorKind::NotFound => "ERR_NOT_FOUND",
            FdErrorKind::MissingBlob => "ERR_MISSING_BLOB",
            FdErrorKind::Io => "ERR_IO",
            FdErrorKind::Serialization => "ERR_SERIALIZATION",
            FdErrorKind::Persistence => "ERR_PERSISTENCE",
            FdErrorKind::ExternalService => "ERR_EXTERNAL_SERVICE",
            FdErrorKind::Concurrency => "ERR_CONCURRENCY",
            FdErrorKind::Internal => "ERR_INTERNAL",
        }
    }
}

/// Canonical structured error type
///
/// Carries a kind for classification plus operation and entity context for
/// debugging. Built incrementally via the `with_*` methods.
#[derive(Debug, Clone)]
pub struct FdError {
    kind: FdErrorKind,
    op: Option<String>,
    entity_id: Option<String>,
    message: String,
}

impl FdError {
    /// Create a new error with the specified kind
    pub fn new(kind: FdErrorKind) -> Self {
        Self {
            kind,
            op: None,
            entity_id: None,
            message: String::new(),
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add entity ID context (blobstore id, digest, row id, ...)
    pub fn with_entity_id(mut self, id: impl Into<String>) -> Self {
        self.entity_id = Some(id.into());
        self
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Get the error kind
    pub fn kind(&self) -> FdErrorKind {
        self.kind
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    /// Get the operation context, if any
    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    /// Get the entity ID context, if any
    pub fn entity_id(&self) -> Option<&str> {
        self.entity_id.as_deref()
    }

    /// Get the error message
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for FdError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.code())?;
        if let Some(op) = &self.op {
            write!(f, " in operation '{}'", op)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        if let Some(entity_id) = &self.entity_id {
            write!(f, " (entity_id: {})", entity_id)?;
        }
        Ok(())
    }
}

impl std::error::Error for FdError {}

/// Conversion from serde_json::Error to FdError
impl From<serde_json::Error> for FdError {
    fn from(err: serde_json::Error) -> Self {
        FdError::new(FdErrorKind::Serialization).with_message(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kind_codes() {
        let cases = [
            (FdErrorKind::NotFound, "ERR_NOT_FOUND"),
            (FdErrorKind::MissingBlob, "ERR_MISSING_BLOB"),
            (FdErrorKind::Persistence, "ERR_PERSISTENCE"),
            (FdErrorKind::ExternalService, "ERR_EXTERNAL_SERVICE"),
            (FdErrorKind::Concurrency, "ERR_CONCURRENCY"),
        ];
        for (kind, expected_code) in cases {
            assert_eq!(kind.code(), expected_code, "Wrong code for {:?}", kind);
        }
    }

    #[test]
    fn test_display_includes_op_and_entity() {
        let err = FdError::new(FdErrorKind::MissingBlob)
            .with_op("fetch_blob")
            .with_entity_id("blob-1")
            .with_message("artifact not found");
        let rendered = err.to_string();
        assert!(rendered.contains("ERR_MISSING_BLOB"));
        assert!(rendered.contains("fetch_blob"));
        assert!(rendered.contains("blob-1"));
    }

    #[test]
    fn test_context_none_by_default() {
        let err = FdError::new(FdErrorKind::Internal);
        assert!(err.op().is_none());
        assert!(err.entity_id().is_none());
        assert!(err.message().is_empty());
    }
}
