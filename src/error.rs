//! Error handling
//!
//! Each component of the runtime gets its own error enum rather than a single
//! catch-all, so callers can match on what actually went wrong (a bad schema
//! document is not the same failure as a dropped connection). [`OcppError`]
//! stays for message construction (builder/validator failures); everything
//! below it is new.

use derive_builder::UninitializedFieldError;
use thiserror::Error;
use validator::ValidationErrors;

#[derive(Error, Debug)]
/// Errors related to building an OCPP object
pub enum OcppError {
    #[error("Field missing from builder")]
    /// Error resultant from a missing field when building an OCPP object
    BuilderError(#[from] UninitializedFieldError),
    #[error("Struct is invalid")]
    /// Error resultant from bad field when building an OCPP object
    OcppValidationError(#[from] ValidationErrors),
}

/// Failure to validate a payload against its JSON schema.
#[derive(Error, Debug)]
pub enum ValidateError {
    #[error("payload failed schema validation: {0:?}")]
    FailToValidateJson(Vec<String>),
    #[error("no schema registered for action {0}")]
    UnknownAction(String),
    #[error("schema document is not valid JSON Schema: {0}")]
    BadSchemaDocument(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// The OCPP-J CALLERROR error codes defined by the specification. Every
/// error that can cross the wire back to the Central System collapses to
/// one of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallErrorCode {
    NotImplemented,
    NotSupported,
    InternalError,
    ProtocolError,
    SecurityError,
    FormationViolation,
    PropertyConstraintViolation,
    OccurenceConstraintViolation,
    TypeConstraintViolation,
    GenericError,
}

impl CallErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            CallErrorCode::NotImplemented => "NotImplemented",
            CallErrorCode::NotSupported => "NotSupported",
            CallErrorCode::InternalError => "InternalError",
            CallErrorCode::ProtocolError => "ProtocolError",
            CallErrorCode::SecurityError => "SecurityError",
            CallErrorCode::FormationViolation => "FormationViolation",
            CallErrorCode::PropertyConstraintViolation => "PropertyConstraintViolation",
            CallErrorCode::OccurenceConstraintViolation => "OccurenceConstraintViolation",
            CallErrorCode::TypeConstraintViolation => "TypeConstraintViolation",
            CallErrorCode::GenericError => "GenericError",
        }
    }
}

impl std::fmt::Display for CallErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors raised by the RPC transport layer (connection lifecycle, framing,
/// call/response correlation).
#[derive(Error, Debug)]
pub enum TransportError {
    #[error("not connected")]
    NotConnected,
    #[error("connection closed while call {0} was in flight")]
    ConnectionClosed(String),
    #[error("call {0} timed out")]
    Timeout(String),
    #[error("malformed OCPP-J frame: {0}")]
    Framing(String),
    #[error("websocket error: {0}")]
    WebSocket(String),
    #[error("security profile cannot be downgraded from {current} to {requested}")]
    ProfileDowngrade { current: u8, requested: u8 },
}

/// Errors raised while dispatching an inbound CALL to a registered handler.
#[derive(Error, Debug)]
pub enum DispatchError {
    #[error("action {0} is not implemented")]
    NotImplemented(String),
    #[error("action {0} is already registered")]
    AlreadyRegistered(String),
    #[error(transparent)]
    Schema(#[from] ValidateError),
    #[error("failed to decode payload: {0}")]
    Decode(String),
    #[error("handler panicked")]
    HandlerPanic,
    #[error("handler rejected the request: {1}")]
    HandlerRejected(CallErrorCode, String),
}

impl DispatchError {
    /// Maps a dispatch failure onto the OCPP-J CALLERROR code it must be
    /// reported as.
    pub fn call_error_code(&self) -> CallErrorCode {
        match self {
            DispatchError::NotImplemented(_) => CallErrorCode::NotImplemented,
            DispatchError::AlreadyRegistered(_) => CallErrorCode::InternalError,
            DispatchError::Schema(_) => CallErrorCode::FormationViolation,
            DispatchError::Decode(_) => CallErrorCode::TypeConstraintViolation,
            DispatchError::HandlerPanic => CallErrorCode::InternalError,
            DispatchError::HandlerRejected(code, _) => *code,
        }
    }
}

/// Errors from the persisted Request FIFO.
#[derive(Error, Debug)]
pub enum FifoError {
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error("fifo is empty")]
    Empty,
}

/// Errors from the configuration / device model / transaction persistence
/// stores (all backed by the same embedded database).
#[derive(Error, Debug)]
pub enum StoreError {
    #[error(transparent)]
    Sql(#[from] rusqlite::Error),
    #[error("unknown configuration key: {0}")]
    UnknownKey(String),
    #[error("configuration key {0} is read-only")]
    ReadOnly(String),
    #[error("value rejected for key {0}: {1}")]
    RejectedValue(String, String),
    #[error("failed to load stack configuration: {0}")]
    Io(String),
}

/// Errors from firmware/diagnostics maintenance workflows.
#[derive(Error, Debug)]
pub enum MaintenanceError {
    #[error(transparent)]
    Certificate(#[from] CertificateError),
    #[error("upload/download failed: {0}")]
    Transfer(String),
    #[error("unsupported URI scheme: {0}")]
    UnsupportedScheme(String),
}

/// Errors from X.509 certificate parsing/verification.
#[derive(Error, Debug)]
pub enum CertificateError {
    #[error("failed to parse certificate: {0}")]
    Parse(String),
    #[error("certificate chain does not terminate at a trusted CA")]
    UntrustedChain,
    #[error("certificate is expired or not yet valid")]
    Expired,
    #[error("signature verification failed")]
    BadSignature,
}
