//! Error types for SRL.

use thiserror::Error;

/// Specific failure kind reported by the regex engine collaborator.
///
/// The kinds follow the PCRE family of error codes so that callers can tell
/// "the pattern was rejected" apart from "the engine hit a runtime limit".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineErrorKind {
    /// The engine refused to compile the pattern.
    InvalidPattern,
    /// Internal engine error.
    Internal,
    /// Backtrack limit exhausted.
    BacktrackLimit,
    /// Recursion limit exhausted.
    RecursionLimit,
    /// Malformed encoded input data.
    BadEncoding,
    /// Offset did not point at a valid code point.
    BadOffset,
    /// JIT stack space exhausted.
    JitStack,
    /// Any other engine failure.
    Unknown,
}

#[derive(Debug, Error)]
pub enum SrlError {
    /// The query text is structurally broken (parse time).
    #[error("structural error: {0}")]
    Structural(String),

    /// The query contains an unknown command or invalid parameters (resolution time).
    #[error("syntax error: {0}")]
    Syntax(String),

    /// An operation was requested at a position where it makes no sense (assembly time).
    #[error("implementation error: {0}")]
    Implementation(String),

    /// The assembler was driven into an invalid state, e.g. by raw injection.
    #[error("builder error: {0}")]
    Builder(String),

    /// The regex engine rejected the compiled pattern or failed while matching.
    #[error("engine error ({kind:?}): {message}")]
    Engine {
        kind: EngineErrorKind,
        message: String,
    },
}

impl SrlError {
    /// Create a structural (parse time) error.
    pub fn structural(message: impl Into<String>) -> Self {
        Self::Structural(message.into())
    }

    /// Create a syntax (resolution time) error.
    pub fn syntax(message: impl Into<String>) -> Self {
        Self::Syntax(message.into())
    }

    /// Create an implementation (assembly time) error.
    pub fn implementation(message: impl Into<String>) -> Self {
        Self::Implementation(message.into())
    }

    /// Create a builder error.
    pub fn builder(message: impl Into<String>) -> Self {
        Self::Builder(message.into())
    }

    /// Create an engine error of the given kind.
    pub fn engine(kind: EngineErrorKind, message: impl Into<String>) -> Self {
        Self::Engine {
            kind,
            message: message.into(),
        }
    }

    /// The engine failure kind, if this is an engine error.
    pub fn engine_kind(&self) -> Option<EngineErrorKind> {
        match self {
            Self::Engine { kind, .. } => Some(*kind),
            _ => None,
        }
    }
}

/// Result type alias for SRL operations.
pub type SrlResult<T> = Result<T, SrlError>;
