//! Error types and exit codes for routeviz
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args)
//! - 3: Graph error (unknown node, duplicate name, invalid edge, etc.)

use thiserror::Error;

/// Exit codes per routeviz convention
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Graph error - unknown node, invalid edge (3)
    Graph = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur during routeviz operations
#[derive(Error, Debug)]
pub enum RoutevizError {
    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human or json)")]
    UnknownFormat(String),

    #[error("{0}")]
    UsageError(String),

    // Graph errors (exit code 3)
    #[error("node already exists: {name}")]
    DuplicateNode { name: String },

    #[error("node not found: {name}")]
    NodeNotFound { name: String },

    #[error("self-loops are not allowed: {name}")]
    SelfLoop { name: String },

    #[error("edge weight must be positive, got {weight}")]
    NonPositiveWeight { weight: i64 },

    #[error("edge not found: {from} to {to}")]
    EdgeNotFound { from: String, to: String },

    #[error("invalid source or destination node: {source_node} to {destination}")]
    InvalidEndpoints {
        source_node: String,
        destination: String,
    },

    #[error("no deletion to undo")]
    NothingToUndo,

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

impl RoutevizError {
    /// Create an error for a node name that is not in the graph
    pub fn node_not_found(name: impl Into<String>) -> Self {
        RoutevizError::NodeNotFound { name: name.into() }
    }

    /// Create an error for an edge that is not in the graph
    pub fn edge_not_found(from: impl Into<String>, to: impl Into<String>) -> Self {
        RoutevizError::EdgeNotFound {
            from: from.into(),
            to: to.into(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            // Usage errors
            RoutevizError::UnknownFormat(_) | RoutevizError::UsageError(_) => ExitCode::Usage,

            // Graph errors
            RoutevizError::DuplicateNode { .. }
            | RoutevizError::NodeNotFound { .. }
            | RoutevizError::SelfLoop { .. }
            | RoutevizError::NonPositiveWeight { .. }
            | RoutevizError::EdgeNotFound { .. }
            | RoutevizError::InvalidEndpoints { .. }
            | RoutevizError::NothingToUndo => ExitCode::Graph,

            // Generic failures
            RoutevizError::Io(_) | RoutevizError::Json(_) | RoutevizError::Other(_) => {
                ExitCode::Failure
            }
        }
    }

    /// Get the error type identifier
    fn error_type(&self) -> &'static str {
        match self {
            RoutevizError::UnknownFormat(_) => "unknown_format",
            RoutevizError::UsageError(_) => "usage_error",
            RoutevizError::DuplicateNode { .. } => "duplicate_node",
            RoutevizError::NodeNotFound { .. } => "node_not_found",
            RoutevizError::SelfLoop { .. } => "self_loop",
            RoutevizError::NonPositiveWeight { .. } => "non_positive_weight",
            RoutevizError::EdgeNotFound { .. } => "edge_not_found",
            RoutevizError::InvalidEndpoints { .. } => "invalid_endpoints",
            RoutevizError::NothingToUndo => "nothing_to_undo",
            RoutevizError::Io(_) => "io_error",
            RoutevizError::Json(_) => "json_error",
            RoutevizError::Other(_) => "other",
        }
    }

    /// Convert error to JSON representation for structured error output
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "code": self.exit_code() as i32,
                "type": self.error_type(),
                "message": self.to_string(),
            }
        })
    }
}

/// Result type alias for routeviz operations
pub type Result<T> = std::result::Result<T, RoutevizError>;
