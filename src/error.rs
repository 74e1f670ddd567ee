use thiserror::Error;

/// Reasons a proposed connection is refused. Refusals never change editor state.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConnectionRejected {
    #[error("Node '{0}' does not exist, so it cannot be connected")]
    UnknownEndpoint(String),

    #[error("Node '{target}' already has an incoming connection")]
    TargetOccupied { target: String },

    #[error("Handle '{handle}' on node '{source_id}' already has an outgoing connection")]
    SourceHandleOccupied { source_id: String, handle: String },
}

/// Errors returned by editor operations. Every variant leaves the graph and
/// the history exactly as they were.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EditError {
    #[error("Connection rejected: {0}")]
    Rejected(#[from] ConnectionRejected),

    #[error("Node '{0}' not found")]
    NodeNotFound(String),

    #[error("Edge '{0}' not found")]
    EdgeNotFound(String),

    #[error("Unknown preset '{0}', expected one of \"Hello World\", \"Print 1 to 10\", \"Age Check\"")]
    UnknownPreset(String),
}

/// Errors raised when parsing the string forms of the wire enums.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("Unknown node kind '{0}'")]
    UnknownNodeKind(String),

    #[error("Unknown handle '{0}', expected \"true\" or \"false\"")]
    UnknownHandle(String),

    #[error("Unknown handle position '{0}'")]
    UnknownPosition(String),
}

/// Errors that can occur while loading an `EditorConfig`.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Could not read config file '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config JSON: {0}")]
    Json(#[from] serde_json::Error),
}
