//! Error types and Result aliases for LaunchTerm

use std::path::PathBuf;

/// Result type alias for LaunchTerm operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for LaunchTerm
///
/// Command handlers never hand these to the interpreter's caller. They are
/// logged and folded into an error [`CommandResult`](crate::CommandResult).
#[derive(Debug, thiserror::Error)]
pub enum Error {
    // === Launch errors ===
    /// Failed to start an external program
    #[error("Failed to spawn '{program}': {reason}")]
    SpawnFailed { program: String, reason: String },

    /// The platform opener rejected a URI or path
    #[error("Failed to open '{target}': {reason}")]
    OpenFailed { target: String, reason: String },

    /// URI is syntactically unusable
    #[error("Invalid URI '{uri}': {reason}")]
    InvalidUri { uri: String, reason: String },

    /// Executable or document path does not exist
    #[error("Path '{}' does not exist", path.display())]
    PathNotFound { path: PathBuf },

    /// No desktop opener is known for this platform
    #[error("Desktop integration is not supported on {platform}")]
    UnsupportedPlatform { platform: String },

    // === Configuration errors ===
    /// Failed to load configuration file
    #[error("Failed to load config from '{}': {reason}", path.display())]
    ConfigLoadFailed { path: PathBuf, reason: String },

    /// Failed to parse configuration
    #[error("Failed to parse {format} config: {reason}")]
    ConfigParseFailed { format: String, reason: String },

    /// Failed to serialize configuration
    #[error("Failed to serialize config as {format}: {reason}")]
    ConfigSerializationFailed { format: String, reason: String },

    /// Configuration validation failed
    #[error("Configuration validation failed for '{field}': {reason}")]
    ConfigValidationFailed { field: String, reason: String },

    // === I/O and serialization errors ===
    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON errors
    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML parsing errors
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),
}
