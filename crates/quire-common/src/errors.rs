use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),
}

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("layout store io error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to serialize layout: {0}")]
    Serialize(String),

    #[error("invalid project path: {0}")]
    Path(String),
}

#[derive(Debug, thiserror::Error)]
pub enum PlatformError {
    #[error("failed to create window: {0}")]
    WindowCreate(String),

    #[error("window {0} no longer exists")]
    WindowGone(u64),

    #[error("window manager error: {0}")]
    WindowManagerError(String),

    #[error("not supported: {0}")]
    NotSupported(String),
}

#[derive(Debug, thiserror::Error)]
pub enum BridgeError {
    /// The host process cannot be reached (channel closed, process gone).
    #[error("bridge unavailable: {0}")]
    Unavailable(String),

    /// The host received the request but failed to carry it out.
    #[error("host error: {0}")]
    Remote(String),

    /// A message could not be decoded or had an unexpected shape.
    #[error("bridge protocol error: {0}")]
    Protocol(String),
}

impl From<StoreError> for BridgeError {
    fn from(err: StoreError) -> Self {
        BridgeError::Remote(err.to_string())
    }
}

impl From<PlatformError> for BridgeError {
    fn from(err: PlatformError) -> Self {
        BridgeError::Remote(err.to_string())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum QuireError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Platform(#[from] PlatformError),

    #[error(transparent)]
    Bridge(#[from] BridgeError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_display() {
        let err = ConfigError::FileNotFound(PathBuf::from("/tmp/missing.toml"));
        assert_eq!(err.to_string(), "config file not found: /tmp/missing.toml");

        let err = ConfigError::ValidationError("persistence.debounce_ms".into());
        assert_eq!(
            err.to_string(),
            "config validation error: persistence.debounce_ms"
        );
    }

    #[test]
    fn store_error_display_includes_path() {
        let err = StoreError::Io {
            path: PathBuf::from("/work/novel/.quire/layout.json"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        let text = err.to_string();
        assert!(text.contains("/work/novel/.quire/layout.json"));
        assert!(text.contains("denied"));
    }

    #[test]
    fn bridge_error_from_store_is_remote() {
        let err: BridgeError = StoreError::Serialize("bad float".into()).into();
        assert!(matches!(err, BridgeError::Remote(_)));
        assert!(err.to_string().contains("bad float"));
    }

    #[test]
    fn bridge_error_from_platform_is_remote() {
        let err: BridgeError = PlatformError::WindowGone(7).into();
        assert!(matches!(err, BridgeError::Remote(_)));
        assert!(err.to_string().contains("window 7"));
    }

    #[test]
    fn quire_error_conversions() {
        let err: QuireError = BridgeError::Unavailable("host exited".into()).into();
        assert!(matches!(err, QuireError::Bridge(_)));
        assert_eq!(err.to_string(), "bridge unavailable: host exited");

        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: QuireError = io_err.into();
        assert!(matches!(err, QuireError::Io(_)));

        let err = QuireError::Other("something went wrong".into());
        assert_eq!(err.to_string(), "something went wrong");
    }
}
