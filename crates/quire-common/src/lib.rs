pub mod errors;
pub mod id;
pub mod types;

pub use errors::{BridgeError, ConfigError, PlatformError, QuireError, StoreError};
pub use id::new_correlation_id;
pub use types::{
    FloatingPaneDescriptor, LayoutPaneId, PersistedLayoutPayload, Rect, LAYOUT_SCHEMA_VERSION,
};

pub type Result<T> = std::result::Result<T, QuireError>;
