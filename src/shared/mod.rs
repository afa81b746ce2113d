// Shared kernel used by every bounded context

pub mod application; // Envelope, pagination, query trait
pub mod config; // Environment configuration
pub mod errors; // Shared error types
pub mod infrastructure; // Database pool and health
pub mod utils; // Logging and validation

// Re-exports for convenience
pub use config::{AppConfig, PaginationConfig};
pub use infrastructure::database::Database;
pub use infrastructure::database_state::{
    ConnectionSettings, DatabaseHealthMonitor, DatabaseState, SharedDatabaseState,
};
