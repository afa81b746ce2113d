pub mod application;
pub mod domain;
pub mod infrastructure;

// Re-exports for easy external access
pub use application::access_guard::AccessGuard;
pub use domain::{Caller, SessionRepository, UserRole};
pub use infrastructure::SessionRepositoryImpl;
