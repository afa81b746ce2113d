pub mod caller;
pub mod session_repository;

pub use caller::{Caller, UserRole};
pub use session_repository::SessionRepository;
