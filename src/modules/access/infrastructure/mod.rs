pub mod models;
pub mod session_repository_impl;

pub use session_repository_impl::SessionRepositoryImpl;
