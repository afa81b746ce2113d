// Bounded contexts
pub mod access;
pub mod teacher_search;
