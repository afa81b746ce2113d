pub mod teacher_repository_impl;

pub use teacher_repository_impl::TeacherRepositoryImpl;
