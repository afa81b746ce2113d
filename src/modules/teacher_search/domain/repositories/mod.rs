pub mod teacher_repository;

pub use teacher_repository::TeacherRepository;
