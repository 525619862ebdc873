// src/store/mod.rs
// Repositórios em memória. Vivem só enquanto o processo corre.
pub mod activities;
pub mod attendance;
pub mod classes;
pub mod exams;
pub mod ids;
pub mod users;

pub use activities::ActivityRepository;
pub use attendance::AttendanceRepository;
pub use classes::ClassRepository;
pub use exams::ExamRepository;
pub use ids::IdAllocator;
pub use users::UserRepository;
