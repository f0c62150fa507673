pub mod course;
pub mod schedule;
pub mod session;
