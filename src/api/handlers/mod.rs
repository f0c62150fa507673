pub mod course;
pub mod health;
pub mod schedule;
pub mod session;
