pub mod colors;
pub mod course_service;
pub mod date_range;
pub mod flatten;
pub mod grouping;
pub mod schedule;
pub mod selection;
