pub mod class;
pub mod course;
pub mod enrollment;
pub mod period;
pub mod schedule;
