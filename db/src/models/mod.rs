pub mod class;
pub mod course;
pub mod report;
pub mod user;
