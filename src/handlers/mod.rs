pub mod instructors;
pub mod students;
