//! Database module: entity records, schema and the SQLite persistence gateway.
//!
//! Layout:
//! - `models.rs`: input/output records for each entity
//! - `schema.rs`: SQL DDL applied at startup
//! - `sqlite.rs`: pool construction and schema bootstrap
//! - `instructors.rs` / `students.rs`: per-entity storage

pub mod instructors;
pub mod models;
pub mod schema;
pub mod sqlite;
pub mod students;

pub use instructors::InstructorsStorage;
pub use models::{Instructor, InstructorCreate, Student, StudentCreate};
pub use schema::SQLITE_INIT;
pub use sqlite::{SqlitePool, connect, init_schema};
pub use students::StudentsStorage;
