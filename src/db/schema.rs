//! SQL DDL for the classroom tables (SQLite).

/// SQLite schema with:
/// - `id` INTEGER PRIMARY KEY AUTOINCREMENT on both tables
/// - `image` as a nullable BLOB
/// - `students.instructor_id` referencing `instructors(id)`, cascading on delete
/// - indexes on `name` and on the foreign key used by per-instructor listing
pub const SQLITE_INIT: &str = r#"
CREATE TABLE IF NOT EXISTS instructors (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    age INTEGER NOT NULL,
    class_assignment TEXT NOT NULL,
    image BLOB NULL
);

CREATE INDEX IF NOT EXISTS idx_instructors_name ON instructors(name);

CREATE TABLE IF NOT EXISTS students (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    age INTEGER NOT NULL,
    image BLOB NULL,
    instructor_id INTEGER NOT NULL REFERENCES instructors(id) ON DELETE CASCADE
);

CREATE INDEX IF NOT EXISTS idx_students_name ON students(name);
CREATE INDEX IF NOT EXISTS idx_students_instructor_id ON students(instructor_id);
"#;
