use axum::{Router, routing::get};
use tower_http::trace::TraceLayer;

use crate::db::{InstructorsStorage, SqlitePool, StudentsStorage};
use crate::handlers::{instructors, students};

/// Shared per-process state. Cloning is cheap; both storages share one pool.
#[derive(Clone)]
pub struct ClassroomState {
    pub instructors: InstructorsStorage,
    pub students: StudentsStorage,
}

impl ClassroomState {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            instructors: InstructorsStorage::new(pool.clone()),
            students: StudentsStorage::new(pool),
        }
    }
}

pub fn classroom_router(state: ClassroomState) -> Router {
    Router::new()
        .route(
            "/instructors/",
            get(instructors::list_instructors).post(instructors::create_instructor),
        )
        .route(
            "/instructors/{id}",
            get(instructors::get_instructor)
                .put(instructors::update_instructor)
                .delete(instructors::delete_instructor),
        )
        .route(
            "/instructors/{id}/students/",
            get(instructors::list_students_by_instructor),
        )
        .route(
            "/students/",
            get(students::list_students).post(students::create_student),
        )
        .route(
            "/students/{id}",
            get(students::get_student)
                .put(students::update_student)
                .delete(students::delete_student),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
