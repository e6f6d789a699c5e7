use crate::db::models::{Instructor, InstructorCreate};
use crate::db::sqlite::SqlitePool;
use crate::error::ApiError;

#[derive(Clone)]
pub struct InstructorsStorage {
    pool: SqlitePool,
}

impl InstructorsStorage {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert a new row and return it with the generated id.
    pub async fn create(&self, input: InstructorCreate) -> Result<Instructor, ApiError> {
        let row = sqlx::query_as::<_, Instructor>(
            r#"INSERT INTO instructors (name, age, class_assignment, image)
               VALUES (?, ?, ?, ?)
               RETURNING id, name, age, class_assignment, image"#,
        )
        .bind(input.name)
        .bind(input.age)
        .bind(input.class_assignment)
        .bind(input.image)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    pub async fn list(&self, skip: u32, limit: u32) -> Result<Vec<Instructor>, ApiError> {
        let rows = sqlx::query_as::<_, Instructor>(
            r#"SELECT id, name, age, class_assignment, image
               FROM instructors ORDER BY id LIMIT ? OFFSET ?"#,
        )
        .bind(i64::from(limit))
        .bind(i64::from(skip))
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    pub async fn get_by_id(&self, id: i64) -> Result<Option<Instructor>, ApiError> {
        let row = sqlx::query_as::<_, Instructor>(
            r#"SELECT id, name, age, class_assignment, image
               FROM instructors WHERE id = ?"#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    /// Replace every field except id. `None` when no row matches.
    pub async fn update(
        &self,
        id: i64,
        input: InstructorCreate,
    ) -> Result<Option<Instructor>, ApiError> {
        let row = sqlx::query_as::<_, Instructor>(
            r#"UPDATE instructors SET
                name = ?,
                age = ?,
                class_assignment = ?,
                image = ?
              WHERE id = ?
              RETURNING id, name, age, class_assignment, image"#,
        )
        .bind(input.name)
        .bind(input.age)
        .bind(input.class_assignment)
        .bind(input.image)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    /// Returns whether a row was removed. Dependent students go with it.
    pub async fn delete(&self, id: i64) -> Result<bool, ApiError> {
        let result = sqlx::query("DELETE FROM instructors WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
