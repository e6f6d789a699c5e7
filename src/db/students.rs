use crate::db::models::{Student, StudentCreate};
use crate::db::sqlite::SqlitePool;
use crate::error::ApiError;
use sqlx::Error as SqlxError;

#[derive(Clone)]
pub struct StudentsStorage {
    pool: SqlitePool,
}

impl StudentsStorage {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert a new row and return it with the generated id.
    pub async fn create(&self, input: StudentCreate) -> Result<Student, ApiError> {
        let instructor_id = input.instructor_id;
        sqlx::query_as::<_, Student>(
            r#"INSERT INTO students (name, age, image, instructor_id)
               VALUES (?, ?, ?, ?)
               RETURNING id, name, age, image, instructor_id"#,
        )
        .bind(input.name)
        .bind(input.age)
        .bind(input.image)
        .bind(instructor_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_reference_error(e, instructor_id))
    }

    pub async fn list(&self, skip: u32, limit: u32) -> Result<Vec<Student>, ApiError> {
        let rows = sqlx::query_as::<_, Student>(
            r#"SELECT id, name, age, image, instructor_id
               FROM students ORDER BY id LIMIT ? OFFSET ?"#,
        )
        .bind(i64::from(limit))
        .bind(i64::from(skip))
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    pub async fn get_by_id(&self, id: i64) -> Result<Option<Student>, ApiError> {
        let row = sqlx::query_as::<_, Student>(
            r#"SELECT id, name, age, image, instructor_id
               FROM students WHERE id = ?"#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    /// Replace every field except id. `None` when no row matches.
    pub async fn update(&self, id: i64, input: StudentCreate) -> Result<Option<Student>, ApiError> {
        let instructor_id = input.instructor_id;
        sqlx::query_as::<_, Student>(
            r#"UPDATE students SET
                name = ?,
                age = ?,
                image = ?,
                instructor_id = ?
              WHERE id = ?
              RETURNING id, name, age, image, instructor_id"#,
        )
        .bind(input.name)
        .bind(input.age)
        .bind(input.image)
        .bind(instructor_id)
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| map_reference_error(e, instructor_id))
    }

    pub async fn delete(&self, id: i64) -> Result<bool, ApiError> {
        let result = sqlx::query("DELETE FROM students WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    pub async fn list_by_instructor(&self, instructor_id: i64) -> Result<Vec<Student>, ApiError> {
        let rows = sqlx::query_as::<_, Student>(
            r#"SELECT id, name, age, image, instructor_id
               FROM students WHERE instructor_id = ? ORDER BY id"#,
        )
        .bind(instructor_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }
}

fn map_reference_error(e: SqlxError, instructor_id: i64) -> ApiError {
    match &e {
        SqlxError::Database(db_err) if db_err.is_foreign_key_violation() => {
            ApiError::UnknownInstructor(instructor_id)
        }
        _ => ApiError::DatabaseError(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::instructors::InstructorsStorage;
    use crate::db::models::InstructorCreate;
    use crate::db::sqlite::testing::TempDb;

    async fn seed_instructor(db: &TempDb, name: &str) -> i64 {
        InstructorsStorage::new(db.pool.clone())
            .create(InstructorCreate {
                name: name.to_string(),
                age: 45,
                class_assignment: "History".to_string(),
                image: None,
            })
            .await
            .unwrap()
            .id
    }

    fn student(name: &str, instructor_id: i64) -> StudentCreate {
        StudentCreate {
            name: name.to_string(),
            age: 10,
            image: None,
            instructor_id,
        }
    }

    #[tokio::test]
    async fn list_by_instructor_returns_exactly_matching_students() {
        let db = TempDb::new().await;
        let storage = StudentsStorage::new(db.pool.clone());
        let a = seed_instructor(&db, "A").await;
        let b = seed_instructor(&db, "B").await;

        let s1 = storage.create(student("s1", a)).await.unwrap();
        storage.create(student("s2", b)).await.unwrap();
        let s3 = storage.create(student("s3", a)).await.unwrap();

        let of_a = storage.list_by_instructor(a).await.unwrap();
        assert_eq!(of_a, vec![s1, s3]);
        assert!(storage.list_by_instructor(9999).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn create_with_unknown_instructor_fails_integrity() {
        let db = TempDb::new().await;
        let storage = StudentsStorage::new(db.pool.clone());

        let err = storage.create(student("orphan", 12345)).await.unwrap_err();
        assert!(matches!(err, ApiError::UnknownInstructor(12345)));
        assert!(storage.list(0, 100).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn update_to_unknown_instructor_fails_integrity() {
        let db = TempDb::new().await;
        let storage = StudentsStorage::new(db.pool.clone());
        let a = seed_instructor(&db, "A").await;
        let created = storage.create(student("s", a)).await.unwrap();

        let err = storage
            .update(created.id, student("s", 777))
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::UnknownInstructor(777)));
    }

    #[tokio::test]
    async fn update_missing_student_is_none() {
        let db = TempDb::new().await;
        let storage = StudentsStorage::new(db.pool.clone());
        let a = seed_instructor(&db, "A").await;

        assert!(storage.update(99999, student("x", a)).await.unwrap().is_none());
        assert!(!storage.delete(99999).await.unwrap());
    }

    #[tokio::test]
    async fn deleting_instructor_cascades_to_students() {
        let db = TempDb::new().await;
        let storage = StudentsStorage::new(db.pool.clone());
        let a = seed_instructor(&db, "A").await;
        let s = storage.create(student("s", a)).await.unwrap();

        assert!(InstructorsStorage::new(db.pool.clone()).delete(a).await.unwrap());
        assert!(storage.get_by_id(s.id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn list_paginates_over_five_rows() {
        let db = TempDb::new().await;
        let storage = StudentsStorage::new(db.pool.clone());
        let a = seed_instructor(&db, "A").await;
        for i in 0..5 {
            storage.create(student(&format!("s{i}"), a)).await.unwrap();
        }

        assert_eq!(storage.list(0, 2).await.unwrap().len(), 2);
        assert_eq!(storage.list(4, 2).await.unwrap().len(), 1);
    }
}
