use sqlx::{FromRow, PgPool};
use time::OffsetDateTime;

use super::dto::CreateStudent;

#[derive(Debug, Clone, FromRow)]
pub struct Student {
    pub student_id: i64,
    pub name: String,
    pub major: String,
    pub status: String,
    pub created_at: OffsetDateTime,
    pub updated_at: OffsetDateTime,
}

/// Fields to overwrite in a partial update. `None` means "leave untouched".
#[derive(Debug, Default)]
pub struct StudentPatch {
    pub name: Option<String>,
    pub major: Option<String>,
    pub status: Option<String>,
}

impl Student {
    /// Insert a new row. Both timestamps are populated by the same statement,
    /// so a freshly created record has `created_at == updated_at`. Uniqueness
    /// of `student_id` is checked by the handler before calling this.
    pub async fn create(db: &PgPool, student: &CreateStudent) -> anyhow::Result<Student> {
        let row = sqlx::query_as::<_, Student>(
            r#"
            INSERT INTO students (student_id, name, major, status)
            VALUES ($1, $2, $3, $4)
            RETURNING student_id, name, major, status, created_at, updated_at
            "#,
        )
        .bind(student.student_id)
        .bind(&student.name)
        .bind(&student.major)
        .bind(&student.status)
        .fetch_one(db)
        .await?;
        Ok(row)
    }

    pub async fn get(db: &PgPool, student_id: i64) -> anyhow::Result<Option<Student>> {
        let row = sqlx::query_as::<_, Student>(
            r#"
            SELECT student_id, name, major, status, created_at, updated_at
            FROM students
            WHERE student_id = $1
            "#,
        )
        .bind(student_id)
        .fetch_optional(db)
        .await?;
        Ok(row)
    }

    /// Lookup by name. Names are not unique; the lowest student_id wins.
    pub async fn get_by_name(db: &PgPool, name: &str) -> anyhow::Result<Option<Student>> {
        let row = sqlx::query_as::<_, Student>(
            r#"
            SELECT student_id, name, major, status, created_at, updated_at
            FROM students
            WHERE name = $1
            ORDER BY student_id ASC
            LIMIT 1
            "#,
        )
        .bind(name)
        .fetch_optional(db)
        .await?;
        Ok(row)
    }

    pub async fn list(db: &PgPool) -> anyhow::Result<Vec<Student>> {
        let rows = sqlx::query_as::<_, Student>(
            r#"
            SELECT student_id, name, major, status, created_at, updated_at
            FROM students
            "#,
        )
        .fetch_all(db)
        .await?;
        Ok(rows)
    }

    /// Apply a partial update and refresh `updated_at`. Returns `None` when
    /// no row matches. An empty patch still bumps the timestamp.
    pub async fn update(
        db: &PgPool,
        student_id: i64,
        patch: StudentPatch,
    ) -> anyhow::Result<Option<Student>> {
        let row = sqlx::query_as::<_, Student>(
            r#"
            UPDATE students SET
                name = COALESCE($2, name),
                major = COALESCE($3, major),
                status = COALESCE($4, status),
                updated_at = now()
            WHERE student_id = $1
            RETURNING student_id, name, major, status, created_at, updated_at
            "#,
        )
        .bind(student_id)
        .bind(patch.name)
        .bind(patch.major)
        .bind(patch.status)
        .fetch_optional(db)
        .await?;
        Ok(row)
    }

    /// Delete by id. No-op when the row does not exist.
    pub async fn delete(db: &PgPool, student_id: i64) -> anyhow::Result<()> {
        sqlx::query(r#"DELETE FROM students WHERE student_id = $1"#)
            .bind(student_id)
            .execute(db)
            .await?;
        Ok(())
    }
}
