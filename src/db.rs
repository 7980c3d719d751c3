use anyhow::Context;
use sqlx::{postgres::PgPoolOptions, PgPool};

pub async fn connect(database_url: &str) -> anyhow::Result<PgPool> {
    let pool = PgPoolOptions::new()
        .max_connections(10)
        .connect(database_url)
        .await
        .context("connect to database")?;
    Ok(pool)
}

/// Create the students table on startup if it does not exist yet. This is
/// deliberately not a migration system; the schema has a single table.
pub async fn ensure_schema(db: &PgPool) -> anyhow::Result<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS students (
            student_id BIGINT PRIMARY KEY,
            name       TEXT NOT NULL,
            major      TEXT NOT NULL,
            status     TEXT NOT NULL,
            created_at TIMESTAMPTZ NOT NULL DEFAULT now(),
            updated_at TIMESTAMPTZ NOT NULL DEFAULT now()
        )
        "#,
    )
    .execute(db)
    .await
    .context("create students table")?;

    for stmt in [
        "CREATE INDEX IF NOT EXISTS idx_students_name ON students (name)",
        "CREATE INDEX IF NOT EXISTS idx_students_major ON students (major)",
        "CREATE INDEX IF NOT EXISTS idx_students_status ON students (status)",
    ] {
        sqlx::query(stmt)
            .execute(db)
            .await
            .context("create students index")?;
    }

    Ok(())
}
