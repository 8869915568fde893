use async_trait::async_trait;
use uuid::Uuid;

use super::model::Genre;
use crate::infrastructure::db::error::RepositoryError;
use crate::infrastructure::db::pool::DbPool;

/// Persistence operations the genre routes rely on.
///
/// Absence of a record is `Ok(None)`, never an error.
#[async_trait]
pub trait GenreRepository: Send + Sync {
    /// All genres ordered by name, byte-wise.
    async fn find_all_sorted(&self) -> Result<Vec<Genre>, RepositoryError>;

    async fn insert(&self, name: &str) -> Result<Genre, RepositoryError>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Genre>, RepositoryError>;

    /// Replaces the name and returns the record as it is after the update.
    async fn update_name(&self, id: Uuid, name: &str) -> Result<Option<Genre>, RepositoryError>;

    /// Deletes the record and returns what was removed.
    async fn remove(&self, id: Uuid) -> Result<Option<Genre>, RepositoryError>;
}

#[derive(Debug, Clone)]
pub struct PostgresGenreRepository {
    pool: DbPool,
}

impl PostgresGenreRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl GenreRepository for PostgresGenreRepository {
    #[tracing::instrument(skip_all, level = "debug")]
    async fn find_all_sorted(&self) -> Result<Vec<Genre>, RepositoryError> {
        let genres = sqlx::query_as::<_, Genre>(
            r#"
            SELECT id, name
            FROM genres
            ORDER BY name COLLATE "C" ASC, id ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(genres)
    }

    #[tracing::instrument(skip(self), level = "debug")]
    async fn insert(&self, name: &str) -> Result<Genre, RepositoryError> {
        let genre = sqlx::query_as::<_, Genre>(
            r#"
            INSERT INTO genres (id, name)
            VALUES ($1, $2)
            RETURNING id, name
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(name)
        .fetch_one(&self.pool)
        .await?;

        Ok(genre)
    }

    #[tracing::instrument(skip(self), level = "debug")]
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Genre>, RepositoryError> {
        let genre = sqlx::query_as::<_, Genre>(
            r#"
            SELECT id, name
            FROM genres
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(genre)
    }

    #[tracing::instrument(skip(self), level = "debug")]
    async fn update_name(&self, id: Uuid, name: &str) -> Result<Option<Genre>, RepositoryError> {
        let genre = sqlx::query_as::<_, Genre>(
            r#"
            UPDATE genres
            SET name = $1
            WHERE id = $2
            RETURNING id, name
            "#,
        )
        .bind(name)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(genre)
    }

    #[tracing::instrument(skip(self), level = "debug")]
    async fn remove(&self, id: Uuid) -> Result<Option<Genre>, RepositoryError> {
        let genre = sqlx::query_as::<_, Genre>(
            r#"
            DELETE FROM genres
            WHERE id = $1
            RETURNING id, name
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(genre)
    }
}
