use crate::models::registration::{NewRegistration, Registration};
use async_trait::async_trait;
use sqlx::SqlitePool;

#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("Registration not found")]
    NotFound,
}

pub type RepositoryResult<T> = Result<T, RepositoryError>;

#[async_trait]
#[cfg_attr(test, mockall::automock)]
pub trait RegistrationRepository: Send + Sync {
    /// Inserts a registration and returns it with its assigned id.
    async fn create(&self, registration: &NewRegistration) -> RepositoryResult<Registration>;
    async fn find_by_id(&self, id: i64) -> RepositoryResult<Option<Registration>>;
    /// Every stored registration, oldest first.
    async fn list_all(&self) -> RepositoryResult<Vec<Registration>>;
    async fn list(
        &self,
        limit: Option<i64>,
        offset: Option<i64>,
    ) -> RepositoryResult<Vec<Registration>>;
    async fn count(&self) -> RepositoryResult<i64>;
}

pub struct SqliteRegistrationRepository {
    pool: SqlitePool,
}

impl SqliteRegistrationRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RegistrationRepository for SqliteRegistrationRepository {
    async fn create(&self, registration: &NewRegistration) -> RepositoryResult<Registration> {
        let result = sqlx::query(
            r#"
            INSERT INTO registrations (first_name, last_name, created_utc, email_hash, email_hash_salt)
            VALUES (?, ?, ?, ?, ?)
            "#,
        )
        .bind(&registration.first_name)
        .bind(&registration.last_name)
        .bind(registration.created_utc)
        .bind(&registration.email_hash)
        .bind(&registration.email_hash_salt)
        .execute(&self.pool)
        .await?;

        let id = result.last_insert_rowid();
        self.find_by_id(id).await?.ok_or(RepositoryError::NotFound)
    }

    async fn find_by_id(&self, id: i64) -> RepositoryResult<Option<Registration>> {
        let registration = sqlx::query_as::<_, Registration>(
            r#"
            SELECT id, first_name, last_name, created_utc, email_hash, email_hash_salt
            FROM registrations
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(registration)
    }

    async fn list_all(&self) -> RepositoryResult<Vec<Registration>> {
        let registrations = sqlx::query_as::<_, Registration>(
            r#"
            SELECT id, first_name, last_name, created_utc, email_hash, email_hash_salt
            FROM registrations
            ORDER BY id ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(registrations)
    }

    async fn list(
        &self,
        limit: Option<i64>,
        offset: Option<i64>,
    ) -> RepositoryResult<Vec<Registration>> {
        let limit = limit.unwrap_or(100);
        let offset = offset.unwrap_or(0);

        let registrations = sqlx::query_as::<_, Registration>(
            r#"
            SELECT id, first_name, last_name, created_utc, email_hash, email_hash_salt
            FROM registrations
            ORDER BY created_utc DESC, id DESC
            LIMIT ? OFFSET ?
            "#,
        )
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;

        Ok(registrations)
    }

    async fn count(&self) -> RepositoryResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM registrations")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}
