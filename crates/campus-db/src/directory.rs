//! PostgreSQL-backed profile and membership lookups.

use async_trait::async_trait;
use campus_core::{LookupError, MembershipLookup, ProfileLookup};
use sqlx::PgPool;
use tracing::{error, instrument};
use uuid::Uuid;

/// Reads profiles and department memberships from the portal database.
#[derive(Clone, Debug)]
pub struct PgDirectory {
    pool: PgPool,
}

impl PgDirectory {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn lookup_error(err: sqlx::Error) -> LookupError {
    error!(error = %err, "Directory query failed");
    LookupError::new(err.to_string())
}

#[async_trait]
impl ProfileLookup for PgDirectory {
    #[instrument(skip(self))]
    async fn user_type(&self, user_id: Uuid) -> Result<Option<String>, LookupError> {
        let user_type =
            sqlx::query_scalar::<_, Option<String>>("SELECT user_type FROM profiles WHERE id = $1")
                .bind(user_id)
                .fetch_optional(&self.pool)
                .await
                .map_err(lookup_error)?;

        Ok(user_type.flatten())
    }
}

#[async_trait]
impl MembershipLookup for PgDirectory {
    #[instrument(skip(self))]
    async fn active_roles(
        &self,
        department_id: Uuid,
        user_id: Uuid,
    ) -> Result<Vec<String>, LookupError> {
        // Two rows are enough to tell "unique" from "ambiguous".
        sqlx::query_scalar::<_, String>(
            r#"SELECT role FROM department_members
            WHERE department_id = $1 AND faculty_id = $2 AND is_active = true
            LIMIT 2"#,
        )
        .bind(department_id)
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
        .map_err(lookup_error)
    }
}
