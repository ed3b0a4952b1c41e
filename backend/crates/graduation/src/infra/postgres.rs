//! PostgreSQL Role-Gate Registry
//!
//! Read-only lookup of teaching-assistant records in the identity store.
//! The schema is owned by the identity provider; this layer issues SELECTs
//! only and runs no migrations against it.

use kernel::id::{TaId, UserId};
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::entities::TaRecord;
use crate::domain::repository::TaRegistry;
use crate::error::GraduationResult;

/// PostgreSQL-backed teaching-assistant registry
#[derive(Clone)]
pub struct PgTaRegistry {
    pool: PgPool,
}

impl PgTaRegistry {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl TaRegistry for PgTaRegistry {
    async fn find_by_user(&self, user_id: &UserId) -> GraduationResult<Option<TaRecord>> {
        let row = sqlx::query_as::<_, TaRecordRow>(
            r#"
            SELECT
                ta_id,
                user_id,
                full_name
            FROM teaching_assistants
            WHERE user_id = $1
            "#,
        )
        .bind(user_id.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(TaRecordRow::into_record))
    }
}

#[derive(sqlx::FromRow)]
struct TaRecordRow {
    ta_id: Uuid,
    user_id: Uuid,
    full_name: String,
}

impl TaRecordRow {
    fn into_record(self) -> TaRecord {
        TaRecord {
            ta_id: TaId::from_uuid(self.ta_id),
            user_id: UserId::from_uuid(self.user_id),
            full_name: self.full_name,
        }
    }
}
