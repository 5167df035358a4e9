//! Signup persistence, plus the joined reads the camper and activity services nest.

use crate::error::AppError;
use crate::models::{NewSignup, Signup, SignupJoinRow};
use sqlx::{SqliteConnection, SqlitePool};

const SELECT_JOINED: &str = r#"
    SELECT s.id, s.time, s.camper_id, s.activity_id,
           c.name AS camper_name, c.age AS camper_age,
           a.name AS activity_name, a.difficulty AS activity_difficulty
    FROM signups s
    JOIN campers c ON c.id = s.camper_id
    JOIN activities a ON a.id = s.activity_id
"#;

/// Column a joined read can be narrowed by.
#[derive(Debug, Clone, Copy)]
pub(crate) enum SignupFilter {
    All,
    Id(i64),
    CamperId(i64),
    ActivityId(i64),
}

pub(crate) async fn fetch_joined(pool: &SqlitePool, filter: SignupFilter) -> Result<Vec<SignupJoinRow>, AppError> {
    let (clause, value) = match filter {
        SignupFilter::All => ("", None),
        SignupFilter::Id(id) => ("WHERE s.id = ?", Some(id)),
        SignupFilter::CamperId(id) => ("WHERE s.camper_id = ?", Some(id)),
        SignupFilter::ActivityId(id) => ("WHERE s.activity_id = ?", Some(id)),
    };
    let sql = format!("{} {} ORDER BY s.id", SELECT_JOINED, clause);
    tracing::debug!(sql = %sql, ?filter, "query");
    let mut query = sqlx::query_as::<_, SignupJoinRow>(&sql);
    if let Some(v) = value {
        query = query.bind(v);
    }
    Ok(query.fetch_all(pool).await?)
}

pub struct SignupService;

impl SignupService {
    pub async fn list(pool: &SqlitePool) -> Result<Vec<Signup>, AppError> {
        let rows = fetch_joined(pool, SignupFilter::All).await?;
        Ok(rows.iter().map(Signup::from).collect())
    }

    pub async fn read(pool: &SqlitePool, id: i64) -> Result<Option<Signup>, AppError> {
        let rows = fetch_joined(pool, SignupFilter::Id(id)).await?;
        Ok(rows.first().map(Signup::from))
    }

    /// Insert one signup after checking both referenced rows exist, all on one transaction.
    /// Time range is the caller's concern (see `RequestValidator::validate_time`).
    pub async fn create(pool: &SqlitePool, new: &NewSignup) -> Result<Signup, AppError> {
        let mut tx = pool.begin().await?;
        if !row_exists(&mut tx, "campers", new.camper_id).await? {
            return Err(AppError::NotFound("Camper not found".into()));
        }
        if !row_exists(&mut tx, "activities", new.activity_id).await? {
            return Err(AppError::NotFound("Activity not found".into()));
        }
        let id = sqlx::query("INSERT INTO signups (time, camper_id, activity_id) VALUES (?, ?, ?)")
            .bind(new.time)
            .bind(new.camper_id)
            .bind(new.activity_id)
            .execute(&mut *tx)
            .await
            .map_err(reference_error)?
            .last_insert_rowid();
        tx.commit().await.map_err(reference_error)?;
        tracing::info!(id, camper_id = new.camper_id, activity_id = new.activity_id, "signup created");
        Self::read(pool, id).await?.ok_or(AppError::Db(sqlx::Error::RowNotFound))
    }
}

async fn row_exists(conn: &mut SqliteConnection, table: &'static str, id: i64) -> Result<bool, AppError> {
    let found: Option<i64> = sqlx::query_scalar(&format!("SELECT 1 FROM {} WHERE id = ?", table))
        .bind(id)
        .fetch_optional(&mut *conn)
        .await?;
    Ok(found.is_some())
}

/// A camper or activity removed between the existence check and the insert still reads
/// as a missing reference, not a database failure.
fn reference_error(e: sqlx::Error) -> AppError {
    match e {
        sqlx::Error::Database(ref db) if db.is_foreign_key_violation() => {
            AppError::NotFound("Camper or activity not found".into())
        }
        other => AppError::Db(other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{connect_in_memory, ensure_tables};

    #[tokio::test]
    async fn dangling_reference_maps_to_not_found() {
        let pool = connect_in_memory().await.unwrap();
        ensure_tables(&pool).await.unwrap();
        let e = sqlx::query("INSERT INTO signups (time, camper_id, activity_id) VALUES (9, 1, 1)")
            .execute(&pool)
            .await
            .unwrap_err();
        assert!(matches!(reference_error(e), AppError::NotFound(_)));
    }

    #[test]
    fn other_errors_stay_database_errors() {
        assert!(matches!(reference_error(sqlx::Error::PoolClosed), AppError::Db(_)));
    }
}
