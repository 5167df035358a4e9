//! Activity persistence.

use super::signups::{fetch_joined, SignupFilter};
use crate::error::AppError;
use crate::models::{Activity, ActivityRow, NewActivity, SignupWithCamper};
use sqlx::SqlitePool;
use std::collections::HashMap;

pub struct ActivityService;

impl ActivityService {
    pub async fn list(pool: &SqlitePool) -> Result<Vec<Activity>, AppError> {
        let rows: Vec<ActivityRow> = sqlx::query_as("SELECT id, name, difficulty FROM activities ORDER BY id")
            .fetch_all(pool)
            .await?;
        let mut by_activity: HashMap<i64, Vec<SignupWithCamper>> = HashMap::new();
        for s in fetch_joined(pool, SignupFilter::All).await? {
            by_activity.entry(s.activity_id).or_default().push(SignupWithCamper::from(&s));
        }
        Ok(rows
            .into_iter()
            .map(|row| {
                let signups = by_activity.remove(&row.id).unwrap_or_default();
                Activity { row, signups }
            })
            .collect())
    }

    pub async fn read(pool: &SqlitePool, id: i64) -> Result<Option<Activity>, AppError> {
        let row: Option<ActivityRow> = sqlx::query_as("SELECT id, name, difficulty FROM activities WHERE id = ?")
            .bind(id)
            .fetch_optional(pool)
            .await?;
        let Some(row) = row else {
            return Ok(None);
        };
        let signups = fetch_joined(pool, SignupFilter::ActivityId(id))
            .await?
            .iter()
            .map(SignupWithCamper::from)
            .collect();
        Ok(Some(Activity { row, signups }))
    }

    pub async fn create(pool: &SqlitePool, new: &NewActivity) -> Result<Activity, AppError> {
        let id = sqlx::query("INSERT INTO activities (name, difficulty) VALUES (?, ?)")
            .bind(&new.name)
            .bind(new.difficulty)
            .execute(pool)
            .await?
            .last_insert_rowid();
        Ok(Activity {
            row: ActivityRow {
                id,
                name: new.name.clone(),
                difficulty: new.difficulty,
            },
            signups: Vec::new(),
        })
    }

    /// Delete by id; its signups go with it. Returns false when nothing matched.
    pub async fn delete(pool: &SqlitePool, id: i64) -> Result<bool, AppError> {
        let affected = sqlx::query("DELETE FROM activities WHERE id = ?")
            .bind(id)
            .execute(pool)
            .await?
            .rows_affected();
        if affected > 0 {
            tracing::info!(id, "activity deleted");
        }
        Ok(affected > 0)
    }

    pub async fn count(pool: &SqlitePool) -> Result<i64, AppError> {
        let n: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM activities").fetch_one(pool).await?;
        Ok(n)
    }
}
