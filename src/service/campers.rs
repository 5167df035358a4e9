//! Camper persistence.

use super::signups::{fetch_joined, SignupFilter};
use super::validation::CamperUpdate;
use crate::error::AppError;
use crate::models::{Camper, CamperRow, NewCamper, SignupWithActivity};
use sqlx::SqlitePool;
use std::collections::HashMap;

pub struct CamperService;

impl CamperService {
    /// All campers by id, each with its signups and their activities.
    pub async fn list(pool: &SqlitePool) -> Result<Vec<Camper>, AppError> {
        let rows: Vec<CamperRow> = sqlx::query_as("SELECT id, name, age FROM campers ORDER BY id")
            .fetch_all(pool)
            .await?;
        let mut by_camper: HashMap<i64, Vec<SignupWithActivity>> = HashMap::new();
        for s in fetch_joined(pool, SignupFilter::All).await? {
            by_camper.entry(s.camper_id).or_default().push(SignupWithActivity::from(&s));
        }
        Ok(rows
            .into_iter()
            .map(|row| {
                let signups = by_camper.remove(&row.id).unwrap_or_default();
                Camper { row, signups }
            })
            .collect())
    }

    pub async fn read(pool: &SqlitePool, id: i64) -> Result<Option<Camper>, AppError> {
        let row: Option<CamperRow> = sqlx::query_as("SELECT id, name, age FROM campers WHERE id = ?")
            .bind(id)
            .fetch_optional(pool)
            .await?;
        let Some(row) = row else {
            return Ok(None);
        };
        let signups = fetch_joined(pool, SignupFilter::CamperId(id))
            .await?
            .iter()
            .map(SignupWithActivity::from)
            .collect();
        Ok(Some(Camper { row, signups }))
    }

    pub async fn exists(pool: &SqlitePool, id: i64) -> Result<bool, AppError> {
        let found: Option<i64> = sqlx::query_scalar("SELECT 1 FROM campers WHERE id = ?")
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(found.is_some())
    }

    pub async fn create(pool: &SqlitePool, new: &NewCamper) -> Result<Camper, AppError> {
        let id = sqlx::query("INSERT INTO campers (name, age) VALUES (?, ?)")
            .bind(&new.name)
            .bind(new.age)
            .execute(pool)
            .await?
            .last_insert_rowid();
        tracing::info!(id, "camper created");
        Ok(Camper {
            row: CamperRow {
                id,
                name: new.name.clone(),
                age: new.age,
            },
            signups: Vec::new(),
        })
    }

    /// Apply every change in one statement inside one transaction. Returns None when no
    /// camper has this id.
    pub async fn update(pool: &SqlitePool, id: i64, update: &CamperUpdate) -> Result<Option<Camper>, AppError> {
        let mut tx = pool.begin().await?;
        let affected = sqlx::query(
            "UPDATE campers SET name = COALESCE(?, name), age = COALESCE(?, age) WHERE id = ?",
        )
        .bind(update.name.as_deref())
        .bind(update.age)
        .bind(id)
        .execute(&mut *tx)
        .await?
        .rows_affected();
        if affected == 0 {
            tx.rollback().await?;
            return Ok(None);
        }
        tx.commit().await?;
        tracing::info!(id, ?update, "camper updated");
        Self::read(pool, id).await
    }
}
