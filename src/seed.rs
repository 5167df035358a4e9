//! Demo data for a fresh database. Activities have no create route, so a new install
//! has nothing to sign up for until this runs.

use crate::error::AppError;
use crate::models::NewActivity;
use crate::service::ActivityService;
use sqlx::SqlitePool;

const DEMO_ACTIVITIES: &[(&str, i64)] = &[
    ("Archery", 2),
    ("Canoeing", 3),
    ("Arts and Crafts", 1),
    ("Rock Climbing", 5),
    ("Swimming", 2),
];

/// Insert the demo activities when the activities table is empty. Returns how many rows
/// were inserted.
pub async fn seed_activities(pool: &SqlitePool) -> Result<usize, AppError> {
    if ActivityService::count(pool).await? > 0 {
        tracing::info!("activities present, skipping seed");
        return Ok(0);
    }
    for (name, difficulty) in DEMO_ACTIVITIES {
        let new = NewActivity {
            name: (*name).to_string(),
            difficulty: *difficulty,
        };
        ActivityService::create(pool, &new).await?;
    }
    tracing::info!(count = DEMO_ACTIVITIES.len(), "seeded activities");
    Ok(DEMO_ACTIVITIES.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{connect_in_memory, ensure_tables};

    #[tokio::test]
    async fn seeds_once() {
        let pool = connect_in_memory().await.unwrap();
        ensure_tables(&pool).await.unwrap();
        assert_eq!(seed_activities(&pool).await.unwrap(), DEMO_ACTIVITIES.len());
        assert_eq!(seed_activities(&pool).await.unwrap(), 0);
        assert_eq!(ActivityService::count(&pool).await.unwrap(), DEMO_ACTIVITIES.len() as i64);
    }
}
