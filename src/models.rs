//! Entity rows and their serialized views.
//!
//! Relationships nest one hop: a camper carries its signups with each signup's activity,
//! an activity carries its signups with each signup's camper, and a signup carries both ends.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, FromRow)]
pub struct CamperRow {
    pub id: i64,
    pub name: String,
    pub age: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, FromRow)]
pub struct ActivityRow {
    pub id: i64,
    pub name: String,
    pub difficulty: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, FromRow)]
pub struct SignupRow {
    pub id: i64,
    pub time: i64,
    pub camper_id: i64,
    pub activity_id: i64,
}

/// POST /campers body.
#[derive(Debug, Clone, Deserialize)]
pub struct NewCamper {
    pub name: String,
    pub age: i64,
}

/// POST /signups body.
#[derive(Debug, Clone, Deserialize)]
pub struct NewSignup {
    pub time: i64,
    pub camper_id: i64,
    pub activity_id: i64,
}

/// Activities have no create route; used by seeding and tests.
#[derive(Debug, Clone, Deserialize)]
pub struct NewActivity {
    pub name: String,
    pub difficulty: i64,
}

/// Signup joined with both related rows, as read by the signup queries.
#[derive(Debug, Clone, FromRow)]
pub struct SignupJoinRow {
    pub id: i64,
    pub time: i64,
    pub camper_id: i64,
    pub activity_id: i64,
    pub camper_name: String,
    pub camper_age: i64,
    pub activity_name: String,
    pub activity_difficulty: i64,
}

impl SignupJoinRow {
    fn signup(&self) -> SignupRow {
        SignupRow {
            id: self.id,
            time: self.time,
            camper_id: self.camper_id,
            activity_id: self.activity_id,
        }
    }

    fn camper(&self) -> CamperRow {
        CamperRow {
            id: self.camper_id,
            name: self.camper_name.clone(),
            age: self.camper_age,
        }
    }

    fn activity(&self) -> ActivityRow {
        ActivityRow {
            id: self.activity_id,
            name: self.activity_name.clone(),
            difficulty: self.activity_difficulty,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Camper {
    #[serde(flatten)]
    pub row: CamperRow,
    pub signups: Vec<SignupWithActivity>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Activity {
    #[serde(flatten)]
    pub row: ActivityRow,
    pub signups: Vec<SignupWithCamper>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Signup {
    #[serde(flatten)]
    pub row: SignupRow,
    pub camper: CamperRow,
    pub activity: ActivityRow,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SignupWithActivity {
    #[serde(flatten)]
    pub row: SignupRow,
    pub activity: ActivityRow,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SignupWithCamper {
    #[serde(flatten)]
    pub row: SignupRow,
    pub camper: CamperRow,
}

impl From<&SignupJoinRow> for Signup {
    fn from(r: &SignupJoinRow) -> Self {
        Signup {
            row: r.signup(),
            camper: r.camper(),
            activity: r.activity(),
        }
    }
}

impl From<&SignupJoinRow> for SignupWithActivity {
    fn from(r: &SignupJoinRow) -> Self {
        SignupWithActivity {
            row: r.signup(),
            activity: r.activity(),
        }
    }
}

impl From<&SignupJoinRow> for SignupWithCamper {
    fn from(r: &SignupJoinRow) -> Self {
        SignupWithCamper {
            row: r.signup(),
            camper: r.camper(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn join_row() -> SignupJoinRow {
        SignupJoinRow {
            id: 3,
            time: 9,
            camper_id: 1,
            activity_id: 2,
            camper_name: "Alex".into(),
            camper_age: 10,
            activity_name: "Archery".into(),
            activity_difficulty: 2,
        }
    }

    #[test]
    fn signup_serializes_both_ends() {
        let value = serde_json::to_value(Signup::from(&join_row())).unwrap();
        assert_eq!(
            value,
            json!({
                "id": 3, "time": 9, "camper_id": 1, "activity_id": 2,
                "camper": {"id": 1, "name": "Alex", "age": 10},
                "activity": {"id": 2, "name": "Archery", "difficulty": 2}
            })
        );
    }

    #[test]
    fn camper_nests_signups_without_back_reference() {
        let camper = Camper {
            row: CamperRow {
                id: 1,
                name: "Alex".into(),
                age: 10,
            },
            signups: vec![SignupWithActivity::from(&join_row())],
        };
        let value = serde_json::to_value(camper).unwrap();
        assert_eq!(value["name"], "Alex");
        assert_eq!(value["signups"][0]["activity"]["name"], "Archery");
        assert!(value["signups"][0].get("camper").is_none());
    }
}
