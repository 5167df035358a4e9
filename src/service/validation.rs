//! Request validation: value ranges and the camper update allow-list.

use crate::error::AppError;
use serde_json::{Map, Value};

pub const MIN_AGE: i64 = 8;
pub const MAX_AGE: i64 = 18;
pub const FIRST_HOUR: i64 = 0;
pub const LAST_HOUR: i64 = 23;

pub const AGE_MESSAGE: &str = "Age must be between 8 and 18 years old";
pub const TIME_MESSAGE: &str = "Time must be between 0 and 23";
pub const NO_DATA_MESSAGE: &str = "No data provided for update";
pub const INVALID_ATTRIBUTE_MESSAGE: &str = "Invalid attribute";

/// One updatable camper attribute. Anything else in a PATCH body is rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CamperField {
    Name(String),
    Age(i64),
}

/// Collapsed set of camper changes, applied in one statement.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CamperUpdate {
    pub name: Option<String>,
    pub age: Option<i64>,
}

impl FromIterator<CamperField> for CamperUpdate {
    fn from_iter<I: IntoIterator<Item = CamperField>>(iter: I) -> Self {
        let mut update = CamperUpdate::default();
        for field in iter {
            match field {
                CamperField::Name(name) => update.name = Some(name),
                CamperField::Age(age) => update.age = Some(age),
            }
        }
        update
    }
}

pub struct RequestValidator;

impl RequestValidator {
    /// Inclusive on both ends, for create and update alike.
    pub fn validate_age(age: i64) -> Result<(), AppError> {
        if (MIN_AGE..=MAX_AGE).contains(&age) {
            Ok(())
        } else {
            Err(AppError::validation(AGE_MESSAGE))
        }
    }

    pub fn validate_time(time: i64) -> Result<(), AppError> {
        if (FIRST_HOUR..=LAST_HOUR).contains(&time) {
            Ok(())
        } else {
            Err(AppError::validation(TIME_MESSAGE))
        }
    }

    /// Turn a PATCH body into typed camper fields. Nothing is applied until every key
    /// has been checked. An empty body fails first; an unknown key is only reported once
    /// the known keys have passed, so a bad age wins over a bad key.
    pub fn camper_fields(body: &Map<String, Value>) -> Result<Vec<CamperField>, AppError> {
        if body.is_empty() {
            return Err(AppError::BadRequest(NO_DATA_MESSAGE.into()));
        }

        let mut fields = Vec::with_capacity(body.len());
        let mut unknown_key = false;
        for (key, value) in body {
            match key.as_str() {
                "name" => {
                    let name = value
                        .as_str()
                        .ok_or_else(|| AppError::validation("name must be a string"))?;
                    fields.push(CamperField::Name(name.to_string()));
                }
                "age" => {
                    let age = value
                        .as_i64()
                        .ok_or_else(|| AppError::validation("age must be an integer"))?;
                    Self::validate_age(age)?;
                    fields.push(CamperField::Age(age));
                }
                _ => unknown_key = true,
            }
        }
        if unknown_key {
            return Err(AppError::BadRequest(INVALID_ATTRIBUTE_MESSAGE.into()));
        }
        Ok(fields)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn object(v: Value) -> Map<String, Value> {
        match v {
            Value::Object(m) => m,
            _ => unreachable!(),
        }
    }

    #[test]
    fn age_bounds_are_inclusive() {
        for age in MIN_AGE..=MAX_AGE {
            assert!(RequestValidator::validate_age(age).is_ok(), "age {age}");
        }
        for age in [i64::MIN, 0, 7, 19, 100] {
            assert!(RequestValidator::validate_age(age).is_err(), "age {age}");
        }
    }

    #[test]
    fn time_bounds_are_inclusive() {
        assert!(RequestValidator::validate_time(0).is_ok());
        assert!(RequestValidator::validate_time(23).is_ok());
        assert!(RequestValidator::validate_time(24).is_err());
        assert!(RequestValidator::validate_time(-1).is_err());
    }

    #[test]
    fn empty_body_is_rejected() {
        let err = RequestValidator::camper_fields(&Map::new()).unwrap_err();
        assert!(matches!(err, AppError::BadRequest(ref m) if m == NO_DATA_MESSAGE));
    }

    #[test]
    fn unknown_key_is_rejected_even_with_valid_fields() {
        let body = object(json!({"name": "Sam", "nickname": "S"}));
        let err = RequestValidator::camper_fields(&body).unwrap_err();
        assert!(matches!(err, AppError::BadRequest(ref m) if m == INVALID_ATTRIBUTE_MESSAGE));
    }

    #[test]
    fn age_is_checked_before_allow_list() {
        let body = object(json!({"age": 30, "nickname": "S"}));
        let err = RequestValidator::camper_fields(&body).unwrap_err();
        assert!(matches!(err, AppError::Validation(ref e) if e == &vec![AGE_MESSAGE.to_string()]));
    }

    #[test]
    fn age_error_wins_over_key_sorted_before_it() {
        let body = object(json!({"aardvark": 1, "age": 7}));
        let err = RequestValidator::camper_fields(&body).unwrap_err();
        assert!(matches!(err, AppError::Validation(ref e) if e == &vec![AGE_MESSAGE.to_string()]));
    }

    #[test]
    fn wrong_types_are_validation_errors() {
        let body = object(json!({"age": "ten"}));
        assert!(matches!(RequestValidator::camper_fields(&body), Err(AppError::Validation(_))));
        let body = object(json!({"name": 5}));
        assert!(matches!(RequestValidator::camper_fields(&body), Err(AppError::Validation(_))));
    }

    #[test]
    fn fields_collapse_into_update() {
        let body = object(json!({"name": "Sam", "age": 12}));
        let update: CamperUpdate = RequestValidator::camper_fields(&body).unwrap().into_iter().collect();
        assert_eq!(
            update,
            CamperUpdate {
                name: Some("Sam".into()),
                age: Some(12)
            }
        );
    }
}
