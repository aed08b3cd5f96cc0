//! Insert validation boundary.
//!
//! One total, side-effect-free function per entity, checking a candidate
//! JSON value against that entity's insert shape before any persistence
//! attempt. Failures name the offending field; the caller receives them
//! unmodified. Extra fields in the candidate (including system-assigned ones
//! such as `id` or `status`) are ignored and never appear in the result.

use core::fmt;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::error::Error;
use std::fmt::{Display, Formatter};

use crate::models::input::{
    LocationInsert, PartnerInsert, PlaceAlertInsert, PlaceInsert, SettingsInsert, UserInsert,
};

/// A candidate creation input did not conform to the entity's insert shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Entity whose insert shape was checked, e.g. `"location"`.
    pub entity: &'static str,
    /// Wire-side name or dotted path of the violating field.
    pub field: String,
    /// Underlying deserializer message (wrong type, missing field, unknown
    /// enum variant).
    pub message: String,
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if self.field.is_empty() {
            write!(f, "invalid {} insert: {}", self.entity, self.message)
        } else {
            write!(
                f,
                "invalid {} insert: field `{}`: {}",
                self.entity, self.field, self.message
            )
        }
    }
}

impl Error for ValidationError {}

impl ValidationError {
    fn from_serde(entity: &'static str, err: serde_path_to_error::Error<serde_json::Error>) -> Self {
        let path = err.path().to_string();
        let message = err.into_inner().to_string();
        // Missing-field errors surface at the struct root; the field name
        // only lives in the message, backtick-quoted.
        let field = if path != "." {
            path
        } else {
            backticked(&message).unwrap_or_default()
        };
        ValidationError { entity, field, message }
    }
}

fn backticked(message: &str) -> Option<String> {
    let start = message.find('`')? + 1;
    let end = start + message[start..].find('`')?;
    Some(message[start..end].to_string())
}

fn check_insert<T: DeserializeOwned>(entity: &'static str, candidate: &Value) -> Result<T, ValidationError> {
    serde_path_to_error::deserialize(candidate).map_err(|e| ValidationError::from_serde(entity, e))
}

pub fn validate_user_insert(candidate: &Value) -> Result<UserInsert, ValidationError> {
    check_insert("user", candidate)
}

pub fn validate_partner_insert(candidate: &Value) -> Result<PartnerInsert, ValidationError> {
    check_insert("partner", candidate)
}

pub fn validate_location_insert(candidate: &Value) -> Result<LocationInsert, ValidationError> {
    check_insert("location", candidate)
}

pub fn validate_settings_insert(candidate: &Value) -> Result<SettingsInsert, ValidationError> {
    check_insert("settings", candidate)
}

pub fn validate_place_insert(candidate: &Value) -> Result<PlaceInsert, ValidationError> {
    check_insert("place", candidate)
}

pub fn validate_place_alert_insert(candidate: &Value) -> Result<PlaceAlertInsert, ValidationError> {
    check_insert("place_alert", candidate)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::input::{Activity, AlertType};
    use serde_json::json;

    #[test]
    fn user_insert_accepts_exact_subset() {
        let v = json!({"username": "alice", "email": "alice@example.com"});
        let insert = validate_user_insert(&v).expect("valid user insert");
        assert_eq!(insert.username, "alice");
        assert_eq!(insert.email, "alice@example.com");
    }

    #[test]
    fn user_insert_ignores_system_assigned_id() {
        let v = json!({"id": 99, "username": "alice", "email": "alice@example.com"});
        let insert = validate_user_insert(&v).expect("id must be ignored");
        assert_eq!(
            insert,
            UserInsert {
                username: "alice".to_string(),
                email: "alice@example.com".to_string(),
            }
        );
    }

    #[test]
    fn user_insert_missing_email_names_field() {
        let v = json!({"username": "alice"});
        let err = validate_user_insert(&v).unwrap_err();
        assert_eq!(err.entity, "user");
        assert_eq!(err.field, "email");
    }

    #[test]
    fn partner_insert_drops_supplied_status() {
        // `status` is system-assigned; a caller supplying it must not see it
        // in the validated value. The persisted row still defaults to
        // "pending" via `into_row`.
        let v = json!({"userId": 1, "partnerUserId": 2, "status": "accepted"});
        let insert = validate_partner_insert(&v).expect("status must be ignored");
        assert_eq!(
            insert,
            PartnerInsert {
                user_id: 1,
                partner_user_id: 2,
            }
        );
        assert_eq!(insert.into_row().status, "pending");
    }

    #[test]
    fn partner_insert_wrong_type_names_field() {
        let v = json!({"userId": "one", "partnerUserId": 2});
        let err = validate_partner_insert(&v).unwrap_err();
        assert_eq!(err.field, "userId");
    }

    #[test]
    fn location_insert_minimal_sample() {
        let v = json!({"userId": 1, "latitude": 37.77, "longitude": -122.41});
        let insert = validate_location_insert(&v).expect("valid minimal sample");
        assert_eq!(insert.user_id, 1);
        assert_eq!(insert.latitude, 37.77);
        assert_eq!(insert.longitude, -122.41);
        assert_eq!(insert.accuracy, None);
        assert_eq!(insert.battery_level, None);
        assert_eq!(insert.speed, None);
        assert_eq!(insert.heading, None);
        assert_eq!(insert.altitude, None);
        assert_eq!(insert.activity, None);
        assert_eq!(insert.is_location_sharing, None);
        // Sharing defaults on once the row is built for persistence.
        assert!(insert.into_row().is_location_sharing);
    }

    #[test]
    fn location_insert_rejects_unknown_activity() {
        let v = json!({"userId": 1, "latitude": 0.0, "longitude": 0.0, "activity": "flying"});
        let err = validate_location_insert(&v).unwrap_err();
        assert_eq!(err.field, "activity");
        assert!(err.message.contains("flying"), "message: {}", err.message);
    }

    #[test]
    fn location_insert_wrong_latitude_type_names_field() {
        let v = json!({"userId": 1, "latitude": "37.77", "longitude": -122.41});
        let err = validate_location_insert(&v).unwrap_err();
        assert_eq!(err.field, "latitude");
    }

    #[test]
    fn location_insert_full_fixture() {
        let json = std::fs::read_to_string("tests/data/location-insert.json").expect("fixture present");
        let v: serde_json::Value = serde_json::from_str(&json).expect("parse fixture");
        let insert = validate_location_insert(&v).expect("valid full sample");
        assert_eq!(insert.activity, Some(Activity::Walking));
        assert_eq!(insert.battery_level, Some(81));
        assert_eq!(insert.speed, Some(4.6));
        assert_eq!(insert.is_location_sharing, Some(true));
    }

    #[test]
    fn settings_insert_missing_user_names_field() {
        let v = json!({"batteryAlerts": false});
        let err = validate_settings_insert(&v).unwrap_err();
        assert_eq!(err.entity, "settings");
        assert_eq!(err.field, "userId");
    }

    #[test]
    fn place_insert_missing_longitude_names_field() {
        let v = json!({"userId": 1, "name": "Home", "latitude": 10.0});
        let err = validate_place_insert(&v).unwrap_err();
        assert_eq!(err.entity, "place");
        assert_eq!(err.field, "longitude");
        assert!(err.to_string().contains("longitude"));
    }

    #[test]
    fn place_insert_accepts_optional_overrides() {
        let v = json!({
            "userId": 1,
            "name": "Office",
            "latitude": 46.05,
            "longitude": 14.51,
            "radius": 250,
            "alertOnExit": false
        });
        let insert = validate_place_insert(&v).expect("valid place insert");
        assert_eq!(insert.radius, Some(250));
        assert_eq!(insert.alert_on_entry, None);
        assert_eq!(insert.alert_on_exit, Some(false));
    }

    #[test]
    fn place_alert_insert_checks_alert_type() {
        let valid = json!({"placeId": 3, "userId": 1, "partnerId": 2, "alertType": "exit"});
        let insert = validate_place_alert_insert(&valid).expect("valid alert insert");
        assert_eq!(insert.alert_type, AlertType::Exit);

        let invalid = json!({"placeId": 3, "userId": 1, "partnerId": 2, "alertType": "near"});
        let err = validate_place_alert_insert(&invalid).unwrap_err();
        assert_eq!(err.field, "alertType");
    }

    #[test]
    fn error_display_names_entity_and_field() {
        let v = json!({"username": 5, "email": "a@b"});
        let err = validate_user_insert(&v).unwrap_err();
        let shown = err.to_string();
        assert!(shown.contains("user insert"), "display: {}", shown);
        assert!(shown.contains("username"), "display: {}", shown);
    }
}
