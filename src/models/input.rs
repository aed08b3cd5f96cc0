//! Insert shapes: the caller-supplyable field subset of each entity.
//!
//! Scope: types only — no persistence code.
//!
//! Notes
//! - Wire naming is camelCase (`partnerUserId`), matching what clients send;
//!   storage naming stays snake_case in `crate::db::models`.
//! - Fields outside an insert shape (`id`, `status`, `createdAt`,
//!   `triggeredAt`, `acknowledged`, ...) are system-assigned. Unknown fields
//!   in candidate input are ignored and never reach the validated value.
//! - `into_row` turns a validated insert shape into the `New*` row for
//!   persistence, applying the declared defaults explicitly rather than
//!   leaning on column defaults for caller-overridable values.

use serde::{Deserialize, Serialize};

use crate::db::models as dbm;

/// Default geofence radius in meters when a place is created without one.
pub const DEFAULT_PLACE_RADIUS_M: i32 = 100;

// =====================
// Closed string enumerations
// =====================

/// Lifecycle of a sharing relationship. Transitions happen outside this
/// crate; new partnerships always start as `Pending`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PartnerStatus {
    Pending,
    Accepted,
    Blocked,
}

impl PartnerStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            PartnerStatus::Pending => "pending",
            PartnerStatus::Accepted => "accepted",
            PartnerStatus::Blocked => "blocked",
        }
    }
}

/// Motion activity reported alongside a position sample.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Activity {
    Stationary,
    Walking,
    Running,
    Cycling,
    Driving,
}

impl Activity {
    pub fn as_str(self) -> &'static str {
        match self {
            Activity::Stationary => "stationary",
            Activity::Walking => "walking",
            Activity::Running => "running",
            Activity::Cycling => "cycling",
            Activity::Driving => "driving",
        }
    }
}

/// Geofence crossing direction for a place alert.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertType {
    Entry,
    Exit,
}

impl AlertType {
    pub fn as_str(self) -> &'static str {
        match self {
            AlertType::Entry => "entry",
            AlertType::Exit => "exit",
        }
    }
}

// =====================
// Insert shapes
// =====================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserInsert {
    pub username: String,
    pub email: String,
}

impl UserInsert {
    pub fn into_row(self) -> dbm::NewUser {
        dbm::NewUser {
            username: self.username,
            email: self.email,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartnerInsert {
    pub user_id: i32,
    pub partner_user_id: i32,
}

impl PartnerInsert {
    pub fn into_row(self) -> dbm::NewPartner {
        dbm::NewPartner {
            user_id: self.user_id,
            partner_user_id: self.partner_user_id,
            status: PartnerStatus::Pending.as_str().to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationInsert {
    pub user_id: i32,
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default)]
    pub accuracy: Option<f64>,
    #[serde(default)]
    pub battery_level: Option<i32>,
    /// Speed in km/h.
    #[serde(default)]
    pub speed: Option<f64>,
    /// Direction in degrees.
    #[serde(default)]
    pub heading: Option<f64>,
    /// Altitude in meters.
    #[serde(default)]
    pub altitude: Option<f64>,
    #[serde(default)]
    pub activity: Option<Activity>,
    #[serde(default)]
    pub is_location_sharing: Option<bool>,
}

impl LocationInsert {
    /// Callers never supply the sample timestamp; it is assigned here, at
    /// the moment the row is constructed for persistence.
    pub fn into_row(self) -> dbm::NewLocation {
        dbm::NewLocation {
            user_id: self.user_id,
            latitude: self.latitude,
            longitude: self.longitude,
            accuracy: self.accuracy,
            battery_level: self.battery_level,
            speed: self.speed,
            heading: self.heading,
            altitude: self.altitude,
            activity: self.activity.map(|a| a.as_str().to_string()),
            is_location_sharing: self.is_location_sharing.unwrap_or(true),
            timestamp: chrono::Utc::now(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SettingsInsert {
    pub user_id: i32,
    #[serde(default)]
    pub battery_alerts: Option<bool>,
    #[serde(default)]
    pub location_sharing: Option<bool>,
}

impl SettingsInsert {
    pub fn into_row(self) -> dbm::NewSettings {
        dbm::NewSettings {
            user_id: self.user_id,
            battery_alerts: self.battery_alerts.unwrap_or(true),
            location_sharing: self.location_sharing.unwrap_or(true),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaceInsert {
    pub user_id: i32,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    /// Radius in meters.
    #[serde(default)]
    pub radius: Option<i32>,
    #[serde(default)]
    pub alert_on_entry: Option<bool>,
    #[serde(default)]
    pub alert_on_exit: Option<bool>,
}

impl PlaceInsert {
    pub fn into_row(self) -> dbm::NewPlace {
        dbm::NewPlace {
            user_id: self.user_id,
            name: self.name,
            latitude: self.latitude,
            longitude: self.longitude,
            radius: self.radius.unwrap_or(DEFAULT_PLACE_RADIUS_M),
            alert_on_entry: self.alert_on_entry.unwrap_or(true),
            alert_on_exit: self.alert_on_exit.unwrap_or(true),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaceAlertInsert {
    pub place_id: i32,
    pub user_id: i32,
    pub partner_id: i32,
    pub alert_type: AlertType,
}

impl PlaceAlertInsert {
    pub fn into_row(self) -> dbm::NewPlaceAlert {
        dbm::NewPlaceAlert {
            place_id: self.place_id,
            user_id: self.user_id,
            partner_id: self.partner_id,
            alert_type: self.alert_type.as_str().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partner_row_defaults_to_pending() {
        let row = PartnerInsert {
            user_id: 1,
            partner_user_id: 2,
        }
        .into_row();
        assert_eq!(row.status, "pending");
    }

    #[test]
    fn location_row_defaults_sharing_on() {
        let insert = LocationInsert {
            user_id: 1,
            latitude: 37.77,
            longitude: -122.41,
            accuracy: None,
            battery_level: None,
            speed: None,
            heading: None,
            altitude: None,
            activity: None,
            is_location_sharing: None,
        };
        let row = insert.into_row();
        assert!(row.is_location_sharing);
        assert_eq!(row.activity, None);
    }

    #[test]
    fn location_row_keeps_explicit_sharing_off() {
        let insert = LocationInsert {
            user_id: 1,
            latitude: 0.0,
            longitude: 0.0,
            accuracy: None,
            battery_level: None,
            speed: None,
            heading: None,
            altitude: None,
            activity: Some(Activity::Driving),
            is_location_sharing: Some(false),
        };
        let row = insert.into_row();
        assert!(!row.is_location_sharing);
        assert_eq!(row.activity.as_deref(), Some("driving"));
    }

    #[test]
    fn place_row_defaults() {
        let row = PlaceInsert {
            user_id: 1,
            name: "Home".to_string(),
            latitude: 46.05,
            longitude: 14.51,
            radius: None,
            alert_on_entry: None,
            alert_on_exit: Some(false),
        }
        .into_row();
        assert_eq!(row.radius, DEFAULT_PLACE_RADIUS_M);
        assert!(row.alert_on_entry);
        assert!(!row.alert_on_exit);
    }

    #[test]
    fn settings_row_defaults_both_on() {
        let row = SettingsInsert {
            user_id: 7,
            battery_alerts: None,
            location_sharing: None,
        }
        .into_row();
        assert!(row.battery_alerts);
        assert!(row.location_sharing);
    }

    #[test]
    fn enum_wire_names_are_lowercase() {
        assert_eq!(serde_json::to_value(AlertType::Entry).unwrap(), "entry");
        assert_eq!(serde_json::to_value(Activity::Cycling).unwrap(), "cycling");
        assert_eq!(serde_json::to_value(PartnerStatus::Blocked).unwrap(), "blocked");
    }
}
