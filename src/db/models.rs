//! Diesel model structs representing the persisted location-sharing entities.
//!
//! Every entity comes in two shapes: the full row as stored (`Queryable`)
//! and a `New*` insert row (`Insertable`) carrying only what a creation
//! writes. `id` and the storage-assigned columns (`created_at`,
//! `triggered_at`, `acknowledged`) never appear in a `New*` struct; the
//! migration's column defaults fill them in. Location samples carry their
//! `timestamp` explicitly, set at row construction.
//!
//! Enum-like columns (`status`, `activity`, `alert_type`) are plain text in
//! storage. Row structs hold `String`, but values only ever enter through
//! the closed enums in `crate::models::input`, so unchecked strings cannot
//! reach the database via this crate.

use chrono::{DateTime, Utc};
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use crate::schema;

#[derive(Debug, Clone, Queryable, Identifiable, Selectable, Serialize, Deserialize)]
#[diesel(table_name = schema::users)]
pub struct User {
    pub id: i32,
    pub username: String,
    pub email: String,
}

#[derive(Debug, Clone, Insertable, Serialize, Deserialize)]
#[diesel(table_name = schema::users)]
pub struct NewUser {
    pub username: String,
    pub email: String,
}

#[derive(Debug, Clone, Queryable, Identifiable, Associations, Selectable, Serialize, Deserialize)]
#[diesel(table_name = schema::partners)]
#[diesel(belongs_to(User))]
pub struct Partner {
    pub id: i32,
    pub user_id: i32,
    pub partner_user_id: i32,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Insertable, Serialize, Deserialize)]
#[diesel(table_name = schema::partners)]
pub struct NewPartner {
    pub user_id: i32,
    pub partner_user_id: i32,
    pub status: String,
}

#[derive(Debug, Clone, Queryable, Identifiable, Associations, Selectable, Serialize, Deserialize)]
#[diesel(table_name = schema::locations)]
#[diesel(belongs_to(User))]
pub struct Location {
    pub id: i32,
    pub user_id: i32,
    pub latitude: f64,
    pub longitude: f64,
    pub accuracy: Option<f64>,
    pub battery_level: Option<i32>,
    pub speed: Option<f64>,
    pub heading: Option<f64>,
    pub altitude: Option<f64>,
    pub activity: Option<String>,
    pub is_location_sharing: bool,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone, Insertable, Serialize, Deserialize)]
#[diesel(table_name = schema::locations)]
pub struct NewLocation {
    pub user_id: i32,
    pub latitude: f64,
    pub longitude: f64,
    pub accuracy: Option<f64>,
    pub battery_level: Option<i32>,
    pub speed: Option<f64>,
    pub heading: Option<f64>,
    pub altitude: Option<f64>,
    pub activity: Option<String>,
    pub is_location_sharing: bool,
    pub timestamp: DateTime<Utc>,
}

impl NewLocation {
    pub fn new(user_id: i32, latitude: f64, longitude: f64, timestamp: DateTime<Utc>) -> Self {
        NewLocation {
            user_id,
            latitude,
            longitude,
            accuracy: None,
            battery_level: None,
            speed: None,
            heading: None,
            altitude: None,
            activity: None,
            is_location_sharing: true,
            timestamp,
        }
    }
}

#[derive(Debug, Clone, Queryable, Identifiable, Associations, Selectable, Serialize, Deserialize)]
#[diesel(table_name = schema::settings)]
#[diesel(belongs_to(User))]
pub struct Settings {
    pub id: i32,
    pub user_id: i32,
    pub battery_alerts: bool,
    pub location_sharing: bool,
}

#[derive(Debug, Clone, Insertable, Serialize, Deserialize)]
#[diesel(table_name = schema::settings)]
pub struct NewSettings {
    pub user_id: i32,
    pub battery_alerts: bool,
    pub location_sharing: bool,
}

#[derive(Debug, Clone, Queryable, Identifiable, Associations, Selectable, Serialize, Deserialize)]
#[diesel(table_name = schema::places)]
#[diesel(belongs_to(User))]
pub struct Place {
    pub id: i32,
    pub user_id: i32,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub radius: i32,
    pub alert_on_entry: bool,
    pub alert_on_exit: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Insertable, Serialize, Deserialize)]
#[diesel(table_name = schema::places)]
pub struct NewPlace {
    pub user_id: i32,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub radius: i32,
    pub alert_on_entry: bool,
    pub alert_on_exit: bool,
}

#[derive(Debug, Clone, Queryable, Identifiable, Associations, Selectable, Serialize, Deserialize)]
#[diesel(table_name = schema::place_alerts)]
#[diesel(belongs_to(Place))]
#[diesel(belongs_to(User))]
#[diesel(belongs_to(Partner))]
pub struct PlaceAlert {
    pub id: i32,
    pub place_id: i32,
    pub user_id: i32,
    pub partner_id: i32,
    pub alert_type: String,
    pub triggered_at: DateTime<Utc>,
    pub acknowledged: bool,
}

#[derive(Debug, Clone, Insertable, Serialize, Deserialize)]
#[diesel(table_name = schema::place_alerts)]
pub struct NewPlaceAlert {
    pub place_id: i32,
    pub user_id: i32,
    pub partner_id: i32,
    pub alert_type: String,
}
