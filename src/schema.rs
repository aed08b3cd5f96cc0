//! Handwritten Diesel schema declarations used by model structs.
//!
//! Migrations define the actual tables, defaults and constraints. This module
//! only provides `diesel::table!` declarations so we can derive
//! Insertable/Queryable in a type-safe way without running
//! `diesel print-schema`.

diesel::table! {
    users (id) {
        id -> Integer,
        username -> Text,
        email -> Text,
    }
}

// Sharing relationship between two users, gated by `status`.
diesel::table! {
    partners (id) {
        id -> Integer,
        user_id -> Integer,
        partner_user_id -> Integer,
        status -> Text, // pending | accepted | blocked
        created_at -> Timestamptz,
    }
}

// Append-only log of position samples per user.
diesel::table! {
    locations (id) {
        id -> Integer,
        user_id -> Integer,
        latitude -> Double,
        longitude -> Double,
        accuracy -> Nullable<Double>,
        battery_level -> Nullable<Integer>,
        speed -> Nullable<Double>, // km/h
        heading -> Nullable<Double>, // degrees
        altitude -> Nullable<Double>, // meters
        activity -> Nullable<Text>, // stationary | walking | running | cycling | driving
        is_location_sharing -> Bool,
        timestamp -> Timestamptz,
    }
}

// One settings row per user (intended; not enforced by a unique constraint).
diesel::table! {
    settings (id) {
        id -> Integer,
        user_id -> Integer,
        battery_alerts -> Bool,
        location_sharing -> Bool,
    }
}

// Named circular geofence region owned by a user.
diesel::table! {
    places (id) {
        id -> Integer,
        user_id -> Integer,
        name -> Text,
        latitude -> Double,
        longitude -> Double,
        radius -> Integer, // meters
        alert_on_entry -> Bool,
        alert_on_exit -> Bool,
        created_at -> Timestamptz,
    }
}

diesel::table! {
    place_alerts (id) {
        id -> Integer,
        place_id -> Integer,
        user_id -> Integer,
        partner_id -> Integer,
        alert_type -> Text, // entry | exit
        triggered_at -> Timestamptz,
        acknowledged -> Bool,
    }
}

// `partners.partner_user_id` also points at `users`, but joinable! supports
// one edge per table pair; queries on the second edge alias instead.
diesel::joinable!(partners -> users (user_id));
diesel::joinable!(locations -> users (user_id));
diesel::joinable!(settings -> users (user_id));
diesel::joinable!(places -> users (user_id));
diesel::joinable!(place_alerts -> places (place_id));
diesel::joinable!(place_alerts -> users (user_id));
diesel::joinable!(place_alerts -> partners (partner_id));

diesel::allow_tables_to_appear_in_same_query!(
    users,
    partners,
    locations,
    settings,
    places,
    place_alerts,
);
