//! Deterministic demo-data seeder for development databases.
//!
//! Seeds two users in a (pending) sharing relationship, per-user settings,
//! a few geofenced places and a day-long random-walk location trail. Every
//! step checks for existing rows first, so re-running against the same
//! database is a no-op.

use chrono::{Duration, Utc};
use diesel::prelude::*;
use diesel::PgConnection;
use log::info;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::db::models as dbm;
use crate::models::input::{
    Activity, AlertType, PartnerInsert, PlaceAlertInsert, PlaceInsert, SettingsInsert, UserInsert,
};
use crate::services::store;

const DEMO_USERS: [(&str, &str); 2] = [
    ("alice.demo", "alice@locshare.invalid"),
    ("bob.demo", "bob@locshare.invalid"),
];

// name, latitude, longitude, radius (m)
const DEMO_PLACES: [(&str, f64, f64, i32); 3] = [
    ("Home", 46.0569, 14.5058, 100),
    ("Work", 46.0511, 14.5069, 150),
    ("Gym", 46.0662, 14.5124, 75),
];

const TRAIL_HOURS: i64 = 24;
const STEP_MINUTES: i64 = 5;

pub fn run(conn: &mut PgConnection) -> Result<(), String> {
    let alice = ensure_user(conn, DEMO_USERS[0].0, DEMO_USERS[0].1)?;
    let bob = ensure_user(conn, DEMO_USERS[1].0, DEMO_USERS[1].1)?;
    let partnership = ensure_partnership(conn, alice.id, bob.id)?;
    ensure_settings(conn, alice.id)?;
    ensure_settings(conn, bob.id)?;

    let places = ensure_places(conn, alice.id)?;
    if let Some(home) = places.first() {
        ensure_alert(conn, home.id, alice.id, partnership.id)?;
    }
    let samples = seed_trail(conn, alice.id)?;

    info!(
        "Demo: seeded users {} and {} ({} place(s), {} location sample(s))",
        alice.username,
        bob.username,
        places.len(),
        samples
    );
    Ok(())
}

fn ensure_user(conn: &mut PgConnection, username: &str, email: &str) -> Result<dbm::User, String> {
    use crate::schema::users::dsl as U;

    let existing: Option<dbm::User> = U::users
        .filter(U::username.eq(username))
        .first(conn)
        .optional()
        .map_err(|e| format!("fetch demo user failed: {}", e))?;
    if let Some(user) = existing {
        return Ok(user);
    }

    let insert = UserInsert {
        username: username.to_string(),
        email: email.to_string(),
    };
    store::create_user(conn, insert).map_err(|e| format!("seed user {} failed: {}", username, e))
}

fn ensure_partnership(conn: &mut PgConnection, user_id: i32, partner_user_id: i32) -> Result<dbm::Partner, String> {
    use crate::schema::partners::dsl as P;

    let existing: Option<dbm::Partner> = P::partners
        .filter(P::user_id.eq(user_id).and(P::partner_user_id.eq(partner_user_id)))
        .first(conn)
        .optional()
        .map_err(|e| format!("fetch demo partnership failed: {}", e))?;
    if let Some(partner) = existing {
        return Ok(partner);
    }

    // Creation always yields a pending partnership; acceptance is a
    // transition owned by a collaborator outside this crate.
    let insert = PartnerInsert {
        user_id,
        partner_user_id,
    };
    store::create_partner(conn, insert).map_err(|e| format!("seed partnership failed: {}", e))
}

fn ensure_settings(conn: &mut PgConnection, user_id: i32) -> Result<(), String> {
    use crate::schema::settings::dsl as S;

    let count: i64 = S::settings
        .filter(S::user_id.eq(user_id))
        .count()
        .get_result(conn)
        .map_err(|e| format!("count demo settings failed: {}", e))?;
    if count > 0 {
        return Ok(());
    }

    let insert = SettingsInsert {
        user_id,
        battery_alerts: None,
        location_sharing: None,
    };
    store::create_settings(conn, insert)
        .map(|_| ())
        .map_err(|e| format!("seed settings for user {} failed: {}", user_id, e))
}

fn ensure_places(conn: &mut PgConnection, user_id: i32) -> Result<Vec<dbm::Place>, String> {
    use crate::schema::places::dsl as P;

    let mut out = Vec::with_capacity(DEMO_PLACES.len());
    for (name, latitude, longitude, radius) in DEMO_PLACES {
        let existing: Option<dbm::Place> = P::places
            .filter(P::user_id.eq(user_id).and(P::name.eq(name)))
            .first(conn)
            .optional()
            .map_err(|e| format!("fetch demo place failed: {}", e))?;
        if let Some(place) = existing {
            out.push(place);
            continue;
        }

        let insert = PlaceInsert {
            user_id,
            name: name.to_string(),
            latitude,
            longitude,
            radius: Some(radius),
            alert_on_entry: None,
            alert_on_exit: None,
        };
        let place =
            store::create_place(conn, insert).map_err(|e| format!("seed place {} failed: {}", name, e))?;
        out.push(place);
    }
    Ok(out)
}

fn ensure_alert(conn: &mut PgConnection, place_id: i32, user_id: i32, partner_id: i32) -> Result<(), String> {
    use crate::schema::place_alerts::dsl as A;

    let count: i64 = A::place_alerts
        .filter(A::place_id.eq(place_id))
        .count()
        .get_result(conn)
        .map_err(|e| format!("count demo alerts failed: {}", e))?;
    if count > 0 {
        return Ok(());
    }

    let insert = PlaceAlertInsert {
        place_id,
        user_id,
        partner_id,
        alert_type: AlertType::Entry,
    };
    store::create_place_alert(conn, insert)
        .map(|_| ())
        .map_err(|e| format!("seed place alert failed: {}", e))
}

fn seed_trail(conn: &mut PgConnection, user_id: i32) -> Result<usize, String> {
    use crate::schema::locations::dsl as L;

    let count: i64 = L::locations
        .filter(L::user_id.eq(user_id))
        .count()
        .get_result(conn)
        .map_err(|e| format!("count demo locations failed: {}", e))?;
    if count > 0 {
        return Ok(0);
    }

    let mut rng = SmallRng::seed_from_u64(0x10C5_4A2E_0420_2026u64);
    let (_, mut latitude, mut longitude, _) = DEMO_PLACES[0];
    let end = Utc::now();
    let mut ts = end - Duration::hours(TRAIL_HOURS);
    let step = Duration::minutes(STEP_MINUTES);
    let mut battery = 100i32;

    let mut rows = Vec::with_capacity((TRAIL_HOURS * 60 / STEP_MINUTES) as usize);
    while ts < end {
        latitude += rng.random_range(-0.0006..0.0006);
        longitude += rng.random_range(-0.0008..0.0008);
        if rows.len() % 36 == 0 {
            battery = (battery - 1).max(5);
        }

        let speed_kmh = rng.random_range(0.0..6.0);
        let activity = if speed_kmh < 0.5 {
            Activity::Stationary
        } else {
            Activity::Walking
        };

        let mut row = dbm::NewLocation::new(user_id, latitude, longitude, ts);
        row.accuracy = Some(rng.random_range(5.0..25.0));
        row.battery_level = Some(battery);
        row.speed = Some(speed_kmh);
        row.heading = Some(rng.random_range(0.0..360.0));
        row.altitude = Some(rng.random_range(290.0..310.0));
        row.activity = Some(activity.as_str().to_string());
        rows.push(row);

        ts += step;
    }

    store::insert_locations(conn, &rows).map_err(|e| format!("seed location trail failed: {}", e))
}
