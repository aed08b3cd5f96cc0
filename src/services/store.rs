//! Creation path: turn validated insert shapes into persisted rows.
//!
//! Each entity gets exactly one operation, an insert returning the full row
//! as stored. Updates, deletes and queries belong to collaborators outside
//! this crate.

use diesel::prelude::*;
use diesel::result::DatabaseErrorKind;
use diesel::PgConnection;
use log::debug;

use crate::db::models as dbm;
use crate::models::input::{
    LocationInsert, PartnerInsert, PlaceAlertInsert, PlaceInsert, SettingsInsert, UserInsert,
};

#[derive(Debug)]
pub enum StoreError {
    /// Unique violation on `users.username` or `users.email`.
    DuplicateUser { field: &'static str },
    Db(diesel::result::Error),
}

impl core::fmt::Display for StoreError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            StoreError::DuplicateUser { field } => write!(f, "user {} already taken", field),
            StoreError::Db(e) => write!(f, "database error: {}", e),
        }
    }
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StoreError::Db(e) => Some(e),
            _ => None,
        }
    }
}

impl From<diesel::result::Error> for StoreError {
    fn from(value: diesel::result::Error) -> Self {
        StoreError::Db(value)
    }
}

pub fn create_user(conn: &mut PgConnection, insert: UserInsert) -> Result<dbm::User, StoreError> {
    use crate::schema::users::dsl as U;

    let row = insert.into_row();
    debug!("Store: inserting user {}", row.username);
    diesel::insert_into(U::users)
        .values(&row)
        .returning(dbm::User::as_returning())
        .get_result(conn)
        .map_err(map_user_insert_error)
}

fn map_user_insert_error(e: diesel::result::Error) -> StoreError {
    if let diesel::result::Error::DatabaseError(DatabaseErrorKind::UniqueViolation, info) = &e {
        let field = match info.constraint_name() {
            Some(c) if c.contains("email") => "email",
            _ => "username",
        };
        return StoreError::DuplicateUser { field };
    }
    StoreError::Db(e)
}

pub fn create_partner(conn: &mut PgConnection, insert: PartnerInsert) -> Result<dbm::Partner, StoreError> {
    use crate::schema::partners::dsl as P;

    let row = insert.into_row();
    debug!(
        "Store: inserting partnership {} -> {} ({})",
        row.user_id, row.partner_user_id, row.status
    );
    let created = diesel::insert_into(P::partners)
        .values(&row)
        .returning(dbm::Partner::as_returning())
        .get_result(conn)?;
    Ok(created)
}

pub fn create_location(conn: &mut PgConnection, insert: LocationInsert) -> Result<dbm::Location, StoreError> {
    use crate::schema::locations::dsl as L;

    let row = insert.into_row();
    debug!(
        "Store: inserting location sample for user {} ({:.5}, {:.5})",
        row.user_id, row.latitude, row.longitude
    );
    let created = diesel::insert_into(L::locations)
        .values(&row)
        .returning(dbm::Location::as_returning())
        .get_result(conn)?;
    Ok(created)
}

/// Batch variant used by the demo seeder; position samples arrive in bulk.
pub fn insert_locations(conn: &mut PgConnection, rows: &[dbm::NewLocation]) -> Result<usize, StoreError> {
    use crate::schema::locations::dsl as L;

    if rows.is_empty() {
        return Ok(0);
    }
    let inserted = diesel::insert_into(L::locations).values(rows).execute(conn)?;
    Ok(inserted)
}

pub fn create_settings(conn: &mut PgConnection, insert: SettingsInsert) -> Result<dbm::Settings, StoreError> {
    use crate::schema::settings::dsl as S;

    let row = insert.into_row();
    debug!("Store: inserting settings for user {}", row.user_id);
    let created = diesel::insert_into(S::settings)
        .values(&row)
        .returning(dbm::Settings::as_returning())
        .get_result(conn)?;
    Ok(created)
}

pub fn create_place(conn: &mut PgConnection, insert: PlaceInsert) -> Result<dbm::Place, StoreError> {
    use crate::schema::places::dsl as P;

    let row = insert.into_row();
    debug!(
        "Store: inserting place \"{}\" for user {} (radius {} m)",
        row.name, row.user_id, row.radius
    );
    let created = diesel::insert_into(P::places)
        .values(&row)
        .returning(dbm::Place::as_returning())
        .get_result(conn)?;
    Ok(created)
}

pub fn create_place_alert(conn: &mut PgConnection, insert: PlaceAlertInsert) -> Result<dbm::PlaceAlert, StoreError> {
    use crate::schema::place_alerts::dsl as A;

    let row = insert.into_row();
    debug!(
        "Store: inserting {} alert for place {} (partner {})",
        row.alert_type, row.place_id, row.partner_id
    );
    let created = diesel::insert_into(A::place_alerts)
        .values(&row)
        .returning(dbm::PlaceAlert::as_returning())
        .get_result(conn)?;
    Ok(created)
}
