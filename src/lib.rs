//! Persisted entity shapes and insert validation for a location-sharing
//! service.
//!
//! Six entities (users, partners, locations, settings, places, place
//! alerts), each with a full storage shape and a restricted insert shape.
//! Collaborators validate creation input through `crate::validate` and
//! persist it through `crate::services::store`; everything else (HTTP,
//! auth, geofence evaluation, notifications) lives outside this crate.

pub mod config;
pub mod db {
    pub mod models;
}
pub mod models {
    pub mod input;
}
pub mod schema;
pub mod validate;
pub mod services {
    pub mod demo;
    pub mod store;
}

use diesel::prelude::*;
use diesel::PgConnection;
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};
use log::info;

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

pub fn establish_connection(database_url: &str) -> Result<PgConnection, String> {
    PgConnection::establish(database_url).map_err(|e| format!("DB connection failed: {}", e))
}

pub fn apply_database_migrations(conn: &mut PgConnection) -> Result<(), String> {
    match conn.run_pending_migrations(MIGRATIONS) {
        Ok(applied) => {
            if applied.is_empty() {
                info!("Database schema is up to date; no migrations were applied");
            } else {
                let names = applied.iter().map(|v| v.to_string()).collect::<Vec<_>>().join(", ");
                info!("Applied {} database migration(s): {}", applied.len(), names);
            }
            Ok(())
        }
        Err(e) => Err(format!("Applying database migrations failed: {}", e)),
    }
}
