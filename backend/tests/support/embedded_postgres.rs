//! Embedded PostgreSQL provisioning for repository tests.
//!
//! One cluster is shared by every test in the binary. A template database
//! carrying the current migrations is created once, keyed by a hash of the
//! `migrations/` directory, and each test receives its own clone of it so
//! tests never observe each other's rows.

use std::path::PathBuf;
use std::sync::{Mutex, OnceLock};
use std::time::Duration;

use diesel::Connection;
use diesel::pg::PgConnection;
use diesel_migrations::MigrationHarness;
use pg_embedded_setup_unpriv::test_support::hash_directory;
use pg_embedded_setup_unpriv::{ClusterHandle, TemporaryDatabase};
use users_api::outbound::persistence::MIGRATIONS;
use uuid::Uuid;

const ATTEMPTS: usize = 5;
const RETRY_DELAY: Duration = Duration::from_millis(500);
const TEMPLATE_PREFIX: &str = "users_api_template";

static TEMPLATE_LOCK: OnceLock<Mutex<()>> = OnceLock::new();

/// Start, or reuse, the process-wide embedded cluster.
///
/// Binary downloads fail intermittently when several suites start at once,
/// so bootstrap is retried a few times before giving up.
pub fn shared_cluster() -> Result<&'static ClusterHandle, String> {
    let mut last_error = String::new();
    for attempt in 1..=ATTEMPTS {
        match pg_embedded_setup_unpriv::test_support::shared_cluster_handle() {
            Ok(handle) => return Ok(handle),
            Err(error) => last_error = format!("attempt {attempt}/{ATTEMPTS}: {error:?}"),
        }
        if attempt < ATTEMPTS {
            std::thread::sleep(RETRY_DELAY);
        }
    }
    Err(last_error)
}

fn template_name() -> Result<String, String> {
    let migrations = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("migrations");
    let hash = hash_directory(migrations).map_err(|err| format!("hash migrations: {err:?}"))?;
    let short = hash.get(..8).unwrap_or(&hash);
    Ok(format!("{TEMPLATE_PREFIX}_{short}"))
}

fn migrate(url: &str) -> Result<(), String> {
    let mut conn =
        PgConnection::establish(url).map_err(|err| format!("connect for migrations: {err}"))?;
    conn.run_pending_migrations(MIGRATIONS)
        .map_err(|err| format!("apply migrations: {err}"))?;
    Ok(())
}

fn ensure_template(cluster: &ClusterHandle) -> Result<String, String> {
    let name = template_name()?;
    let _guard = TEMPLATE_LOCK
        .get_or_init(|| Mutex::new(()))
        .lock()
        .unwrap_or_else(|err| err.into_inner());

    let exists = cluster
        .database_exists(name.as_str())
        .map_err(|err| format!("template lookup: {err:?}"))?;
    if !exists {
        cluster
            .create_database(name.as_str())
            .map_err(|err| format!("create template: {err:?}"))?;
        migrate(&cluster.connection().database_url(&name))?;
    }
    Ok(name)
}

fn clone_template(cluster: &ClusterHandle) -> Result<TemporaryDatabase, String> {
    let template = ensure_template(cluster)?;
    let name = format!("test_{}", Uuid::new_v4().simple());
    cluster
        .temporary_database_from_template(name.as_str(), template.as_str())
        .map_err(|err| format!("clone {template} into {name}: {err:?}"))
}

/// Clone a fresh, fully migrated database for one test.
///
/// Cloning fails while another session still holds the template open, so
/// it is retried briefly. The database is dropped with the returned guard.
pub fn provision_migrated_database(cluster: &ClusterHandle) -> Result<TemporaryDatabase, String> {
    let mut last_error = String::new();
    for attempt in 1..=ATTEMPTS {
        match clone_template(cluster) {
            Ok(database) => return Ok(database),
            Err(error) => last_error = format!("attempt {attempt}/{ATTEMPTS}: {error}"),
        }
        if attempt < ATTEMPTS {
            std::thread::sleep(RETRY_DELAY);
        }
    }
    Err(last_error)
}
