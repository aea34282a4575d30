//! Per-test PostgreSQL databases cloned from a migrated template.
//!
//! One embedded cluster serves the whole test binary. The first caller
//! creates `hotels_template_<hash>` and applies the embedded migrations to it
//! through [`run_pending_migrations`]; every test then receives a fresh clone,
//! so seeded rows never leak between tests.

use std::path::PathBuf;
use std::sync::{Mutex, OnceLock};

use hotels_backend::outbound::persistence::run_pending_migrations;
use pg_embedded_setup_unpriv::test_support::{hash_directory, shared_cluster_handle};
use pg_embedded_setup_unpriv::{ClusterHandle, TemporaryDatabase};
use uuid::Uuid;

static TEMPLATE_LOCK: OnceLock<Mutex<()>> = OnceLock::new();

fn template_name() -> Result<String, String> {
    let migrations = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("migrations");
    let hash = hash_directory(migrations).map_err(|err| format!("hash migrations: {err}"))?;
    let short = hash.get(..8).unwrap_or(&hash);
    Ok(format!("hotels_template_{short}"))
}

fn migrate(url: &str) -> Result<(), String> {
    let runtime = tokio::runtime::Runtime::new().map_err(|err| err.to_string())?;
    runtime
        .block_on(run_pending_migrations(url))
        .map(|_applied| ())
        .map_err(|err| err.to_string())
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

/// Start (or reuse) the shared cluster and hand out a migrated database.
///
/// Must be called outside any Tokio runtime: migrating the template drives
/// its own runtime.
pub fn provision_migrated_database() -> Result<TemporaryDatabase, String> {
    let cluster = shared_cluster_handle().map_err(|err| format!("start cluster: {err:?}"))?;
    let template = ensure_template(cluster)?;
    let name = format!("hotels_test_{}", Uuid::new_v4().simple());
    cluster
        .temporary_database_from_template(name.as_str(), template.as_str())
        .map_err(|err| format!("clone template: {err:?}"))
}
