//! Whole-store backup and restore
//!
//! Backup runs against the live pool (`VACUUM INTO` produces a consistent
//! copy). Restore replaces the store file and must only run while no server
//! holds the database open.

use std::path::{Path, PathBuf};

use sqlx::SqlitePool;

use super::repository::{RepoError, RepoResult};

/// First 16 bytes of every SQLite 3 database file
const SQLITE_HEADER: &[u8; 16] = b"SQLite format 3\0";

/// Write a consistent copy of the store to `target`
///
/// `target` must not exist yet.
pub async fn backup_to(pool: &SqlitePool, target: &Path) -> RepoResult<()> {
    if target.exists() {
        return Err(RepoError::Validation(format!(
            "Backup target already exists: {}",
            target.display()
        )));
    }
    if let Some(parent) = target.parent()
        && !parent.as_os_str().is_empty()
    {
        tokio::fs::create_dir_all(parent)
            .await
            .map_err(|e| RepoError::Database(format!("Failed to create backup directory: {e}")))?;
    }

    let target_str = target.to_string_lossy().to_string();
    sqlx::query("VACUUM INTO ?")
        .bind(&target_str)
        .execute(pool)
        .await?;

    tracing::info!(target = %target.display(), "Database backup written");
    Ok(())
}

/// Replace the store file at `db_path` with the backup at `source`
pub async fn restore_from(source: &Path, db_path: &Path) -> RepoResult<()> {
    let bytes = tokio::fs::read(source)
        .await
        .map_err(|e| RepoError::NotFound(format!("Backup {}: {e}", source.display())))?;
    if !bytes.starts_with(SQLITE_HEADER) {
        return Err(RepoError::Validation(format!(
            "{} is not a SQLite database",
            source.display()
        )));
    }

    if let Some(parent) = db_path.parent()
        && !parent.as_os_str().is_empty()
    {
        tokio::fs::create_dir_all(parent)
            .await
            .map_err(|e| RepoError::Database(format!("Failed to create database directory: {e}")))?;
    }

    // write next to the store, then swap it in with a rename
    let staged = sidecar_path(db_path, "-restore");
    if let Err(e) = tokio::fs::write(&staged, &bytes).await {
        discard_staged(&staged).await;
        return Err(RepoError::Database(format!("Failed to stage backup: {e}")));
    }
    if let Err(e) = tokio::fs::rename(&staged, db_path).await {
        discard_staged(&staged).await;
        return Err(RepoError::Database(format!("Failed to replace database: {e}")));
    }

    // stale WAL frames would be replayed over the restored file
    for sidecar in [sidecar_path(db_path, "-wal"), sidecar_path(db_path, "-shm")] {
        match tokio::fs::remove_file(&sidecar).await {
            Ok(()) => tracing::debug!(path = %sidecar.display(), "Removed stale sidecar file"),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => {
                return Err(RepoError::Database(format!(
                    "Database restored but {} could not be removed: {e}",
                    sidecar.display()
                )));
            }
        }
    }

    tracing::info!(
        source = %source.display(),
        db = %db_path.display(),
        "Database restored from backup"
    );
    Ok(())
}

async fn discard_staged(staged: &Path) {
    if let Err(e) = tokio::fs::remove_file(staged).await
        && e.kind() != std::io::ErrorKind::NotFound
    {
        tracing::warn!(path = %staged.display(), error = %e, "Failed to remove staged restore file");
    }
}

fn sidecar_path(db_path: &Path, suffix: &str) -> PathBuf {
    let mut name = db_path.as_os_str().to_os_string();
    name.push(suffix);
    PathBuf::from(name)
}
