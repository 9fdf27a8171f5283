use rusqlite::{Connection, OptionalExtension, Result};

/// Ensure that the `log` table exists. Every other migration records itself
/// there, so it is created unconditionally first.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

fn is_applied(conn: &Connection, version: &str) -> Result<bool> {
    let mut chk = conn.prepare(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    Ok(chk.query_row([version], |_| Ok(())).optional()?.is_some())
}

fn mark_applied(conn: &Connection, version: &str, message: &str) -> Result<()> {
    conn.execute(
        "INSERT INTO log (date, operation, target, message)
         VALUES (datetime('now'), 'migration_applied', ?1, ?2)",
        [version, message],
    )?;
    Ok(())
}

fn migrate_create_kv_table(conn: &Connection) -> Result<bool> {
    let version = "20250508_0001_create_kv";
    if is_applied(conn, version)? {
        return Ok(false);
    }

    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS kv (
            key   TEXT PRIMARY KEY,
            value TEXT NOT NULL
        );
        "#,
    )?;

    mark_applied(conn, version, "Created kv table for session state")?;
    Ok(true)
}

fn migrate_add_log_operation_index(conn: &Connection) -> Result<bool> {
    let version = "20250512_0002_log_operation_index";
    if is_applied(conn, version)? {
        return Ok(false);
    }

    conn.execute_batch("CREATE INDEX IF NOT EXISTS idx_log_operation ON log(operation);")?;

    mark_applied(conn, version, "Indexed log by operation")?;
    Ok(true)
}

/// Public entry point: run all pending migrations.
/// Returns how many were applied on this call.
pub fn run_pending_migrations(conn: &Connection) -> Result<usize> {
    ensure_log_table(conn)?;

    let applied = [
        migrate_create_kv_table(conn)?,
        migrate_add_log_operation_index(conn)?,
    ];

    Ok(applied.iter().filter(|a| **a).count())
}
