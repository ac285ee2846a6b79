use once_cell::sync::OnceCell;
use sea_orm::{ConnectionTrait, Database, DatabaseBackend, DatabaseConnection, Statement};
use std::path::Path;

static DB_CONN: OnceCell<DatabaseConnection> = OnceCell::new();

const CREATE_DICTIONARY_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS sys_dictionary (
        code TEXT PRIMARY KEY NOT NULL,
        name TEXT NOT NULL
    );
"#;

const CREATE_DICTIONARY_ENTRY_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS sys_dictionary_entry (
        id TEXT PRIMARY KEY NOT NULL,
        dict_code TEXT NOT NULL,
        dict_value TEXT NOT NULL,
        dict_label TEXT NOT NULL,
        parent_value TEXT,
        color TEXT,
        sort_order INTEGER NOT NULL DEFAULT 0,
        UNIQUE (dict_code, dict_value)
    );
"#;

const CREATE_DICTIONARY_ENTRY_INDEX: &str = r#"
    CREATE INDEX IF NOT EXISTS idx_sys_dictionary_entry_code
        ON sys_dictionary_entry (dict_code, sort_order);
"#;

/// SQLite URL for a database file; `mode=rwc` creates the file if missing.
pub fn sqlite_url(db_file: &Path) -> anyhow::Result<String> {
    let absolute_path = if db_file.is_absolute() {
        db_file.to_path_buf()
    } else {
        std::env::current_dir()?.join(db_file)
    };
    // Normalize path separators and ensure proper URL form on Windows
    let normalized = absolute_path.to_string_lossy().replace('\\', "/");
    let needs_leading_slash = !normalized.starts_with('/') && normalized.contains(':');
    let prefix = if needs_leading_slash { "/" } else { "" };
    Ok(format!("sqlite://{}{}?mode=rwc", prefix, normalized))
}

pub async fn initialize_database(db_file: &Path) -> anyhow::Result<()> {
    if let Some(parent) = db_file.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let db_url = sqlite_url(db_file)?;
    tracing::info!("Opening database: {}", db_url);

    let conn = Database::connect(&db_url).await?;
    ensure_schema(&conn).await?;

    DB_CONN
        .set(conn)
        .map_err(|_| anyhow::anyhow!("Database connection already initialized"))?;
    Ok(())
}

/// Minimal schema bootstrap (idempotent)
pub async fn ensure_schema(conn: &DatabaseConnection) -> anyhow::Result<()> {
    for sql in [
        CREATE_DICTIONARY_TABLE,
        CREATE_DICTIONARY_ENTRY_TABLE,
        CREATE_DICTIONARY_ENTRY_INDEX,
    ] {
        conn.execute(Statement::from_string(DatabaseBackend::Sqlite, sql.to_string()))
            .await?;
    }
    Ok(())
}

pub fn get_connection() -> &'static DatabaseConnection {
    DB_CONN
        .get()
        .expect("Database connection has not been initialized")
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[cfg(unix)]
    fn test_sqlite_url_for_absolute_path() {
        let url = sqlite_url(Path::new("/var/lib/app/dict.db")).unwrap();
        assert_eq!(url, "sqlite:///var/lib/app/dict.db?mode=rwc");
    }

    #[test]
    fn test_sqlite_url_for_relative_path_is_absolute() {
        let url = sqlite_url(Path::new("target/db/dict.db")).unwrap();
        assert!(url.starts_with("sqlite://"));
        assert!(url.ends_with("target/db/dict.db?mode=rwc"));
    }
}
