use log::debug;
use rusqlite::{params, Connection, OptionalExtension};
use subscription_core::ports::{Result, TimestampStore};

/// Key under which the last processing time is kept
pub const LAST_PROCESSED_KEY: &str = "lastProcessedTime";

/// SQLite implementation of the TimestampStore trait
pub struct SqliteTimestampStore {
    db_path: String,
}

impl SqliteTimestampStore {
    /// Creates a new SqliteTimestampStore with the given database path
    pub fn new(db_path: String) -> Self {
        Self { db_path }
    }

    /// Opens the database and makes sure the key-value table exists
    fn connect(&self) -> Result<Connection> {
        let conn = Connection::open(&self.db_path)?;
        conn.execute_batch(
            r#"
            CREATE TABLE IF NOT EXISTS kv_store (
                key TEXT PRIMARY KEY,
                value TEXT NOT NULL
            );
            "#,
        )?;
        Ok(conn)
    }
}

impl TimestampStore for SqliteTimestampStore {
    fn load(&self) -> Result<Option<String>> {
        let conn = self.connect()?;
        let value = conn
            .query_row(
                "SELECT value FROM kv_store WHERE key = ?1",
                params![LAST_PROCESSED_KEY],
                |row| row.get::<_, String>(0),
            )
            .optional()?;
        Ok(value)
    }

    fn save(&self, timestamp: &str) -> Result<()> {
        let conn = self.connect()?;
        conn.execute(
            r#"
            INSERT INTO kv_store (key, value) VALUES (?1, ?2)
            ON CONFLICT(key) DO UPDATE SET value = excluded.value
            "#,
            params![LAST_PROCESSED_KEY, timestamp],
        )?;
        debug!("Stored {} = {} in {}", LAST_PROCESSED_KEY, timestamp, self.db_path);
        Ok(())
    }
}
