use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};
use std::{env, fs};

use rusqlite::{Connection, OptionalExtension, params};

use epochal_core::epoch_to_iso8601;

use crate::error::{Result, StoreError};
use crate::schema;
use crate::setting::{SettingName, SettingType};

/// File name of the settings database inside the data directory.
pub const SETTINGS_DB: &str = "settings.db";

/// Default base directory for all epochal storage.
pub fn default_base_dir() -> PathBuf {
    env::var("HOME")
        .or_else(|_| env::var("USERPROFILE"))
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("."))
        .join(".epochal")
}

fn now_unix_secs() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or_default()
}

/// A persisted setting as read back from the store.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Setting {
    pub name: String,
    pub kind: SettingType,
    pub value: String,
    pub updated_at: String,
}

pub struct Store {
    conn: Connection,
}

impl Store {
    pub fn open(path: &Path) -> Result<Self> {
        let conn = Connection::open(path)?;
        schema::initialize(&conn)?;
        Ok(Self { conn })
    }

    /// Open `settings.db` under `base_dir` (or the default), creating the
    /// directory if needed.
    pub fn open_in(base_dir: Option<&Path>) -> Result<Self> {
        let base = base_dir.map(PathBuf::from).unwrap_or_else(default_base_dir);
        fs::create_dir_all(&base).map_err(|e| {
            StoreError::InvalidData(format!("failed to create {}: {e}", base.display()))
        })?;
        let path = base.join(SETTINGS_DB);
        tracing::debug!("opening settings store {}", path.display());
        Self::open(&path)
    }

    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        schema::initialize(&conn)?;
        Ok(Self { conn })
    }

    /// Validate `value` against the setting's type and persist it, replacing
    /// any previous value and type stored under the same name.
    pub fn store_setting(&self, setting: &SettingName, value: &str) -> Result<()> {
        let normalized = setting.kind.normalize(value)?;
        self.conn.execute(
            "INSERT OR REPLACE INTO settings (name, type, value, updated_at) VALUES (?1, ?2, ?3, ?4)",
            params![
                setting.name,
                setting.kind.as_str(),
                normalized,
                epoch_to_iso8601(now_unix_secs()),
            ],
        )?;
        tracing::info!(
            "stored setting {setting} ({} bytes)",
            normalized.len()
        );
        Ok(())
    }

    pub fn fetch_setting(&self, name: &str) -> Result<Option<Setting>> {
        let row = self
            .conn
            .query_row(
                "SELECT name, type, value, updated_at FROM settings WHERE name = ?1",
                [name],
                |row| {
                    Ok((
                        row.get::<_, String>(0)?,
                        row.get::<_, String>(1)?,
                        row.get::<_, String>(2)?,
                        row.get::<_, String>(3)?,
                    ))
                },
            )
            .optional()?;

        row.map(|(name, kind, value, updated_at)| -> Result<Setting> {
            Ok(Setting {
                name,
                kind: kind.parse()?,
                value,
                updated_at,
            })
        })
        .transpose()
    }

    /// Remove a setting. Returns whether anything was removed.
    pub fn clear_setting(&self, name: &str) -> Result<bool> {
        let rows = self
            .conn
            .execute("DELETE FROM settings WHERE name = ?1", [name])?;
        Ok(rows > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn name(s: &str) -> SettingName {
        s.parse().unwrap()
    }

    #[test]
    fn test_store_and_fetch() {
        let store = Store::open_in_memory().unwrap();
        store.store_setting(&name("greeting"), "hello").unwrap();

        let setting = store.fetch_setting("greeting").unwrap().unwrap();
        assert_eq!(setting.kind, SettingType::String);
        assert_eq!(setting.value, "hello");
        assert!(setting.updated_at.ends_with('Z'));
        assert_eq!(setting.updated_at.len(), "1970-01-01T00:00:00Z".len());
    }

    #[test]
    fn test_fetch_missing() {
        let store = Store::open_in_memory().unwrap();
        assert!(store.fetch_setting("nope").unwrap().is_none());
    }

    #[test]
    fn test_overwrite_replaces_type() {
        let store = Store::open_in_memory().unwrap();
        store.store_setting(&name("n:int"), "5").unwrap();
        store.store_setting(&name("n:hex"), "0A:0b").unwrap();

        let setting = store.fetch_setting("n").unwrap().unwrap();
        assert_eq!(setting.kind, SettingType::Hex);
        assert_eq!(setting.value, "0a:0b");
        let rows: i64 = store
            .conn
            .query_row("SELECT count(*) FROM settings", [], |row| row.get(0))
            .unwrap();
        assert_eq!(rows, 1);
    }

    #[test]
    fn test_invalid_value_not_stored() {
        let store = Store::open_in_memory().unwrap();
        let err = store.store_setting(&name("n:uint"), "-3").unwrap_err();
        assert!(matches!(err, StoreError::InvalidValue { .. }));
        assert!(store.fetch_setting("n").unwrap().is_none());
    }

    #[test]
    fn test_multiline_blob() {
        let store = Store::open_in_memory().unwrap();
        let blob = "8be4df61-93ca-11d2-aa0d-00e098032b8c:BootOrder\n\
                    8be4df61-93ca-11d2-aa0d-00e098032b8c:Timeout\n";
        store.store_setting(&name("efivars"), blob).unwrap();
        assert_eq!(store.fetch_setting("efivars").unwrap().unwrap().value, blob);
    }

    #[test]
    fn test_clear() {
        let store = Store::open_in_memory().unwrap();
        store.store_setting(&name("b"), "2").unwrap();
        store.store_setting(&name("a:int"), "1").unwrap();

        assert!(store.clear_setting("a").unwrap());
        assert!(!store.clear_setting("a").unwrap());
        assert!(store.fetch_setting("a").unwrap().is_none());
        assert_eq!(store.fetch_setting("b").unwrap().unwrap().value, "2");
    }

    #[test]
    fn test_open_in_creates_directory() {
        let dir = tempfile::TempDir::new().unwrap();
        let base = dir.path().join("nested");
        {
            let store = Store::open_in(Some(&base)).unwrap();
            store.store_setting(&name("persist"), "yes").unwrap();
        }
        assert!(base.join(SETTINGS_DB).exists());

        let reopened = Store::open_in(Some(&base)).unwrap();
        assert_eq!(
            reopened.fetch_setting("persist").unwrap().unwrap().value,
            "yes"
        );
    }
}
