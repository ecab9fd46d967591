//! Authorization & local authorization list manager.
//!
//! Holds a bounded, persisted idTag authorization cache (so a transaction
//! can be locally authorized offline against a tag seen before) and the
//! local authorization list version counter updated by `SendLocalList`.

use std::collections::HashMap;
use std::sync::Mutex;

use rusqlite::{params, Connection};

use crate::common::common_types::{AuthorizationStatus, IdTagInfo};
use crate::error::StoreError;

/// Bounded, LRU-evicted in-memory cache over a persisted idTag table.
pub struct AuthorizationCache {
    conn: Mutex<Connection>,
    capacity: usize,
    order: Mutex<Vec<String>>,
}

impl AuthorizationCache {
    pub fn open(conn: Connection, capacity: usize) -> Result<Self, StoreError> {
        conn.execute(
            "CREATE TABLE IF NOT EXISTS auth_cache (id_tag TEXT PRIMARY KEY, info TEXT NOT NULL)",
            [],
        )?;
        let mut stmt = conn.prepare("SELECT id_tag FROM auth_cache")?;
        let order: Vec<String> = stmt.query_map([], |row| row.get(0))?.collect::<Result<_, _>>()?;
        drop(stmt);
        Ok(AuthorizationCache {
            conn: Mutex::new(conn),
            capacity: capacity.max(1),
            order: Mutex::new(order),
        })
    }

    pub fn get(&self, id_tag: &str) -> Result<Option<IdTagInfo>, StoreError> {
        let conn = self.conn.lock().expect("auth cache connection mutex poisoned");
        let mut stmt = conn.prepare("SELECT info FROM auth_cache WHERE id_tag = ?1")?;
        let mut rows = stmt.query(params![id_tag])?;
        if let Some(row) = rows.next()? {
            let text: String = row.get(0)?;
            Ok(serde_json::from_str(&text).ok())
        } else {
            Ok(None)
        }
    }

    /// Inserts or refreshes an entry, evicting the least recently inserted
    /// entry if the cache is at capacity.
    pub fn put(&self, id_tag: &str, info: &IdTagInfo) -> Result<(), StoreError> {
        let conn = self.conn.lock().expect("auth cache connection mutex poisoned");
        conn.execute(
            "INSERT INTO auth_cache (id_tag, info) VALUES (?1, ?2)
             ON CONFLICT(id_tag) DO UPDATE SET info = excluded.info",
            params![id_tag, serde_json::to_string(info).unwrap_or_default()],
        )?;
        drop(conn);

        let mut order = self.order.lock().expect("auth cache order mutex poisoned");
        order.retain(|t| t != id_tag);
        order.push(id_tag.to_string());
        if order.len() > self.capacity {
            let evicted = order.remove(0);
            let conn = self.conn.lock().expect("auth cache connection mutex poisoned");
            conn.execute("DELETE FROM auth_cache WHERE id_tag = ?1", params![evicted])?;
        }
        Ok(())
    }

    pub fn clear(&self) -> Result<(), StoreError> {
        self.conn.lock().expect("auth cache connection mutex poisoned").execute("DELETE FROM auth_cache", [])?;
        self.order.lock().expect("auth cache order mutex poisoned").clear();
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.order.lock().expect("auth cache order mutex poisoned").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Tracks the local authorization list's version counter and entries,
/// updated via `SendLocalList` (Differential/Full).
pub struct LocalAuthorizationList {
    version: Mutex<i32>,
    entries: Mutex<HashMap<String, AuthorizationStatus>>,
}

impl Default for LocalAuthorizationList {
    fn default() -> Self {
        LocalAuthorizationList {
            version: Mutex::new(0),
            entries: Mutex::new(HashMap::new()),
        }
    }
}

impl LocalAuthorizationList {
    pub fn version(&self) -> i32 {
        *self.version.lock().expect("local list version mutex poisoned")
    }

    pub fn replace_full(&self, version: i32, entries: HashMap<String, AuthorizationStatus>) {
        *self.version.lock().expect("local list version mutex poisoned") = version;
        *self.entries.lock().expect("local list entries mutex poisoned") = entries;
    }

    pub fn apply_differential(&self, version: i32, updates: HashMap<String, Option<AuthorizationStatus>>) {
        let mut entries = self.entries.lock().expect("local list entries mutex poisoned");
        for (id_tag, status) in updates {
            match status {
                Some(status) => {
                    entries.insert(id_tag, status);
                }
                None => {
                    entries.remove(&id_tag);
                }
            }
        }
        *self.version.lock().expect("local list version mutex poisoned") = version;
    }

    pub fn status_of(&self, id_tag: &str) -> Option<AuthorizationStatus> {
        self.entries.lock().expect("local list entries mutex poisoned").get(id_tag).cloned()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn cache(capacity: usize) -> AuthorizationCache {
        AuthorizationCache::open(Connection::open_in_memory().unwrap(), capacity).unwrap()
    }

    fn info(status: AuthorizationStatus) -> IdTagInfo {
        IdTagInfo {
            expiry_date: None,
            parent_id_tag: None,
            status,
        }
    }

    #[test]
    fn put_then_get_roundtrips() {
        let cache = cache(4);
        cache.put("TAG1", &info(AuthorizationStatus::Accepted)).unwrap();
        let fetched = cache.get("TAG1").unwrap().unwrap();
        assert!(matches!(fetched.status, AuthorizationStatus::Accepted));
    }

    #[test]
    fn eviction_drops_the_oldest_entry_at_capacity() {
        let cache = cache(2);
        cache.put("A", &info(AuthorizationStatus::Accepted)).unwrap();
        cache.put("B", &info(AuthorizationStatus::Accepted)).unwrap();
        cache.put("C", &info(AuthorizationStatus::Accepted)).unwrap();
        assert!(cache.get("A").unwrap().is_none());
        assert!(cache.get("B").unwrap().is_some());
        assert!(cache.get("C").unwrap().is_some());
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn full_local_list_replaces_entries_and_bumps_version() {
        let list = LocalAuthorizationList::default();
        let mut entries = HashMap::new();
        entries.insert("TAG1".to_string(), AuthorizationStatus::Accepted);
        list.replace_full(5, entries);
        assert_eq!(list.version(), 5);
        assert!(matches!(list.status_of("TAG1"), Some(AuthorizationStatus::Accepted)));
    }

    #[test]
    fn differential_update_can_remove_entries() {
        let list = LocalAuthorizationList::default();
        let mut entries = HashMap::new();
        entries.insert("TAG1".to_string(), AuthorizationStatus::Accepted);
        list.replace_full(1, entries);

        let mut updates = HashMap::new();
        updates.insert("TAG1".to_string(), None);
        updates.insert("TAG2".to_string(), Some(AuthorizationStatus::Blocked));
        list.apply_differential(2, updates);

        assert_eq!(list.version(), 2);
        assert!(list.status_of("TAG1").is_none());
        assert!(matches!(list.status_of("TAG2"), Some(AuthorizationStatus::Blocked)));
    }
}
