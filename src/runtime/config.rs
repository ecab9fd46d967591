//! Stack & OCPP configuration stores.
//!
//! `StackConfig` wraps an INI file the way the original's `IniFile` does: a
//! read-only-at-runtime view over sections of stack tunables (database
//! path, identity, retry intervals, security profile). `OcppConfig` is the
//! closed, typed set of OCPP 1.6 configuration keys (`OcppConfig.h`/
//! `IOcppConfig.h`), persisted in the embedded database so
//! `ChangeConfiguration.req`/`GetConfiguration.req` read and write through
//! it with the attribute semantics spec.md §3.6 requires.

use std::path::Path;
use std::sync::Mutex;

use ini::Ini;
use rusqlite::{params, Connection};

use crate::error::StoreError;
use crate::server_init::{ChangeConfigurationStatus, KeyValue};

/// Read-only-at-runtime stack tunables: database path, schema path,
/// connection URL, identity, TLS material, retry intervals, security
/// profile (spec.md §3.6). Loaded once at startup; `ChangeConfiguration`
/// never touches this store, only [`OcppConfig`].
pub struct StackConfig {
    ini: Ini,
}

impl StackConfig {
    pub fn load(path: &Path) -> Result<Self, StoreError> {
        let ini = Ini::load_from_file(path).map_err(|e| StoreError::Io(e.to_string()))?;
        Ok(StackConfig { ini })
    }

    pub fn get<'a>(&'a self, section: &str, key: &str) -> Option<&'a str> {
        self.ini.section(Some(section)).and_then(|s| s.get(key))
    }

    pub fn get_string(&self, section: &str, key: &str, default: &str) -> String {
        self.get(section, key).unwrap_or(default).to_string()
    }

    pub fn get_u32(&self, section: &str, key: &str, default: u32) -> u32 {
        self.get(section, key).and_then(|v| v.parse().ok()).unwrap_or(default)
    }

    pub fn get_bool(&self, section: &str, key: &str, default: bool) -> bool {
        self.get(section, key).and_then(|v| v.parse().ok()).unwrap_or(default)
    }
}

/// Attribute flags the spec assigns each OCPP 1.6 configuration key:
/// `{Read, Write, RebootRequired, OcppStandard}`.
#[derive(Debug, Clone, Copy)]
pub struct KeyAttributes {
    pub readable: bool,
    pub writable: bool,
    pub reboot_required: bool,
    pub ocpp_standard: bool,
}

struct KeyDef {
    name: &'static str,
    attrs: KeyAttributes,
    default: &'static str,
}

const fn rw(reboot_required: bool) -> KeyAttributes {
    KeyAttributes { readable: true, writable: true, reboot_required, ocpp_standard: true }
}

const fn ro() -> KeyAttributes {
    KeyAttributes { readable: true, writable: false, reboot_required: false, ocpp_standard: true }
}

/// The closed set of OCPP 1.6 Core Profile configuration keys this stack
/// supports, mirroring `OcppConfig.h`'s generic getter/setter surface.
/// Keys not in this table are unknown to `getConfiguration`/
/// `setConfiguration`.
const KEYS: &[KeyDef] = &[
    KeyDef { name: "AllowOfflineTxForUnknownId", attrs: rw(false), default: "false" },
    KeyDef { name: "AuthorizationCacheEnabled", attrs: rw(false), default: "true" },
    KeyDef { name: "AuthorizeRemoteTxRequests", attrs: rw(false), default: "false" },
    KeyDef { name: "BlinkRepeat", attrs: rw(false), default: "0" },
    KeyDef { name: "ClockAlignedDataInterval", attrs: rw(false), default: "900" },
    KeyDef { name: "ConnectionTimeOut", attrs: rw(false), default: "60" },
    KeyDef { name: "GetConfigurationMaxKeys", attrs: ro(), default: "50" },
    KeyDef { name: "HeartbeatInterval", attrs: rw(false), default: "86400" },
    KeyDef { name: "LocalAuthorizeOffline", attrs: rw(false), default: "true" },
    KeyDef { name: "LocalPreAuthorize", attrs: rw(false), default: "false" },
    KeyDef { name: "MeterValuesAlignedData", attrs: rw(false), default: "Energy.Active.Import.Register" },
    KeyDef { name: "MeterValuesSampledData", attrs: rw(false), default: "Energy.Active.Import.Register" },
    KeyDef { name: "MeterValueSampleInterval", attrs: rw(false), default: "60" },
    KeyDef { name: "MinimumStatusDuration", attrs: rw(false), default: "0" },
    KeyDef { name: "NumberOfConnectors", attrs: ro(), default: "1" },
    KeyDef { name: "ResetRetries", attrs: rw(false), default: "3" },
    KeyDef { name: "StopTransactionOnEVSideDisconnect", attrs: rw(false), default: "true" },
    KeyDef { name: "StopTransactionOnInvalidId", attrs: rw(false), default: "true" },
    KeyDef { name: "StopTxnAlignedData", attrs: rw(false), default: "" },
    KeyDef { name: "StopTxnSampledData", attrs: rw(false), default: "" },
    KeyDef { name: "TransactionMessageAttempts", attrs: rw(false), default: "3" },
    KeyDef { name: "TransactionMessageRetryInterval", attrs: rw(false), default: "60" },
    // Security profile changes require a reboot-equivalent reconnect cycle.
    KeyDef { name: "SecurityProfile", attrs: rw(true), default: "1" },
];

fn find_key(name: &str) -> Option<&'static KeyDef> {
    KEYS.iter().find(|k| k.name.eq_ignore_ascii_case(name))
}

/// Persisted store for the closed OCPP 1.6 configuration key set.
///
/// Write semantics per spec.md §3.6: a reboot-required key's write
/// succeeds and reports `RebootRequired`; a key whose name ends in
/// `Interval` rejects negative values; unknown keys are `NotSupported`;
/// read-only keys are `Rejected`.
pub struct OcppConfig {
    conn: Mutex<Connection>,
}

impl OcppConfig {
    pub fn open(conn: Connection) -> Result<Self, StoreError> {
        conn.execute(
            "CREATE TABLE IF NOT EXISTS ocpp_config (key TEXT PRIMARY KEY, value TEXT NOT NULL)",
            [],
        )?;
        Ok(OcppConfig { conn: Mutex::new(conn) })
    }

    fn stored_value(&self, def: &KeyDef) -> Result<String, StoreError> {
        let conn = self.conn.lock().expect("ocpp config mutex poisoned");
        let mut stmt = conn.prepare("SELECT value FROM ocpp_config WHERE key = ?1")?;
        let mut rows = stmt.query(params![def.name])?;
        if let Some(row) = rows.next()? {
            Ok(row.get(0)?)
        } else {
            Ok(def.default.to_string())
        }
    }

    /// Returns the known/unknown split `GetConfiguration.req` needs. An
    /// empty `keys` slice returns every known key, matching "list
    /// empty or missing" in the message's documented behaviour.
    pub fn get_configuration(&self, keys: &[String]) -> Result<(Vec<KeyValue>, Vec<String>), StoreError> {
        let requested: Vec<&'static KeyDef> = if keys.is_empty() {
            KEYS.iter().collect()
        } else {
            keys.iter().filter_map(|k| find_key(k)).collect()
        };

        let mut values = Vec::with_capacity(requested.len());
        for def in requested {
            let value = self.stored_value(def)?;
            values.push(KeyValue { key: def.name.to_string(), readonly: !def.attrs.writable, value: Some(value) });
        }

        let unknown = if keys.is_empty() {
            Vec::new()
        } else {
            keys.iter().filter(|k| find_key(k).is_none()).cloned().collect()
        };

        Ok((values, unknown))
    }

    pub fn set_configuration(&self, key: &str, value: &str) -> Result<ChangeConfigurationStatus, StoreError> {
        let Some(def) = find_key(key) else {
            return Ok(ChangeConfigurationStatus::NotSupported);
        };
        if !def.attrs.writable {
            return Ok(ChangeConfigurationStatus::Rejected);
        }
        if def.name.ends_with("Interval") {
            if let Ok(parsed) = value.parse::<i64>() {
                if parsed < 0 {
                    return Ok(ChangeConfigurationStatus::Rejected);
                }
            }
        }

        let conn = self.conn.lock().expect("ocpp config mutex poisoned");
        conn.execute(
            "INSERT INTO ocpp_config (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value",
            params![def.name, value],
        )?;
        drop(conn);

        if def.attrs.reboot_required {
            Ok(ChangeConfigurationStatus::RebootRequired)
        } else {
            Ok(ChangeConfigurationStatus::Accepted)
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn config() -> OcppConfig {
        OcppConfig::open(Connection::open_in_memory().unwrap()).unwrap()
    }

    #[test]
    fn unknown_key_is_not_supported() {
        let cfg = config();
        let status = cfg.set_configuration("NotARealKey", "1").unwrap();
        assert_eq!(status, ChangeConfigurationStatus::NotSupported);
    }

    #[test]
    fn read_only_key_is_rejected() {
        let cfg = config();
        let status = cfg.set_configuration("NumberOfConnectors", "2").unwrap();
        assert_eq!(status, ChangeConfigurationStatus::Rejected);
    }

    #[test]
    fn negative_interval_is_rejected() {
        let cfg = config();
        let status = cfg.set_configuration("HeartbeatInterval", "-5").unwrap();
        assert_eq!(status, ChangeConfigurationStatus::Rejected);
    }

    #[test]
    fn reboot_required_key_succeeds_and_reports_reboot() {
        let cfg = config();
        let status = cfg.set_configuration("SecurityProfile", "2").unwrap();
        assert_eq!(status, ChangeConfigurationStatus::RebootRequired);
        let (values, _) = cfg.get_configuration(&["SecurityProfile".to_string()]).unwrap();
        assert_eq!(values[0].value.as_deref(), Some("2"));
    }

    #[test]
    fn plain_key_is_accepted_and_persisted() {
        let cfg = config();
        let status = cfg.set_configuration("MeterValueSampleInterval", "30").unwrap();
        assert_eq!(status, ChangeConfigurationStatus::Accepted);
        let (values, unknown) = cfg.get_configuration(&["MeterValueSampleInterval".to_string()]).unwrap();
        assert!(unknown.is_empty());
        assert_eq!(values[0].value.as_deref(), Some("30"));
    }

    #[test]
    fn empty_key_list_returns_every_known_key() {
        let cfg = config();
        let (values, _) = cfg.get_configuration(&[]).unwrap();
        assert_eq!(values.len(), KEYS.len());
    }

    #[test]
    fn unknown_requested_key_is_reported_separately() {
        let cfg = config();
        let (_, unknown) = cfg.get_configuration(&["Bogus".to_string()]).unwrap();
        assert_eq!(unknown, vec!["Bogus".to_string()]);
    }
}
