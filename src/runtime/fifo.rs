//! Persisted, transaction-ordered request FIFO.
//!
//! Grounded in `RequestFifo`/`RequestFifoManager`: point-initiated requests
//! (StartTransaction, StopTransaction, MeterValues, StatusNotification...)
//! are pushed here before being sent, so a crash or disconnect between
//! "decided to send" and "Central System acknowledged" cannot lose or
//! reorder a request. Entries persist to SQLite and are reloaded on
//! startup via [`RequestFifo::load`].

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, Weak};
use std::time::Duration;

use rusqlite::{params, Connection};
use serde_json::Value;

use crate::error::StoreError;
use crate::runtime::status_manager::{RegistrationListener, RegistrationStatus};
use crate::runtime::timer::TimerPool;
use crate::runtime::transport::RpcClient;

/// One queued request awaiting delivery.
#[derive(Debug, Clone)]
pub struct FifoEntry {
    pub id: u32,
    pub connector_id: u32,
    pub action: String,
    pub payload: Value,
}

/// Listener notified when an entry is pushed, so the manager can wake its
/// delivery loop instead of polling.
pub trait FifoListener: Send + Sync {
    fn request_queued(&self);
}

/// The persisted queue itself — ordering and durability only. Delivery
/// policy (retry, backoff, abandonment) lives in [`FifoManager`].
pub struct RequestFifo {
    conn: Mutex<Connection>,
    listener: Mutex<Option<Arc<dyn FifoListener>>>,
}

impl RequestFifo {
    pub fn open(conn: Connection) -> Result<Self, StoreError> {
        conn.execute(
            "CREATE TABLE IF NOT EXISTS request_fifo (
                id INTEGER PRIMARY KEY,
                connector_id INTEGER NOT NULL,
                action TEXT NOT NULL,
                payload TEXT NOT NULL
            )",
            [],
        )?;
        Ok(RequestFifo {
            conn: Mutex::new(conn),
            listener: Mutex::new(None),
        })
    }

    pub fn register_listener(&self, listener: Arc<dyn FifoListener>) {
        *self.listener.lock().expect("fifo listener mutex poisoned") = Some(listener);
    }

    /// Appends an entry at the back of the queue, persisting it
    /// immediately, and notifies the registered listener.
    pub fn push(&self, connector_id: u32, action: &str, payload: Value) -> Result<u32, StoreError> {
        let conn = self.conn.lock().expect("fifo connection mutex poisoned");
        conn.execute(
            "INSERT INTO request_fifo (connector_id, action, payload) VALUES (?1, ?2, ?3)",
            params![connector_id, action, payload.to_string()],
        )?;
        let id = conn.last_insert_rowid() as u32;
        drop(conn);
        if let Some(listener) = self.listener.lock().expect("fifo listener mutex poisoned").as_ref() {
            listener.request_queued();
        }
        Ok(id)
    }

    /// Returns the oldest entry without removing it.
    pub fn front(&self) -> Result<Option<FifoEntry>, StoreError> {
        let conn = self.conn.lock().expect("fifo connection mutex poisoned");
        let mut stmt = conn.prepare(
            "SELECT id, connector_id, action, payload FROM request_fifo ORDER BY id ASC LIMIT 1",
        )?;
        let mut rows = stmt.query([])?;
        if let Some(row) = rows.next()? {
            let payload_text: String = row.get(3)?;
            let payload: Value = serde_json::from_str(&payload_text)
                .unwrap_or(Value::Null);
            Ok(Some(FifoEntry {
                id: row.get(0)?,
                connector_id: row.get(1)?,
                action: row.get(2)?,
                payload,
            }))
        } else {
            Ok(None)
        }
    }

    /// Removes the oldest entry. No-op if the queue is empty.
    pub fn pop(&self) -> Result<(), StoreError> {
        let conn = self.conn.lock().expect("fifo connection mutex poisoned");
        conn.execute(
            "DELETE FROM request_fifo WHERE id = (SELECT MIN(id) FROM request_fifo)",
            [],
        )?;
        Ok(())
    }

    /// Rewrites every queued payload's `transactionId` field from an
    /// offline placeholder id to the real id assigned by the Central
    /// System's StartTransaction CALLRESULT.
    pub fn reconcile_transaction_id(&self, offline_id: i64, real_id: i64) -> Result<(), StoreError> {
        let conn = self.conn.lock().expect("fifo connection mutex poisoned");
        let mut stmt = conn.prepare("SELECT id, payload FROM request_fifo")?;
        let rows: Vec<(u32, String)> = stmt
            .query_map([], |row| Ok((row.get(0)?, row.get(1)?)))?
            .collect::<Result<_, _>>()?;
        for (id, payload_text) in rows {
            let mut payload: Value = match serde_json::from_str(&payload_text) {
                Ok(v) => v,
                Err(_) => continue,
            };
            if let Some(tx_id) = payload.get("transactionId").and_then(Value::as_i64) {
                if tx_id == offline_id {
                    payload["transactionId"] = serde_json::json!(real_id);
                    conn.execute(
                        "UPDATE request_fifo SET payload = ?1 WHERE id = ?2",
                        params![payload.to_string(), id],
                    )?;
                }
            }
        }
        Ok(())
    }

    pub fn size(&self) -> Result<u64, StoreError> {
        let conn = self.conn.lock().expect("fifo connection mutex poisoned");
        let count: i64 = conn.query_row("SELECT COUNT(*) FROM request_fifo", [], |row| row.get(0))?;
        Ok(count as u64)
    }

    pub fn is_empty(&self) -> Result<bool, StoreError> {
        Ok(self.size()? == 0)
    }
}

/// Drives delivery of queued entries: sends the front entry and either
/// advances on success or reschedules a single retry via the timer pool on
/// failure, up to a bounded retry count before giving up and dropping the
/// entry (mirrors `RequestFifoManager::processFifoRequest`'s retry/give-up
/// behaviour). Only runs while the transport is connected *and* the Charge
/// Point's registration status is `Accepted` (spec.md §4.3 item 1); both
/// gates are re-checked on every attempt, not just once at the top of a
/// retry burst, and a retry never blocks the calling thread — it always
/// goes back through the [`TimerPool`].
pub struct FifoManager {
    fifo: Arc<RequestFifo>,
    transport: Arc<RpcClient>,
    timers: Arc<TimerPool>,
    max_retries: u32,
    retry_interval: Duration,
    call_timeout: Duration,
    online: AtomicBool,
    registered: AtomicBool,
    attempts: Mutex<u32>,
    self_ref: Weak<FifoManager>,
}

impl FifoManager {
    pub fn new(
        fifo: Arc<RequestFifo>,
        transport: Arc<RpcClient>,
        timers: Arc<TimerPool>,
        max_retries: u32,
        retry_interval: Duration,
        call_timeout: Duration,
    ) -> Arc<Self> {
        Arc::new_cyclic(|weak| FifoManager {
            fifo,
            transport,
            timers,
            max_retries,
            retry_interval,
            call_timeout,
            online: AtomicBool::new(false),
            registered: AtomicBool::new(false),
            attempts: Mutex::new(0),
            self_ref: weak.clone(),
        })
    }

    fn gate_open(&self) -> bool {
        self.online.load(Ordering::SeqCst) && self.registered.load(Ordering::SeqCst)
    }

    fn reset_attempts(&self) {
        *self.attempts.lock().expect("fifo manager attempts mutex poisoned") = 0;
    }

    /// Updates whether the transport connection is currently usable for
    /// delivery. Going offline halts delivery without dropping anything
    /// already queued; coming back online (while also registered) resumes
    /// it from the front, resetting the retry budget.
    pub fn update_connection_status(&self, online: bool) {
        self.online.store(online, Ordering::SeqCst);
        if online && self.gate_open() {
            self.reset_attempts();
            self.try_deliver();
        }
    }

    /// Updates whether the Charge Point is currently `Accepted` by the
    /// Central System. Intended to be registered with
    /// [`crate::runtime::status_manager::StatusManager`] as a
    /// [`RegistrationListener`].
    pub fn update_registration_status(&self, accepted: bool) {
        self.registered.store(accepted, Ordering::SeqCst);
        if accepted && self.gate_open() {
            self.reset_attempts();
            self.try_deliver();
        }
    }

    /// Attempts to deliver the front entry, if any, once. Returns `true` if
    /// an entry was sent and acknowledged (and therefore popped). Returns
    /// `false` if there was nothing to do, the gate is closed, or delivery
    /// failed — in the last case a retry is scheduled on the timer pool
    /// rather than retried inline, and this call returns immediately.
    pub fn try_deliver(&self) -> bool {
        if !self.gate_open() {
            return false;
        }
        let entry = match self.fifo.front() {
            Ok(Some(entry)) => entry,
            _ => return false,
        };

        match self.transport.call(&entry.action, entry.payload.clone(), self.call_timeout) {
            Ok(_response) => {
                tracing::debug!(action = %entry.action, id = entry.id, "fifo entry delivered");
                let _ = self.fifo.pop();
                self.reset_attempts();
                true
            }
            Err(e) => {
                let attempt = {
                    let mut attempts = self.attempts.lock().expect("fifo manager attempts mutex poisoned");
                    *attempts += 1;
                    *attempts
                };
                tracing::warn!(action = %entry.action, id = entry.id, attempt, error = %e, "fifo delivery attempt failed");

                if attempt > self.max_retries {
                    tracing::error!(action = %entry.action, id = entry.id, "fifo entry exhausted retries, dropping");
                    let _ = self.fifo.pop();
                    self.reset_attempts();
                    return false;
                }

                if let Some(this) = self.self_ref.upgrade() {
                    self.timers.one_shot(self.retry_interval, move || {
                        this.try_deliver();
                    });
                }
                false
            }
        }
    }
}

/// Wakes delivery as soon as an entry is queued, instead of waiting for the
/// next connection/registration transition or external poll.
impl FifoListener for FifoManager {
    fn request_queued(&self) {
        self.try_deliver();
    }
}

/// Lets [`StatusManager`](crate::runtime::status_manager::StatusManager)
/// notify the delivery gate directly on registration-status transitions.
impl RegistrationListener for FifoManager {
    fn registration_status_changed(&self, status: RegistrationStatus) {
        self.update_registration_status(status == RegistrationStatus::Accepted);
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn open_fifo() -> RequestFifo {
        RequestFifo::open(Connection::open_in_memory().unwrap()).unwrap()
    }

    #[test]
    fn push_then_front_then_pop_is_fifo_ordered() {
        let fifo = open_fifo();
        fifo.push(1, "MeterValues", serde_json::json!({"seq": 1})).unwrap();
        fifo.push(1, "MeterValues", serde_json::json!({"seq": 2})).unwrap();
        let first = fifo.front().unwrap().unwrap();
        assert_eq!(first.payload["seq"], 1);
        fifo.pop().unwrap();
        let second = fifo.front().unwrap().unwrap();
        assert_eq!(second.payload["seq"], 2);
    }

    #[test]
    fn reconcile_rewrites_matching_transaction_ids() {
        let fifo = open_fifo();
        fifo.push(1, "MeterValues", serde_json::json!({"transactionId": -1})).unwrap();
        fifo.push(1, "MeterValues", serde_json::json!({"transactionId": 42})).unwrap();
        fifo.reconcile_transaction_id(-1, 99).unwrap();
        let first = fifo.front().unwrap().unwrap();
        assert_eq!(first.payload["transactionId"], 99);
        fifo.pop().unwrap();
        let second = fifo.front().unwrap().unwrap();
        assert_eq!(second.payload["transactionId"], 42);
    }

    #[test]
    fn empty_queue_reports_empty() {
        let fifo = open_fifo();
        assert!(fifo.is_empty().unwrap());
        assert!(fifo.front().unwrap().is_none());
    }

    #[test]
    fn survives_reload_from_the_same_connection_file() {
        let dir = std::env::temp_dir().join(format!("ocpp-fifo-test-{}", uuid::Uuid::new_v4()));
        let path = dir.with_extension("sqlite");
        {
            let fifo = RequestFifo::open(Connection::open(&path).unwrap()).unwrap();
            fifo.push(1, "Heartbeat", serde_json::json!({})).unwrap();
        }
        let reopened = RequestFifo::open(Connection::open(&path).unwrap()).unwrap();
        assert_eq!(reopened.size().unwrap(), 1);
        std::fs::remove_file(&path).ok();
    }

    use crate::error::CallErrorCode;
    use crate::runtime::status_manager::StatusManager;
    use crate::runtime::transport::{ConnectionListener, RpcClient};
    use crate::runtime::worker_pool::WorkerPool;

    struct NullListener;
    impl ConnectionListener for NullListener {
        fn call_received(&self, _action: &str, _payload: &Value) -> Result<Value, (CallErrorCode, String)> {
            Err((CallErrorCode::NotImplemented, "unused in this test".into()))
        }
    }

    struct NullSink;
    impl crate::runtime::status_manager::StatusManagerSink for NullSink {
        fn send_boot_notification(&self) {}
        fn send_heartbeat(&self) {}
        fn send_status_notification(&self, _connector_id: u32) {}
    }

    fn manager_with_gates() -> (Arc<FifoManager>, Arc<RequestFifo>, Arc<StatusManager>) {
        let fifo = Arc::new(open_fifo());
        let transport = Arc::new(RpcClient::new(Arc::new(NullListener), None));
        let timers = Arc::new(TimerPool::new(Arc::new(WorkerPool::new(1))));
        let manager = FifoManager::new(
            Arc::clone(&fifo),
            transport,
            Arc::clone(&timers),
            0,
            Duration::from_millis(10),
            Duration::from_millis(10),
        );
        fifo.register_listener(Arc::clone(&manager) as Arc<dyn FifoListener>);

        let connectors = Arc::new(crate::runtime::connectors::Connectors16::new(1, chrono::Utc::now()));
        let status = Arc::new(StatusManager::new(timers, Arc::new(NullSink), connectors, false));
        status.register_registration_listener(Arc::clone(&manager) as Arc<dyn RegistrationListener>);
        (manager, fifo, status)
    }

    #[test]
    fn delivery_is_gated_on_both_connection_and_registration() {
        let (manager, fifo, status) = manager_with_gates();

        // Neither gate is open yet: pushing queues the entry but nothing is
        // attempted.
        fifo.push(1, "Heartbeat", serde_json::json!({})).unwrap();
        assert_eq!(fifo.size().unwrap(), 1);

        // Registration flips to Accepted, but we're still offline: still
        // gated, the transport is never touched.
        status.force_registration_status(RegistrationStatus::Accepted);
        assert_eq!(fifo.size().unwrap(), 1);

        // Coming online with registration already Accepted opens the gate.
        // The transport isn't actually connected, so the call fails; with
        // max_retries == 0 the entry is dropped rather than retried forever.
        manager.update_connection_status(true);
        assert_eq!(fifo.size().unwrap(), 0);
    }
}
