//! Transaction manager.
//!
//! Owns start/stop transaction issuance and the offline transaction id
//! scheme: while disconnected, a Charge Point assigns its own negative
//! placeholder transaction id so meter values and StopTransaction can still
//! be queued in the Request FIFO; once StartTransaction.conf arrives with
//! the real (positive) id, every queued entry referencing the placeholder
//! is rewritten (`RequestFifo::reconcile_transaction_id`).

use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;

use chrono::Utc;

use crate::common::common_types::AuthorizationStatus;
use crate::runtime::connectors::Connectors16;
use crate::runtime::events::ChargePointEventsHandler;
use crate::runtime::fifo::RequestFifo;

/// Allocates ever-decreasing negative ids for offline-started transactions,
/// distinct from any real id the Central System could ever assign.
pub struct OfflineIdAllocator {
    next: AtomicI64,
}

impl Default for OfflineIdAllocator {
    fn default() -> Self {
        OfflineIdAllocator { next: AtomicI64::new(-1) }
    }
}

impl OfflineIdAllocator {
    pub fn allocate(&self) -> i64 {
        self.next.fetch_sub(1, Ordering::SeqCst)
    }
}

pub struct TransactionManager {
    connectors: Arc<Connectors16>,
    fifo: Arc<RequestFifo>,
    events: Arc<dyn ChargePointEventsHandler>,
    offline_ids: OfflineIdAllocator,
}

impl TransactionManager {
    pub fn new(connectors: Arc<Connectors16>, fifo: Arc<RequestFifo>, events: Arc<dyn ChargePointEventsHandler>) -> Self {
        TransactionManager {
            connectors,
            fifo,
            events,
            offline_ids: OfflineIdAllocator::default(),
        }
    }

    /// Begins a transaction locally: records the (possibly offline,
    /// negative) id against the connector so meter values can reference it
    /// immediately, before any Central System round trip completes.
    pub fn start_locally(&self, connector_id: u32, id_token: &str, online: bool) -> i64 {
        let offline_id = self.offline_ids.allocate();
        self.connectors.with_transaction(connector_id, |tx| {
            tx.id_token = Some(id_token.to_string());
            tx.transaction_start = Some(Utc::now());
            if online {
                tx.transaction_id_offline = None;
            } else {
                tx.transaction_id_offline = Some(offline_id);
            }
        });
        offline_id
    }

    /// Applies a StartTransaction.conf: records the real id and, if the
    /// transaction had been started offline, reconciles every FIFO entry
    /// that referenced the placeholder id. If `auth_status` is one of
    /// `Blocked`/`Expired`/`Invalid`, the application is notified via
    /// `transactionDeAuthorized` so it can stop charging even though the
    /// Central System still assigned a transaction id. `ConcurrentTx` is
    /// distinct from those three: the idTag itself isn't deauthorized, it's
    /// already in use elsewhere, so neither the notification fires nor is
    /// the transaction id recorded against this connector.
    pub fn confirm_start(
        &self,
        connector_id: u32,
        real_transaction_id: i64,
        auth_status: AuthorizationStatus,
    ) -> Result<(), crate::error::StoreError> {
        let offline_id = self
            .connectors
            .with_transaction(connector_id, |tx| tx.transaction_id_offline.take())
            .flatten();

        match auth_status {
            AuthorizationStatus::Accepted => {
                self.connectors.with_transaction(connector_id, |tx| {
                    tx.transaction_id = Some(real_transaction_id);
                });
            }
            AuthorizationStatus::Blocked | AuthorizationStatus::Expired | AuthorizationStatus::Invalid => {
                self.connectors.with_transaction(connector_id, |tx| {
                    tx.transaction_id = Some(real_transaction_id);
                });
                self.events.transaction_deauthorized(connector_id);
            }
            AuthorizationStatus::ConcurrentTx => {}
        }

        if let Some(offline_id) = offline_id {
            self.fifo.reconcile_transaction_id(offline_id, real_transaction_id)?;
        }
        Ok(())
    }

    pub fn stop_locally(&self, connector_id: u32) -> Option<i64> {
        self.connectors.with_transaction(connector_id, |tx| {
            let id = tx.transaction_id.or(tx.transaction_id_offline);
            tx.transaction_id = None;
            tx.transaction_id_offline = None;
            tx.transaction_start = None;
            tx.id_token = None;
            id
        })
        .flatten()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::runtime::events::NullEventsHandler;
    use rusqlite::Connection;
    use std::sync::Mutex;

    fn manager() -> TransactionManager {
        let connectors = Arc::new(Connectors16::new(1, Utc::now()));
        let fifo = Arc::new(RequestFifo::open(Connection::open_in_memory().unwrap()).unwrap());
        TransactionManager::new(connectors, fifo, Arc::new(NullEventsHandler))
    }

    struct RecordingEvents {
        deauthorized: Mutex<Vec<u32>>,
    }
    impl ChargePointEventsHandler for RecordingEvents {
        fn transaction_deauthorized(&self, connector_id: u32) {
            self.deauthorized.lock().unwrap().push(connector_id);
        }
    }

    #[test]
    fn offline_start_allocates_negative_ids_in_sequence() {
        let manager = manager();
        let first = manager.start_locally(1, "TAG1", false);
        manager.stop_locally(1);
        let second = manager.start_locally(1, "TAG2", false);
        assert!(first < 0 && second < 0);
        assert_ne!(first, second);
    }

    #[test]
    fn confirm_start_reconciles_queued_meter_values() {
        let manager = manager();
        let offline_id = manager.start_locally(1, "TAG1", false);
        manager
            .fifo
            .push(1, "MeterValues", serde_json::json!({"transactionId": offline_id}))
            .unwrap();

        manager.confirm_start(1, 555, AuthorizationStatus::Accepted).unwrap();

        let entry = manager.fifo.front().unwrap().unwrap();
        assert_eq!(entry.payload["transactionId"], 555);
    }

    #[test]
    fn blocked_auth_status_notifies_deauthorization_and_still_records_the_id() {
        let connectors = Arc::new(Connectors16::new(1, Utc::now()));
        let fifo = Arc::new(RequestFifo::open(Connection::open_in_memory().unwrap()).unwrap());
        let events = Arc::new(RecordingEvents { deauthorized: Mutex::new(vec![]) });
        let manager = TransactionManager::new(connectors, fifo, Arc::clone(&events) as Arc<dyn ChargePointEventsHandler>);

        manager.start_locally(1, "TAG1", true);
        manager.confirm_start(1, 42, AuthorizationStatus::Blocked).unwrap();

        assert_eq!(*events.deauthorized.lock().unwrap(), vec![1]);
        assert_eq!(manager.stop_locally(1), Some(42));
    }

    #[test]
    fn concurrent_tx_is_neither_deauthorized_nor_recorded() {
        let connectors = Arc::new(Connectors16::new(1, Utc::now()));
        let fifo = Arc::new(RequestFifo::open(Connection::open_in_memory().unwrap()).unwrap());
        let events = Arc::new(RecordingEvents { deauthorized: Mutex::new(vec![]) });
        let manager = TransactionManager::new(connectors, fifo, Arc::clone(&events) as Arc<dyn ChargePointEventsHandler>);

        manager.start_locally(1, "TAG1", true);
        manager.confirm_start(1, 42, AuthorizationStatus::ConcurrentTx).unwrap();

        assert!(events.deauthorized.lock().unwrap().is_empty());
        assert_eq!(manager.stop_locally(1), None);
    }

    #[test]
    fn stop_locally_clears_transaction_state() {
        let manager = manager();
        manager.start_locally(1, "TAG1", true);
        manager.confirm_start(1, 42, AuthorizationStatus::Accepted).unwrap();
        let stopped = manager.stop_locally(1);
        assert_eq!(stopped, Some(42));
        assert_eq!(manager.stop_locally(1), None);
    }
}
