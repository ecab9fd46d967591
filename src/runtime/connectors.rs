//! Connector / EVSE state store.
//!
//! OCPP 1.6 models a Charge Point as a flat vector of connectors, with id
//! `0` reserved for the whole-station aggregate (`Connectors16`, mirroring
//! `ocpp16::Connectors`). OCPP 2.0.1 introduces EVSEs: a tree of EVSE to
//! Connector built from the Device Model, with transaction state living at
//! the EVSE level rather than the connector level (`Connectors20`,
//! `Evse20`). Both share the same per-entity mutex discipline: state
//! mutation always goes through `with_connector`/`with_evse` so a caller
//! cannot forget to lock.

use std::sync::Mutex;

use chrono::{DateTime, Utc};

use crate::point_init::status_notification::StatusNotificationStatus;

/// The live status of one connector, independent of OCPP version.
#[derive(Debug, Clone)]
pub struct ConnectorState {
    pub status: StatusNotificationStatus,
    pub status_timestamp: DateTime<Utc>,
    /// The status value last reported to the Central System. Used to
    /// detect drift after a reconnect (spec's "reconnection catch-up").
    pub last_notified_status: Option<StatusNotificationStatus>,
}

impl ConnectorState {
    pub fn new(status: StatusNotificationStatus, now: DateTime<Utc>) -> Self {
        ConnectorState {
            status,
            status_timestamp: now,
            last_notified_status: None,
        }
    }

    pub fn has_drifted(&self) -> bool {
        self.last_notified_status.as_ref() != Some(&self.status)
    }
}

/// Per-EVSE (2.0.1) or whole-transaction (1.6, against connector 0's
/// aggregate) transaction bookkeeping. 2.0.1 places this at the EVSE, not
/// connector, level per `Evse20::transaction_id`.
#[derive(Debug, Clone, Default)]
pub struct TransactionState {
    pub transaction_id: Option<i64>,
    /// Negative placeholder id assigned while offline, reconciled once the
    /// Central System assigns a real id.
    pub transaction_id_offline: Option<i64>,
    pub transaction_start: Option<DateTime<Utc>>,
    pub id_token: Option<String>,
}

struct Connector {
    id: u32,
    state: Mutex<ConnectorState>,
}

/// OCPP 1.6 flat connector vector. Connector 0 is the whole-station
/// aggregate and always present.
pub struct Connectors16 {
    connectors: Vec<Connector>,
    transactions: Vec<Mutex<TransactionState>>,
}

impl Connectors16 {
    pub fn new(connector_count: u32, now: DateTime<Utc>) -> Self {
        let total = connector_count + 1; // + station aggregate at id 0
        let connectors = (0..total)
            .map(|id| Connector {
                id,
                state: Mutex::new(ConnectorState::new(StatusNotificationStatus::Available, now)),
            })
            .collect();
        let transactions = (0..total).map(|_| Mutex::new(TransactionState::default())).collect();
        Connectors16 { connectors, transactions }
    }

    pub fn len(&self) -> usize {
        self.connectors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.connectors.is_empty()
    }

    /// Runs `f` with the named connector's state locked, returning `None`
    /// if `connector_id` is out of range.
    pub fn with_connector<R>(&self, connector_id: u32, f: impl FnOnce(&mut ConnectorState) -> R) -> Option<R> {
        let connector = self.connectors.iter().find(|c| c.id == connector_id)?;
        let mut guard = connector.state.lock().expect("connector mutex poisoned");
        Some(f(&mut guard))
    }

    pub fn with_transaction<R>(&self, connector_id: u32, f: impl FnOnce(&mut TransactionState) -> R) -> Option<R> {
        let tx = self.transactions.get(connector_id as usize)?;
        let mut guard = tx.lock().expect("transaction mutex poisoned");
        Some(f(&mut guard))
    }

    /// Connectors whose last-notified status no longer matches their
    /// current status — used to re-send StatusNotification after a
    /// reconnect.
    pub fn drifted(&self) -> Vec<u32> {
        self.connectors
            .iter()
            .filter(|c| c.state.lock().expect("connector mutex poisoned").has_drifted())
            .map(|c| c.id)
            .collect()
    }
}

struct Evse {
    id: u32,
    connectors: Vec<Connector>,
    transaction: Mutex<TransactionState>,
}

/// OCPP 2.0.1 EVSE-to-Connector tree, built from the Device Model.
pub struct Connectors20 {
    evses: Vec<Evse>,
}

impl Connectors20 {
    pub fn new(layout: &[(u32, u32)], now: DateTime<Utc>) -> Self {
        let evses = layout
            .iter()
            .map(|&(evse_id, connector_count)| Evse {
                id: evse_id,
                connectors: (1..=connector_count)
                    .map(|id| Connector {
                        id,
                        state: Mutex::new(ConnectorState::new(StatusNotificationStatus::Available, now)),
                    })
                    .collect(),
                transaction: Mutex::new(TransactionState::default()),
            })
            .collect();
        Connectors20 { evses }
    }

    pub fn evse_count(&self) -> usize {
        self.evses.len()
    }

    pub fn with_connector<R>(&self, evse_id: u32, connector_id: u32, f: impl FnOnce(&mut ConnectorState) -> R) -> Option<R> {
        let evse = self.evses.iter().find(|e| e.id == evse_id)?;
        let connector = evse.connectors.iter().find(|c| c.id == connector_id)?;
        let mut guard = connector.state.lock().expect("connector mutex poisoned");
        Some(f(&mut guard))
    }

    /// Transaction state lives at the EVSE, not connector, level in 2.0.1.
    pub fn with_transaction<R>(&self, evse_id: u32, f: impl FnOnce(&mut TransactionState) -> R) -> Option<R> {
        let evse = self.evses.iter().find(|e| e.id == evse_id)?;
        let mut guard = evse.transaction.lock().expect("transaction mutex poisoned");
        Some(f(&mut guard))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn connector_zero_is_the_station_aggregate() {
        let connectors = Connectors16::new(2, Utc::now());
        assert_eq!(connectors.len(), 3);
        assert!(connectors.with_connector(0, |_| ()).is_some());
    }

    #[test]
    fn out_of_range_connector_is_none() {
        let connectors = Connectors16::new(1, Utc::now());
        assert!(connectors.with_connector(5, |_| ()).is_none());
    }

    #[test]
    fn drift_detection_flags_unreported_change() {
        let connectors = Connectors16::new(1, Utc::now());
        connectors.with_connector(1, |state| {
            state.status = StatusNotificationStatus::Charging;
        });
        assert_eq!(connectors.drifted(), vec![1]);
        connectors.with_connector(1, |state| {
            state.last_notified_status = Some(state.status.clone());
        });
        assert!(connectors.drifted().is_empty());
    }

    #[test]
    fn evse_transaction_state_is_shared_across_its_connectors() {
        let connectors = Connectors20::new(&[(1, 2)], Utc::now());
        connectors.with_transaction(1, |tx| tx.transaction_id = Some(7));
        let id = connectors.with_transaction(1, |tx| tx.transaction_id).unwrap();
        assert_eq!(id, Some(7));
    }
}
