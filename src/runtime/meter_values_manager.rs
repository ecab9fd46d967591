//! Meter-values manager.
//!
//! Drives two independent timers per connector — a "sampled" timer on a
//! configurable plain interval, and a "clock-aligned" timer whose first
//! fire is aligned to the next UTC-midnight-based boundary so every
//! charge point on a site samples at the same wall-clock instants
//! regardless of when each one booted. Transaction-scoped readings are
//! persisted keyed by transaction id so `StopTransaction.req`'s optional
//! `transactionData` can be reassembled even across a restart; readings
//! left over from a transaction that never got a StopTransaction (e.g. the
//! process crashed) are reconciled away at startup.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use chrono::{DateTime, Datelike, TimeZone, Timelike, Utc};
use rusqlite::{params, Connection};

use crate::common::meter_value::MeterValue;
use crate::error::StoreError;
use crate::runtime::timer::{TimerHandle, TimerPool};

/// Computes the delay until the next boundary of `interval`, aligned to
/// UTC midnight, e.g. with a 15 minute interval the next boundary is the
/// next :00/:15/:30/:45 mark rather than `now + interval`.
pub fn delay_to_next_aligned_boundary(now: DateTime<Utc>, interval: Duration) -> Duration {
    if interval.is_zero() {
        return Duration::ZERO;
    }
    let midnight = Utc
        .with_ymd_and_hms(now.year(), now.month(), now.day(), 0, 0, 0)
        .single()
        .expect("valid date from a valid DateTime<Utc>");
    let elapsed = (now - midnight).to_std().unwrap_or(Duration::ZERO);
    let interval_secs = interval.as_secs().max(1);
    let elapsed_secs = elapsed.as_secs();
    let remainder = elapsed_secs % interval_secs;
    if remainder == 0 {
        Duration::from_secs(interval_secs)
    } else {
        Duration::from_secs(interval_secs - remainder)
    }
}

/// Schedules the next clock-aligned tick, then re-arms itself from within
/// the timer callback so phase stays locked to the boundary indefinitely.
fn schedule_aligned_tick<F>(
    timers: Arc<TimerPool>,
    slot: Arc<Mutex<Option<TimerHandle>>>,
    interval: Duration,
    callback: Arc<F>,
) where
    F: Fn() + Send + Sync + 'static,
{
    let delay = delay_to_next_aligned_boundary(Utc::now(), interval);
    let timers_for_callback = Arc::clone(&timers);
    let slot_for_callback = Arc::clone(&slot);
    let handle = timers.one_shot(delay, move || {
        (callback.as_ref())();
        schedule_aligned_tick(
            Arc::clone(&timers_for_callback),
            Arc::clone(&slot_for_callback),
            interval,
            Arc::clone(&callback),
        );
    });
    *slot.lock().expect("aligned timer mutex poisoned") = Some(handle);
}

/// Persists per-transaction meter value readings.
pub struct MeterValueStore {
    conn: Mutex<Connection>,
}

impl MeterValueStore {
    pub fn open(conn: Connection) -> Result<Self, StoreError> {
        conn.execute(
            "CREATE TABLE IF NOT EXISTS meter_values (
                rowid INTEGER PRIMARY KEY,
                transaction_id INTEGER NOT NULL,
                aligned INTEGER NOT NULL,
                value TEXT NOT NULL
            )",
            [],
        )?;
        Ok(MeterValueStore { conn: Mutex::new(conn) })
    }

    pub fn record(&self, transaction_id: i64, aligned: bool, value: &MeterValue) -> Result<(), StoreError> {
        let conn = self.conn.lock().expect("meter value store mutex poisoned");
        conn.execute(
            "INSERT INTO meter_values (transaction_id, aligned, value) VALUES (?1, ?2, ?3)",
            params![transaction_id, aligned as i64, serde_json::to_string(value).unwrap_or_default()],
        )?;
        Ok(())
    }

    pub fn for_transaction(&self, transaction_id: i64) -> Result<Vec<MeterValue>, StoreError> {
        let conn = self.conn.lock().expect("meter value store mutex poisoned");
        let mut stmt = conn.prepare("SELECT value FROM meter_values WHERE transaction_id = ?1 ORDER BY rowid ASC")?;
        let rows: Vec<String> = stmt
            .query_map(params![transaction_id], |row| row.get(0))?
            .collect::<Result<_, _>>()?;
        Ok(rows.into_iter().filter_map(|s| serde_json::from_str(&s).ok()).collect())
    }

    /// Deletes readings for any transaction id not present in
    /// `live_transaction_ids` — orphaned rows left by a transaction that
    /// never received a StopTransaction before the process ended.
    pub fn reconcile_orphans(&self, live_transaction_ids: &[i64]) -> Result<u64, StoreError> {
        let conn = self.conn.lock().expect("meter value store mutex poisoned");
        let placeholders = live_transaction_ids.iter().map(|_| "?").collect::<Vec<_>>().join(",");
        let sql = if placeholders.is_empty() {
            "DELETE FROM meter_values".to_string()
        } else {
            format!("DELETE FROM meter_values WHERE transaction_id NOT IN ({placeholders})")
        };
        let params: Vec<&dyn rusqlite::ToSql> = live_transaction_ids.iter().map(|id| id as &dyn rusqlite::ToSql).collect();
        let deleted = conn.execute(&sql, params.as_slice())?;
        Ok(deleted as u64)
    }
}

/// Drives the sample/clock-aligned timer pair for one connector.
pub struct MeterValuesManager {
    timers: Arc<TimerPool>,
    store: Arc<MeterValueStore>,
    sampled_timer: Mutex<Option<TimerHandle>>,
    aligned_timer: Arc<Mutex<Option<TimerHandle>>>,
}

impl MeterValuesManager {
    pub fn new(timers: Arc<TimerPool>, store: Arc<MeterValueStore>) -> Self {
        MeterValuesManager {
            timers,
            store,
            sampled_timer: Mutex::new(None),
            aligned_timer: Arc::new(Mutex::new(None)),
        }
    }

    pub fn start_sampled<F>(&self, interval: Duration, callback: F)
    where
        F: Fn() + Send + 'static,
    {
        if interval.is_zero() {
            return;
        }
        *self.sampled_timer.lock().expect("sampled timer mutex poisoned") =
            Some(self.timers.periodic(interval, callback));
    }

    /// Starts the clock-aligned timer: its first fire lands on the next
    /// interval boundary since UTC midnight. A one-shot is rescheduled
    /// after every fire (rather than using `TimerPool::periodic`
    /// directly) so the phase never drifts relative to the boundary, even
    /// if a callback runs a little late.
    pub fn start_clock_aligned<F>(&self, interval: Duration, callback: F)
    where
        F: Fn() + Send + Sync + 'static,
    {
        if interval.is_zero() {
            return;
        }
        schedule_aligned_tick(
            Arc::clone(&self.timers),
            Arc::clone(&self.aligned_timer),
            interval,
            Arc::new(callback),
        );
    }

    pub fn stop(&self) {
        if let Some(h) = self.sampled_timer.lock().expect("sampled timer mutex poisoned").take() {
            h.stop();
        }
        if let Some(h) = self.aligned_timer.lock().expect("aligned timer mutex poisoned").take() {
            h.stop();
        }
    }

    pub fn store(&self) -> &Arc<MeterValueStore> {
        &self.store
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn delay_to_boundary_is_zero_right_at_a_boundary() {
        let now = Utc.with_ymd_and_hms(2024, 1, 1, 0, 30, 0).unwrap();
        let delay = delay_to_next_aligned_boundary(now, Duration::from_secs(900));
        assert_eq!(delay, Duration::from_secs(900));
    }

    #[test]
    fn delay_to_boundary_rounds_up_to_next_quarter_hour() {
        let now = Utc.with_ymd_and_hms(2024, 1, 1, 0, 32, 0).unwrap();
        let delay = delay_to_next_aligned_boundary(now, Duration::from_secs(900));
        assert_eq!(delay, Duration::from_secs(13 * 60));
    }

    #[test]
    fn meter_value_store_roundtrips_readings_by_transaction() {
        let store = MeterValueStore::open(Connection::open_in_memory().unwrap()).unwrap();
        let value = MeterValue {
            timestamp: Utc::now(),
            sampled_value: vec![],
        };
        store.record(1, true, &value).unwrap();
        store.record(2, true, &value).unwrap();
        assert_eq!(store.for_transaction(1).unwrap().len(), 1);
        assert_eq!(store.for_transaction(2).unwrap().len(), 1);
    }

    #[test]
    fn reconcile_orphans_drops_readings_for_dead_transactions() {
        let store = MeterValueStore::open(Connection::open_in_memory().unwrap()).unwrap();
        let value = MeterValue {
            timestamp: Utc::now(),
            sampled_value: vec![],
        };
        store.record(1, true, &value).unwrap();
        store.record(2, true, &value).unwrap();
        let deleted = store.reconcile_orphans(&[2]).unwrap();
        assert_eq!(deleted, 1);
        assert!(store.for_transaction(1).unwrap().is_empty());
        assert_eq!(store.for_transaction(2).unwrap().len(), 1);
    }
}
