//! Status & registration manager.
//!
//! Grounded in `StatusManager.cpp`: owns the BootNotification state
//! machine, the heartbeat cadence, per-connector MinimumStatusDuration
//! debounce, and reconnection catch-up (re-sending StatusNotification for
//! any connector whose status drifted while offline).

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use chrono::Utc;

use crate::point_init::boot_notification::BootNotificationStatus;
use crate::runtime::connectors::Connectors16;
use crate::runtime::timer::{TimerHandle, TimerPool};

/// 2.0.1 enforces a 24 hour ceiling on the heartbeat interval regardless of
/// what the Central System configures — a Charge Point SHALL still send at
/// least one Heartbeat per day.
pub const MAX_HEARTBEAT_INTERVAL_201: Duration = Duration::from_secs(24 * 60 * 60);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegistrationStatus {
    Pending,
    Accepted,
    Rejected,
}

/// Observes registration-status transitions, so a component whose gating
/// depends on "connected AND Accepted" (the request FIFO's delivery loop)
/// doesn't need to poll `StatusManager` itself.
pub trait RegistrationListener: Send + Sync {
    fn registration_status_changed(&self, status: RegistrationStatus);
}

impl From<BootNotificationStatus> for RegistrationStatus {
    fn from(value: BootNotificationStatus) -> Self {
        match value {
            BootNotificationStatus::Accepted => RegistrationStatus::Accepted,
            BootNotificationStatus::Pending => RegistrationStatus::Pending,
            BootNotificationStatus::Rejected => RegistrationStatus::Rejected,
        }
    }
}

/// Callbacks the manager needs from its owner, kept narrow so it doesn't
/// need the whole `ChargePoint`.
pub trait StatusManagerSink: Send + Sync {
    fn send_boot_notification(&self);
    fn send_heartbeat(&self);
    fn send_status_notification(&self, connector_id: u32);
}

struct Inner {
    registration: RegistrationStatus,
    heartbeat_interval: Duration,
    boot_timer: Option<TimerHandle>,
    heartbeat_timer: Option<TimerHandle>,
    ocpp_201: bool,
}

/// Drives registration and heartbeat lifecycle for a charge point.
pub struct StatusManager {
    inner: Mutex<Inner>,
    timers: Arc<TimerPool>,
    sink: Arc<dyn StatusManagerSink>,
    connectors: Arc<Connectors16>,
    connected: AtomicBool,
    registration_listener: Mutex<Option<Arc<dyn RegistrationListener>>>,
}

impl StatusManager {
    pub fn new(
        timers: Arc<TimerPool>,
        sink: Arc<dyn StatusManagerSink>,
        connectors: Arc<Connectors16>,
        ocpp_201: bool,
    ) -> Self {
        StatusManager {
            inner: Mutex::new(Inner {
                registration: RegistrationStatus::Pending,
                heartbeat_interval: Duration::from_secs(60),
                boot_timer: None,
                heartbeat_timer: None,
                ocpp_201,
            }),
            timers,
            sink,
            connectors,
            connected: AtomicBool::new(false),
            registration_listener: Mutex::new(None),
        }
    }

    /// Registers a component to be notified whenever registration status
    /// changes, e.g. the request FIFO's delivery gate.
    pub fn register_registration_listener(&self, listener: Arc<dyn RegistrationListener>) {
        *self.registration_listener.lock().expect("status manager listener mutex poisoned") = Some(listener);
    }

    fn notify_registration_listener(&self, status: RegistrationStatus) {
        if let Some(listener) = self.registration_listener.lock().expect("status manager listener mutex poisoned").as_ref() {
            listener.registration_status_changed(status);
        }
    }

    pub fn registration_status(&self) -> RegistrationStatus {
        self.inner.lock().expect("status manager mutex poisoned").registration
    }

    pub fn force_registration_status(&self, status: RegistrationStatus) {
        self.inner.lock().expect("status manager mutex poisoned").registration = status;
        self.notify_registration_listener(status);
    }

    /// Handles a BootNotification.conf: updates registration state, clamps
    /// and applies the heartbeat interval (2.0.1's 24h ceiling), and
    /// restarts retry timers as needed.
    pub fn boot_notification_confirmed(&self, status: BootNotificationStatus, interval: Duration) {
        let registration: RegistrationStatus = status.into();
        let mut inner = self.inner.lock().expect("status manager mutex poisoned");
        inner.registration = registration;
        self.notify_registration_listener(registration);

        let effective_interval = if inner.ocpp_201 {
            interval.min(MAX_HEARTBEAT_INTERVAL_201)
        } else {
            interval
        };
        inner.heartbeat_interval = effective_interval;

        if registration == RegistrationStatus::Accepted {
            let sink = Arc::clone(&self.sink);
            inner.heartbeat_timer = Some(self.timers.periodic(effective_interval, move || {
                sink.send_heartbeat();
            }));
            inner.boot_timer = None;
        } else {
            let retry = if interval.is_zero() { Duration::from_secs(30) } else { interval };
            let sink = Arc::clone(&self.sink);
            inner.boot_timer = Some(self.timers.one_shot(retry, move || {
                sink.send_boot_notification();
            }));
        }
    }

    /// Called when the transport connects or disconnects. On reconnect
    /// while accepted, re-sends StatusNotification for every drifted
    /// connector; on disconnect, stops the heartbeat and boot timers since
    /// neither can be usefully retried while offline.
    pub fn update_connection_status(&self, online: bool) {
        self.connected.store(online, Ordering::SeqCst);
        if !online {
            let mut inner = self.inner.lock().expect("status manager mutex poisoned");
            if let Some(h) = inner.heartbeat_timer.take() {
                h.stop();
            }
            if let Some(h) = inner.boot_timer.take() {
                h.stop();
            }
            return;
        }

        let registration = self.inner.lock().expect("status manager mutex poisoned").registration;
        if registration != RegistrationStatus::Accepted {
            self.sink.send_boot_notification();
            return;
        }

        for connector_id in self.connectors.drifted() {
            self.sink.send_status_notification(connector_id);
            self.connectors.with_connector(connector_id, |state| {
                state.last_notified_status = Some(state.status.clone());
            });
        }
    }

    /// Updates a connector's status, applying the MinimumStatusDuration
    /// debounce: the notification is deferred by one debounce window and
    /// only sent if the status is still current when the timer fires.
    pub fn update_connector_status(
        self: &Arc<Self>,
        connector_id: u32,
        status: crate::point_init::status_notification::StatusNotificationStatus,
        minimum_status_duration: Duration,
    ) {
        let now = Utc::now();
        self.connectors.with_connector(connector_id, |state| {
            state.status = status.clone();
            state.status_timestamp = now;
        });

        if minimum_status_duration.is_zero() {
            self.sink.send_status_notification(connector_id);
            self.connectors.with_connector(connector_id, |state| {
                state.last_notified_status = Some(state.status.clone());
            });
            return;
        }

        let this = Arc::clone(self);
        self.timers.one_shot(minimum_status_duration, move || {
            let still_current = this
                .connectors
                .with_connector(connector_id, |state| state.status_timestamp == now)
                .unwrap_or(false);
            if still_current {
                this.sink.send_status_notification(connector_id);
                this.connectors.with_connector(connector_id, |state| {
                    state.last_notified_status = Some(state.status.clone());
                });
            }
        });
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::runtime::worker_pool::WorkerPool;
    use std::sync::atomic::AtomicU32;

    struct CountingSink {
        heartbeats: AtomicU32,
        boots: AtomicU32,
        statuses: Mutex<Vec<u32>>,
    }

    impl StatusManagerSink for CountingSink {
        fn send_boot_notification(&self) {
            self.boots.fetch_add(1, Ordering::SeqCst);
        }
        fn send_heartbeat(&self) {
            self.heartbeats.fetch_add(1, Ordering::SeqCst);
        }
        fn send_status_notification(&self, connector_id: u32) {
            self.statuses.lock().unwrap().push(connector_id);
        }
    }

    fn manager(ocpp_201: bool) -> (Arc<StatusManager>, Arc<CountingSink>) {
        let timers = Arc::new(TimerPool::new(Arc::new(WorkerPool::new(2))));
        let sink = Arc::new(CountingSink {
            heartbeats: AtomicU32::new(0),
            boots: AtomicU32::new(0),
            statuses: Mutex::new(Vec::new()),
        });
        let connectors = Arc::new(Connectors16::new(1, Utc::now()));
        let manager = Arc::new(StatusManager::new(timers, Arc::clone(&sink) as Arc<dyn StatusManagerSink>, connectors, ocpp_201));
        (manager, sink)
    }

    #[test]
    fn accepted_boot_starts_heartbeat_timer() {
        let (manager, sink) = manager(false);
        manager.boot_notification_confirmed(BootNotificationStatus::Accepted, Duration::from_millis(30));
        std::thread::sleep(Duration::from_millis(100));
        assert!(sink.heartbeats.load(Ordering::SeqCst) >= 2);
    }

    #[test]
    fn ocpp_201_clamps_heartbeat_to_24h() {
        let (manager, _sink) = manager(true);
        manager.boot_notification_confirmed(BootNotificationStatus::Accepted, Duration::from_secs(999_999));
        let interval = manager.inner.lock().unwrap().heartbeat_interval;
        assert_eq!(interval, MAX_HEARTBEAT_INTERVAL_201);
    }

    #[test]
    fn rejected_boot_schedules_retry_not_heartbeat() {
        let (manager, sink) = manager(false);
        manager.boot_notification_confirmed(BootNotificationStatus::Rejected, Duration::from_millis(20));
        std::thread::sleep(Duration::from_millis(80));
        assert!(sink.boots.load(Ordering::SeqCst) >= 1);
        assert_eq!(sink.heartbeats.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn debounced_status_update_fires_after_window() {
        let (manager, sink) = manager(false);
        manager.update_connector_status(
            1,
            crate::point_init::status_notification::StatusNotificationStatus::Charging,
            Duration::from_millis(30),
        );
        assert!(sink.statuses.lock().unwrap().is_empty());
        std::thread::sleep(Duration::from_millis(100));
        assert_eq!(*sink.statuses.lock().unwrap(), vec![1]);
    }

    #[test]
    fn reconnect_resends_drifted_connectors_when_accepted() {
        let (manager, sink) = manager(false);
        manager.force_registration_status(RegistrationStatus::Accepted);
        manager.connectors.with_connector(1, |state| {
            state.status = crate::point_init::status_notification::StatusNotificationStatus::Charging;
        });
        manager.update_connection_status(true);
        assert_eq!(*sink.statuses.lock().unwrap(), vec![1]);
    }
}
