//! Timer pool.
//!
//! A single background thread tracks every live timer's next deadline.
//! When a timer fires, its callback is handed to the [`WorkerPool`] rather
//! than run inline on the timer thread — a slow or blocking callback must
//! never delay other timers (boot notification retry, heartbeat, per
//! connector status debounce all share this one thread).

use std::collections::BinaryHeap;
use std::cmp::Ordering;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use crate::runtime::worker_pool::WorkerPool;

type Callback = Box<dyn Fn() + Send + 'static>;

struct Entry {
    deadline: Instant,
    id: u64,
    period: Option<Duration>,
}

impl PartialEq for Entry {
    fn eq(&self, other: &Self) -> bool {
        self.deadline == other.deadline && self.id == other.id
    }
}
impl Eq for Entry {}
impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
impl Ord for Entry {
    fn cmp(&self, other: &Self) -> Ordering {
        // BinaryHeap is a max-heap; we want the earliest deadline first.
        other.deadline.cmp(&self.deadline).then(other.id.cmp(&self.id))
    }
}

struct Registered {
    callback: Callback,
    period: Option<Duration>,
    cancelled: bool,
}

struct Inner {
    heap: BinaryHeap<Entry>,
    registered: std::collections::HashMap<u64, Registered>,
    next_id: u64,
}

/// Owns every live timer and the thread that drives them.
pub struct TimerPool {
    inner: Arc<Mutex<Inner>>,
    wake: Arc<std::sync::Condvar>,
    _thread: std::thread::JoinHandle<()>,
}

/// A handle to a timer registered with a [`TimerPool`]. Dropping the handle
/// does not stop the timer; call [`TimerHandle::stop`] explicitly.
#[derive(Clone)]
pub struct TimerHandle {
    id: u64,
    inner: Arc<Mutex<Inner>>,
    wake: Arc<std::sync::Condvar>,
}

impl TimerHandle {
    pub fn stop(&self) {
        let mut inner = self.inner.lock().expect("timer pool mutex poisoned");
        if let Some(reg) = inner.registered.get_mut(&self.id) {
            reg.cancelled = true;
        }
    }

    /// Reschedules the timer to fire after `delay` from now, replacing any
    /// pending deadline (used by the per-connector MinimumStatusDuration
    /// debounce and by heartbeat interval changes after BootNotification).
    pub fn reschedule(&self, delay: Duration) {
        let mut inner = self.inner.lock().expect("timer pool mutex poisoned");
        let period = inner.registered.get(&self.id).and_then(|r| r.period);
        inner.heap.push(Entry {
            deadline: Instant::now() + delay,
            id: self.id,
            period,
        });
        self.wake.notify_all();
    }
}

impl TimerPool {
    pub fn new(workers: Arc<WorkerPool>) -> Self {
        let inner = Arc::new(Mutex::new(Inner {
            heap: BinaryHeap::new(),
            registered: std::collections::HashMap::new(),
            next_id: 0,
        }));
        let wake = Arc::new(std::sync::Condvar::new());

        let thread_inner = Arc::clone(&inner);
        let thread_wake = Arc::clone(&wake);
        let thread = std::thread::Builder::new()
            .name("ocpp-timer".into())
            .spawn(move || loop {
                let mut guard = thread_inner.lock().expect("timer pool mutex poisoned");
                loop {
                    match guard.heap.peek() {
                        None => {
                            let (g, _) = thread_wake
                                .wait_timeout(guard, Duration::from_secs(3600))
                                .expect("timer condvar poisoned");
                            guard = g;
                            continue;
                        }
                        Some(next) => {
                            let now = Instant::now();
                            if next.deadline <= now {
                                break;
                            }
                            let wait_for = next.deadline - now;
                            let (g, _) = thread_wake
                                .wait_timeout(guard, wait_for)
                                .expect("timer condvar poisoned");
                            guard = g;
                        }
                    }
                }

                let entry = guard.heap.pop().expect("heap non-empty by loop invariant");
                let fire = guard.registered.get(&entry.id).and_then(|reg| {
                    if reg.cancelled {
                        None
                    } else {
                        Some(())
                    }
                });
                if fire.is_some() {
                    if let Some(period) = entry.period {
                        guard.heap.push(Entry {
                            deadline: Instant::now() + period,
                            id: entry.id,
                            period: Some(period),
                        });
                    }
                }
                drop(guard);

                if fire.is_some() {
                    let inner = Arc::clone(&thread_inner);
                    workers.spawn(move || {
                        let guard = inner.lock().expect("timer pool mutex poisoned");
                        if let Some(reg) = guard.registered.get(&entry.id) {
                            if !reg.cancelled {
                                let cb = &reg.callback;
                                cb();
                            }
                        }
                    });
                }
            })
            .expect("failed to spawn timer thread");

        TimerPool {
            inner,
            wake,
            _thread: thread,
        }
    }

    /// Registers a one-shot timer firing after `delay`.
    pub fn one_shot<F>(&self, delay: Duration, callback: F) -> TimerHandle
    where
        F: Fn() + Send + 'static,
    {
        self.register(delay, None, callback)
    }

    /// Registers a periodic timer firing every `period`, first firing after
    /// one period has elapsed.
    pub fn periodic<F>(&self, period: Duration, callback: F) -> TimerHandle
    where
        F: Fn() + Send + 'static,
    {
        self.register(period, Some(period), callback)
    }

    fn register<F>(&self, delay: Duration, period: Option<Duration>, callback: F) -> TimerHandle
    where
        F: Fn() + Send + 'static,
    {
        let mut inner = self.inner.lock().expect("timer pool mutex poisoned");
        let id = inner.next_id;
        inner.next_id += 1;
        inner.registered.insert(
            id,
            Registered {
                callback: Box::new(callback),
                period,
                cancelled: false,
            },
        );
        inner.heap.push(Entry {
            deadline: Instant::now() + delay,
            id,
            period,
        });
        drop(inner);
        self.wake.notify_all();

        TimerHandle {
            id,
            inner: Arc::clone(&self.inner),
            wake: Arc::clone(&self.wake),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering as AtomicOrdering};

    #[test]
    fn one_shot_fires_once() {
        let pool = TimerPool::new(Arc::new(WorkerPool::new(2)));
        let count = Arc::new(AtomicU32::new(0));
        let c = Arc::clone(&count);
        let _handle = pool.one_shot(Duration::from_millis(20), move || {
            c.fetch_add(1, AtomicOrdering::SeqCst);
        });
        std::thread::sleep(Duration::from_millis(150));
        assert_eq!(count.load(AtomicOrdering::SeqCst), 1);
    }

    #[test]
    fn periodic_fires_multiple_times() {
        let pool = TimerPool::new(Arc::new(WorkerPool::new(2)));
        let count = Arc::new(AtomicU32::new(0));
        let c = Arc::clone(&count);
        let handle = pool.periodic(Duration::from_millis(20), move || {
            c.fetch_add(1, AtomicOrdering::SeqCst);
        });
        std::thread::sleep(Duration::from_millis(130));
        handle.stop();
        assert!(count.load(AtomicOrdering::SeqCst) >= 3);
    }

    #[test]
    fn stopped_timer_does_not_fire() {
        let pool = TimerPool::new(Arc::new(WorkerPool::new(2)));
        let count = Arc::new(AtomicU32::new(0));
        let c = Arc::clone(&count);
        let handle = pool.one_shot(Duration::from_millis(50), move || {
            c.fetch_add(1, AtomicOrdering::SeqCst);
        });
        handle.stop();
        std::thread::sleep(Duration::from_millis(150));
        assert_eq!(count.load(AtomicOrdering::SeqCst), 0);
    }
}
