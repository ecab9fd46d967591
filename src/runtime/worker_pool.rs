//! Fixed-size worker thread pool.
//!
//! Every manager in this crate submits work here rather than spawning its
//! own threads: timer callbacks, FIFO delivery attempts and dispatcher
//! handlers all run on the pool so that no single caller can starve the
//! others. A submission returns a [`Waiter`] the caller can block on with a
//! timeout, mirroring a future without pulling in an async runtime.

use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::mpsc::{sync_channel, Receiver, SyncSender};
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;
use std::time::Duration;

type Job = Box<dyn FnOnce() + Send + 'static>;

/// A handle to the result of a job submitted to a [`WorkerPool`].
///
/// `T` must be `Send` since the value crosses from the worker thread to
/// whoever calls [`Waiter::wait`].
pub struct Waiter<T> {
    rx: Receiver<std::thread::Result<T>>,
}

impl<T> Waiter<T> {
    /// Blocks until the job completes or `timeout` elapses.
    ///
    /// `Ok(Some(value))` on completion, `Ok(None)` on timeout, `Err(())` if
    /// the job panicked.
    pub fn wait(&self, timeout: Duration) -> Result<Option<T>, ()> {
        match self.rx.recv_timeout(timeout) {
            Ok(Ok(value)) => Ok(Some(value)),
            Ok(Err(_)) => Err(()),
            Err(_) => Ok(None),
        }
    }

    /// Blocks forever until the job completes.
    pub fn wait_forever(self) -> Result<T, ()> {
        self.rx.recv().map_err(|_| ()).and_then(|r| r.map_err(|_| ()))
    }
}

/// A pool of `size` worker threads draining a shared job queue.
///
/// Dropping the pool closes the job queue (so every worker's `recv()`
/// returns an error and its loop exits) and then joins each worker thread.
/// The sender must be dropped *before* joining, or the workers block on
/// `recv()` forever waiting for a sender that is never coming.
pub struct WorkerPool {
    sender: Option<SyncSender<Job>>,
    handles: Vec<JoinHandle<()>>,
}

impl WorkerPool {
    pub fn new(size: usize) -> Self {
        let size = size.max(1);
        let (tx, rx) = sync_channel::<Job>(1024);
        let rx = Arc::new(Mutex::new(rx));

        let mut handles = Vec::with_capacity(size);
        for idx in 0..size {
            let rx = Arc::clone(&rx);
            handles.push(
                std::thread::Builder::new()
                    .name(format!("ocpp-worker-{idx}"))
                    .spawn(move || loop {
                        let job = {
                            let guard = rx.lock().expect("worker queue mutex poisoned");
                            guard.recv()
                        };
                        match job {
                            Ok(job) => job(),
                            Err(_) => break,
                        }
                    })
                    .expect("failed to spawn worker thread"),
            );
        }

        WorkerPool { sender: Some(tx), handles }
    }

    /// Submits a job and returns a [`Waiter`] for its result. The closure's
    /// panic (if any) is caught so one failing job cannot poison the pool.
    pub fn run<F, T>(&self, func: F) -> Waiter<T>
    where
        F: FnOnce() -> T + Send + 'static,
        T: Send + 'static,
    {
        let (tx, rx) = sync_channel(1);
        let job: Job = Box::new(move || {
            let result = catch_unwind(AssertUnwindSafe(func));
            let _ = tx.send(result);
        });
        self.sender
            .as_ref()
            .expect("worker pool queue closed")
            .send(job)
            .expect("worker pool queue closed");
        Waiter { rx }
    }

    /// Fire-and-forget submission for jobs whose result nobody waits on.
    pub fn spawn<F>(&self, func: F)
    where
        F: FnOnce() + Send + 'static,
    {
        let job: Job = Box::new(func);
        if let Some(sender) = &self.sender {
            let _ = sender.send(job);
        }
    }
}

impl Drop for WorkerPool {
    fn drop(&mut self) {
        self.sender.take();
        for handle in self.handles.drain(..) {
            let _ = handle.join();
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn run_returns_value() {
        let pool = WorkerPool::new(2);
        let waiter = pool.run(|| 2 + 2);
        assert_eq!(waiter.wait(Duration::from_secs(1)), Ok(Some(4)));
    }

    #[test]
    fn wait_times_out_on_slow_job() {
        let pool = WorkerPool::new(1);
        let waiter = pool.run(|| {
            std::thread::sleep(Duration::from_millis(200));
            1
        });
        assert_eq!(waiter.wait(Duration::from_millis(10)), Ok(None));
    }

    #[test]
    fn panicking_job_reports_err() {
        let pool = WorkerPool::new(1);
        let waiter: Waiter<()> = pool.run(|| panic!("boom"));
        assert_eq!(waiter.wait(Duration::from_secs(1)), Err(()));
    }

    #[test]
    fn jobs_run_concurrently() {
        let pool = WorkerPool::new(4);
        let waiters: Vec<_> = (0..4)
            .map(|i| {
                pool.run(move || {
                    std::thread::sleep(Duration::from_millis(50));
                    i
                })
            })
            .collect();
        for (i, w) in waiters.into_iter().enumerate() {
            assert_eq!(w.wait(Duration::from_secs(1)), Ok(Some(i)));
        }
    }
}
