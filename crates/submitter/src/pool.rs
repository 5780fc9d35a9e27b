// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The local submitter: `N` worker threads draining the shared [`Queue`],
//! plus the drain rule from §5 — a manager polls at roughly 1 Hz until
//! the queue is empty *and* no worker is mid-execution, then signals
//! shutdown and joins.

use crate::queue::Queue;
use pw_config::{Config, SubmitFn};
use std::panic::AssertUnwindSafe;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

const DEFAULT_POLL_TIMEOUT: Duration = Duration::from_millis(200);
const DEFAULT_DRAIN_POLL_INTERVAL: Duration = Duration::from_millis(1000);

/// Bounded worker pool consuming a single shared queue of configurations.
pub struct LocalSubmitter {
    num_workers: usize,
    poll_timeout: Duration,
    drain_poll_interval: Duration,
}

impl LocalSubmitter {
    pub fn new(num_workers: usize) -> Self {
        Self {
            num_workers: num_workers.max(1),
            poll_timeout: DEFAULT_POLL_TIMEOUT,
            drain_poll_interval: DEFAULT_DRAIN_POLL_INTERVAL,
        }
    }

    /// Override the drain-check cadence; exposed for tests so they don't
    /// have to wait a full second per run.
    pub fn with_drain_poll_interval(mut self, interval: Duration) -> Self {
        self.drain_poll_interval = interval;
        self
    }

    pub fn with_poll_timeout(mut self, timeout: Duration) -> Self {
        self.poll_timeout = timeout;
        self
    }

    /// Seed the queue with `initial`, then run every worker until the
    /// queue drains: empty *and* no worker executing. `handle` is invoked
    /// once per dequeued configuration, given the submission callback it
    /// (and anything it calls) can use to enqueue more work.
    pub fn run<F>(&self, initial: Config, handle: F)
    where
        F: Fn(Config, SubmitFn) + Send + Sync + 'static,
    {
        let queue = Arc::new(Queue::new());
        queue.push(initial);

        let handle = Arc::new(handle);
        let submit_fn: SubmitFn = {
            let queue = queue.clone();
            Arc::new(move |config| queue.push(config))
        };

        let shutdown = Arc::new(AtomicBool::new(false));
        let executing: Vec<Arc<AtomicBool>> = (0..self.num_workers)
            .map(|_| Arc::new(AtomicBool::new(false)))
            .collect();

        let threads: Vec<_> = (0..self.num_workers)
            .map(|i| {
                let queue = queue.clone();
                let handle = handle.clone();
                let submit_fn = submit_fn.clone();
                let executing = executing[i].clone();
                let shutdown = shutdown.clone();
                let poll_timeout = self.poll_timeout;
                thread::spawn(move || {
                    worker_loop(&queue, handle.as_ref(), submit_fn, &executing, &shutdown, poll_timeout)
                })
            })
            .collect();

        loop {
            thread::sleep(self.drain_poll_interval);
            let all_idle = executing.iter().all(|e| !e.load(Ordering::SeqCst));
            if queue.is_empty() && all_idle {
                shutdown.store(true, Ordering::SeqCst);
                break;
            }
        }

        for thread in threads {
            let _ = thread.join();
        }
    }
}

fn worker_loop(
    queue: &Queue,
    handle: &(dyn Fn(Config, SubmitFn) + Send + Sync),
    submit_fn: SubmitFn,
    executing: &AtomicBool,
    shutdown: &AtomicBool,
    poll_timeout: Duration,
) {
    while !shutdown.load(Ordering::SeqCst) {
        let Some(config) = queue.pop_timeout(poll_timeout) else {
            continue;
        };
        executing.store(true, Ordering::SeqCst);
        let result = std::panic::catch_unwind(AssertUnwindSafe(|| {
            handle(config, submit_fn.clone());
        }));
        if let Err(payload) = result {
            let message = payload
                .downcast_ref::<&str>()
                .map(|s| s.to_string())
                .or_else(|| payload.downcast_ref::<String>().cloned())
                .unwrap_or_else(|| "handler panicked with a non-string payload".to_string());
            tracing::error!(%message, "job handler panicked; pipeline dropped");
        }
        executing.store(false, Ordering::SeqCst);
    }
}

#[cfg(test)]
#[path = "pool_tests.rs"]
mod tests;
