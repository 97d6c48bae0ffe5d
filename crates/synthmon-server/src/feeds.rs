//! Per-metric bounded channels.
//!
//! One queue per metric stream, capacity-limited, with exactly one producer
//! task and one consumer handler. The bootstrap owns channel creation and
//! injects the consumer ends into the handlers; there is no ambient or
//! global queue state.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{mpsc, Mutex};

use synthmon_core::error::{Result, SynthmonError};
use synthmon_core::metric::MetricId;

use crate::gen;

/// Consumer end of one metric stream.
///
/// Concurrent requests to the same endpoint serialize on the inner mutex so
/// each sample is delivered to exactly one request.
#[derive(Clone)]
pub struct MetricFeed {
    id: MetricId,
    rx: Arc<Mutex<mpsc::Receiver<u64>>>,
}

impl MetricFeed {
    fn new(id: MetricId, rx: mpsc::Receiver<u64>) -> Self {
        Self { id, rx: Arc::new(Mutex::new(rx)) }
    }

    pub fn id(&self) -> MetricId {
        self.id
    }

    /// Pop the oldest buffered sample, waiting while the queue is empty.
    /// A popped sample is gone for good; it is never replayed to another
    /// request. Fails only when the producer task is gone.
    pub async fn next(&self) -> Result<u64> {
        let mut rx = self.rx.lock().await;
        rx.recv().await.ok_or(SynthmonError::StreamClosed(self.id.as_str()))
    }
}

/// Producer ends, one bounded sender per metric stream.
pub struct MetricTaps {
    pub free_mem: mpsc::Sender<u64>,
    pub used_mem: mpsc::Sender<u64>,
    pub cached_mem: mpsc::Sender<u64>,
    pub active_pages: mpsc::Sender<u64>,
    pub inactive_pages: mpsc::Sender<u64>,
    pub total_swap: mpsc::Sender<u64>,
    pub used_swap: mpsc::Sender<u64>,
    pub free_swap: mpsc::Sender<u64>,
    pub minor_faults: mpsc::Sender<u64>,
    pub major_faults: mpsc::Sender<u64>,
    pub proc_sample: mpsc::Sender<u64>,
}

impl MetricTaps {
    /// Start one generator task per stream, consuming the taps. Each task
    /// gets an independent random source. The tasks are detached; they run
    /// until their consumer side is dropped.
    pub fn spawn_generators(self, tick: Duration, bound: u64) {
        let taps = [
            (MetricId::FreeMemory, self.free_mem),
            (MetricId::UsedMemory, self.used_mem),
            (MetricId::CachedMemory, self.cached_mem),
            (MetricId::ActivePages, self.active_pages),
            (MetricId::InactivePages, self.inactive_pages),
            (MetricId::TotalSwap, self.total_swap),
            (MetricId::UsedSwap, self.used_swap),
            (MetricId::FreeSwap, self.free_swap),
            (MetricId::MinorFaults, self.minor_faults),
            (MetricId::MajorFaults, self.major_faults),
            (MetricId::ProcSample, self.proc_sample),
        ];
        for (id, tx) in taps {
            let _ = gen::spawn_generator(id, tx, tick, bound);
        }
    }
}

/// Consumer ends for every stream, grouped for endpoint wiring.
#[derive(Clone)]
pub struct MetricFeeds {
    pub free_mem: MetricFeed,
    pub used_mem: MetricFeed,
    pub cached_mem: MetricFeed,
    pub active_pages: MetricFeed,
    pub inactive_pages: MetricFeed,
    pub total_swap: MetricFeed,
    pub used_swap: MetricFeed,
    pub free_swap: MetricFeed,
    pub minor_faults: MetricFeed,
    pub major_faults: MetricFeed,
    pub proc_sample: MetricFeed,
}

impl MetricFeeds {
    /// Allocate one bounded queue per metric. Returns the producer taps and
    /// the consumer feeds; tests can hold the taps and inject deterministic
    /// samples instead of spawning generators.
    pub fn bounded(capacity: usize) -> (MetricTaps, MetricFeeds) {
        fn chan(id: MetricId, capacity: usize) -> (mpsc::Sender<u64>, MetricFeed) {
            let (tx, rx) = mpsc::channel(capacity);
            (tx, MetricFeed::new(id, rx))
        }

        let (free_mem_tx, free_mem) = chan(MetricId::FreeMemory, capacity);
        let (used_mem_tx, used_mem) = chan(MetricId::UsedMemory, capacity);
        let (cached_mem_tx, cached_mem) = chan(MetricId::CachedMemory, capacity);
        let (active_pages_tx, active_pages) = chan(MetricId::ActivePages, capacity);
        let (inactive_pages_tx, inactive_pages) = chan(MetricId::InactivePages, capacity);
        let (total_swap_tx, total_swap) = chan(MetricId::TotalSwap, capacity);
        let (used_swap_tx, used_swap) = chan(MetricId::UsedSwap, capacity);
        let (free_swap_tx, free_swap) = chan(MetricId::FreeSwap, capacity);
        let (minor_faults_tx, minor_faults) = chan(MetricId::MinorFaults, capacity);
        let (major_faults_tx, major_faults) = chan(MetricId::MajorFaults, capacity);
        let (proc_sample_tx, proc_sample) = chan(MetricId::ProcSample, capacity);

        let taps = MetricTaps {
            free_mem: free_mem_tx,
            used_mem: used_mem_tx,
            cached_mem: cached_mem_tx,
            active_pages: active_pages_tx,
            inactive_pages: inactive_pages_tx,
            total_swap: total_swap_tx,
            used_swap: used_swap_tx,
            free_swap: free_swap_tx,
            minor_faults: minor_faults_tx,
            major_faults: major_faults_tx,
            proc_sample: proc_sample_tx,
        };
        let feeds = MetricFeeds {
            free_mem,
            used_mem,
            cached_mem,
            active_pages,
            inactive_pages,
            total_swap,
            used_swap,
            free_swap,
            minor_faults,
            major_faults,
            proc_sample,
        };
        (taps, feeds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn feed_is_fifo() {
        let (taps, feeds) = MetricFeeds::bounded(4);
        taps.free_mem.send(1).await.unwrap();
        taps.free_mem.send(2).await.unwrap();
        taps.free_mem.send(3).await.unwrap();
        assert_eq!(feeds.free_mem.next().await.unwrap(), 1);
        assert_eq!(feeds.free_mem.next().await.unwrap(), 2);
        assert_eq!(feeds.free_mem.next().await.unwrap(), 3);
    }

    #[tokio::test]
    async fn closed_tap_surfaces_stream_closed() {
        let (taps, feeds) = MetricFeeds::bounded(4);
        drop(taps);
        let err = feeds.used_mem.next().await.unwrap_err();
        assert!(matches!(
            err,
            synthmon_core::SynthmonError::StreamClosed("used_memory")
        ));
    }

    #[tokio::test]
    async fn queues_are_independent() {
        let (taps, feeds) = MetricFeeds::bounded(2);
        taps.minor_faults.send(7).await.unwrap();
        taps.major_faults.send(8).await.unwrap();
        // draining one stream never consumes from another
        assert_eq!(feeds.minor_faults.next().await.unwrap(), 7);
        assert_eq!(feeds.major_faults.next().await.unwrap(), 8);
    }
}
