//! Synthetic sample generators.
//!
//! One task per metric stream: draw a uniform integer, push it into the
//! stream's bounded queue, sleep one tick, repeat forever. `send` suspends
//! the task while the queue is full, so a stream never buffers more than
//! its capacity plus the one in-flight sample.

use std::time::Duration;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use synthmon_core::metric::MetricId;

/// Spawn the generator task for one stream. Samples are uniform in
/// `[0, bound)`. The task exits only when the consumer side is dropped.
pub fn spawn_generator(
    id: MetricId,
    tx: mpsc::Sender<u64>,
    tick: Duration,
    bound: u64,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        // independent source per stream
        let mut rng = StdRng::from_entropy();
        tracing::debug!(metric = id.as_str(), "generator started");
        loop {
            let sample = rng.gen_range(0..bound);
            if tx.send(sample).await.is_err() {
                tracing::debug!(metric = id.as_str(), "feed dropped, generator stopping");
                break;
            }
            tokio::time::sleep(tick).await;
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn samples_respect_bound() {
        let (tx, mut rx) = mpsc::channel(4);
        spawn_generator(MetricId::FreeMemory, tx, Duration::from_secs(1), 100);
        for _ in 0..20 {
            let v = rx.recv().await.unwrap();
            assert!(v < 100);
        }
    }

    #[tokio::test(start_paused = true)]
    async fn stops_when_receiver_dropped() {
        let (tx, rx) = mpsc::channel(1);
        let handle = spawn_generator(MetricId::UsedMemory, tx, Duration::from_secs(1), 10);
        drop(rx);
        handle.await.unwrap();
    }
}
