//! Asynchronous entropy collection.
//!
//! When the caller has no entropy at hand, generation waits on an
//! [`EntropyCollector`]. A collector hands back an [`EntropyRequest`], a
//! single-shot future that resolves once enough entropy has accumulated.
//! Dropping the request tells the collector to stop.

use core::future::Future;
use core::pin::Pin;
use core::task::{Context, Poll};
use std::hint::black_box;
use std::thread;
use std::time::Instant;

use futures::channel::oneshot;
use zeroize::Zeroizing;

use crate::{Error, Result};

/// Source of entropy that completes asynchronously.
pub trait EntropyCollector {
    /// Start gathering at least `bits` bits of entropy.
    fn collect(&self, bits: u32) -> EntropyRequest;
}

/// Pending entropy from a collector.
#[derive(Debug)]
#[must_use = "entropy requests do nothing unless awaited"]
pub struct EntropyRequest {
    rx: oneshot::Receiver<Result<Zeroizing<Vec<u8>>>>,
}

/// Completion side of an [`EntropyRequest`]. Usable once.
#[derive(Debug)]
pub struct EntropySender {
    tx: oneshot::Sender<Result<Zeroizing<Vec<u8>>>>,
}

impl EntropyRequest {
    /// Create a connected sender and request.
    pub fn channel() -> (EntropySender, Self) {
        let (tx, rx) = oneshot::channel();
        (EntropySender { tx }, Self { rx })
    }

    /// A request that is already complete.
    pub fn ready(bytes: Vec<u8>) -> Self {
        let (sender, request) = Self::channel();
        sender.send(bytes);
        request
    }
}

impl Future for EntropyRequest {
    type Output = Result<Zeroizing<Vec<u8>>>;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        Pin::new(&mut self.rx).poll(cx).map(|delivered| match delivered {
            Ok(Ok(bytes)) if !bytes.is_empty() => Ok(bytes),
            Ok(Ok(_)) | Err(oneshot::Canceled) => Err(Error::EntropyCollectionFailed),
            Ok(Err(err)) => Err(err),
        })
    }
}

impl EntropySender {
    /// Deliver the collected bytes. Returns false if the request was dropped.
    pub fn send(self, bytes: Vec<u8>) -> bool {
        self.tx.send(Ok(Zeroizing::new(bytes))).is_ok()
    }

    /// Report that collection failed.
    pub fn fail(self, err: Error) -> bool {
        self.tx.send(Err(err)).is_ok()
    }

    /// Whether the request side has been dropped.
    #[must_use]
    pub fn is_canceled(&self) -> bool {
        self.tx.is_canceled()
    }
}

/// Spin iterations per timing sample.
const SPIN_ROUNDS: u64 = 1_000;

/// Collects entropy from clock jitter on a background thread.
///
/// Each sample times a short busy loop and keeps the low byte of the
/// elapsed nanoseconds. Samples are credited conservatively, one bit each
/// by default, and the thread stops after its single delivery.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JitterCollector {
    samples_per_bit: u32,
}

impl Default for JitterCollector {
    fn default() -> Self {
        Self { samples_per_bit: 1 }
    }
}

impl JitterCollector {
    /// Create a collector crediting one bit per sample.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Take `samples` timing samples for every credited bit.
    #[must_use]
    pub fn with_samples_per_bit(mut self, samples: u32) -> Self {
        self.samples_per_bit = samples.max(1);
        self
    }

    fn sample() -> u8 {
        let start = Instant::now();
        let mut acc = 0u64;
        for i in 0..SPIN_ROUNDS {
            acc = black_box(acc.wrapping_mul(0x5851_f42d_4c95_7f2d).wrapping_add(i));
        }
        black_box(acc);
        start.elapsed().subsec_nanos() as u8
    }
}

impl EntropyCollector for JitterCollector {
    fn collect(&self, bits: u32) -> EntropyRequest {
        let (sender, request) = EntropyRequest::channel();
        let samples = (bits.max(8) as usize) * self.samples_per_bit as usize;

        let spawned = thread::Builder::new()
            .name("brainseed-jitter".into())
            .spawn(move || {
                let mut pool = Vec::with_capacity(samples);
                for _ in 0..samples {
                    if sender.is_canceled() {
                        log::debug!("jitter collection canceled");
                        return;
                    }
                    pool.push(Self::sample());
                }
                log::debug!("collected {} jitter samples", pool.len());
                sender.send(pool);
            });

        if let Err(err) = spawned {
            // The sender moved into the failed closure and was dropped, so
            // the request resolves to `EntropyCollectionFailed`.
            log::warn!("could not start jitter collector: {err}");
        }
        request
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use futures::executor::block_on;

    #[test]
    fn ready_request_resolves() {
        let bytes = block_on(EntropyRequest::ready(vec![1, 2, 3])).unwrap();
        assert_eq!(bytes.as_slice(), &[1, 2, 3]);
    }

    #[test]
    fn dropped_sender_fails() {
        let (sender, request) = EntropyRequest::channel();
        drop(sender);
        assert_eq!(block_on(request), Err(Error::EntropyCollectionFailed));
    }

    #[test]
    fn empty_delivery_fails() {
        assert_eq!(
            block_on(EntropyRequest::ready(Vec::new())),
            Err(Error::EntropyCollectionFailed)
        );
    }

    #[test]
    fn reported_failure_propagates() {
        let (sender, request) = EntropyRequest::channel();
        assert!(sender.fail(Error::MissingEntropySource));
        assert_eq!(block_on(request), Err(Error::MissingEntropySource));
    }

    #[test]
    fn dropped_request_cancels_sender() {
        let (sender, request) = EntropyRequest::channel();
        drop(request);
        assert!(sender.is_canceled());
        assert!(!sender.send(vec![1]));
    }

    #[test]
    fn jitter_collector_delivers_samples() {
        let bytes = block_on(JitterCollector::new().collect(132)).unwrap();
        assert_eq!(bytes.len(), 132);

        let bytes = block_on(JitterCollector::new().with_samples_per_bit(2).collect(16)).unwrap();
        assert_eq!(bytes.len(), 32);
    }
}
