//! Ingestion trigger and consumption pass.
//!
//! Two asynchronous entry points meet here. The host's "bytes available"
//! callback records a pending count through [`RxPending::notify`]; the
//! host's periodic timer drives [`GpsReceiver::poll`], which drains exactly
//! that many bytes and pushes every complete line through the dispatcher.
//! The host runtime must not run two `poll` passes concurrently; `notify`
//! and fix queries may interleave freely with a running pass.

use embassy_sync::blocking_mutex::raw::RawMutex;
use portable_atomic::{AtomicUsize, Ordering};

use crate::dispatch::{dispatch_line, IngestStats};
use crate::framer;
use crate::serial::{SerialConfig, SerialPort};
use crate::store::FixStore;

/// Most bytes drained by a single consumption pass.
///
/// Announcements beyond this stay in the driver FIFO and are picked up when
/// the driver announces them again.
pub const RX_BUF_LEN: usize = 1024;

/// Pending-byte count shared between the rx-available notification and the
/// periodic consumer.
///
/// A single word with replace semantics: at most one outstanding batch is
/// tracked, and a fresh announcement overwrites an unconsumed one rather
/// than accumulating. Under a burst that loses the earlier announcement's
/// count, never already-parsed fixes.
#[derive(Debug, Default)]
pub struct RxPending {
    count: AtomicUsize,
}

impl RxPending {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            count: AtomicUsize::new(0),
        }
    }

    /// Record that `count` bytes are waiting in the driver.
    ///
    /// Call from the driver's rx-available callback. A zero count is not
    /// recorded and does not clear a previously recorded one.
    pub fn notify(&self, count: usize) {
        if count > 0 {
            self.count.store(count, Ordering::Release);
        }
    }

    /// The currently recorded count.
    #[must_use]
    pub fn count(&self) -> usize {
        self.count.load(Ordering::Acquire)
    }

    /// Claim the recorded count for consumption, resetting it to zero.
    pub(crate) fn take(&self) -> usize {
        self.count.swap(0, Ordering::AcqRel)
    }
}

/// Owns the serial port and runs the receive pipeline.
///
/// The shared pieces, [`RxPending`] and [`FixStore`], are injected by
/// reference so the rest of the firmware can reach them from its own
/// contexts (typically all three live in `static`s).
///
/// # Wiring
///
/// 1. Construct with [`GpsReceiver::new`], which applies the UART
///    configuration; a rejected configuration aborts bring-up.
/// 2. Register a callback with the driver that forwards its available-byte
///    count to [`RxPending::notify`].
/// 3. Register [`GpsReceiver::poll`] with the host's periodic timer.
/// 4. Query [`FixStore::fix`] from anywhere, at any time.
pub struct GpsReceiver<'a, S, M: RawMutex> {
    serial: S,
    pending: &'a RxPending,
    store: &'a FixStore<M>,
    stats: IngestStats,
}

impl<'a, S: SerialPort, M: RawMutex> GpsReceiver<'a, S, M> {
    /// Configure the serial peripheral and assemble the receiver.
    ///
    /// Fails only if the driver rejects the configuration.
    pub fn new(
        mut serial: S,
        config: &SerialConfig,
        pending: &'a RxPending,
        store: &'a FixStore<M>,
    ) -> Result<Self, S::Error> {
        serial.configure(config)?;
        Ok(Self {
            serial,
            pending,
            store,
            stats: IngestStats::default(),
        })
    }

    /// One consumption pass; call on every periodic tick.
    ///
    /// Claims the pending count, reads that many bytes (bounded by
    /// [`RX_BUF_LEN`]) into a buffer that lives for this pass only, and
    /// dispatches every complete line in arrival order. A tick with nothing
    /// pending returns immediately.
    ///
    /// Returns the number of bytes drained. A driver read error ends the
    /// pass early; fixes parsed by earlier passes are unaffected and the
    /// next tick proceeds normally.
    pub fn poll(&mut self) -> Result<usize, S::Error> {
        let pending = self.pending.take();
        if pending == 0 {
            return Ok(0);
        }

        let mut buf = [0u8; RX_BUF_LEN];
        let want = pending.min(RX_BUF_LEN);
        let got = self.serial.read(&mut buf[..want])?;
        for line in framer::lines(&buf[..got]) {
            dispatch_line(line, self.store, &mut self.stats);
        }
        Ok(got)
    }

    /// Counters accumulated since construction.
    #[must_use]
    pub fn stats(&self) -> IngestStats {
        self.stats
    }

    /// The store this receiver publishes into.
    #[must_use]
    pub fn store(&self) -> &FixStore<M> {
        self.store
    }
}
