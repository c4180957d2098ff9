//! UART NMEA-0183 ingestion core.
//!
//! Turns bytes arriving asynchronously on a serial line into a structured,
//! queryable "last known fix". The crate owns the receive pipeline only;
//! the UART driver, the periodic timer, and the NMEA grammar (the [`nmea`]
//! crate) stay outside it.
//!
//! # Pipeline
//!
//! 1. The driver's rx callback reports its available-byte count through
//!    [`RxPending::notify`]. Nothing is copied at this point; a fresh
//!    report replaces an unconsumed one.
//! 2. The periodic tick runs [`GpsReceiver::poll`], which drains exactly
//!    the reported bytes into a buffer that lives for this pass only.
//! 3. [`framer::lines`] splits the batch at `\n` boundaries; a fragment
//!    with no terminator yet is dropped, not carried into the next pass.
//! 4. Each line is truncated to [`MAX_SENTENCE_LEN`], decoded, and routed:
//!    position/velocity sentences replace the [`FixStore`] record, fix
//!    quality and satellite visibility are logged for diagnostics, and
//!    everything else is dropped silently.
//! 5. Any other part of the firmware reads [`FixStore::fix`] at any time.
//!
//! # Example
//!
//! ```
//! use embassy_sync::blocking_mutex::raw::NoopRawMutex;
//! use uart_gps::{FixStore, GpsReceiver, RxPending, SerialConfig, SerialPort};
//!
//! struct LoopbackPort(Vec<u8>);
//!
//! impl SerialPort for LoopbackPort {
//!     type Error = core::convert::Infallible;
//!
//!     fn configure(&mut self, _: &SerialConfig) -> Result<(), Self::Error> {
//!         Ok(())
//!     }
//!
//!     fn read(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error> {
//!         let n = self.0.len().min(buf.len());
//!         buf[..n].copy_from_slice(&self.0[..n]);
//!         self.0.drain(..n);
//!         Ok(n)
//!     }
//! }
//!
//! let sentence = b"$GPRMC,123519,A,4807.038,N,01131.000,E,022.4,084.4,230394,003.1,W*6A\r\n";
//! let pending = RxPending::new();
//! let store = FixStore::<NoopRawMutex>::new();
//! let port = LoopbackPort(sentence.to_vec());
//! let mut rx = GpsReceiver::new(port, &SerialConfig::default(), &pending, &store)?;
//!
//! pending.notify(sentence.len());
//! rx.poll()?;
//!
//! let fix = store.fix();
//! assert!((fix.latitude - 48.1173).abs() < 1e-4);
//! # Ok::<(), core::convert::Infallible>(())
//! ```
//!
//! On hardware the store and the pending counter live in `static`s, the
//! store is instantiated with `CriticalSectionRawMutex`, and the two
//! callbacks above are the UART interrupt and a repeating timer.
//!
//! # Features
//!
//! - **`std`**: enable the standard library for host use
//! - **`defmt`**: `defmt::Format` derives on the public data types
//! - **`serde`**: `Serialize`/`Deserialize` on [`FixRecord`] and [`GpsFix`]

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(feature = "std")]
extern crate std;

pub mod decode;
pub mod dispatch;
pub mod fix;
pub mod framer;
pub mod receiver;
pub mod serial;
pub mod store;

pub use decode::{
    decode, FixQuality, PositionVelocity, SatellitesInView, Sentence, MAX_SENTENCE_LEN,
};
pub use dispatch::IngestStats;
pub use fix::{FixRecord, GpsFix};
pub use framer::{lines, Lines};
pub use receiver::{GpsReceiver, RxPending, RX_BUF_LEN};
pub use serial::{SerialConfig, SerialPort};
pub use store::FixStore;
